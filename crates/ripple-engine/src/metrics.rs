//! Run metrics for the simulation engine.
//!
//! [`RunMetrics`] accumulates counters over every tick of one run, plus
//! the wall-clock time spent inside [`Simulation::step()`](crate::Simulation::step).

/// Counters collected across a run.
///
/// Every field is cumulative; a fresh simulation starts from
/// [`RunMetrics::default()`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Spreading ticks executed.
    pub ticks: u64,
    /// Candidate arrivals produced by the discovery phase.
    pub candidates: u64,
    /// Candidates dropped by another candidate of the same node and tick.
    pub pruned_in_batch: u64,
    /// Batch survivors dropped by a ripple already in the node's frontier.
    pub pruned_by_history: u64,
    /// Ripples created from admitted candidates (the seed is not counted).
    pub admitted: u64,
    /// Ripples removed from the active set.
    pub retired: u64,
    /// Largest active set observed after any tick, seed included.
    pub peak_active: usize,
    /// Wall-clock time spent stepping, in microseconds.
    pub total_us: u64,
}

impl RunMetrics {
    /// Candidates removed by either admission stage.
    pub fn pruned(&self) -> u64 {
        self.pruned_in_batch + self.pruned_by_history
    }
}
