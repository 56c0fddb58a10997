//! Reusable solver front end.
//!
//! [`Solver`] validates a [`SolverConfig`] once, builds the worker pool
//! once (parallel mode), and then answers any number of queries. Each
//! query gets its own [`Simulation`]; nothing leaks between runs.
//!
//! # Ownership model
//!
//! `Solver` is [`Send`] and [`Sync`]: queries take `&self`, so one solver
//! can serve several threads. A `Simulation` borrows its topology and is
//! [`Send`], so a run can be moved to another thread but not shared.

use std::sync::Arc;

use ripple_core::NodeId;
use ripple_graph::Topology;

use crate::config::{build_pool, ConfigError, SolverConfig};
use crate::error::SolveError;
use crate::metrics::RunMetrics;
use crate::select::Outcome;
use crate::simulation::Simulation;

// Compile-time assertion: Solver is Send + Sync, Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Solver>();
        assert_send::<Simulation<'static>>();
    }
};

// ── SolveReport ─────────────────────────────────────────────────

/// Result of a completed [`Solver::solve()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveReport {
    /// The path found, or `Infeasible`.
    pub outcome: Outcome,
    /// Counters of the run that produced it.
    pub metrics: RunMetrics,
}

// ── Solver ──────────────────────────────────────────────────────

/// Ripple-spreading solver for the k-colour shortest path problem.
///
/// # Examples
///
/// ```
/// use ripple_core::{Color, NodeId};
/// use ripple_engine::{Solver, SolverConfig};
/// use ripple_graph::Graph;
///
/// let graph = Graph::builder()
///     .edge(NodeId(0), NodeId(1), 2.0, Color(1))
///     .edge(NodeId(1), NodeId(2), 2.0, Color(2))
///     .edge(NodeId(0), NodeId(2), 5.0, Color(1))
///     .build()
///     .unwrap();
///
/// let solver = Solver::new(SolverConfig::new(1)).unwrap();
/// let report = solver.solve(&graph, NodeId(0), NodeId(2)).unwrap();
/// let path = report.outcome.path().unwrap();
/// assert_eq!(path.path, vec![NodeId(0), NodeId(2)]);
/// assert_eq!(path.length, 5.0);
/// ```
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Solver {
    /// Validate `config` and build its worker pool, if any.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pool = build_pool(config.execution)?;
        Ok(Self { config, pool })
    }

    /// The configuration queries run with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Worker threads available to each run (1 in sequential mode).
    pub fn workers(&self) -> usize {
        self.pool
            .as_ref()
            .map_or(1, |pool| pool.current_num_threads())
    }

    /// Prepare a simulation for one query without running it.
    ///
    /// Useful for stepping through a run tick by tick.
    pub fn simulation<'g>(
        &self,
        topology: &'g dyn Topology,
        source: NodeId,
        destination: NodeId,
    ) -> Result<Simulation<'g>, SolveError> {
        Simulation::with_pool(
            topology,
            source,
            destination,
            self.config.clone(),
            self.pool.clone(),
        )
    }

    /// Run one query to completion.
    ///
    /// # Errors
    ///
    /// Input validation errors ([`SolveError::InvalidGraph`],
    /// [`SolveError::UnknownNode`]) are reported before any tick runs.
    /// [`SolveError::TickLimitExceeded`] if `max_ticks` is set and reached.
    /// An infeasible query is *not* an error.
    pub fn solve(
        &self,
        topology: &dyn Topology,
        source: NodeId,
        destination: NodeId,
    ) -> Result<SolveReport, SolveError> {
        let mut sim = self.simulation(topology, source, destination)?;
        let outcome = sim.run()?;
        Ok(SolveReport {
            outcome,
            metrics: sim.metrics().clone(),
        })
    }
}
