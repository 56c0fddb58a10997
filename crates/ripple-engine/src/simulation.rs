//! The simulation context and its tick loop.
//!
//! [`Simulation`] owns every piece of mutable run state: the ripple arena,
//! the clock, the state machine and the metrics. Nothing is global, so
//! independent simulations can run side by side on different threads.
//!
//! Each [`step()`](Simulation::step) is one iteration of the loop:
//!
//! 1. an empty active set ends the run in [`SimState::Failure`];
//! 2. a reached destination ends it in [`SimState::Success`];
//! 3. every active ripple is swept for the edges its radius crosses when it
//!    grows by `v` (discovery);
//! 4. the arrivals of each node are filtered against the frontier;
//! 5. the tick is committed: the clock advances, every active radius grows
//!    by `v`, exhausted ripples retire and the survivors are admitted.
//!
//! Steps 3 and 4 only read the run state, and step 5 starts after every
//! sweep of the tick has been collected. A tick that fails leaves the
//! simulation exactly as it was before the tick.

use std::sync::Arc;
use std::time::Instant;

use indexmap::IndexMap;
use rayon::prelude::*;
use ripple_arena::{Arrival, Ripple, RippleStore};
use ripple_core::{NodeId, RippleId, TickId};
use ripple_graph::{propagation_speed, Topology};
use tracing::{debug, trace};

use crate::config::{build_pool, SolverConfig};
use crate::discover::{discover, SweepContext};
use crate::dominance::{select_admissible, Admissible};
use crate::error::{NodeRole, SolveError};
use crate::metrics::RunMetrics;
use crate::select::{select_shortest, Outcome};

// ── SimState ─────────────────────────────────────────────────────

/// Where the state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    /// Still spreading.
    Running,
    /// The destination frontier is non-empty.
    Success,
    /// The active set emptied first.
    Failure,
}

impl SimState {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

// ── Simulation ───────────────────────────────────────────────────

/// One ripple-spreading run over a borrowed topology.
///
/// # Examples
///
/// ```
/// use ripple_core::{Color, NodeId};
/// use ripple_engine::{Outcome, SimState, Simulation, SolverConfig};
/// use ripple_graph::Graph;
///
/// let graph = Graph::builder()
///     .edge(NodeId(0), NodeId(1), 1.0, Color(1))
///     .build()
///     .unwrap();
/// let mut sim = Simulation::new(&graph, NodeId(0), NodeId(1), SolverConfig::new(1)).unwrap();
/// assert_eq!(sim.step().unwrap(), SimState::Running);
/// match sim.run().unwrap() {
///     Outcome::Found(p) => assert_eq!(p.path, vec![NodeId(0), NodeId(1)]),
///     Outcome::Infeasible => unreachable!(),
/// }
/// ```
pub struct Simulation<'g> {
    topology: &'g dyn Topology,
    source: NodeId,
    destination: NodeId,
    speed: f64,
    config: SolverConfig,
    pool: Option<Arc<rayon::ThreadPool>>,
    store: RippleStore,
    clock: TickId,
    state: SimState,
    metrics: RunMetrics,
}

impl<'g> Simulation<'g> {
    /// Validate the inputs and seed the source ripple.
    ///
    /// Checks run in this order: configuration, graph (propagation speed),
    /// source, destination. A parallel execution mode builds its own
    /// worker pool; use a [`Solver`](crate::Solver) to share one across runs.
    ///
    /// # Errors
    ///
    /// [`SolveError::Config`], [`SolveError::InvalidGraph`] or
    /// [`SolveError::UnknownNode`].
    pub fn new(
        topology: &'g dyn Topology,
        source: NodeId,
        destination: NodeId,
        config: SolverConfig,
    ) -> Result<Self, SolveError> {
        config.validate()?;
        let speed = Self::check_inputs(topology, source, destination)?;
        let pool = build_pool(config.execution)?;
        Ok(Self::seeded(topology, source, destination, speed, config, pool))
    }

    /// Like [`new()`](Self::new), reusing an already built pool.
    pub(crate) fn with_pool(
        topology: &'g dyn Topology,
        source: NodeId,
        destination: NodeId,
        config: SolverConfig,
        pool: Option<Arc<rayon::ThreadPool>>,
    ) -> Result<Self, SolveError> {
        config.validate()?;
        let speed = Self::check_inputs(topology, source, destination)?;
        Ok(Self::seeded(topology, source, destination, speed, config, pool))
    }

    fn check_inputs(
        topology: &dyn Topology,
        source: NodeId,
        destination: NodeId,
    ) -> Result<f64, SolveError> {
        let speed = propagation_speed(topology)?;
        if !topology.contains(source) {
            return Err(SolveError::UnknownNode {
                node: source,
                role: NodeRole::Source,
            });
        }
        if !topology.contains(destination) {
            return Err(SolveError::UnknownNode {
                node: destination,
                role: NodeRole::Destination,
            });
        }
        Ok(speed)
    }

    fn seeded(
        topology: &'g dyn Topology,
        source: NodeId,
        destination: NodeId,
        speed: f64,
        config: SolverConfig,
        pool: Option<Arc<rayon::ThreadPool>>,
    ) -> Self {
        let mut store = match config.max_ripples {
            Some(limit) => RippleStore::with_limit(limit),
            None => RippleStore::new(),
        };
        store.seed(source);
        debug!(
            %source,
            %destination,
            speed,
            k = config.max_colors,
            rule = ?config.dominance,
            mode = ?config.execution,
            nodes = topology.node_count(),
            edges = topology.edge_count(),
            "simulation seeded"
        );
        Self {
            topology,
            source,
            destination,
            speed,
            config,
            pool,
            store,
            clock: TickId::default(),
            state: SimState::Running,
            metrics: RunMetrics {
                peak_active: 1,
                ..RunMetrics::default()
            },
        }
    }

    /// Execute one iteration of the loop and return the resulting state.
    ///
    /// Calling `step()` after a terminal state is a no-op that returns the
    /// same state again.
    ///
    /// # Errors
    ///
    /// [`SolveError::TickLimitExceeded`] if `max_ticks` ticks have run and
    /// the simulation is still running; [`SolveError::Arena`] if the tick
    /// would admit more ripples than the arena holds. A failed tick changes
    /// nothing: the simulation stays in [`SimState::Running`] with the
    /// clock, ripples and metrics of the previous tick.
    pub fn step(&mut self) -> Result<SimState, SolveError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        let tick_start = Instant::now();

        if self.store.active().is_empty() {
            return Ok(self.finish(SimState::Failure, tick_start));
        }
        if self.store.frontier().is_reached(self.destination) {
            return Ok(self.finish(SimState::Success, tick_start));
        }
        if let Some(limit) = self.config.max_ticks {
            if self.clock.0 >= limit {
                return Err(SolveError::TickLimitExceeded { limit });
            }
        }

        // Discovery, read-only.
        let pool = self.pool.as_deref();
        let ctx = SweepContext {
            topology: self.topology,
            store: &self.store,
            speed: self.speed,
            max_colors: self.config.max_colors,
        };
        let sweeps = discover(&ctx, pool);

        let mut retired: Vec<RippleId> = Vec::new();
        let mut batches: IndexMap<NodeId, Vec<Arrival>> = IndexMap::new();
        let mut candidates = 0u64;
        for sweep in sweeps {
            if sweep.exhausted {
                retired.push(sweep.ripple);
            }
            for arrival in sweep.arrivals {
                candidates += 1;
                batches.entry(arrival.node).or_default().push(arrival);
            }
        }

        // Per-node admissibility against the frontier as it stood before
        // this tick. Nodes are independent of each other.
        let rule = self.config.dominance;
        let store = &self.store;
        let filter = |(node, batch): (NodeId, Vec<Arrival>)| {
            select_admissible(rule, batch, store.frontier().at(node), store)
        };
        let filtered: Vec<Admissible> = match pool {
            None => batches.into_iter().map(filter).collect(),
            Some(pool) => {
                let batches: Vec<(NodeId, Vec<Arrival>)> = batches.into_iter().collect();
                pool.install(|| batches.into_par_iter().map(filter).collect())
            }
        };
        let survivors: usize = filtered.iter().map(|f| f.admitted.len()).sum();
        self.store.ensure_capacity(survivors)?;

        // Commit.
        self.clock = self.clock.next();
        self.store.advance_active(self.speed);
        self.store.retire(&retired);
        for outcome in filtered {
            self.metrics.pruned_in_batch += outcome.pruned_in_batch as u64;
            self.metrics.pruned_by_history += outcome.pruned_by_history as u64;
            for arrival in outcome.admitted {
                self.store.admit(arrival, self.clock)?;
            }
        }
        let admitted = survivors as u64;

        self.metrics.ticks += 1;
        self.metrics.candidates += candidates;
        self.metrics.admitted += admitted;
        self.metrics.retired += retired.len() as u64;
        self.metrics.peak_active = self.metrics.peak_active.max(self.store.active().len());
        self.metrics.total_us += tick_start.elapsed().as_micros() as u64;

        trace!(
            tick = self.clock.0,
            active = self.store.active().len(),
            candidates,
            admitted,
            retired = retired.len(),
            "tick"
        );
        Ok(SimState::Running)
    }

    fn finish(&mut self, state: SimState, tick_start: Instant) -> SimState {
        self.state = state;
        self.metrics.total_us += tick_start.elapsed().as_micros() as u64;
        debug!(
            ?state,
            ticks = self.clock.0,
            ripples = self.store.len(),
            reached = self.store.frontier().at(self.destination).len(),
            "simulation finished"
        );
        state
    }

    /// Step until a terminal state and select the result.
    ///
    /// # Errors
    ///
    /// Anything [`step()`](Self::step) reports.
    pub fn run(&mut self) -> Result<Outcome, SolveError> {
        while !self.step()?.is_terminal() {}
        Ok(self.outcome())
    }

    /// The result for the current state: the shortest destination ripple
    /// on success, `Infeasible` otherwise.
    pub fn outcome(&self) -> Outcome {
        match self.state {
            SimState::Success => select_shortest(&self.store, self.destination)
                .map_or(Outcome::Infeasible, Outcome::Found),
            SimState::Running | SimState::Failure => Outcome::Infeasible,
        }
    }

    /// Current state.
    pub fn state(&self) -> SimState {
        self.state
    }

    /// Ticks executed so far.
    pub fn clock(&self) -> TickId {
        self.clock
    }

    /// Propagation speed `v` of this run.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The start node.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The target node.
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    /// Configuration of this run.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Ripples admitted at `node` so far, in admission order.
    pub fn frontier(&self, node: NodeId) -> &[RippleId] {
        self.store.frontier().at(node)
    }

    /// The record of ripple `id`, if it exists.
    pub fn ripple(&self, id: RippleId) -> Option<&Ripple> {
        self.store.get(id)
    }

    /// Node sequence from the source to `id`'s epicenter.
    pub fn path(&self, id: RippleId) -> Vec<NodeId> {
        self.store.path(id)
    }

    /// The whole ripple arena.
    pub fn store(&self) -> &RippleStore {
        &self.store
    }

    /// Counters accumulated so far.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }
}
