//! Ripple-spreading simulation engine for the k-colour shortest path
//! problem.
//!
//! Given a directed graph whose edges carry a positive weight and a colour,
//! the engine finds a short path from a source to a destination that uses
//! at most `k` distinct colours. Ripples spread outward from the source at
//! a uniform speed equal to the smallest edge weight; each time a wavefront
//! crosses an edge a new ripple may start at the far node, carrying the
//! path length and colour set so far. Dominated ripples are pruned per
//! node, and the first tick that reaches the destination ends the search.
//!
//! The main entry points are [`Solver`] for one-shot queries and
//! [`Simulation`] for tick-by-tick control. Both are deterministic:
//! sequential and [`ExecutionMode::Parallel`] runs produce identical
//! ripples and results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod discover;
pub mod dominance;
pub mod error;
pub mod metrics;
pub mod select;
pub mod simulation;
pub mod solver;

pub use config::{ConfigError, ExecutionMode, SolverConfig};
pub use dominance::{dominated, select_admissible, Admissible, DominanceRule, Objectives};
pub use error::{NodeRole, SolveError};
pub use metrics::RunMetrics;
pub use select::{select_shortest, Outcome, PathResult};
pub use simulation::{SimState, Simulation};
pub use solver::{SolveReport, Solver};
