//! Ripple: a ripple-spreading solver for the k-colour shortest path problem.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all ripple sub-crates. For most users, adding `ripple` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // 0 -> 1 -> 2 is short but uses two colours; 0 -> 2 is long but uses one.
//! let graph = Graph::builder()
//!     .edge(NodeId(0), NodeId(1), 1.0, Color(1))
//!     .edge(NodeId(1), NodeId(2), 1.0, Color(2))
//!     .edge(NodeId(0), NodeId(2), 3.0, Color(1))
//!     .build()
//!     .unwrap();
//!
//! let two = ripple::solve(&graph, NodeId(0), NodeId(2), 2).unwrap();
//! assert_eq!(two.path().unwrap().length, 2.0);
//!
//! let one = ripple::solve(&graph, NodeId(0), NodeId(2), 1).unwrap();
//! assert_eq!(one.path().unwrap().path, vec![NodeId(0), NodeId(2)]);
//!
//! let none = ripple::solve(&graph, NodeId(0), NodeId(2), 0).unwrap();
//! assert_eq!(none, Outcome::Infeasible);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Node, colour and ripple identifiers, `ColorSet` |
//! | [`graph`] | `ripple-graph` | `Graph`, `GraphBuilder`, `Topology`, propagation speed |
//! | [`arena`] | `ripple-arena` | Ripple records, the ripple store and per-node frontiers |
//! | [`engine`] | `ripple-engine` | Dominance, simulation loop, result selection, solver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers and colour sets (`ripple-core`).
pub use ripple_core as types;

/// Graph model and propagation speed (`ripple-graph`).
///
/// Build graphs with [`graph::GraphBuilder`] or
/// [`graph::Graph::from_adjacency`]; the engine reads them through the
/// [`graph::Topology`] trait.
pub use ripple_graph as graph;

/// Ripple storage (`ripple-arena`).
///
/// Mostly useful for inspecting a [`engine::Simulation`] after a run.
pub use ripple_arena as arena;

/// The solver (`ripple-engine`).
///
/// [`engine::Solver`] for one-shot queries, [`engine::Simulation`] for
/// tick-by-tick control.
pub use ripple_engine as engine;

use ripple_core::NodeId;
use ripple_engine::{Outcome, SolveError, Solver, SolverConfig};
use ripple_graph::Topology;

/// Solve one query with the default configuration and colour budget `k`.
///
/// # Errors
///
/// [`SolveError::InvalidGraph`] for an edgeless graph and
/// [`SolveError::UnknownNode`] for endpoints outside the graph. A query
/// without a feasible path returns `Ok(Outcome::Infeasible)`.
pub fn solve(
    topology: &dyn Topology,
    source: NodeId,
    destination: NodeId,
    k: usize,
) -> Result<Outcome, SolveError> {
    let solver = Solver::new(SolverConfig::new(k))?;
    Ok(solver.solve(topology, source, destination)?.outcome)
}

/// Common imports for typical ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Identifiers
    pub use ripple_core::{Color, ColorSet, NodeId, RippleId, TickId};

    // Graph
    pub use ripple_graph::{Graph, GraphBuilder, GraphError, Link, Topology};

    // Engine
    pub use ripple_engine::{
        ConfigError, DominanceRule, ExecutionMode, Outcome, PathResult, RunMetrics, SimState,
        Simulation, SolveError, SolveReport, Solver, SolverConfig,
    };
}
