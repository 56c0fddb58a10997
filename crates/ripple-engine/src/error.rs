//! Errors surfaced by the solver.
//!
//! A run that finds no path is *not* an error: it ends with
//! [`Outcome::Infeasible`](crate::Outcome::Infeasible). The variants here
//! cover inputs that cannot be simulated at all and internal limits.

use std::error::Error;
use std::fmt;

use ripple_arena::ArenaError;
use ripple_core::NodeId;
use ripple_graph::GraphError;

use crate::config::ConfigError;

/// Which endpoint of a query a [`SolveError::UnknownNode`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    /// The start node.
    Source,
    /// The target node.
    Destination,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Errors from constructing or running a simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The graph cannot be simulated (no edges, or a bad weight).
    InvalidGraph(GraphError),
    /// The source or destination is not a node of the graph.
    UnknownNode {
        /// The missing node.
        node: NodeId,
        /// Which endpoint it was given as.
        role: NodeRole,
    },
    /// The solver configuration is invalid.
    Config(ConfigError),
    /// The ripple arena could not admit a new ripple.
    Arena(ArenaError),
    /// The configured tick limit was reached before the run terminated.
    TickLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGraph(e) => write!(f, "invalid graph: {e}"),
            Self::UnknownNode { node, role } => {
                write!(f, "{role} node {node} is not in the graph")
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::TickLimitExceeded { limit } => {
                write!(f, "simulation still running after {limit} ticks")
            }
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGraph(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for SolveError {
    fn from(e: GraphError) -> Self {
        Self::InvalidGraph(e)
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for SolveError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
