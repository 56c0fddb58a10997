//! Error types for graph construction and speed estimation.

use ripple_core::NodeId;
use std::fmt;

/// Errors arising from graph construction or propagation-speed estimation.
///
/// Every variant is an "invalid graph" condition: the simulation cannot be
/// started on such a graph because the propagation speed would be undefined
/// or progress could stall.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The graph has no edges, so no propagation speed can be derived.
    NoEdges,
    /// An edge weight is zero or negative.
    NonPositiveWeight {
        /// Tail of the offending edge.
        from: NodeId,
        /// Head of the offending edge.
        to: NodeId,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge weight is NaN or infinite.
    NonFiniteWeight {
        /// Tail of the offending edge.
        from: NodeId,
        /// Head of the offending edge.
        to: NodeId,
        /// The rejected weight.
        weight: f64,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEdges => write!(f, "graph has no edges; propagation speed is undefined"),
            Self::NonPositiveWeight { from, to, weight } => {
                write!(f, "edge {from} -> {to} has non-positive weight {weight}")
            }
            Self::NonFiniteWeight { from, to, weight } => {
                write!(f, "edge {from} -> {to} has non-finite weight {weight}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
