//! Outgoing edge records.

use ripple_core::{Color, NodeId};

/// One outgoing edge of a node: its head, weight and colour.
///
/// The tail is implicit: a `Link` is always reached through the node it
/// leaves, via [`Topology::links`](crate::Topology::links).
///
/// # Examples
///
/// ```
/// use ripple_core::{Color, NodeId};
/// use ripple_graph::Link;
///
/// let link = Link::new(NodeId(3), 2.5, Color(1));
/// assert_eq!(link.to, NodeId(3));
/// assert_eq!(link.weight, 2.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Head node.
    pub to: NodeId,
    /// Traversal cost. Always finite and strictly positive in a built graph.
    pub weight: f64,
    /// Edge label counted against the colour budget.
    pub color: Color,
}

impl Link {
    /// Create a link record.
    pub fn new(to: NodeId, weight: f64, color: Color) -> Self {
        Self { to, weight, color }
    }
}
