//! The `Topology` trait: read-only adjacency access for the engine.

use crate::link::Link;
use ripple_core::NodeId;

/// Read-only view of an edge-coloured directed graph.
///
/// The simulation engine only ever reads the graph through this trait, so
/// alternative adjacency backends can be plugged in without touching the
/// engine.
///
/// # Contract
///
/// - `links(node)` returns outgoing edges in a deterministic order; the
///   engine's tie-breaking (and hence its output) follows that order.
/// - Every `Link::to` must itself be a node of the topology.
/// - At most one link per `(node, to)` pair.
/// - Weights must be finite and strictly positive.
///
/// # Thread Safety
///
/// `Sync` is required because parallel discovery shares `&dyn Topology`
/// across worker threads.
pub trait Topology: Send + Sync {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Whether `node` belongs to the graph.
    fn contains(&self, node: NodeId) -> bool;

    /// Outgoing edges of `node`. Empty for unknown nodes and sinks.
    fn links(&self, node: NodeId) -> &[Link];

    /// All nodes in deterministic order.
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;
}
