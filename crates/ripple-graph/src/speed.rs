//! Propagation speed estimation.
//!
//! Every ripple advances by the same distance `v` per tick, with `v` equal
//! to the smallest edge weight. Because no edge is shorter than `v`, an
//! arrival can never fall strictly between two ticks' sweeps, so each
//! wavefront/edge crossing is observed in exactly one tick.

use crate::error::GraphError;
use crate::graph::check_weight;
use crate::topology::Topology;

/// Compute the global propagation speed `v = min(edge weight)`.
///
/// # Errors
///
/// [`GraphError::NoEdges`] if the topology has no edges. Weight errors are
/// reported for topologies that do not uphold the positive-weight contract
/// (a built [`Graph`](crate::Graph) always does).
///
/// # Examples
///
/// ```
/// use ripple_core::{Color, NodeId};
/// use ripple_graph::{propagation_speed, Graph};
///
/// let graph = Graph::builder()
///     .edge(NodeId(0), NodeId(1), 3.0, Color(1))
///     .edge(NodeId(1), NodeId(2), 0.5, Color(1))
///     .build()
///     .unwrap();
/// assert_eq!(propagation_speed(&graph).unwrap(), 0.5);
/// ```
pub fn propagation_speed(topology: &dyn Topology) -> Result<f64, GraphError> {
    let mut speed: Option<f64> = None;
    for node in topology.nodes() {
        for link in topology.links(node) {
            check_weight(node, link.to, link.weight)?;
            speed = Some(speed.map_or(link.weight, |v| v.min(link.weight)));
        }
    }
    speed.ok_or(GraphError::NoEdges)
}
