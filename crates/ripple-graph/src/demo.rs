//! The nine-node demonstration graph.
//!
//! Unit weights, colours 1 to 4. From [`DEMO_SOURCE`] to
//! [`DEMO_DESTINATION`] the shortest path `0 1 2 5 8` needs four colours;
//! with three the best is `0 1 4 3 6 7 8` (length 6), and with fewer there
//! is no path.

use ripple_core::{Color, NodeId};

use crate::graph::Graph;

/// Source node of [`demo_graph`].
pub const DEMO_SOURCE: NodeId = NodeId(0);
/// Destination node of [`demo_graph`].
pub const DEMO_DESTINATION: NodeId = NodeId(8);

const EDGES: [(u32, u32, u32); 12] = [
    (0, 1, 1),
    (0, 3, 4),
    (1, 2, 2),
    (1, 4, 3),
    (2, 5, 3),
    (3, 6, 1),
    (4, 3, 1),
    (4, 7, 4),
    (5, 4, 1),
    (5, 8, 4),
    (6, 7, 3),
    (7, 8, 2),
];

/// Build the demonstration graph.
///
/// # Examples
///
/// ```
/// use ripple_graph::{demo_graph, Topology, DEMO_DESTINATION};
///
/// let graph = demo_graph();
/// assert_eq!(graph.edge_count(), 12);
/// assert!(graph.links(DEMO_DESTINATION).is_empty());
/// ```
pub fn demo_graph() -> Graph {
    let edges: Vec<_> = EDGES
        .iter()
        .map(|&(from, to, color)| (NodeId(from), NodeId(to), Color(color)))
        .collect();
    Graph::unit_weight(&edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::topology::Topology;

    #[test]
    fn matches_the_builder() {
        let mut builder = Graph::builder();
        for (from, to, color) in EDGES {
            builder.add_edge(NodeId(from), NodeId(to), 1.0, Color(color));
        }
        let built = builder.build().unwrap();
        let demo = demo_graph();
        assert_eq!(demo.nodes().collect::<Vec<_>>(), built.nodes().collect::<Vec<_>>());
        for node in built.nodes() {
            assert_eq!(demo.links(node), built.links(node));
        }
        assert_eq!(demo.edge_count(), 12);
        assert_eq!(demo.node_count(), 9);
        compliance::run_full_compliance(&demo);
    }

    #[test]
    fn unit_weight_keeps_last_edge() {
        let g = Graph::unit_weight(&[
            (NodeId(0), NodeId(1), Color(1)),
            (NodeId(0), NodeId(1), Color(2)),
        ]);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.link(NodeId(0), NodeId(1)).map(|l| l.color), Some(Color(2)));
    }
}
