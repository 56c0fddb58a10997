//! Builder semantics against a plain map model: arbitrary edge lists,
//! including repeated `(from, to)` pairs, must produce exactly the
//! last-defined edge per pair in first-insertion position.

use std::collections::HashMap;

use proptest::prelude::*;
use ripple_core::{Color, NodeId};
use ripple_graph::{propagation_speed, Graph, Topology};

fn edge_list() -> impl Strategy<Value = Vec<(u32, u32, u32, u32)>> {
    proptest::collection::vec((0u32..6, 0u32..6, 1u32..10, 0u32..4), 1..30)
}

proptest! {
    #[test]
    fn last_definition_wins(edges in edge_list()) {
        let mut builder = Graph::builder();
        let mut model: HashMap<(u32, u32), (f64, u32)> = HashMap::new();
        for &(from, to, w, c) in &edges {
            builder.add_edge(NodeId(from), NodeId(to), w as f64, Color(c));
            model.insert((from, to), (w as f64, c));
        }
        let graph = builder.build().unwrap();

        prop_assert_eq!(graph.edge_count(), model.len());
        for (&(from, to), &(w, c)) in &model {
            let link = graph.link(NodeId(from), NodeId(to)).unwrap();
            prop_assert_eq!(link.weight, w);
            prop_assert_eq!(link.color, Color(c));
        }
    }

    #[test]
    fn links_keep_first_insertion_position(edges in edge_list()) {
        let mut builder = Graph::builder();
        let mut first_seen: Vec<(u32, u32)> = Vec::new();
        for &(from, to, w, c) in &edges {
            builder.add_edge(NodeId(from), NodeId(to), w as f64, Color(c));
            if !first_seen.contains(&(from, to)) {
                first_seen.push((from, to));
            }
        }
        let graph = builder.build().unwrap();
        for node in graph.nodes() {
            let expected: Vec<NodeId> = first_seen
                .iter()
                .filter(|(f, _)| NodeId(*f) == node)
                .map(|&(_, t)| NodeId(t))
                .collect();
            let actual: Vec<NodeId> = graph.links(node).iter().map(|l| l.to).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn speed_is_min_over_surviving_edges(edges in edge_list()) {
        let mut builder = Graph::builder();
        let mut model: HashMap<(u32, u32), f64> = HashMap::new();
        for &(from, to, w, c) in &edges {
            builder.add_edge(NodeId(from), NodeId(to), w as f64, Color(c));
            model.insert((from, to), w as f64);
        }
        let graph = builder.build().unwrap();
        let expected = model.values().copied().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(propagation_speed(&graph).unwrap(), expected);
    }
}
