//! Topology trait compliance test helpers.
//!
//! These functions verify that a `Topology` implementation satisfies the
//! invariants the engine relies on. Reused by every backend test module.

use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert that every link head is itself a node of the topology.
pub fn assert_heads_are_nodes(topology: &dyn Topology) {
    for node in topology.nodes() {
        for link in topology.links(node) {
            assert!(
                topology.contains(link.to),
                "link {node} -> {} points outside the topology",
                link.to
            );
        }
    }
}

/// Assert at most one link per `(node, to)` pair.
pub fn assert_no_parallel_links(topology: &dyn Topology) {
    for node in topology.nodes() {
        let mut seen = IndexSet::new();
        for link in topology.links(node) {
            assert!(
                seen.insert(link.to),
                "parallel links {node} -> {}",
                link.to
            );
        }
    }
}

/// Assert every weight is finite and strictly positive.
pub fn assert_weights_positive(topology: &dyn Topology) {
    for node in topology.nodes() {
        for link in topology.links(node) {
            assert!(
                link.weight.is_finite() && link.weight > 0.0,
                "link {node} -> {} has weight {}",
                link.to,
                link.weight
            );
        }
    }
}

/// Assert that `node_count`, `edge_count` and `nodes()` agree, and that
/// node enumeration is stable across calls.
pub fn assert_counts_consistent(topology: &dyn Topology) {
    let first: Vec<_> = topology.nodes().collect();
    let second: Vec<_> = topology.nodes().collect();
    assert_eq!(first, second, "node order is not deterministic");
    assert_eq!(first.len(), topology.node_count());
    let unique: IndexSet<_> = first.iter().copied().collect();
    assert_eq!(unique.len(), first.len(), "duplicate nodes in enumeration");
    let edges: usize = first.iter().map(|&n| topology.links(n).len()).sum();
    assert_eq!(edges, topology.edge_count());
}

/// Run every compliance check.
pub fn run_full_compliance(topology: &dyn Topology) {
    assert_heads_are_nodes(topology);
    assert_no_parallel_links(topology);
    assert_weights_positive(topology);
    assert_counts_consistent(topology);
}
