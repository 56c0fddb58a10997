//! Per-node admission history ("omega").
//!
//! The frontier of a node lists every ripple ever admitted there, in
//! admission order. It only grows: admitting a dominating ripple later does
//! not evict earlier entries.

use indexmap::IndexMap;
use ripple_core::{NodeId, RippleId};

/// Mapping `node -> [ripple id]` of everything admitted at each node.
///
/// Nodes appear in the order of their first admission.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    entries: IndexMap<NodeId, Vec<RippleId>>,
}

impl Frontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ripple` as admitted at `node`.
    pub(crate) fn push(&mut self, node: NodeId, ripple: RippleId) {
        self.entries.entry(node).or_default().push(ripple);
    }

    /// Ripples admitted at `node`, oldest first. Empty if none.
    pub fn at(&self, node: NodeId) -> &[RippleId] {
        self.entries.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether at least one ripple has been admitted at `node`.
    pub fn is_reached(&self, node: NodeId) -> bool {
        !self.at(node).is_empty()
    }

    /// Number of nodes with at least one admitted ripple.
    pub fn reached_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterate `(node, ripples)` in first-admission order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[RippleId])> + '_ {
        self.entries.iter().map(|(&n, ids)| (n, ids.as_slice()))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
