//! Adjacency-list graph and its builder.

use indexmap::IndexMap;
use ripple_core::{Color, NodeId};

use crate::error::GraphError;
use crate::link::Link;
use crate::topology::Topology;

/// An immutable, validated, edge-coloured directed graph.
///
/// Nodes and each node's outgoing links keep their insertion order, which
/// makes every traversal (and therefore every simulation) deterministic.
///
/// # Examples
///
/// ```
/// use ripple_core::{Color, NodeId};
/// use ripple_graph::{Graph, Topology};
///
/// let graph = Graph::builder()
///     .edge(NodeId(0), NodeId(1), 1.0, Color(1))
///     .edge(NodeId(1), NodeId(2), 2.0, Color(2))
///     .build()
///     .unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// // Sinks exist even without outgoing edges.
/// assert!(graph.contains(NodeId(2)));
/// assert!(graph.links(NodeId(2)).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: IndexMap<NodeId, Vec<Link>>,
    edge_count: usize,
}

impl Graph {
    /// Start an empty [`GraphBuilder`].
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Build a graph from an adjacency mapping
    /// `node -> [(neighbor, weight, color)]`.
    ///
    /// Neighbors that never appear as keys are registered as sinks. A
    /// neighbor listed twice for the same node keeps the last definition.
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeId, N)>,
        N: IntoIterator<Item = (NodeId, f64, Color)>,
    {
        let mut builder = GraphBuilder::default();
        for (node, neighbors) in adjacency {
            builder.add_node(node);
            for (to, weight, color) in neighbors {
                builder.add_edge(node, to, weight, color);
            }
        }
        builder.build()
    }

    /// The link `from -> to`, if present.
    pub fn link(&self, from: NodeId, to: NodeId) -> Option<&Link> {
        self.links(from).iter().find(|l| l.to == to)
    }

    /// A graph of unit-weight `(from, to, color)` edges. Unit weights need
    /// no validation, so this cannot fail. Same registration order and
    /// last-edge-wins rule as [`GraphBuilder`].
    pub(crate) fn unit_weight(edges: &[(NodeId, NodeId, Color)]) -> Self {
        let mut adjacency: IndexMap<NodeId, Vec<Link>> = IndexMap::new();
        for &(from, to, color) in edges {
            let links = adjacency.entry(from).or_default();
            match links.iter_mut().find(|l| l.to == to) {
                Some(link) => *link = Link::new(to, 1.0, color),
                None => links.push(Link::new(to, 1.0, color)),
            }
            adjacency.entry(to).or_default();
        }
        let edge_count = adjacency.values().map(Vec::len).sum();
        Self {
            adjacency,
            edge_count,
        }
    }
}

impl Topology for Graph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn links(&self, node: NodeId) -> &[Link] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.adjacency.keys().copied())
    }
}

/// Incremental builder for [`Graph`].
///
/// Weights are only validated in [`build()`](GraphBuilder::build), so edges
/// can be added in any order and overwritten freely beforehand.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    adjacency: IndexMap<NodeId, IndexMap<NodeId, (f64, Color)>>,
}

impl GraphBuilder {
    /// Register a node with no edges (a no-op if it already exists).
    pub fn add_node(&mut self, node: NodeId) -> &mut Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Add the directed edge `from -> to`.
    ///
    /// Both endpoints are registered. Redefining an existing `(from, to)`
    /// pair replaces its weight and colour but keeps its position.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64, color: Color) -> &mut Self {
        self.adjacency
            .entry(from)
            .or_default()
            .insert(to, (weight, color));
        self.adjacency.entry(to).or_default();
        self
    }

    /// By-value form of [`add_node`](Self::add_node) for chaining.
    pub fn node(mut self, node: NodeId) -> Self {
        self.add_node(node);
        self
    }

    /// By-value form of [`add_edge`](Self::add_edge) for chaining.
    pub fn edge(mut self, from: NodeId, to: NodeId, weight: f64, color: Color) -> Self {
        self.add_edge(from, to, weight, color);
        self
    }

    /// Validate every weight and freeze the graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonFiniteWeight`] for NaN or infinite weights,
    /// [`GraphError::NonPositiveWeight`] for weights `<= 0`. The first
    /// offending edge in insertion order is reported.
    pub fn build(&self) -> Result<Graph, GraphError> {
        let mut adjacency = IndexMap::with_capacity(self.adjacency.len());
        let mut edge_count = 0;
        for (&from, neighbors) in &self.adjacency {
            let mut links = Vec::with_capacity(neighbors.len());
            for (&to, &(weight, color)) in neighbors {
                check_weight(from, to, weight)?;
                links.push(Link::new(to, weight, color));
            }
            edge_count += links.len();
            adjacency.insert(from, links);
        }
        Ok(Graph {
            adjacency,
            edge_count,
        })
    }
}

/// Reject weights that would stall or corrupt propagation.
pub(crate) fn check_weight(from: NodeId, to: NodeId, weight: f64) -> Result<(), GraphError> {
    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight { from, to, weight });
    }
    if weight <= 0.0 {
        return Err(GraphError::NonPositiveWeight { from, to, weight });
    }
    Ok(())
}
