//! Exhaustive reference solver.
//!
//! Enumerates every simple path by depth-first search with a length bound.
//! Exponential, so only for the small graphs property tests generate.

use ripple_core::{ColorSet, NodeId};
use ripple_graph::{Graph, Topology};

/// An optimal path found by exhaustive search.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferencePath {
    pub path: Vec<NodeId>,
    pub colors: ColorSet,
    pub length: f64,
}

/// The shortest simple path `source -> destination` using at most
/// `max_colors` distinct colours, or `None` if there is none.
///
/// Among equal lengths the first one found in link order is returned.
pub fn shortest_within_budget(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    max_colors: usize,
) -> Option<ReferencePath> {
    if !graph.contains(source) || !graph.contains(destination) {
        return None;
    }
    let mut search = Search {
        graph,
        destination,
        max_colors,
        path: vec![source],
        best: None,
    };
    search.visit(source, 0.0, &ColorSet::new());
    search.best
}

struct Search<'a> {
    graph: &'a Graph,
    destination: NodeId,
    max_colors: usize,
    path: Vec<NodeId>,
    best: Option<ReferencePath>,
}

impl Search<'_> {
    fn visit(&mut self, node: NodeId, length: f64, colors: &ColorSet) {
        if self.best.as_ref().is_some_and(|b| length >= b.length) {
            return;
        }
        if node == self.destination {
            self.best = Some(ReferencePath {
                path: self.path.clone(),
                colors: colors.clone(),
                length,
            });
            return;
        }
        for link in self.graph.links(node) {
            if self.path.contains(&link.to) || colors.len_with(link.color) > self.max_colors {
                continue;
            }
            self.path.push(link.to);
            self.visit(link.to, length + link.weight, &colors.with(link.color));
            self.path.pop();
        }
    }
}

/// Length and colour set of `path` if every consecutive pair is an edge
/// of `graph`.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Option<(f64, ColorSet)> {
    let mut length = 0.0;
    let mut colors = ColorSet::new();
    for pair in path.windows(2) {
        let link = graph.link(pair[0], pair[1])?;
        length += link.weight;
        colors.insert(link.color);
    }
    Some((length, colors))
}
