//! Reusable graph fixtures.
//!
//! - [`demo_graph`]: the nine-node demonstration graph, re-exported from
//!   `ripple-graph`.
//! - [`line_graph`]: a single chain, for timing and retirement checks.
//! - [`grid_graph`]: a right/down lattice with cycling colours (benchmarks).
//! - [`random_graph`]: seeded random digraphs with weights on a fixed step.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ripple_core::{Color, NodeId};
use ripple_graph::{Graph, GraphBuilder};

pub use ripple_graph::{demo_graph, DEMO_DESTINATION, DEMO_SOURCE};

/// `0 -> 1 -> ... -> len`, every edge with the same weight and colour.
pub fn line_graph(len: u32, weight: f64, color: Color) -> Graph {
    let mut builder = GraphBuilder::default();
    builder.add_node(NodeId(0));
    for i in 0..len {
        builder.add_edge(NodeId(i), NodeId(i + 1), weight, color);
    }
    builder.build().expect("line weight must be positive")
}

/// A `width x height` lattice with edges pointing right and down.
///
/// Node `(x, y)` is `NodeId(y * width + x)`. Edge weights cycle through
/// 1, 2, 3 and colours through `1..=colors`, so many equal-length routes
/// differ only in their colour sets.
pub fn grid_graph(width: u32, height: u32, colors: u32) -> Graph {
    let colors = colors.max(1);
    let id = |x: u32, y: u32| NodeId(y * width + x);
    let mut builder = GraphBuilder::default();
    let mut serial = 0u32;
    for y in 0..height {
        for x in 0..width {
            builder.add_node(id(x, y));
            let mut link = |to: NodeId| {
                let weight = f64::from(serial % 3 + 1);
                let color = Color(serial % colors + 1);
                builder.add_edge(id(x, y), to, weight, color);
                serial += 1;
            };
            if x + 1 < width {
                link(id(x + 1, y));
            }
            if y + 1 < height {
                link(id(x, y + 1));
            }
        }
    }
    builder.build().expect("grid weights are positive")
}

/// Shape of a [`random_graph`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomGraphParams {
    /// Number of nodes, `0..nodes`. At least 2.
    pub nodes: u32,
    /// Probability of each ordered pair `(a, b)`, `a != b`, being an edge.
    pub density: f64,
    /// Colours are drawn from `1..=colors`.
    pub colors: u32,
    /// Weights are drawn from `1..=max_weight` and multiplied by
    /// `weight_step`.
    pub max_weight: u32,
    /// Spacing of the weight grid. `1.0` gives integer weights, whose sums
    /// are exact; a step such as `0.1` or `0.3` gives weights that are not
    /// representable in binary. Non-positive or non-finite steps fall back
    /// to `1.0`.
    pub weight_step: f64,
}

impl Default for RandomGraphParams {
    fn default() -> Self {
        Self {
            nodes: 8,
            density: 0.3,
            colors: 3,
            max_weight: 4,
            weight_step: 1.0,
        }
    }
}

/// A seeded random digraph.
///
/// The graph always has at least the edge `0 -> 1`, so it is never
/// edgeless.
pub fn random_graph(seed: u64, params: &RandomGraphParams) -> Graph {
    let nodes = params.nodes.max(2);
    let density = params.density.clamp(0.0, 1.0);
    let colors = params.colors.max(1);
    let max_weight = params.max_weight.max(1);
    let step = if params.weight_step.is_finite() && params.weight_step > 0.0 {
        params.weight_step
    } else {
        1.0
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = GraphBuilder::default();
    let mut any = false;
    for from in 0..nodes {
        builder.add_node(NodeId(from));
        for to in 0..nodes {
            if from == to || !rng.random_bool(density) {
                continue;
            }
            let weight = f64::from(rng.random_range(1..=max_weight)) * step;
            let color = Color(rng.random_range(1..=colors));
            builder.add_edge(NodeId(from), NodeId(to), weight, color);
            any = true;
        }
    }
    if !any {
        builder.add_edge(NodeId(0), NodeId(1), step, Color(1));
    }
    builder.build().expect("random weights are positive multiples of the step")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_graph::Topology;

    #[test]
    fn line_graph_shape() {
        let g = line_graph(4, 2.0, Color(7));
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(line_graph(0, 1.0, Color(1)).node_count(), 1);
    }

    #[test]
    fn grid_graph_shape() {
        let g = grid_graph(3, 2, 2);
        assert_eq!(g.node_count(), 6);
        // 2 rows x 2 right edges + 3 columns x 1 down edge.
        assert_eq!(g.edge_count(), 7);
        assert!(g.links(NodeId(5)).is_empty());
    }

    #[test]
    fn random_graph_is_deterministic() {
        let params = RandomGraphParams::default();
        let a = random_graph(7, &params);
        let b = random_graph(7, &params);
        let edges = |g: &Graph| -> Vec<(NodeId, NodeId, u64, Color)> {
            g.nodes()
                .flat_map(|n| {
                    g.links(n)
                        .iter()
                        .map(move |l| (n, l.to, l.weight.to_bits(), l.color))
                })
                .collect()
        };
        assert_eq!(edges(&a), edges(&b));
        assert_eq!(a.node_count(), 8);
    }

    #[test]
    fn random_graph_weights_follow_the_step() {
        let params = RandomGraphParams {
            density: 0.8,
            max_weight: 5,
            weight_step: 0.3,
            ..RandomGraphParams::default()
        };
        let g = random_graph(3, &params);
        let allowed: Vec<f64> = (1..=5).map(|k| f64::from(k) * 0.3).collect();
        for node in g.nodes() {
            for link in g.links(node) {
                assert!(allowed.contains(&link.weight), "weight {}", link.weight);
            }
        }
        let bad = RandomGraphParams {
            weight_step: -1.0,
            ..params
        };
        let g = random_graph(3, &bad);
        assert!(g.nodes().all(|n| g.links(n).iter().all(|l| l.weight.fract() == 0.0)));
    }

    #[test]
    fn random_graph_never_edgeless() {
        let params = RandomGraphParams {
            density: 0.0,
            ..RandomGraphParams::default()
        };
        let g = random_graph(1, &params);
        assert_eq!(g.edge_count(), 1);
    }
}
