//! Benchmark profiles and utilities for the ripple-spreading path solver.
//!
//! Provides pre-built [`BenchProfile`]s for benchmarking and examples:
//!
//! - [`reference_profile`]: 32x32 lattice (1024 nodes), 4 colours, k=3
//! - [`stress_profile`]: 96x96 lattice (~9K nodes), same colouring
//! - [`random_profile`]: seeded sparse random digraph
//! - [`synthetic_batch`]: deterministic arrival batches for the dominance filter

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ripple_arena::Arrival;
use ripple_core::{Color, NodeId, RippleId};
use ripple_engine::SolverConfig;
use ripple_graph::Graph;
use ripple_test_utils::{grid_graph, random_graph, RandomGraphParams};

/// A graph plus the query to run on it.
pub struct BenchProfile {
    /// The graph.
    pub graph: Graph,
    /// Start node.
    pub source: NodeId,
    /// Target node.
    pub destination: NodeId,
    /// Colour budget.
    pub max_colors: usize,
}

impl BenchProfile {
    /// Default solver configuration for this profile.
    pub fn config(&self) -> SolverConfig {
        SolverConfig::new(self.max_colors)
    }
}

fn lattice_profile(side: u32) -> BenchProfile {
    BenchProfile {
        graph: grid_graph(side, side, 4),
        source: NodeId(0),
        destination: NodeId(side * side - 1),
        max_colors: 3,
    }
}

/// 32x32 lattice, corner to corner.
pub fn reference_profile() -> BenchProfile {
    lattice_profile(32)
}

/// 96x96 lattice, corner to corner.
///
/// Same colouring as [`reference_profile`] at roughly 9x the node count.
pub fn stress_profile() -> BenchProfile {
    lattice_profile(96)
}

/// 64-node random digraph with 5 colours, from node 0 to node 63.
pub fn random_profile(seed: u64) -> BenchProfile {
    let params = RandomGraphParams {
        nodes: 64,
        density: 0.08,
        colors: 5,
        max_weight: 6,
        weight_step: 1.0,
    };
    BenchProfile {
        graph: random_graph(seed, &params),
        source: NodeId(0),
        destination: NodeId(63),
        max_colors: 3,
    }
}

/// `len` arrivals at one node with random lengths and colour sets.
///
/// Lengths are drawn from `1..=32` and each arrival uses 1 to 4 of 6
/// colours, so a batch mixes dominated and non-dominated entries.
pub fn synthetic_batch(seed: u64, len: usize) -> Vec<Arrival> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let used = rng.random_range(1..=4);
            let colors = (0..used).map(|_| Color(rng.random_range(1..=6))).collect();
            Arrival {
                parent: RippleId(0),
                node: NodeId(1),
                radius: 0.0,
                objective: f64::from(rng.random_range(1..=32u32)),
                colors,
            }
        })
        .collect()
}
