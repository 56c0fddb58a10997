//! Property tests: run invariants on seeded random graphs.
//!
//! Graphs come from `ripple_test_utils::random_graph`. Most properties run
//! over both integer weights and weights on a step such as 0.1 or 0.3,
//! which binary floating point cannot represent, so accumulated radii
//! round. The engine and the exhaustive reference add a path's weights in
//! the same order, so a given path has the same length in both.

use proptest::prelude::*;
use ripple_core::{Color, NodeId};
use ripple_engine::{
    dominated, DominanceRule, ExecutionMode, Objectives, Outcome, SimState, Simulation,
    SolverConfig,
};
use ripple_graph::Graph;
use ripple_test_utils::{path_cost, random_graph, shortest_within_budget, RandomGraphParams};

#[derive(Clone, Debug)]
struct Case {
    seed: u64,
    params: RandomGraphParams,
    source: u32,
    destination: u32,
    k: usize,
    rule: DominanceRule,
}

impl Case {
    fn graph(&self) -> Graph {
        random_graph(self.seed, &self.params)
    }

    fn config(&self) -> SolverConfig {
        SolverConfig::new(self.k).with_dominance(self.rule)
    }
}

/// Relative tolerance for comparing lengths of different paths.
const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

fn arb_case_with(weight_step: impl Strategy<Value = f64>) -> impl Strategy<Value = Case> {
    (
        any::<u64>(),
        2u32..8,
        0.15f64..0.6,
        1u32..5,
        1u32..4,
        weight_step,
        any::<u32>(),
        any::<u32>(),
        0usize..5,
        any::<bool>(),
    )
        .prop_map(
            |(seed, nodes, density, colors, max_weight, weight_step, s, d, k, count)| Case {
                seed,
                params: RandomGraphParams {
                    nodes,
                    density,
                    colors,
                    max_weight,
                    weight_step,
                },
                source: s % nodes,
                destination: d % nodes,
                k,
                rule: if count {
                    DominanceRule::ColorCount
                } else {
                    DominanceRule::ColorSubset
                },
            },
        )
}

/// Integer weights: every radius is exact.
fn arb_case() -> impl Strategy<Value = Case> {
    arb_case_with(Just(1.0))
}

/// Integer weights or a step with no exact binary representation.
fn arb_case_any_step() -> impl Strategy<Value = Case> {
    arb_case_with(prop_oneof![Just(1.0), Just(0.1), Just(0.3), Just(0.7)])
}

fn run<'g>(case: &Case, graph: &'g Graph, execution: ExecutionMode) -> (Outcome, Simulation<'g>) {
    let mut sim = Simulation::new(
        graph,
        NodeId(case.source),
        NodeId(case.destination),
        case.config().with_execution(execution),
    )
    .unwrap();
    let outcome = sim.run().unwrap();
    (outcome, sim)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn ripples_are_simple_feasible_and_consistent(case in arb_case_any_step()) {
        let graph = case.graph();
        let (_, sim) = run(&case, &graph, ExecutionMode::Sequential);
        for (id, ripple) in sim.store().iter() {
            prop_assert!(ripple.colors().len() <= case.k);
            let path = sim.path(id);
            let mut sorted = path.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), path.len(), "repeated node in {:?}", path);
            let (length, colors) = path_cost(&graph, &path).expect("path follows edges");
            prop_assert_eq!(length, ripple.objective());
            prop_assert_eq!(&colors, ripple.colors());
        }
    }

    #[test]
    fn frontier_is_non_dominated_at_admission(case in arb_case_any_step()) {
        let graph = case.graph();
        let (_, sim) = run(&case, &graph, ExecutionMode::Sequential);
        for (_, entries) in sim.store().frontier().iter() {
            for &later in entries {
                let b = sim.ripple(later).unwrap();
                for &earlier in entries {
                    let a = sim.ripple(earlier).unwrap();
                    if earlier == later || a.admitted_at() > b.admitted_at() {
                        continue;
                    }
                    prop_assert!(!dominated(
                        case.rule,
                        Objectives::new(b.objective(), b.colors()),
                        Objectives::new(a.objective(), a.colors()),
                    ));
                }
            }
        }
    }

    #[test]
    fn radius_grows_by_speed_and_resets_below_speed(case in arb_case()) {
        let graph = case.graph();
        let mut sim = Simulation::new(
            &graph,
            NodeId(case.source),
            NodeId(case.destination),
            case.config(),
        )
        .unwrap();
        let v = sim.speed();
        while sim.state() == SimState::Running {
            let clock = sim.clock();
            let before: Vec<_> = sim
                .store()
                .active()
                .iter()
                .map(|&id| (id, sim.ripple(id).unwrap().radius()))
                .collect();
            let known = sim.store().len();
            sim.step().unwrap();
            let ticked = sim.clock() != clock;
            for (id, radius) in before {
                let expected = if ticked { radius + v } else { radius };
                prop_assert_eq!(sim.ripple(id).unwrap().radius(), expected);
            }
            for (id, ripple) in sim.store().iter().skip(known) {
                prop_assert!(ripple.radius() >= 0.0 && ripple.radius() < v, "{} radius {}", id, ripple.radius());
                prop_assert_eq!(ripple.admitted_at(), sim.clock());
            }
        }
    }

    #[test]
    fn parallel_run_is_identical(case in arb_case_any_step(), workers in 1usize..5) {
        let graph = case.graph();
        let (seq_outcome, seq) = run(&case, &graph, ExecutionMode::Sequential);
        let (par_outcome, par) = run(&case, &graph, ExecutionMode::Parallel { workers: Some(workers) });
        prop_assert_eq!(seq_outcome, par_outcome);
        prop_assert_eq!(seq.clock(), par.clock());
        let a: Vec<_> = seq.store().iter().map(|(_, r)| r.clone()).collect();
        let b: Vec<_> = par.store().iter().map(|(_, r)| r.clone()).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn results_are_sound_against_exhaustive_search(case in arb_case_any_step()) {
        let graph = case.graph();
        let (outcome, _) = run(&case, &graph, ExecutionMode::Sequential);
        let reference = shortest_within_budget(
            &graph,
            NodeId(case.source),
            NodeId(case.destination),
            case.k,
        );
        match (outcome, reference) {
            (Outcome::Found(found), Some(best)) => {
                prop_assert!(found.colors.len() <= case.k);
                prop_assert_eq!(found.path.first(), Some(&NodeId(case.source)));
                prop_assert_eq!(found.path.last(), Some(&NodeId(case.destination)));
                let (length, colors) = path_cost(&graph, &found.path).expect("path follows edges");
                prop_assert_eq!(length, found.length);
                prop_assert_eq!(colors, found.colors);
                prop_assert!(found.length >= best.length);
            }
            (Outcome::Found(found), None) => {
                prop_assert!(false, "engine found {} but no feasible path exists", found);
            }
            (Outcome::Infeasible, _) => {}
        }
    }

    #[test]
    fn unconstrained_budget_finds_the_shortest_path(case in arb_case_any_step()) {
        let graph = case.graph();
        let case = Case { k: case.params.colors as usize, ..case };
        let (outcome, _) = run(&case, &graph, ExecutionMode::Sequential);
        let reference = shortest_within_budget(
            &graph,
            NodeId(case.source),
            NodeId(case.destination),
            case.k,
        );
        match reference {
            Some(best) => {
                let found = outcome.into_path().expect("a path exists");
                prop_assert!(
                    close(found.length, best.length),
                    "engine {} vs reference {}",
                    found.length,
                    best.length
                );
            }
            None => prop_assert_eq!(outcome, Outcome::Infeasible),
        }
    }

    #[test]
    fn every_edge_of_a_star_is_crossed(
        weights in proptest::collection::vec(1u32..30, 1..12),
        step in prop_oneof![Just(0.1), Just(0.3), Just(0.7)],
    ) {
        // One edge from 0 to each leaf, plus an unreachable target so the
        // run ends only when the seed has crossed every edge.
        let mut builder = Graph::builder();
        for (i, &w) in weights.iter().enumerate() {
            builder.add_edge(NodeId(0), NodeId(i as u32 + 1), f64::from(w) * step, Color(1));
        }
        let target = NodeId(weights.len() as u32 + 1);
        let graph = builder.node(target).build().unwrap();
        let mut sim = Simulation::new(&graph, NodeId(0), target, SolverConfig::new(1)).unwrap();
        prop_assert_eq!(sim.run().unwrap(), Outcome::Infeasible);
        for (i, &w) in weights.iter().enumerate() {
            let leaf = NodeId(i as u32 + 1);
            let reached = sim.frontier(leaf);
            prop_assert_eq!(reached.len(), 1, "leaf {} never reached", leaf);
            prop_assert_eq!(sim.ripple(reached[0]).unwrap().objective(), f64::from(w) * step);
        }
    }
}
