//! Quickstart: solve the demonstration query for every colour budget.
//!
//! Run with:
//!
//! ```sh
//! cargo run -p ripple-engine --example quickstart
//! ```

use ripple_engine::{Outcome, SimState, Solver, SolverConfig};
use ripple_graph::{demo_graph, DEMO_DESTINATION, DEMO_SOURCE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = demo_graph();
    let (source, destination) = (DEMO_SOURCE, DEMO_DESTINATION);

    for k in 0..=4 {
        let solver = Solver::new(SolverConfig::new(k))?;
        let report = solver.solve(&graph, source, destination)?;
        match report.outcome {
            Outcome::Found(path) => println!("k={k}: {path}"),
            Outcome::Infeasible => println!("k={k}: no feasible path"),
        }
        println!(
            "      {} ticks, {} ripples admitted, {} candidates pruned",
            report.metrics.ticks,
            report.metrics.admitted,
            report.metrics.pruned()
        );
    }

    // Step through the k=3 run by hand.
    let solver = Solver::new(SolverConfig::new(3))?;
    let mut sim = solver.simulation(&graph, source, destination)?;
    while sim.step()? == SimState::Running {
        println!(
            "tick {}: {} active, {} ripples total",
            sim.clock(),
            sim.store().active().len(),
            sim.store().len()
        );
    }
    println!("finished in state {:?}", sim.state());
    Ok(())
}
