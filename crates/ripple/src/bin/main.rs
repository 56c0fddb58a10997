//! Ripple CLI
//!
//! Solve a k-colour shortest path query from the command line.
//!
//! # Example
//!
//! ```bash
//! # The built-in demonstration graph, three colours
//! ripple -k 3
//!
//! # A custom graph, edges given as FROM:TO:WEIGHT:COLOR
//! ripple --source 0 --destination 2 -k 1 \
//!     --edge 0:1:1:1 --edge 1:2:1:2 --edge 0:2:3:1
//! ```
//!
//! Exit status: 0 when a path is found, 2 when no feasible path exists,
//! 1 on invalid input.

use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use ripple::graph::demo_graph;
use ripple::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Ripple-spreading k-colour shortest path solver
///
/// Finds a short path whose edges use at most k distinct colours.
/// Without --edge arguments the nine-node demonstration graph is used.
#[derive(Parser, Debug)]
#[command(name = "ripple")]
#[command(version, about, long_about = None)]
struct Args {
    /// Start node
    #[arg(long, default_value = "0")]
    source: u32,

    /// Target node
    #[arg(long, default_value = "8")]
    destination: u32,

    /// Maximum number of distinct colours on the path
    #[arg(short = 'k', long, default_value = "3")]
    max_colors: usize,

    /// Dominance rule used to prune partial paths
    #[arg(long, value_enum, default_value_t = RuleArg::Subset)]
    rule: RuleArg,

    /// Run discovery and admission on a worker pool
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (default: available cores)
    #[arg(long, requires = "parallel")]
    workers: Option<usize>,

    /// Abort after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Abort once a tick would store more than this many ripples
    #[arg(long)]
    max_ripples: Option<usize>,

    /// Edge as FROM:TO:WEIGHT:COLOR (repeatable)
    #[arg(long = "edge", value_name = "FROM:TO:WEIGHT:COLOR")]
    edges: Vec<EdgeArg>,

    /// Print run counters after the result
    #[arg(long)]
    metrics: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    /// Compare colour sets by inclusion
    Subset,
    /// Compare colour counts
    Count,
}

impl From<RuleArg> for DominanceRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Subset => DominanceRule::ColorSubset,
            RuleArg::Count => DominanceRule::ColorCount,
        }
    }
}

/// One `--edge` argument.
#[derive(Clone, Copy, Debug, PartialEq)]
struct EdgeArg {
    from: NodeId,
    to: NodeId,
    weight: f64,
    color: Color,
}

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [from, to, weight, color] = parts.as_slice() else {
            return Err(format!("expected FROM:TO:WEIGHT:COLOR, got {s:?}"));
        };
        let node = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map(NodeId)
                .map_err(|e| format!("bad node {v:?}: {e}"))
        };
        Ok(Self {
            from: node(*from)?,
            to: node(*to)?,
            weight: weight
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("bad weight {weight:?}: {e}"))?,
            color: color
                .trim()
                .parse::<u32>()
                .map(Color)
                .map_err(|e| format!("bad color {color:?}: {e}"))?,
        })
    }
}

fn build_graph(edges: &[EdgeArg]) -> Result<Graph, GraphError> {
    if edges.is_empty() {
        return Ok(demo_graph());
    }
    let mut builder = Graph::builder();
    for e in edges {
        builder.add_edge(e.from, e.to, e.weight, e.color);
    }
    builder.build()
}

fn config(args: &Args) -> SolverConfig {
    let mut config = SolverConfig::new(args.max_colors).with_dominance(args.rule.into());
    if args.parallel {
        config = config.with_execution(ExecutionMode::Parallel {
            workers: args.workers,
        });
    }
    if let Some(limit) = args.max_ticks {
        config = config.with_max_ticks(limit);
    }
    if let Some(limit) = args.max_ripples {
        config = config.with_max_ripples(limit);
    }
    config
}

fn run(args: &Args) -> Result<SolveReport, SolveError> {
    let graph = build_graph(&args.edges)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        source = args.source,
        destination = args.destination,
        k = args.max_colors,
        "Solving"
    );
    let solver = Solver::new(config(args))?;
    solver.solve(&graph, NodeId(args.source), NodeId(args.destination))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,ripple=info")),
        )
        .init();

    let args = Args::parse();

    let report = match run(&args) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Query rejected");
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    let code = match &report.outcome {
        Outcome::Found(p) => {
            let path: Vec<String> = p.path.iter().map(ToString::to_string).collect();
            println!("path:   {}", path.join(" -> "));
            println!("colors: {}", p.colors);
            println!("length: {}", p.length);
            ExitCode::SUCCESS
        }
        Outcome::Infeasible => {
            println!("no feasible path");
            ExitCode::from(2)
        }
    };

    if args.metrics {
        let m = &report.metrics;
        println!();
        println!("ticks:             {}", m.ticks);
        println!("candidates:        {}", m.candidates);
        println!("pruned (batch):    {}", m.pruned_in_batch);
        println!("pruned (history):  {}", m.pruned_by_history);
        println!("admitted:          {}", m.admitted);
        println!("retired:           {}", m.retired);
        println!("peak active:       {}", m.peak_active);
        println!("elapsed:           {} us", m.total_us);
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_arg_parses() {
        let e: EdgeArg = "3:4:2.5:7".parse().unwrap();
        assert_eq!(
            e,
            EdgeArg {
                from: NodeId(3),
                to: NodeId(4),
                weight: 2.5,
                color: Color(7),
            }
        );
    }

    #[test]
    fn edge_arg_rejects_malformed_input() {
        assert!("1:2:3".parse::<EdgeArg>().is_err());
        assert!("1:2:3:4:5".parse::<EdgeArg>().is_err());
        assert!("a:2:3:4".parse::<EdgeArg>().is_err());
        assert!("1:2:heavy:4".parse::<EdgeArg>().is_err());
    }

    #[test]
    fn default_args_solve_the_demo_query() {
        let args = Args::parse_from(["ripple"]);
        let report = run(&args).unwrap();
        let p = report.outcome.into_path().unwrap();
        assert_eq!(p.length, 6.0);
        assert_eq!(p.path.len(), 7);
    }

    #[test]
    fn custom_edges_and_flags() {
        let args = Args::parse_from([
            "ripple",
            "--source",
            "0",
            "--destination",
            "2",
            "-k",
            "1",
            "--rule",
            "count",
            "--parallel",
            "--workers",
            "2",
            "--edge",
            "0:1:1:1",
            "--edge",
            "1:2:1:2",
            "--edge",
            "0:2:3:1",
        ]);
        let cfg = config(&args);
        assert_eq!(cfg.dominance, DominanceRule::ColorCount);
        assert_eq!(cfg.execution, ExecutionMode::Parallel { workers: Some(2) });
        let p = run(&args).unwrap().outcome.into_path().unwrap();
        assert_eq!(p.path, vec![NodeId(0), NodeId(2)]);
    }

    #[test]
    fn limits_are_passed_through() {
        let args = Args::parse_from(["ripple", "--max-ticks", "9", "--max-ripples", "4"]);
        let cfg = config(&args);
        assert_eq!(cfg.max_ticks, Some(9));
        assert_eq!(cfg.max_ripples, Some(4));
        assert!(matches!(run(&args), Err(SolveError::Arena(_))));
    }

    #[test]
    fn fractional_edges_are_solved() {
        let args = Args::parse_from([
            "ripple",
            "--destination",
            "2",
            "-k",
            "1",
            "--edge",
            "0:1:0.3:1",
            "--edge",
            "0:2:0.9:1",
        ]);
        let p = run(&args).unwrap().outcome.into_path().unwrap();
        assert_eq!(p.path, vec![NodeId(0), NodeId(2)]);
    }

    #[test]
    fn workers_require_parallel() {
        assert!(Args::try_parse_from(["ripple", "--workers", "2"]).is_err());
    }

    #[test]
    fn bad_weight_is_an_error() {
        let args = Args::parse_from(["ripple", "--edge", "0:1:0:1", "--destination", "1"]);
        assert!(matches!(run(&args), Err(SolveError::InvalidGraph(_))));
    }
}
