use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use karger_mincut::graph::karger::{estimate_min_cut, read_graph_from_file, KargerConfig, TrialBudget};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Budget {
    /// factor · n trials
    PerVertex,
    /// ⌈n² · ln n⌉ trials
    QuadraticLog,
}

/// Estimates the minimum cut of an undirected graph with Karger's algorithm
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Adjacency-list file: vertex count, then "vertex neighbor..." lines (1-based)
    input: PathBuf,
    /// Run exactly this many trials (overrides --budget)
    #[arg(short, long)]
    trials: Option<usize>,
    /// Trial-count policy
    #[arg(short, long, value_enum, default_value_t = Budget::PerVertex)]
    budget: Budget,
    /// Multiplier for the per-vertex budget
    #[arg(short, long, default_value_t = 50)]
    factor: usize,
    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
    /// Spread trials over all cores
    #[arg(short, long)]
    parallel: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let graph = match read_graph_from_file(&args.input) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Err. {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "read {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        args.input.display()
    );

    let budget = match (args.trials, args.budget) {
        (Some(trials), _) => TrialBudget::Fixed(trials),
        (None, Budget::PerVertex) => TrialBudget::PerVertex(args.factor),
        (None, Budget::QuadraticLog) => TrialBudget::QuadraticLog,
    };
    let config = KargerConfig {
        budget,
        seed: args.seed,
        parallel: args.parallel,
    };

    let start = Instant::now();
    let estimate = match estimate_min_cut(&graph, &config) {
        Ok(estimate) => estimate,
        Err(err) => {
            eprintln!("Err. {}", err);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    println!("Min cut is: {}", estimate.cut);
    println!(
        "Found by {} of {} trials in {:.3} seconds.",
        estimate.hits,
        estimate.trials,
        elapsed.as_secs_f64()
    );
    ExitCode::SUCCESS
}
