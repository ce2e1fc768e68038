//! Estimate the site-percolation threshold of an n-by-n grid.
//!
//! Usage:
//!   percolation_stats 200 100                 200×200 grid, 100 trials
//!   percolation_stats 200 100 --seed 7        Reproducible run
//!   percolation_stats 50 30 --sampling permutation
//!   percolation_stats 20 10 --show            Also print one percolated grid

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use percolation::{percolate_trial, ExperimentConfig, PercolationStats, Sampling};

#[derive(Clone, Copy, ValueEnum)]
enum SamplingArg {
    /// Open uniformly random sites, retrying ones already open
    Uniform,
    /// Open sites in a shuffled order
    Permutation,
}

impl From<SamplingArg> for Sampling {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::Uniform => Sampling::Uniform,
            SamplingArg::Permutation => Sampling::Permutation,
        }
    }
}

#[derive(Parser)]
#[command(name = "percolation_stats")]
#[command(about = "Monte Carlo estimate of the site-percolation threshold")]
struct Args {
    /// Grid side length n
    grid_size: usize,

    /// Number of independent trials T
    trials: usize,

    /// Random seed (drawn from the OS when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Site sampling strategy
    #[arg(long, value_enum, default_value = "uniform")]
    sampling: SamplingArg,

    /// Print the final state of one extra percolated grid
    #[arg(long)]
    show: bool,
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| format!("{:.10}", v))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = ExperimentConfig::new(args.grid_size, args.trials)
        .with_seed(args.seed.unwrap_or_else(rand::random))
        .with_sampling(args.sampling.into());

    let stats = match PercolationStats::run(&config) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    println!("{:<24}= {:.10}", "mean", stats.mean());
    println!("{:<24}= {}", "stddev", format_value(stats.std_dev()));
    match stats.confidence_interval() {
        Some((lo, hi)) => println!(
            "{:<24}= {:.10}, {:.10}",
            "95% confidence interval", lo, hi
        ),
        None => println!("{:<24}= undefined", "95% confidence interval"),
    }

    if args.show {
        match percolate_trial(&config, config.trials) {
            Ok(grid) => {
                println!();
                print!("{}", grid);
            }
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(2);
            }
        }
    }

    ExitCode::SUCCESS
}
