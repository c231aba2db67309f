//! Command-line entry point for the dot product benchmark.
//!
//! Usage:
//!   dot-bench                       # 10^8 elements, one measurement each
//!   dot-bench --len 1000000 -r 10   # smaller vectors, ten repetitions
//!   dot-bench --list                # list strategies
//!   dot-bench --verify              # cross-check strategies and exit

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dot_bench::config::DEFAULT_LEN;
use dot_bench::prelude::*;
use dot_bench::tui;
use dot_bench::utils::export::export_csv;

#[derive(Parser, Debug)]
#[command(name = "dot-bench", version, about)]
struct Cli {
    /// Length of each input vector
    #[arg(long, default_value_t = DEFAULT_LEN)]
    len: usize,

    /// Timed repetitions per strategy
    #[arg(short = 'r', long, default_value_t = 1)]
    repeat: usize,

    /// Untimed warm-up executions per strategy
    #[arg(long, default_value_t = 0)]
    warmup: usize,

    /// RNG seed (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// Ratios with a denominator at or below this many nanoseconds are undefined
    #[arg(long, default_value_t = 1)]
    epsilon_ns: u64,

    /// Maximum relative error tolerated between strategies
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Randomize execution order across strategies and repetitions
    #[arg(long)]
    shuffle: bool,

    /// Do not pin the measuring thread to a CPU core
    #[arg(long)]
    no_pin: bool,

    /// Only run these strategies (comma-separated)
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Export raw samples to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// List available strategies and exit
    #[arg(short, long)]
    list: bool,

    /// Check that all strategies agree on a random pair and exit
    #[arg(long)]
    verify: bool,
}

impl From<&Cli> for HarnessConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            len: cli.len,
            repetitions: cli.repeat,
            warmup_iterations: cli.warmup,
            seed: cli.seed,
            epsilon: Duration::from_nanos(cli.epsilon_ns),
            tolerance: cli.tolerance,
            shuffle: cli.shuffle,
            pin: !cli.no_pin,
            only: cli.only.clone(),
            csv_path: cli.csv.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = build_registry();

    if cli.list {
        tui::print_available_strategies(&registry);
        return Ok(());
    }

    let config = HarnessConfig::from(&cli);
    config.validate().context("invalid arguments")?;

    if cli.verify {
        let seed = config.seed.unwrap_or(0xdeadbeef);
        let len = config.len.min(1 << 20);
        registry
            .verify(len, seed, config.tolerance)
            .context("strategies disagree")?;
        println!(
            "All {} strategies agree on {} elements (seed {}).",
            registry.all().len(),
            len,
            seed
        );
        return Ok(());
    }

    tui::print_header();
    let run = run_harness(&config, &registry).context("benchmark run failed")?;
    tui::print_run(&run, config.repetitions);

    if let Some(path) = &config.csv_path {
        export_csv(path, run.seed, &run.samples)
            .with_context(|| format!("failed to export CSV to {}", path.display()))?;
        println!("  Raw samples exported to: {}", path.display());
    }

    Ok(())
}
