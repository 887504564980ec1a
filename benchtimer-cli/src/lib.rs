#![warn(missing_docs)]
//! BenchTimer CLI Library
//!
//! Command-line front-end that drives the timed runner over a sorting sweep:
//! input arrays of growing size in four orderings, each sorted with an
//! insertion sort and timed with `BenchmarkTimer`.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = benchtimer_cli::run() {
//!         eprintln!("Error: {e:#}");
//!     }
//! }
//! ```

mod config;
mod sweep;
mod workload;

pub use config::*;
pub use sweep::{measure_ordering, run_sweep};
pub use workload::{InputOrdering, SortCheckError, check_sorted, generate_input, insertion_sort};

use benchtimer_report::{OutputFormat, render};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// BenchTimer CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchtimer")]
#[command(
    author,
    version,
    about = "BenchTimer - average execution time over repeated trials"
)]
pub struct Cli {
    /// Optional subcommand (Run, List, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Measured runs per size and ordering
    #[arg(long, short = 'n')]
    pub runs: Option<u32>,

    /// First input size
    #[arg(long)]
    pub start_size: Option<usize>,

    /// Stop before reaching this input size
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Multiplier between consecutive sizes
    #[arg(long)]
    pub growth_factor: Option<usize>,

    /// Fixed RNG seed for reproducible inputs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Orderings to measure (repeatable); defaults to all
    #[arg(long = "ordering", value_enum)]
    pub orderings: Vec<InputOrdering>,

    /// Configuration file (default: discover benchtimer.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the sorting sweep (default)
    Run,
    /// List the sizes and orderings that would be measured
    List,
    /// Print a default benchtimer.toml
    Init,
}

/// Run the BenchTimer CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the BenchTimer CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let filter = if cli.verbose {
        "benchtimer=debug,benchtimer_core=debug,benchtimer_cli=debug"
    } else {
        "benchtimer=info,benchtimer_core=info,benchtimer_cli=info"
    };
    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match &cli.config {
        Some(path) => BenchTimerConfig::load(path)?,
        None => BenchTimerConfig::discover().unwrap_or_default(),
    };
    let config = apply_overrides(&cli, config);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_benchmarks(&config),
        // The configured report path is for reports only; these print unless `-o` is given
        Commands::List => write_output(cli.output.as_deref(), &list_plan(&config.sweep)),
        Commands::Init => write_output(cli.output.as_deref(), &BenchTimerConfig::default_toml()),
    }
}

/// Merge command-line flags over file configuration
pub fn apply_overrides(cli: &Cli, mut config: BenchTimerConfig) -> BenchTimerConfig {
    if let Some(format) = &cli.format {
        config.output.format = format.clone();
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.clone());
    }
    if let Some(runs) = cli.runs {
        config.sweep.runs = runs;
    }
    if let Some(start_size) = cli.start_size {
        config.sweep.start_size = start_size;
    }
    if let Some(max_size) = cli.max_size {
        config.sweep.max_size = max_size;
    }
    if let Some(growth_factor) = cli.growth_factor {
        config.sweep.growth_factor = growth_factor;
    }
    if cli.seed.is_some() {
        config.sweep.seed = cli.seed;
    }
    if !cli.orderings.is_empty() {
        config.sweep.orderings = cli.orderings.clone();
    }
    config
}

fn run_benchmarks(config: &BenchTimerConfig) -> anyhow::Result<()> {
    let format: OutputFormat = match config.output.format.parse() {
        Ok(format) => format,
        Err(e) => {
            tracing::warn!("{}, using human output", e);
            OutputFormat::Human
        }
    };

    let start = Instant::now();
    let report = run_sweep(&config.sweep)?;
    tracing::info!(
        "Measured {} benchmarks in {:.2}s",
        report.entries.len(),
        start.elapsed().as_secs_f64()
    );

    let rendered = render(&report, format)?;
    write_output(config.output.path.as_deref(), &rendered)
}

/// Describe the sweep without running it
pub fn list_plan(sweep: &SweepConfig) -> String {
    let sizes: Vec<String> = sweep.sizes().iter().map(|n| n.to_string()).collect();
    let orderings: Vec<&str> = sweep.orderings.iter().map(|o| o.name()).collect();
    format!(
        "sizes: {}\norderings: {}\nruns: {} (+{} warmup)\n",
        sizes.join(", "),
        orderings.join(", "),
        sweep.runs,
        benchtimer_core::warmup_runs(sweep.runs)
    )
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
