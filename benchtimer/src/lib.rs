#![warn(missing_docs)]
//! # BenchTimer
//!
//! Measure the average execution time of a function over repeated trials.
//!
//! A benchmark has up to three phases per iteration:
//! - **Pre**: prepares the input (optional, not timed)
//! - **Work**: the code being measured (timed)
//! - **Post**: cleans up or verifies the result (optional, not timed)
//!
//! Each run performs a short warmup (`max(2, min(10, runs / 10))` iterations)
//! whose timings are discarded, then reports the mean of the measured
//! iterations in milliseconds.
//!
//! ## Quick Start
//!
//! ```
//! use benchtimer::prelude::*;
//!
//! let bench = BenchmarkTimer::new("sort 1k", |v: &mut Vec<u32>| v.sort())
//!     .with_post(|v| assert!(v.is_sorted()));
//!
//! let input: Vec<u32> = (0..1_000).rev().collect();
//! let mean_ms = bench.run_from_supplier(|| input.clone(), 50).unwrap();
//! assert!(mean_ms >= 0.0);
//! ```
//!
//! ## Fallible Callbacks
//!
//! ```
//! use benchtimer::prelude::*;
//!
//! let bench = BenchmarkTimer::try_new("parse", |s: &mut String| {
//!     s.parse::<u64>().map(drop)
//! });
//!
//! let err = bench.run("not a number".to_string(), 10).unwrap_err();
//! assert_eq!(err.phase(), Some(Phase::Work));
//! ```

// Re-export core types
pub use benchtimer_core::{
    Benchmark, BenchmarkTimer, LapTimer, MAX_WARMUP_RUNS, MIN_WARMUP_RUNS, Measurement, Phase,
    RunError, Timer, format_millis, format_whole, warmup_runs,
};

// Re-export report types
pub use benchtimer_report::{
    OutputFormat, Report, ReportConfig, ReportEntry, ReportMeta, format_human_output,
    generate_csv_report, generate_json_report, render,
};

// Re-export the sweep front-end
pub use benchtimer_cli::{
    BenchTimerConfig, InputOrdering, SweepConfig, generate_input, insertion_sort, run_sweep,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Benchmark, BenchmarkTimer, Measurement, Phase, RunError};
}

/// Run the BenchTimer CLI.
///
/// ```ignore
/// fn main() {
///     benchtimer::run().unwrap();
/// }
/// ```
pub use benchtimer_cli::run;
