#![warn(missing_docs)]
//! BenchTimer Core - Timed Runner
//!
//! This crate provides the measurement engine:
//! - `BenchmarkTimer` with optional untimed pre/post phases around a timed work step
//! - Warmup sizing (`warmup_runs`) so early iterations don't bias the mean
//! - `LapTimer` for accumulating only the timed sections of each iteration
//! - Typed callback errors via `RunError`

mod error;
mod format;
mod measure;
mod runner;

pub use error::{Phase, RunError};
pub use format::{format_millis, format_whole};
pub use measure::{LapTimer, Timer};
pub use runner::{
    Benchmark, BenchmarkTimer, MAX_WARMUP_RUNS, MIN_WARMUP_RUNS, Measurement, warmup_runs,
};
