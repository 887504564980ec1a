//! Timed Runner
//!
//! A `BenchmarkTimer` handles the three phases of a run:
//! 1. the pre-function, which prepares the input to the work step (optional);
//! 2. the work step itself, assumed to mutate its input;
//! 3. the post-function, which cleans up and/or checks the result (optional).
//!
//! Only the work step is timed. Each run performs a warmup phase whose
//! timings are discarded, followed by the measured phase.

use crate::error::{Phase, RunError};
use crate::format::format_whole;
use crate::measure::LapTimer;
use std::convert::Infallible;
use std::fmt;
use std::time::Duration;

/// Lower bound on warmup iterations
pub const MIN_WARMUP_RUNS: u32 = 2;

/// Upper bound on warmup iterations
pub const MAX_WARMUP_RUNS: u32 = 10;

/// Number of warmup iterations for a run of `runs` measured iterations.
///
/// One tenth of `runs`, but at least 2 and at most 10.
pub fn warmup_runs(runs: u32) -> u32 {
    (runs / 10).clamp(MIN_WARMUP_RUNS, MAX_WARMUP_RUNS)
}

type PreFn<'a, T, E> = Box<dyn Fn(T) -> Result<T, E> + 'a>;
type WorkFn<'a, T, E> = Box<dyn Fn(&mut T) -> Result<(), E> + 'a>;
type PostFn<'a, T, E> = Box<dyn Fn(&T) -> Result<(), E> + 'a>;

/// Outcome of one measured run
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Description of the benchmark that produced this measurement
    pub description: String,
    /// Number of measured iterations
    pub runs: u32,
    /// Number of warmup iterations that preceded measurement
    pub warmup_runs: u32,
    /// Total time spent in the work step across measured iterations
    pub total: Duration,
}

impl Measurement {
    /// Mean time per measured iteration in milliseconds
    pub fn mean_millis(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1_000.0 / f64::from(self.runs)
    }

    /// Mean time per measured iteration
    pub fn mean(&self) -> Duration {
        if self.runs == 0 {
            return Duration::ZERO;
        }
        self.total / self.runs
    }
}

/// Something that can be timed over repeated trials.
pub trait Benchmark<T> {
    /// Error produced by the benchmark's callbacks
    type Error;

    /// Run the benchmark `runs` times on fresh inputs from `supplier` and
    /// return the mean time per run in milliseconds.
    fn run_from_supplier<S>(&self, supplier: S, runs: u32) -> Result<f64, RunError<Self::Error>>
    where
        S: FnMut() -> T;

    /// Run the benchmark `runs` times, each on a clone of `input`.
    fn run(&self, input: T, runs: u32) -> Result<f64, RunError<Self::Error>>
    where
        T: Clone,
    {
        self.run_from_supplier(|| input.clone(), runs)
    }
}

/// Benchmark configuration: a description and up to three callbacks.
///
/// The configuration is immutable once built and may be run any number of
/// times. Callbacks may borrow from the caller for `'a`.
///
/// ```
/// use benchtimer_core::{Benchmark, BenchmarkTimer};
///
/// let bench = BenchmarkTimer::new("sort", |v: &mut Vec<u32>| v.sort())
///     .with_post(|v: &Vec<u32>| assert!(v.is_sorted()));
///
/// let mean_ms = bench.run(vec![3, 1, 2], 20).unwrap();
/// assert!(mean_ms >= 0.0);
/// ```
pub struct BenchmarkTimer<'a, T, E = Infallible> {
    description: String,
    pre: Option<PreFn<'a, T, E>>,
    work: WorkFn<'a, T, E>,
    post: Option<PostFn<'a, T, E>>,
}

impl<'a, T> BenchmarkTimer<'a, T> {
    /// Create a benchmark whose work step cannot fail
    pub fn new<F>(description: impl Into<String>, work: F) -> Self
    where
        F: Fn(&mut T) + 'a,
    {
        Self::try_new(description, move |input: &mut T| {
            work(input);
            Ok(())
        })
    }
}

impl<'a, T, E> BenchmarkTimer<'a, T, E> {
    /// Create a benchmark whose work step may fail with `E`
    pub fn try_new<F>(description: impl Into<String>, work: F) -> Self
    where
        F: Fn(&mut T) -> Result<(), E> + 'a,
    {
        Self {
            description: description.into(),
            pre: None,
            work: Box::new(work),
            post: None,
        }
    }

    /// Set the pre-function, run before each work step with the clock
    /// stopped. Its result becomes the work step's input.
    pub fn with_pre<F>(self, pre: F) -> Self
    where
        F: Fn(T) -> T + 'a,
    {
        self.try_with_pre(move |input| Ok(pre(input)))
    }

    /// Fallible form of [`BenchmarkTimer::with_pre`]
    pub fn try_with_pre<F>(mut self, pre: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + 'a,
    {
        self.pre = Some(Box::new(pre));
        self
    }

    /// Set the post-function, run after each work step with the clock
    /// stopped.
    pub fn with_post<F>(self, post: F) -> Self
    where
        F: Fn(&T) + 'a,
    {
        self.try_with_post(move |input| {
            post(input);
            Ok(())
        })
    }

    /// Fallible form of [`BenchmarkTimer::with_post`]
    pub fn try_with_post<F>(mut self, post: F) -> Self
    where
        F: Fn(&T) -> Result<(), E> + 'a,
    {
        self.post = Some(Box::new(post));
        self
    }

    /// Benchmark description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a pre-function is configured
    pub fn has_pre(&self) -> bool {
        self.pre.is_some()
    }

    /// Whether a post-function is configured
    pub fn has_post(&self) -> bool {
        self.post.is_some()
    }

    /// Run the warmup and measured phases and return the full measurement.
    ///
    /// `supplier` is called once per iteration, warmup included, with the
    /// clock stopped. Any callback error aborts the run and is returned
    /// unchanged inside [`RunError::Step`].
    pub fn measure_from_supplier<S>(
        &self,
        mut supplier: S,
        runs: u32,
    ) -> Result<Measurement, RunError<E>>
    where
        S: FnMut() -> T,
    {
        if runs == 0 {
            return Err(RunError::NoRuns);
        }

        tracing::info!(
            "Begin run: {} with {} runs",
            self.description,
            format_whole(u64::from(runs))
        );

        let warmup_runs = warmup_runs(runs);
        tracing::debug!(description = %self.description, warmup_runs, "warming up");

        // Warmup timings are thrown away with this timer
        self.repeat(warmup_runs, &mut supplier, &mut LapTimer::new())?;

        let mut laps = LapTimer::new();
        self.repeat(runs, &mut supplier, &mut laps)?;

        Ok(Measurement {
            description: self.description.clone(),
            runs,
            warmup_runs,
            total: laps.total(),
        })
    }

    fn repeat<S>(&self, n: u32, supplier: &mut S, laps: &mut LapTimer) -> Result<(), RunError<E>>
    where
        S: FnMut() -> T,
    {
        for _ in 0..n {
            let input = supplier();
            let mut input = match &self.pre {
                Some(pre) => pre(input).map_err(RunError::step(Phase::Pre))?,
                None => input,
            };

            laps.time(|| (self.work)(std::hint::black_box(&mut input)))
                .map_err(RunError::step(Phase::Work))?;

            if let Some(post) = &self.post {
                post(&input).map_err(RunError::step(Phase::Post))?;
            }
        }
        Ok(())
    }
}

impl<T, E> Benchmark<T> for BenchmarkTimer<'_, T, E> {
    type Error = E;

    fn run_from_supplier<S>(&self, supplier: S, runs: u32) -> Result<f64, RunError<E>>
    where
        S: FnMut() -> T,
    {
        self.measure_from_supplier(supplier, runs)
            .map(|measurement| measurement.mean_millis())
    }
}

impl<T, E> fmt::Debug for BenchmarkTimer<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkTimer")
            .field("description", &self.description)
            .field("pre", &self.has_pre())
            .field("post", &self.has_post())
            .finish_non_exhaustive()
    }
}
