//! Sorting Sweep
//!
//! Measures `insertion_sort` on every configured ordering at each input size,
//! growing the size geometrically. Each measurement clones the generated array
//! in the supplier so the sort always starts from the same unsorted input, and
//! checks the result in the (untimed) post step.

use crate::config::SweepConfig;
use crate::workload::{InputOrdering, SortCheckError, check_sorted, generate_input, insertion_sort};
use anyhow::Context;
use benchtimer_core::{BenchmarkTimer, Measurement, RunError};
use benchtimer_report::{Report, ReportConfig, ReportEntry};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Measure one ordering at one size
pub fn measure_ordering(
    ordering: InputOrdering,
    input: &[u64],
    runs: u32,
) -> Result<Measurement, RunError<SortCheckError>> {
    let bench = BenchmarkTimer::try_new(format!("Sorting {ordering}"), |data: &mut Vec<u64>| {
        insertion_sort(data);
        Ok(())
    })
    .try_with_post(|data| check_sorted(data));

    bench.measure_from_supplier(|| input.to_vec(), runs)
}

/// Run the full sweep described by `config` and collect a report
pub fn run_sweep(config: &SweepConfig) -> anyhow::Result<Report> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = Report::new(ReportConfig {
        runs: config.runs,
        seed: config.seed,
    });

    for n in config.sizes() {
        tracing::debug!(size = n, "measuring size");
        for &ordering in &config.orderings {
            let input = generate_input(ordering, n, &mut rng);
            let measurement = measure_ordering(ordering, &input, config.runs)
                .with_context(|| format!("sorting {ordering} input of size {n}"))?;

            tracing::debug!(
                size = n,
                %ordering,
                mean_ms = measurement.mean_millis(),
                "measured"
            );
            report
                .entries
                .push(ReportEntry::from_measurement(ordering.name(), n as u64, &measurement));
        }
    }

    Ok(report)
}
