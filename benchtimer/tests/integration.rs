//! Integration tests for BenchTimer
//!
//! These tests verify the end-to-end behavior of the timed runner and the
//! sorting sweep through the public facade.

use benchtimer::prelude::*;
use benchtimer::{
    InputOrdering, OutputFormat, SweepConfig, generate_input, insertion_sort, render, run_sweep,
    warmup_runs,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("verification failed for {0:?}")]
struct VerifyError(Vec<u64>);

/// Warmup count follows max(2, min(10, m / 10)) for small and large runs
#[test]
fn test_warmup_count_examples() {
    assert_eq!(warmup_runs(5), 2);
    assert_eq!(warmup_runs(15), 2);
    assert_eq!(warmup_runs(50), 5);
    assert_eq!(warmup_runs(1000), 10);
    for m in 1..20 {
        assert_eq!(warmup_runs(m), 2u32.max(10u32.min(m / 10)));
    }
}

/// The factory is called once per warmup and measured iteration
#[test]
fn test_exactly_m_measured_iterations() {
    for m in [1, 7, 40, 250] {
        let supplied = Cell::new(0u32);
        let bench = BenchmarkTimer::new("count", |_: &mut u8| {});
        let measurement = bench
            .measure_from_supplier(
                || {
                    supplied.set(supplied.get() + 1);
                    0u8
                },
                m,
            )
            .unwrap();

        assert_eq!(measurement.runs, m);
        assert_eq!(supplied.get(), m + warmup_runs(m));
        assert!(measurement.mean_millis() >= 0.0);
    }
}

/// Work mutates a fresh input each time; the post step sees the mutation
#[test]
fn test_each_iteration_gets_fresh_input() {
    let observed = RefCell::new(Vec::new());
    let bench = BenchmarkTimer::new("push", |v: &mut Vec<u64>| v.push(99))
        .with_post(|v| observed.borrow_mut().push(v.len()));

    bench.run(vec![1, 2, 3], 4).unwrap();

    let observed = observed.take();
    assert_eq!(observed.len(), 4 + warmup_runs(4) as usize);
    assert!(observed.iter().all(|&len| len == 4));
}

/// A delayed work step reports at least the delay and excludes slow pre/post
#[test]
fn test_delay_lower_bound_and_pre_post_excluded() {
    let delay = Duration::from_millis(2);
    let bench = BenchmarkTimer::new("delay", |_: &mut ()| std::thread::sleep(delay))
        .with_pre(|()| std::thread::sleep(Duration::from_millis(25)))
        .with_post(|_| std::thread::sleep(Duration::from_millis(25)));

    let mean = bench.run((), 4).unwrap();
    assert!(mean >= 2.0, "mean {mean} below delay");
    assert!(mean < 25.0, "mean {mean} includes untimed phases");
}

/// With many runs the mean settles near the delay, well under pre + post
#[test]
fn test_delay_mean_converges_with_many_runs() {
    let delay = Duration::from_millis(1);
    let bench = BenchmarkTimer::new("converge", |_: &mut ()| std::thread::sleep(delay))
        .with_pre(|()| std::thread::sleep(Duration::from_millis(5)))
        .with_post(|_| std::thread::sleep(Duration::from_millis(5)));

    let mean = bench.run((), 200).unwrap();
    assert!(mean >= 1.0, "mean {mean} below delay");
    // Sleep overshoot only; pre + post would add 10ms per run
    assert!(mean - 1.0 < 1.0 + 5.0, "mean {mean} did not settle near 1ms");
}

/// A post-step failure surfaces the verification error unchanged
#[test]
fn test_post_verification_failure() {
    let bench = BenchmarkTimer::try_new("broken sort", |v: &mut Vec<u64>| {
        v.reverse();
        Ok(())
    })
    .try_with_post(|v| {
        if v.is_sorted() {
            Ok(())
        } else {
            Err(VerifyError(v.clone()))
        }
    });

    let err = bench.run(vec![1, 2, 3], 10).unwrap_err();
    assert_eq!(err.phase(), Some(Phase::Post));
    assert_eq!(err.into_source(), Some(VerifyError(vec![3, 2, 1])));
}

/// Insertion sort is a valid timing subject for every ordering
#[test]
fn test_insertion_sort_subject() {
    let mut rng = StdRng::seed_from_u64(3);
    for ordering in InputOrdering::ALL {
        let input = generate_input(ordering, 300, &mut rng);
        let bench = BenchmarkTimer::new(format!("Sorting {ordering}"), |v: &mut Vec<u64>| {
            insertion_sort(v)
        })
        .with_post(|v| assert!(v.is_sorted()));

        let mean = bench.run_from_supplier(|| input.clone(), 5).unwrap();
        assert!(mean >= 0.0);
    }
}

/// Reverse input is the insertion sort worst case; ordered input is the best
#[test]
fn test_ordered_faster_than_reverse() {
    let mut rng = StdRng::seed_from_u64(4);
    let ordered = generate_input(InputOrdering::Ordered, 2_000, &mut rng);
    let reverse = generate_input(InputOrdering::Reverse, 2_000, &mut rng);
    let bench = BenchmarkTimer::new("sort", |v: &mut Vec<u64>| insertion_sort(v));

    let ordered_ms = bench.run(ordered, 5).unwrap();
    let reverse_ms = bench.run(reverse, 5).unwrap();
    assert!(ordered_ms < reverse_ms, "{ordered_ms} >= {reverse_ms}");
}

/// Sweep output renders in every format
#[test]
fn test_sweep_report_formats() {
    let config = SweepConfig {
        start_size: 16,
        max_size: 64,
        runs: 2,
        seed: Some(8),
        ..SweepConfig::default()
    };
    let report = run_sweep(&config).unwrap();
    assert_eq!(report.entries.len(), 2 * InputOrdering::ALL.len());

    let human = render(&report, OutputFormat::Human).unwrap();
    assert!(human.contains("partially-ordered"));

    let csv = render(&report, OutputFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 1 + report.entries.len());

    let json = render(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["meta"]["config"]["runs"], 2);
}
