//! Sorting workload
//!
//! Input generators for the four orderings the sweep measures, and the
//! insertion sort used as the subject under test.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Shape of a generated input array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InputOrdering {
    /// Uniform values in `0..n`
    Random,
    /// `1..=n` ascending
    Ordered,
    /// `n..=1` descending
    Reverse,
    /// Ascending first half, random second half
    PartiallyOrdered,
}

impl InputOrdering {
    /// Every ordering, in report column order
    pub const ALL: [InputOrdering; 4] = [
        InputOrdering::Random,
        InputOrdering::Ordered,
        InputOrdering::Reverse,
        InputOrdering::PartiallyOrdered,
    ];

    /// Stable name used in reports and configuration
    pub fn name(self) -> &'static str {
        match self {
            InputOrdering::Random => "random",
            InputOrdering::Ordered => "ordered",
            InputOrdering::Reverse => "reverse",
            InputOrdering::PartiallyOrdered => "partially-ordered",
        }
    }
}

impl fmt::Display for InputOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build an input array of `n` elements with the given ordering
pub fn generate_input<R: Rng>(ordering: InputOrdering, n: usize, rng: &mut R) -> Vec<u64> {
    let upper = n as u64;
    match ordering {
        InputOrdering::Random => (0..n).map(|_| random_below(rng, upper)).collect(),
        InputOrdering::Ordered => (1..=upper).collect(),
        InputOrdering::Reverse => (1..=upper).rev().collect(),
        InputOrdering::PartiallyOrdered => (0..n)
            .map(|j| {
                if j > n / 2 {
                    random_below(rng, upper)
                } else {
                    j as u64
                }
            })
            .collect(),
    }
}

fn random_below<R: Rng>(rng: &mut R, upper: u64) -> u64 {
    if upper == 0 { 0 } else { rng.gen_range(0..upper) }
}

/// Sort `data` in place by insertion, swapping adjacent elements.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Result of a failed sortedness check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("output not sorted at index {index}")]
pub struct SortCheckError {
    /// First index whose element is smaller than its predecessor
    pub index: usize,
}

/// Verify `data` is in non-decreasing order
pub fn check_sorted<T: Ord>(data: &[T]) -> Result<(), SortCheckError> {
    match data.windows(2).position(|w| w[0] > w[1]) {
        Some(i) => Err(SortCheckError { index: i + 1 }),
        None => Ok(()),
    }
}
