//! Sorting — time `insertion_sort` against the standard library sort
//!
//! Each trial gets a fresh copy of the same shuffled input from the supplier,
//! so neither sort benefits from an already-sorted vector. The post step
//! verifies the output without being timed.
//!
//! Run with: cargo run --example sorting -p benchtimer --release

use benchtimer::prelude::*;
use benchtimer::{InputOrdering, format_millis, generate_input, insertion_sort};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(2018);

    println!("{:<8}{:>16}{:>16}", "n", "insertion", "std");
    let mut n = 50;
    while n < 3_500 {
        let input = generate_input(InputOrdering::Random, n, &mut rng);

        let insertion = BenchmarkTimer::new("insertion sort", |v: &mut Vec<u64>| insertion_sort(v))
            .with_post(|v| assert!(v.is_sorted()));
        let std_sort = BenchmarkTimer::new("std sort", |v: &mut Vec<u64>| v.sort_unstable())
            .with_post(|v| assert!(v.is_sorted()));

        let results = insertion
            .run_from_supplier(|| input.clone(), 20)
            .and_then(|a| std_sort.run_from_supplier(|| input.clone(), 20).map(|b| (a, b)));

        match results {
            Ok((a, b)) => println!("{:<8}{:>16}{:>16}", n, format_millis(a), format_millis(b)),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        n *= 2;
    }
}
