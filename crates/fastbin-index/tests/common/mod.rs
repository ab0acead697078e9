//! Shared utilities for integration tests

#![allow(dead_code)]

use fastbin_index::BinIndex;
use rand::prelude::*;
use rand_distr::{Exp, Normal};

/// Boundaries from the worked example of the original paper
pub const REFERENCE_BOUNDARIES: [f64; 8] = [2.0, 11.0, 19.0, 20.0, 21.0, 27.0, 29.0, 30.0];

pub fn reference_index() -> BinIndex {
    BinIndex::new(REFERENCE_BOUNDARIES.to_vec()).unwrap()
}

/// Sorted, deduplicated draws; always at least two values
pub fn boundaries_from(mut draws: Vec<f64>) -> Vec<f64> {
    draws.sort_by(|a, b| a.partial_cmp(b).unwrap());
    draws.dedup();
    if draws.len() < 2 {
        draws = vec![0.0, 1.0];
    }
    draws
}

/// Boundary sets with different spacing characteristics
pub fn generate_boundary_sets(seed: u64) -> Vec<(&'static str, Vec<f64>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let exp = Exp::new(0.5).unwrap();

    vec![
        ("two", vec![-1.0, 1.0]),
        ("three", vec![0.0, 0.5, 3.0]),
        ("uniform", (0..=64).map(|i| i as f64).collect()),
        ("normal", boundaries_from((0..500).map(|_| normal.sample(&mut rng)).collect())),
        ("exponential", boundaries_from((0..500).map(|_| exp.sample(&mut rng)).collect())),
        ("clustered", {
            let mut v: Vec<f64> = (0..200).map(|i| i as f64 * 1e-3).collect();
            v.push(1e6);
            v
        }),
        ("powers_of_two", (0..40).map(|i| 2f64.powi(i)).collect()),
        ("tenths", (0..=100).map(|i| i as f64 * 0.1).collect()),
    ]
}

/// Smallest float greater than a finite `x`
pub fn next_up(x: f64) -> f64 {
    if x == 0.0 {
        f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        f64::from_bits(x.to_bits() - 1)
    }
}

/// Largest float smaller than a finite `x`
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

/// Every boundary and its immediate float neighbours
pub fn probes_around(boundaries: &[f64]) -> Vec<f64> {
    boundaries
        .iter()
        .flat_map(|&b| [next_down(b), b, next_up(b)])
        .collect()
}

/// Check the label contract for one value
pub fn assert_label_contract(index: &BinIndex, value: f64, label: usize) {
    let b = index.boundaries();
    let m = index.num_bins();
    match label {
        0 => assert!(value < b[0], "{value} labelled 0 but b[0] = {}", b[0]),
        k if k == m + 1 => assert!(value >= b[m], "{value} labelled {k} but b[m] = {}", b[m]),
        k => assert!(
            b[k - 1] <= value && value < b[k],
            "{value} labelled {k} but bin is [{}, {})",
            b[k - 1],
            b[k]
        ),
    }
}
