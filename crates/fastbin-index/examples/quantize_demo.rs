//! Demonstrates quantile binning of a skewed sample

use fastbin_index::{
    geometric_boundaries, BinIndex, BoundaryBuilder, QuantileBoundaries, SearchOps,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug shows the index construction summaries
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Exponential-like sample: most mass near zero, a long right tail
    let sample: Vec<f64> = (1..=2000)
        .map(|i| {
            let u = i as f64 / 2001.0;
            -(1.0 - u).ln() * 3.0
        })
        .collect();

    // Example 1: quantile bins hold roughly equal shares of the sample
    println!("=== Quantile bins ===");
    let builder = QuantileBoundaries::new(8);
    let index = builder.build(&sample)?;
    if let Some(target) = BoundaryBuilder::<f64>::target_bins(&builder) {
        println!("requested {target} bins, got {}", index.num_bins());
    }
    print_counts(&index, &sample)?;

    // Example 2: log-spaced bins for the same sample
    println!("\n=== Geometric bins ===");
    let index = BinIndex::new(geometric_boundaries(0.01, 25.0, 8)?)?;
    print_counts(&index, &sample)?;

    // Example 3: individual lookups
    println!("\n=== Lookups ===");
    for value in [-1.0, 0.0, 0.5, 3.0, 10.0, 1e9, f64::NAN] {
        match index.try_search(value) {
            Some(label) => println!("{value:>8} -> bin {label} {}", index.bin(label)?),
            None => println!("{value:>8} -> unordered"),
        }
    }

    info!(bins = index.num_bins(), "demo finished");
    Ok(())
}

fn print_counts(index: &BinIndex, sample: &[f64]) -> anyhow::Result<()> {
    let counts = index.bin_counts(sample);
    for (label, count) in counts.iter().enumerate() {
        println!("  {:<28} count={count}", index.bin(label)?.to_string());
    }
    Ok(())
}
