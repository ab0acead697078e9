//! Boundary generation strategies

use crate::traits::BoundaryBuilder;
use fastbin_core::{BinFloat, Error, Result};

/// Equal-width edges between `start` and `end`
///
/// The last edge is exactly `end`.
pub fn linear_boundaries<F: BinFloat>(start: F, end: F, num_bins: usize) -> Result<Vec<F>> {
    check_range(start, end, num_bins)?;

    let n = F::from_count(num_bins);
    let span = end - start;
    let mut edges: Vec<F> = (0..num_bins)
        .map(|i| start + span * (F::from_count(i) / n))
        .collect();
    edges.push(end);
    Ok(edges)
}

/// Log-spaced edges between `start` and `end`, both positive
///
/// Each bin is a constant factor wider than the previous one. The first and
/// last edges are exactly `start` and `end`.
pub fn geometric_boundaries<F: BinFloat>(start: F, end: F, num_bins: usize) -> Result<Vec<F>> {
    check_range(start, end, num_bins)?;
    if start <= F::zero() {
        return Err(Error::InvalidParameter(format!(
            "geometric boundaries need a positive start, got {start}"
        )));
    }

    let n = F::from_count(num_bins);
    let (log_start, log_end) = (start.ln(), end.ln());
    let mut edges = Vec::with_capacity(num_bins + 1);
    edges.push(start);
    for i in 1..num_bins {
        let t = F::from_count(i) / n;
        edges.push((log_start + (log_end - log_start) * t).exp());
    }
    edges.push(end);
    Ok(edges)
}

fn check_range<F: BinFloat>(start: F, end: F, num_bins: usize) -> Result<()> {
    if num_bins == 0 {
        return Err(Error::zero_bins());
    }
    if !start.is_finite() || !end.is_finite() || start >= end {
        return Err(Error::InvalidParameter(format!(
            "boundary range [{start}, {end}] must be finite and non-empty"
        )));
    }
    Ok(())
}

/// Finite sample values in ascending order
fn sorted_finite<F: BinFloat>(sample: &[F]) -> Vec<F> {
    let mut sorted: Vec<F> = sample.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Fixed-width boundary builder
///
/// Spreads a fixed number of equal-width bins over the sample range.
pub struct FixedWidthBoundaries {
    num_bins: usize,
}

impl FixedWidthBoundaries {
    /// Create a new fixed-width boundary builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl<F: BinFloat> BoundaryBuilder<F> for FixedWidthBoundaries {
    fn boundaries(&self, sample: &[F]) -> Result<Vec<F>> {
        let mut finite = sample.iter().copied().filter(|v| v.is_finite());
        let first = finite.next().ok_or(Error::InsufficientData {
            expected: 2,
            actual: 0,
        })?;
        let (min, max) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if min == max {
            // A single distinct value cannot span a bin
            return Err(Error::InsufficientData {
                expected: 2,
                actual: 1,
            });
        }

        linear_boundaries(min, max, self.num_bins)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Quantile-based boundary builder
///
/// Places edges at evenly spaced empirical quantiles (linear interpolation
/// between order statistics), so each bin holds roughly the same share of
/// the sample. Ties in the data collapse duplicate edges, which can leave
/// fewer bins than requested.
pub struct QuantileBoundaries {
    num_bins: usize,
}

impl QuantileBoundaries {
    /// Create a new quantile-based boundary builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl<F: BinFloat> BoundaryBuilder<F> for QuantileBoundaries {
    fn boundaries(&self, sample: &[F]) -> Result<Vec<F>> {
        let sorted = sorted_finite(sample);
        if sorted.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sorted.len(),
            });
        }

        let n = F::from_count(self.num_bins);
        let last_rank = F::from_count(sorted.len() - 1);
        let mut edges: Vec<F> = (0..=self.num_bins)
            .map(|i| {
                let position = last_rank * (F::from_count(i) / n);
                let lo = position.to_cell().min(sorted.len() - 1);
                let hi = (lo + 1).min(sorted.len() - 1);
                let frac = position - F::from_count(lo);
                sorted[lo] + (sorted[hi] - sorted[lo]) * frac
            })
            .collect();

        // Remove duplicate edges (can happen with discrete data)
        edges.dedup_by(|later, earlier| *later <= *earlier);

        if edges.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: 1,
            });
        }
        Ok(edges)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_boundaries() {
        let edges = linear_boundaries(0.0, 10.0, 4).unwrap();
        assert_eq!(edges, vec![0.0, 2.5, 5.0, 7.5, 10.0]);

        assert!(matches!(linear_boundaries(0.0, 1.0, 0), Err(Error::InvalidParameter(_))));
        assert!(matches!(linear_boundaries(1.0, 1.0, 3), Err(Error::InvalidParameter(_))));
        assert!(linear_boundaries(0.0, f64::INFINITY, 3).is_err());
    }

    #[test]
    fn test_geometric_boundaries() {
        let edges = geometric_boundaries(1.0, 1000.0, 3).unwrap();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], 1.0);
        assert_relative_eq!(edges[1], 10.0, epsilon = 1e-9);
        assert_relative_eq!(edges[2], 100.0, epsilon = 1e-9);
        assert_eq!(edges[3], 1000.0);

        assert!(geometric_boundaries(0.0, 10.0, 3).is_err());
        assert!(geometric_boundaries(-1.0, 10.0, 3).is_err());
    }

    #[test]
    fn test_fixed_width_boundaries() {
        let data = vec![1.0, 5.0, f64::NAN, 3.0, 9.0];
        let builder = FixedWidthBoundaries::new(4);
        let edges = builder.boundaries(&data).unwrap();
        assert_eq!(edges, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(BoundaryBuilder::<f64>::target_bins(&builder), Some(4));

        let index = builder.build(&data).unwrap();
        assert_eq!(index.search(4.0), 2);
        assert_eq!(index.search(9.0), 5);
    }

    #[test]
    fn test_fixed_width_degenerate_samples() {
        let builder = FixedWidthBoundaries::new(3);
        let err = builder.boundaries(&[f64::NAN]).unwrap_err();
        assert_eq!(err, Error::InsufficientData { expected: 2, actual: 0 });

        let err = builder.boundaries(&[2.0, 2.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::InsufficientData { expected: 2, actual: 1 });
    }

    #[test]
    fn test_quantile_boundaries() {
        let data: Vec<f64> = (0..=100).map(|i| i as f64).collect();
        let edges = QuantileBoundaries::new(4).boundaries(&data).unwrap();
        assert_eq!(edges, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_quantile_boundaries_interpolate() {
        let data = vec![4.0, 1.0, 2.0, 3.0];
        let edges = QuantileBoundaries::new(2).boundaries(&data).unwrap();
        assert_eq!(edges, vec![1.0, 2.5, 4.0]);
    }

    #[test]
    fn test_quantile_boundaries_with_ties() {
        let data = vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 3.0];
        let edges = QuantileBoundaries::new(4).boundaries(&data).unwrap();
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(edges[0], 1.0);
        assert_eq!(*edges.last().unwrap(), 3.0);

        let err = QuantileBoundaries::new(4).boundaries(&[5.0, 5.0]).unwrap_err();
        assert_eq!(err, Error::InsufficientData { expected: 2, actual: 1 });
    }

    #[test]
    fn test_quantile_index_balances_counts() {
        use crate::ops::SearchOps;

        let data: Vec<f64> = (1..=1000).map(|i| (i as f64).powi(3)).collect();
        let index = QuantileBoundaries::new(10).build(&data).unwrap();
        let counts = index.bin_counts(&data);
        // 100 values per inner bin, the maximum sits in the top outer bin
        assert_eq!(counts[0], 0);
        assert_eq!(counts[11], 1);
        for &count in &counts[1..=10] {
            assert!((99..=101).contains(&count), "unbalanced bin: {count}");
        }
    }
}
