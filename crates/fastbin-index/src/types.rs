//! Description of the interval behind a bin label

use fastbin_core::BinFloat;
use std::fmt;

/// The interval a search label stands for
///
/// Labels `1..=m` are finite half-open intervals; label `0` and label `m + 1`
/// are the two unbounded outer bins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bin<F: BinFloat = f64> {
    /// Everything strictly below the first boundary
    Below { upper: F },
    /// `[lower, upper)`
    Interval { lower: F, upper: F },
    /// Everything at or above the last boundary
    Above { lower: F },
}

impl<F: BinFloat> Bin<F> {
    /// Inclusive lower edge, `None` for the lowest outer bin
    pub fn lower(&self) -> Option<F> {
        match *self {
            Bin::Below { .. } => None,
            Bin::Interval { lower, .. } | Bin::Above { lower } => Some(lower),
        }
    }

    /// Exclusive upper edge, `None` for the highest outer bin
    pub fn upper(&self) -> Option<F> {
        match *self {
            Bin::Below { upper } | Bin::Interval { upper, .. } => Some(upper),
            Bin::Above { .. } => None,
        }
    }

    /// Width of a finite bin
    pub fn width(&self) -> Option<F> {
        match *self {
            Bin::Interval { lower, upper } => Some(upper - lower),
            _ => None,
        }
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: F) -> bool {
        match *self {
            Bin::Below { upper } => value < upper,
            Bin::Interval { lower, upper } => value >= lower && value < upper,
            Bin::Above { lower } => value >= lower,
        }
    }

    /// True for the two unbounded bins
    pub fn is_outer(&self) -> bool {
        !matches!(self, Bin::Interval { .. })
    }
}

impl<F: BinFloat> fmt::Display for Bin<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bin::Below { upper } => write!(f, "(-inf, {upper})"),
            Bin::Interval { lower, upper } => write!(f, "[{lower}, {upper})"),
            Bin::Above { lower } => write!(f, "[{lower}, +inf)"),
        }
    }
}
