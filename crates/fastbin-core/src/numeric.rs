//! Numeric trait for boundary and query values
//!
//! `BinFloat` adds the handful of lossy conversions the index needs on top of
//! [`num_traits::Float`]. The conversions are plain `as` casts, so they never
//! fail: counts become the nearest representable float and cell positions
//! saturate (NaN maps to 0).

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating-point type usable as a boundary or query value
pub trait BinFloat: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Convert a bin or sample count to this type
    fn from_count(n: usize) -> Self;

    /// Truncate a non-negative cell position to an index
    fn to_cell(self) -> usize;

    /// Widen to `f64` for error reporting and logging
    fn as_f64(self) -> f64;
}

impl BinFloat for f64 {
    #[inline]
    fn from_count(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn to_cell(self) -> usize {
        self as usize
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl BinFloat for f32 {
    #[inline]
    fn from_count(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn to_cell(self) -> usize {
        self as usize
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cell_truncates_and_saturates() {
        assert_eq!(3.99_f64.to_cell(), 3);
        assert_eq!(0.0_f64.to_cell(), 0);
        assert_eq!(f64::NAN.to_cell(), 0);
        assert_eq!((-2.5_f64).to_cell(), 0);
        assert_eq!(f64::INFINITY.to_cell(), usize::MAX);
        assert_eq!(7.5_f32.to_cell(), 7);
    }

    #[test]
    fn test_from_count() {
        assert_eq!(f64::from_count(7), 7.0);
        assert_eq!(f32::from_count(1024), 1024.0);
        assert_eq!(2.5_f32.as_f64(), 2.5);
    }
}
