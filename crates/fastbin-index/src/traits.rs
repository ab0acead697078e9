//! Core traits for deriving boundaries from sample data

use crate::index::BinIndex;
use fastbin_core::{BinFloat, Result};

/// Trait for deriving a boundary sequence from sample data
pub trait BoundaryBuilder<F: BinFloat = f64> {
    /// Strictly increasing boundaries for the given sample
    ///
    /// Non-finite sample values are ignored.
    fn boundaries(&self, sample: &[F]) -> Result<Vec<F>>;

    /// Derive boundaries and build an index over them
    fn build(&self, sample: &[F]) -> Result<BinIndex<F>> {
        Ok(BinIndex::new(self.boundaries(sample)?)?)
    }

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
