//! Batch operations on a bin index

use crate::index::BinIndex;
use fastbin_core::{BinFloat, Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Values handed to one rayon task in the parallel operations
#[cfg(feature = "parallel")]
const PAR_CHUNK: usize = 4096;

/// Operations that search many values against one index
pub trait SearchOps<F: BinFloat = f64> {
    /// Label every value
    fn search_many(&self, values: &[F]) -> Vec<usize>;

    /// Label every value into a caller-provided buffer of the same length
    fn search_into(&self, values: &[F], out: &mut [usize]) -> Result<()>;

    /// Number of values per label, `m + 2` entries
    fn bin_counts(&self, values: &[F]) -> Vec<usize>;

    /// Fraction of values per label; all zero for an empty sample
    fn bin_frequencies(&self, values: &[F]) -> Vec<F>;

    /// Parallel [`search_many`](Self::search_many)
    #[cfg(feature = "parallel")]
    fn par_search_many(&self, values: &[F]) -> Vec<usize>;

    /// Parallel [`bin_counts`](Self::bin_counts)
    #[cfg(feature = "parallel")]
    fn par_bin_counts(&self, values: &[F]) -> Vec<usize>;
}

impl<F: BinFloat> SearchOps<F> for BinIndex<F> {
    fn search_many(&self, values: &[F]) -> Vec<usize> {
        values.iter().map(|&value| self.search(value)).collect()
    }

    fn search_into(&self, values: &[F], out: &mut [usize]) -> Result<()> {
        if values.len() != out.len() {
            return Err(Error::size_mismatch(values.len(), out.len(), "output buffer"));
        }
        for (slot, &value) in out.iter_mut().zip(values) {
            *slot = self.search(value);
        }
        Ok(())
    }

    fn bin_counts(&self, values: &[F]) -> Vec<usize> {
        count_into(self, values, vec![0; self.num_labels()])
    }

    fn bin_frequencies(&self, values: &[F]) -> Vec<F> {
        let counts = self.bin_counts(values);
        if values.is_empty() {
            return vec![F::zero(); counts.len()];
        }
        let total = F::from_count(values.len());
        counts
            .into_iter()
            .map(|count| F::from_count(count) / total)
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn par_search_many(&self, values: &[F]) -> Vec<usize> {
        values
            .par_iter()
            .with_min_len(PAR_CHUNK)
            .map(|&value| self.search(value))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn par_bin_counts(&self, values: &[F]) -> Vec<usize> {
        let labels = self.num_labels();
        values
            .par_chunks(PAR_CHUNK)
            .map(|chunk| count_into(self, chunk, vec![0; labels]))
            .reduce(
                || vec![0; labels],
                |mut acc, part| {
                    for (total, count) in acc.iter_mut().zip(part) {
                        *total += count;
                    }
                    acc
                },
            )
    }
}

fn count_into<F: BinFloat>(index: &BinIndex<F>, values: &[F], mut counts: Vec<usize>) -> Vec<usize> {
    for &value in values {
        counts[index.search(value)] += 1;
    }
    counts
}
