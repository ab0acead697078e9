//! The non-uniform bin index
//!
//! Based on Cadenas & Megson, "Non-uniform quantization with linear
//! average-case computation time" (arXiv:2108.08228).
//!
//! The boundary range `[b[0], b[m])` is split into `m` equal-width cells. For
//! every cell the index records how many interior boundaries fall inside it
//! (`histogram`) and the position of the first of them (`cumulative_histogram`).
//! A query computes its cell by one division and then only has to look at the
//! boundaries inside that cell.

use crate::types::Bin;
use fastbin_core::{BinFloat, IndexError, ValidationError};

/// Immutable lookup structure mapping values to bin labels
///
/// For `m + 1` boundaries the labels are `0..=m + 1`:
///
/// - `0` for values below `b[0]`
/// - `k` in `1..=m` for values in `[b[k - 1], b[k])`
/// - `m + 1` for values at or above `b[m]`
///
/// i.e. the label is the number of boundaries `<= value`. The only way to get
/// an instance is through the validating constructors, which also run the
/// precalculation, so every instance is ready to be searched.
#[derive(Debug, Clone, PartialEq)]
pub struct BinIndex<F: BinFloat = f64> {
    boundaries: Vec<F>,
    uniform_bin_width: F,
    histogram: Vec<usize>,
    cumulative_histogram: Vec<usize>,
}

impl<F: BinFloat> BinIndex<F> {
    /// Validate `boundaries` and precalculate the index
    ///
    /// Runs in O(m) time and space.
    pub fn new(boundaries: Vec<F>) -> Result<Self, ValidationError> {
        let uniform_bin_width = validate(&boundaries).map_err(|err| {
            log::debug!("Rejected boundary sequence: {err}");
            err
        })?;

        let index = precalculate(boundaries, uniform_bin_width);
        log::debug!(
            "Built bin index: {} bins over [{}, {}], uniform width {}, max cell occupancy {}",
            index.num_bins(),
            index.first(),
            index.last(),
            index.uniform_bin_width,
            index.histogram.iter().copied().max().unwrap_or(0),
        );
        Ok(index)
    }

    /// Copy `boundaries` and build the index
    pub fn from_slice(boundaries: &[F]) -> Result<Self, ValidationError> {
        Self::new(boundaries.to_vec())
    }

    /// All boundaries, strictly increasing
    pub fn boundaries(&self) -> &[F] {
        &self.boundaries
    }

    /// Boundary at `index`, for `index` in `0..=m`
    pub fn boundary(&self, index: usize) -> Result<F, IndexError> {
        self.boundaries.get(index).copied().ok_or(IndexError {
            index,
            len: self.boundaries.len(),
        })
    }

    /// First boundary
    pub fn first(&self) -> F {
        self.boundaries[0]
    }

    /// Last boundary
    pub fn last(&self) -> F {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// Number of finite bins, `m`
    pub fn num_bins(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Number of distinct labels `search` can return, `m + 2`
    pub fn num_labels(&self) -> usize {
        self.boundaries.len() + 1
    }

    /// Width of each uniform cell
    pub fn uniform_bin_width(&self) -> F {
        self.uniform_bin_width
    }

    /// Interior boundaries per uniform cell
    pub fn histogram(&self) -> &[usize] {
        &self.histogram
    }

    /// Prefix sums of the histogram, starting at 1
    pub fn cumulative_histogram(&self) -> &[usize] {
        &self.cumulative_histogram
    }

    /// The interval behind `label`
    pub fn bin(&self, label: usize) -> Result<Bin<F>, IndexError> {
        let m = self.num_bins();
        let b = &self.boundaries;
        match label {
            0 => Ok(Bin::Below { upper: b[0] }),
            k if k <= m => Ok(Bin::Interval {
                lower: b[k - 1],
                upper: b[k],
            }),
            k if k == m + 1 => Ok(Bin::Above { lower: b[m] }),
            _ => Err(IndexError {
                index: label,
                len: self.num_labels(),
            }),
        }
    }

    /// Label of the bin containing `value`
    ///
    /// O(1) on average, O(log m) worst case. NaN is treated as larger than
    /// every boundary and gets label `m + 1`.
    #[inline]
    pub fn search(&self, value: F) -> usize {
        let b = &self.boundaries;
        let m = b.len() - 1;

        if value < b[0] {
            return 0;
        }
        if value >= b[m] || value.is_nan() {
            return m + 1;
        }

        self.settle(value, self.dispatch(value))
    }

    /// Candidate label from the uniform cell of `value`.
    ///
    /// Requires `b[0] <= value < b[m]`.
    #[inline]
    fn dispatch(&self, value: F) -> usize {
        let b = &self.boundaries;
        let m = b.len() - 1;

        let cell = (((value - b[0]) / self.uniform_bin_width).to_cell() + 1).min(m);
        let h = self.histogram[cell - 1];
        let r = self.cumulative_histogram[cell - 1];

        match h {
            0 => r,
            1 => {
                if value >= b[r] {
                    r + 1
                } else {
                    r
                }
            }
            2 => {
                if value >= b[r + 1] {
                    r + 2
                } else if value < b[r] {
                    r
                } else {
                    r + 1
                }
            }
            _ => r + b[r..r + h].partition_point(|&edge| edge <= value),
        }
    }

    /// Like [`search`](Self::search), but `None` for NaN
    #[inline]
    pub fn try_search(&self, value: F) -> Option<usize> {
        if value.is_nan() {
            None
        } else {
            Some(self.search(value))
        }
    }

    /// Label by binary search over all boundaries
    ///
    /// Same result as [`search`](Self::search) in O(log m).
    pub fn search_binary(&self, value: F) -> usize {
        if value.is_nan() {
            return self.boundaries.len();
        }
        self.boundaries.partition_point(|&edge| edge <= value)
    }

    /// Move `label` onto the bin that really holds `value`.
    ///
    /// The sweep compares against `b[0] + c * w` while queries divide by `w`,
    /// so a boundary within a few ulps of a cell edge can be counted in the
    /// neighbouring cell. The candidate is then off by at most one label.
    /// Requires `b[0] <= value < b[m]`.
    #[inline]
    fn settle(&self, value: F, mut label: usize) -> usize {
        let b = &self.boundaries;
        let m = b.len() - 1;
        while label > 1 && value < b[label - 1] {
            label -= 1;
        }
        while label < m && value >= b[label] {
            label += 1;
        }
        label
    }
}

impl<F: BinFloat> TryFrom<Vec<F>> for BinIndex<F> {
    type Error = ValidationError;

    fn try_from(boundaries: Vec<F>) -> Result<Self, Self::Error> {
        Self::new(boundaries)
    }
}

impl<F: BinFloat> TryFrom<&[F]> for BinIndex<F> {
    type Error = ValidationError;

    fn try_from(boundaries: &[F]) -> Result<Self, Self::Error> {
        Self::from_slice(boundaries)
    }
}

/// Check the boundary sequence and return the uniform cell width
fn validate<F: BinFloat>(boundaries: &[F]) -> Result<F, ValidationError> {
    if boundaries.len() < 2 {
        return Err(ValidationError::TooFewBoundaries {
            expected: 2,
            actual: boundaries.len(),
        });
    }

    for (index, &value) in boundaries.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite {
                index,
                value: value.as_f64(),
            });
        }
        if index > 0 {
            let previous = boundaries[index - 1];
            if previous >= value {
                return Err(ValidationError::NotStrictlyIncreasing {
                    index,
                    previous: previous.as_f64(),
                    current: value.as_f64(),
                });
            }
        }
    }

    let m = boundaries.len() - 1;
    let first = boundaries[0];
    let last = boundaries[m];
    let width = (last - first) / F::from_count(m);
    if !width.is_finite() || width <= F::zero() {
        return Err(ValidationError::DegenerateRange {
            first: first.as_f64(),
            last: last.as_f64(),
            width: width.as_f64(),
        });
    }

    Ok(width)
}

/// Build the per-cell histogram and its prefix sums.
///
/// Interior boundaries and uniform cell edges are both sorted, so a single
/// forward sweep assigns every boundary to its cell.
fn precalculate<F: BinFloat>(boundaries: Vec<F>, uniform_bin_width: F) -> BinIndex<F> {
    let m = boundaries.len() - 1;

    let mut histogram = vec![0usize; m];
    // Cells are numbered from 1; cell c covers [b[0] + (c-1)w, b[0] + cw].
    // Each upper edge is derived from the cell number, never accumulated.
    let first = boundaries[0];
    let mut cell = 1;
    let mut upper = first + uniform_bin_width;
    for &boundary in &boundaries[1..m] {
        while boundary > upper && cell < m {
            cell += 1;
            upper = first + F::from_count(cell) * uniform_bin_width;
        }
        histogram[cell - 1] += 1;
    }

    // The first boundary was left out of the sweep, hence the start at 1
    let mut cumulative_histogram = Vec::with_capacity(m + 1);
    let mut running = 1;
    cumulative_histogram.push(running);
    for &count in &histogram {
        running += count;
        cumulative_histogram.push(running);
    }

    BinIndex {
        boundaries,
        uniform_bin_width,
        histogram,
        cumulative_histogram,
    }
}
