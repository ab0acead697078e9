//! Constant average-time lookup into non-uniform bins
//!
//! This crate maps scalars onto bins delimited by an arbitrary strictly
//! increasing boundary sequence. A linear-time precalculation overlays a
//! uniform grid on the boundaries so that each query needs one division and,
//! on average, a constant number of comparisons instead of a binary search.
//!
//! # Key Features
//!
//! - **O(m) preprocessing**: a single sweep over the boundaries
//! - **O(1) average queries**: O(log m) worst case, never more
//! - **Immutable, shareable index**: `BinIndex` is `Send + Sync` and read-only
//! - **Boundary builders**: fixed-width, quantile, linear and geometric edges
//! - **Batch operations**: label or count whole samples, optionally with rayon
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use fastbin_index::BinIndex;
//!
//! let index = BinIndex::new(vec![2.0, 11.0, 19.0, 20.0, 21.0, 27.0, 29.0, 30.0]).unwrap();
//!
//! assert_eq!(index.search(-4.0), 0); // below every bin
//! assert_eq!(index.search(13.2), 2); // in [11, 19)
//! assert_eq!(index.search(20.0), 4); // bins are left-inclusive
//! assert_eq!(index.search(30.0), 8); // at or above the last boundary
//! ```
//!
//! ## Rejecting Bad Boundaries
//!
//! ```rust
//! use fastbin_index::{BinIndex, ValidationError};
//!
//! let err = BinIndex::new(vec![2.0, 11.0, 5.0, 20.0]).unwrap_err();
//! assert!(matches!(err, ValidationError::NotStrictlyIncreasing { index: 2, .. }));
//! ```
//!
//! ## Quantile Bins for a Sample
//!
//! ```rust
//! use fastbin_index::{BoundaryBuilder, QuantileBoundaries, SearchOps};
//!
//! let data: Vec<f64> = (1..=100).map(|i| (i as f64).ln()).collect();
//! let index = QuantileBoundaries::new(4).build(&data).unwrap();
//!
//! for (label, count) in index.bin_counts(&data).iter().enumerate() {
//!     println!("{}: {}", index.bin(label).unwrap(), count);
//! }
//! ```

pub mod builders;
pub mod index;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{geometric_boundaries, linear_boundaries, FixedWidthBoundaries, QuantileBoundaries};
pub use index::BinIndex;
pub use ops::SearchOps;
pub use traits::BoundaryBuilder;
pub use types::Bin;

pub use fastbin_core::{BinFloat, Error, IndexError, Result, ValidationError};

// Convenience functions
/// Build an index with equal-width bins over the sample range
pub fn fixed_width_index(sample: &[f64], num_bins: usize) -> Result<BinIndex> {
    FixedWidthBoundaries::new(num_bins).build(sample)
}

/// Build an index whose bins hold roughly equal shares of the sample
pub fn quantile_index(sample: &[f64], num_bins: usize) -> Result<BinIndex> {
    QuantileBoundaries::new(num_bins).build(sample)
}
