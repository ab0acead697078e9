//! Non-uniform binning with constant average-time lookup
//!
//! Umbrella crate for the fastbin workspace. It re-exports the error types
//! and [`BinFloat`] trait from `fastbin-core` and the [`BinIndex`] structure,
//! boundary builders and batch operations from `fastbin-index`.
//!
//! ```rust
//! use fastbin::{BinIndex, SearchOps};
//!
//! let index = BinIndex::new(vec![0.0, 1.0, 10.0, 100.0]).unwrap();
//! assert_eq!(index.search_many(&[0.5, 5.0, 50.0, 500.0]), vec![1, 2, 3, 4]);
//! ```

pub use fastbin_core::{BinFloat, Error, IndexError, Result, ValidationError};
pub use fastbin_index::{
    fixed_width_index, geometric_boundaries, linear_boundaries, quantile_index, Bin, BinIndex,
    BoundaryBuilder, FixedWidthBoundaries, QuantileBoundaries, SearchOps,
};
