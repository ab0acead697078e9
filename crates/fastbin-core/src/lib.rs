//! Core types for non-uniform binning
//!
//! This crate holds the pieces shared by every fastbin crate: the unified
//! error types and the [`BinFloat`] trait that boundary and query values
//! implement.

pub mod error;
pub mod numeric;

// Re-export core types
pub use error::{Error, IndexError, Result, ValidationError};
pub use numeric::BinFloat;
