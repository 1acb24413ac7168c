//! Sets built on bit fields.
//!
//! - [`IntegerSet`] - bounded set of integers in `[0, max_power)`

pub mod integer_set;

pub use integer_set::{IntegerSet, Members};

/// Value that ends a set's text input. It is never stored.
pub const TERMINATOR: i64 = -1;
