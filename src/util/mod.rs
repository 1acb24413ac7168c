//! Internal utility functions and helpers.
//!
//! # Modules
//!
//! - [`bitops`] - Word-packing arithmetic shared by the bit field and its iterators

pub mod bitops;

// Re-export commonly used items
pub use bitops::{Word, WORD_BITS};
