//! Fixed-capacity packed bit fields and bounded integer sets.
//!
//! This crate provides two value types:
//!
//! - [`BitField`]: a fixed-length sequence of bits packed into 64-bit words,
//!   with bounds-checked bit access and whole-field boolean algebra
//!   (`or`, `and`, `not`, equality) that works across differing lengths.
//! - [`IntegerSet`]: a set of integers in `[0, max_power)` that owns a
//!   `BitField` and exposes membership, insertion, deletion, union,
//!   intersection and complement.
//!
//! # Quick Start
//!
//! ```
//! use bitfield_set::prelude::*;
//!
//! let mut set = IntegerSet::new(10).unwrap();
//! set.insert_all([2, 5, 7]).unwrap();
//!
//! assert!(set.is_member(5).unwrap());
//! assert!(!set.is_member(3).unwrap());
//! assert_eq!(set.to_string(), "{ 2, 5, 7, }");
//!
//! // Out-of-range access is an error, never a silent clamp.
//! assert_eq!(set.insert(10).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
//! ```
//!
//! # Text Format
//!
//! A bit field prints as one `0`/`1` token per bit, each followed by a space,
//! and reads back the same tokens. A set prints as `{ e0, e1, }` and reads a
//! whitespace-separated list of elements terminated by `-1`:
//!
//! ```
//! use bitfield_set::{BitField, IntegerSet};
//!
//! let mut bits = BitField::new(4).unwrap();
//! bits.read_from("0 1 1 0".as_bytes()).unwrap();
//! assert_eq!(bits.to_string(), "0 1 1 0 ");
//!
//! let set = IntegerSet::from_bitfield(bits);
//! assert_eq!(set.to_string(), "{ 1, 2, }");
//! ```
//!
//! # Features
//!
//! - `trace` - emit [`tracing`](https://docs.rs/tracing) events from text input
//!   and set clearing
//! - `proptest` - enable property tests embedded in the library modules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Core data structures
pub mod core;

/// Error types and result aliases
pub mod error;

/// Set types built on bit fields
pub mod sets;

/// Whitespace token input
pub mod text;

/// Utility functions and helpers
pub mod util;

// Re-export commonly used types at crate root
pub use crate::core::BitField;
pub use error::{BitFieldError, ErrorKind, Result};
pub use sets::IntegerSet;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bitfield_set::prelude::*;
///
/// let a = BitField::new(8).unwrap();
/// let set = IntegerSet::from_bitfield(a.not());
/// assert_eq!(set.len(), 8);
/// ```
pub mod prelude {
    pub use crate::core::{BitField, Ones};
    pub use crate::error::{BitFieldError, ErrorKind, Result};
    pub use crate::sets::{IntegerSet, Members};
}
