//! Core data structures.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bitfield.rs  - Packed fixed-length bit field
//! └── mod.rs       - This file (public API)
//! ```
//!
//! Everything above this layer, such as [`IntegerSet`](crate::IntegerSet),
//! is expressed in terms of [`BitField`] operations.

pub mod bitfield;

pub use bitfield::{BitField, Ones};
pub use crate::util::bitops::{Word, WORD_BITS};
