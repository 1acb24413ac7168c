//! Error types for bit field and integer set operations.
//!
//! Every fallible operation in this crate returns [`Result<T>`]. Errors are
//! raised at the point of violation and never recovered internally: an index
//! is never clamped, a length is never rounded up.
//!
//! # Error Kinds
//!
//! Each [`BitFieldError`] variant carries its own context, and
//! [`BitFieldError::kind`] groups them into three coarse categories:
//!
//! - [`ErrorKind::InvalidArgument`] - bad lengths, malformed text tokens
//! - [`ErrorKind::IndexOutOfRange`] - bit or element access outside `[0, len)`
//! - [`ErrorKind::Io`] - the underlying reader failed
//!
//! # Error Propagation
//!
//! ```
//! use bitfield_set::{BitField, ErrorKind, Result};
//!
//! fn first_and_last(len: usize) -> Result<BitField> {
//!     let mut bf = BitField::new(len)?;
//!     bf.set_bit(0)?;
//!     bf.set_bit(len - 1)?;
//!     Ok(bf)
//! }
//! # assert!(first_and_last(10).is_ok());
//! # assert_eq!(first_and_last(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bit field and set operations.
pub type Result<T> = std::result::Result<T, BitFieldError>;

/// Coarse classification of a [`BitFieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A length, token, or raw storage value was rejected.
    InvalidArgument,
    /// A bit or element index fell outside `[0, len)`.
    IndexOutOfRange,
    /// Reading from the underlying stream failed.
    Io,
}

/// Errors that can occur while building, indexing, or reading bit fields
/// and integer sets.
///
/// `Clone` + `PartialEq` keep errors easy to compare in tests, which is why
/// I/O failures are stored as a message rather than as `std::io::Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum BitFieldError {
    /// A bit field (or set universe) was requested with zero length.
    InvalidLength {
        /// The rejected length.
        length: usize,
    },

    /// A bit or element index is `>= length`.
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// Length of the bit field.
        length: usize,
    },

    /// A negative element (other than the `-1` terminator) was read into a set.
    NegativeElement {
        /// The value read from the stream.
        value: i64,
        /// Universe size of the set.
        length: usize,
    },

    /// A bit field token was neither `0` nor `1`.
    InvalidToken {
        /// The offending token.
        token: String,
        /// Zero-based bit position the token was meant for.
        position: usize,
    },

    /// A set token could not be parsed as an integer.
    MalformedInteger {
        /// The offending token.
        token: String,
    },

    /// The stream ended before the expected number of tokens (or the
    /// terminator) was read.
    UnexpectedEndOfInput {
        /// What the reader was waiting for.
        expected: String,
        /// Number of tokens consumed before the stream ended.
        consumed: usize,
    },

    /// Raw storage does not have `ceil(len / WORD_BITS)` words.
    WordCountMismatch {
        /// Word count required by the requested length.
        expected: usize,
        /// Word count supplied.
        actual: usize,
    },

    /// Raw storage has bits set at or beyond the requested length.
    PaddingBitsSet {
        /// The requested length.
        length: usize,
    },

    /// The underlying reader returned an error.
    Io {
        /// Description of the I/O failure.
        message: String,
    },
}

impl fmt::Display for BitFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => {
                write!(
                    f,
                    "Invalid bit field length: {}. Length must be positive.",
                    length
                )
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of range for bit field of length {}",
                    index, length
                )
            }
            Self::NegativeElement { value, length } => {
                write!(
                    f,
                    "Element {} out of range for set with universe [0, {})",
                    value, length
                )
            }
            Self::InvalidToken { token, position } => {
                write!(
                    f,
                    "Invalid bit value '{}' at position {}: expected 0 or 1",
                    token, position
                )
            }
            Self::MalformedInteger { token } => {
                write!(f, "Malformed integer '{}' in set input", token)
            }
            Self::UnexpectedEndOfInput { expected, consumed } => {
                write!(
                    f,
                    "Unexpected end of input after {} tokens: expected {}",
                    consumed, expected
                )
            }
            Self::WordCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Word count mismatch: need {} words, got {}",
                    expected, actual
                )
            }
            Self::PaddingBitsSet { length } => {
                write!(
                    f,
                    "Raw words have bits set at or beyond length {}",
                    length
                )
            }
            Self::Io { message } => write!(f, "I/O error: {}", message),
        }
    }
}

impl std::error::Error for BitFieldError {}

impl From<std::io::Error> for BitFieldError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl BitFieldError {
    /// Classify this error.
    ///
    /// # Examples
    /// ```
    /// use bitfield_set::{BitFieldError, ErrorKind};
    ///
    /// assert_eq!(
    ///     BitFieldError::index_out_of_bounds(10, 10).kind(),
    ///     ErrorKind::IndexOutOfRange
    /// );
    /// assert_eq!(BitFieldError::invalid_length(0).kind(), ErrorKind::InvalidArgument);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfBounds { .. } | Self::NegativeElement { .. } => {
                ErrorKind::IndexOutOfRange
            }
            Self::InvalidLength { .. }
            | Self::InvalidToken { .. }
            | Self::MalformedInteger { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::WordCountMismatch { .. }
            | Self::PaddingBitsSet { .. } => ErrorKind::InvalidArgument,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Create an `InvalidLength` error.
    #[must_use]
    pub fn invalid_length(length: usize) -> Self {
        Self::InvalidLength { length }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create a `NegativeElement` error.
    #[must_use]
    pub fn negative_element(value: i64, length: usize) -> Self {
        Self::NegativeElement { value, length }
    }

    /// Create an `InvalidToken` error.
    #[must_use]
    pub fn invalid_token(token: impl Into<String>, position: usize) -> Self {
        Self::InvalidToken {
            token: token.into(),
            position,
        }
    }

    /// Create a `MalformedInteger` error.
    #[must_use]
    pub fn malformed_integer(token: impl Into<String>) -> Self {
        Self::MalformedInteger {
            token: token.into(),
        }
    }

    /// Create an `UnexpectedEndOfInput` error.
    #[must_use]
    pub fn unexpected_end_of_input(expected: impl Into<String>, consumed: usize) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.into(),
            consumed,
        }
    }

    /// Create a `WordCountMismatch` error.
    #[must_use]
    pub fn word_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::WordCountMismatch { expected, actual }
    }

    /// Create a `PaddingBitsSet` error.
    #[must_use]
    pub fn padding_bits_set(length: usize) -> Self {
        Self::PaddingBitsSet { length }
    }

    /// Create an `Io` error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_length() {
        let err = BitFieldError::invalid_length(0);
        let display = format!("{err}");
        assert!(display.contains("length: 0"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_error_display_index_out_of_bounds() {
        let err = BitFieldError::index_out_of_bounds(150, 100);
        let display = format!("{}", err);
        assert!(display.contains("150"));
        assert!(display.contains("100"));
        assert!(display.contains("out of range"));
    }

    #[test]
    fn test_error_display_negative_element() {
        let err = BitFieldError::negative_element(-7, 5);
        let display = format!("{err}");
        assert!(display.contains("-7"));
        assert!(display.contains("[0, 5)"));
    }

    #[test]
    fn test_error_display_invalid_token() {
        let err = BitFieldError::invalid_token("2", 3);
        let display = format!("{err}");
        assert!(display.contains("'2'"));
        assert!(display.contains("position 3"));
        assert!(display.contains("0 or 1"));
    }

    #[test]
    fn test_error_display_malformed_integer() {
        let err = BitFieldError::malformed_integer("abc");
        assert!(format!("{err}").contains("'abc'"));
    }

    #[test]
    fn test_error_display_unexpected_end_of_input() {
        let err = BitFieldError::unexpected_end_of_input("terminator -1", 4);
        let display = format!("{err}");
        assert!(display.contains("after 4 tokens"));
        assert!(display.contains("terminator -1"));
    }

    #[test]
    fn test_error_display_raw_storage() {
        let err = BitFieldError::word_count_mismatch(2, 1);
        assert!(format!("{err}").contains("need 2 words, got 1"));

        let err = BitFieldError::padding_bits_set(10);
        assert!(format!("{err}").contains("length 10"));
    }

    #[test]
    fn test_error_kinds() {
        use ErrorKind::*;

        let cases = [
            (BitFieldError::invalid_length(0), InvalidArgument),
            (BitFieldError::index_out_of_bounds(1, 1), IndexOutOfRange),
            (BitFieldError::negative_element(-2, 1), IndexOutOfRange),
            (BitFieldError::invalid_token("x", 0), InvalidArgument),
            (BitFieldError::malformed_integer("x"), InvalidArgument),
            (BitFieldError::unexpected_end_of_input("bit", 0), InvalidArgument),
            (BitFieldError::word_count_mismatch(1, 2), InvalidArgument),
            (BitFieldError::padding_bits_set(3), InvalidArgument),
            (BitFieldError::io("broken pipe"), Io),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "wrong kind for {err:?}");
        }
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err: BitFieldError = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(format!("{err}").contains("stream closed"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _err: Box<dyn std::error::Error> = Box::new(BitFieldError::invalid_length(0));
    }

    #[test]
    fn test_error_clone() {
        let err1 = BitFieldError::invalid_token("7", 0);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(BitFieldError::invalid_length(0))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
