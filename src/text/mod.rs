//! Whitespace-separated token input.
//!
//! [`TokenReader`] pulls one token at a time from any [`BufRead`], consuming
//! only the bytes of that token and the whitespace before it. Whatever follows
//! stays in the reader, so several fields or sets can be read back to back
//! from one stream:
//!
//! ```
//! use bitfield_set::{BitField, IntegerSet};
//!
//! let mut input = "1 0 1  0 2 -1".as_bytes();
//!
//! let mut bits = BitField::new(3).unwrap();
//! bits.read_from(&mut input).unwrap();
//!
//! let mut set = IntegerSet::new(4).unwrap();
//! set.read_from(&mut input).unwrap();
//!
//! assert_eq!(bits.to_string(), "1 0 1 ");
//! assert_eq!(set.to_string(), "{ 0, 2, }");
//! ```

use crate::error::{BitFieldError, Result};
use std::io::{self, BufRead};

/// Lazy whitespace tokenizer over a buffered reader.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    consumed: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            consumed: 0,
        }
    }

    /// Number of tokens returned so far.
    #[must_use]
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Read the next token, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so such a
    /// token still reaches the caller and is rejected there.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::Io`] if the underlying reader fails.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        let mut token = Vec::new();

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            self.reader.consume(used);

            if complete {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }

        self.consumed += 1;
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }

    /// Read the next token, failing if the input is exhausted.
    ///
    /// `expected` describes what was being read and ends up in the error.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::UnexpectedEndOfInput`] at end of input, or
    /// [`BitFieldError::Io`] if the reader fails.
    pub fn expect_token(&mut self, expected: &str) -> Result<String> {
        match self.next_token()? {
            Some(token) => Ok(token),
            None => Err(BitFieldError::unexpected_end_of_input(
                expected,
                self.consumed,
            )),
        }
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
