//! Fixed-capacity packed bit field.
//!
//! # Overview
//!
//! `BitField` is a fixed-size bit array backed by `Box<[u64]>`. Its length is
//! chosen at construction and never changes; every access outside `[0, len)`
//! fails with [`ErrorKind::IndexOutOfRange`](crate::ErrorKind::IndexOutOfRange).
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! Bits of the last word at index `>= len` are padding. They are zero after
//! every operation, so two fields with the same length and the same logical
//! bits always have identical storage and equality can compare words.
//!
//! # Mixed-Length Algebra
//!
//! [`or`](BitField::or) and [`and`](BitField::and) accept operands of any
//! length. The result has the longer length, and the shorter operand behaves
//! as if its missing high bits were zero:
//!
//! ```
//! use bitfield_set::BitField;
//!
//! let mut short = BitField::new(4).unwrap();
//! let mut long = BitField::new(100).unwrap();
//! short.set_bit(1).unwrap();
//! long.set_bit(1).unwrap();
//! long.set_bit(90).unwrap();
//!
//! let or = short.or(&long);
//! assert_eq!(or.len(), 100);
//! assert!(or.get_bit(90).unwrap());
//!
//! let and = short.and(&long);
//! assert_eq!(and.len(), 100);
//! assert!(and.get_bit(1).unwrap());
//! assert!(!and.get_bit(90).unwrap());
//! ```
//!
//! # Performance Characteristics
//!
//! - Space: `⌈n/64⌉ * 8` bytes for `n` bits
//! - `set_bit` / `clear_bit` / `get_bit`: O(1)
//! - `or` / `and` / `not` / `count_ones`: O(n/64)

use crate::error::{BitFieldError, Result};
use crate::text::TokenReader;
use crate::util::bitops::{self, bit_mask, tail_mask, word_of, words_for_bits, Word, WORD_BITS};
use std::fmt;
use std::io::BufRead;
use std::iter::FusedIterator;

/// Fixed-length sequence of bits packed into 64-bit words.
///
/// # Type Properties
///
/// - `Clone`: deep copy; the clone shares no storage with the original
/// - `PartialEq`/`Eq`/`Hash`: length plus storage words
/// - `Display`: one `0`/`1` token per bit, each followed by a space
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitField {
    /// Storage words, `⌈len / 64⌉` of them. Padding bits are always zero.
    words: Box<[Word]>,

    /// Number of addressable bits.
    len: usize,
}

impl BitField {
    /// Create a bit field of `num_bits` bits, all cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::InvalidLength`] if `num_bits` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let bf = BitField::new(100).unwrap();
    /// assert_eq!(bf.len(), 100);
    /// assert_eq!(bf.num_words(), 2);
    /// assert_eq!(bf.count_ones(), 0);
    ///
    /// assert!(BitField::new(0).is_err());
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BitFieldError::invalid_length(num_bits));
        }

        Ok(Self::zeroed(num_bits))
    }

    /// Rebuild a bit field from raw storage words.
    ///
    /// # Errors
    ///
    /// - [`BitFieldError::InvalidLength`] if `len` is 0
    /// - [`BitFieldError::WordCountMismatch`] if `words.len() != ⌈len / 64⌉`
    /// - [`BitFieldError::PaddingBitsSet`] if any bit at index `>= len` is set
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let bf = BitField::from_words(vec![0b101], 3).unwrap();
    /// assert!(bf.get_bit(0).unwrap());
    /// assert!(!bf.get_bit(1).unwrap());
    /// assert!(bf.get_bit(2).unwrap());
    ///
    /// // Bit 3 lies beyond the requested length.
    /// assert!(BitField::from_words(vec![0b1000], 3).is_err());
    /// ```
    pub fn from_words(words: Vec<Word>, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(BitFieldError::invalid_length(len));
        }

        let expected = words_for_bits(len);
        if words.len() != expected {
            return Err(BitFieldError::word_count_mismatch(expected, words.len()));
        }

        if words.last().is_some_and(|last| last & !tail_mask(len) != 0) {
            return Err(BitFieldError::padding_bits_set(len));
        }

        Ok(Self {
            words: words.into_boxed_slice(),
            len,
        })
    }

    /// All-zero field of `num_bits` bits. Callers guarantee `num_bits > 0`.
    fn zeroed(num_bits: usize) -> Self {
        Self {
            words: vec![0; words_for_bits(num_bits)].into_boxed_slice(),
            len: num_bits,
        }
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the bit field has no bits.
    ///
    /// Always `false` for a successfully constructed `BitField`. Provided for
    /// API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of storage words, `⌈len / 64⌉`.
    #[must_use]
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Storage words in index order. Padding bits are zero.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(BitFieldError::index_out_of_bounds(index, self.len));
        }
        Ok(())
    }

    /// Read bit `index` without a bounds check against `len`.
    #[inline]
    fn bit(&self, index: usize) -> bool {
        self.words[word_of(index)] & bit_mask(index) != 0
    }

    /// Index of the storage word that holds bit `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let bf = BitField::new(130).unwrap();
    /// assert_eq!(bf.word_index(0).unwrap(), 0);
    /// assert_eq!(bf.word_index(64).unwrap(), 1);
    /// assert_eq!(bf.word_index(129).unwrap(), 2);
    /// assert!(bf.word_index(130).is_err());
    /// ```
    pub fn word_index(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        Ok(word_of(index))
    }

    /// Mask selecting bit `index` within its storage word.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let bf = BitField::new(70).unwrap();
    /// assert_eq!(bf.word_mask(3).unwrap(), 0b1000);
    /// assert_eq!(bf.word_mask(65).unwrap(), 0b10);
    /// ```
    pub fn word_mask(&self, index: usize) -> Result<Word> {
        self.check_index(index)?;
        Ok(bit_mask(index))
    }

    /// Set bit `index` to 1. Setting an already-set bit has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let mut bf = BitField::new(64).unwrap();
    /// bf.set_bit(10).unwrap();
    /// bf.set_bit(10).unwrap();
    /// assert!(bf.get_bit(10).unwrap());
    /// assert!(bf.set_bit(64).is_err());
    /// ```
    pub fn set_bit(&mut self, index: usize) -> Result<()> {
        let word = self.word_index(index)?;
        self.words[word] |= bit_mask(index);
        Ok(())
    }

    /// Clear bit `index` to 0. Clearing an already-clear bit has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `index >= len`.
    pub fn clear_bit(&mut self, index: usize) -> Result<()> {
        let word = self.word_index(index)?;
        self.words[word] &= !bit_mask(index);
        Ok(())
    }

    /// Value of bit `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::{BitField, ErrorKind};
    ///
    /// let mut bf = BitField::new(8).unwrap();
    /// bf.set_bit(7).unwrap();
    /// assert_eq!(bf.get_bit(7), Ok(true));
    /// assert_eq!(bf.get_bit(6), Ok(false));
    /// assert_eq!(bf.get_bit(8).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    /// ```
    pub fn get_bit(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    /// Clear all bits to 0, keeping the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let mut bf = BitField::new(64).unwrap();
    /// bf.set_bit(10).unwrap();
    /// bf.clear();
    /// assert_eq!(bf, BitField::new(64).unwrap());
    /// ```
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Number of bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        bitops::count_ones(&self.words)
    }

    /// Iterate over the indices of set bits in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let mut bf = BitField::new(200).unwrap();
    /// for i in [3, 64, 199] {
    ///     bf.set_bit(i).unwrap();
    /// }
    /// assert_eq!(bf.iter_ones().collect::<Vec<_>>(), vec![3, 64, 199]);
    /// ```
    #[must_use]
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Storage-level equality: same length and identical words.
    ///
    /// Fields of different lengths are never equal, even if every bit they
    /// both define agrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let a = BitField::new(10).unwrap();
    /// assert!(a.equals(&BitField::new(10).unwrap()));
    /// assert!(!a.equals(&BitField::new(11).unwrap()));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.len == other.len && self.words == other.words
    }

    /// Bitwise OR.
    ///
    /// The result is `max(self.len(), other.len())` bits long. Words that an
    /// operand does not have contribute nothing, so the longer operand's high
    /// bits pass through unchanged.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        let mut result = Self::zeroed(self.len.max(other.len));

        for (dst, src) in result.words.iter_mut().zip(self.words.iter()) {
            *dst = *src;
        }
        for (dst, src) in result.words.iter_mut().zip(other.words.iter()) {
            *dst |= *src;
        }

        result
    }

    /// Bitwise AND.
    ///
    /// The result is `max(self.len(), other.len())` bits long. Only the words
    /// present in both operands can be nonzero; everything above the shorter
    /// operand's storage stays cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let mut a = BitField::new(64).unwrap();
    /// let mut b = BitField::new(64).unwrap();
    /// a.set_bit(10).unwrap();
    /// a.set_bit(20).unwrap();
    /// b.set_bit(20).unwrap();
    ///
    /// let both = a.and(&b);
    /// assert_eq!(both.iter_ones().collect::<Vec<_>>(), vec![20]);
    /// ```
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        let mut result = Self::zeroed(self.len.max(other.len));

        for ((dst, a), b) in result
            .words
            .iter_mut()
            .zip(self.words.iter())
            .zip(other.words.iter())
        {
            *dst = a & b;
        }

        result
    }

    /// Bitwise NOT over the field's own length.
    ///
    /// Padding bits in the last word are cleared after inversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let mut bf = BitField::new(3).unwrap();
    /// bf.set_bit(1).unwrap();
    ///
    /// let inv = bf.not();
    /// assert_eq!(inv.to_string(), "1 0 1 ");
    /// assert_eq!(inv.words(), &[0b101]);
    /// assert_eq!(inv.not(), bf);
    /// ```
    #[must_use]
    pub fn not(&self) -> Self {
        let mut words: Box<[Word]> = self.words.iter().map(|w| !w).collect();

        if let Some(last) = words.last_mut() {
            *last &= tail_mask(self.len);
        }

        Self {
            words,
            len: self.len,
        }
    }

    /// Overwrite every bit from whitespace-separated `0`/`1` tokens.
    ///
    /// Exactly `len()` tokens are consumed, assigned to bits `0..len` in
    /// order. Input after the last token is left in `reader`.
    ///
    /// # Errors
    ///
    /// - [`BitFieldError::InvalidToken`] for a token other than `0` or `1`
    /// - [`BitFieldError::UnexpectedEndOfInput`] if fewer than `len()` tokens remain
    /// - [`BitFieldError::Io`] if the reader fails
    ///
    /// Bits assigned before the failing token keep their new values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::BitField;
    ///
    /// let mut bf = BitField::new(4).unwrap();
    /// bf.read_from("1 0\n0 1".as_bytes()).unwrap();
    /// assert_eq!(bf.iter_ones().collect::<Vec<_>>(), vec![0, 3]);
    ///
    /// assert!(bf.read_from("1 2 0 0".as_bytes()).is_err());
    /// ```
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        #[cfg(feature = "trace")]
        tracing::trace!(len = self.len, "BitField::read_from");

        let mut tokens = TokenReader::new(reader);

        for position in 0..self.len {
            let token = tokens.expect_token("bit value 0 or 1")?;
            match token.as_str() {
                "1" => self.set_bit(position)?,
                "0" => self.clear_bit(position)?,
                _ => return Err(BitFieldError::invalid_token(token, position)),
            }
        }

        Ok(())
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.len {
            write!(f, "{} ", u8::from(self.bit(index)))?;
        }
        Ok(())
    }
}

/// Ascending iterator over set-bit indices, created by [`BitField::iter_ones`].
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [Word],
    word_idx: usize,
    current: Word,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let offset = self.current.trailing_zeros() as usize;
                // Clear the lowest set bit.
                self.current &= self.current - 1;
                return Some(self.word_idx * WORD_BITS + offset);
            }

            let next = self.word_idx + 1;
            self.current = *self.words.get(next)?;
            self.word_idx = next;
        }
    }
}

impl FusedIterator for Ones<'_> {}
