//! Word-packing arithmetic.
//!
//! Bits are packed into [`Word`]s in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! These helpers are unchecked: callers validate `index < len` first.

#![allow(clippy::cast_possible_truncation)]

/// Storage unit for packed bits.
pub type Word = u64;

/// Number of bits held by one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of words needed to hold `num_bits` bits, `⌈num_bits / WORD_BITS⌉`.
///
/// # Examples
///
/// ```
/// use bitfield_set::util::bitops::words_for_bits;
///
/// assert_eq!(words_for_bits(1), 1);
/// assert_eq!(words_for_bits(64), 1);
/// assert_eq!(words_for_bits(65), 2);
/// ```
#[inline]
#[must_use]
pub const fn words_for_bits(num_bits: usize) -> usize {
    (num_bits + WORD_BITS - 1) / WORD_BITS
}

/// Index of the word holding bit `index`.
#[inline(always)]
#[must_use]
pub const fn word_of(index: usize) -> usize {
    index / WORD_BITS
}

/// Single-bit mask selecting bit `index` within its word.
///
/// # Examples
///
/// ```
/// use bitfield_set::util::bitops::bit_mask;
///
/// assert_eq!(bit_mask(0), 1);
/// assert_eq!(bit_mask(3), 0b1000);
/// assert_eq!(bit_mask(64), 1);
/// ```
#[inline(always)]
#[must_use]
pub const fn bit_mask(index: usize) -> Word {
    1 << (index % WORD_BITS)
}

/// Mask of the meaningful bits in the last word of a `num_bits`-long field.
///
/// Returns `Word::MAX` when `num_bits` is a multiple of [`WORD_BITS`], since
/// the last word then has no padding.
///
/// # Examples
///
/// ```
/// use bitfield_set::util::bitops::tail_mask;
///
/// assert_eq!(tail_mask(3), 0b111);
/// assert_eq!(tail_mask(64), u64::MAX);
/// assert_eq!(tail_mask(65), 1);
/// ```
#[inline]
#[must_use]
pub const fn tail_mask(num_bits: usize) -> Word {
    match num_bits % WORD_BITS {
        0 => Word::MAX,
        extra => (1 << extra) - 1,
    }
}

/// Total number of set bits across `words`.
#[inline]
#[must_use]
pub fn count_ones(words: &[Word]) -> usize {
    words.iter().map(|w| w.count_ones() as usize).sum()
}
