//! Bounded set of small non-negative integers.
//!
//! An [`IntegerSet`] owns one [`BitField`] and reads bit `e` as "element `e`
//! is a member". The field's length is the set's universe size
//! ([`max_power`](IntegerSet::max_power)); valid elements lie in
//! `[0, max_power)`.
//!
//! Set algebra maps directly onto bit field algebra, including its
//! mixed-length rules: a union or intersection of sets over different
//! universes has the larger universe, and an intersection never contains an
//! element the smaller universe cannot represent.
//!
//! ```
//! use bitfield_set::IntegerSet;
//!
//! let mut a = IntegerSet::new(5).unwrap();
//! let mut b = IntegerSet::new(5).unwrap();
//! a.insert_all([0, 1, 2]).unwrap();
//! b.insert_all([1, 2, 3]).unwrap();
//!
//! assert_eq!(a.intersect(&b).to_string(), "{ 1, 2, }");
//! assert_eq!(a.union(&b).to_string(), "{ 0, 1, 2, 3, }");
//! assert_eq!(a.complement().to_string(), "{ 3, 4, }");
//! ```

use super::TERMINATOR;
use crate::core::bitfield::{BitField, Ones};
use crate::error::{BitFieldError, Result};
use crate::text::TokenReader;
use std::fmt;
use std::io::BufRead;

/// Set of integers in `[0, max_power)` backed by a [`BitField`].
///
/// Equality compares the underlying bit fields, so sets over different
/// universes are never equal even when their members coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerSet {
    bits: BitField,
}

impl IntegerSet {
    /// Create an empty set over the universe `[0, max_power)`.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::InvalidLength`] if `max_power` is 0.
    pub fn new(max_power: usize) -> Result<Self> {
        Ok(Self {
            bits: BitField::new(max_power)?,
        })
    }

    /// Adopt a bit field as a set: its length becomes the universe and its
    /// set bits become the members.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::{BitField, IntegerSet};
    ///
    /// let mut bf = BitField::new(8).unwrap();
    /// bf.set_bit(6).unwrap();
    ///
    /// let set = IntegerSet::from_bitfield(bf);
    /// assert_eq!(set.max_power(), 8);
    /// assert!(set.is_member(6).unwrap());
    /// ```
    #[must_use]
    pub fn from_bitfield(bits: BitField) -> Self {
        Self { bits }
    }

    /// Copy of the underlying bit field.
    #[must_use]
    pub fn to_bitfield(&self) -> BitField {
        self.bits.clone()
    }

    /// Consume the set, returning the underlying bit field.
    #[must_use]
    pub fn into_bitfield(self) -> BitField {
        self.bits
    }

    /// Borrow the underlying bit field.
    #[must_use]
    #[inline]
    pub fn as_bitfield(&self) -> &BitField {
        &self.bits
    }

    /// Universe size: every member is below this value.
    #[must_use]
    #[inline]
    pub fn max_power(&self) -> usize {
        self.bits.len()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.words().iter().all(|&w| w == 0)
    }

    /// Check whether `elem` is a member.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `elem >= max_power()`.
    pub fn is_member(&self, elem: usize) -> Result<bool> {
        self.bits.get_bit(elem)
    }

    /// Remove every member, keeping the universe.
    pub fn clear(&mut self) {
        #[cfg(feature = "trace")]
        tracing::debug!(max_power = self.max_power(), "IntegerSet::clear");

        self.bits.clear();
    }

    /// Add `elem` to the set.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `elem >= max_power()`.
    pub fn insert(&mut self, elem: usize) -> Result<()> {
        self.bits.set_bit(elem)
    }

    /// Remove `elem` from the set.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `elem >= max_power()`.
    pub fn remove(&mut self, elem: usize) -> Result<()> {
        self.bits.clear_bit(elem)
    }

    /// Insert each element in turn, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] for the first element
    /// outside the universe. Elements before it stay inserted.
    pub fn insert_all<I>(&mut self, elems: I) -> Result<()>
    where
        I: IntoIterator<Item = usize>,
    {
        for elem in elems {
            self.insert(elem)?;
        }
        Ok(())
    }

    /// Members in ascending order.
    #[must_use]
    pub fn members(&self) -> Members<'_> {
        Members {
            ones: self.bits.iter_ones(),
        }
    }

    /// Same universe and same members.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.bits.equals(&other.bits)
    }

    /// Negation of [`equals`](Self::equals).
    #[must_use]
    pub fn not_equals(&self, other: &Self) -> bool {
        !self.equals(other)
    }

    /// Union. The result's universe is the larger of the two.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_bitfield(self.bits.or(&other.bits))
    }

    /// Copy of this set with `elem` added. `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `elem >= max_power()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::IntegerSet;
    ///
    /// let empty = IntegerSet::new(4).unwrap();
    /// let one = empty.with_elem(3).unwrap();
    /// assert!(one.is_member(3).unwrap());
    /// assert!(empty.is_empty());
    /// ```
    pub fn with_elem(&self, elem: usize) -> Result<Self> {
        let mut set = self.clone();
        set.insert(elem)?;
        Ok(set)
    }

    /// Copy of this set with `elem` removed. `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BitFieldError::IndexOutOfBounds`] if `elem >= max_power()`.
    pub fn without_elem(&self, elem: usize) -> Result<Self> {
        let mut set = self.clone();
        set.remove(elem)?;
        Ok(set)
    }

    /// Intersection. The result's universe is the larger of the two; elements
    /// beyond the smaller universe are never members.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self::from_bitfield(self.bits.and(&other.bits))
    }

    /// Every element of the universe that is not a member.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self::from_bitfield(self.bits.not())
    }

    /// Replace the contents with integers read from `reader`.
    ///
    /// The set is cleared first. Whitespace-separated integers are then read
    /// and inserted until the terminator `-1`, which is not inserted. Input
    /// after the terminator is left in `reader`.
    ///
    /// # Errors
    ///
    /// - [`BitFieldError::IndexOutOfBounds`] for an element `>= max_power()`
    /// - [`BitFieldError::NegativeElement`] for a negative value other than `-1`
    /// - [`BitFieldError::MalformedInteger`] for a token that is not an integer
    /// - [`BitFieldError::UnexpectedEndOfInput`] if input ends before `-1`
    /// - [`BitFieldError::Io`] if the reader fails
    ///
    /// Elements inserted before the failure remain in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfield_set::{ErrorKind, IntegerSet};
    ///
    /// let mut set = IntegerSet::new(5).unwrap();
    /// set.read_from("4 1 -1".as_bytes()).unwrap();
    /// assert_eq!(set.members().collect::<Vec<_>>(), vec![1, 4]);
    ///
    /// let err = set.read_from("3 7 -1".as_bytes()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    /// assert_eq!(set.members().collect::<Vec<_>>(), vec![3]);
    /// ```
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        #[cfg(feature = "trace")]
        tracing::trace!(max_power = self.max_power(), "IntegerSet::read_from");

        self.clear();
        let mut tokens = TokenReader::new(reader);

        loop {
            let token = tokens.expect_token("element or terminator -1")?;
            let value: i64 = token
                .parse()
                .map_err(|_| BitFieldError::malformed_integer(&token))?;

            if value == TERMINATOR {
                return Ok(());
            }
            if value < 0 {
                return Err(BitFieldError::negative_element(value, self.max_power()));
            }

            // Values past usize::MAX are out of range either way.
            let elem = usize::try_from(value).unwrap_or(usize::MAX);
            self.insert(elem)?;
        }
    }
}

impl From<BitField> for IntegerSet {
    fn from(bits: BitField) -> Self {
        Self::from_bitfield(bits)
    }
}

impl From<IntegerSet> for BitField {
    fn from(set: IntegerSet) -> Self {
        set.into_bitfield()
    }
}

impl fmt::Display for IntegerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for elem in self.members() {
            write!(f, "{}, ", elem)?;
        }
        f.write_str("}")
    }
}

/// Ascending iterator over set members, created by [`IntegerSet::members`].
#[derive(Debug, Clone)]
pub struct Members<'a> {
    ones: Ones<'a>,
}

impl Iterator for Members<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.ones.next()
    }
}

impl std::iter::FusedIterator for Members<'_> {}
