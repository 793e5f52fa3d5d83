//! Ordered digit storage for positional numbers.

use std::{
    fmt::{self, Display},
    slice,
};

use crate::{Base, DigitListError};

/// A non-negative integer stored as a list of digits in a declared [`Base`].
///
/// Index 0 holds the most significant digit. Every stored digit is smaller
/// than the base; operations that would break this are rejected with
/// [`DigitListError::InvalidDigit`].
///
/// # Equality
///
/// Two lists compare equal when they hold the same digits in the same order.
/// The base is not compared, so `[1, 0]` in base 2 equals `[1, 0]` in base 10.
/// Compare [`value`](Self::value) for numeric equality.
///
/// # Examples
///
/// ```
/// use numlist_core::{Base, DigitList};
///
/// let mut list = DigitList::with_base(Base::TERNARY);
/// list.push(1)?;
/// list.push(2)?;
/// assert!(list.push(3).is_err());
///
/// list.shift_left();
/// assert_eq!(list, [1, 2, 0]);
/// assert!(list.swap(0, 2));
/// assert_eq!(list, [0, 2, 1]);
/// # Ok::<(), numlist_core::DigitListError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DigitList {
    digits: Vec<u8>,
    base: Base,
}

impl DigitList {
    /// Creates an empty decimal list.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::with_base(Base::DECIMAL)
    }

    /// Creates an empty list in the given base.
    #[must_use]
    #[inline]
    pub fn with_base(base: Base) -> Self {
        Self {
            digits: Vec::new(),
            base,
        }
    }

    /// Creates a list from digits given most significant first.
    ///
    /// # Errors
    ///
    /// Returns [`DigitListError::InvalidDigit`] for the first digit that is not
    /// valid in `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numlist_core::{Base, DigitList};
    ///
    /// let list = DigitList::from_digits(vec![1, 1, 1, 2, 0], Base::TERNARY)?;
    /// assert_eq!(list.len(), 5);
    /// assert!(DigitList::from_digits(vec![1, 3], Base::TERNARY).is_err());
    /// # Ok::<(), numlist_core::DigitListError>(())
    /// ```
    pub fn from_digits(digits: Vec<u8>, base: Base) -> Result<Self, DigitListError> {
        for &digit in &digits {
            base.check(digit)?;
        }
        Ok(Self { digits, base })
    }

    /// Creates a list from digits already known to be valid in `base`.
    pub(crate) fn from_digits_unchecked(digits: Vec<u8>, base: Base) -> Self {
        debug_assert!(digits.iter().all(|&d| base.contains(d)));
        Self { digits, base }
    }

    /// Returns the base the digits are interpreted under.
    #[must_use]
    #[inline]
    pub fn base(&self) -> Base {
        self.base
    }

    /// Returns the number of digits.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if the list holds no digits.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the digits, most significant first.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Returns a copy of the digits, most significant first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.digits.clone()
    }

    /// Returns an iterator over the digits, most significant first.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, u8> {
        self.digits.iter()
    }

    fn check_index(&self, index: usize) -> Result<usize, DigitListError> {
        if index < self.digits.len() {
            Ok(index)
        } else {
            Err(DigitListError::IndexOutOfRange {
                index,
                len: self.digits.len(),
            })
        }
    }

    /// Appends a digit at the least significant end.
    ///
    /// # Errors
    ///
    /// Returns [`DigitListError::InvalidDigit`] if `digit` is not valid in the
    /// base of the list.
    pub fn push(&mut self, digit: u8) -> Result<(), DigitListError> {
        self.digits.push(self.base.check(digit)?);
        Ok(())
    }

    /// Appends every digit of `digits`, most significant first.
    ///
    /// All digits are validated before any is appended, so the list is left
    /// unchanged on error. Returns `true` if at least one digit was appended.
    ///
    /// # Errors
    ///
    /// Returns [`DigitListError::InvalidDigit`] for the first digit that is not
    /// valid in the base of the list.
    pub fn extend_digits<I>(&mut self, digits: I) -> Result<bool, DigitListError>
    where
        I: IntoIterator<Item = u8>,
    {
        let digits = digits
            .into_iter()
            .map(|digit| self.base.check(digit))
            .collect::<Result<Vec<_>, _>>()?;
        let appended = !digits.is_empty();
        self.digits.extend(digits);
        Ok(appended)
    }

    /// Inserting a digit between existing positions is not offered.
    ///
    /// # Errors
    ///
    /// Always returns [`DigitListError::Unsupported`]. Use [`push`](Self::push)
    /// or [`shift_left`](Self::shift_left) to grow a number.
    pub fn insert(&mut self, _index: usize, _digit: u8) -> Result<(), DigitListError> {
        Err(DigitListError::Unsupported {
            operation: "insert",
        })
    }

    /// Returns the digit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DigitListError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<u8, DigitListError> {
        let index = self.check_index(index)?;
        Ok(self.digits[index])
    }

    /// Replaces the digit at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`DigitListError::IndexOutOfRange`] if `index >= len`, or
    /// [`DigitListError::InvalidDigit`] if `digit` is not valid in the base of
    /// the list. The list is unchanged on error.
    pub fn set(&mut self, index: usize, digit: u8) -> Result<u8, DigitListError> {
        let index = self.check_index(index)?;
        let digit = self.base.check(digit)?;
        Ok(std::mem::replace(&mut self.digits[index], digit))
    }

    /// Removes and returns the digit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DigitListError::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<u8, DigitListError> {
        let index = self.check_index(index)?;
        Ok(self.digits.remove(index))
    }

    /// Removes the first occurrence of `digit`.
    ///
    /// Returns `true` if a digit was removed.
    pub fn remove_digit(&mut self, digit: u8) -> bool {
        match self.position(digit) {
            Some(index) => {
                self.digits.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every occurrence of every digit in `digits`.
    ///
    /// Returns `true` if the list changed.
    pub fn remove_all(&mut self, digits: &[u8]) -> bool {
        let len = self.digits.len();
        self.digits.retain(|digit| !digits.contains(digit));
        self.digits.len() != len
    }

    /// Exchanges the digits at `i` and `j`.
    ///
    /// Returns `false` and leaves the list untouched if either index is out of
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use numlist_core::parse_decimal;
    ///
    /// let mut list = parse_decimal("123");
    /// assert!(list.swap(0, 2));
    /// assert_eq!(list, [3, 2, 1]);
    /// assert!(!list.swap(0, 3));
    /// assert_eq!(list, [3, 2, 1]);
    /// ```
    #[must_use = "swap reports out-of-range indices through its return value"]
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        let len = self.digits.len();
        if i >= len || j >= len {
            return false;
        }
        self.digits.swap(i, j);
        true
    }

    /// Sorts the digits in ascending order. The base is kept.
    pub fn sort_ascending(&mut self) {
        self.digits.sort_unstable();
    }

    /// Sorts the digits in descending order. The base is kept.
    pub fn sort_descending(&mut self) {
        self.digits.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Appends a zero digit, multiplying the denoted value by the base.
    pub fn shift_left(&mut self) {
        self.digits.push(0);
    }

    /// Drops the least significant digit, dividing the denoted value by the
    /// base. Does nothing on an empty list.
    pub fn shift_right(&mut self) {
        self.digits.pop();
    }

    /// Removes all digits and resets the base to decimal.
    pub fn clear(&mut self) {
        self.digits.clear();
        self.base = Base::DECIMAL;
    }

    /// Returns `true` if the list holds `digit`.
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    /// Returns `true` if the list holds every digit in `digits`.
    #[must_use]
    pub fn contains_all(&self, digits: &[u8]) -> bool {
        digits.iter().all(|&digit| self.contains(digit))
    }

    /// Returns the index of the first occurrence of `digit`.
    #[must_use]
    pub fn position(&self, digit: u8) -> Option<usize> {
        self.digits.iter().position(|&d| d == digit)
    }

    /// Returns the index of the last occurrence of `digit`.
    #[must_use]
    pub fn rposition(&self, digit: u8) -> Option<usize> {
        self.digits.iter().rposition(|&d| d == digit)
    }
}

impl PartialEq for DigitList {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for DigitList {}

impl PartialEq<[u8]> for DigitList {
    fn eq(&self, other: &[u8]) -> bool {
        self.digits == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for DigitList {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.digits == other
    }
}

impl PartialEq<Vec<u8>> for DigitList {
    fn eq(&self, other: &Vec<u8>) -> bool {
        &self.digits == other
    }
}

/// Writes the raw digit values, most significant first, without converting
/// the base.
///
/// Digits of bases above 10 are written as their decimal value, so base-16
/// digits `[1, 15]` render as `"115"`. Use
/// [`to_decimal_text`](crate::DecimalText::to_decimal_text) for the number
/// itself.
impl Display for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DigitList {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
