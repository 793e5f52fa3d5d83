//! Numeric operations on digit lists: decimal text, base conversion and
//! addition.
//!
//! All arithmetic goes through [`BigUint`], so lists of any length are
//! converted and added exactly.
//!
//! # Examples
//!
//! ```
//! use numlist_core::{Base, DecimalText as _, add, parse_decimal};
//!
//! let list = parse_decimal("123");
//! let ternary = list.convert_base(Base::TERNARY);
//! assert_eq!(ternary, [1, 1, 1, 2, 0]);
//! assert_eq!(ternary.to_decimal_text(), "123");
//!
//! let sum = add(&parse_decimal("999"), &parse_decimal("1"));
//! assert_eq!(sum, [1, 0, 0, 0]);
//! ```

use num_bigint::BigUint;
use num_traits::Zero as _;

use crate::{Base, DigitList};

/// Record book number of the assignment this library was written for.
///
/// The number selects the target base of [`DigitList::change_scale`] and the
/// additional operation ([`add`]).
pub const RECORD_BOOK_NUMBER: u32 = 3101;

/// Anything that can report the non-negative integer it denotes as decimal
/// text.
///
/// [`add`] reads both operands through this trait, so it works with any
/// number-like type without knowing its representation. An empty string is
/// read as zero.
pub trait DecimalText {
    /// Returns the denoted value as decimal digits, most significant first.
    fn to_decimal_text(&self) -> String;
}

impl DecimalText for DigitList {
    /// Renders the denoted value in decimal.
    ///
    /// Decimal lists are rendered digit by digit, keeping leading zeros. Lists
    /// in any other base are evaluated and re-rendered in decimal. An empty
    /// list renders as the empty string, not `"0"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numlist_core::{Base, DecimalText as _, DigitList, parse_decimal};
    ///
    /// assert_eq!(parse_decimal("007").to_decimal_text(), "007");
    ///
    /// let binary = DigitList::from_digits(vec![1, 0, 1, 0], Base::BINARY)?;
    /// assert_eq!(binary.to_decimal_text(), "10");
    ///
    /// assert_eq!(DigitList::new().to_decimal_text(), "");
    /// # Ok::<(), numlist_core::DigitListError>(())
    /// ```
    fn to_decimal_text(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        if self.base() == Base::DECIMAL {
            return self.to_string();
        }
        self.value().to_string()
    }
}

impl DecimalText for BigUint {
    fn to_decimal_text(&self) -> String {
        self.to_string()
    }
}

/// Builds a decimal list from text.
///
/// Surrounding whitespace is trimmed. If the remaining text is empty or holds
/// anything but ASCII digits, the result is an empty list; this function never
/// fails. Otherwise every character becomes one digit.
///
/// # Examples
///
/// ```
/// use numlist_core::{Base, parse_decimal};
///
/// let list = parse_decimal(" 123\n");
/// assert_eq!(list, [1, 2, 3]);
/// assert_eq!(list.base(), Base::DECIMAL);
///
/// assert!(parse_decimal("12a3").is_empty());
/// assert!(parse_decimal("-5").is_empty());
/// assert!(parse_decimal("   ").is_empty());
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> DigitList {
    let text = text.trim();
    if text.is_empty() {
        return DigitList::new();
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        log::debug!("rejecting non-decimal input {text:?}");
        return DigitList::new();
    }
    let digits = text.bytes().map(|b| b - b'0').collect();
    DigitList::from_digits_unchecked(digits, Base::DECIMAL)
}

/// Builds a decimal list from text that may be absent.
///
/// `None` yields an empty list, like malformed text does in
/// [`parse_decimal`].
#[must_use]
pub fn parse_decimal_opt(text: Option<&str>) -> DigitList {
    text.map(parse_decimal).unwrap_or_default()
}

/// Parses decimal text into a value, reading empty or malformed text as zero.
fn decimal_value(text: &str) -> BigUint {
    parse_decimal(text).value()
}

/// Adds two numbers and returns the sum as a decimal list.
///
/// Each operand is read through [`DecimalText`], so operands in different
/// bases (or of different types) can be mixed. Empty operands count as zero.
/// Neither operand is modified.
///
/// # Examples
///
/// ```
/// use numlist_core::{Base, DigitList, add, parse_decimal};
///
/// let ternary = DigitList::from_digits(vec![1, 0, 0], Base::TERNARY)?;
/// let sum = add(&ternary, &parse_decimal("1"));
/// assert_eq!(sum, [1, 0]);
/// assert_eq!(sum.base(), Base::DECIMAL);
///
/// assert_eq!(add(&DigitList::new(), &DigitList::new()), [0]);
/// # Ok::<(), numlist_core::DigitListError>(())
/// ```
#[must_use]
pub fn add<L, R>(lhs: &L, rhs: &R) -> DigitList
where
    L: DecimalText + ?Sized,
    R: DecimalText + ?Sized,
{
    let sum = decimal_value(&lhs.to_decimal_text()) + decimal_value(&rhs.to_decimal_text());
    parse_decimal(&sum.to_string())
}

impl DigitList {
    /// Returns the denoted value.
    ///
    /// The digits are folded most significant first as
    /// `value = value * base + digit`. An empty list denotes zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use numlist_core::{Base, DigitList};
    ///
    /// let list = DigitList::from_digits(vec![1, 1, 1, 2, 0], Base::TERNARY)?;
    /// assert_eq!(list.value(), BigUint::from(123_u32));
    /// assert_eq!(DigitList::new().value(), BigUint::from(0_u32));
    /// # Ok::<(), numlist_core::DigitListError>(())
    /// ```
    #[must_use]
    pub fn value(&self) -> BigUint {
        let base = u32::from(self.base());
        self.iter().fold(BigUint::zero(), |value, &digit| {
            value * base + u32::from(digit)
        })
    }

    /// Creates a list denoting `value` in `base`.
    ///
    /// The value is divided by the base repeatedly, collecting remainders from
    /// the least significant end. Zero yields a single `0` digit.
    #[must_use]
    pub fn from_value(value: &BigUint, base: Base) -> Self {
        if value.is_zero() {
            return Self::from_digits_unchecked(vec![0], base);
        }
        let mut digits = value.to_radix_le(u32::from(base));
        digits.reverse();
        Self::from_digits_unchecked(digits, base)
    }

    /// Returns a new list denoting the same value in `base`.
    ///
    /// The receiver is left untouched. A zero or empty list converts to a
    /// single `0` digit, never to an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use numlist_core::{Base, DigitList, parse_decimal};
    ///
    /// let hex = parse_decimal("255").convert_base(Base::HEXADECIMAL);
    /// assert_eq!(hex, [15, 15]);
    /// assert_eq!(hex.base(), Base::HEXADECIMAL);
    ///
    /// assert_eq!(DigitList::new().convert_base(Base::BINARY), [0]);
    /// ```
    #[must_use]
    pub fn convert_base(&self, base: Base) -> Self {
        let converted = Self::from_value(&self.value(), base);
        log::debug!(
            "converted {} digit(s) from base {} to {} digit(s) in base {}",
            self.len(),
            self.base(),
            converted.len(),
            base
        );
        converted
    }

    /// Returns a new list denoting the same value in the base selected by
    /// [`RECORD_BOOK_NUMBER`], which is ternary.
    #[must_use]
    pub fn change_scale(&self) -> Self {
        self.convert_base(Base::TERNARY)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero as _;
    use proptest::prelude::*;

    use super::*;

    fn list(digits: &[u8], base: Base) -> DigitList {
        DigitList::from_digits(digits.to_vec(), base).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        let parsed = parse_decimal("123");
        assert_eq!(parsed, [1, 2, 3]);
        assert_eq!(parsed.base(), Base::DECIMAL);

        assert_eq!(parse_decimal("\t0042 \r\n"), [0, 0, 4, 2]);
        assert_eq!(parse_decimal("0"), [0]);
    }

    #[test]
    fn test_parse_decimal_degrades_to_empty() {
        for text in ["", "   ", "12a3", "1 2", "+1", "-1", "1.5", "１２", "0x10"] {
            let parsed = parse_decimal(text);
            assert!(parsed.is_empty(), "{text:?} parsed as {parsed:?}");
            assert_eq!(parsed.base(), Base::DECIMAL);
        }
        assert!(parse_decimal_opt(None).is_empty());
        assert_eq!(parse_decimal_opt(Some("9")), [9]);
    }

    #[test]
    fn test_to_decimal_text() {
        assert_eq!(parse_decimal("123").to_decimal_text(), "123");
        assert_eq!(parse_decimal("000").to_decimal_text(), "000");
        assert_eq!(
            list(&[1, 1, 1, 2, 0], Base::TERNARY).to_decimal_text(),
            "123"
        );
        assert_eq!(list(&[0, 0, 1], Base::TERNARY).to_decimal_text(), "1");
        assert_eq!(list(&[0], Base::BINARY).to_decimal_text(), "0");
        assert_eq!(list(&[15, 15], Base::HEXADECIMAL).to_decimal_text(), "255");
        assert_eq!(DigitList::new().to_decimal_text(), "");
        assert_eq!(DigitList::with_base(Base::OCTAL).to_decimal_text(), "");
    }

    #[test]
    fn test_value() {
        assert_eq!(parse_decimal("4096").value(), BigUint::from(4096_u32));
        assert_eq!(
            list(&[1, 0, 0, 0], Base::BINARY).value(),
            BigUint::from(8_u32)
        );
        assert_eq!(
            list(&[254, 254], Base::MAX).value(),
            BigUint::from(255_u32 * 255 - 1)
        );
        assert!(DigitList::new().value().is_zero());
    }

    #[test]
    fn test_convert_base() {
        let ternary = parse_decimal("123").convert_base(Base::TERNARY);
        assert_eq!(ternary, [1, 1, 1, 2, 0]);
        assert_eq!(ternary.base(), Base::TERNARY);
        assert_eq!(ternary.to_decimal_text(), "123");

        let binary = ternary.convert_base(Base::BINARY);
        assert_eq!(binary, [1, 1, 1, 1, 0, 1, 1]);
        assert_eq!(binary.to_decimal_text(), "123");

        let decimal = binary.convert_base(Base::DECIMAL);
        assert_eq!(decimal, [1, 2, 3]);
        assert_eq!(decimal.base(), Base::DECIMAL);
    }

    #[test]
    fn test_convert_base_drops_leading_zeros() {
        assert_eq!(parse_decimal("0009").convert_base(Base::DECIMAL), [9]);
        assert_eq!(parse_decimal("0009").convert_base(Base::OCTAL), [1, 1]);
    }

    #[test]
    fn test_convert_zero_gives_single_digit() {
        for source in [DigitList::new(), parse_decimal("0"), parse_decimal("000")] {
            let converted = source.convert_base(Base::TERNARY);
            assert_eq!(converted, [0]);
            assert_eq!(converted.base(), Base::TERNARY);
        }
    }

    #[test]
    fn test_convert_base_leaves_source_untouched() {
        let source = parse_decimal("987654321");
        let snapshot = source.clone();
        let _ = source.convert_base(Base::BINARY);
        assert_eq!(source, snapshot);
        assert_eq!(source.base(), Base::DECIMAL);
    }

    #[test]
    fn test_change_scale() {
        assert_eq!(RECORD_BOOK_NUMBER, 3101);
        let ternary = parse_decimal("123").change_scale();
        assert_eq!(ternary, [1, 1, 1, 2, 0]);
        assert_eq!(ternary.base(), Base::TERNARY);
    }

    #[test]
    fn test_add() {
        let sum = add(&parse_decimal("999"), &parse_decimal("1"));
        assert_eq!(sum, [1, 0, 0, 0]);
        assert_eq!(sum.base(), Base::DECIMAL);

        let big = "123456789012345678901234567890";
        let sum = add(&parse_decimal(big), &parse_decimal(big));
        assert_eq!(sum.to_decimal_text(), "246913578024691357802469135780");
    }

    #[test]
    fn test_add_mixed_bases() {
        let ternary = list(&[1, 1, 1, 2, 0], Base::TERNARY);
        let hex = list(&[1, 0], Base::HEXADECIMAL);
        assert_eq!(add(&ternary, &hex), [1, 3, 9]);
        assert_eq!(add(&ternary, &BigUint::from(7_u32)), [1, 3, 0]);
    }

    #[test]
    fn test_add_empty_operands_are_zero() {
        assert_eq!(add(&DigitList::new(), &parse_decimal("42")), [4, 2]);
        assert_eq!(add(&parse_decimal("42"), &parse_decimal("oops")), [4, 2]);
        assert_eq!(add(&DigitList::new(), &DigitList::new()), [0]);
    }

    #[test]
    fn test_add_leaves_operands_untouched() {
        let lhs = list(&[2, 1], Base::TERNARY);
        let rhs = parse_decimal("5");
        let _ = add(&lhs, &rhs);
        assert_eq!(lhs, [2, 1]);
        assert_eq!(lhs.base(), Base::TERNARY);
        assert_eq!(rhs, [5]);
    }

    fn base() -> impl Strategy<Value = Base> {
        (2_u8..=u8::MAX).prop_map(|radix| Base::new(radix).unwrap())
    }

    proptest! {
        #[test]
        fn prop_decimal_text_round_trip(text in "[0-9]{1,64}") {
            prop_assert_eq!(parse_decimal(&text).to_decimal_text(), text);
        }

        #[test]
        fn prop_convert_preserves_value(value in any::<u128>(), b1 in base(), b2 in base()) {
            let value = BigUint::from(value);
            let first = DigitList::from_value(&value, b1);
            prop_assert_eq!(first.value(), value.clone());
            let second = first.convert_base(b2);
            prop_assert_eq!(second.base(), b2);
            prop_assert!(second.iter().all(|&d| b2.contains(d)));
            prop_assert_eq!(second.to_decimal_text(), value.to_string());
        }

        #[test]
        fn prop_add_is_commutative(a in "[0-9]{0,40}", b in "[0-9]{0,40}", radix in base()) {
            let lhs = parse_decimal(&a).convert_base(radix);
            let rhs = parse_decimal(&b);
            prop_assert_eq!(add(&lhs, &rhs).value(), add(&rhs, &lhs).value());
            prop_assert_eq!(add(&lhs, &rhs).value(), lhs.value() + rhs.value());
        }
    }
}
