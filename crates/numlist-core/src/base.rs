//! Radix of a positional digit list.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::DigitListError;

/// The radix a [`DigitList`](crate::DigitList) is interpreted under.
///
/// A base is always in the range 2-255. Digits are stored as single bytes, so
/// every digit admitted by a base fits in a `u8`.
///
/// # Examples
///
/// ```
/// use numlist_core::Base;
///
/// let base = Base::new(3)?;
/// assert_eq!(base, Base::TERNARY);
/// assert!(base.contains(2));
/// assert!(!base.contains(3));
///
/// assert!(Base::new(1).is_err());
/// assert_eq!("16".parse::<Base>()?, Base::HEXADECIMAL);
/// # Ok::<(), numlist_core::DigitListError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base(u8);

impl Base {
    /// Base 2.
    pub const BINARY: Self = Self(2);
    /// Base 3.
    pub const TERNARY: Self = Self(3);
    /// Base 8.
    pub const OCTAL: Self = Self(8);
    /// Base 10, the default base of every list.
    pub const DECIMAL: Self = Self(10);
    /// Base 16.
    pub const HEXADECIMAL: Self = Self(16);

    /// Smallest accepted radix.
    pub const MIN: Self = Self(2);
    /// Largest accepted radix.
    pub const MAX: Self = Self(u8::MAX);

    /// Creates a base from a radix.
    ///
    /// # Errors
    ///
    /// Returns [`DigitListError::InvalidBase`] if `radix` is 0 or 1.
    pub const fn new(radix: u8) -> Result<Self, DigitListError> {
        if radix < 2 {
            return Err(DigitListError::InvalidBase { base: radix as u32 });
        }
        Ok(Self(radix))
    }

    /// Returns the radix.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` if `digit` is a valid digit in this base.
    #[must_use]
    #[inline]
    pub const fn contains(self, digit: u8) -> bool {
        digit < self.0
    }

    /// Checks that `digit` is a valid digit in this base.
    pub(crate) const fn check(self, digit: u8) -> Result<u8, DigitListError> {
        if self.contains(digit) {
            Ok(digit)
        } else {
            Err(DigitListError::InvalidDigit {
                digit,
                base: self.0,
            })
        }
    }
}

impl Default for Base {
    #[inline]
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Base> for u8 {
    fn from(base: Base) -> u8 {
        base.get()
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> u32 {
        u32::from(base.get())
    }
}

impl TryFrom<u32> for Base {
    type Error = DigitListError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        let radix = u8::try_from(radix).map_err(|_| DigitListError::InvalidBase { base: radix })?;
        Self::new(radix)
    }
}

impl FromStr for Base {
    type Err = DigitListError;

    /// Parses a decimal radix such as `"3"` or `" 16 "`.
    ///
    /// Text that is not a decimal number, or does not fit in a `u32`, is
    /// rejected with [`DigitListError::UnparsableBase`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let radix = s
            .trim()
            .parse::<u32>()
            .map_err(|_| DigitListError::UnparsableBase)?;
        Self::try_from(radix)
    }
}
