//! Positional digit lists for non-negative integers.
//!
//! This crate stores a number as an ordered list of digits in a declared base
//! and provides the arithmetic built on top of it.
//!
//! # Overview
//!
//! 1. **Storage**
//!    - [`base`]: The validated radix type [`Base`].
//!    - [`digit_list`]: [`DigitList`], the digit container with indexed
//!      access, swapping, sorting and shifting.
//!
//! 2. **Numbers**
//!    - [`number`]: Decimal text parsing and rendering, base conversion and
//!      addition over arbitrary-precision values.
//!
//! Two failure policies coexist:
//!
//! - Structural operations ([`DigitList::push`], [`DigitList::get`],
//!   [`DigitList::set`], [`DigitList::remove`]) reject bad indices and digits
//!   with a [`DigitListError`]. [`DigitList::swap`] reports the same problem
//!   through its `bool` return value instead.
//! - [`parse_decimal`] never fails. Empty or malformed text yields an empty
//!   list.
//!
//! # Examples
//!
//! ```
//! use numlist_core::{Base, DecimalText as _, add, parse_decimal};
//!
//! let mut list = parse_decimal("312");
//! list.sort_ascending();
//! assert_eq!(list.to_decimal_text(), "123");
//!
//! let ternary = list.convert_base(Base::TERNARY);
//! assert_eq!(ternary.to_string(), "11120");
//! assert_eq!(ternary.to_decimal_text(), "123");
//!
//! let sum = add(&ternary, &parse_decimal("877"));
//! assert_eq!(sum.to_decimal_text(), "1000");
//!
//! assert!(parse_decimal("12a3").is_empty());
//! ```

pub mod base;
pub mod digit_list;
pub mod error;
pub mod number;

// Re-export commonly used types
pub use self::{
    base::Base,
    digit_list::DigitList,
    error::DigitListError,
    number::{DecimalText, RECORD_BOOK_NUMBER, add, parse_decimal, parse_decimal_opt},
};
