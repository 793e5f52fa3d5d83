//! Errors reported by structural operations on digit lists.

/// Errors returned by strict digit list operations.
///
/// Parsing decimal text never produces this error; malformed text degrades to
/// an empty list instead (see [`parse_decimal`](crate::parse_decimal)).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum DigitListError {
    /// The index is not in `0..len`.
    #[display("index {index} out of range for digit list of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// The digit is not smaller than the base of the list.
    #[display("digit {digit} is not valid in base {base}")]
    InvalidDigit {
        /// The rejected digit.
        digit: u8,
        /// Base of the list the digit was offered to.
        base: u8,
    },
    /// The radix is not in `2..=255`.
    #[display("invalid base: {base}")]
    InvalidBase {
        /// The rejected radix.
        base: u32,
    },
    /// The text given as a radix is not a decimal number.
    #[display("base is not a decimal number")]
    UnparsableBase,
    /// The operation is not offered by a positional digit list.
    #[display("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}
