use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`BigInteger`].
///
/// The accepted grammar is an optional sign followed by one or more
/// decimal digits: `[+-][000]123456789`. Leading zeros are permitted
/// and normalized away.
///
/// [`BigInteger`]: crate::BigInteger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input was empty, or held a sign with no digits after it.
    #[error("big integer format error: no digits, usage [+-][000]123456789")]
    MissingDigits,
    /// A character outside `0`-`9` appeared among the digits.
    #[error("big integer format error: invalid character {0:?}, usage [+-][000]123456789")]
    InvalidDigit(char),
}
