//! Error types for card number parsing.

use thiserror::Error;

/// Rejection reasons for a raw card number input.
///
/// These cover caller-side misuse only; "no vendor matched" and "no next
/// number exists" are normal outcomes and are expressed as [`crate::Vendor::Unknown`]
/// and `None` respectively, not as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardNumberError {
    /// The input contained something other than a decimal digit or a space.
    /// `position` is the index in the raw input, before spaces are stripped.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The number is too short to carry an IIN plus a check digit.
    #[error("card number has {len} digits, at least {min} required")]
    TooShort { len: usize, min: usize },
}
