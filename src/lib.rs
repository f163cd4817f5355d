//! Credit card number utilities.
//!
//! Identifies the issuing network from a card number, validates the check
//! digit with the Luhn algorithm, and generates the next sequential valid
//! number under the same issuer identification number (IIN).
//!
//! Everything is a pure function of its input: no I/O, no shared state, safe
//! to call from any number of threads. Inputs are decimal digits optionally
//! interspersed with spaces; anything else is rejected up front with
//! [`CardNumberError::InvalidCharacter`].
//!
//! With the `python` feature the crate also builds as a native extension
//! exposing the same operations, releasing the GIL for batch validation.

use rayon::prelude::*;

pub mod error;
mod luhn;
mod next;
mod normalize;
mod vendor;

#[cfg(feature = "python")]
mod python;

pub use error::CardNumberError;
pub use normalize::normalize;
pub use vendor::Vendor;

/// Width of the issuer identification number, in digits.
pub const IIN_DIGITS: usize = 6;

/// Issuing network for a card number, or [`Vendor::Unknown`] if no prefix
/// rule matches.
///
/// ```
/// # use cardnum::{vendor, Vendor};
/// assert_eq!(vendor("4111 1111 1111 1111").unwrap(), Vendor::Visa);
/// assert_eq!(vendor("340000000000009").unwrap(), Vendor::AmericanExpress);
/// ```
pub fn vendor(raw: &str) -> Result<Vendor, CardNumberError> {
    let digits = normalize::normalize(raw)?;
    Ok(vendor::classify(&digits))
}

/// True iff the number's Luhn checksum passes.
///
/// ```
/// # use cardnum::is_valid;
/// assert!(is_valid("4111 1111 1111 1111").unwrap());
/// assert!(!is_valid("4111111111111112").unwrap());
/// ```
pub fn is_valid(raw: &str) -> Result<bool, CardNumberError> {
    let digits = normalize::normalize(raw)?;
    Ok(luhn::checksum_ok(&digits))
}

/// Next valid card number under the same IIN, or `None` when the account
/// identifier is already all nines and no successor exists at this width.
pub fn next_card_number(raw: &str) -> Result<Option<String>, CardNumberError> {
    let digits = normalize::normalize(raw)?;
    next::next(&digits)
}

/// Luhn-validates a batch of candidate numbers in parallel.
///
/// Element order matches the input. A candidate that fails normalization is
/// simply not a valid card number, so it reports `false` rather than an error.
pub fn validate_batch<S: AsRef<str> + Sync>(numbers: &[S]) -> Vec<bool> {
    numbers
        .par_iter()
        .map(|number| is_valid(number.as_ref()).unwrap_or(false))
        .collect()
}
