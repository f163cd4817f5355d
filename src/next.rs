//! Sequential card number generation under a fixed IIN.

use crate::error::CardNumberError;
use crate::luhn;
use crate::IIN_DIGITS;

/// Next valid card number after `digits` (already normalized) under the same
/// IIN, or `None` when the account identifier is exhausted (all nines).
///
/// The account identifier is incremented with decimal carry propagation, so
/// leading zeros and total width are preserved.
pub(crate) fn next(digits: &str) -> Result<Option<String>, CardNumberError> {
    let min = IIN_DIGITS + 1;
    if digits.len() < min {
        return Err(CardNumberError::TooShort { len: digits.len(), min });
    }

    let (iin, rest) = digits.split_at(IIN_DIGITS);
    let account = &rest[..rest.len() - 1];

    // Rightmost digit that can still be bumped; all-nines (or an empty
    // identifier) has no successor at this width.
    let Some(pivot) = account.rfind(|c: char| c != '9') else {
        return Ok(None);
    };

    let mut payload = String::with_capacity(digits.len());
    payload.push_str(iin);
    payload.push_str(&account[..pivot]);
    payload.push(char::from(account.as_bytes()[pivot] + 1));
    for _ in pivot + 1..account.len() {
        payload.push('0');
    }

    let check = luhn::check_digit(&payload);
    payload.push(char::from(b'0' + check as u8));
    Ok(Some(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luhn::checksum_ok;

    #[test]
    fn increments_account_identifier() {
        let out = next("4000000000010").unwrap().unwrap();
        assert_eq!(&out[..6], "400000");
        assert_eq!(&out[6..12], "000002");
        assert!(checksum_ok(&out));
    }

    #[test]
    fn preserves_leading_zeros_and_width() {
        let input = "4111110000019";
        let out = next(input).unwrap().unwrap();
        assert_eq!(out.len(), input.len());
        assert_eq!(&out[6..12], "000002");
    }

    #[test]
    fn carry_propagates_through_trailing_nines() {
        let out = next("5500000199990").unwrap().unwrap();
        assert_eq!(&out[6..12], "020000");
        assert!(checksum_ok(&out));
    }

    #[test]
    fn exhausted_identifier_has_no_successor() {
        assert_eq!(next("4000009999990").unwrap(), None);
        // IIN plus check digit only: the identifier is empty, trivially maxed.
        assert_eq!(next("4000000").unwrap(), None);
    }

    #[test]
    fn too_short_is_rejected() {
        assert_eq!(
            next("400000"),
            Err(CardNumberError::TooShort { len: 6, min: 7 })
        );
        assert_eq!(next(""), Err(CardNumberError::TooShort { len: 0, min: 7 }));
    }

    #[test]
    fn output_validates() {
        for input in ["4111111111111111", "5500000000000004", "340000000000009"] {
            let out = next(input).unwrap().unwrap();
            assert!(checksum_ok(&out), "next({input}) = {out} failed Luhn");
        }
    }
}
