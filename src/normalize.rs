//! Input normalization, applied before every other operation.

use crate::error::CardNumberError;

/// Strips spaces from a raw card number and verifies the rest is all digits.
///
/// Returns the digit-only string, or [`CardNumberError::InvalidCharacter`]
/// pointing at the first offending character in the raw input.
pub fn normalize(raw: &str) -> Result<String, CardNumberError> {
    let mut digits = String::with_capacity(raw.len());
    for (position, character) in raw.chars().enumerate() {
        match character {
            ' ' => {}
            '0'..='9' => digits.push(character),
            _ => return Err(CardNumberError::InvalidCharacter { character, position }),
        }
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces() {
        assert_eq!(normalize("4111 1111 1111 1111").unwrap(), "4111111111111111");
        assert_eq!(normalize(" 42 ").unwrap(), "42");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize("").unwrap(), "");
        assert_eq!(normalize("   ").unwrap(), "");
    }

    #[test]
    fn rejects_non_digits_with_position() {
        assert_eq!(
            normalize("4111-1111"),
            Err(CardNumberError::InvalidCharacter { character: '-', position: 4 })
        );
        assert_eq!(
            normalize("x123"),
            Err(CardNumberError::InvalidCharacter { character: 'x', position: 0 })
        );
    }

    #[test]
    fn idempotent_on_digit_space_input() {
        let once = normalize("5500 0000 0000 0004").unwrap();
        assert_eq!(normalize(&once).unwrap(), once);
    }
}
