//! Luhn checksum engine, shared by validation and check-digit synthesis.

/// Luhn digit sum over a normalized digit string.
///
/// Positions are 1-indexed from the start of the string. A digit is doubled
/// when its position matches the parity anchor: `(len - 1) % 2` if the string
/// already ends in a check digit, `len % 2` if not. Anchoring on the length
/// this way pins the doubled set to the same digits whether or not the check
/// digit is present, and the check digit itself is never doubled. Doubled
/// values >= 10 are folded by summing their decimal digits.
pub(crate) fn digit_sum(digits: &str, with_check_digit: bool) -> u32 {
    // (len + 1) % 2 == (len - 1) % 2, without underflow on empty input.
    let parity = if with_check_digit {
        (digits.len() + 1) % 2
    } else {
        digits.len() % 2
    };

    digits
        .bytes()
        .enumerate()
        .map(|(index, byte)| {
            let position = index + 1;
            let mut value = u32::from(byte - b'0');
            if position % 2 == parity {
                value *= 2;
            }
            value / 10 + value % 10
        })
        .sum()
}

/// True iff the digit string (ending in its check digit) satisfies Luhn.
pub(crate) fn checksum_ok(digits: &str) -> bool {
    digit_sum(digits, true) % 10 == 0
}

/// Check digit for a payload that does not yet carry one.
pub(crate) fn check_digit(payload: &str) -> u32 {
    (digit_sum(payload, false) * 9) % 10
}
