//! Issuer network classification from IIN prefixes.

use std::fmt;

/// Issuing networks recognized by prefix, plus `Unknown` for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    AmericanExpress,
    Maestro,
    Mastercard,
    Visa,
    Jcb,
    Unknown,
}

impl Vendor {
    /// Display name, matching the strings the original interface returned.
    pub fn name(self) -> &'static str {
        match self {
            Vendor::AmericanExpress => "American Express",
            Vendor::Maestro => "Maestro",
            Vendor::Mastercard => "Mastercard",
            Vendor::Visa => "Visa",
            Vendor::Jcb => "JCB",
            Vendor::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The first `width` digits as a number, or `None` if the input is shorter.
///
/// Rules compare fixed-width prefixes numerically; a rule whose prefix width
/// exceeds the input length simply does not match.
fn prefix(digits: &str, width: usize) -> Option<u32> {
    digits.get(..width)?.parse().ok()
}

/// Classifies an already-normalized digit string. Rules are evaluated in
/// order, first match wins.
pub(crate) fn classify(digits: &str) -> Vendor {
    let first2 = prefix(digits, 2);
    let first3 = prefix(digits, 3);
    let first4 = prefix(digits, 4);
    let first6 = prefix(digits, 6);

    if matches!(first2, Some(34 | 37)) {
        Vendor::AmericanExpress
    } else if matches!(first2, Some(50 | 67))
        || first3 == Some(639)
        || matches!(first2, Some(56..=58))
    {
        Vendor::Maestro
    } else if matches!(first2, Some(51..=55)) || matches!(first6, Some(222100..=272099)) {
        Vendor::Mastercard
    } else if digits.starts_with('4') {
        Vendor::Visa
    } else if matches!(first4, Some(3528..=3589)) {
        Vendor::Jcb
    } else {
        Vendor::Unknown
    }
}
