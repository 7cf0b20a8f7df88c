//! Check digit calculation for URNs in the nbn:de namespace.
//!
//! The German National Library derives a single decimal check digit from a
//! weighted checksum over the textual URN form, using a fixed character
//! encoding table published with the namespace policy.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::errors::UrnError;

/// Base value the weighted sum starts from in the nbn:de namespace.
const NAMESPACE_BASE_SUM: u32 = 801;

/// Position counter value before the first character weight is taken.
const INITIAL_POSITION: u32 = 22;

/// Encoding table mapping every legal URN character to its numeric code.
static CHAR_CODES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    HashMap::from([
        ('0', 1),
        ('1', 2),
        ('2', 3),
        ('3', 4),
        ('4', 5),
        ('5', 6),
        ('6', 7),
        ('7', 8),
        ('8', 9),
        ('9', 41),
        ('a', 18),
        ('b', 14),
        ('c', 19),
        ('d', 15),
        ('e', 16),
        ('f', 21),
        ('g', 22),
        ('h', 23),
        ('i', 24),
        ('j', 25),
        ('k', 42),
        ('l', 26),
        ('m', 27),
        ('n', 13),
        ('o', 28),
        ('p', 29),
        ('q', 31),
        ('r', 12),
        ('s', 32),
        ('t', 33),
        ('u', 11),
        ('v', 34),
        ('w', 35),
        ('x', 36),
        ('y', 37),
        ('z', 38),
        ('+', 49),
        (':', 17),
        ('-', 39),
        ('/', 45),
        ('_', 43),
        ('.', 47),
    ])
});

/// Calculates the check digit for the canonical string form of an NBN URN
/// (everything preceding the check digit).
///
/// Single-digit character codes are weighted with one position, two-digit
/// codes with two successive positions, one per digit. The final digit is
/// `(sum / last digit) % 10`, where the last digit is the ones digit of the
/// last character's code.
///
/// # Arguments
/// * `urn` - Canonical NBN URN string, e.g. "urn:nbn:de:gbv:089-332175294"
pub fn compute(urn: &str) -> Result<char, UrnError> {
    let mut sum = NAMESPACE_BASE_SUM;
    let mut position = INITIAL_POSITION;
    let mut code = 0;

    for c in urn.chars() {
        code = *CHAR_CODES.get(&c).ok_or_else(|| {
            UrnError::Internal(format!("character '{}' has no check digit code", c))
        })?;
        if code < 10 {
            position += 1;
            sum += code * position;
        } else {
            position += 1;
            sum += (code / 10) * position;
            position += 1;
            sum += (code % 10) * position;
        }
    }

    let last_digit = if code < 10 { code } else { code % 10 };
    if last_digit == 0 {
        return Err(UrnError::Internal("last digit of URN is 0".to_string()));
    }

    Ok((b'0' + ((sum / last_digit) % 10) as u8) as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_check_digits() {
        assert_eq!(compute("urn:nbn:de:gbv:089-332175294"), Ok('5'));
        assert_eq!(compute("urn:nbn:de:bsz:14-qucosa-32992"), Ok('8'));
        assert_eq!(compute("urn:nbn:de:101-2018020112"), Ok('6'));
        assert_eq!(compute("urn:nbn:de:0030-drops-12345"), Ok('6'));
        assert_eq!(compute("urn:nbn:de:hbz:6-85659524771"), Ok('3'));
        assert_eq!(compute("urn:nbn:de:tib-123456789"), Ok('3'));
    }

    #[test]
    fn test_unmapped_character_is_rejected() {
        let result = compute("urn:nbn:de:gbv:089-33217A294");
        assert!(matches!(result, Err(UrnError::Internal(_))));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        // No character processed leaves no last digit to divide by
        assert!(matches!(compute(""), Err(UrnError::Internal(_))));
    }
}
