//! Character values and the weighted modulo-11 check digits.
//!
//! Digits map to themselves and `A`-`Z` map to their ASCII code minus 48
//! (17-42), so the legacy numeric form and the alphanumeric form share one
//! algorithm.

use crate::error::ValidationError;

/// Length of the base (root + branch) the check digits are computed from.
pub const BASE_LEN: usize = 12;

/// Weights for the first check digit, applied to the 12-character base.
pub const WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, applied to the base plus the first digit.
pub const WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Checksum value per ASCII code; `None` for characters outside `0-9A-Z`.
const CHAR_VALUES: [Option<u8>; 128] = build_char_values();

const fn build_char_values() -> [Option<u8>; 128] {
    let mut table = [None; 128];

    let mut c = b'0';
    while c <= b'9' {
        table[c as usize] = Some(c - b'0');
        c += 1;
    }

    let mut c = b'A';
    while c <= b'Z' {
        table[c as usize] = Some(c - b'0');
        c += 1;
    }

    table
}

/// Returns the checksum value of a character.
///
/// Lowercase letters have no entry; callers normalize first.
pub fn char_value(c: char) -> Result<u32, ValidationError> {
    CHAR_VALUES
        .get(c as usize)
        .copied()
        .flatten()
        .map(u32::from)
        .ok_or(ValidationError::TableLookupFault { character: c })
}

/// Computes the two check digits for a 12-character base (root + branch).
///
/// Returns `BadLength` if the base is not 12 characters and
/// `TableLookupFault` if it holds a character outside `0-9A-Z`.
pub fn calculate_check_digits(base: &str) -> Result<[u8; 2], ValidationError> {
    let actual = base.chars().count();
    if actual != BASE_LEN {
        return Err(ValidationError::BadLength { actual });
    }

    let mut values = base
        .chars()
        .map(char_value)
        .collect::<Result<Vec<_>, _>>()?;

    let first = weighted_digit(&values, &WEIGHTS_FIRST);
    values.push(u32::from(first));
    let second = weighted_digit(&values, &WEIGHTS_SECOND);

    Ok([first, second])
}

/// Renders the check digits of `base` as a 2-character string.
pub fn check_digits_string(base: &str) -> Result<String, ValidationError> {
    let [first, second] = calculate_check_digits(base)?;
    Ok(format!("{first}{second}"))
}

fn weighted_digit(values: &[u32], weights: &[u32]) -> u8 {
    let sum: u32 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        // remainder is in 2..=10, so the digit is in 1..=9
        (11 - remainder) as u8
    }
}
