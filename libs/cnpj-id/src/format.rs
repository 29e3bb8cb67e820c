//! Rendering to and recognizing the `XX.XXX.XXX/YYYY-ZZ` mask.

use crate::structure::{normalize, CNPJ_LEN};

/// Length of the masked form.
pub const FORMATTED_LEN: usize = 18;

/// Renders a CNPJ as `XX.XXX.XXX/YYYY-ZZ`.
///
/// Purely cosmetic: no checksum verification is done. When the normalized
/// input is not 14 characters the original input is returned unchanged.
pub fn format(input: &str) -> String {
    let normalized = normalize(input);
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != CNPJ_LEN {
        return input.to_string();
    }

    let mut out = String::with_capacity(FORMATTED_LEN);
    for (i, c) in chars.into_iter().enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Returns true if `input` is already in the exact masked form.
///
/// Root positions accept `0-9A-Z`, branch and check digit positions accept
/// `0-9` only. Check digits are not verified.
pub fn is_formatted(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != FORMATTED_LEN {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 6 => *b == b'.',
        10 => *b == b'/',
        15 => *b == b'-',
        0..=9 => b.is_ascii_digit() || b.is_ascii_uppercase(),
        _ => b.is_ascii_digit(),
    })
}
