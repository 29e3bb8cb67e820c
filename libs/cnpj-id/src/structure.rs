//! Normalization and structural checks.

use crate::error::ValidationError;

/// Length of a normalized CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Length of the establishment root.
pub const ROOT_LEN: usize = 8;

/// Length of the branch (order) number.
pub const BRANCH_LEN: usize = 4;

/// Branch number of the headquarters establishment.
pub const HEADQUARTERS_BRANCH: u16 = 1;

/// Byte order mark, which `char::is_whitespace` does not cover.
const BOM: char = '\u{feff}';

/// Strips `.`, `-`, `/`, whitespace and byte order marks, then upper-cases
/// the rest.
///
/// Never fails; empty input yields an empty string.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(*c, '.' | '-' | '/' | BOM) && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// A normalized CNPJ that passed every structural check.
///
/// The check digits have not been verified yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure<'a> {
    pub root: &'a str,
    pub branch: &'a str,
    pub check_digits: &'a str,
    pub is_alphanumeric: bool,
    pub branch_number: u16,
}

impl Structure<'_> {
    /// Returns true if the branch number denotes the headquarters.
    pub fn is_headquarters(&self) -> bool {
        self.branch_number == HEADQUARTERS_BRANCH
    }

    /// Root followed by branch, the input to the checksum.
    pub fn base(&self) -> String {
        format!("{}{}", self.root, self.branch)
    }
}

/// Numeric value of a 4-digit branch.
///
/// The branch must already have passed the character checks; four ASCII
/// digits always fit in a u16.
pub(crate) fn branch_number(branch: &str) -> u16 {
    branch
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}

/// Runs the structural checks on a normalized CNPJ.
///
/// Checks run in a fixed order and only the first failure is reported:
/// missing, length, character classes, repeated characters.
pub fn check_structure(normalized: &str) -> Result<Structure<'_>, ValidationError> {
    if normalized.is_empty() {
        return Err(ValidationError::Missing);
    }

    let actual = normalized.chars().count();
    if actual != CNPJ_LEN {
        return Err(ValidationError::BadLength { actual });
    }

    // Length in chars is 14; a non-ASCII char would make the byte length differ.
    let bytes = normalized.as_bytes();
    if bytes.len() != CNPJ_LEN {
        return Err(ValidationError::BadCharset);
    }

    let (root, rest) = bytes.split_at(ROOT_LEN);
    let root_ok = root
        .iter()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase());
    if !root_ok || !rest.iter().all(u8::is_ascii_digit) {
        return Err(ValidationError::BadCharset);
    }

    if bytes.iter().all(|b| *b == bytes[0]) {
        return Err(ValidationError::RepeatedChars);
    }

    let root = &normalized[..ROOT_LEN];
    let branch = &normalized[ROOT_LEN..ROOT_LEN + BRANCH_LEN];
    let check_digits = &normalized[ROOT_LEN + BRANCH_LEN..];

    Ok(Structure {
        root,
        branch,
        check_digits,
        is_alphanumeric: root.bytes().any(|b| b.is_ascii_uppercase()),
        branch_number: branch_number(branch),
    })
}
