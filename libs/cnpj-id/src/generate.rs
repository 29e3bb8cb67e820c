//! Synthesis of valid CNPJs, mostly for test fixtures.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checksum::check_digits_string;
use crate::error::GenerateError;
use crate::format::format;
use crate::structure::ROOT_LEN;

/// Highest branch number that fits in four digits.
pub const MAX_BRANCH: u16 = 9999;

const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Options for [`generate`].
///
/// Every field has a default, so a partial JSON object deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Draw random root characters from `A-Z0-9` instead of `0-9`.
    pub alphanumeric: bool,

    /// Exact 8-character root. Takes precedence over `alphanumeric`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Branch number, rendered zero-padded to four digits.
    pub branch: u16,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            alphanumeric: false,
            root: None,
            branch: 1,
        }
    }
}

impl GenerateOptions {
    /// Creates options for a numeric headquarters CNPJ with a random root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alphanumeric(mut self, alphanumeric: bool) -> Self {
        self.alphanumeric = alphanumeric;
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_branch(mut self, branch: u16) -> Self {
        self.branch = branch;
        self
    }

    /// Checks the options and returns the upper-cased root, if one was given.
    ///
    /// The root must be exactly 8 characters as supplied and `0-9A-Z` after
    /// ASCII upper-casing; anything else is rejected rather than padded or
    /// truncated.
    pub fn validate(&self) -> Result<Option<String>, GenerateError> {
        if self.branch > MAX_BRANCH {
            return Err(GenerateError::BranchOutOfRange {
                branch: self.branch,
            });
        }

        let Some(root) = &self.root else {
            return Ok(None);
        };

        let actual = root.chars().count();
        if actual != ROOT_LEN {
            return Err(GenerateError::InvalidRootLength { actual });
        }

        // ASCII-only so the length checked above cannot change.
        let root = root.to_ascii_uppercase();

        if let Some(character) = root
            .chars()
            .find(|c| !(c.is_ascii_digit() || c.is_ascii_uppercase()))
        {
            return Err(GenerateError::InvalidRootCharacter { character });
        }

        Ok(Some(root))
    }
}

/// Generates a valid CNPJ in masked form using the thread-local RNG.
pub fn generate(options: &GenerateOptions) -> Result<String, GenerateError> {
    generate_with_rng(options, &mut rand::rng())
}

/// Generates a valid CNPJ in masked form, drawing randomness from `rng`.
///
/// With a seeded RNG the output is deterministic.
pub fn generate_with_rng<R>(options: &GenerateOptions, rng: &mut R) -> Result<String, GenerateError>
where
    R: Rng + ?Sized,
{
    let supplied = options.validate()?;
    let branch = format!("{:04}", options.branch);

    if let Some(root) = supplied {
        debug!(root = %root, branch = options.branch, "generating CNPJ from supplied root");
        return assemble(&root, &branch);
    }

    let alphabet = if options.alphanumeric {
        ALPHANUMERIC
    } else {
        DIGITS
    };

    loop {
        let root = random_root(rng, alphabet);
        match assemble(&root, &branch) {
            // Only root 00000000 with branch 0000 gets here; draw again.
            Err(GenerateError::Degenerate) => continue,
            other => {
                debug!(
                    alphanumeric = options.alphanumeric,
                    branch = options.branch,
                    "generated CNPJ from random root"
                );
                return other;
            }
        }
    }
}

fn random_root<R>(rng: &mut R, alphabet: &[u8]) -> String
where
    R: Rng + ?Sized,
{
    (0..ROOT_LEN)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

fn assemble(root: &str, branch: &str) -> Result<String, GenerateError> {
    let base = format!("{root}{branch}");
    let check_digits = check_digits_string(&base)?;
    let cnpj = format!("{base}{check_digits}");

    let first = cnpj.as_bytes()[0];
    if cnpj.bytes().all(|b| b == first) {
        return Err(GenerateError::Degenerate);
    }

    Ok(format(&cnpj))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::validate::validate;

    #[test]
    fn test_default_options() {
        let opts = GenerateOptions::default();
        assert!(!opts.alphanumeric);
        assert!(opts.root.is_none());
        assert_eq!(opts.branch, 1);
    }

    #[test]
    fn test_generate_numeric_headquarters() {
        let cnpj = generate(&GenerateOptions::new()).unwrap();
        let result = validate(&cnpj);
        assert!(result.valid);
        assert!(!result.is_alphanumeric);
        assert!(result.is_headquarters);
        assert_eq!(cnpj, result.formatted);
    }

    #[test]
    fn test_generate_with_root_and_branch() {
        let opts = GenerateOptions::new().with_root("TEST1234").with_branch(5);
        let cnpj = generate(&opts).unwrap();
        assert_eq!(cnpj, "TE.ST1.234/0005-71");
    }

    #[test]
    fn test_root_is_uppercased() {
        let opts = GenerateOptions::new().with_root("abcdefgh");
        assert_eq!(generate(&opts).unwrap(), "AB.CDE.FGH/0001-95");
    }

    #[test]
    fn test_root_overrides_alphanumeric_flag() {
        let opts = GenerateOptions::new()
            .with_alphanumeric(true)
            .with_root("11222333");
        assert_eq!(generate(&opts).unwrap(), "11.222.333/0001-81");
    }

    #[test]
    fn test_wrong_length_root_rejected() {
        let opts = GenerateOptions::new().with_root("ABC");
        assert_eq!(
            generate(&opts),
            Err(GenerateError::InvalidRootLength { actual: 3 })
        );
    }

    #[test]
    fn test_invalid_root_character_rejected() {
        let opts = GenerateOptions::new().with_root("ABCD-123");
        assert_eq!(
            generate(&opts),
            Err(GenerateError::InvalidRootCharacter { character: '-' })
        );
    }

    #[test]
    fn test_root_length_counted_before_uppercasing() {
        let opts = GenerateOptions::new().with_root("\u{df}ABCDEF");
        assert_eq!(
            generate(&opts),
            Err(GenerateError::InvalidRootLength { actual: 7 })
        );
    }

    #[test]
    fn test_non_ascii_root_letter_rejected() {
        let opts = GenerateOptions::new().with_root("\u{df}ABCDEFG");
        assert_eq!(
            generate(&opts),
            Err(GenerateError::InvalidRootCharacter { character: '\u{df}' })
        );
    }

    #[test]
    fn test_branch_out_of_range() {
        let opts = GenerateOptions::new().with_branch(10_000);
        assert_eq!(
            generate(&opts),
            Err(GenerateError::BranchOutOfRange { branch: 10_000 })
        );
    }

    #[test]
    fn test_degenerate_root_rejected() {
        let opts = GenerateOptions::new().with_root("00000000").with_branch(0);
        assert_eq!(generate(&opts), Err(GenerateError::Degenerate));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let opts = GenerateOptions::new().with_alphanumeric(true);
        let a = generate_with_rng(&opts, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_with_rng(&opts, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_alphanumeric_generation_is_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        let opts = GenerateOptions::new().with_alphanumeric(true).with_branch(12);
        for _ in 0..200 {
            let cnpj = generate_with_rng(&opts, &mut rng).unwrap();
            let result = validate(&cnpj);
            assert!(result.valid, "{cnpj} rejected: {:?}", result.errors);
            assert_eq!(result.branch_number, 12);
        }
    }

    #[test]
    fn test_options_from_partial_json() {
        let opts: GenerateOptions = serde_json::from_str(r#"{ "branch": 3 }"#).unwrap();
        assert_eq!(opts, GenerateOptions::new().with_branch(3));

        let opts: GenerateOptions =
            serde_json::from_str(r#"{ "alphanumeric": true, "root": "TEST1234" }"#).unwrap();
        assert!(opts.alphanumeric);
        assert_eq!(opts.root.as_deref(), Some("TEST1234"));
        assert_eq!(opts.branch, 1);
    }
}
