//! Typed, validated CNPJ value.

use crate::error::{GenerateError, ValidationError};
use crate::format::format;
use crate::generate::{generate, GenerateOptions};
use crate::structure::{branch_number, BRANCH_LEN, HEADQUARTERS_BRANCH, ROOT_LEN};
use crate::validate::{validate, BranchKind, IdentifierInfo};

/// A CNPJ that passed full validation.
///
/// Holds the 14-character normalized form. `Display` renders the masked
/// form; serialization uses the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Parses and validates a CNPJ, formatted or not.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let mut result = validate(s);
        if result.valid {
            return Ok(Self(result.normalized));
        }

        match result.errors.pop() {
            Some(err) => Err(err),
            None => Err(ValidationError::BadCheckDigits),
        }
    }

    /// Generates a fresh valid CNPJ.
    pub fn generate(options: &GenerateOptions) -> Result<Self, GenerateError> {
        let formatted = generate(options)?;
        Self::parse(&formatted).map_err(GenerateError::from)
    }

    /// Returns the normalized 14-character form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 8-character establishment root.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.0[..ROOT_LEN]
    }

    /// Returns the 4-digit branch.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.0[ROOT_LEN..ROOT_LEN + BRANCH_LEN]
    }

    /// Returns the 2 check digits.
    #[must_use]
    pub fn check_digits(&self) -> &str {
        &self.0[ROOT_LEN + BRANCH_LEN..]
    }

    #[must_use]
    pub fn branch_number(&self) -> u16 {
        branch_number(self.branch())
    }

    #[must_use]
    pub fn is_headquarters(&self) -> bool {
        self.branch_number() == HEADQUARTERS_BRANCH
    }

    /// Returns true if the root contains a letter.
    #[must_use]
    pub fn is_alphanumeric(&self) -> bool {
        self.root().bytes().any(|b| b.is_ascii_uppercase())
    }

    #[must_use]
    pub fn kind(&self) -> BranchKind {
        BranchKind::from_number(self.branch_number())
    }

    /// Returns the masked `XX.XXX.XXX/YYYY-ZZ` form.
    #[must_use]
    pub fn formatted(&self) -> String {
        format(&self.0)
    }

    #[must_use]
    pub fn info(&self) -> IdentifierInfo {
        IdentifierInfo {
            root: self.root().to_string(),
            branch: self.branch().to_string(),
            check_digits: self.check_digits().to_string(),
            is_headquarters: self.is_headquarters(),
            branch_number: self.branch_number(),
        }
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl serde::Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formatted() {
        let cnpj: Cnpj = "11.222.333/0001-81".parse().unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
        assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
    }

    #[test]
    fn test_parts() {
        let cnpj = Cnpj::parse("A1B2C3D4000274").unwrap();
        assert_eq!(cnpj.root(), "A1B2C3D4");
        assert_eq!(cnpj.branch(), "0002");
        assert_eq!(cnpj.check_digits(), "74");
        assert_eq!(cnpj.branch_number(), 2);
        assert!(!cnpj.is_headquarters());
        assert!(cnpj.is_alphanumeric());
        assert_eq!(cnpj.kind(), BranchKind::Branch(2));
    }

    #[test]
    fn test_info_matches_get_info() {
        let cnpj = Cnpj::parse("11222333000181").unwrap();
        assert_eq!(Some(cnpj.info()), crate::get_info("11222333000181"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Cnpj::parse(""), Err(ValidationError::Missing)));
        assert!(matches!(
            Cnpj::parse("123"),
            Err(ValidationError::BadLength { actual: 3 })
        ));
        assert!(matches!(
            Cnpj::parse("11222333000182"),
            Err(ValidationError::BadCheckDigits)
        ));
    }

    #[test]
    fn test_generate_typed() {
        let opts = GenerateOptions::new().with_root("TEST1234").with_branch(5);
        let cnpj = Cnpj::generate(&opts).unwrap();
        assert_eq!(cnpj.as_str(), "TEST1234000571");
    }

    #[test]
    fn test_json_roundtrip() {
        let cnpj = Cnpj::parse("12.ABC.345/0001-88").unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        assert_eq!(json, "\"12ABC345000188\"");
        let parsed: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(cnpj, parsed);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<Cnpj, _> = serde_json::from_str("\"11222333000182\"");
        assert!(result.is_err());
    }
}
