//! The validation pipeline and the views derived from it.

use serde::Serialize;
use tracing::{debug, trace};

use crate::checksum::check_digits_string;
use crate::error::ValidationError;
use crate::format::format;
use crate::structure::{
    check_structure, normalize, Structure, BRANCH_LEN, HEADQUARTERS_BRANCH, ROOT_LEN,
};

/// Outcome of validating one input.
///
/// `errors` holds at most one entry: the first check that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub input: String,
    pub normalized: String,
    /// Masked form; empty unless `valid`.
    pub formatted: String,
    pub is_alphanumeric: bool,
    pub is_headquarters: bool,
    pub branch_number: u16,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn rejected(input: &str, normalized: String, error: ValidationError) -> Self {
        Self {
            valid: false,
            input: input.to_string(),
            normalized,
            formatted: String::new(),
            is_alphanumeric: false,
            is_headquarters: false,
            branch_number: 0,
            errors: vec![error],
        }
    }

    /// Returns the error that rejected the input, if any.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Returns the stable identifiers of the collected errors.
    pub fn error_codes(&self) -> Vec<&'static str> {
        self.errors.iter().map(ValidationError::code).collect()
    }
}

/// Headquarters or numbered branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "number")]
pub enum BranchKind {
    Headquarters,
    Branch(u16),
}

impl BranchKind {
    /// Classifies a branch number.
    pub const fn from_number(number: u16) -> Self {
        if number == HEADQUARTERS_BRANCH {
            BranchKind::Headquarters
        } else {
            BranchKind::Branch(number)
        }
    }
}

impl std::fmt::Display for BranchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchKind::Headquarters => write!(f, "headquarters"),
            BranchKind::Branch(n) => write!(f, "branch #{n}"),
        }
    }
}

/// Decomposition of a valid CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierInfo {
    pub root: String,
    pub branch: String,
    pub check_digits: String,
    pub is_headquarters: bool,
    pub branch_number: u16,
}

impl IdentifierInfo {
    /// Projects a validation result; `None` unless the result is valid.
    pub fn from_result(result: &ValidationResult) -> Option<Self> {
        if !result.valid {
            return None;
        }

        let normalized = result.normalized.as_str();
        Some(Self {
            root: normalized[..ROOT_LEN].to_string(),
            branch: normalized[ROOT_LEN..ROOT_LEN + BRANCH_LEN].to_string(),
            check_digits: normalized[ROOT_LEN + BRANCH_LEN..].to_string(),
            is_headquarters: result.is_headquarters,
            branch_number: result.branch_number,
        })
    }

    /// Returns whether this is the headquarters or a numbered branch.
    pub fn kind(&self) -> BranchKind {
        BranchKind::from_number(self.branch_number)
    }
}

/// Validates a CNPJ, numeric or alphanumeric, formatted or not.
///
/// Never fails: every problem with the input is reported in
/// [`ValidationResult::errors`].
pub fn validate(input: &str) -> ValidationResult {
    let normalized = normalize(input);

    let checked = check_structure(&normalized);
    let structure = match checked {
        Ok(structure) => structure,
        Err(err) => {
            debug!(error = err.code(), "CNPJ failed structural checks");
            return ValidationResult::rejected(input, normalized, err);
        }
    };

    let verdict = verify_check_digits(&structure);
    let mut result = ValidationResult {
        valid: false,
        input: input.to_string(),
        normalized: String::new(),
        formatted: String::new(),
        is_alphanumeric: structure.is_alphanumeric,
        is_headquarters: structure.is_headquarters(),
        branch_number: structure.branch_number,
        errors: Vec::new(),
    };

    match verdict {
        Ok(()) => {
            result.valid = true;
            result.formatted = format(&normalized);
            trace!(cnpj = %result.formatted, "CNPJ valid");
        }
        Err(err) => {
            debug!(normalized = %normalized, error = err.code(), "CNPJ rejected");
            result.errors.push(err);
        }
    }

    result.normalized = normalized;
    result
}

fn verify_check_digits(structure: &Structure<'_>) -> Result<(), ValidationError> {
    let expected = check_digits_string(&structure.base())?;
    if expected == structure.check_digits {
        Ok(())
    } else {
        Err(ValidationError::BadCheckDigits)
    }
}

/// Returns true if the input is a valid CNPJ.
pub fn is_valid(input: &str) -> bool {
    validate(input).valid
}

/// Returns the decomposition of a valid CNPJ, or `None` if it is invalid.
pub fn get_info(input: &str) -> Option<IdentifierInfo> {
    IdentifierInfo::from_result(&validate(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numeric() {
        let result = validate("11.222.333/0001-81");
        assert!(result.valid);
        assert_eq!(result.input, "11.222.333/0001-81");
        assert_eq!(result.normalized, "11222333000181");
        assert_eq!(result.formatted, "11.222.333/0001-81");
        assert!(!result.is_alphanumeric);
        assert!(result.is_headquarters);
        assert_eq!(result.branch_number, 1);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_valid_alphanumeric_lowercase_input() {
        let result = validate("ab.cde.fgh/0001-95");
        assert!(result.valid);
        assert_eq!(result.normalized, "ABCDEFGH000195");
        assert_eq!(result.formatted, "AB.CDE.FGH/0001-95");
        assert!(result.is_alphanumeric);
    }

    #[test]
    fn test_bad_check_digits_keeps_structure_fields() {
        let result = validate("11222333000282");
        assert!(!result.valid);
        assert_eq!(result.errors, vec![ValidationError::BadCheckDigits]);
        assert_eq!(result.branch_number, 2);
        assert!(!result.is_headquarters);
        assert!(result.formatted.is_empty());
        assert_eq!(result.normalized, "11222333000282");
    }

    #[test]
    fn test_swapped_check_digits_rejected() {
        assert!(!is_valid("11222333000118"));
    }

    #[test]
    fn test_only_first_error_reported() {
        let result = validate("1A_");
        assert_eq!(result.error_codes(), vec!["BAD_LENGTH"]);
    }

    #[test]
    fn test_missing_on_whitespace_only() {
        let result = validate("  \t ");
        assert_eq!(result.first_error(), Some(&ValidationError::Missing));
        assert_eq!(result.normalized, "");
    }

    #[test]
    fn test_get_info_valid() {
        let info = get_info("11222333000262").unwrap();
        assert_eq!(info.root, "11222333");
        assert_eq!(info.branch, "0002");
        assert_eq!(info.check_digits, "62");
        assert_eq!(info.branch_number, 2);
        assert!(!info.is_headquarters);
        assert_eq!(info.kind(), BranchKind::Branch(2));
    }

    #[test]
    fn test_get_info_invalid_is_none() {
        assert!(get_info("11222333000182").is_none());
        assert!(get_info("").is_none());
    }

    #[test]
    fn test_branch_kind_display() {
        assert_eq!(BranchKind::from_number(1).to_string(), "headquarters");
        assert_eq!(BranchKind::from_number(7).to_string(), "branch #7");
    }

    #[test]
    fn test_result_json_shape() {
        let value = serde_json::to_value(validate("11222333000182")).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["branchNumber"], 1);
        assert_eq!(value["isHeadquarters"], true);
        assert_eq!(value["errors"], serde_json::json!(["BAD_CHECK_DIGITS"]));
    }

    #[test]
    fn test_branch_kind_json() {
        let value = serde_json::to_value(BranchKind::Branch(3)).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "branch", "number": 3 }));
    }
}
