//! # cnpj-id
//!
//! Validation, formatting, decomposition, and generation of CNPJ registry
//! identifiers.
//!
//! ## Identifier Layout
//!
//! A CNPJ has 14 characters: an 8-character establishment root, a 4-digit
//! branch (order) number, and 2 check digits. Rendered masked it reads
//! `XX.XXX.XXX/YYYY-ZZ`.
//!
//! Examples:
//! - `11.222.333/0001-81` (numeric, headquarters)
//! - `12.ABC.345/0001-88` (alphanumeric root)
//!
//! Roots may hold `0-9` or `A-Z`; branch and check digits are always
//! numeric. Letters enter the checksum as their ASCII code minus 48.
//!
//! ## Validation Pipeline
//!
//! - Normalize: strip `.`, `-`, `/` and whitespace, upper-case
//! - Structure: missing, length, character classes, repeated characters
//! - Check digits: two weighted modulo-11 passes over root + branch
//!
//! Only the first failing check is reported. Validation never returns an
//! `Err`; callers branch on [`ValidationResult::valid`] and
//! [`ValidationResult::errors`].
//!
//! All tables are immutable statics, so every function here is safe to call
//! from any number of threads.

mod checksum;
mod error;
mod format;
mod generate;
mod structure;
mod types;
mod validate;

pub use checksum::{calculate_check_digits, char_value, WEIGHTS_FIRST, WEIGHTS_SECOND};
pub use error::{GenerateError, ValidationError};
pub use format::{format, is_formatted};
pub use generate::{generate, generate_with_rng, GenerateOptions, MAX_BRANCH};
pub use structure::{normalize, CNPJ_LEN};
pub use types::Cnpj;
pub use validate::{get_info, is_valid, validate, BranchKind, IdentifierInfo, ValidationResult};
