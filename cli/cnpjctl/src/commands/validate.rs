//! Validate command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use cnpj_id::{ValidationError, ValidationResult};
use serde::Serialize;

use crate::output::{print_failure, print_json, print_success, print_table, Field, OutputFormat};

use super::{verdict, CommandContext};

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// CNPJ to validate, formatted or not.
    cnpj: String,

    /// Show every field of the validation result.
    #[arg(long, short = 'V')]
    verbose: bool,
}

/// Short form of a validation result.
#[derive(Debug, Serialize)]
pub(super) struct ValidateSummary<'a> {
    pub valid: bool,
    pub cnpj: &'a str,
    pub errors: &'a [ValidationError],
}

impl<'a> From<&'a ValidationResult> for ValidateSummary<'a> {
    fn from(result: &'a ValidationResult) -> Self {
        let cnpj = if result.valid {
            &result.formatted
        } else {
            &result.input
        };
        Self {
            valid: result.valid,
            cnpj,
            errors: &result.errors,
        }
    }
}

/// Human-readable reasons, e.g. `invalid check digits (BAD_CHECK_DIGITS)`.
pub(super) fn reasons(result: &ValidationResult) -> Vec<String> {
    result
        .errors
        .iter()
        .map(|err| format!("{} ({})", err, err.code()))
        .collect()
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let result = cnpj_id::validate(&self.cnpj);

        match ctx.format {
            OutputFormat::Json if self.verbose => print_json(&result),
            OutputFormat::Json => print_json(&ValidateSummary::from(&result)),
            OutputFormat::Table => {
                if result.valid {
                    print_success(&result.formatted);
                } else {
                    print_failure(&self.cnpj, &reasons(&result));
                }
                if self.verbose {
                    print_table(&result_fields(&result));
                }
            }
        }

        Ok(verdict(result.valid))
    }
}

fn result_fields(result: &ValidationResult) -> Vec<Field> {
    vec![
        Field::new("Input", &result.input),
        Field::new("Normalized", &result.normalized),
        Field::new("Formatted", &result.formatted),
        Field::new("Alphanumeric", result.is_alphanumeric),
        Field::new("Headquarters", result.is_headquarters),
        Field::new("Branch number", result.branch_number),
        Field::new("Errors", result.error_codes().join(", ")),
    ]
}
