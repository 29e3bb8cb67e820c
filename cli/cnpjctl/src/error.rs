//! Error handling and display for the CLI.

use cnpj_id::GenerateError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot generate CNPJ: {0}")]
    Generate(#[from] GenerateError),

    #[error("no CNPJs found in {path}")]
    EmptyBatch { path: String },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint_for) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Generate(
            GenerateError::InvalidRootLength { .. } | GenerateError::InvalidRootCharacter { .. },
        ) => Some("A root is exactly 8 characters, each 0-9 or A-Z."),
        CliError::Generate(GenerateError::BranchOutOfRange { .. }) => {
            Some("Branch numbers go from 0 to 9999.")
        }
        CliError::Generate(GenerateError::Degenerate) => {
            Some("Pick a different root or branch; this one yields all-zero digits.")
        }
        CliError::EmptyBatch { .. } => Some("Put one CNPJ per line; blank lines are skipped."),
        CliError::Generate(GenerateError::Checksum(_)) => None,
    }
}
