//! Batch validation command.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use cnpj_id::ValidationResult;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::error::CliError;
use crate::output::{print_info, print_json, print_table, OutputFormat};

use super::validate::ValidateSummary;
use super::CommandContext;

#[derive(Debug, Args)]
pub struct BatchCommand {
    /// File with one CNPJ per line.
    file: PathBuf,

    /// Show only the totals.
    #[arg(long, short = 's')]
    summary: bool,
}

#[derive(Debug, Tabled)]
struct BatchRow {
    #[tabled(rename = "Status")]
    status: &'static str,

    #[tabled(rename = "CNPJ")]
    cnpj: String,

    #[tabled(rename = "Errors")]
    errors: String,
}

impl From<&ValidationResult> for BatchRow {
    fn from(result: &ValidationResult) -> Self {
        Self {
            status: if result.valid { "valid" } else { "invalid" },
            cnpj: ValidateSummary::from(result).cnpj.to_string(),
            errors: result.error_codes().join(", "),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct BatchSummary {
    total: usize,
    valid: usize,
    invalid: usize,
}

impl BatchSummary {
    fn from_results(results: &[ValidationResult]) -> Self {
        let valid = results.iter().filter(|r| r.valid).count();
        Self {
            total: results.len(),
            valid,
            invalid: results.len() - valid,
        }
    }

    fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total as f64
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchOutput<'a> {
    summary: BatchSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<Vec<ValidateSummary<'a>>>,
}

/// Non-blank lines, trimmed.
fn entries(contents: &str) -> impl Iterator<Item = &str> {
    contents.lines().map(str::trim).filter(|line| !line.is_empty())
}

impl BatchCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let contents = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;

        let results: Vec<ValidationResult> = entries(&contents).map(cnpj_id::validate).collect();
        if results.is_empty() {
            return Err(CliError::EmptyBatch {
                path: self.file.display().to_string(),
            }
            .into());
        }

        let summary = BatchSummary::from_results(&results);
        info!(
            file = %self.file.display(),
            total = summary.total,
            valid = summary.valid,
            "batch validated"
        );

        match ctx.format {
            OutputFormat::Json => print_json(&BatchOutput {
                summary,
                results: (!self.summary)
                    .then(|| results.iter().map(ValidateSummary::from).collect()),
            }),
            OutputFormat::Table if self.summary => {
                print_info("batch validation summary");
                println!("   ├─ Total: {}", summary.total);
                println!(
                    "   ├─ Valid: {} ({:.1}%)",
                    summary.valid,
                    summary.percent(summary.valid)
                );
                println!(
                    "   └─ Invalid: {} ({:.1}%)",
                    summary.invalid,
                    summary.percent(summary.invalid)
                );
            }
            OutputFormat::Table => {
                let rows: Vec<BatchRow> = results.iter().map(BatchRow::from).collect();
                print_table(&rows);
                println!(
                    "\n{}",
                    format!("{}/{} CNPJs valid", summary.valid, summary.total).bold()
                );
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn entries_skip_blank_lines() {
        let contents = "11.222.333/0001-81\n\n   \n  12ABC345000188  \r\n";
        let lines: Vec<_> = entries(contents).collect();
        assert_eq!(lines, vec!["11.222.333/0001-81", "12ABC345000188"]);
    }

    #[test]
    fn summary_counts_and_percentages() {
        let results: Vec<_> = ["11222333000181", "11222333000182", "", "12ABC345000188"]
            .into_iter()
            .map(cnpj_id::validate)
            .collect();
        let summary = BatchSummary::from_results(&results);
        assert_eq!(
            summary,
            BatchSummary {
                total: 4,
                valid: 2,
                invalid: 2
            }
        );
        assert!((summary.percent(summary.valid) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_of_empty_batch_is_zero() {
        let summary = BatchSummary::from_results(&[]);
        assert_eq!(summary.percent(0), 0.0);
    }

    #[test]
    fn row_shows_error_codes() {
        let row = BatchRow::from(&cnpj_id::validate("11.222.333/0001-82"));
        assert_eq!(row.status, "invalid");
        assert_eq!(row.cnpj, "11.222.333/0001-82");
        assert_eq!(row.errors, "BAD_CHECK_DIGITS");
    }

    #[test]
    fn run_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "11.222.333/0001-81").unwrap();
        writeln!(file, "11.222.333/0001-82").unwrap();

        let cmd = BatchCommand {
            file: file.path().to_path_buf(),
            summary: true,
        };
        let ctx = CommandContext {
            format: OutputFormat::Json,
        };
        assert!(cmd.run(&ctx).is_ok());
    }

    #[test]
    fn run_rejects_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let cmd = BatchCommand {
            file: file.path().to_path_buf(),
            summary: false,
        };
        let ctx = CommandContext {
            format: OutputFormat::Table,
        };
        let err = cmd.run(&ctx).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::EmptyBatch { .. })
        ));
    }

    #[test]
    fn run_reports_missing_file() {
        let cmd = BatchCommand {
            file: PathBuf::from("/nonexistent/cnpjs.txt"),
            summary: false,
        };
        let ctx = CommandContext {
            format: OutputFormat::Table,
        };
        let err = cmd.run(&ctx).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
