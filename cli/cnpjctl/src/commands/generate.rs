//! Generate command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use cnpj_id::GenerateOptions;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_json, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Number of CNPJs to generate.
    #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Draw root characters from A-Z and 0-9.
    #[arg(long, short = 'a')]
    alphanumeric: bool,

    /// Use this exact 8-character root.
    #[arg(long, short = 'r')]
    root: Option<String>,

    /// Branch number (0-9999); 1 is the headquarters.
    #[arg(long, short = 'b', default_value = "1")]
    branch: u16,

    /// Print the 14 characters without punctuation.
    #[arg(long)]
    no_format: bool,
}

impl GenerateCommand {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            alphanumeric: self.alphanumeric,
            root: self.root.clone(),
            branch: self.branch,
        }
    }

    fn generate_all(&self) -> Result<Vec<String>, CliError> {
        let options = self.options();
        debug!(count = self.count, ?options, "generating CNPJs");

        (0..self.count)
            .map(|_| -> Result<String, CliError> {
                let cnpj = cnpj_id::generate(&options)?;
                Ok(if self.no_format {
                    cnpj_id::normalize(&cnpj)
                } else {
                    cnpj
                })
            })
            .collect()
    }

    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let cnpjs = self.generate_all()?;

        match ctx.format {
            OutputFormat::Table => {
                for cnpj in &cnpjs {
                    println!("{}", cnpj);
                }
            }
            OutputFormat::Json => print_json(&cnpjs),
        }

        Ok(ExitCode::SUCCESS)
    }
}
