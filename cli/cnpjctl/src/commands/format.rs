//! Format command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct FormatCommand {
    /// CNPJ to format. Returned unchanged unless it has 14 characters.
    cnpj: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormatOutput<'a> {
    input: &'a str,
    formatted: String,
    changed: bool,
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let formatted = cnpj_id::format(&self.cnpj);

        match ctx.format {
            OutputFormat::Table => println!("{}", formatted),
            OutputFormat::Json => print_json(&FormatOutput {
                input: &self.cnpj,
                changed: formatted != self.cnpj,
                formatted,
            }),
        }

        Ok(ExitCode::SUCCESS)
    }
}
