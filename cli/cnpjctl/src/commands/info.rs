//! Info command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use cnpj_id::{BranchKind, IdentifierInfo};
use serde::Serialize;

use crate::output::{print_failure, print_json, print_table, Field, OutputFormat};

use super::validate::{reasons, ValidateSummary};
use super::{verdict, CommandContext};

#[derive(Debug, Args)]
pub struct InfoCommand {
    /// CNPJ to inspect.
    cnpj: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoOutput<'a> {
    formatted: &'a str,
    kind: BranchKind,
    #[serde(flatten)]
    info: &'a IdentifierInfo,
}

impl InfoCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let result = cnpj_id::validate(&self.cnpj);
        let Some(info) = IdentifierInfo::from_result(&result) else {
            match ctx.format {
                OutputFormat::Table => print_failure(&self.cnpj, &reasons(&result)),
                OutputFormat::Json => print_json(&ValidateSummary::from(&result)),
            }
            return Ok(verdict(false));
        };

        match ctx.format {
            OutputFormat::Table => print_table(&info_fields(&result.formatted, &info)),
            OutputFormat::Json => print_json(&InfoOutput {
                formatted: &result.formatted,
                kind: info.kind(),
                info: &info,
            }),
        }

        Ok(verdict(true))
    }
}

fn info_fields(formatted: &str, info: &IdentifierInfo) -> Vec<Field> {
    vec![
        Field::new("CNPJ", formatted),
        Field::new("Root", &info.root),
        Field::new("Branch", &info.branch),
        Field::new("Check digits", &info.check_digits),
        Field::new("Type", info.kind()),
    ]
}
