//! CLI commands.

mod batch;
mod format;
mod generate;
mod info;
mod validate;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// cnpj - validate, format, inspect, and generate CNPJs.
#[derive(Debug, Parser)]
#[command(name = "cnpj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "table", env = "CNPJ_OUTPUT")]
    output: OutputFormat,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn", env = "CNPJ_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a CNPJ.
    Validate(validate::ValidateCommand),

    /// Generate valid CNPJs for testing.
    Generate(generate::GenerateCommand),

    /// Format a CNPJ as XX.XXX.XXX/YYYY-ZZ.
    Format(format::FormatCommand),

    /// Show the parts of a valid CNPJ.
    Info(info::InfoCommand),

    /// Validate CNPJs from a file, one per line.
    Batch(batch::BatchCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<ExitCode> {
        let ctx = CommandContext {
            format: self.output,
        };

        match self.command {
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::Info(cmd) => cmd.run(&ctx),
            Commands::Batch(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("cnpj {}", env!("CARGO_PKG_VERSION"));
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

/// Exit status for commands that report a verdict.
fn verdict(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
