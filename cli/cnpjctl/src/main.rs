//! cnpjctl (cnpj) - command-line tool for CNPJ identifiers
//!
//! Validates, formats, inspects, and generates CNPJs, one at a time or in
//! batches read from a file.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            error::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
