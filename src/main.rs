//! reqfaker CLI entry point
//!
//! Parses arguments, runs the selected command, and turns failures into a
//! coloured error report with a suggestion:
//! - `transform` - replace placeholders in a file or stdin
//! - `generate` - print a single generated value
//! - `menu` - list the insertion menu entries

use anyhow::Result;
use clap::Parser;
use reqfaker::cli;
use reqfaker::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
