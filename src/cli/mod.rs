//! Command-line interface for reqfaker.
//!
//! The binary runs the same [`FakerEngine`] a proxy host would embed, against
//! files or stdin. One engine is built per invocation from the user
//! configuration, so tagged values persist across repeated transforms within a
//! run but not between runs.
//!
//! # Available Commands
//!
//! - `transform` - replace placeholders in a request file or stdin
//! - `generate` - resolve a single macro and print its value
//! - `menu` - list the insertion menu entries
//!
//! # Global Options
//!
//! - `--verbose` - enable debug output
//! - `--quiet` - suppress all log output except errors reported on exit
//! - `--config` - path to a config file (also `REQFAKER_CONFIG`)
//! - `--prefix` - placeholder prefix, overriding the configured one
//!
//! Logs are written to stderr so that stdout carries only the command output.
//!
//! # Example
//!
//! ```bash
//! reqfaker --prefix burp_faker transform captured.http --repeat 3
//! reqfaker generate custom 12 'abc123!@#'
//! reqfaker menu --format json
//! ```

mod generate;
mod menu;
mod transform;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::FakerConfig;
use crate::engine::FakerEngine;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and embedding code can run commands
/// without going through argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// `EnvFilter` directive for log output; `None` disables logging.
    ///
    /// `RUST_LOG` takes precedence when set.
    pub log_level: Option<String>,

    /// Explicit configuration file instead of `~/.reqfaker/config.toml`.
    pub config_path: Option<PathBuf>,

    /// Prefix replacing the configured one.
    pub prefix: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Does nothing when `log_level` is `None`, or when a subscriber is
    /// already installed.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load the configuration, apply the prefix override, and build the
    /// engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read or
    /// parsed, or if the resulting configuration is invalid.
    pub async fn load_engine(&self) -> Result<FakerEngine> {
        let mut config = FakerConfig::load_with_optional(self.config_path.clone()).await?;
        if let Some(prefix) = &self.prefix {
            config.prefix.clone_from(prefix);
        }
        Ok(FakerEngine::from_config(&config)?)
    }
}

#[derive(Parser)]
#[command(
    name = "reqfaker",
    about = "Replace {{faker.*()}} placeholders in HTTP requests with generated values",
    version,
    author,
    long_about = "reqfaker finds {{<prefix>.<kind>(<args>)}} macros in request text and replaces them \
                  with UUIDs, random strings, or regex-conformant values, reusing tagged values across \
                  a flow."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, env = "REQFAKER_CONFIG")]
    config: Option<PathBuf>,

    /// Placeholder prefix, overriding the configuration
    #[arg(short, long, global = true)]
    prefix: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace placeholders in a request file or stdin
    Transform(transform::TransformCommand),

    /// Print a single generated value
    Generate(generate::GenerateCommand),

    /// List the insertion menu entries
    Menu(menu::MenuCommand),
}

impl Cli {
    /// Run the selected command.
    ///
    /// # Errors
    ///
    /// Returns the command's error; `main` reports it and exits with status 1.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Runtime configuration for the parsed flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            prefix: self.prefix.clone(),
        }
    }

    /// Run the selected command with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be built or the command fails.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        let engine = config.load_engine().await?;

        let result = match self.command {
            Commands::Transform(cmd) => cmd.execute(&engine).await,
            Commands::Generate(cmd) => cmd.execute(&engine),
            Commands::Menu(cmd) => cmd.execute(&engine),
        };

        engine.reset();
        result
    }
}
