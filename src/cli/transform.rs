//! Replace placeholders in a request file or stdin.
//!
//! # Examples
//!
//! ```bash
//! # Print the transformed request
//! reqfaker transform captured.http
//!
//! # Three requests from one template, sharing tagged values
//! reqfaker transform captured.http --repeat 3
//!
//! # Fail when the input contains no placeholders for the prefix
//! reqfaker transform --check < captured.http
//! ```

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use crate::constants::DEFAULT_LABEL;
use crate::core::FakerError;
use crate::engine::FakerEngine;

/// Arguments of `reqfaker transform`.
#[derive(Args, Debug)]
pub struct TransformCommand {
    /// Request file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Label attached to replacement log records (defaults to the file name)
    #[arg(short, long)]
    label: Option<String>,

    /// Transform the input this many times with the same engine
    ///
    /// Tagged values carry over between repetitions, as they would across
    /// intercepted requests. Each result ends with a newline.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Exit with an error when nothing was replaced
    #[arg(long)]
    check: bool,
}

impl TransformCommand {
    /// Run the transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the output cannot be
    /// written, or `--check` is set and the input has no placeholders.
    pub async fn execute(self, engine: &FakerEngine) -> Result<()> {
        let input = self.read_input().await?;
        let source_name = self.source_name();
        let label = self.label.clone().unwrap_or_else(|| source_name.clone());

        let mut changed = false;
        let mut output = String::new();
        for _ in 0..self.repeat {
            let result = match engine.process_request(&input, &label) {
                Some(transformed) => {
                    changed = true;
                    transformed
                }
                None => input.clone(),
            };
            output.push_str(&result);
            if self.repeat > 1 && !result.ends_with('\n') {
                output.push('\n');
            }
        }

        if !changed {
            tracing::debug!("No placeholders for prefix '{}' in {}", engine.prefix(), source_name);
            if self.check {
                return Err(FakerError::NoPlaceholders {
                    source_name,
                }
                .into());
            }
        }

        self.write_output(&output).await
    }

    async fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read request from {}", path.display())),
            None => {
                let mut input = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut input)
                    .await
                    .context("Failed to read request from stdin")?;
                Ok(input)
            }
        }
    }

    async fn write_output(&self, output: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                write_file(path, output).await?;
                tracing::info!("Wrote transformed request to {}", path.display());
                Ok(())
            }
            None => {
                print!("{output}");
                Ok(())
            }
        }
    }

    fn source_name(&self) -> String {
        self.file
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| DEFAULT_LABEL.to_string(), |name| name.to_string_lossy().into_owned())
    }
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write output to {}", path.display()))
}
