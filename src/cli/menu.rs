//! List the insertion menu entries.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::engine::FakerEngine;
use crate::menu::MenuEntry;

/// Arguments of `reqfaker menu`.
#[derive(Args, Debug)]
pub struct MenuCommand {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

impl MenuCommand {
    /// Print the menu for the engine's prefix and regex support.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn execute(self, engine: &FakerEngine) -> Result<()> {
        let entries = engine.menu_entries();
        let output = match self.format.as_str() {
            "json" => format_json(&entries)?,
            _ => format_text(&entries),
        };
        println!("{output}");
        Ok(())
    }
}

fn format_json(entries: &[MenuEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize menu entries")
}

fn format_text(entries: &[MenuEntry]) -> String {
    let width = entries.iter().map(|entry| entry.label.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|entry| {
            let line = format!("{:<width$}  {}", entry.label, entry.template);
            if entry.enabled {
                line
            } else {
                format!("{} {}", line.dimmed(), "(disabled)".yellow())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
