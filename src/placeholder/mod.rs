//! Placeholder grammar and scanning.
//!
//! A placeholder is literal text of the form
//!
//! ```text
//! {{<prefix>.<kind>(<args>)}}
//! ```
//!
//! where `<prefix>` is fixed by configuration, `<kind>` is one or more ASCII
//! letters, and `<args>` is everything up to the first `)}}` on the same line.
//! The grammar is case-sensitive and has no escaping: an argument containing
//! `)}}` ends the placeholder early.
//!
//! Scanning yields each distinct placeholder once, in order of first
//! occurrence. Substitution is done by literal text, so every copy of the same
//! macro text in a request receives the same value.
//!
//! # Examples
//!
//! ```rust
//! use reqfaker::placeholder::PlaceholderScanner;
//!
//! let scanner = PlaceholderScanner::new("faker")?;
//! let found = scanner.scan("id={{faker.uuid()}}&name={{faker.alpha(5, tag=user)}}");
//!
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].kind, "uuid");
//! assert_eq!(found[1].raw_args, "5, tag=user");
//! assert_eq!(found[1].literal, "{{faker.alpha(5, tag=user)}}");
//! # Ok::<(), reqfaker::core::FakerError>(())
//! ```

mod args;
mod params;

pub use args::ResolvedArgs;
pub use params::GeneratorParams;

use crate::core::{FakerError, Result};
use regex::Regex;
use std::collections::HashSet;

/// One distinct placeholder found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    /// Generator kind as written (`uuid`, `alpha`, `custom`, ...)
    pub kind: String,
    /// Unparsed text between the parentheses
    pub raw_args: String,
    /// The exact macro text that gets replaced
    pub literal: String,
}

/// Finds placeholders for one configured prefix.
#[derive(Debug, Clone)]
pub struct PlaceholderScanner {
    prefix: String,
    pattern: Regex,
}

impl PlaceholderScanner {
    /// Build a scanner for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::InvalidPrefix`] if the prefix is empty or contains
    /// characters other than ASCII letters, digits, `_` and `-`.
    pub fn new(prefix: &str) -> Result<Self> {
        if !is_valid_prefix(prefix) {
            return Err(FakerError::InvalidPrefix {
                prefix: prefix.to_string(),
            });
        }

        let source = [r"\{\{", &regex::escape(prefix), r"\.([a-zA-Z]+)\((.*?)\)\}\}"].concat();
        let pattern = Regex::new(&source).map_err(|e| FakerError::InvalidPrefix {
            prefix: format!("{prefix} ({e})"),
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Return each distinct placeholder in `text`, in order of first occurrence.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<Placeholder> {
        let mut seen = HashSet::new();
        let mut placeholders = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let literal = &caps[0];
            if !seen.insert(literal.to_string()) {
                continue;
            }
            placeholders.push(Placeholder {
                kind: caps[1].to_string(),
                raw_args: caps[2].to_string(),
                literal: literal.to_string(),
            });
        }

        tracing::debug!(
            "Found {} distinct placeholder(s) with prefix '{}'",
            placeholders.len(),
            self.prefix
        );
        placeholders
    }

    /// Render the macro text for `kind` and `raw_args` with this prefix.
    #[must_use]
    pub fn render(&self, kind: &str, raw_args: &str) -> String {
        render_placeholder(&self.prefix, kind, raw_args)
    }
}

/// Render `{{<prefix>.<kind>(<raw_args>)}}`.
#[must_use]
pub fn render_placeholder(prefix: &str, kind: &str, raw_args: &str) -> String {
    format!("{{{{{prefix}.{kind}({raw_args})}}}}")
}

/// Whether `prefix` can be used as a placeholder namespace.
#[must_use]
pub fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
