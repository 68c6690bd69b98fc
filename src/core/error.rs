//! Error handling for reqfaker
//!
//! This module provides the error types and user-facing error reporting for the
//! placeholder engine and its command-line front end. Two layers exist:
//!
//! - [`FakerError`] - strongly-typed failures raised by parsing, generation,
//!   and configuration
//! - [`ErrorContext`] - a wrapper that adds a suggestion and details for CLI display
//!
//! Most `FakerError`s raised while resolving a single placeholder never reach
//! the user: the engine logs them and substitutes the `INVALID_PLACEHOLDER`
//! sentinel so the remaining placeholders in the same text still resolve.
//! Only configuration and I/O failures surface through the CLI.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reqfaker::core::{ErrorContext, FakerError, user_friendly_error};
//!
//! let error = FakerError::InvalidPrefix {
//!     prefix: "bad prefix".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//!
//! let ctx = ErrorContext::new(FakerError::ConfigError {
//!     message: "missing prefix".to_string(),
//! })
//! .with_suggestion("Set `prefix` in ~/.reqfaker/config.toml");
//! println!("{ctx}");
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for reqfaker operations
#[derive(Error, Debug, Clone)]
pub enum FakerError {
    /// A placeholder matched the grammar but cannot produce a value
    ///
    /// Raised for unknown generator kinds, a `custom` macro without a charset,
    /// or a `regex` macro without a pattern.
    #[error("Invalid placeholder '{kind}': {reason}")]
    InvalidPlaceholder {
        /// Generator kind as written in the macro
        kind: String,
        /// Why the placeholder cannot be resolved
        reason: String,
    },

    /// The `length` argument is not a usable non-negative integer
    #[error("Invalid length '{value}': {reason}")]
    InvalidLength {
        /// The raw argument value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The regex generator rejected a pattern
    #[error("Cannot generate a value for regex '{pattern}': {reason}")]
    RegexGenerationFailed {
        /// Pattern supplied in the macro
        pattern: String,
        /// Error reported by the regex generator
        reason: String,
    },

    /// The configured placeholder prefix cannot be used in the macro grammar
    #[error("Invalid placeholder prefix '{prefix}'")]
    InvalidPrefix {
        /// The rejected prefix
        prefix: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// The input contained no placeholders (raised only when the caller asks for it)
    #[error("No placeholders found in {source_name}")]
    NoPlaceholders {
        /// Where the text came from (file name or `stdin`)
        source_name: String,
    },

    /// Generic error for cases not covered by specific variants
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error wrapper carrying a suggestion and details for terminal display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: FakerError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details
    #[must_use]
    pub const fn new(error: FakerError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion where one is known
///
/// Recognizes [`FakerError`], [`std::io::Error`], and [`toml::de::Error`]
/// anywhere in the error chain; anything else is reported with its full
/// cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(faker_error) = cause.downcast_ref::<FakerError>() {
            let ctx = create_error_context(faker_error.clone());
            // Context layers added with anyhow explain where the error happened
            return if error.chain().count() > 1 {
                ctx.with_details(chain_message(&error))
            } else {
                ctx
            };
        }

        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            let ctx = ErrorContext::new(FakerError::Other {
                message: chain_message(&error),
            });
            return match io_error.kind() {
                std::io::ErrorKind::NotFound => {
                    ctx.with_suggestion("Check that the file exists and the path is correct")
                }
                std::io::ErrorKind::PermissionDenied => {
                    ctx.with_suggestion("Check the file permissions or run from a directory you own")
                }
                _ => ctx,
            };
        }

        if cause.downcast_ref::<toml::de::Error>().is_some() {
            return ErrorContext::new(FakerError::Other {
                message: chain_message(&error),
            })
            .with_suggestion("Check the TOML syntax of your reqfaker configuration file")
            .with_details(
                "Recognized keys are prefix, default_length, regex_enabled and regex_max_repeat",
            );
        }
    }

    ErrorContext::new(FakerError::Other {
        message: chain_message(&error),
    })
}

fn chain_message(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }
    message
}

fn create_error_context(error: FakerError) -> ErrorContext {
    match &error {
        FakerError::InvalidPrefix {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use a prefix made of letters, digits, '_' or '-', for example 'faker'")
            .with_details("The prefix is matched literally inside {{<prefix>.<kind>(<args>)}}"),

        FakerError::InvalidLength {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the length as a plain number no larger than max_length, e.g. {{faker.alpha(12)}} or length=12"),

        FakerError::InvalidPlaceholder {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Supported kinds are uuid, alpha, lower, upper, numeric, alphanumeric, custom and regex",
        ),

        FakerError::RegexGenerationFailed {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the pattern syntax; commas inside a pattern split it into separate arguments"),

        FakerError::NoPlaceholders {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the placeholders use the configured prefix, or pass --prefix"),

        FakerError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check ~/.reqfaker/config.toml or the file passed with --config"),

        _ => ErrorContext::new(error),
    }
}
