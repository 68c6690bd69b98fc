//! Test utilities for reqfaker
//!
//! Helpers shared by unit tests and the integration test crate (enabled there
//! through the `test-utils` feature):
//! - one-time logging initialization
//! - stub regex capabilities for the "always present" and "rejects everything"
//!   cases
//! - an engine wired to a [`MemorySink`] so tests can inspect replacement
//!   records
//!
//! # Example
//!
//! ```rust,no_run
//! use reqfaker::test_utils::{AlwaysRegex, engine_with_memory_sink};
//! use std::sync::Arc;
//!
//! let (engine, sink) = engine_with_memory_sink("p", Some(Arc::new(AlwaysRegex::new("abc12"))));
//! assert_eq!(engine.transform("{{p.regex([a-z]{3}[0-9]{2})}}", "test"), "abc12");
//! assert_eq!(sink.records().len(), 1);
//! ```

use std::sync::{Arc, Once};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::core::{FakerError, Result};
use crate::engine::{FakerEngine, MemorySink};
use crate::generator::RegexGenerator;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=reqfaker=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// Regex capability that answers every pattern with the same value.
#[derive(Debug, Clone)]
pub struct AlwaysRegex {
    value: String,
}

impl AlwaysRegex {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl RegexGenerator for AlwaysRegex {
    fn generate(&self, _pattern: &str) -> Result<String> {
        Ok(self.value.clone())
    }
}

/// Regex capability that rejects every pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectingRegex;

impl RegexGenerator for RejectingRegex {
    fn generate(&self, pattern: &str) -> Result<String> {
        Err(FakerError::RegexGenerationFailed {
            pattern: pattern.to_string(),
            reason: "rejected by test stub".to_string(),
        })
    }
}

/// Engine for `prefix` whose replacement records go to the returned sink.
///
/// # Panics
///
/// Panics if `prefix` is not a valid placeholder prefix.
pub fn engine_with_memory_sink(
    prefix: &str,
    regex: Option<Arc<dyn RegexGenerator>>,
) -> (FakerEngine, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let builder = FakerEngine::builder().prefix(prefix).sink(sink.clone());
    let builder = match regex {
        Some(regex) => builder.regex_generator(regex),
        None => builder.without_regex(),
    };
    let engine = builder.build().unwrap_or_else(|e| panic!("Invalid test prefix '{prefix}': {e}"));
    (engine, sink)
}
