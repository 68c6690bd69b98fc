//! Builder for [`FakerEngine`].

use std::sync::{Arc, Mutex};

use super::{FakerEngine, ObservabilitySink, TracingSink};
use crate::cache::TagCache;
use crate::config::FakerConfig;
use crate::constants::{DEFAULT_LENGTH, DEFAULT_PREFIX, MAX_LENGTH};
use crate::core::{FakerError, Result};
use crate::generator::{Generator, RandRegexGenerator, RegexGenerator};
use crate::placeholder::PlaceholderScanner;

/// Fluent construction of a [`FakerEngine`].
///
/// Defaults: prefix `faker`, length 8, maximum length [`MAX_LENGTH`], no regex
/// generator, [`TracingSink`].
///
/// # Examples
///
/// ```rust
/// use reqfaker::engine::FakerEngine;
/// use reqfaker::generator::RandRegexGenerator;
/// use std::sync::Arc;
///
/// let engine = FakerEngine::builder()
///     .prefix("burp_faker")
///     .default_length(12)
///     .regex_generator(Arc::new(RandRegexGenerator::default()))
///     .build()?;
///
/// assert!(engine.supports_regex());
/// assert_eq!(engine.transform("{{burp_faker.numeric()}}", "doc").len(), 12);
/// # Ok::<(), reqfaker::core::FakerError>(())
/// ```
pub struct FakerEngineBuilder {
    prefix: String,
    default_length: usize,
    max_length: usize,
    regex: Option<Arc<dyn RegexGenerator>>,
    sink: Arc<dyn ObservabilitySink>,
}

impl Default for FakerEngineBuilder {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            default_length: DEFAULT_LENGTH,
            max_length: MAX_LENGTH,
            regex: None,
            sink: Arc::new(TracingSink),
        }
    }
}

impl FakerEngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded from a configuration.
    ///
    /// A `rand_regex` backed generator is installed when `regex_enabled` is set.
    #[must_use]
    pub fn from_config(config: &FakerConfig) -> Self {
        let builder = Self::new()
            .prefix(&config.prefix)
            .default_length(config.default_length)
            .max_length(config.max_length);
        if config.regex_enabled {
            builder.regex_generator(Arc::new(RandRegexGenerator::new(config.regex_max_repeat)))
        } else {
            builder
        }
    }

    /// Set the placeholder prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the length used when a placeholder gives none.
    #[must_use]
    pub fn default_length(mut self, length: usize) -> Self {
        self.default_length = length;
        self
    }

    /// Set the largest length a placeholder may request.
    #[must_use]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = length;
        self
    }

    /// Install the regex-to-string capability.
    #[must_use]
    pub fn regex_generator(mut self, regex: Arc<dyn RegexGenerator>) -> Self {
        self.regex = Some(regex);
        self
    }

    /// Remove any regex capability; `regex` placeholders become
    /// `REGEX_NOT_SUPPORTED(<pattern>)`.
    #[must_use]
    pub fn without_regex(mut self) -> Self {
        self.regex = None;
        self
    }

    /// Set the sink receiving one record per replacement.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn ObservabilitySink>) -> Self {
        self.sink = sink;
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    ///
    /// - [`FakerError::InvalidPrefix`] if the prefix cannot be used in the
    ///   placeholder grammar
    /// - [`FakerError::ConfigError`] if `default_length` exceeds `max_length`
    pub fn build(self) -> Result<FakerEngine> {
        if self.default_length > self.max_length {
            return Err(FakerError::ConfigError {
                message: format!(
                    "default_length {} exceeds max_length {}",
                    self.default_length, self.max_length
                ),
            });
        }
        let scanner = PlaceholderScanner::new(&self.prefix)?;
        let generator = Generator::new(self.regex);

        tracing::info!("reqfaker engine loaded (prefix '{}')", scanner.prefix());
        if generator.supports_regex() {
            tracing::info!("regex generator found - regex faker enabled");
        } else {
            tracing::info!("regex generator not available - regex faker disabled");
        }

        Ok(FakerEngine {
            scanner,
            generator,
            cache: Mutex::new(TagCache::new()),
            sink: self.sink,
            default_length: self.default_length,
            max_length: self.max_length,
        })
    }
}
