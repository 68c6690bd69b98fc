//! Regex-to-string capability.
//!
//! Producing a string that matches an arbitrary pattern is optional: an engine
//! built without a [`RegexGenerator`] substitutes `REGEX_NOT_SUPPORTED(<pattern>)`
//! for `regex` placeholders and disables the regex menu entry.

use crate::core::{FakerError, Result};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Produces strings that fully match a regular expression.
pub trait RegexGenerator: Send + Sync {
    /// Generate one string matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::RegexGenerationFailed`] when the pattern cannot be
    /// parsed or is not supported by the implementation.
    fn generate(&self, pattern: &str) -> Result<String>;
}

/// [`RegexGenerator`] backed by `rand_regex`.
///
/// Unbounded repetitions (`*`, `+`, `{n,}`) are capped at `max_repeat`.
#[derive(Debug, Clone, Copy)]
pub struct RandRegexGenerator {
    max_repeat: u32,
}

impl RandRegexGenerator {
    #[must_use]
    pub const fn new(max_repeat: u32) -> Self {
        Self {
            max_repeat,
        }
    }
}

impl Default for RandRegexGenerator {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_REGEX_MAX_REPEAT)
    }
}

impl RegexGenerator for RandRegexGenerator {
    fn generate(&self, pattern: &str) -> Result<String> {
        let compiled = rand_regex::Regex::compile(pattern, self.max_repeat).map_err(|e| {
            FakerError::RegexGenerationFailed {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut rng = SmallRng::from_rng(&mut rand::rng());
        Ok(rng.sample::<String, _>(&compiled))
    }
}
