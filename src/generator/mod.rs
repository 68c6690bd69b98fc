//! Fake value generators.
//!
//! Given a generator kind and its [`GeneratorParams`], the [`Generator`]
//! produces one value. It keeps no state between calls apart from the optional
//! [`RegexGenerator`] capability it was built with.
//!
//! | kind | value |
//! |------|-------|
//! | `uuid` | random version 4 UUID, `8-4-4-4-12` lowercase hex |
//! | `alphanumeric` | `length` characters from `[A-Za-z0-9]` |
//! | `alpha` | `length` characters from `[A-Za-z]` |
//! | `lower` | `length` characters from `[a-z]` |
//! | `upper` | `length` characters from `[A-Z]` |
//! | `numeric` | `length` characters from `[0-9]` |
//! | `custom` | `length` characters from the supplied charset |
//! | `regex` | a string matching the pattern, or `REGEX_NOT_SUPPORTED(<pattern>)` |
//!
//! Anything that cannot be generated becomes `INVALID_PLACEHOLDER`.
//!
//! Values are test data, not secrets: characters are drawn from a small,
//! fast, non-cryptographic PRNG seeded from the thread RNG.
//!
//! # Examples
//!
//! ```rust
//! use reqfaker::generator::Generator;
//! use reqfaker::placeholder::GeneratorParams;
//!
//! let generator = Generator::without_regex();
//! let value = generator.generate("numeric", &GeneratorParams::with_length(6));
//! assert_eq!(value.len(), 6);
//! assert!(value.chars().all(|c| c.is_ascii_digit()));
//!
//! assert_eq!(generator.generate("nope", &GeneratorParams::with_length(6)), "INVALID_PLACEHOLDER");
//! ```

mod pattern;

pub use pattern::{RandRegexGenerator, RegexGenerator};

use crate::constants::{
    ALPHANUMERIC, DIGITS, INVALID_PLACEHOLDER, LETTERS, LOWERCASE, REGEX_NOT_SUPPORTED, UPPERCASE,
};
use crate::core::{FakerError, Result};
use crate::placeholder::GeneratorParams;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;

/// The fixed set of generator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneratorKind {
    Uuid,
    Alphanumeric,
    Alpha,
    Lower,
    Upper,
    Numeric,
    Custom,
    Regex,
}

impl GeneratorKind {
    pub const ALL: [Self; 8] = [
        Self::Uuid,
        Self::Alphanumeric,
        Self::Alpha,
        Self::Lower,
        Self::Upper,
        Self::Numeric,
        Self::Custom,
        Self::Regex,
    ];

    /// Look up a kind by its macro name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Alphanumeric => "alphanumeric",
            Self::Alpha => "alpha",
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Numeric => "numeric",
            Self::Custom => "custom",
            Self::Regex => "regex",
        }
    }

    /// Kinds that take a length and can serve shorter requests from a longer
    /// tagged value.
    #[must_use]
    pub const fn is_sliceable(self) -> bool {
        matches!(
            self,
            Self::Alphanumeric | Self::Alpha | Self::Lower | Self::Upper | Self::Numeric | Self::Custom
        )
    }

    /// Fixed character set for the built-in string kinds.
    const fn charset(self) -> Option<&'static str> {
        match self {
            Self::Alphanumeric => Some(ALPHANUMERIC),
            Self::Alpha => Some(LETTERS),
            Self::Lower => Some(LOWERCASE),
            Self::Upper => Some(UPPERCASE),
            Self::Numeric => Some(DIGITS),
            Self::Uuid | Self::Custom | Self::Regex => None,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Produces values for placeholders.
#[derive(Clone, Default)]
pub struct Generator {
    regex: Option<Arc<dyn RegexGenerator>>,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").field("supports_regex", &self.supports_regex()).finish()
    }
}

impl Generator {
    #[must_use]
    pub fn new(regex: Option<Arc<dyn RegexGenerator>>) -> Self {
        Self {
            regex,
        }
    }

    /// A generator whose `regex` kind always yields `REGEX_NOT_SUPPORTED(...)`.
    #[must_use]
    pub fn without_regex() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn supports_regex(&self) -> bool {
        self.regex.is_some()
    }

    /// Generate a value for the kind named `kind`, returning the
    /// `INVALID_PLACEHOLDER` sentinel when generation is not possible.
    #[must_use]
    pub fn generate(&self, kind: &str, params: &GeneratorParams) -> String {
        let Some(kind) = GeneratorKind::from_name(kind) else {
            return INVALID_PLACEHOLDER.to_string();
        };
        self.try_generate(kind, params).unwrap_or_else(|e| {
            tracing::debug!("Generation failed: {}", e);
            INVALID_PLACEHOLDER.to_string()
        })
    }

    /// Generate a value for `kind`.
    ///
    /// A missing regex capability is not an error: the
    /// `REGEX_NOT_SUPPORTED(<pattern>)` sentinel is returned as the value.
    ///
    /// # Errors
    ///
    /// - [`FakerError::InvalidPlaceholder`] for `custom` without a charset or
    ///   `regex` without a pattern
    /// - [`FakerError::RegexGenerationFailed`] when the regex capability
    ///   rejects the pattern
    pub fn try_generate(&self, kind: GeneratorKind, params: &GeneratorParams) -> Result<String> {
        match kind {
            GeneratorKind::Uuid => Ok(uuid::Uuid::new_v4().to_string()),
            GeneratorKind::Custom => {
                let charset: Vec<char> = params
                    .charset
                    .as_deref()
                    .map(|charset| charset.chars().collect())
                    .unwrap_or_default();
                if charset.is_empty() {
                    return Err(FakerError::InvalidPlaceholder {
                        kind: kind.name().to_string(),
                        reason: "a non-empty charset is required".to_string(),
                    });
                }
                Ok(random_string(&charset, params.length))
            }
            GeneratorKind::Regex => {
                let pattern =
                    params.regex_pattern.as_deref().filter(|p| !p.is_empty()).ok_or_else(|| {
                        FakerError::InvalidPlaceholder {
                            kind: kind.name().to_string(),
                            reason: "a pattern is required".to_string(),
                        }
                    })?;
                match &self.regex {
                    Some(regex) => regex.generate(pattern),
                    None => Ok(format!("{REGEX_NOT_SUPPORTED}({pattern})")),
                }
            }
            builtin => {
                let charset: Vec<char> = builtin.charset().unwrap_or_default().chars().collect();
                Ok(random_string(&charset, params.length))
            }
        }
    }
}

/// `length` characters drawn uniformly, with replacement, from `charset`.
///
/// `charset` must not be empty unless `length` is zero.
fn random_string(charset: &[char], length: usize) -> String {
    let mut rng = SmallRng::from_rng(&mut rand::rng());
    (0..length).map(|_| charset[rng.random_range(0..charset.len())]).collect()
}
