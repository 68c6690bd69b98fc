//! Placeholder substitution engine.
//!
//! [`FakerEngine::transform`] is the single entry point a host calls for each
//! intercepted request. It finds every distinct placeholder, resolves each one
//! exactly once, and replaces every literal copy of its macro text with the
//! value.
//!
//! # Resolution
//!
//! 1. Parse the argument list and remove the `tag` argument.
//! 2. Derive length, charset, and pattern for the kind.
//! 3. Tagged placeholders of sliceable kinds go through the [`TagCache`]:
//!    the stored value is reused, truncated to the requested length, and only
//!    regenerated when a longer value is requested.
//! 4. Everything else is generated fresh.
//!
//! A placeholder that fails to resolve (unknown kind, bad length, rejected
//! regex) becomes `INVALID_PLACEHOLDER`; the others in the same text are
//! unaffected.
//!
//! # Lifecycle
//!
//! The tag cache lives as long as the engine. Hosts call [`FakerEngine::reset`]
//! from their unload hook to release it.
//!
//! # Examples
//!
//! ```rust
//! use reqfaker::engine::FakerEngine;
//!
//! let engine = FakerEngine::builder().prefix("p").build()?;
//!
//! let first = engine.transform("user={{p.alpha(tag=user)}}", "Proxy");
//! let again = engine.transform("short={{p.alpha(length=4, tag=user)}}", "Proxy");
//!
//! assert_eq!(&first[5..9], &again[6..]);
//! assert_eq!(engine.transform("plain text", "Proxy"), "plain text");
//! # Ok::<(), reqfaker::core::FakerError>(())
//! ```

mod builder;
mod sink;

pub use builder::FakerEngineBuilder;
pub use sink::{MemorySink, ObservabilitySink, ReplacementRecord, TracingSink};

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{CacheStats, TagCache, TagCacheKey};
use crate::config::FakerConfig;
use crate::constants::{INVALID_PLACEHOLDER, TAG_ARGUMENT};
use crate::core::{FakerError, Result};
use crate::generator::{Generator, GeneratorKind, RegexGenerator};
use crate::menu::{MenuEntry, menu_entries};
use crate::placeholder::{GeneratorParams, Placeholder, PlaceholderScanner, ResolvedArgs};

/// Finds and replaces placeholders, owning the tag cache.
///
/// The engine is `Send + Sync`; concurrent `transform` calls serialize on
/// the tag cache lock only while a tagged value is looked up or extended.
pub struct FakerEngine {
    scanner: PlaceholderScanner,
    generator: Generator,
    cache: Mutex<TagCache>,
    sink: Arc<dyn ObservabilitySink>,
    default_length: usize,
    max_length: usize,
}

impl fmt::Debug for FakerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakerEngine")
            .field("prefix", &self.scanner.prefix())
            .field("default_length", &self.default_length)
            .field("max_length", &self.max_length)
            .field("generator", &self.generator)
            .field("cache", &self.cache_stats())
            .finish_non_exhaustive()
    }
}

impl FakerEngine {
    /// Engine for `prefix` with the given regex capability and default
    /// settings otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::InvalidPrefix`] if the prefix is unusable.
    pub fn new(prefix: &str, regex: Option<Arc<dyn RegexGenerator>>) -> Result<Self> {
        let builder = FakerEngineBuilder::new().prefix(prefix);
        match regex {
            Some(regex) => builder.regex_generator(regex),
            None => builder.without_regex(),
        }
        .build()
    }

    #[must_use]
    pub fn builder() -> FakerEngineBuilder {
        FakerEngineBuilder::new()
    }

    /// Engine configured from `config`, logging through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: &FakerConfig) -> Result<Self> {
        config.validate()?;
        FakerEngineBuilder::from_config(config).build()
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        self.scanner.prefix()
    }

    #[must_use]
    pub fn supports_regex(&self) -> bool {
        self.generator.supports_regex()
    }

    /// Replace every placeholder in `text`.
    ///
    /// `label` identifies the caller (proxy tool, file name) in observability
    /// records. Text without placeholders is returned unchanged.
    #[must_use]
    pub fn transform(&self, text: &str, label: &str) -> String {
        let placeholders = self.scanner.scan(text);
        if placeholders.is_empty() {
            return text.to_string();
        }

        let mut result = text.to_string();
        for placeholder in &placeholders {
            let value = self.resolve(placeholder);
            result = result.replace(&placeholder.literal, &value);
            self.sink.replaced(label, &placeholder.literal, &value);
        }
        result
    }

    /// Like [`transform`](Self::transform), but `None` when nothing changed,
    /// so hosts can skip rewriting an untouched request.
    #[must_use]
    pub fn process_request(&self, text: &str, label: &str) -> Option<String> {
        let transformed = self.transform(text, label);
        (transformed != text).then_some(transformed)
    }

    /// Value for one placeholder, or `INVALID_PLACEHOLDER` if it cannot be
    /// resolved.
    #[must_use]
    pub fn resolve(&self, placeholder: &Placeholder) -> String {
        self.try_resolve(placeholder).unwrap_or_else(|e| {
            tracing::warn!("Could not resolve {}: {}", placeholder.literal, e);
            INVALID_PLACEHOLDER.to_string()
        })
    }

    /// Value for one placeholder.
    ///
    /// # Errors
    ///
    /// - [`FakerError::InvalidPlaceholder`] for unknown kinds, `custom` without
    ///   a charset, or `regex` without a pattern
    /// - [`FakerError::InvalidLength`] for a malformed or oversized length
    /// - [`FakerError::RegexGenerationFailed`] when the regex generator rejects
    ///   the pattern
    pub fn try_resolve(&self, placeholder: &Placeholder) -> Result<String> {
        let mut args = ResolvedArgs::parse(&placeholder.raw_args);
        let tag = args.take(TAG_ARGUMENT).filter(|tag| !tag.is_empty());

        let kind = GeneratorKind::from_name(&placeholder.kind).ok_or_else(|| {
            FakerError::InvalidPlaceholder {
                kind: placeholder.kind.clone(),
                reason: "unknown generator kind".to_string(),
            }
        })?;
        let params =
            GeneratorParams::derive(Some(kind), &args, self.default_length, self.max_length)?;

        match tag {
            Some(tag) if kind.is_sliceable() => {
                let key = TagCacheKey::new(kind, tag);
                self.lock_cache().get_or_extend(key, params.length, || {
                    self.generator.try_generate(kind, &params)
                })
            }
            _ => self.generator.try_generate(kind, &params),
        }
    }

    /// Clear the tag cache. Called when the host unloads the engine.
    pub fn reset(&self) {
        let mut cache = self.lock_cache();
        let stats = cache.stats();
        tracing::debug!(
            "Tag cache before reset: {} entries, {} hits, {} misses ({:.1}% hit rate)",
            stats.entries,
            stats.hits,
            stats.misses,
            stats.hit_rate()
        );
        let released = cache.len();
        cache.clear();
        tracing::info!("reqfaker unloaded and resources cleared ({} tagged value(s))", released);
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().stats()
    }

    /// Insertion menu entries for this engine's prefix and regex support.
    #[must_use]
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        menu_entries(self.prefix(), self.supports_regex())
    }

    fn lock_cache(&self) -> MutexGuard<'_, TagCache> {
        // A panic while holding the lock cannot leave a half-written entry
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
