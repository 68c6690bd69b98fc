//! Tag cache for sliceable placeholder values.
//!
//! A tagged placeholder such as `{{faker.alpha(length=12, tag=user)}}` stores
//! its value under `(alpha, "user")`. Later requests for the same key are served
//! from the stored value, truncated to the requested length, so a username and
//! a shorter display name taken from the same tag share a prefix.
//!
//! # Growth Policy
//!
//! An entry is only ever replaced by a longer one. A request longer than the
//! stored value discards it and stores a freshly generated value of the new
//! length; shorter or equal requests never regenerate. Entries are removed only
//! by [`TagCache::clear`], which the host calls when it unloads the engine.
//!
//! # Thread Safety
//!
//! `TagCache` itself is not synchronized. The engine keeps it behind a single
//! mutex and holds the lock across the whole check-generate-store sequence.

use std::collections::HashMap;

use crate::core::Result;
use crate::generator::GeneratorKind;

/// Key of a tag cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagCacheKey {
    /// Generator kind (sliceable kinds only)
    pub kind: GeneratorKind,
    /// User-chosen tag
    pub tag: String,
}

impl TagCacheKey {
    pub fn new(kind: GeneratorKind, tag: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
        }
    }
}

/// Counters describing cache use since creation or the last clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests served from an existing value
    pub hits: usize,
    /// Requests that generated a new value
    pub misses: usize,
    /// Number of stored values
    pub entries: usize,
}

impl CacheStats {
    /// Hit rate as a percentage
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Longest value generated so far for each `(kind, tag)`.
#[derive(Debug, Default)]
pub struct TagCache {
    values: HashMap<TagCacheKey, String>,
    hits: usize,
    misses: usize,
}

impl TagCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the first `length` characters of the value stored under `key`,
    /// generating and storing a new value first if there is none or it is
    /// shorter than `length`.
    ///
    /// `generate` is called with nothing borrowed from the cache and must
    /// return a value of exactly `length` characters. If it fails the existing
    /// entry is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `generate`.
    pub fn get_or_extend<F>(&mut self, key: TagCacheKey, length: usize, generate: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        let cached_len = self
            .values
            .get(&key)
            .map(|value| value.chars().count())
            .filter(|&len| len > 0);

        match cached_len {
            Some(len) if len >= length => {
                self.hits += 1;
                tracing::debug!(
                    "Tag '{}' ({}) served from cache: {} of {} chars",
                    key.tag,
                    key.kind,
                    length,
                    len
                );
            }
            previous => {
                let value = generate()?;
                self.misses += 1;
                match previous {
                    Some(len) => tracing::debug!(
                        "Tag '{}' ({}) extended from {} to {} chars",
                        key.tag,
                        key.kind,
                        len,
                        length
                    ),
                    None => tracing::debug!(
                        "Tag '{}' ({}) cached with {} chars",
                        key.tag,
                        key.kind,
                        length
                    ),
                }
                self.values.insert(key.clone(), value);
            }
        }

        Ok(self.values.get(&key).map(|value| truncate_chars(value, length)).unwrap_or_default())
    }

    /// Stored value for `key`, untruncated.
    #[cfg(test)]
    pub(crate) fn get(&self, key: &TagCacheKey) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove every entry and reset the counters.
    pub fn clear(&mut self) {
        self.values.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.values.len(),
        }
    }
}

/// First `length` characters of `value`.
fn truncate_chars(value: &str, length: usize) -> String {
    value.chars().take(length).collect()
}
