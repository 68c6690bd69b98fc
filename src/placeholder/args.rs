//! Argument list parsing for placeholder macros.
//!
//! The text between the parentheses of `{{faker.custom(10, charset=abc)}}` is a
//! comma-separated list of `value` or `name=value` tokens. Positional tokens are
//! keyed by their zero-based index among the non-empty tokens, so positional
//! and named forms can be mixed freely.

use std::collections::HashMap;

/// Named and positional arguments of a single placeholder.
///
/// # Examples
///
/// ```rust
/// use reqfaker::placeholder::ResolvedArgs;
///
/// let args = ResolvedArgs::parse("10, charset=abc123!@#");
/// assert_eq!(args.get("0"), Some("10"));
/// assert_eq!(args.get("charset"), Some("abc123!@#"));
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArgs {
    values: HashMap<String, String>,
}

impl ResolvedArgs {
    /// Parse a raw argument list.
    ///
    /// Tokens are split on every comma and trimmed; empty tokens are dropped
    /// before positions are assigned. A token containing `=` is split on the
    /// first `=` into a trimmed name and value. There is no escaping, so
    /// commas inside a value always split it.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut values = HashMap::new();

        let tokens = raw.split(',').map(str::trim).filter(|token| !token.is_empty());
        for (index, token) in tokens.enumerate() {
            match token.split_once('=') {
                Some((name, value)) => {
                    values.insert(name.trim().to_string(), value.trim().to_string());
                }
                None => {
                    values.insert(index.to_string(), token.to_string());
                }
            }
        }

        Self {
            values,
        }
    }

    /// Look up an argument by name or positional index (`"0"`, `"1"`, ...).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a named argument, falling back to a positional one.
    #[must_use]
    pub fn named_or_positional(&self, name: &str, position: usize) -> Option<&str> {
        self.get(name).or_else(|| self.get(&position.to_string()))
    }

    /// Remove an argument and return its value.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn as_map(&self) -> &HashMap<String, String> {
        &self.values
    }
}
