//! Derivation of generator parameters from parsed arguments.

use super::ResolvedArgs;
use crate::constants::{CHARSET_ARGUMENT, LENGTH_ARGUMENT};
use crate::core::{FakerError, Result};
use crate::generator::GeneratorKind;

/// Parameters handed to the generator for one placeholder.
///
/// Only the fields relevant to the kind are filled in: `length` is taken from
/// the arguments for sliceable kinds only, `charset` for `custom`, and
/// `regex_pattern` for `regex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorParams {
    pub length: usize,
    pub charset: Option<String>,
    pub regex_pattern: Option<String>,
}

impl GeneratorParams {
    /// Parameters with only a length set.
    #[must_use]
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            charset: None,
            regex_pattern: None,
        }
    }

    /// Derive parameters for `kind` from `args`.
    ///
    /// `length` comes from `length=` or positional argument 0, `charset` from
    /// `charset=` or positional argument 1, and `regex_pattern` from positional
    /// argument 0. Unknown kinds get the default length and nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::InvalidLength`] when a sliceable kind is given a
    /// length that is not a non-negative integer or exceeds `max_length`.
    pub fn derive(
        kind: Option<GeneratorKind>,
        args: &ResolvedArgs,
        default_length: usize,
        max_length: usize,
    ) -> Result<Self> {
        let mut params = Self::with_length(default_length);

        match kind {
            Some(kind) if kind.is_sliceable() => {
                if let Some(raw) = args.named_or_positional(LENGTH_ARGUMENT, 0) {
                    params.length = parse_length(raw, max_length)?;
                }
                if kind == GeneratorKind::Custom {
                    params.charset =
                        args.named_or_positional(CHARSET_ARGUMENT, 1).map(str::to_string);
                }
            }
            Some(GeneratorKind::Regex) => {
                params.regex_pattern = args.get("0").map(str::to_string);
            }
            _ => {}
        }

        Ok(params)
    }
}

fn parse_length(raw: &str, max_length: usize) -> Result<usize> {
    let length = raw.parse::<usize>().map_err(|_| FakerError::InvalidLength {
        value: raw.to_string(),
        reason: "expected a non-negative integer".to_string(),
    })?;
    if length > max_length {
        return Err(FakerError::InvalidLength {
            value: raw.to_string(),
            reason: format!("exceeds the maximum of {max_length}"),
        });
    }
    Ok(length)
}
