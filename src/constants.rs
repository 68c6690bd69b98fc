//! Global constants used throughout the reqfaker codebase.
//!
//! Sentinel strings, character sets, and configuration defaults live here so
//! the placeholder grammar, the generators, and the configuration layer all
//! agree on the same values.

/// Placeholder prefix used when no configuration overrides it.
///
/// Macros look like `{{faker.uuid()}}` with this prefix.
pub const DEFAULT_PREFIX: &str = "faker";

/// Length used by sliceable generators when the macro does not specify one.
pub const DEFAULT_LENGTH: usize = 8;

/// Largest `length` a placeholder may request. Longer requests resolve to
/// [`INVALID_PLACEHOLDER`].
pub const MAX_LENGTH: usize = 1_048_576;

/// Upper bound on repetitions for unbounded regex quantifiers (`*`, `+`, `{n,}`).
pub const DEFAULT_REGEX_MAX_REPEAT: u32 = 100;

/// Substituted when a macro cannot be resolved (unknown kind, missing
/// charset or pattern, malformed arguments).
pub const INVALID_PLACEHOLDER: &str = "INVALID_PLACEHOLDER";

/// Prefix of the sentinel substituted for `regex` macros when no regex
/// generator is available. The full sentinel is `REGEX_NOT_SUPPORTED(<pattern>)`.
pub const REGEX_NOT_SUPPORTED: &str = "REGEX_NOT_SUPPORTED";

/// Argument name that selects the tag cache entry.
pub const TAG_ARGUMENT: &str = "tag";

/// Named argument for the length of sliceable kinds.
pub const LENGTH_ARGUMENT: &str = "length";

/// Named argument for the `custom` character set.
pub const CHARSET_ARGUMENT: &str = "charset";

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Label attached to observability records when the caller supplies none.
pub const DEFAULT_LABEL: &str = "reqfaker";
