//! Configuration management for reqfaker.
//!
//! - [`FakerConfig`] - prefix, length limits, and regex settings loaded from
//!   `~/.reqfaker/config.toml` or an explicit path
//!
//! Command-line flags take precedence over the file: `--prefix` replaces the
//! configured prefix after loading.

mod global;

pub use global::FakerConfig;
