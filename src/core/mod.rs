//! Core types for reqfaker
//!
//! Error handling lives here:
//! - [`FakerError`] - enumerated failure modes for parsing, generation, and configuration
//! - [`ErrorContext`] - user-facing wrapper with suggestions and details
//! - [`user_friendly_error`] - converts any [`anyhow::Error`] for CLI display
//!
//! # Examples
//!
//! ```rust
//! use reqfaker::core::{FakerError, user_friendly_error};
//!
//! fn load() -> anyhow::Result<()> {
//!     Err(FakerError::ConfigError {
//!         message: "default_length must be a number".to_string(),
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = load() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;

pub use error::{ErrorContext, FakerError, user_friendly_error};

/// Result alias used by the engine and generators
pub type Result<T, E = FakerError> = std::result::Result<T, E>;
