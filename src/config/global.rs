//! User configuration for reqfaker.
//!
//! The configuration file is optional; a missing file means every setting takes
//! its default.
//!
//! # Location
//!
//! - **Unix/macOS**: `~/.reqfaker/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\reqfaker\config.toml`
//! - **Override**: `--config <path>` or the `REQFAKER_CONFIG` environment variable
//!
//! # File Format
//!
//! ```toml
//! # Placeholders look like {{faker.uuid()}}
//! prefix = "faker"
//!
//! # Length of alpha/lower/upper/numeric/alphanumeric/custom values when the
//! # placeholder does not give one
//! default_length = 8
//!
//! # Set to false to answer regex placeholders with REGEX_NOT_SUPPORTED(...)
//! regex_enabled = true
//!
//! # Upper bound for *, + and {n,} in regex placeholders
//! regex_max_repeat = 100
//!
//! # Largest length a placeholder may request
//! max_length = 1048576
//! ```

use crate::constants::{DEFAULT_LENGTH, DEFAULT_PREFIX, DEFAULT_REGEX_MAX_REPEAT, MAX_LENGTH};
use crate::core::FakerError;
use crate::placeholder::is_valid_prefix;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

const fn default_length() -> usize {
    DEFAULT_LENGTH
}

const fn default_max_length() -> usize {
    MAX_LENGTH
}

const fn default_regex_enabled() -> bool {
    true
}

const fn default_regex_max_repeat() -> u32 {
    DEFAULT_REGEX_MAX_REPEAT
}

/// Settings for the placeholder engine.
///
/// # Examples
///
/// ```rust
/// use reqfaker::config::FakerConfig;
///
/// let config: FakerConfig = toml::from_str("prefix = \"burp_faker\"").unwrap();
/// assert_eq!(config.prefix, "burp_faker");
/// assert_eq!(config.default_length, 8);
/// assert!(config.regex_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FakerConfig {
    /// Namespace between `{{` and the generator kind.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Length used by sliceable kinds when the placeholder gives none.
    #[serde(default = "default_length")]
    pub default_length: usize,

    /// Placeholders asking for more characters resolve to `INVALID_PLACEHOLDER`.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Whether `regex` placeholders are generated at all.
    #[serde(default = "default_regex_enabled")]
    pub regex_enabled: bool,

    /// Cap for unbounded regex repetition.
    #[serde(default = "default_regex_max_repeat")]
    pub regex_max_repeat: u32,
}

impl Default for FakerConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            default_length: default_length(),
            max_length: default_max_length(),
            regex_enabled: default_regex_enabled(),
            regex_max_repeat: default_regex_max_repeat(),
        }
    }
}

impl FakerConfig {
    /// Load from `path` if given, otherwise from the default location. A
    /// missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as pretty TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot be
    /// written.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Platform-specific default config path.
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or local data) directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("reqfaker")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".reqfaker")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// - [`FakerError::InvalidPrefix`] if the prefix is empty or contains
    ///   characters other than ASCII letters, digits, `_` and `-`
    /// - [`FakerError::ConfigError`] if `regex_max_repeat` or `max_length` is
    ///   zero, or `default_length` exceeds `max_length`
    pub fn validate(&self) -> Result<(), FakerError> {
        if !is_valid_prefix(&self.prefix) {
            return Err(FakerError::InvalidPrefix {
                prefix: self.prefix.clone(),
            });
        }
        if self.regex_max_repeat == 0 {
            return Err(FakerError::ConfigError {
                message: "regex_max_repeat must be at least 1".to_string(),
            });
        }
        if self.max_length == 0 {
            return Err(FakerError::ConfigError {
                message: "max_length must be at least 1".to_string(),
            });
        }
        if self.default_length > self.max_length {
            return Err(FakerError::ConfigError {
                message: format!(
                    "default_length {} exceeds max_length {}",
                    self.default_length, self.max_length
                ),
            });
        }
        Ok(())
    }
}
