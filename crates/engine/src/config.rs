//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FASHIONISTA_DATA_DIR` - Directory slice files live in (default: `.fashionista`)
//! - `FASHIONISTA_CATALOG` - Path to a catalog JSON file (default: built-in catalog)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".fashionista";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store runtime configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory the persisted slice files are read from and written to
    pub data_dir: PathBuf,
    /// Catalog file overriding the built-in product set, if any
    pub catalog_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = require_non_empty(
            "FASHIONISTA_DATA_DIR",
            get_env_or_default("FASHIONISTA_DATA_DIR", DEFAULT_DATA_DIR),
        )?;
        let catalog_path = get_optional_env("FASHIONISTA_CATALOG")
            .map(|value| require_non_empty("FASHIONISTA_CATALOG", value))
            .transpose()?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            catalog_path: catalog_path.map(PathBuf::from),
        })
    }

    /// Configuration rooted at an explicit data directory.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            catalog_path: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reject values that are empty or whitespace; a blank path would scatter
/// slice files relative to whatever the working directory happens to be.
fn require_non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".fashionista"));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_with_data_dir() {
        let config = StoreConfig::with_data_dir("/tmp/shop");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shop"));
    }

    #[test]
    fn test_require_non_empty_accepts_value() {
        let value = require_non_empty("TEST_VAR", "data".to_string()).unwrap();
        assert_eq!(value, "data");
    }

    #[test]
    fn test_require_non_empty_rejects_blank() {
        let result = require_non_empty("TEST_VAR", "   ".to_string());
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
