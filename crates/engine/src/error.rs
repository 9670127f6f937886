//! Unified error handling for the store runtime.
//!
//! Each concern has its own `thiserror` enum; [`EngineError`] folds them
//! together so callers can use one `Result<T>` alias at the API surface.
//! Persistence failures during normal operation are handled inside the
//! writer (logged and counted) and never surface here.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::persist::StorageError;

/// Top-level error type for the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Slice storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Product catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `EngineError`.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::from(CatalogError::Parse("bad json".to_string()));
        assert_eq!(err.to_string(), "Catalog error: Parse error: bad json");

        let err = EngineError::from(StorageError::Io("disk full".to_string()));
        assert_eq!(err.to_string(), "Storage error: IO error: disk full");
    }
}
