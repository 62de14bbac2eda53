//! Error types shared across the catalog workspace

use thiserror::Error;

/// Result type alias for common catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading shared configuration and reference data
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid reference data: {0}")]
    ReferenceData(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
