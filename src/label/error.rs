use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error when reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("Unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The same full name appears twice
    #[error("Duplicate label '{0}' in catalog")]
    DuplicateLabel(String),

    /// A label with an empty name
    #[error("Label names must not be empty")]
    EmptyName,
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, CatalogError>;
