//! Unified error types for fuzzmenu.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Item source error: {0}")]
    Items(#[from] ItemsError),

    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Errors raised while loading menu items
#[derive(Debug, Error)]
pub enum ItemsError {
    #[error("Item file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid item file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error reading items: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for item loading
pub type ItemsResult<T> = std::result::Result<T, ItemsError>;
