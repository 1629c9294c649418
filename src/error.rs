//! Unified error types for jira-points.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Points error: {0}")]
    Points(#[from] PointsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Size-to-points lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointsError {
    #[error("Label not found: {0}")]
    LabelNotFound(String),

    #[error("Points configuration not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid points mapping: {0}")]
    InvalidMapping(String),
}

impl PointsError {
    /// True for the unknown-label case
    pub fn is_label_not_found(&self) -> bool {
        matches!(self, Self::LabelNotFound(_))
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for points lookups
pub type PointsResult<T> = std::result::Result<T, PointsError>;
