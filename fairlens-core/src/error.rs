//! Error types for the fairlens crates.

use thiserror::Error;

/// Top-level error type for harness operations.
///
/// Configuration and validation errors are raised before any model or
/// retriever call is made and are always propagated to the caller as-is.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Type validation error: {0}")]
    TypeValidation(String),

    #[error("Aggregation error: {0}")]
    Aggregation(String),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl HarnessError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn type_validation(msg: impl Into<String>) -> Self {
        Self::TypeValidation(msg.into())
    }

    pub fn aggregation(msg: impl Into<String>) -> Self {
        Self::Aggregation(msg.into())
    }

    pub fn retrieval(msg: impl Into<String>) -> Self {
        Self::Retrieval(msg.into())
    }

    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Whether this error belongs to the fail-fast setup class.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_) | Self::TypeValidation(_))
    }
}
