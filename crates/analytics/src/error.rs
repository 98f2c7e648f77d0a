//! Analytics error types

use thiserror::Error;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Malformed or inverted date range
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Unknown range token
    #[error("unknown range token: {0}")]
    UnknownRange(String),

    /// Unknown comparison token
    #[error("unknown compare token: {0}")]
    UnknownCompare(String),
}

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
