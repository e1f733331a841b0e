//! Error types for the MockStack core.

/// Core error type for MockStack infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum MockStackError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for core operations.
pub type MockStackResult<T> = Result<T, MockStackError>;
