use thiserror::Error;

/// Errors that can occur during store operations.
///
/// The split between connection and service failures exists for operator
/// logs only; the HTTP surface reports every store failure identically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Put failed: {0}")]
    PutFailed(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
