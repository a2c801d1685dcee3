/// Store-specific errors
use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Store error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// Connecting to the deployment failed
    #[error("store connection error: {0}")]
    Connection(String),

    /// A single store call exceeded its time budget
    #[error("store operation `{op}` timed out after {timeout_secs}s")]
    Timeout {
        op: &'static str,
        timeout_secs: u64,
    },

    /// Driver error from the MongoDB client
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}
