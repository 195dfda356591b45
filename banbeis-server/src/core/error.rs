use thiserror::Error;

/// Errors surfaced while bootstrapping or running the server itself.
/// Request-level failures use [`crate::utils::AppError`] instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for server bootstrap paths
pub type Result<T> = std::result::Result<T, ServerError>;
