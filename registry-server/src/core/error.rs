use thiserror::Error;

/// Startup and serving failures
///
/// Request-level failures use [`AppError`](crate::AppError); this type only
/// covers what stops the server from starting or keeps it from serving.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Server-level Result alias
pub type Result<T> = std::result::Result<T, ServerError>;
