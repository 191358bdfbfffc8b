use thiserror::Error;

/// Server lifecycle errors (bind/serve failures)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for server startup and shutdown paths
pub type Result<T> = std::result::Result<T, ServerError>;
