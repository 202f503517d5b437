use thiserror::Error;

/// Custom error types for backdrop
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Invalid source URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("Unexpected content type '{0}' (expected video/*)")]
    ContentType(String),

    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Result type for backdrop operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
