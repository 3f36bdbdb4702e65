use std::io;
use thiserror::Error;

/// Custom error type for the VHC plugin
#[derive(Error, Debug)]
pub enum VhcError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session error: {0}")]
    Session(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the VHC plugin
pub type Result<T> = std::result::Result<T, VhcError>;

impl VhcError {
    /// Create a session error
    pub fn session<S: Into<String>>(msg: S) -> Self {
        VhcError::Session(msg.into())
    }

    /// Create an API error
    pub fn api<S: Into<String>>(msg: S) -> Self {
        VhcError::Api(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VhcError::InvalidArgument(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VhcError::Other(msg.into())
    }
}
