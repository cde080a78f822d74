//! Transport error types

use thiserror::Error;

/// Errors that can occur while talking to the REST service
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IoTDB REST service unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

impl TransportError {
    /// Split a reqwest failure into timeout / connect / other
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Unavailable(err.to_string())
        } else {
            TransportError::Request(err)
        }
    }
}
