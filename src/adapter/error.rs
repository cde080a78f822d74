//! Adapter error types
//!
//! Keeps timeouts, refused connections, malformed bodies and server-side
//! rejections apart so they can be told apart in the operator log.

use thiserror::Error;

use crate::client::TransportError;
use crate::sql::TranslateError;

/// Errors that can occur while executing an adapter operation
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The round trip itself failed
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The query descriptor could not be turned into SQL
    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),

    /// A body could not be encoded or decoded
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success execution status
    #[error("Execution failed with code {code}: {message}")]
    Execution { code: i64, message: String },
}

/// Result type alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdapterError::Execution {
            code: 507,
            message: "database not exist".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Execution failed with code 507: database not exist"
        );

        let err: AdapterError = TranslateError::NoDevices.into();
        assert_eq!(err.to_string(), "Translation error: Query has no devices");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AdapterError = json_err.into();
        assert!(matches!(err, AdapterError::Json(_)));
    }
}
