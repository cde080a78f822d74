//! Schema error types

use thiserror::Error;

/// Errors raised while assembling schema-level objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A record does not carry exactly one value per sensor
    #[error("Record {index} has {actual} values, expected {expected}")]
    RecordWidth {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchemaError::RecordWidth {
            index: 3,
            expected: 2,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Record 3 has 5 values, expected 2");
    }
}
