//! SQL translation error types

use thiserror::Error;

/// Descriptors that cannot be turned into a statement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Query targets no device at all
    #[error("Query has no devices")]
    NoDevices,

    /// The device whose sensors form the SELECT list has none
    #[error("Device {device} has no sensors to select")]
    NoSensors { device: String },
}

/// Result type for translation
pub type TranslateResult<T> = Result<T, TranslateError>;
