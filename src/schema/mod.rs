//! Benchmark data model
//!
//! - **types**: device schemas, sensors, typed values, records, batches, status
//! - **path**: hierarchical device and series path composition
//! - **error**: schema validation errors

pub mod error;
pub mod path;
pub mod types;

pub use error::{SchemaError, SchemaResult};
pub use path::{device_path, series_path, ROOT_SERIES_NAME};
pub use types::{Batch, DeviceSchema, Record, Sensor, SensorType, Status, Value};
