//! Core data types shared by the encoder, translator and adapter
//!
//! - `DeviceSchema`: a device and the sensors it carries
//! - `Sensor` / `SensorType`: a measurement and its declared IoTDB type
//! - `Record` / `Batch`: time-stamped rows destined for one device
//! - `Status`: the uniform outcome of every adapter operation

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::{SchemaError, SchemaResult};

/// Scalar data types understood by IoTDB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorType {
    Boolean,
    Int32,
    Int64,
    Float,
    Double,
    Text,
}

impl SensorType {
    /// Name used on the wire (`data_types` in the insert payload)
    pub fn name(&self) -> &'static str {
        match self {
            SensorType::Boolean => "BOOLEAN",
            SensorType::Int32 => "INT32",
            SensorType::Int64 => "INT64",
            SensorType::Float => "FLOAT",
            SensorType::Double => "DOUBLE",
            SensorType::Text => "TEXT",
        }
    }

    /// Get all types for iteration
    pub fn all() -> &'static [SensorType] {
        &[
            SensorType::Boolean,
            SensorType::Int32,
            SensorType::Int64,
            SensorType::Float,
            SensorType::Double,
            SensorType::Text,
        ]
    }
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named measurement on a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    pub name: String,
    pub sensor_type: SensorType,
}

impl Sensor {
    pub fn new(name: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            name: name.into(),
            sensor_type,
        }
    }
}

/// Schema of a single device
///
/// Tags are kept in a key-sorted map so the device path is the same no matter
/// in which order tags were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSchema {
    pub group: String,
    pub tags: BTreeMap<String, String>,
    pub device: String,
    pub sensors: Vec<Sensor>,
}

impl DeviceSchema {
    /// Create a schema with no tags and no sensors
    pub fn new(group: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            tags: BTreeMap::new(),
            device: device.into(),
            sensors: Vec::new(),
        }
    }

    /// Builder method: add a tag
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Builder method: append a sensor
    pub fn sensor(mut self, name: impl Into<String>, sensor_type: SensorType) -> Self {
        self.sensors.push(Sensor::new(name, sensor_type));
        self
    }

    /// Builder method: append several sensors
    pub fn sensors(mut self, sensors: impl IntoIterator<Item = Sensor>) -> Self {
        self.sensors.extend(sensors);
        self
    }

    /// Fully-qualified path of this device (`root.<group>.<tags>.<device>`)
    pub fn path(&self) -> String {
        super::path::device_path(self)
    }
}

/// A dynamically typed sensor reading
///
/// Serialises as the bare JSON scalar, the REST insert endpoint infers the
/// column type from `data_types`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    Text(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// One row of readings, positionally aligned with the batch's sensors
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Timestamp in milliseconds
    pub timestamp: i64,
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(timestamp: i64, values: Vec<Value>) -> Self {
        Self { timestamp, values }
    }
}

/// Records for a single device submitted in one insert call
#[derive(Debug, Clone)]
pub struct Batch {
    schema: Arc<DeviceSchema>,
    records: Vec<Record>,
}

impl Batch {
    /// Create a batch, checking every record has one value per sensor
    pub fn new(schema: Arc<DeviceSchema>, records: Vec<Record>) -> SchemaResult<Self> {
        let expected = schema.sensors.len();
        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.values.len() != expected)
        {
            return Err(SchemaError::RecordWidth {
                index,
                expected,
                actual: record.values.len(),
            });
        }

        Ok(Self { schema, records })
    }

    pub fn schema(&self) -> &DeviceSchema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of individual points (rows x sensors)
    pub fn point_count(&self) -> usize {
        self.records.len() * self.schema.sensors.len()
    }
}

/// Outcome of one adapter operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    ok: bool,
    point_count: Option<usize>,
    error: Option<String>,
}

impl Status {
    /// Successful operation with nothing to count
    pub fn ok() -> Self {
        Self {
            ok: true,
            point_count: None,
            error: None,
        }
    }

    /// Successful query that returned `count` rows
    pub fn with_count(count: usize) -> Self {
        Self {
            ok: true,
            point_count: Some(count),
            error: None,
        }
    }

    /// Failed operation
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            point_count: None,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn point_count(&self) -> Option<usize> {
        self.point_count
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.ok, self.point_count, self.error.as_deref()) {
            (true, Some(n), _) => write!(f, "ok ({} rows)", n),
            (true, None, _) => write!(f, "ok"),
            (false, _, Some(e)) => write!(f, "failed: {}", e),
            (false, _, None) => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Arc<DeviceSchema> {
        Arc::new(
            DeviceSchema::new("g1", "d1")
                .sensor("s0", SensorType::Int64)
                .sensor("s1", SensorType::Double),
        )
    }

    #[test]
    fn test_sensor_type_names() {
        let names: Vec<&str> = SensorType::all().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec!["BOOLEAN", "INT32", "INT64", "FLOAT", "DOUBLE", "TEXT"]
        );
        assert_eq!(SensorType::Int32.to_string(), "INT32");
    }

    #[test]
    fn test_value_serializes_as_bare_scalar() {
        let values = vec![
            Value::from(true),
            Value::from(7i32),
            Value::from(1.5f64),
            Value::from("on"),
        ];
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"[true,7,1.5,"on"]"#
        );
    }

    #[test]
    fn test_batch_accepts_matching_records() {
        let batch = Batch::new(
            schema(),
            vec![
                Record::new(1, vec![1i64.into(), 0.5f64.into()]),
                Record::new(2, vec![2i64.into(), 1.5f64.into()]),
            ],
        )
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.point_count(), 4);
    }

    #[test]
    fn test_batch_rejects_short_record() {
        let err = Batch::new(
            schema(),
            vec![
                Record::new(1, vec![1i64.into(), 0.5f64.into()]),
                Record::new(2, vec![2i64.into()]),
            ],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SchemaError::RecordWidth {
                index: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let batch = Batch::new(schema(), Vec::new()).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.point_count(), 0);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::ok().to_string(), "ok");
        assert_eq!(Status::with_count(3).to_string(), "ok (3 rows)");
        assert_eq!(Status::failed("boom").to_string(), "failed: boom");
        assert!(!Status::failed("boom").is_ok());
        assert_eq!(Status::failed("boom").point_count(), None);
    }
}
