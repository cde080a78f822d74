//! Insert payload for `/rest/v2/insertTablet`
//!
//! Records arrive row-major (one `Record` per timestamp); the tablet endpoint
//! wants them column-major (one value list per measurement).

use serde::Serialize;

use crate::schema::{Batch, Value};

/// Body of an insert tablet request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertTabletPayload {
    pub device: String,
    pub is_aligned: bool,
    pub measurements: Vec<String>,
    pub data_types: Vec<String>,
    pub timestamps: Vec<i64>,
    /// `values[j][i]` is measurement `j` at `timestamps[i]`
    pub values: Vec<Vec<Value>>,
}

impl InsertTabletPayload {
    /// Encode a batch, transposing its rows into measurement columns
    ///
    /// A batch without records still yields one (empty) column per sensor.
    pub fn encode(batch: &Batch, is_aligned: bool) -> Self {
        let schema = batch.schema();
        let records = batch.records();

        let (measurements, data_types): (Vec<String>, Vec<String>) = schema
            .sensors
            .iter()
            .map(|s| (s.name.clone(), s.sensor_type.name().to_string()))
            .unzip();

        let mut values: Vec<Vec<Value>> = schema
            .sensors
            .iter()
            .map(|_| Vec::with_capacity(records.len()))
            .collect();
        let mut timestamps = Vec::with_capacity(records.len());

        for record in records {
            timestamps.push(record.timestamp);
            for (column, value) in values.iter_mut().zip(&record.values) {
                column.push(value.clone());
            }
        }

        Self {
            device: schema.path(),
            is_aligned,
            measurements,
            data_types,
            timestamps,
            values,
        }
    }

    /// Number of rows carried by the payload
    pub fn row_count(&self) -> usize {
        self.timestamps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DeviceSchema, Record, SensorType};
    use std::sync::Arc;

    fn schema() -> Arc<DeviceSchema> {
        Arc::new(
            DeviceSchema::new("g1", "d1")
                .tag("region", "east")
                .sensor("s0", SensorType::Int32)
                .sensor("s1", SensorType::Double)
                .sensor("s2", SensorType::Text),
        )
    }

    fn batch(rows: usize) -> Batch {
        let records = (0..rows)
            .map(|i| {
                Record::new(
                    1000 + i as i64,
                    vec![
                        Value::Int32(i as i32),
                        Value::Double(i as f64 / 2.0),
                        Value::Text(format!("v{}", i)),
                    ],
                )
            })
            .collect();
        Batch::new(schema(), records).unwrap()
    }

    #[test]
    fn test_encode_header_fields() {
        let payload = InsertTabletPayload::encode(&batch(1), true);

        assert_eq!(payload.device, "root.g1.east.d1");
        assert!(payload.is_aligned);
        assert_eq!(payload.measurements, vec!["s0", "s1", "s2"]);
        assert_eq!(payload.data_types, vec!["INT32", "DOUBLE", "TEXT"]);
    }

    #[test]
    fn test_encode_transposes_rows() {
        let source = batch(4);
        let payload = InsertTabletPayload::encode(&source, false);

        assert!(!payload.is_aligned);
        assert_eq!(payload.timestamps, vec![1000, 1001, 1002, 1003]);
        assert_eq!(payload.values.len(), 3);
        for column in &payload.values {
            assert_eq!(column.len(), 4);
        }
        for (i, record) in source.records().iter().enumerate() {
            for (j, value) in record.values.iter().enumerate() {
                assert_eq!(&payload.values[j][i], value);
            }
        }
    }

    #[test]
    fn test_encode_empty_batch() {
        let payload = InsertTabletPayload::encode(&batch(0), true);

        assert_eq!(payload.row_count(), 0);
        assert_eq!(payload.values, vec![Vec::<Value>::new(); 3]);
        assert_eq!(payload.measurements.len(), 3);
    }

    #[test]
    fn test_encode_json_shape() {
        let payload = InsertTabletPayload::encode(&batch(2), true);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "device": "root.g1.east.d1",
                "is_aligned": true,
                "measurements": ["s0", "s1", "s2"],
                "data_types": ["INT32", "DOUBLE", "TEXT"],
                "timestamps": [1000, 1001],
                "values": [[0, 1], [0.0, 0.5], ["v0", "v1"]],
            })
        );
    }

    #[test]
    fn test_encode_column_types_come_from_schema() {
        let schema = Arc::new(
            DeviceSchema::new("g1", "d1")
                .sensor("s0", SensorType::Int64)
                .sensor("s1", SensorType::Double),
        );
        let batch = Batch::new(
            schema,
            vec![Record::new(1, vec![Value::Int64(5), Value::Double(0.1)])],
        )
        .unwrap();
        let payload = InsertTabletPayload::encode(&batch, true);
        let json = serde_json::to_value(&payload).unwrap();

        // Small integers and floats are bare scalars; the declared type rides
        // alongside in data_types.
        assert_eq!(json["data_types"], serde_json::json!(["INT64", "DOUBLE"]));
        assert_eq!(json["values"], serde_json::json!([[5], [0.1]]));
        assert_eq!(payload.values, vec![vec![Value::Int64(5)], vec![Value::Double(0.1)]]);
    }
}
