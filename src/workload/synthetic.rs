//! Deterministic synthetic workload used by the CLI smoke run and benchmarks

use std::sync::Arc;

use super::operation::Operation;
use super::query::{
    AggRangeQuery, AggRangeValueQuery, AggValueQuery, AggregateFunction, Devices, GroupByQuery,
    LatestPointQuery, PreciseQuery, Query, RangeQuery, ValueRangeQuery,
};
use crate::schema::{Batch, DeviceSchema, Record, SchemaResult, Sensor, SensorType, Value};

/// Parameters shared by the generated queries
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub start: i64,
    pub end: i64,
    pub value_threshold: f64,
    pub granularity: i64,
    pub agg_fun: AggregateFunction,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            start: 0,
            end: 1_000,
            value_threshold: 0.0,
            granularity: 100,
            agg_fun: AggregateFunction::Count,
        }
    }
}

/// `devices` schemas named `d_0..` in `group`, each with sensors `s_0..`
pub fn device_schemas(
    group: &str,
    devices: usize,
    sensors: usize,
    sensor_type: SensorType,
) -> Devices {
    (0..devices)
        .map(|d| {
            Arc::new(
                DeviceSchema::new(group, format!("d_{}", d))
                    .sensors((0..sensors).map(|s| Sensor::new(format!("s_{}", s), sensor_type))),
            )
        })
        .collect()
}

/// `rows` records spaced `interval` ms apart starting at `start`
pub fn batch(
    schema: Arc<DeviceSchema>,
    start: i64,
    interval: i64,
    rows: usize,
) -> SchemaResult<Batch> {
    let records = (0..rows)
        .map(|i| {
            let values = schema
                .sensors
                .iter()
                .enumerate()
                .map(|(j, sensor)| value_for(sensor.sensor_type, i, j))
                .collect();
            Record::new(start + i as i64 * interval, values)
        })
        .collect();
    Batch::new(schema, records)
}

fn value_for(sensor_type: SensorType, row: usize, column: usize) -> Value {
    let n = row + column;
    match sensor_type {
        SensorType::Boolean => Value::Boolean(n % 2 == 0),
        SensorType::Int32 => Value::Int32(n as i32),
        SensorType::Int64 => Value::Int64(n as i64),
        SensorType::Float => Value::Float(n as f32 * 0.5),
        SensorType::Double => Value::Double(n as f64 * 0.5),
        SensorType::Text => Value::Text(format!("v{}", n)),
    }
}

/// Build the descriptor for a query operation, `None` for ingestion
pub fn query(operation: Operation, devices: Devices, params: &QueryParams) -> Option<Query> {
    let p = params;
    let query = match operation {
        Operation::Ingestion => return None,
        Operation::PreciseQuery => Query::Precise(PreciseQuery {
            devices,
            timestamp: p.start,
        }),
        Operation::RangeQuery => Query::Range(RangeQuery {
            devices,
            start: p.start,
            end: p.end,
        }),
        Operation::ValueRangeQuery => Query::ValueRange(ValueRangeQuery {
            devices,
            start: p.start,
            end: p.end,
            value_threshold: p.value_threshold,
        }),
        Operation::AggRangeQuery => Query::AggRange(AggRangeQuery {
            devices,
            agg_fun: p.agg_fun,
            start: p.start,
            end: p.end,
        }),
        Operation::AggValueQuery => Query::AggValue(AggValueQuery {
            devices,
            agg_fun: p.agg_fun,
            value_threshold: p.value_threshold,
        }),
        Operation::AggRangeValueQuery => Query::AggRangeValue(AggRangeValueQuery {
            devices,
            agg_fun: p.agg_fun,
            start: p.start,
            end: p.end,
            value_threshold: p.value_threshold,
        }),
        Operation::GroupByQuery => Query::GroupBy(GroupByQuery {
            devices,
            agg_fun: p.agg_fun,
            start: p.start,
            end: p.end,
            granularity: p.granularity,
        }),
        Operation::LatestPointQuery => Query::LatestPoint(LatestPointQuery { devices }),
        Operation::RangeQueryOrderByDesc => Query::RangeOrderByDesc(RangeQuery {
            devices,
            start: p.start,
            end: p.end,
        }),
        Operation::ValueRangeQueryOrderByDesc => Query::ValueRangeOrderByDesc(ValueRangeQuery {
            devices,
            start: p.start,
            end: p.end,
            value_threshold: p.value_threshold,
        }),
    };
    Some(query)
}
