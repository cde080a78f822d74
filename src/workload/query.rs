//! Query descriptors
//!
//! One struct per benchmark query shape, plus the `Query` sum type the
//! translator and adapter dispatch on. All devices of a descriptor are assumed
//! to carry the same sensors; the first device's sensor list is the one that
//! ends up in the SELECT clause.

use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;

use super::error::WorkloadError;
use super::operation::Operation;
use crate::schema::DeviceSchema;

/// Devices a query targets, shared with the caller
pub type Devices = Vec<Arc<DeviceSchema>>;

/// Aggregation functions IoTDB accepts in SELECT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Extreme,
    MaxValue,
    MinValue,
    FirstValue,
    LastValue,
    MaxTime,
    MinTime,
}

impl AggregateFunction {
    /// Name as written in SQL
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Extreme => "extreme",
            Self::MaxValue => "max_value",
            Self::MinValue => "min_value",
            Self::FirstValue => "first_value",
            Self::LastValue => "last_value",
            Self::MaxTime => "max_time",
            Self::MinTime => "min_time",
        }
    }
}

impl FromStr for AggregateFunction {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "sum" => Ok(Self::Sum),
            "avg" | "average" => Ok(Self::Avg),
            "extreme" => Ok(Self::Extreme),
            "max_value" | "max" => Ok(Self::MaxValue),
            "min_value" | "min" => Ok(Self::MinValue),
            "first_value" | "first" => Ok(Self::FirstValue),
            "last_value" | "last" => Ok(Self::LastValue),
            "max_time" => Ok(Self::MaxTime),
            "min_time" => Ok(Self::MinTime),
            _ => Err(WorkloadError::UnknownAggregate(s.to_string())),
        }
    }
}

impl std::fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Q1: select the sensors at one exact timestamp
#[derive(Debug, Clone)]
pub struct PreciseQuery {
    pub devices: Devices,
    pub timestamp: i64,
}

/// Q2: select the sensors over an inclusive time range
#[derive(Debug, Clone)]
pub struct RangeQuery {
    pub devices: Devices,
    pub start: i64,
    pub end: i64,
}

/// Q3: range query with every sensor filtered above a threshold
#[derive(Debug, Clone)]
pub struct ValueRangeQuery {
    pub devices: Devices,
    pub start: i64,
    pub end: i64,
    pub value_threshold: f64,
}

/// Q4: aggregate over an inclusive time range
#[derive(Debug, Clone)]
pub struct AggRangeQuery {
    pub devices: Devices,
    pub agg_fun: AggregateFunction,
    pub start: i64,
    pub end: i64,
}

/// Q5: aggregate over values above a threshold
#[derive(Debug, Clone)]
pub struct AggValueQuery {
    pub devices: Devices,
    pub agg_fun: AggregateFunction,
    pub value_threshold: f64,
}

/// Q6: aggregate over a time range and a value threshold
#[derive(Debug, Clone)]
pub struct AggRangeValueQuery {
    pub devices: Devices,
    pub agg_fun: AggregateFunction,
    pub start: i64,
    pub end: i64,
    pub value_threshold: f64,
}

/// Q7: aggregate in fixed windows of `granularity` milliseconds
#[derive(Debug, Clone)]
pub struct GroupByQuery {
    pub devices: Devices,
    pub agg_fun: AggregateFunction,
    pub start: i64,
    pub end: i64,
    pub granularity: i64,
}

/// Q8: most recent point of every sensor
#[derive(Debug, Clone)]
pub struct LatestPointQuery {
    pub devices: Devices,
}

/// Every query the benchmark can issue
#[derive(Debug, Clone)]
pub enum Query {
    Precise(PreciseQuery),
    Range(RangeQuery),
    ValueRange(ValueRangeQuery),
    AggRange(AggRangeQuery),
    AggValue(AggValueQuery),
    AggRangeValue(AggRangeValueQuery),
    GroupBy(GroupByQuery),
    LatestPoint(LatestPointQuery),
    RangeOrderByDesc(RangeQuery),
    ValueRangeOrderByDesc(ValueRangeQuery),
}

impl Query {
    /// Benchmark operation this query is recorded under
    pub fn operation(&self) -> Operation {
        match self {
            Query::Precise(_) => Operation::PreciseQuery,
            Query::Range(_) => Operation::RangeQuery,
            Query::ValueRange(_) => Operation::ValueRangeQuery,
            Query::AggRange(_) => Operation::AggRangeQuery,
            Query::AggValue(_) => Operation::AggValueQuery,
            Query::AggRangeValue(_) => Operation::AggRangeValueQuery,
            Query::GroupBy(_) => Operation::GroupByQuery,
            Query::LatestPoint(_) => Operation::LatestPointQuery,
            Query::RangeOrderByDesc(_) => Operation::RangeQueryOrderByDesc,
            Query::ValueRangeOrderByDesc(_) => Operation::ValueRangeQueryOrderByDesc,
        }
    }

    /// Devices targeted by this query
    pub fn devices(&self) -> &[Arc<DeviceSchema>] {
        match self {
            Query::Precise(q) => &q.devices,
            Query::Range(q) | Query::RangeOrderByDesc(q) => &q.devices,
            Query::ValueRange(q) | Query::ValueRangeOrderByDesc(q) => &q.devices,
            Query::AggRange(q) => &q.devices,
            Query::AggValue(q) => &q.devices,
            Query::AggRangeValue(q) => &q.devices,
            Query::GroupBy(q) => &q.devices,
            Query::LatestPoint(q) => &q.devices,
        }
    }
}
