//! Benchmark workload descriptions
//!
//! Backend-agnostic query descriptors handed to an adapter by the harness.

pub mod error;
pub mod operation;
pub mod query;
pub mod synthetic;

pub use error::WorkloadError;
pub use operation::Operation;
pub use query::{
    AggRangeQuery, AggRangeValueQuery, AggValueQuery, AggregateFunction, Devices, GroupByQuery,
    LatestPointQuery, PreciseQuery, Query, RangeQuery, ValueRangeQuery,
};
