//! Benchmark database adapters
//!
//! [`Database`] is the lifecycle contract the benchmark harness drives:
//!
//! ```text
//! init → register_schema → insert_one_batch* / <query>* → cleanup → close
//! ```
//!
//! Insert and query methods never fail outright: errors come back as a failed
//! [`Status`]. Query methods return `None` for shapes the backend has no
//! translation for, which the harness must not count as a failure.

mod error;
mod rest_api;

pub use error::{AdapterError, AdapterResult};
pub use rest_api::RestApi;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::schema::{Batch, DeviceSchema, Status};
use crate::workload::{
    AggRangeQuery, AggRangeValueQuery, AggValueQuery, GroupByQuery, LatestPointQuery,
    PreciseQuery, Query, RangeQuery, ValueRangeQuery,
};

/// Operations a benchmark worker performs against one backend
#[async_trait]
pub trait Database: Send + Sync {
    /// Prepare the adapter before the first operation
    async fn init(&self) -> AdapterResult<()>;

    /// Remove all benchmark data from the backend
    async fn cleanup(&self) -> AdapterResult<()>;

    /// Release adapter resources
    async fn close(&self) -> AdapterResult<()>;

    /// Create timeseries ahead of ingestion
    ///
    /// Returns how long registration took, or `None` when the backend creates
    /// schema implicitly and nothing was done.
    async fn register_schema(
        &self,
        schemas: &[Arc<DeviceSchema>],
    ) -> AdapterResult<Option<Duration>>;

    async fn insert_one_batch(&self, batch: &Batch) -> Status;

    async fn precise_query(&self, query: &PreciseQuery) -> Option<Status>;

    async fn range_query(&self, query: &RangeQuery) -> Option<Status>;

    async fn value_range_query(&self, query: &ValueRangeQuery) -> Option<Status>;

    async fn agg_range_query(&self, query: &AggRangeQuery) -> Option<Status>;

    async fn agg_value_query(&self, query: &AggValueQuery) -> Option<Status>;

    async fn agg_range_value_query(&self, query: &AggRangeValueQuery) -> Option<Status>;

    async fn group_by_query(&self, query: &GroupByQuery) -> Option<Status>;

    async fn latest_point_query(&self, query: &LatestPointQuery) -> Option<Status>;

    async fn range_query_order_by_desc(&self, query: &RangeQuery) -> Option<Status>;

    async fn value_range_query_order_by_desc(&self, query: &ValueRangeQuery) -> Option<Status>;

    /// Run any query through the matching shape-specific method
    async fn execute(&self, query: &Query) -> Option<Status> {
        match query {
            Query::Precise(q) => self.precise_query(q).await,
            Query::Range(q) => self.range_query(q).await,
            Query::ValueRange(q) => self.value_range_query(q).await,
            Query::AggRange(q) => self.agg_range_query(q).await,
            Query::AggValue(q) => self.agg_value_query(q).await,
            Query::AggRangeValue(q) => self.agg_range_value_query(q).await,
            Query::GroupBy(q) => self.group_by_query(q).await,
            Query::LatestPoint(q) => self.latest_point_query(q).await,
            Query::RangeOrderByDesc(q) => self.range_query_order_by_desc(q).await,
            Query::ValueRangeOrderByDesc(q) => self.value_range_query_order_by_desc(q).await,
        }
    }
}
