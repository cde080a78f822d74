//! IoTDB adapter speaking the v2 REST API

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::error::{AdapterError, AdapterResult};
use super::Database;
use crate::client::{Endpoint, RestTransport, Transport};
use crate::config::DatabaseConfig;
use crate::schema::{Batch, DeviceSchema, Status};
use crate::sql::{self, TranslateResult, CLEANUP_SQL};
use crate::wire::{ExecutionStatus, InsertTabletPayload, QueryResponse, SqlRequest};
use crate::workload::{
    AggRangeQuery, AggRangeValueQuery, AggValueQuery, GroupByQuery, LatestPointQuery, Operation,
    PreciseQuery, RangeQuery, ValueRangeQuery,
};

/// Adapter that turns benchmark operations into REST calls
///
/// Holds no per-operation state; several workers may share one transport.
#[derive(Clone)]
pub struct RestApi {
    transport: Arc<dyn Transport>,
    is_aligned: bool,
}

impl RestApi {
    /// Create an adapter with a reqwest transport for the configured server
    pub fn new(config: &DatabaseConfig, is_aligned: bool) -> AdapterResult<Self> {
        let transport = RestTransport::new(config)?;
        tracing::debug!("IoTDB REST adapter targeting {}", transport.base_url());
        Ok(Self::with_transport(Arc::new(transport), is_aligned))
    }

    /// Create an adapter over an existing transport
    pub fn with_transport(transport: Arc<dyn Transport>, is_aligned: bool) -> Self {
        Self {
            transport,
            is_aligned,
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.is_aligned
    }

    /// POST an insert or non-query body and check the execution status
    async fn execute_update(&self, endpoint: Endpoint, body: String) -> AdapterResult<()> {
        let response = self.transport.post(endpoint, body).await?;
        match ExecutionStatus::decode(&response) {
            Some(status) if !status.is_success() => Err(AdapterError::Execution {
                code: status.code,
                message: status.message.unwrap_or_default(),
            }),
            _ => Ok(()),
        }
    }

    async fn execute_query(&self, sql: &str) -> AdapterResult<usize> {
        let body = serde_json::to_string(&SqlRequest::new(sql))?;
        let response = self.transport.post(Endpoint::Query, body).await?;
        match QueryResponse::decode(&response) {
            Ok(result) => Ok(result.row_count()),
            // SQL errors come back as a status envelope instead of a result set
            Err(e) => match ExecutionStatus::decode(&response) {
                Some(status) => Err(AdapterError::Execution {
                    code: status.code,
                    message: status.message.unwrap_or_default(),
                }),
                None => Err(e.into()),
            },
        }
    }

    /// Run a translated query and fold every failure into the status
    async fn query_status(&self, operation: Operation, sql: TranslateResult<String>) -> Status {
        let result = match sql {
            Ok(sql) => {
                tracing::debug!(%operation, %sql, "Executing query");
                self.execute_query(&sql).await
            }
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(rows) => Status::with_count(rows),
            Err(e) => failed(operation, e),
        }
    }
}

fn failed(operation: Operation, err: AdapterError) -> Status {
    tracing::warn!(%operation, error = %err, "IoTDB REST operation failed");
    Status::failed(err.to_string())
}

#[async_trait]
impl Database for RestApi {
    async fn init(&self) -> AdapterResult<()> {
        Ok(())
    }

    async fn cleanup(&self) -> AdapterResult<()> {
        let body = serde_json::to_string(&SqlRequest::new(CLEANUP_SQL))?;
        match self.execute_update(Endpoint::NonQuery, body).await {
            Ok(()) => {
                tracing::info!("Deleted all databases under root");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cleanup failed");
                Err(e)
            }
        }
    }

    async fn close(&self) -> AdapterResult<()> {
        Ok(())
    }

    async fn register_schema(
        &self,
        schemas: &[Arc<DeviceSchema>],
    ) -> AdapterResult<Option<Duration>> {
        tracing::debug!(
            devices = schemas.len(),
            "Schema is created on first insert, skipping registration"
        );
        Ok(None)
    }

    async fn insert_one_batch(&self, batch: &Batch) -> Status {
        let payload = InsertTabletPayload::encode(batch, self.is_aligned);
        let result = match serde_json::to_string(&payload) {
            Ok(body) => self.execute_update(Endpoint::InsertTablet, body).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(()) => Status::ok(),
            Err(e) => failed(Operation::Ingestion, e),
        }
    }

    async fn precise_query(&self, query: &PreciseQuery) -> Option<Status> {
        Some(
            self.query_status(Operation::PreciseQuery, sql::precise_query(query))
                .await,
        )
    }

    async fn range_query(&self, query: &RangeQuery) -> Option<Status> {
        Some(
            self.query_status(Operation::RangeQuery, sql::range_query(query))
                .await,
        )
    }

    async fn value_range_query(&self, query: &ValueRangeQuery) -> Option<Status> {
        Some(
            self.query_status(Operation::ValueRangeQuery, sql::value_range_query(query))
                .await,
        )
    }

    async fn agg_range_query(&self, query: &AggRangeQuery) -> Option<Status> {
        Some(
            self.query_status(Operation::AggRangeQuery, sql::agg_range_query(query))
                .await,
        )
    }

    async fn agg_value_query(&self, query: &AggValueQuery) -> Option<Status> {
        Some(
            self.query_status(Operation::AggValueQuery, sql::agg_value_query(query))
                .await,
        )
    }

    async fn agg_range_value_query(&self, _query: &AggRangeValueQuery) -> Option<Status> {
        None
    }

    async fn group_by_query(&self, query: &GroupByQuery) -> Option<Status> {
        Some(
            self.query_status(Operation::GroupByQuery, sql::group_by_query(query))
                .await,
        )
    }

    async fn latest_point_query(&self, query: &LatestPointQuery) -> Option<Status> {
        Some(
            self.query_status(Operation::LatestPointQuery, sql::latest_point_query(query))
                .await,
        )
    }

    async fn range_query_order_by_desc(&self, _query: &RangeQuery) -> Option<Status> {
        None
    }

    async fn value_range_query_order_by_desc(&self, query: &ValueRangeQuery) -> Option<Status> {
        Some(
            self.query_status(
                Operation::ValueRangeQueryOrderByDesc,
                sql::value_range_query_order_by_desc(query),
            )
            .await,
        )
    }
}
