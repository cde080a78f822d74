//! # iotdb-rest-bench
//!
//! Benchmark database adapter for Apache IoTDB's JSON-over-HTTP REST API.
//! Translates backend-agnostic workload descriptions (batched inserts and a
//! fixed catalog of query shapes) into `insertTablet` payloads and SQL text.
//!
//! ## Modules
//!
//! - [`schema`]: Device schemas, typed records, batches and device paths
//! - [`workload`]: Query descriptors and synthetic workload generation
//! - [`sql`]: SQL text for every supported query shape
//! - [`wire`]: Insert payload encoding and response decoding
//! - [`client`]: HTTP transport
//! - [`adapter`]: The `Database` lifecycle trait and the REST implementation
//!
//! ## Data Flow
//!
//! ```text
//! Batch → InsertTabletPayload → POST /rest/v2/insertTablet → Status
//! Query → SQL → POST /rest/v2/query → QueryResponse → Status
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iotdb_rest_bench::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let api = RestApi::new(&config.database, config.workload.sensor_ts_alignment)?;
//!
//!     let schema = Arc::new(
//!         DeviceSchema::new("g1", "d1")
//!             .tag("region", "east")
//!             .sensor("s0", SensorType::Double),
//!     );
//!     let batch = Batch::new(
//!         Arc::clone(&schema),
//!         vec![Record::new(100, vec![Value::Double(1.5)])],
//!     )?;
//!     println!("insert: {}", api.insert_one_batch(&batch).await);
//!
//!     let query = PreciseQuery { devices: vec![schema], timestamp: 100 };
//!     if let Some(status) = api.precise_query(&query).await {
//!         println!("query: {}", status);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod client;
pub mod config;
pub mod logging;
pub mod schema;
pub mod sql;
pub mod wire;
pub mod workload;

// Re-export top-level types for convenience
pub use adapter::{AdapterError, AdapterResult, Database, RestApi};

pub use client::{Endpoint, RestTransport, Transport, TransportError};

pub use config::{Config, ConfigError, DatabaseConfig, LoggingConfig, WorkloadConfig};

pub use schema::{
    device_path, Batch, DeviceSchema, Record, SchemaError, Sensor, SensorType, Status, Value,
};

pub use sql::{translate, TranslateError, CLEANUP_SQL};

pub use wire::{ExecutionStatus, InsertTabletPayload, QueryResponse};

pub use workload::{
    AggRangeQuery, AggRangeValueQuery, AggValueQuery, AggregateFunction, GroupByQuery,
    LatestPointQuery, Operation, PreciseQuery, Query, RangeQuery, ValueRangeQuery,
    WorkloadError,
};
