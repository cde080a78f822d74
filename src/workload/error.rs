//! Workload error types

use thiserror::Error;

/// Errors raised while building query descriptors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    /// Aggregation function name not recognised
    #[error("Unknown aggregate function: {0}")]
    UnknownAggregate(String),
}
