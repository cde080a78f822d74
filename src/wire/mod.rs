//! JSON bodies exchanged with the IoTDB REST service

pub mod payload;
pub mod response;

pub use payload::InsertTabletPayload;
pub use response::{ExecutionStatus, QueryResponse};

use serde::Serialize;

/// Body of `/rest/v2/query` and `/rest/v2/nonQuery`
#[derive(Debug, Clone, Serialize)]
pub struct SqlRequest<'a> {
    pub sql: &'a str,
}

impl<'a> SqlRequest<'a> {
    pub fn new(sql: &'a str) -> Self {
        Self { sql }
    }
}
