//! Response envelopes returned by the REST endpoints

use serde::Deserialize;

/// Result set of `/rest/v2/query`
///
/// Only `timestamps` is required; the remaining columns are carried along for
/// callers that want the data itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub expressions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub column_names: Vec<String>,
    pub timestamps: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl QueryResponse {
    /// Parse a response body
    pub fn decode(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Number of rows in the result set
    pub fn row_count(&self) -> usize {
        self.timestamps.len()
    }
}

/// Execution status returned by `/rest/v2/insertTablet` and `/rest/v2/nonQuery`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExecutionStatus {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl ExecutionStatus {
    /// Status code IoTDB uses for success
    pub const SUCCESS: i64 = 200;

    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS
    }

    /// Parse a response body, `None` when it is not a status envelope
    pub fn decode(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
