//! Request/response capability the adapter sends its bodies through

use async_trait::async_trait;

use super::error::TransportError;

/// REST endpoints the adapter talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    InsertTablet,
    Query,
    NonQuery,
}

impl Endpoint {
    /// Path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::InsertTablet => "/rest/v2/insertTablet",
            Endpoint::Query => "/rest/v2/query",
            Endpoint::NonQuery => "/rest/v2/nonQuery",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// One blocking JSON POST round trip
///
/// Implementations own connection reuse and timeouts, and must be safe to
/// share between adapter instances.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON body and return the response body of a 2xx answer
    async fn post(&self, endpoint: Endpoint, body: String) -> Result<String, TransportError>;
}
