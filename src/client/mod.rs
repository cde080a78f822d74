//! HTTP transport for the IoTDB REST service
//!
//! The adapter only sees the [`Transport`] trait; [`RestTransport`] is the
//! reqwest implementation used outside of tests.

mod error;
mod rest;
mod transport;

pub use error::TransportError;
pub use rest::RestTransport;
pub use transport::{Endpoint, Transport};
