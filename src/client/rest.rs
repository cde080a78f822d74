//! reqwest-backed transport for the IoTDB REST service

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use super::error::TransportError;
use super::transport::{Endpoint, Transport};
use crate::config::DatabaseConfig;

/// HTTP transport with a pooled client and Basic authentication
#[derive(Debug, Clone)]
pub struct RestTransport {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl RestTransport {
    /// Create a transport for the configured server
    pub fn new(config: &DatabaseConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl Transport for RestTransport {
    async fn post(&self, endpoint: Endpoint, body: String) -> Result<String, TransportError> {
        let response = self
            .client
            .post(self.url(endpoint))
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(TransportError::classify)?;

        let status = response.status();
        let text = response.text().await.map_err(TransportError::classify)?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(TransportError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
