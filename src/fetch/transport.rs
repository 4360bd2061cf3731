//! Transport seam between the controller and the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::error::FetchError;

/// A completed HTTP exchange, reduced to what the fetch pipeline needs.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Check if the status code is in the 2xx range.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP-fetch capability injected into the controller.
///
/// Any completed exchange, including non-2xx, is a response; only failures
/// to complete the exchange are transport errors.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError>;
}

/// Production transport backed by a `reqwest` client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .expect("Failed to build catalog client");

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), Duration::from_secs(30))
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
