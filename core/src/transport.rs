//! Pluggable execution of `HttpRequest` values.
//!
//! # Design
//! `Transport` is the only I/O seam of the crate. Implementations perform a
//! single round-trip and report the status as data; mapping statuses to
//! errors is the client's job. `ReqwestTransport` is the default.

use async_trait::async_trait;

use crate::error::{FetchError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implement this to run requests through another HTTP library or an
/// in-memory fake:
///
/// ```ignore
/// use async_trait::async_trait;
/// use fetch_http::{HttpRequest, HttpResponse, Result, Transport};
///
/// struct Canned;
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse> {
///         Ok(HttpResponse { status: 200, headers: Vec::new(), body: "{}".into() })
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return whatever the server answered, including
    /// non-2xx statuses. Only failures to complete the exchange are `Err`.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Async transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
