//! JSON convenience client bound to a fixed base URL.
//!
//! # Design
//! `HttpClient` holds only `base_url` and a transport handle. Each call is
//! split into a pure `build_*` step producing an `HttpRequest`, one
//! `Transport::execute`, and a pure `parse_response` step, so the request
//! and status contract is testable without a network.

use serde::Serialize;
use serde_json::Value;

use crate::error::{FetchError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};

/// Async JSON client for a REST API rooted at `base_url`.
///
/// The target URL of every request is `base_url + path`, concatenated
/// verbatim; callers supply any separators themselves.
#[derive(Debug, Clone)]
pub struct HttpClient<T = ReqwestTransport> {
    base_url: String,
    transport: T,
}

impl HttpClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn build_get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url_for(path),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpRequest> {
        let body = serde_json::to_string(body).map_err(|e| FetchError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url_for(path),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Fetch `base_url + path` and return the decoded JSON body.
    pub async fn get(&self, path: &str) -> Result<Value> {
        let request = self.build_get(path);
        self.send(request).await
    }

    /// POST `body` as JSON to `base_url + path` and return the decoded JSON
    /// response.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.build_post(path, body)?;
        self.send(request).await
    }

    async fn send(&self, request: HttpRequest) -> Result<Value> {
        let url = request.url.clone();
        tracing::debug!(method = request.method.as_str(), url = %url, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(url = %url, status = response.status, "received response");
        parse_response(&url, response)
    }
}

/// Map a response for `url` to its JSON body, or to `RequestFailed` when the
/// status is outside `200..=299`.
pub fn parse_response(url: &str, response: HttpResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(FetchError::RequestFailed {
            url: url.to_string(),
            status: response.status,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| FetchError::Parse(e.to_string()))
}
