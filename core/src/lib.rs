//! Async JSON HTTP client bound to a fixed base URL.
//!
//! # Overview
//! `HttpClient` exposes `get(path)` and `post(path, body)`. Each call sends
//! one request to `base_url + path`, checks that the status is 2xx, and
//! returns the response body as a `serde_json::Value`.
//!
//! # Design
//! - `HttpClient` holds only `base_url` and a transport; it keeps no state
//!   between calls and is safe to share across tasks.
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`);
//!   the `Transport` trait performs the round-trip. `ReqwestTransport` is the
//!   default, tests plug in their own.
//! - Status checking is the same for every method: anything outside
//!   `200..=299` becomes `FetchError::RequestFailed`.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;

pub use client::{parse_response, HttpClient};
pub use error::{FetchError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
