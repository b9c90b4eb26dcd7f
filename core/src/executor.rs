//! Async execution of built requests over `reqwest`.
//!
//! One `send` is one round trip. The executor never retries and never
//! interprets the status; `send_checked` layers [`check_status`] on top for
//! callers who want non-2xx as an error.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;
use tracing::{debug, warn};

use crate::client::check_status;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct Executor {
    client: reqwest::Client,
}

impl Executor {
    pub fn new() -> Result<Self, ApiError> {
        let client = client_builder().build()?;
        Ok(Self { client })
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        let client = client_builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Reuse an existing `reqwest::Client` (shared pool, custom TLS).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Execute `request` and return the full response, whatever its status.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = to_reqwest_method(request.method);
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let headers = collect_headers(resp.headers());
        let body = resp.bytes().await?.to_vec();

        if (200..300).contains(&status) {
            debug!(status, bytes = body.len(), "response received");
        } else {
            warn!(status, url = %request.url, "request failed");
        }

        Ok(HttpResponse { status, headers, body })
    }

    /// `send`, then map non-2xx statuses to `ApiError`.
    pub async fn send_checked(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        check_status(self.send(request).await?)
    }
}

/// Header values that are not UTF-8 are kept, lossily decoded.
fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
        .collect()
}

fn client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder().user_agent(concat!("brx-core/", env!("CARGO_PKG_VERSION")))
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
