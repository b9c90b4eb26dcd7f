//! Stateless request builder for the management API.
//!
//! # Design
//! `ManagementClient` holds only the base URL and the auth token and carries
//! no mutable state between calls. Every operation is a `build_*` method
//! that produces an `HttpRequest`; the resource groups live in their own
//! modules as further `impl ManagementClient` blocks. The caller executes
//! the round trip and may pass the response through [`ManagementClient::check`].

use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{
    HttpMethod, HttpRequest, HttpResponse, APPLICATION_JSON, AUTH_TOKEN_HEADER,
    RESOURCE_VERSION_HEADER,
};

const HOST_SUFFIX: &str = "bloomreach.io";

#[derive(Clone)]
pub struct ManagementClient {
    base_url: String,
    token: String,
}

impl std::fmt::Debug for ManagementClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagementClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl ManagementClient {
    /// Client for `https://{environment}.bloomreach.io`.
    pub fn new(environment: &str, token: impl Into<String>) -> Self {
        Self::with_base_url(&format!("https://{environment}.{HOST_SUFFIX}"), token)
    }

    /// Client for an arbitrary base URL (proxies, mock servers).
    pub fn with_base_url(base_url: &str, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        match &config.base_url {
            Some(base) => Self::with_base_url(base, config.x_auth_token.clone()),
            None => Self::new(&config.environment, config.x_auth_token.clone()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Pass 2xx responses through untouched, map everything else to `ApiError`.
    pub fn check(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        check_status(response)
    }

    /// Authenticated request to `{base}/{root}{path}`.
    pub(crate) fn request(&self, method: HttpMethod, root: &str, path: &str) -> RequestBuilder {
        self.anonymous(method, root, path)
            .header(AUTH_TOKEN_HEADER, &self.token)
    }

    /// Request without the auth header, for the public delivery API.
    pub(crate) fn anonymous(&self, method: HttpMethod, root: &str, path: &str) -> RequestBuilder {
        RequestBuilder {
            method,
            url: format!("{}/{root}{path}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
pub(crate) fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        409 => Err(ApiError::Conflict { body: response.text() }),
        status => Err(ApiError::Status { status, body: response.text() }),
    }
}

/// Content paths are inserted verbatim, minus one leading slash so absolute
/// repository paths do not produce `//` in the URL.
pub(crate) fn content_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

pub(crate) struct RequestBuilder {
    method: HttpMethod,
    url: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub(crate) fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub(crate) fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Serialize `body` as JSON and set the JSON accept/content-type pair.
    pub(crate) fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ApiError> {
        let bytes =
            serde_json::to_vec(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut builder = self
            .header("accept", APPLICATION_JSON)
            .header("content-type", APPLICATION_JSON);
        builder.body = Some(bytes);
        Ok(builder)
    }

    pub(crate) fn bytes(mut self, content_type: &str, body: Vec<u8>) -> Self {
        self = self.header("content-type", content_type);
        self.body = Some(body);
        self
    }

    /// Attach `x-resource-version` unless the version is absent or empty.
    pub(crate) fn resource_version(self, version: Option<&str>) -> Self {
        match version {
            Some(v) if !v.is_empty() => self.header(RESOURCE_VERSION_HEADER, v),
            _ => self,
        }
    }

    pub(crate) fn build(self) -> HttpRequest {
        let mut url = self.url;
        if !self.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        HttpRequest {
            method: self.method,
            url,
            headers: self.headers,
            body: self.body,
        }
    }
}
