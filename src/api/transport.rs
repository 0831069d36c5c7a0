//! HTTP transport seam
//!
//! [`HttpTransport`] is the boundary between the request pipeline and the
//! wire. The production implementation rides on reqwest with a cookie jar,
//! so the httpOnly refresh cookie set by the backend travels with requests
//! without the application ever seeing it. Tests swap in scripted transports.

use crate::api::error::{ApiError, ApiResult};
use crate::config::PortalConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP method of an API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request as the pipeline sees it, before it is handed to a transport
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,

    /// Path relative to the base URL, e.g. `/store/menus`.
    pub path: String,

    /// JSON body, when the endpoint takes one.
    pub body: Option<Value>,

    /// Access token to attach as a bearer header.
    pub bearer: Option<String>,

    /// Set once the request has been resent after a token refresh.
    /// A request is never retried twice.
    pub retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            bearer: None,
            retried: false,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A raw response: status plus body bytes, no status handling applied
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize a success body.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Turn a non-success response into [`ApiError::Status`], lifting `code`
    /// and `detail` out of the backend's JSON error body when present.
    pub fn status_error(&self) -> ApiError {
        let (code, detail) = self.error_body();
        ApiError::Status {
            status: self.status,
            code,
            detail,
        }
    }

    fn error_body(&self) -> (Option<String>, Option<String>) {
        let Ok(value) = serde_json::from_slice::<Value>(&self.body) else {
            return (None, None);
        };
        let field = |name: &str| match value.get(name) {
            Some(Value::String(s)) => Some(s.clone()),
            // Validation errors carry a structured `detail`; stringify it.
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        (field("code"), field("detail"))
    }
}

/// Trait for executing API requests
///
/// One round-trip per call. Non-success statuses are data, not errors; only
/// failures to produce a response at all map to [`ApiError::Network`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> ApiResult<ApiResponse>;
}

/// reqwest-backed transport with a cookie jar
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &PortalConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidRequest(
                "API base URL is not set".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Patch => self.http.patch(&url),
            Method::Delete => self.http.delete(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?
            .to_vec();

        Ok(ApiResponse { status, body })
    }
}
