//! Portal API client
//!
//! One pipeline for every request: attach the current access token, execute,
//! and on a 401 run the shared token refresh before resubmitting the original
//! request exactly once. Auth endpoints and already-retried requests never
//! recover; their 401 is surfaced as-is. When the refresh itself fails, the
//! held token is cleared and the caller sees the original error.

use crate::api::error::{ApiError, ApiResult};
use crate::api::transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
use crate::auth::refresh::RefreshGate;
use crate::auth::tokens::TokenCell;
use crate::config::PortalConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Endpoints whose 401 means bad credentials, not an expired token.
const AUTH_ENDPOINTS: [&str; 4] = [
    "/store/auth/login",
    "/store/auth/signup",
    "/store/auth/refresh",
    "/store/auth/logout",
];

fn is_auth_endpoint(path: &str) -> bool {
    AUTH_ENDPOINTS.contains(&path)
}

struct ClientInner {
    transport: Arc<dyn HttpTransport>,
    tokens: TokenCell,
    refresh: RefreshGate,
}

/// Shared handle to the request pipeline
#[derive(Clone)]
pub struct PortalClient {
    inner: Arc<ClientInner>,
}

impl PortalClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                tokens: TokenCell::new(),
                refresh: RefreshGate::new(),
            }),
        }
    }

    /// Client over the reqwest transport for the configured backend.
    pub fn from_config(config: &PortalConfig) -> ApiResult<Self> {
        Ok(Self::new(Arc::new(ReqwestTransport::new(config)?)))
    }

    /// The access-token slot this client attaches from.
    pub fn tokens(&self) -> &TokenCell {
        &self.inner.tokens
    }

    /// Execute a request through the full pipeline and return the raw
    /// response. Status handling is the typed wrappers' job.
    pub async fn send(&self, mut request: ApiRequest) -> ApiResult<ApiResponse> {
        let request_id = Uuid::new_v4();
        request.bearer = self.inner.tokens.get();

        tracing::debug!(
            "{} {} (request_id={})",
            request.method,
            request.path,
            request_id
        );

        let response = self.inner.transport.execute(&request).await?;
        if response.status != 401 || is_auth_endpoint(&request.path) || request.retried {
            return Ok(response);
        }

        tracing::debug!(
            "401 on {} {}; running token refresh (request_id={})",
            request.method,
            request.path,
            request_id
        );

        let refresh = self
            .inner
            .refresh
            .refresh(self.inner.transport.clone(), self.inner.tokens.clone())
            .await;

        match refresh {
            Ok(_) => {
                request.retried = true;
                request.bearer = self.inner.tokens.get();
                tracing::debug!(
                    "Retrying {} {} with refreshed token (request_id={})",
                    request.method,
                    request.path,
                    request_id
                );
                self.inner.transport.execute(&request).await
            }
            Err(refresh_err) => {
                tracing::warn!(
                    "Token refresh failed ({}); surfacing original 401 (request_id={})",
                    refresh_err,
                    request_id
                );
                self.inner.tokens.clear();
                Ok(response)
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request_json(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = ApiRequest::new(Method::Post, path).with_body(to_body(body)?);
        self.request_json(request).await
    }

    /// POST with an empty body (logout, refresh).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request_json(ApiRequest::new(Method::Post, path)).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = ApiRequest::new(Method::Patch, path).with_body(to_body(body)?);
        self.request_json(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request_json(ApiRequest::new(Method::Delete, path))
            .await
    }

    async fn request_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(response.status_error());
        }
        response.json()
    }
}

fn to_body<B: Serialize>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}
