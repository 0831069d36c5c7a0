//! Scripted transport for exercising the request pipeline without a server.

use crate::api::error::ApiResult;
use crate::api::transport::{ApiRequest, ApiResponse, HttpTransport};
use async_trait::async_trait;
use parking_lot::Mutex as ParkingMutex;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

pub(crate) type BoxedReply = Pin<Box<dyn Future<Output = ApiResult<ApiResponse>> + Send>>;

type Responder = Box<dyn Fn(&ApiRequest, usize) -> BoxedReply + Send + Sync>;

/// JSON response body with the given status.
pub(crate) fn json_response(status: u16, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        body: serde_json::to_vec(&body).unwrap(),
    }
}

/// Ready-made reply future for responders that answer immediately.
pub(crate) fn json_reply(status: u16, body: Value) -> BoxedReply {
    let response = json_response(status, body);
    Box::pin(async move { Ok(response) })
}

/// Transport that answers from per-path responders and records every request.
///
/// The responder receives the request and the number of prior calls to the
/// same path, and returns the reply future to await.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responders: ParkingMutex<HashMap<String, Responder>>,
    calls: ParkingMutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route<F>(&self, path: &str, responder: F)
    where
        F: Fn(&ApiRequest, usize) -> BoxedReply + Send + Sync + 'static,
    {
        self.responders
            .lock()
            .insert(path.to_string(), Box::new(responder));
    }

    pub(crate) fn calls_to(&self, path: &str) -> usize {
        self.calls.lock().iter().filter(|r| r.path == path).count()
    }

    pub(crate) fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.calls
            .lock()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let index = {
            let mut calls = self.calls.lock();
            let index = calls.iter().filter(|r| r.path == request.path).count();
            calls.push(request.clone());
            index
        };

        let reply = {
            let responders = self.responders.lock();
            let responder = responders
                .get(&request.path)
                .unwrap_or_else(|| panic!("no scripted responder for {}", request.path));
            responder(request, index)
        };

        reply.await
    }
}
