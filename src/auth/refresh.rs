//! Single-flight token refresh
//!
//! Any number of requests can hit a 401 at the same moment, but at most one
//! refresh round-trip may be in flight. The gate memoizes the in-flight
//! operation: the first caller starts it, later callers attach to the same
//! outcome, and the slot is cleared once the outcome lands so the next 401
//! starts a fresh round-trip.

use crate::api::error::{ApiError, ApiResult};
use crate::api::transport::{ApiRequest, HttpTransport, Method};
use crate::api::types::AccessTokenResponse;
use crate::auth::tokens::TokenCell;
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;
use tokio::sync::watch;

pub const REFRESH_PATH: &str = "/store/auth/refresh";

type Outcome = ApiResult<String>;
type Slot = Option<watch::Receiver<Option<Outcome>>>;

#[derive(Clone, Default)]
pub struct RefreshGate {
    slot: Arc<ParkingMutex<Slot>>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exchange the refresh cookie for a new access token, or attach to the
    /// refresh already in flight. On success the token cell holds the new
    /// token before any caller observes the outcome.
    pub async fn refresh(&self, transport: Arc<dyn HttpTransport>, tokens: TokenCell) -> Outcome {
        let mut receiver = {
            let mut slot = self.slot.lock();
            match &*slot {
                Some(receiver) => {
                    tracing::debug!("Joining in-flight token refresh");
                    receiver.clone()
                }
                None => {
                    let (sender, receiver) = watch::channel(None);
                    *slot = Some(receiver.clone());
                    self.spawn_round_trip(sender, transport, tokens);
                    receiver
                }
            }
        };

        let outcome = match receiver.wait_for(|outcome| outcome.is_some()).await {
            Ok(outcome) => outcome
                .clone()
                .unwrap_or_else(|| Err(ApiError::Network("refresh outcome missing".to_string()))),
            // Sender dropped without publishing: the task died mid-flight.
            Err(_) => Err(ApiError::Network(
                "refresh interrupted before completing".to_string(),
            )),
        };
        outcome
    }

    /// The round-trip runs detached so it finishes even when every waiting
    /// request has been cancelled.
    fn spawn_round_trip(
        &self,
        sender: watch::Sender<Option<Outcome>>,
        transport: Arc<dyn HttpTransport>,
        tokens: TokenCell,
    ) {
        let slot = self.slot.clone();
        tokio::spawn(async move {
            let outcome = run_refresh(transport.as_ref(), &tokens).await;
            match &outcome {
                Ok(_) => tracing::info!("Access token refreshed"),
                Err(err) => tracing::warn!("Token refresh failed: {}", err),
            }

            // Free the slot before publishing: a caller arriving after this
            // point starts a fresh round-trip, while everyone already
            // attached still receives this outcome.
            *slot.lock() = None;
            let _ = sender.send(Some(outcome));
        });
    }
}

async fn run_refresh(transport: &dyn HttpTransport, tokens: &TokenCell) -> Outcome {
    let mut request = ApiRequest::new(Method::Post, REFRESH_PATH);
    request.bearer = tokens.get();

    let response = transport.execute(&request).await?;
    if !response.is_success() {
        return Err(response.status_error());
    }

    let body: AccessTokenResponse = response.json()?;
    tokens.set(body.access_token.clone());
    Ok(body.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{json_reply, json_response, ScriptedTransport};
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_concurrent_callers_join_one_round_trip() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route(REFRESH_PATH, |_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(json_response(200, json!({"access_token": "fresh-token"})))
            })
        });

        let gate = RefreshGate::new();
        let tokens = TokenCell::new();

        let mut handles = Vec::new();
        for _ in 0..6 {
            let gate = gate.clone();
            let transport = transport.clone();
            let tokens = tokens.clone();
            handles.push(tokio::spawn(async move {
                gate.refresh(transport, tokens).await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "fresh-token");
        }

        assert_eq!(transport.calls_to(REFRESH_PATH), 1);
        assert_eq!(tokens.get().as_deref(), Some("fresh-token"));
    }

    #[tokio::test]
    async fn test_slot_clears_after_completion() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route(REFRESH_PATH, |_, index| {
            json_reply(200, json!({"access_token": format!("token-{}", index)}))
        });

        let gate = RefreshGate::new();
        let tokens = TokenCell::new();

        let first = gate.refresh(transport.clone(), tokens.clone()).await;
        assert_eq!(first.unwrap(), "token-0");

        // The first round-trip resolved; a later 401 gets a new one.
        let second = gate.refresh(transport.clone(), tokens.clone()).await;
        assert_eq!(second.unwrap(), "token-1");
        assert_eq!(transport.calls_to(REFRESH_PATH), 2);
    }

    #[tokio::test]
    async fn test_failure_is_broadcast_and_slot_clears() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route(REFRESH_PATH, |_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(json_response(
                    401,
                    json!({"detail": "Refresh expired", "code": "refresh_expired"}),
                ))
            })
        });

        let gate = RefreshGate::new();
        let tokens = TokenCell::new();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let gate = gate.clone();
            let transport = transport.clone();
            let tokens = tokens.clone();
            handles.push(tokio::spawn(async move {
                gate.refresh(transport, tokens).await
            }));
        }
        for handle in handles {
            let err = handle.await.unwrap().unwrap_err();
            match err {
                ApiError::Status { status, code, .. } => {
                    assert_eq!(status, 401);
                    assert_eq!(code.as_deref(), Some("refresh_expired"));
                }
                other => panic!("expected Status error, got {:?}", other),
            }
        }

        assert_eq!(transport.calls_to(REFRESH_PATH), 1);
        // A failed refresh does not leave the gate wedged.
        let retry = gate.refresh(transport.clone(), tokens).await;
        assert!(retry.is_err());
        assert_eq!(transport.calls_to(REFRESH_PATH), 2);
    }

    #[tokio::test]
    async fn test_refresh_attaches_current_token_when_held() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route(REFRESH_PATH, |request, _| {
            assert_eq!(request.bearer.as_deref(), Some("stale-token"));
            json_reply(200, json!({"access_token": "fresh-token"}))
        });

        let gate = RefreshGate::new();
        let tokens = TokenCell::new();
        tokens.set("stale-token");

        gate.refresh(transport, tokens.clone()).await.unwrap();
        assert_eq!(tokens.get().as_deref(), Some("fresh-token"));
    }
}
