//! Sign-in gate shown before the authenticated shell.
//!
//! Holds the login/signup form state plus the status line the screen
//! renders. Every action clears the previous status first, so stale
//! feedback never survives a new attempt.

use crate::api::types::{SignupRequest, StoreMe};
use crate::auth::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Controller for the unauthenticated landing screen.
pub struct AuthGate {
    session: Session,
    mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    error: Option<String>,
    message: Option<String>,
    me: Option<StoreMe>,
}

impl AuthGate {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            mode: AuthMode::Login,
            email: String::new(),
            password: String::new(),
            name: String::new(),
            phone: String::new(),
            error: None,
            message: None,
            me: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switching tabs drops the error but keeps any success message.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn me(&self) -> Option<&StoreMe> {
        self.me.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn clear_status(&mut self) {
        self.error = None;
        self.message = None;
    }

    pub async fn submit_login(&mut self) {
        self.clear_status();
        match self.session.login(&self.email, &self.password).await {
            Ok(()) => self.message = Some("Login succeeded.".to_string()),
            Err(err) => self.error = Some(err.user_message("Login failed")),
        }
    }

    pub async fn submit_signup(&mut self) {
        self.clear_status();
        let phone = self.phone.trim();
        let payload = SignupRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        };
        match self.session.signup(payload).await {
            Ok(()) => self.message = Some("Signup succeeded.".to_string()),
            Err(err) => self.error = Some(err.user_message("Signup failed")),
        }
    }

    /// Forces a refresh round-trip and reloads the profile as proof.
    pub async fn refresh_session(&mut self) {
        self.clear_status();
        let outcome = match self.session.refresh().await {
            Ok(()) => self.session.me().await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(me) => {
                self.me = Some(me);
                self.message = Some("Refresh succeeded.".to_string());
            }
            Err(_) => self.error = Some("Refresh failed".to_string()),
        }
    }

    pub async fn logout_now(&mut self) {
        self.clear_status();
        match self.session.logout().await {
            Ok(()) => {
                self.me = None;
                self.message = Some("Logged out.".to_string());
            }
            Err(_) => self.error = Some("Logout failed".to_string()),
        }
    }

    pub async fn load_me(&mut self) {
        self.clear_status();
        match self.session.me().await {
            Ok(me) => {
                self.me = Some(me);
                self.message = Some("Loaded /store/me successfully.".to_string());
            }
            Err(_) => self.error = Some("Failed to load /store/me".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::testing::{json_reply, ScriptedTransport};
    use crate::api::PortalClient;

    fn gate_over(transport: Arc<ScriptedTransport>) -> AuthGate {
        AuthGate::new(Session::new(PortalClient::new(transport)))
    }

    fn me_body() -> serde_json::Value {
        json!({
            "id": "7b6fc88a-5cc8-44a5-a8a9-013b4aa4a10d",
            "name": "Corner Deli",
            "email": "owner@corner.example",
            "created_at": "2026-01-05T08:00:00"
        })
    }

    #[tokio::test]
    async fn test_login_success_sets_message_and_token() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/auth/login", |_, _| {
            json_reply(200, json!({ "access_token": "t-1", "token_type": "bearer" }))
        });
        let mut gate = gate_over(transport.clone());
        gate.email = "owner@corner.example".to_string();
        gate.password = "hunter2".to_string();

        gate.submit_login().await;

        assert_eq!(gate.message(), Some("Login succeeded."));
        assert_eq!(gate.error(), None);
        assert!(gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_prefers_server_detail() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/auth/login", |_, _| {
            json_reply(
                401,
                json!({ "detail": "Invalid credentials", "code": "invalid_credentials" }),
            )
        });
        let mut gate = gate_over(transport.clone());

        gate.submit_login().await;

        assert_eq!(gate.error(), Some("Invalid credentials"));
        assert_eq!(gate.message(), None);
        assert!(!gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_falls_back_to_code_then_fixed_text() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/auth/login", |_, index| match index {
            0 => json_reply(401, json!({ "code": "invalid_credentials" })),
            _ => json_reply(401, json!({})),
        });
        let mut gate = gate_over(transport.clone());

        gate.submit_login().await;
        assert_eq!(gate.error(), Some("invalid_credentials"));

        gate.submit_login().await;
        assert_eq!(gate.error(), Some("Login failed"));
    }

    #[tokio::test]
    async fn test_mode_switch_clears_error_but_not_message() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/auth/login", |_, _| {
            json_reply(200, json!({ "access_token": "t-1" }))
        });
        let mut gate = gate_over(transport.clone());

        gate.submit_login().await;
        gate.error = Some("leftover".to_string());
        gate.set_mode(AuthMode::Signup);

        assert_eq!(gate.mode(), AuthMode::Signup);
        assert_eq!(gate.error(), None);
        assert_eq!(gate.message(), Some("Login succeeded."));
    }

    #[tokio::test]
    async fn test_signup_trims_phone_and_omits_when_blank() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/auth/signup", |_, _| {
            json_reply(200, json!({ "access_token": "t-2" }))
        });
        let mut gate = gate_over(transport.clone());
        gate.email = "owner@corner.example".to_string();
        gate.password = "hunter2".to_string();
        gate.name = "Corner Deli".to_string();
        gate.phone = "  ".to_string();

        gate.submit_signup().await;
        assert_eq!(gate.message(), Some("Signup succeeded."));

        gate.phone = " 555-0100 ".to_string();
        gate.submit_signup().await;

        let bodies: Vec<_> = transport
            .requests_to("/store/auth/signup")
            .into_iter()
            .map(|r| r.body.unwrap())
            .collect();
        assert_eq!(bodies[0].get("phone"), None);
        assert_eq!(bodies[1].get("phone"), Some(&json!("555-0100")));
    }

    #[tokio::test]
    async fn test_refresh_chains_profile_reload() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/auth/refresh", |_, _| {
            json_reply(200, json!({ "access_token": "t-3" }))
        });
        transport.route("/store/me", |_, _| json_reply(200, me_body()));
        let mut gate = gate_over(transport.clone());

        gate.refresh_session().await;

        assert_eq!(gate.message(), Some("Refresh succeeded."));
        assert_eq!(gate.me().map(|m| m.name.as_str()), Some("Corner Deli"));
        assert_eq!(gate.session().access_token().as_deref(), Some("t-3"));
    }

    #[tokio::test]
    async fn test_refresh_failure_uses_fixed_text_even_with_detail() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/auth/refresh", |_, _| {
            json_reply(401, json!({ "detail": "Refresh token expired" }))
        });
        let mut gate = gate_over(transport.clone());

        gate.refresh_session().await;

        assert_eq!(gate.error(), Some("Refresh failed"));
        assert!(gate.me().is_none());
    }

    #[tokio::test]
    async fn test_logout_failure_keeps_profile_but_drops_token() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/me", |_, _| json_reply(200, me_body()));
        transport.route("/store/auth/logout", |_, _| {
            json_reply(500, json!({ "detail": "session store down" }))
        });
        let mut gate = gate_over(transport.clone());
        gate.session().client().tokens().set("t-4");

        gate.load_me().await;
        assert_eq!(gate.message(), Some("Loaded /store/me successfully."));

        gate.logout_now().await;

        assert_eq!(gate.error(), Some("Logout failed"));
        assert!(gate.me().is_some());
        assert!(!gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_success_clears_profile() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/me", |_, _| json_reply(200, me_body()));
        transport.route("/store/auth/logout", |_, _| {
            json_reply(200, json!({"status": "ok"}))
        });
        let mut gate = gate_over(transport.clone());
        gate.session().client().tokens().set("t-5");

        gate.load_me().await;
        gate.logout_now().await;

        assert_eq!(gate.message(), Some("Logged out."));
        assert!(gate.me().is_none());
    }

    #[tokio::test]
    async fn test_load_me_failure_uses_fixed_text() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/me", |_, _| {
            json_reply(500, json!({ "detail": "boom" }))
        });
        let mut gate = gate_over(transport.clone());

        gate.load_me().await;

        assert_eq!(gate.error(), Some("Failed to load /store/me"));
    }
}
