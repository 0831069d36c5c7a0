//! Auth session
//!
//! Login, signup, logout, manual refresh, and the current store profile.
//! Every operation that yields a token stores it in the client's token cell;
//! logout clears the cell even when the server call fails.

use crate::api::client::PortalClient;
use crate::api::error::ApiResult;
use crate::api::types::{AccessTokenResponse, LoginRequest, SignupRequest, StatusOk, StoreMe};

pub const LOGIN_PATH: &str = "/store/auth/login";
pub const SIGNUP_PATH: &str = "/store/auth/signup";
pub const LOGOUT_PATH: &str = "/store/auth/logout";
pub const ME_PATH: &str = "/store/me";

#[derive(Clone)]
pub struct Session {
    client: PortalClient,
}

impl Session {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    pub fn access_token(&self) -> Option<String> {
        self.client.tokens().get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.tokens().is_set()
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let res: AccessTokenResponse = self.client.post(LOGIN_PATH, &body).await?;
        self.client.tokens().set(res.access_token);
        tracing::info!("Logged in");
        Ok(())
    }

    pub async fn signup(&self, payload: SignupRequest) -> ApiResult<()> {
        let res: AccessTokenResponse = self.client.post(SIGNUP_PATH, &payload).await?;
        self.client.tokens().set(res.access_token);
        tracing::info!("Account created");
        Ok(())
    }

    /// Log out on the server and drop the held token. The token is cleared
    /// even when the server call fails.
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.client.post_empty::<StatusOk>(LOGOUT_PATH).await;
        self.client.tokens().clear();
        match &result {
            Ok(_) => tracing::info!("Logged out"),
            Err(err) => tracing::warn!("Logout request failed ({}); token cleared anyway", err),
        }
        result.map(|_| ())
    }

    /// Explicit refresh, outside the 401 recovery path. Goes through the
    /// normal pipeline; the refresh endpoint is an auth endpoint, so a
    /// failure here surfaces directly.
    pub async fn refresh(&self) -> ApiResult<()> {
        let res: AccessTokenResponse = self
            .client
            .post_empty(crate::auth::refresh::REFRESH_PATH)
            .await?;
        self.client.tokens().set(res.access_token);
        Ok(())
    }

    pub async fn me(&self) -> ApiResult<StoreMe> {
        self.client.get(ME_PATH).await
    }

    /// Sign in with the demo account configured in the environment.
    #[cfg(feature = "demo-account")]
    pub async fn demo_login(&self) -> ApiResult<()> {
        use crate::api::error::ApiError;

        let email = std::env::var("STORE_PORTAL_DEMO_EMAIL")
            .map_err(|_| ApiError::InvalidRequest("STORE_PORTAL_DEMO_EMAIL is not set".into()))?;
        let password = std::env::var("STORE_PORTAL_DEMO_PASSWORD").map_err(|_| {
            ApiError::InvalidRequest("STORE_PORTAL_DEMO_PASSWORD is not set".into())
        })?;
        self.login(&email, &password).await
    }
}
