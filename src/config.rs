//! Portal configuration
//!
//! The core needs exactly one piece of configuration: where the backend
//! lives. Embedding shells either pass it explicitly or let it come from
//! the environment.

use std::env;

/// Environment variable holding the backend origin.
pub const BASE_URL_ENV: &str = "STORE_API_BASE_URL";

#[derive(Debug, Clone, Default)]
pub struct PortalConfig {
    /// Backend origin, e.g. `http://127.0.0.1:8000`. Request paths are
    /// appended to this.
    pub base_url: String,
}

impl PortalConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_default();
        if base_url.is_empty() {
            tracing::warn!(
                "{} is not set; requests will be rejected until a base URL is configured",
                BASE_URL_ENV
            );
        }
        Self { base_url }
    }
}
