//! Store Portal - admin client for store owners.
//!
//! Typed client and screen controllers for the store backend (menus,
//! orders, profile), with bearer-token auth that transparently refreshes
//! via an httpOnly cookie, plus the liquid-glass surface primitives the
//! portal renders with.

pub mod api;
pub mod auth;
pub mod config;
pub mod glass;
pub mod portal;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use api::{ApiError, ApiResult, PortalClient};
pub use auth::Session;
pub use config::PortalConfig;
pub use glass::{GlassPreset, GlassSurface, GlassTheme};

/// Initialize tracing/logging for binaries embedding the portal.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_portal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting store-portal v{}", env!("CARGO_PKG_VERSION"));
}

/// Builds a session over the live HTTP transport, configured from the
/// environment.
pub fn connect() -> ApiResult<Session> {
    let config = PortalConfig::from_env();
    let transport = api::ReqwestTransport::new(&config)?;
    Ok(Session::new(PortalClient::new(Arc::new(transport))))
}
