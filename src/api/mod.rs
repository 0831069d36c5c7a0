//! HTTP API layer
//!
//! Typed client for the store backend: the transport seam, the request
//! pipeline with 401 refresh-and-retry, the wire types, and the endpoint
//! groups (menus, orders, store profile).

pub mod client;
pub mod error;
pub mod menus;
pub mod orders;
pub mod store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::PortalClient;
pub use error::{ApiError, ApiResult};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
