//! Auth layer
//!
//! In-memory token storage, the single-flight refresh gate, and the session
//! operations (login, signup, logout, refresh, profile).

pub mod refresh;
pub mod session;
pub mod tokens;

pub use refresh::RefreshGate;
pub use session::Session;
pub use tokens::TokenCell;
