//! Store-owner portal
//!
//! Screen controllers for the admin surface: the sign-in gate, the shell
//! that frames authenticated screens, and one controller per route. Each
//! controller owns its form state and talks to the backend through
//! [`crate::api::PortalClient`].

pub mod auth_screen;
pub mod menus;
pub mod orders;
pub mod prefs;
pub mod profile;
pub mod shell;

pub use auth_screen::{AuthGate, AuthMode};
pub use menus::MenuScreen;
pub use orders::{OrdersScreen, COMMON_STATUSES};
pub use prefs::{PrefStore, THEME_KEY};
pub use profile::ProfileScreen;
pub use shell::{Route, Shell};
