//! Authenticated application frame: navigation, theme switching, logout.
//!
//! The shell owns the root surface element. Theme changes are applied to
//! that element immediately and persisted so the next session starts on
//! the same theme.

use tracing::info;

use crate::auth::Session;
use crate::glass::{apply_theme, GlassTheme, SurfaceElement};
use crate::portal::prefs::{PrefStore, THEME_KEY};

/// Top-level destinations reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Menu,
    Orders,
    Profile,
}

impl Route {
    /// Navigation order as rendered in the shell.
    pub const NAV: [Route; 3] = [Route::Menu, Route::Orders, Route::Profile];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Menu => "/menu",
            Route::Orders => "/orders",
            Route::Profile => "/profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Menu => "Menu",
            Route::Orders => "Orders",
            Route::Profile => "Profile",
        }
    }
}

/// Application frame wrapping every authenticated screen.
pub struct Shell<E: SurfaceElement> {
    session: Session,
    prefs: PrefStore,
    root: E,
    theme: GlassTheme,
    location: String,
}

impl<E: SurfaceElement> Shell<E> {
    /// Builds the shell around `root`, restoring the persisted theme.
    ///
    /// An unknown or missing stored theme falls back to the default.
    pub fn new(session: Session, prefs: PrefStore, mut root: E) -> Self {
        let theme = prefs
            .get(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        apply_theme(&mut root, theme);
        Self {
            session,
            prefs,
            root,
            theme,
            location: Route::Menu.path().to_string(),
        }
    }

    pub fn theme(&self) -> GlassTheme {
        self.theme
    }

    /// Switches the active theme, persisting the choice.
    pub fn set_theme(&mut self, theme: GlassTheme) {
        self.theme = theme;
        self.prefs.set(THEME_KEY, theme.as_str());
        apply_theme(&mut self.root, theme);
        info!("Theme switched to {theme}");
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn navigate(&mut self, route: Route) {
        self.location = route.path().to_string();
    }

    /// A nav entry is highlighted for its own path and anything nested
    /// under it, so `/menu/42` keeps the Menu tab active.
    pub fn is_active(&self, route: Route) -> bool {
        self.location.starts_with(route.path())
    }

    /// Ends the session and returns to the landing location.
    ///
    /// The access token is dropped whether or not the server call
    /// succeeds, so the shell always lands signed out.
    pub async fn logout(&mut self) {
        let _ = self.session.logout().await;
        self.location = "/".to_string();
    }

    pub fn root(&self) -> &E {
        &self.root
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
