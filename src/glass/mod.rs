//! Liquid-glass surface engine
//!
//! The pointer-tracked highlight behind the portal's look: an element seam,
//! the frame-coalesced tracking engine, presets and themes, and the
//! component-default builders.

pub mod components;
pub mod element;
pub mod surface;
pub mod theme;

#[cfg(feature = "reduced-motion-probe")]
pub mod motion;

pub use components::{glass_button, glass_card, glass_panel, glass_surface};
pub use element::{MemoryElement, Rect, SurfaceElement};
pub use surface::{GlassSurface, GlassSurfaceBuilder, PointerSample, Radius, SurfaceHooks};
pub use theme::{apply_theme, GlassPreset, GlassTheme, THEME_ATTRIBUTE};
