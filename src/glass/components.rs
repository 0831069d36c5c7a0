//! Ready-made surface configurations
//!
//! Thin wrappers over the builder with the component library's defaults.
//! Callers can still override any of them before mounting.

use crate::glass::surface::GlassSurfaceBuilder;
use crate::glass::theme::GlassPreset;

/// Plain surface with the library defaults (div, frosted, non-interactive).
pub fn glass_surface() -> GlassSurfaceBuilder {
    GlassSurfaceBuilder::new()
}

/// Interactive crystal button; renders as `button` with `type="button"`.
pub fn glass_button() -> GlassSurfaceBuilder {
    GlassSurfaceBuilder::new()
        .tag("button")
        .preset(GlassPreset::Crystal)
        .interactive(true)
        .attribute("type", "button")
}

/// Frosted content card.
pub fn glass_card() -> GlassSurfaceBuilder {
    GlassSurfaceBuilder::new().preset(GlassPreset::Frosted)
}

/// Subtle section panel.
pub fn glass_panel() -> GlassSurfaceBuilder {
    GlassSurfaceBuilder::new().tag("section").preset(GlassPreset::Subtle)
}
