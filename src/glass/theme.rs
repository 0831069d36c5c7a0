//! Glass presets and themes

use crate::glass::element::SurfaceElement;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attribute carrying the active theme on the wrapping element.
pub const THEME_ATTRIBUTE: &str = "data-glass-theme";

/// Visual intensity presets for a glass surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassPreset {
    Subtle,
    Frosted,
    Crystal,
    Vibrant,
    Contrast,
}

impl GlassPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlassPreset::Subtle => "subtle",
            GlassPreset::Frosted => "frosted",
            GlassPreset::Crystal => "crystal",
            GlassPreset::Vibrant => "vibrant",
            GlassPreset::Contrast => "contrast",
        }
    }
}

impl std::fmt::Display for GlassPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color themes, applied as a data attribute on a wrapping element
///
/// `ALL` follows the order the theme picker presents them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlassTheme {
    Light,
    #[default]
    Dark,
    Ocean,
    Sunset,
    Forest,
    Contrast,
}

impl GlassTheme {
    pub const ALL: [GlassTheme; 6] = [
        GlassTheme::Dark,
        GlassTheme::Light,
        GlassTheme::Ocean,
        GlassTheme::Sunset,
        GlassTheme::Forest,
        GlassTheme::Contrast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GlassTheme::Light => "light",
            GlassTheme::Dark => "dark",
            GlassTheme::Ocean => "ocean",
            GlassTheme::Sunset => "sunset",
            GlassTheme::Forest => "forest",
            GlassTheme::Contrast => "contrast",
        }
    }
}

impl std::fmt::Display for GlassTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(String);

impl std::str::FromStr for GlassTheme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(GlassTheme::Light),
            "dark" => Ok(GlassTheme::Dark),
            "ocean" => Ok(GlassTheme::Ocean),
            "sunset" => Ok(GlassTheme::Sunset),
            "forest" => Ok(GlassTheme::Forest),
            "contrast" => Ok(GlassTheme::Contrast),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Write the theme attribute onto the wrapping element.
pub fn apply_theme(element: &mut impl SurfaceElement, theme: GlassTheme) {
    element.set_attribute(THEME_ATTRIBUTE, theme.as_str());
}
