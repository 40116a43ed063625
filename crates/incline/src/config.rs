//! Configuration types for Incline diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Selects the [`DiagramVariant`] and the label collision policy.
//! - [`StyleConfig`] - Controls visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use incline::config::{AppConfig, DiagramVariant};
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     variant = "compact"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.layout().variant(), DiagramVariant::Compact);
//! assert!(!config.layout().collision_avoidance());
//! ```

use serde::Deserialize;

use incline_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// The two rendering variants of the diagram.
///
/// | Variant | Canvas | Label fonts (force / component / caption) | Collision avoidance |
/// |---------|--------|-------------------------------------------|---------------------|
/// | `Full` | 800×600 | 16 / 15 / 18 | on |
/// | `Compact` | 600×450 | 13 / 12 / 14 | off |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramVariant {
    #[default]
    Full,
    Compact,
}

impl DiagramVariant {
    /// Whether the variant resolves label collisions unless overridden.
    pub fn default_collision_avoidance(self) -> bool {
        match self {
            Self::Full => true,
            Self::Compact => false,
        }
    }
}

/// Layout configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Rendering variant; determines canvas size and font sizes.
    #[serde(default)]
    variant: DiagramVariant,

    /// Overrides the variant's collision-avoidance default when set.
    #[serde(default)]
    collision_avoidance: Option<bool>,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `variant` - Rendering variant.
    /// * `collision_avoidance` - Explicit collision policy, or `None` for the variant default.
    pub fn new(variant: DiagramVariant, collision_avoidance: Option<bool>) -> Self {
        Self {
            variant,
            collision_avoidance,
        }
    }

    /// Returns the rendering variant.
    pub fn variant(&self) -> DiagramVariant {
        self.variant
    }

    /// Returns the effective label collision policy.
    pub fn collision_avoidance(&self) -> bool {
        self.collision_avoidance
            .unwrap_or_else(|| self.variant.default_collision_avoidance())
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style configuration with an optional background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
