//! Text definitions for diagram labels.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - Content combined with a [`TextDefinition`]; measurable and renderable
//!
//! # Measurement
//!
//! Label sizes are estimated rather than shaped: every character is assumed to
//! be [`CHAR_WIDTH_FACTOR`] × font size wide and one font size tall. The
//! estimate is deterministic across machines, which keeps label placement
//! reproducible for visual regression tests.
//!
//! ```
//! # use float_cmp::assert_approx_eq;
//! # use incline_core::draw::{Text, TextDefinition};
//! # use incline_core::geometry::Insets;
//! let mut style = TextDefinition::new();
//! style.set_font_size(10);
//! style.set_padding(Insets::uniform(0.0));
//!
//! let size = Text::new(&style, "T=20N").calculate_size();
//! assert_approx_eq!(f32, size.width(), 30.0, epsilon = 1e-4);
//! assert_approx_eq!(f32, size.height(), 10.0);
//! ```

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::{Insets, Point, Size},
};

/// Estimated advance of one character, as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Uniform padding around label text, in pixels.
pub const LABEL_PADDING: f32 = 4.0;

/// Horizontal alignment of text relative to its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the horizontal center of the text
    #[default]
    Middle,
    /// Position is the left edge of the text
    Start,
}

impl TextAnchor {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Middle => "middle",
            Self::Start => "start",
        }
    }
}

/// Defines the visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `16` |
/// | Bold | `true` |
/// | Text color | `None` (SVG default, typically black) |
/// | Halo | `true` (white outline behind glyphs) |
/// | Padding | 4px on all sides |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    color: Option<Color>,
    halo: bool,
    padding: Insets,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets whether the text renders in bold.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Sets whether a white halo is drawn behind the glyphs.
    pub fn set_halo(&mut self, halo: bool) {
        self.halo = halo;
    }

    /// Sets the padding around the text content.
    ///
    /// Padding is part of the measured size, so it widens the gap the label
    /// placement keeps between neighbouring labels.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Returns a copy with the given color (builder style).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns a copy with the given font size (builder style).
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    fn bold(&self) -> bool {
        self.bold
    }

    fn halo(&self) -> bool {
        self.halo
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 16,
            bold: true,
            color: None,
            halo: true,
            padding: Insets::uniform(LABEL_PADDING),
        }
    }
}

/// A renderable text element combining content with styling.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Calculate the total size required to display this text, including padding.
    pub fn calculate_size(&self) -> Size {
        self.calculate_size_without_padding()
            .add_padding(self.definition.padding())
    }

    /// Estimated size of the glyphs alone.
    fn calculate_size_without_padding(&self) -> Size {
        if self.content.is_empty() {
            return Size::default();
        }

        let font_size = self.definition.font_size() as f32;
        let chars = self.content.chars().count() as f32;
        Size::new(chars * font_size * CHAR_WIDTH_FACTOR, font_size)
    }

    /// Renders the text onto the [`RenderLayer::Label`] layer.
    ///
    /// `position` is vertically centered; horizontally it is interpreted per
    /// `anchor`.
    pub fn render_to_layers(&self, position: Point, anchor: TextAnchor) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut rendered = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", anchor.to_svg_value())
            .set("dominant-baseline", "middle")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.bold() {
            rendered = rendered.set("font-weight", 700);
        }

        if let Some(color) = self.definition.color() {
            rendered = rendered
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        if self.definition.halo() {
            rendered = rendered
                .set("stroke", "white")
                .set("stroke-width", 3)
                .set("stroke-linejoin", "round")
                .set("paint-order", "stroke");
        }

        rendered = rendered.add(SvgText::new(self.content));
        output.add_to_layer(RenderLayer::Label, Box::new(rendered));
        output
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 16);
        assert_eq!(def.font_family(), "sans-serif");
        assert!(def.color().is_none());
        assert_approx_eq!(f32, def.padding().horizontal_sum(), 2.0 * LABEL_PADDING);
        assert_approx_eq!(f32, def.padding().vertical_sum(), 2.0 * LABEL_PADDING);
    }

    #[test]
    fn test_text_definition_builders() {
        let def = TextDefinition::new()
            .with_font_size(13)
            .with_color(Color::new("#FF6E6C").unwrap());
        assert_eq!(def.font_size(), 13);
        assert!(def.color().is_some());
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        // Only padding remains
        assert_approx_eq!(f32, size.width(), 2.0 * LABEL_PADDING);
        assert_approx_eq!(f32, size.height(), 2.0 * LABEL_PADDING);
    }

    #[test]
    fn test_text_calculate_size_counts_chars_not_bytes() {
        let mut def = TextDefinition::new();
        def.set_padding(Insets::uniform(0.0));
        def.set_font_size(10);

        // "·" and "°" are multi-byte in UTF-8
        let size = Text::new(&def, "Mg·sin(30°)").calculate_size();
        assert_approx_eq!(f32, size.width(), 11.0 * 10.0 * CHAR_WIDTH_FACTOR);
        assert_approx_eq!(f32, size.height(), 10.0);
    }

    #[test]
    fn test_text_calculate_size_short_label() {
        let mut def = TextDefinition::new();
        def.set_padding(Insets::uniform(0.0));
        def.set_font_size(10);

        // 5 × 10 × 0.6 is not exact in f32
        let size = Text::new(&def, "T=20N").calculate_size();
        assert_approx_eq!(f32, size.width(), 30.0, epsilon = 1e-4);
        assert_approx_eq!(f32, size.height(), 10.0);
    }

    #[test]
    fn test_text_calculate_size_includes_padding() {
        let mut def = TextDefinition::new();
        def.set_padding(Insets::uniform(0.0));
        let bare = Text::new(&def, "Test").calculate_size();

        def.set_padding(Insets::uniform(20.0));
        let padded = Text::new(&def, "Test").calculate_size();

        assert_approx_eq!(f32, padded.width() - bare.width(), 40.0);
        assert_approx_eq!(f32, padded.height() - bare.height(), 40.0);
    }

    #[test]
    fn test_text_render_to_layers() {
        let def = TextDefinition::new().with_color(Color::new("#007AFF").unwrap());
        let output =
            Text::new(&def, "Mg=98.0N").render_to_layers(Point::new(100.0, 50.0), TextAnchor::Start);

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("Mg=98.0N"));
        assert!(rendered.contains("text-anchor=\"start\""));
        assert!(rendered.contains("font-weight=\"700\""));
        assert!(rendered.contains("paint-order=\"stroke\""));
    }

    #[test]
    fn test_text_without_halo() {
        let mut def = TextDefinition::new();
        def.set_halo(false);
        def.set_bold(false);
        let output = Text::new(&def, "θ = 30°").render_to_layers(Point::default(), TextAnchor::Middle);

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(!rendered.contains("paint-order"));
        assert!(!rendered.contains("font-weight"));
    }
}
