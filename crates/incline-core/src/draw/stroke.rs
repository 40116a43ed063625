//! Stroke definitions for lines and outlines.
//!
//! Every line in a free-body diagram is solid, so a stroke is just a color
//! and a width. [`apply_stroke!`](crate::apply_stroke!) maps it onto the
//! `stroke`, `stroke-opacity`, and `stroke-width` attributes.

use crate::color::Color;

/// A solid stroke for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use incline_core::draw::StrokeDefinition;
/// use incline_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("#21AD93").unwrap(), 4.0);
/// assert_eq!(stroke.width(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use incline_core::draw::StrokeDefinition;
/// use incline_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new().set("x1", 0).set("y1", 0);
///
/// let line = incline_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    };
}
