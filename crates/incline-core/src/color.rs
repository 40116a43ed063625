//! Color handling for Incline diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and [`ForcePalette`], the set of colors each force
//! vector is drawn with.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use incline_core::color::Color;
    ///
    /// let weight_blue = Color::new("#007AFF").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color, between
    /// 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Parses a color literal that is known to be valid at compile time.
    fn builtin(color_str: &str) -> Self {
        Self::new(color_str).unwrap_or_else(|err| panic!("built-in palette color: {err}"))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// Colors for every element of a free-body diagram.
///
/// Weight and its components share a blue family, the normal force is teal,
/// tension is coral, push is cyan, and friction is yellow.
#[derive(Debug, Clone, PartialEq)]
pub struct ForcePalette {
    pub weight: Color,
    pub weight_component: Color,
    pub normal: Color,
    pub tension: Color,
    pub push: Color,
    pub friction: Color,
    pub ground: Color,
    pub incline: Color,
    pub angle_marker: Color,
    pub block_fill: Color,
    pub block_stroke: Color,
}

impl Default for ForcePalette {
    fn default() -> Self {
        Self {
            weight: Color::builtin("#007AFF"),
            weight_component: Color::builtin("#0056b3"),
            normal: Color::builtin("#21AD93"),
            tension: Color::builtin("#FF6E6C"),
            push: Color::builtin("#00CED1"),
            friction: Color::builtin("#FFDE00"),
            ground: Color::builtin("#666666"),
            incline: Color::builtin("#383838"),
            angle_marker: Color::builtin("#007AFF"),
            block_fill: Color::builtin("#FFD700"),
            block_stroke: Color::builtin("#383838"),
        }
    }
}
