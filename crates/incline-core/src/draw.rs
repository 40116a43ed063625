//! Visual definitions and drawable primitives.
//!
//! - [`StrokeDefinition`], [`TextDefinition`]: reusable style descriptions
//! - [`Text`]: measurable, renderable text
//! - [`DrawablePrimitive`]: the layout engine's output vocabulary
//! - [`LayeredOutput`], [`RenderLayer`]: z-ordered SVG assembly

mod layer;
mod primitive;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::DrawablePrimitive;
pub use stroke::StrokeDefinition;
pub use text::{CHAR_WIDTH_FACTOR, LABEL_PADDING, Text, TextAnchor, TextDefinition};
