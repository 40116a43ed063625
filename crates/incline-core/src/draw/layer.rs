//! Layer-based rendering system for SVG output.
//!
//! Drawable primitives declare which z-order layer their SVG elements belong
//! to, so that labels always sit above arrows and arrows above the block no
//! matter the order primitives were produced in.
//!
//! # Example
//!
//! ```
//! # use incline_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Line, Text};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Label, Box::new(Text::new("Mg")));
//! output.add_to_layer(RenderLayer::Force, Box::new(Line::new()));
//!
//! // Force renders before Label
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill
    Background,
    /// Ground, incline surface, and angle marker
    Surface,
    /// The block resting on the incline
    Block,
    /// Force vector shafts and arrowheads
    Force,
    /// Text labels and captions
    Label,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Block => "block",
            Self::Force => "force",
            Self::Label => "label",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// When rendered, nodes are emitted in layer order (bottom to top); within a
/// layer, insertion order is preserved.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Line, Rectangle, Text};

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Block, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Force, Box::new(Line::new()));

        output1.merge(output2);

        let nodes = output1.render();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Force, Box::new(Line::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Force, Box::new(Line::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 1);
    }

    #[test]
    fn test_layered_output_orders_layers() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Label, Box::new(Text::new("R_N")));
        output.add_to_layer(RenderLayer::Surface, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Force, Box::new(Line::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("data-layer=\"surface\""));
        assert!(rendered[1].contains("data-layer=\"force\""));
        assert!(rendered[2].contains("data-layer=\"label\""));
    }
}
