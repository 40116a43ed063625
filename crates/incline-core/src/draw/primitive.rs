//! Drawable primitives produced by the layout engine.
//!
//! A laid-out diagram is an ordered list of [`DrawablePrimitive`]s. Each
//! primitive knows its screen-space geometry and style and how to render
//! itself into a [`LayeredOutput`]; it carries no physics.

use std::fmt::Write as _;

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor, TextDefinition},
    geometry::{Bounds, Point, Size},
};

/// A single screen-space drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawablePrimitive {
    /// A straight line: ground, incline surface, or a force shaft.
    Segment {
        start: Point,
        end: Point,
        stroke: StrokeDefinition,
        layer: RenderLayer,
    },
    /// A filled triangle; the first point is the tip.
    Arrowhead { points: [Point; 3], fill: Color },
    /// A collision-checked text label. `bounds` is the accepted box,
    /// padding included; the text is drawn centered in it.
    Label {
        text: String,
        bounds: Bounds,
        definition: TextDefinition,
    },
    /// The square block, rotated counter-clockwise by `rotation_deg`.
    Block {
        center: Point,
        size: f32,
        rotation_deg: f32,
        fill: Color,
        stroke: StrokeDefinition,
    },
    /// Angle marker: an arc from the positive x axis sweeping
    /// counter-clockwise (on screen) by `sweep_rad`.
    Arc {
        center: Point,
        radius: f32,
        sweep_rad: f32,
        stroke: StrokeDefinition,
    },
    /// Free text that does not take part in label collision avoidance.
    /// `position` is the left edge, vertically centered.
    Caption {
        position: Point,
        text: String,
        definition: TextDefinition,
    },
}

impl DrawablePrimitive {
    /// The layer this primitive renders onto.
    pub fn layer(&self) -> RenderLayer {
        match self {
            Self::Segment { layer, .. } => *layer,
            Self::Arrowhead { .. } => RenderLayer::Force,
            Self::Label { .. } | Self::Caption { .. } => RenderLayer::Label,
            Self::Block { .. } => RenderLayer::Block,
            Self::Arc { .. } => RenderLayer::Surface,
        }
    }

    /// Returns the label box if this primitive is a collision-checked label.
    pub fn label_bounds(&self) -> Option<Bounds> {
        match self {
            Self::Label { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    /// Returns the rendered text of labels and captions.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Label { text, .. } | Self::Caption { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Renders this primitive to SVG nodes grouped by layer.
    pub fn render_to_layers(&self) -> LayeredOutput {
        match self {
            Self::Segment {
                start, end, stroke, ..
            } => {
                let mut output = LayeredOutput::new();
                let line = svg_element::Line::new()
                    .set("x1", start.x())
                    .set("y1", start.y())
                    .set("x2", end.x())
                    .set("y2", end.y());
                let line = apply_stroke!(line, stroke);
                output.add_to_layer(self.layer(), Box::new(line));
                output
            }
            Self::Arrowhead { points, fill } => {
                let mut output = LayeredOutput::new();
                let polygon = svg_element::Polygon::new()
                    .set("points", format_points(points))
                    .set("fill", fill.to_string())
                    .set("fill-opacity", fill.alpha());
                output.add_to_layer(self.layer(), Box::new(polygon));
                output
            }
            Self::Label {
                text,
                bounds,
                definition,
            } => Text::new(definition, text).render_to_layers(bounds.center(), TextAnchor::Middle),
            Self::Block {
                center,
                size,
                rotation_deg,
                fill,
                stroke,
            } => {
                let mut output = LayeredOutput::new();
                let top_left = Bounds::new_from_center(*center, Size::new(*size, *size)).min_point();
                let rect = svg_element::Rectangle::new()
                    .set("x", top_left.x())
                    .set("y", top_left.y())
                    .set("width", *size)
                    .set("height", *size)
                    .set("fill", fill.to_string())
                    .set("fill-opacity", fill.alpha());
                let mut rect = apply_stroke!(rect, stroke);
                if *rotation_deg != 0.0 {
                    // SVG rotates clockwise for positive angles
                    rect = rect.set(
                        "transform",
                        format!("rotate({} {} {})", -rotation_deg, center.x(), center.y()),
                    );
                }
                output.add_to_layer(self.layer(), Box::new(rect));
                output
            }
            Self::Arc {
                center,
                radius,
                sweep_rad,
                stroke,
            } => {
                let mut output = LayeredOutput::new();
                let start = center.add_point(Point::new(*radius, 0.0));
                let end = center.add_point(Point::new(
                    radius * sweep_rad.cos(),
                    -radius * sweep_rad.sin(),
                ));
                let data = svg_element::path::Data::new()
                    .move_to((start.x(), start.y()))
                    .elliptical_arc_to(vec![*radius, *radius, 0.0, 0.0, 0.0, end.x(), end.y()]);
                let path = svg_element::Path::new().set("d", data).set("fill", "none");
                let path = apply_stroke!(path, stroke);
                output.add_to_layer(self.layer(), Box::new(path));
                output
            }
            Self::Caption {
                position,
                text,
                definition,
            } => Text::new(definition, text).render_to_layers(*position, TextAnchor::Start),
        }
    }
}

fn format_points(points: &[Point; 3]) -> String {
    let mut out = String::new();
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", point.x(), point.y());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(primitive: &DrawablePrimitive) -> String {
        primitive
            .render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_segment_renders_line_on_its_layer() {
        let segment = DrawablePrimitive::Segment {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
            stroke: StrokeDefinition::solid(Color::new("#666666").unwrap(), 3.0),
            layer: RenderLayer::Surface,
        };
        assert_eq!(segment.layer(), RenderLayer::Surface);

        let rendered = render(&segment);
        assert!(rendered.contains("<line"));
        assert!(rendered.contains("data-layer=\"surface\""));
        assert!(rendered.contains("x2=\"10\""));
    }

    #[test]
    fn test_arrowhead_points_format() {
        let arrow = DrawablePrimitive::Arrowhead {
            points: [
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Point::new(5.0, 6.0),
            ],
            fill: Color::new("red").unwrap(),
        };
        assert_eq!(arrow.layer(), RenderLayer::Force);
        assert!(render(&arrow).contains("points=\"1,2 3,4 5,6\""));
    }

    #[test]
    fn test_block_rotation_is_counter_clockwise() {
        let block = DrawablePrimitive::Block {
            center: Point::new(100.0, 100.0),
            size: 45.0,
            rotation_deg: 30.0,
            fill: Color::new("#FFD700").unwrap(),
            stroke: StrokeDefinition::solid(Color::new("#383838").unwrap(), 3.0),
        };
        let rendered = render(&block);
        assert!(rendered.contains("rotate(-30 100 100)"));
        assert!(rendered.contains("x=\"77.5\""));
    }

    #[test]
    fn test_flat_block_has_no_transform() {
        let block = DrawablePrimitive::Block {
            center: Point::new(50.0, 50.0),
            size: 10.0,
            rotation_deg: 0.0,
            fill: Color::default(),
            stroke: StrokeDefinition::solid(Color::default(), 1.0),
        };
        assert!(!render(&block).contains("transform"));
    }

    #[test]
    fn test_label_accessors() {
        let bounds = Bounds::new_from_center(Point::new(10.0, 10.0), Size::new(20.0, 8.0));
        let label = DrawablePrimitive::Label {
            text: "T=20N".to_string(),
            bounds,
            definition: TextDefinition::new(),
        };
        assert_eq!(label.label_bounds(), Some(bounds));
        assert_eq!(label.text(), Some("T=20N"));
        assert!(render(&label).contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_caption_is_not_a_collision_label() {
        let caption = DrawablePrimitive::Caption {
            position: Point::new(480.0, 380.0),
            text: "θ = 30°".to_string(),
            definition: TextDefinition::new(),
        };
        assert_eq!(caption.label_bounds(), None);
        assert_eq!(caption.layer(), RenderLayer::Label);
        assert!(render(&caption).contains("text-anchor=\"start\""));
    }

    #[test]
    fn test_arc_renders_path() {
        let arc = DrawablePrimitive::Arc {
            center: Point::new(400.0, 360.0),
            radius: 60.0,
            sweep_rad: std::f32::consts::FRAC_PI_2,
            stroke: StrokeDefinition::solid(Color::new("#007AFF").unwrap(), 3.0),
        };
        let rendered = render(&arc);
        assert!(rendered.contains("<path"));
        assert!(rendered.contains("fill=\"none\""));
        assert!(rendered.contains("460"));
    }
}
