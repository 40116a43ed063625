//! Free-body diagram layout.
//!
//! [`layout_diagram`] projects resolved forces onto the canvas described by a
//! [`GeometryFrame`] and produces an ordered list of [`DrawablePrimitive`]s:
//! the static incline geometry first, then the block, then every visible
//! force as a shaft, an arrowhead, and a collision-checked label.
//!
//! Labels are placed in a fixed order (weight, normal, weight components,
//! tension, push, friction); see [`labels`] for the placement rules.
//!
//! Layout is deterministic: the same parameters and frame always produce an
//! identical [`Diagram`].

pub mod frame;
pub mod labels;
pub mod vectors;

use bumpalo::Bump;
use log::{debug, trace};

use incline_core::{
    color::Color,
    draw::{DrawablePrimitive, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::{Bounds, Point, Size},
    params::{MotionDirection, ParameterSet},
};

use crate::physics::ForceResult;

pub use frame::{FrameConfig, GeometryFrame, OffsetPoint};
pub use labels::LabelPlacer;
pub use vectors::ForceArrow;

/// How far the ground extends left of the incline origin.
const GROUND_LEFT_EXTENT: f32 = 280.0;
/// How far the ground extends right of the incline top.
const GROUND_RIGHT_EXTENT: f32 = 60.0;
const ANGLE_ARC_RADIUS: f32 = 60.0;
const ANGLE_CAPTION_OFFSET: Point = Point::new(80.0, 20.0);

const GROUND_STROKE_WIDTH: f32 = 3.0;
const INCLINE_STROKE_WIDTH: f32 = 5.0;
const ARC_STROKE_WIDTH: f32 = 3.0;
const BLOCK_STROKE_WIDTH: f32 = 3.0;
const FORCE_STROKE_WIDTH: f32 = 4.0;

/// Label offsets from the middle of each force shaft.
const WEIGHT_LABEL_OFFSET: Point = Point::new(40.0, 0.0);
const NORMAL_LABEL_OFFSET: Point = Point::new(-45.0, -25.0);
const TENSION_LABEL_OFFSET: Point = Point::new(0.0, -25.0);
const PUSH_LABEL_OFFSET: Point = Point::new(0.0, -22.0);
const FRICTION_LABEL_OFFSET_UP: Point = Point::new(0.0, 28.0);
const FRICTION_LABEL_OFFSET_DOWN: Point = Point::new(0.0, -28.0);

/// Left anchors of the weight component labels, relative to the block.
const PARALLEL_COMPONENT_ANCHOR: Point = Point::new(70.0, 80.0);
const PERPENDICULAR_COMPONENT_ANCHOR: Point = Point::new(-95.0, 50.0);

/// The forces a diagram can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceKind {
    Weight,
    Normal,
    Tension,
    Push,
    Friction,
}

/// A force that was drawn, with its screen geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceVector {
    kind: ForceKind,
    arrow: ForceArrow,
    label: Bounds,
}

impl ForceVector {
    pub fn kind(&self) -> ForceKind {
        self.kind
    }

    pub fn arrow(&self) -> ForceArrow {
        self.arrow
    }

    /// The accepted label box.
    pub fn label(&self) -> Bounds {
        self.label
    }
}

/// A laid-out free-body diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    canvas: Size,
    primitives: Vec<DrawablePrimitive>,
    vectors: Vec<ForceVector>,
}

impl Diagram {
    /// Canvas size the primitives are positioned in.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// All primitives in draw order.
    pub fn primitives(&self) -> &[DrawablePrimitive] {
        &self.primitives
    }

    /// The force vectors that were drawn, in placement order.
    pub fn vectors(&self) -> &[ForceVector] {
        &self.vectors
    }

    /// Returns the drawn vector of the given kind, if any.
    pub fn vector(&self, kind: ForceKind) -> Option<&ForceVector> {
        self.vectors.iter().find(|vector| vector.kind == kind)
    }

    /// Collision-checked labels as `(text, box)` pairs in placement order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, Bounds)> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawablePrimitive::Label { text, bounds, .. } => Some((text.as_str(), *bounds)),
            _ => None,
        })
    }
}

/// Lays out the diagram for `params` and its resolved `forces` in `frame`.
///
/// # Examples
///
/// ```
/// # use incline::layout::{layout_diagram, FrameConfig, GeometryFrame, ForceKind};
/// # use incline::physics::resolve_forces;
/// # use incline_core::params::ParameterSet;
/// let params = ParameterSet::default().with_weight_panel(true);
/// let forces = resolve_forces(&params);
/// let frame = GeometryFrame::compute(FrameConfig::default(), &params, &forces);
///
/// let diagram = layout_diagram(&params, &forces, &frame);
/// assert!(diagram.vector(ForceKind::Weight).is_some());
/// assert!(diagram.vector(ForceKind::Friction).is_none());
/// ```
pub fn layout_diagram(params: &ParameterSet, forces: &ForceResult, frame: &GeometryFrame) -> Diagram {
    let arena = Bump::new();
    let mut pass = LayoutPass {
        frame,
        placer: LabelPlacer::new(&arena, frame.config().collision_avoidance()),
        primitives: Vec::new(),
        vectors: Vec::new(),
    };

    pass.add_surface(params);
    pass.add_block(params);

    if params.weight_panel_enabled() {
        pass.add_weight_panel(params, forces);
    }

    if params.tension_enabled() && forces.tension() > 0.0 {
        pass.add_force(
            ForceKind::Tension,
            frame.offset_point(OffsetPoint::Right),
            frame.up_slope(),
            forces.tension(),
            format!("T={}N", forces.tension()),
            TENSION_LABEL_OFFSET,
        );
    }

    if params.push_active() {
        pass.add_force(
            ForceKind::Push,
            frame.push_origin(),
            Point::new(1.0, 0.0),
            forces.push(),
            format!("P={}N", forces.push()),
            PUSH_LABEL_OFFSET,
        );
    }

    let motion = params.motion_direction();
    if motion.engages_friction() && forces.friction() > 0.0 {
        // Friction opposes the impending motion.
        let (origin, label_offset) = match motion {
            MotionDirection::UpSlope => (OffsetPoint::Left, FRICTION_LABEL_OFFSET_UP),
            _ => (OffsetPoint::Right, FRICTION_LABEL_OFFSET_DOWN),
        };
        pass.add_force(
            ForceKind::Friction,
            frame.offset_point(origin),
            frame.up_slope().scale(motion.friction_sign()),
            forces.friction(),
            format!("F_f={:.1}N", forces.friction()),
            label_offset,
        );
    }

    debug!(
        primitives = pass.primitives.len(),
        vectors = pass.vectors.len(),
        placed_labels = pass.placer.placed().len();
        "Diagram laid out"
    );

    Diagram {
        canvas: frame.canvas(),
        primitives: pass.primitives,
        vectors: pass.vectors,
    }
}

/// State of one layout pass; the label placer borrows the pass arena.
struct LayoutPass<'a, 'bump> {
    frame: &'a GeometryFrame,
    placer: LabelPlacer<'bump>,
    primitives: Vec<DrawablePrimitive>,
    vectors: Vec<ForceVector>,
}

impl LayoutPass<'_, '_> {
    fn add_surface(&mut self, params: &ParameterSet) {
        let frame = self.frame;
        let palette = frame.config().palette();
        let origin = frame.origin();

        self.primitives.push(DrawablePrimitive::Segment {
            start: origin.with_x(origin.x() - GROUND_LEFT_EXTENT),
            end: origin.with_x(frame.incline_end().x() + GROUND_RIGHT_EXTENT),
            stroke: StrokeDefinition::solid(palette.ground, GROUND_STROKE_WIDTH),
            layer: RenderLayer::Surface,
        });

        self.primitives.push(DrawablePrimitive::Segment {
            start: origin,
            end: frame.incline_end(),
            stroke: StrokeDefinition::solid(palette.incline, INCLINE_STROKE_WIDTH),
            layer: RenderLayer::Surface,
        });

        if params.angle() > 0.0 {
            self.primitives.push(DrawablePrimitive::Arc {
                center: origin,
                radius: ANGLE_ARC_RADIUS,
                sweep_rad: frame.angle_rad(),
                stroke: StrokeDefinition::solid(palette.angle_marker, ARC_STROKE_WIDTH),
            });

            let mut definition = TextDefinition::new()
                .with_font_size(frame.config().caption_font_size())
                .with_color(palette.angle_marker);
            definition.set_halo(false);

            self.primitives.push(DrawablePrimitive::Caption {
                position: origin.add_point(ANGLE_CAPTION_OFFSET),
                text: format!("θ = {}°", params.angle()),
                definition,
            });
        }
    }

    fn add_block(&mut self, params: &ParameterSet) {
        let palette = self.frame.config().palette();
        self.primitives.push(DrawablePrimitive::Block {
            center: self.frame.block_center(),
            size: self.frame.block_size(),
            rotation_deg: params.angle() as f32,
            fill: palette.block_fill,
            stroke: StrokeDefinition::solid(palette.block_stroke, BLOCK_STROKE_WIDTH),
        });
    }

    fn add_weight_panel(&mut self, params: &ParameterSet, forces: &ForceResult) {
        let frame = self.frame;

        self.add_force(
            ForceKind::Weight,
            frame.offset_point(OffsetPoint::Center),
            Point::new(0.0, 1.0),
            forces.weight(),
            format!("Mg={:.1}N", forces.weight()),
            WEIGHT_LABEL_OFFSET,
        );

        self.add_force(
            ForceKind::Normal,
            frame.offset_point(OffsetPoint::Center),
            frame.surface_normal(),
            forces.normal(),
            format!("R_N={:.1}N", forces.normal()),
            NORMAL_LABEL_OFFSET,
        );

        if params.angle() > 0.0 {
            let angle = params.angle();
            self.add_component_label(format!("Mg·sin({angle}°)"), PARALLEL_COMPONENT_ANCHOR);
            self.add_component_label(format!("Mg·cos({angle}°)"), PERPENDICULAR_COMPONENT_ANCHOR);
        }
    }

    /// Adds a label-only weight component annotation, left-aligned at
    /// `block_center + anchor`.
    fn add_component_label(&mut self, text: String, anchor: Point) {
        let frame = self.frame;
        let config = frame.config();
        let definition = TextDefinition::new()
            .with_font_size(config.component_font_size())
            .with_color(config.palette().weight_component);

        let size = Text::new(&definition, &text).calculate_size();
        let left = frame.block_center().add_point(anchor);
        let preferred = left.add_point(Point::new(size.width() / 2.0, 0.0));
        let bounds = self.placer.place(preferred, size);

        self.primitives.push(DrawablePrimitive::Label {
            text,
            bounds,
            definition,
        });
    }

    /// Adds the shaft, arrowhead, and label of one force.
    ///
    /// Nothing is added when the scaled vector is shorter than a pixel.
    fn add_force(
        &mut self,
        kind: ForceKind,
        origin: Point,
        direction: Point,
        magnitude: f64,
        text: String,
        label_offset: Point,
    ) {
        let frame = self.frame;
        let length = magnitude as f32 * frame.force_scale();
        let Some(arrow) = ForceArrow::from_origin(origin, direction, length) else {
            trace!(kind:?, length = length; "Force vector below one pixel, skipped");
            return;
        };

        let color = force_color(frame.config(), kind);
        let definition = TextDefinition::new()
            .with_font_size(frame.config().force_font_size())
            .with_color(color);

        self.primitives.push(DrawablePrimitive::Segment {
            start: arrow.start(),
            end: arrow.end(),
            stroke: StrokeDefinition::solid(color, FORCE_STROKE_WIDTH),
            layer: RenderLayer::Force,
        });
        self.primitives.push(DrawablePrimitive::Arrowhead {
            points: arrow.arrowhead(),
            fill: color,
        });

        let size = Text::new(&definition, &text).calculate_size();
        let bounds = self
            .placer
            .place(arrow.midpoint().add_point(label_offset), size);

        self.primitives.push(DrawablePrimitive::Label {
            text,
            bounds,
            definition,
        });
        self.vectors.push(ForceVector {
            kind,
            arrow,
            label: bounds,
        });
    }
}

fn force_color(config: &FrameConfig, kind: ForceKind) -> Color {
    let palette = config.palette();
    match kind {
        ForceKind::Weight => palette.weight,
        ForceKind::Normal => palette.normal,
        ForceKind::Tension => palette.tension,
        ForceKind::Push => palette.push,
        ForceKind::Friction => palette.friction,
    }
}
