//! Screen-space frame of a diagram.
//!
//! [`FrameConfig`] carries the fixed dimensions and typography of a diagram
//! variant; [`GeometryFrame`] combines it with one parameter set to locate the
//! incline, the block, and the force scale.

use incline_core::{
    color::ForcePalette,
    geometry::{Point, Size},
    params::ParameterSet,
};

use crate::{config::DiagramVariant, physics::ForceResult};

/// Length of the incline surface in pixels.
pub const INCLINE_LENGTH: f32 = 280.0;

/// Side length of the block in pixels.
pub const BLOCK_SIZE: f32 = 45.0;

/// Distance of the force offset points from the block center.
pub const OFFSET_DISTANCE: f32 = 18.0;

/// Upper bound of pixels per newton.
pub const MAX_FORCE_SCALE: f32 = 0.7;

/// Fixed dimensions, typography, and palette of a diagram variant.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    canvas: Size,
    padding: f32,
    force_font_size: u16,
    component_font_size: u16,
    caption_font_size: u16,
    collision_avoidance: bool,
    palette: ForcePalette,
}

impl FrameConfig {
    /// Creates the frame configuration of a rendering variant.
    pub fn for_variant(variant: DiagramVariant) -> Self {
        match variant {
            DiagramVariant::Full => Self {
                canvas: Size::new(800.0, 600.0),
                padding: 60.0,
                force_font_size: 16,
                component_font_size: 15,
                caption_font_size: 18,
                collision_avoidance: true,
                palette: ForcePalette::default(),
            },
            DiagramVariant::Compact => Self {
                canvas: Size::new(600.0, 450.0),
                padding: 60.0,
                force_font_size: 13,
                component_font_size: 12,
                caption_font_size: 14,
                collision_avoidance: false,
                palette: ForcePalette::default(),
            },
        }
    }

    pub fn with_collision_avoidance(mut self, enabled: bool) -> Self {
        self.collision_avoidance = enabled;
        self
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn force_font_size(&self) -> u16 {
        self.force_font_size
    }

    pub fn component_font_size(&self) -> u16 {
        self.component_font_size
    }

    pub fn caption_font_size(&self) -> u16 {
        self.caption_font_size
    }

    pub fn collision_avoidance(&self) -> bool {
        self.collision_avoidance
    }

    pub fn palette(&self) -> &ForcePalette {
        &self.palette
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::for_variant(DiagramVariant::default())
    }
}

/// Named points on the block that forces originate from.
///
/// `Left` and `Right` lie along the incline (down-slope and up-slope
/// respectively); `Top` is straight above the center on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetPoint {
    Center,
    Left,
    Right,
    Top,
}

/// Screen geometry of one diagram evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFrame {
    config: FrameConfig,
    angle_rad: f32,
    origin: Point,
    incline_end: Point,
    block_center: Point,
    force_scale: f32,
}

impl GeometryFrame {
    /// Places the incline and block on the canvas and derives the force scale.
    ///
    /// The incline rises to the right from `(width / 2, height · 0.6)`; the
    /// block sits halfway along it.
    pub fn compute(config: FrameConfig, params: &ParameterSet, forces: &ForceResult) -> Self {
        let canvas = config.canvas();
        let angle_rad = params.angle_rad() as f32;

        let origin = Point::new(canvas.width() / 2.0, canvas.height() * 0.6);
        let up_slope = Self::up_slope_direction(angle_rad);
        let incline_end = origin.add_point(up_slope.scale(INCLINE_LENGTH));
        let block_center = origin.add_point(up_slope.scale(INCLINE_LENGTH / 2.0));

        let available_space = (canvas.width() - 2.0 * config.padding())
            .min(canvas.height() - 2.0 * config.padding());
        let max_force = forces.max_magnitude().max(1.0) as f32;
        let force_scale = MAX_FORCE_SCALE.min(available_space / (2.0 * max_force));

        Self {
            config,
            angle_rad,
            origin,
            incline_end,
            block_center,
            force_scale,
        }
    }

    /// Screen unit vector pointing up the slope: `(cos θ, −sin θ)`.
    fn up_slope_direction(angle_rad: f32) -> Point {
        Point::new(angle_rad.cos(), -angle_rad.sin())
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn canvas(&self) -> Size {
        self.config.canvas()
    }

    pub fn angle_rad(&self) -> f32 {
        self.angle_rad
    }

    /// Bottom of the incline, where it meets the ground.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Top of the incline.
    pub fn incline_end(&self) -> Point {
        self.incline_end
    }

    pub fn block_center(&self) -> Point {
        self.block_center
    }

    pub fn block_size(&self) -> f32 {
        BLOCK_SIZE
    }

    /// Pixels per newton.
    pub fn force_scale(&self) -> f32 {
        self.force_scale
    }

    /// Unit vector pointing up the slope on screen.
    pub fn up_slope(&self) -> Point {
        Self::up_slope_direction(self.angle_rad)
    }

    /// Unit vector of the normal force on screen: `(−sin θ, −cos θ)`.
    pub fn surface_normal(&self) -> Point {
        Point::new(-self.angle_rad.sin(), -self.angle_rad.cos())
    }

    /// Returns the requested force origin on the block.
    pub fn offset_point(&self, point: OffsetPoint) -> Point {
        let center = self.block_center;
        match point {
            OffsetPoint::Center => center,
            OffsetPoint::Left => center.sub_point(self.up_slope().scale(OFFSET_DISTANCE)),
            OffsetPoint::Right => center.add_point(self.up_slope().scale(OFFSET_DISTANCE)),
            OffsetPoint::Top => center.sub_point(Point::new(0.0, OFFSET_DISTANCE)),
        }
    }

    /// Origin of the horizontal push: one block width left of the center.
    pub fn push_origin(&self) -> Point {
        self.block_center.sub_point(Point::new(BLOCK_SIZE, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::physics::resolve_forces;

    fn frame_for(params: &ParameterSet) -> GeometryFrame {
        GeometryFrame::compute(FrameConfig::default(), params, &resolve_forces(params))
    }

    #[test]
    fn test_variant_dimensions() {
        let full = FrameConfig::for_variant(DiagramVariant::Full);
        assert_eq!(full.canvas(), Size::new(800.0, 600.0));
        assert!(full.collision_avoidance());
        assert_eq!(full.force_font_size(), 16);

        let compact = FrameConfig::for_variant(DiagramVariant::Compact);
        assert_eq!(compact.canvas(), Size::new(600.0, 450.0));
        assert!(!compact.collision_avoidance());
        assert_eq!(compact.caption_font_size(), 14);
    }

    #[test]
    fn test_flat_frame_positions() {
        let frame = frame_for(&ParameterSet::default());

        assert_eq!(frame.origin(), Point::new(400.0, 360.0));
        assert_approx_eq!(f32, frame.incline_end().x(), 680.0);
        assert_approx_eq!(f32, frame.incline_end().y(), 360.0);
        assert_approx_eq!(f32, frame.block_center().x(), 540.0);
        assert_approx_eq!(f32, frame.block_center().y(), 360.0);
    }

    #[test]
    fn test_force_scale_capped() {
        // available 480 / (2 * 98) = 2.45, capped at 0.7
        let frame = frame_for(&ParameterSet::default());
        assert_approx_eq!(f32, frame.force_scale(), MAX_FORCE_SCALE);
    }

    #[test]
    fn test_force_scale_shrinks_for_large_forces() {
        let params = ParameterSet::default().with_mass(100.0);
        let frame = frame_for(&params);
        // 480 / (2 * 980)
        assert_approx_eq!(f32, frame.force_scale(), 480.0 / 1960.0, epsilon = 1e-6);
    }

    #[test]
    fn test_force_scale_counts_disabled_magnitudes() {
        let params = ParameterSet::default().with_tension(1000.0, false);
        let frame = frame_for(&params);
        assert_approx_eq!(f32, frame.force_scale(), 0.24, epsilon = 1e-6);
    }

    #[test]
    fn test_offset_points_follow_incline() {
        let params = ParameterSet::default().with_angle(90.0);
        let frame = frame_for(&params);
        let center = frame.block_center();

        let right = frame.offset_point(OffsetPoint::Right);
        assert_approx_eq!(f32, right.x(), center.x(), epsilon = 1e-4);
        assert_approx_eq!(f32, right.y(), center.y() - OFFSET_DISTANCE, epsilon = 1e-4);

        let left = frame.offset_point(OffsetPoint::Left);
        assert_approx_eq!(f32, left.y(), center.y() + OFFSET_DISTANCE, epsilon = 1e-4);

        let top = frame.offset_point(OffsetPoint::Top);
        assert_eq!(top, Point::new(center.x(), center.y() - OFFSET_DISTANCE));

        assert_eq!(frame.offset_point(OffsetPoint::Center), center);
    }

    #[test]
    fn test_push_origin() {
        let frame = frame_for(&ParameterSet::default());
        assert_approx_eq!(f32, frame.push_origin().x(), 495.0);
        assert_approx_eq!(f32, frame.push_origin().y(), 360.0);
    }
}
