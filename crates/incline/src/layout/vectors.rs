//! Force vector geometry.

use std::f32::consts::FRAC_PI_6;

use incline_core::geometry::Point;

/// Length of each arrowhead side in pixels.
pub const ARROWHEAD_LENGTH: f32 = 15.0;

/// Angle between the shaft and each arrowhead side.
pub const ARROWHEAD_HALF_ANGLE: f32 = FRAC_PI_6;

/// Vectors shorter than this are not drawn at all.
pub const MIN_SEGMENT_LENGTH: f32 = 1.0;

/// The shaft of one force vector in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceArrow {
    start: Point,
    end: Point,
}

impl ForceArrow {
    /// Creates an arrow from `start` to `end`.
    ///
    /// Returns `None` for sub-pixel vectors; they are suppressed together
    /// with their arrowhead and label.
    pub fn new(start: Point, end: Point) -> Option<Self> {
        if end.sub_point(start).hypot() < MIN_SEGMENT_LENGTH {
            return None;
        }
        Some(Self { start, end })
    }

    /// Creates an arrow of `length` pixels along the unit vector `direction`.
    pub fn from_origin(origin: Point, direction: Point, length: f32) -> Option<Self> {
        Self::new(origin, origin.add_point(direction.scale(length)))
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Center of the shaft; labels are offset from here.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    pub fn length(&self) -> f32 {
        self.end.sub_point(self.start).hypot()
    }

    /// Triangle with its tip at the end of the shaft. The tip comes first.
    pub fn arrowhead(&self) -> [Point; 3] {
        let heading = self.end.sub_point(self.start).angle();
        let side = |angle: f32| {
            self.end
                .sub_point(Point::from_angle(angle).scale(ARROWHEAD_LENGTH))
        };

        [
            self.end,
            side(heading - ARROWHEAD_HALF_ANGLE),
            side(heading + ARROWHEAD_HALF_ANGLE),
        ]
    }
}
