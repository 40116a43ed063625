//! Label collision avoidance.
//!
//! Labels are placed one at a time in a fixed order. Each accepted box is
//! recorded, and a later label whose preferred box intersects any recorded
//! box walks an outward spiral until it finds free space. Earlier labels
//! never move, so the placement order decides who yields.
//!
//! The spiral visits `k = 1..=25`, turning `45°` and growing `10 px` per
//! step. If every candidate collides the last one is accepted, so placement
//! always succeeds.

use bumpalo::{Bump, collections::Vec as BumpVec};
use log::trace;

use incline_core::geometry::{Bounds, Point, Size};

/// Number of spiral candidates tried before giving up.
pub const MAX_ATTEMPTS: u32 = 25;

const SPIRAL_STEP_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
const SPIRAL_STEP_RADIUS: f32 = 10.0;

/// Accumulates the label boxes placed during one layout pass.
///
/// The boxes live in a caller-provided arena and are dropped with it when
/// the pass ends.
#[derive(Debug)]
pub struct LabelPlacer<'bump> {
    placed: BumpVec<'bump, Bounds>,
    avoid_collisions: bool,
}

impl<'bump> LabelPlacer<'bump> {
    /// Creates an empty placer backed by `arena`.
    ///
    /// With `avoid_collisions` off every label is accepted at its preferred
    /// position.
    pub fn new(arena: &'bump Bump, avoid_collisions: bool) -> Self {
        Self {
            placed: BumpVec::new_in(arena),
            avoid_collisions,
        }
    }

    /// Places a label of `size` as close to `preferred` (its center) as the
    /// already placed labels allow, and records the accepted box.
    pub fn place(&mut self, preferred: Point, size: Size) -> Bounds {
        let preferred_box = Bounds::new_from_center(preferred, size);

        let accepted = if !self.avoid_collisions || !self.overlaps_any(&preferred_box) {
            preferred_box
        } else {
            self.search_spiral(preferred, size)
        };

        self.placed.push(accepted);
        accepted
    }

    /// Boxes accepted so far, in placement order.
    pub fn placed(&self) -> &[Bounds] {
        &self.placed
    }

    fn overlaps_any(&self, candidate: &Bounds) -> bool {
        self.placed.iter().any(|placed| placed.intersects(candidate))
    }

    fn search_spiral(&self, preferred: Point, size: Size) -> Bounds {
        let mut candidate = Bounds::new_from_center(preferred, size);

        for attempt in 1..=MAX_ATTEMPTS {
            let step = attempt as f32;
            let offset = Point::from_angle(step * SPIRAL_STEP_ANGLE).scale(step * SPIRAL_STEP_RADIUS);
            candidate = Bounds::new_from_center(preferred.add_point(offset), size);

            if !self.overlaps_any(&candidate) {
                trace!(attempt = attempt; "Label moved to free spiral position");
                return candidate;
            }
        }

        trace!(attempts = MAX_ATTEMPTS; "Spiral search exhausted, accepting last candidate");
        candidate
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    const SIZE: Size = Size::new(40.0, 20.0);

    #[test]
    fn test_first_label_takes_preferred_position() {
        let arena = Bump::new();
        let mut placer = LabelPlacer::new(&arena, true);

        let placed = placer.place(Point::new(100.0, 100.0), SIZE);
        assert_eq!(placed.center(), Point::new(100.0, 100.0));
        assert_eq!(placer.placed().len(), 1);
    }

    #[test]
    fn test_touching_labels_do_not_move() {
        let arena = Bump::new();
        let mut placer = LabelPlacer::new(&arena, true);

        placer.place(Point::new(100.0, 100.0), SIZE);
        // Shares the right edge of the first box exactly
        let placed = placer.place(Point::new(140.0, 100.0), SIZE);
        assert_eq!(placed.center(), Point::new(140.0, 100.0));
    }

    #[test]
    fn test_colliding_label_follows_spiral() {
        let arena = Bump::new();
        let mut placer = LabelPlacer::new(&arena, true);

        let first = placer.place(Point::new(100.0, 100.0), SIZE);
        let second = placer.place(Point::new(100.0, 100.0), SIZE);

        assert!(!first.intersects(&second));
        // Every spiral candidate is 10·k from the preferred center
        let moved = second.center().sub_point(Point::new(100.0, 100.0)).hypot();
        let step = (moved / 10.0).round();
        assert!(step >= 1.0);
        assert_approx_eq!(f32, moved, step * 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_spiral_candidate_sequence() {
        let arena = Bump::new();
        let mut placer = LabelPlacer::new(&arena, true);

        // A 10x10 box collides with k = 1 (offset ~(7.07, 7.07)) and is
        // cleared by k = 2 (offset (0, 20)).
        let small = Size::new(10.0, 10.0);
        placer.place(Point::new(0.0, 0.0), small);
        let placed = placer.place(Point::new(0.0, 0.0), small);

        assert_approx_eq!(f32, placed.center().x(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, placed.center().y(), 20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_exhausted_search_accepts_last_candidate() {
        let arena = Bump::new();
        let mut placer = LabelPlacer::new(&arena, true);

        // One huge box covers every candidate
        placer.place(Point::new(0.0, 0.0), Size::new(2000.0, 2000.0));
        let placed = placer.place(Point::new(0.0, 0.0), SIZE);

        let last = Point::from_angle(25.0 * SPIRAL_STEP_ANGLE).scale(250.0);
        assert_approx_eq!(f32, placed.center().x(), last.x(), epsilon = 1e-3);
        assert_approx_eq!(f32, placed.center().y(), last.y(), epsilon = 1e-3);
        assert_eq!(placer.placed().len(), 2);
    }

    #[test]
    fn test_disabled_avoidance_keeps_preferred() {
        let arena = Bump::new();
        let mut placer = LabelPlacer::new(&arena, false);

        let first = placer.place(Point::new(50.0, 50.0), SIZE);
        let second = placer.place(Point::new(50.0, 50.0), SIZE);

        assert_eq!(first, second);
        assert_eq!(placer.placed().len(), 2);
    }
}
