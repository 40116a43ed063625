//! Static force resolution for a block on an incline.
//!
//! [`resolve_forces`] is a pure function of a [`ParameterSet`]: it resolves
//! the weight into incline-aligned components, adds the perpendicular part of
//! the horizontal push to the normal force, and derives the friction
//! magnitude. It never validates; callers are expected to pass clamped
//! parameters.
//!
//! Friction is stored as a magnitude only. Its direction is decided when the
//! diagram is drawn, from [`MotionDirection`](incline_core::params::MotionDirection).

use log::trace;

use incline_core::params::ParameterSet;

/// Gravitational acceleration in m/s².
pub const G: f64 = 9.8;

/// Force magnitudes derived from one [`ParameterSet`].
///
/// All values are in newtons except `angle_rad`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceResult {
    weight: f64,
    weight_parallel: f64,
    weight_perpendicular: f64,
    push_parallel: f64,
    push_perpendicular: f64,
    normal: f64,
    friction: f64,
    tension: f64,
    push: f64,
    angle_rad: f64,
}

impl ForceResult {
    /// Weight `m·g`, always acting vertically downwards.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Down-slope component of the weight.
    pub fn weight_parallel(&self) -> f64 {
        self.weight_parallel
    }

    /// Into-surface component of the weight.
    pub fn weight_perpendicular(&self) -> f64 {
        self.weight_perpendicular
    }

    /// Up-slope component of the horizontal push.
    pub fn push_parallel(&self) -> f64 {
        self.push_parallel
    }

    /// Into-surface component of the horizontal push.
    pub fn push_perpendicular(&self) -> f64 {
        self.push_perpendicular
    }

    /// Normal force exerted by the surface.
    pub fn normal(&self) -> f64 {
        self.normal
    }

    /// Friction magnitude; zero when no motion is impending.
    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    pub fn push(&self) -> f64 {
        self.push
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_rad
    }

    /// Largest magnitude among weight, normal, friction, tension, and push.
    ///
    /// The diagram scales every vector against this value.
    pub fn max_magnitude(&self) -> f64 {
        [self.normal, self.friction, self.tension, self.push]
            .into_iter()
            .fold(self.weight, f64::max)
    }
}

/// Resolves all forces acting on the block.
///
/// # Examples
///
/// ```
/// # use incline::physics::resolve_forces;
/// # use incline_core::params::ParameterSet;
/// let forces = resolve_forces(&ParameterSet::default().with_angle(30.0));
///
/// assert!((forces.weight() - 98.0).abs() < 1e-9);
/// assert!((forces.weight_parallel() - 49.0).abs() < 1e-9);
/// assert_eq!(forces.friction(), 0.0);
/// ```
pub fn resolve_forces(params: &ParameterSet) -> ForceResult {
    let angle_rad = params.angle_rad();
    let (sin, cos) = angle_rad.sin_cos();

    let weight = params.mass() * G;
    let weight_parallel = weight * sin;
    let weight_perpendicular = weight * cos;

    let push = params.push_magnitude();
    let push_parallel = push * cos;
    let push_perpendicular = push * sin;

    let normal = weight_perpendicular + push_perpendicular;

    let friction = if params.motion_direction().engages_friction() {
        params.friction_coefficient() * normal
    } else {
        0.0
    };

    let result = ForceResult {
        weight,
        weight_parallel,
        weight_perpendicular,
        push_parallel,
        push_perpendicular,
        normal,
        friction,
        tension: params.tension_magnitude(),
        push,
        angle_rad,
    };

    trace!(result:?; "Forces resolved");
    result
}
