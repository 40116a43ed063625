//! The physical parameter model of a free-body diagram.
//!
//! A [`ParameterSet`] is an immutable description of the block-on-incline
//! scenario: incline angle, mass, friction coefficient, the optional tension
//! and push forces, and the assumed direction of impending motion. Every
//! evaluation of the force model and the layout engine takes one by
//! reference; changes produce a new value through [`ParameterSet::apply`].
//!
//! # Example
//!
//! ```
//! # use incline_core::params::{MotionDirection, ParameterSet, ParameterUpdate};
//! let initial = ParameterSet::default();
//! assert_eq!(initial.mass(), 10.0);
//!
//! let update = ParameterUpdate::new()
//!     .with_tension_enabled(true)
//!     .with_motion_direction(MotionDirection::UpSlope);
//! let next = initial.apply(&update);
//!
//! assert!(next.tension_enabled());
//! assert!(!initial.tension_enabled());
//! ```

use log::debug;
use serde::Deserialize;

/// Which way the block is assumed to be about to slide.
///
/// Friction always acts opposite to this direction; with
/// [`MotionDirection::None`] no friction is engaged at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum MotionDirection {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "up", alias = "up_slope")]
    UpSlope,
    #[serde(rename = "down", alias = "down_slope")]
    DownSlope,
}

impl MotionDirection {
    /// Returns `true` if friction participates for this direction.
    pub fn engages_friction(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Sign of friction along the up-slope axis: `-1` when motion is
    /// impending up the slope, `+1` when impending down, `0` otherwise.
    pub fn friction_sign(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::UpSlope => -1.0,
            Self::DownSlope => 1.0,
        }
    }
}

/// The physical parameters of one diagram evaluation.
///
/// Domains are assumed to hold (angle in `[0, 90]`, positive mass, μ in
/// `[0, 1]`, non-negative magnitudes). Input boundaries such as scenario
/// loaders call [`ParameterSet::clamped`] to enforce them; the force model
/// itself never validates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Incline angle from horizontal, in degrees.
    angle: f64,

    /// Block mass in kilograms.
    mass: f64,

    /// Coefficient of static friction (μ).
    #[serde(alias = "mu")]
    friction_coefficient: f64,

    /// Tension magnitude in newtons, acting up the slope.
    #[serde(alias = "tension")]
    tension_magnitude: f64,

    /// Horizontal push magnitude in newtons.
    #[serde(alias = "push")]
    push_magnitude: f64,

    tension_enabled: bool,
    push_enabled: bool,

    /// Gates the weight, normal force, and weight-component annotations.
    #[serde(alias = "show_mass")]
    weight_panel_enabled: bool,

    motion_direction: MotionDirection,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            angle: 0.0,
            mass: 10.0,
            friction_coefficient: 0.3,
            tension_magnitude: 0.0,
            push_magnitude: 0.0,
            tension_enabled: false,
            push_enabled: false,
            weight_panel_enabled: false,
            motion_direction: MotionDirection::None,
        }
    }
}

/// Smallest mass the controls allow.
pub const MIN_MASS: f64 = 0.1;

impl ParameterSet {
    /// Creates the initial parameter set (see [`Default`]).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn friction_coefficient(&self) -> f64 {
        self.friction_coefficient
    }

    pub fn tension_magnitude(&self) -> f64 {
        self.tension_magnitude
    }

    pub fn push_magnitude(&self) -> f64 {
        self.push_magnitude
    }

    pub fn tension_enabled(&self) -> bool {
        self.tension_enabled
    }

    pub fn push_enabled(&self) -> bool {
        self.push_enabled
    }

    pub fn weight_panel_enabled(&self) -> bool {
        self.weight_panel_enabled
    }

    pub fn motion_direction(&self) -> MotionDirection {
        self.motion_direction
    }

    /// Returns the incline angle in radians.
    pub fn angle_rad(&self) -> f64 {
        self.angle.to_radians()
    }

    /// Returns `true` when push is enabled with a positive magnitude.
    pub fn push_active(&self) -> bool {
        self.push_enabled && self.push_magnitude > 0.0
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_friction_coefficient(mut self, mu: f64) -> Self {
        self.friction_coefficient = mu;
        self
    }

    pub fn with_tension(mut self, magnitude: f64, enabled: bool) -> Self {
        self.tension_magnitude = magnitude;
        self.tension_enabled = enabled;
        self
    }

    pub fn with_push(mut self, magnitude: f64, enabled: bool) -> Self {
        self.push_magnitude = magnitude;
        self.push_enabled = enabled;
        self
    }

    pub fn with_weight_panel(mut self, enabled: bool) -> Self {
        self.weight_panel_enabled = enabled;
        self
    }

    pub fn with_motion_direction(mut self, direction: MotionDirection) -> Self {
        self.motion_direction = direction;
        self
    }

    /// Returns a copy with every field forced into its control domain.
    ///
    /// Non-finite values fall back to the corresponding default.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| {
            if value.is_finite() { value } else { fallback }
        };

        let clamped = Self {
            angle: finite_or(self.angle, defaults.angle).clamp(0.0, 90.0),
            mass: finite_or(self.mass, defaults.mass).max(MIN_MASS),
            friction_coefficient: finite_or(
                self.friction_coefficient,
                defaults.friction_coefficient,
            )
            .clamp(0.0, 1.0),
            tension_magnitude: finite_or(self.tension_magnitude, 0.0).max(0.0),
            push_magnitude: finite_or(self.push_magnitude, 0.0).max(0.0),
            ..self.clone()
        };

        if clamped != *self {
            debug!(
                angle = clamped.angle,
                mass = clamped.mass,
                friction_coefficient = clamped.friction_coefficient;
                "Parameters clamped into control domain"
            );
        }

        clamped
    }

    /// Returns a new parameter set with every field present in `update`
    /// replaced. `self` is left untouched.
    pub fn apply(&self, update: &ParameterUpdate) -> Self {
        Self {
            angle: update.angle.unwrap_or(self.angle),
            mass: update.mass.unwrap_or(self.mass),
            friction_coefficient: update
                .friction_coefficient
                .unwrap_or(self.friction_coefficient),
            tension_magnitude: update.tension_magnitude.unwrap_or(self.tension_magnitude),
            push_magnitude: update.push_magnitude.unwrap_or(self.push_magnitude),
            tension_enabled: update.tension_enabled.unwrap_or(self.tension_enabled),
            push_enabled: update.push_enabled.unwrap_or(self.push_enabled),
            weight_panel_enabled: update
                .weight_panel_enabled
                .unwrap_or(self.weight_panel_enabled),
            motion_direction: update.motion_direction.unwrap_or(self.motion_direction),
        }
    }
}

/// A partial change to a [`ParameterSet`].
///
/// Fields left as `None` keep their current value when applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParameterUpdate {
    pub angle: Option<f64>,
    pub mass: Option<f64>,
    pub friction_coefficient: Option<f64>,
    pub tension_magnitude: Option<f64>,
    pub push_magnitude: Option<f64>,
    pub tension_enabled: Option<bool>,
    pub push_enabled: Option<bool>,
    pub weight_panel_enabled: Option<bool>,
    pub motion_direction: Option<MotionDirection>,
}

impl ParameterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if applying this update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn with_tension_enabled(mut self, enabled: bool) -> Self {
        self.tension_enabled = Some(enabled);
        self
    }

    pub fn with_push_enabled(mut self, enabled: bool) -> Self {
        self.push_enabled = Some(enabled);
        self
    }

    pub fn with_weight_panel_enabled(mut self, enabled: bool) -> Self {
        self.weight_panel_enabled = Some(enabled);
        self
    }

    pub fn with_motion_direction(mut self, direction: MotionDirection) -> Self {
        self.motion_direction = Some(direction);
        self
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_is_initial_state() {
        let params = ParameterSet::default();
        assert_approx_eq!(f64, params.angle(), 0.0);
        assert_approx_eq!(f64, params.mass(), 10.0);
        assert_approx_eq!(f64, params.friction_coefficient(), 0.3);
        assert!(!params.tension_enabled());
        assert!(!params.push_enabled());
        assert!(!params.weight_panel_enabled());
        assert_eq!(params.motion_direction(), MotionDirection::None);
    }

    #[test]
    fn test_motion_direction_friction_sign() {
        assert!(!MotionDirection::None.engages_friction());
        assert!(MotionDirection::UpSlope.engages_friction());
        assert_eq!(MotionDirection::UpSlope.friction_sign(), -1.0);
        assert_eq!(MotionDirection::DownSlope.friction_sign(), 1.0);
        assert_eq!(MotionDirection::None.friction_sign(), 0.0);
    }

    #[test]
    fn test_push_active_requires_magnitude() {
        let params = ParameterSet::new().with_push(0.0, true);
        assert!(!params.push_active());

        let params = params.with_push(5.0, true);
        assert!(params.push_active());

        let params = params.with_push(5.0, false);
        assert!(!params.push_active());
    }

    #[test]
    fn test_clamped_enforces_domains() {
        let params = ParameterSet::new()
            .with_angle(120.0)
            .with_mass(-3.0)
            .with_friction_coefficient(1.7)
            .with_tension(-4.0, true)
            .with_push(f64::NAN, true)
            .clamped();

        assert_approx_eq!(f64, params.angle(), 90.0);
        assert_approx_eq!(f64, params.mass(), MIN_MASS);
        assert_approx_eq!(f64, params.friction_coefficient(), 1.0);
        assert_approx_eq!(f64, params.tension_magnitude(), 0.0);
        assert_approx_eq!(f64, params.push_magnitude(), 0.0);
        assert!(params.tension_enabled());
    }

    #[test]
    fn test_clamped_keeps_valid_values() {
        let params = ParameterSet::new()
            .with_angle(30.0)
            .with_friction_coefficient(0.45)
            .with_tension(12.5, true);
        assert_eq!(params.clamped(), params);
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let params = ParameterSet::new().with_angle(30.0).with_weight_panel(true);
        let update = ParameterUpdate::new().with_motion_direction(MotionDirection::DownSlope);

        let next = params.apply(&update);

        assert_eq!(next.motion_direction(), MotionDirection::DownSlope);
        assert_approx_eq!(f64, next.angle(), 30.0);
        assert!(next.weight_panel_enabled());
        assert_eq!(params.motion_direction(), MotionDirection::None);
    }

    #[test]
    fn test_empty_update_is_identity() {
        let params = ParameterSet::new().with_angle(45.0).with_push(20.0, true);
        let update = ParameterUpdate::new();
        assert!(update.is_empty());
        assert_eq!(params.apply(&update), params);
    }

    #[test]
    fn test_deserialize_scenario_toml() {
        let source = r#"
            angle = 30.0
            mass = 12.0
            mu = 0.25
            tension = 40.0
            tension_enabled = true
            show_mass = true
            motion_direction = "up"
        "#;

        let params: ParameterSet = toml::from_str(source).expect("valid scenario");

        assert_approx_eq!(f64, params.angle(), 30.0);
        assert_approx_eq!(f64, params.mass(), 12.0);
        assert_approx_eq!(f64, params.friction_coefficient(), 0.25);
        assert_approx_eq!(f64, params.tension_magnitude(), 40.0);
        assert!(params.tension_enabled());
        assert!(params.weight_panel_enabled());
        assert!(!params.push_enabled());
        assert_eq!(params.motion_direction(), MotionDirection::UpSlope);
    }

    #[test]
    fn test_deserialize_motion_aliases() {
        let params: ParameterSet =
            toml::from_str(r#"motion_direction = "down_slope""#).expect("valid scenario");
        assert_eq!(params.motion_direction(), MotionDirection::DownSlope);

        let err = toml::from_str::<ParameterSet>(r#"motion_direction = "sideways""#);
        assert!(err.is_err());
    }
}
