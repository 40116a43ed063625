//! Human-readable equilibrium equations.
//!
//! [`build_equations`] renders the ΣFy and ΣFx balance along the incline axes
//! as display strings, together with the worked normal-force and friction
//! calculations.
//!
//! Number formatting is fixed: magnitudes use two decimals, the angle is
//! shown in whole degrees, μ with two decimals, mass with one decimal, and
//! the push magnitude in its shortest natural form.

use std::fmt;

use log::debug;

use incline_core::params::{MotionDirection, ParameterSet};

use crate::physics::ForceResult;

/// Equilibrium equations for one parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationSet {
    sum_fy: String,
    sum_fx: String,
    normal_calculation: String,
    friction_calculation: Option<String>,
    weight_parallel: String,
    weight_perpendicular: String,
}

impl EquationSet {
    /// Balance perpendicular to the incline, e.g. `ΣFy = +R_N - Mg·cos(30°) = 0`.
    pub fn sum_fy(&self) -> &str {
        &self.sum_fy
    }

    /// Balance along the incline.
    pub fn sum_fx(&self) -> &str {
        &self.sum_fx
    }

    /// Worked normal-force calculation.
    pub fn normal_calculation(&self) -> &str {
        &self.normal_calculation
    }

    /// Worked friction calculation; `None` unless motion is impending.
    pub fn friction_calculation(&self) -> Option<&str> {
        self.friction_calculation.as_deref()
    }

    /// `Mg·sin(θ)` formatted with two decimals.
    pub fn weight_parallel(&self) -> &str {
        &self.weight_parallel
    }

    /// `Mg·cos(θ)` formatted with two decimals.
    pub fn weight_perpendicular(&self) -> &str {
        &self.weight_perpendicular
    }
}

impl fmt::Display for EquationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sum_fy)?;
        writeln!(f, "{}", self.sum_fx)?;
        writeln!(f, "{}", self.normal_calculation)?;
        if let Some(friction) = &self.friction_calculation {
            writeln!(f, "{friction}")?;
        }
        writeln!(f, "Mg·sin(θ) = {} N", self.weight_parallel)?;
        write!(f, "Mg·cos(θ) = {} N", self.weight_perpendicular)
    }
}

/// Builds the equation strings for `params` and its resolved `forces`.
///
/// # Examples
///
/// ```
/// # use incline::{equations::build_equations, physics::resolve_forces};
/// # use incline_core::params::ParameterSet;
/// let params = ParameterSet::default();
/// let equations = build_equations(&params, &resolve_forces(&params));
///
/// assert_eq!(equations.sum_fy(), "ΣFy = +R_N - Mg·cos(0°) = 0");
/// ```
pub fn build_equations(params: &ParameterSet, forces: &ForceResult) -> EquationSet {
    // Half-way angles round up rather than to even.
    let angle = format!("{:.0}", params.angle().round());
    let mass = format!("{:.1}", params.mass());
    let mu = format!("{:.2}", params.friction_coefficient());
    let normal = format!("{:.2}", forces.normal());
    let push = params.push_magnitude();

    // The perpendicular push term only matters once the surface is tilted.
    let push_on_normal = params.push_active() && params.angle() > 0.0;

    let (sum_fy, normal_calculation) = if push_on_normal {
        (
            format!("ΣFy = +R_N - Mg·cos({angle}°) - P·sin({angle}°) = 0"),
            format!("R_N = {mass} × 9.8 × cos({angle}°) + {push} × sin({angle}°) = {normal} N"),
        )
    } else {
        (
            format!("ΣFy = +R_N - Mg·cos({angle}°) = 0"),
            format!("R_N = {mass} × 9.8 × cos({angle}°) = {normal} N"),
        )
    };

    let friction_calculation = |direction: &str| {
        format!(
            "F_f = μ × R_N = {mu} × {normal} = {:.2} N ({direction})",
            forces.friction()
        )
    };

    let mut terms = String::new();
    let (sum_fx, friction_calculation) = match params.motion_direction() {
        MotionDirection::UpSlope => {
            if params.tension_enabled() {
                terms.push_str("+T ");
            }
            if params.push_active() {
                terms.push_str(&format!("+P·cos({angle}°) "));
            }
            (
                format!("ΣFx = {terms}- F_f - Mg·sin({angle}°) = 0"),
                Some(friction_calculation("down-slope")),
            )
        }
        MotionDirection::DownSlope => {
            if params.tension_enabled() {
                terms.push_str("+ T ");
            }
            if params.push_active() {
                terms.push_str(&format!("+ P·cos({angle}°) "));
            }
            (
                format!("ΣFx = +F_f {terms}- Mg·sin({angle}°) = 0"),
                Some(friction_calculation("up-slope")),
            )
        }
        MotionDirection::None => {
            if params.tension_enabled() {
                terms.push_str("+T ");
            }
            if params.push_active() {
                terms.push_str(&format!("+P·cos({angle}°) "));
            }
            // Flag a slope component nothing opposes.
            let unbalanced =
                !params.tension_enabled() && !params.push_enabled() && params.angle() > 0.0;
            let suffix = if unbalanced { " (unbalanced)" } else { "" };
            (format!("ΣFx = {terms}- Mg·sin({angle}°){suffix}"), None)
        }
    };

    debug!(
        motion:? = params.motion_direction(),
        push_on_normal = push_on_normal;
        "Equations built"
    );

    EquationSet {
        sum_fy,
        sum_fx,
        normal_calculation,
        friction_calculation,
        weight_parallel: format!("{:.2}", forces.weight_parallel()),
        weight_perpendicular: format!("{:.2}", forces.weight_perpendicular()),
    }
}
