//! Incline - free-body diagrams for a block on an inclined plane.
//!
//! Resolves the forces acting on the block, builds the symbolic equilibrium
//! equations, and lays the diagram out as drawable primitives that can be
//! exported to SVG. A guided-learning state machine drives the parameters
//! through an introductory walkthrough.

pub mod config;
pub mod equations;
pub mod export;
pub mod layout;
pub mod physics;
pub mod tutorial;

mod error;

pub use incline_core::{color, draw, geometry, params};

pub use error::InclineError;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use equations::EquationSet;
use export::{Exporter, svg::SvgExporter};
use layout::{Diagram, FrameConfig, GeometryFrame};
use params::ParameterSet;
use physics::ForceResult;

/// Builder running the force model, layout, and export pipeline.
///
/// Every call is independent: the builder only holds configuration, so the
/// same parameters always produce the same output.
///
/// # Examples
///
/// ```rust
/// use incline::{DiagramBuilder, config::AppConfig, params::ParameterSet};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let params = ParameterSet::default().with_angle(30.0);
///
/// let equations = builder.equations(&params);
/// assert_eq!(equations.weight_parallel(), "49.00");
///
/// let svg = builder.render_svg(&params).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve the forces for `params`.
    pub fn resolve_forces(&self, params: &ParameterSet) -> ForceResult {
        physics::resolve_forces(params)
    }

    /// Build the equilibrium equations for `params`.
    pub fn equations(&self, params: &ParameterSet) -> EquationSet {
        let forces = self.resolve_forces(params);
        equations::build_equations(params, &forces)
    }

    /// Frame settings for the configured variant, with the collision
    /// avoidance override applied.
    pub fn frame_config(&self) -> FrameConfig {
        let layout = self.config.layout();
        FrameConfig::for_variant(layout.variant())
            .with_collision_avoidance(layout.collision_avoidance())
    }

    /// Lay out the diagram for `params`.
    pub fn layout(&self, params: &ParameterSet) -> Diagram {
        let forces = self.resolve_forces(params);
        trace!(forces:?; "Forces resolved");

        let frame = GeometryFrame::compute(self.frame_config(), params, &forces);
        debug!(
            force_scale = frame.force_scale(),
            variant:? = self.config.layout().variant();
            "Geometry frame computed",
        );

        layout::layout_diagram(params, &forces, &frame)
    }

    fn exporter(&self) -> Result<SvgExporter, InclineError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(InclineError::Config)?;

        let exporter = SvgExporter::new();
        Ok(match background {
            Some(color) => exporter.with_background(color),
            None => exporter,
        })
    }

    /// Render the diagram for `params` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`InclineError::Config`] if the style configuration is
    /// invalid.
    pub fn render_svg(&self, params: &ParameterSet) -> Result<String, InclineError> {
        info!(angle = params.angle(), mass = params.mass(); "Rendering diagram");
        let exporter = self.exporter()?;
        let svg = exporter.render_to_string(&self.layout(params));
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render the diagram for `params` and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`InclineError::Config`] if the style configuration is
    /// invalid and [`InclineError::Export`] if the file cannot be written.
    pub fn write_svg(&self, params: &ParameterSet, path: &Path) -> Result<(), InclineError> {
        let exporter = self.exporter()?;
        exporter.export_diagram(&self.layout(params), path)?;
        info!(path:? = path; "SVG written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiagramVariant, LayoutConfig, StyleConfig};

    #[test]
    fn test_frame_config_follows_variant() {
        let builder = DiagramBuilder::default();
        assert!(builder.frame_config().collision_avoidance());

        let compact = AppConfig::new(
            LayoutConfig::new(DiagramVariant::Compact, None),
            StyleConfig::default(),
        );
        let builder = DiagramBuilder::new(compact);
        assert!(!builder.frame_config().collision_avoidance());
        assert_eq!(builder.frame_config().canvas().width(), 600.0);
    }

    #[test]
    fn test_collision_override() {
        let config = AppConfig::new(
            LayoutConfig::new(DiagramVariant::Compact, Some(true)),
            StyleConfig::default(),
        );
        assert!(DiagramBuilder::new(config).frame_config().collision_avoidance());
    }

    #[test]
    fn test_render_svg_rejects_bad_background() {
        let config = AppConfig::new(
            LayoutConfig::default(),
            StyleConfig::new(Some("not-a-color".to_string())),
        );
        let result = DiagramBuilder::new(config).render_svg(&ParameterSet::default());
        assert!(matches!(result, Err(InclineError::Config(_))));
    }
}
