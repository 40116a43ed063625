//! Example: rendering a diagram straight from a parameter set
//!
//! Builds the up-slope tension scenario in code, prints its equilibrium
//! equations, and writes the diagram in both variants.

use std::path::Path;

use incline::{
    DiagramBuilder,
    config::{AppConfig, DiagramVariant, LayoutConfig, StyleConfig},
    params::{MotionDirection, ParameterSet},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = ParameterSet::default()
        .with_angle(30.0)
        .with_mass(10.0)
        .with_friction_coefficient(0.3)
        .with_tension(20.0, true)
        .with_weight_panel(true)
        .with_motion_direction(MotionDirection::UpSlope);

    let full = DiagramBuilder::default();
    println!("{}", full.equations(&params));

    full.write_svg(&params, Path::new("incline_full.svg"))?;
    println!("Wrote incline_full.svg");

    let compact = DiagramBuilder::new(AppConfig::new(
        LayoutConfig::new(DiagramVariant::Compact, None),
        StyleConfig::new(Some("#fafafa".to_string())),
    ));
    compact.write_svg(&params, Path::new("incline_compact.svg"))?;
    println!("Wrote incline_compact.svg");

    Ok(())
}
