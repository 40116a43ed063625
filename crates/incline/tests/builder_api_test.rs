//! Integration tests for the DiagramBuilder API

use float_cmp::assert_approx_eq;

use incline::{
    DiagramBuilder, InclineError,
    config::{AppConfig, DiagramVariant, LayoutConfig, StyleConfig},
    layout::ForceKind,
    params::{MotionDirection, ParameterSet},
    tutorial::GuidedLearning,
};

fn up_slope_scenario() -> ParameterSet {
    ParameterSet::default()
        .with_angle(30.0)
        .with_tension(20.0, true)
        .with_weight_panel(true)
        .with_motion_direction(MotionDirection::UpSlope)
}

#[test]
fn test_flat_surface_defaults() {
    let builder = DiagramBuilder::default();
    let params = ParameterSet::default();

    let forces = builder.resolve_forces(&params);
    assert_approx_eq!(f64, forces.weight(), 98.0, epsilon = 1e-9);
    assert_approx_eq!(f64, forces.normal(), 98.0, epsilon = 1e-9);
    assert_eq!(forces.friction(), 0.0);

    let equations = builder.equations(&params);
    assert_eq!(equations.sum_fy(), "ΣFy = +R_N - Mg·cos(0°) = 0");
    assert!(!equations.sum_fx().contains("(unbalanced)"));
    assert!(equations.friction_calculation().is_none());
}

#[test]
fn test_up_slope_scenario() {
    let builder = DiagramBuilder::default();
    let params = up_slope_scenario();

    let forces = builder.resolve_forces(&params);
    assert_approx_eq!(f64, forces.normal(), 84.8705, epsilon = 1e-4);
    assert_approx_eq!(f64, forces.friction(), 0.3 * forces.normal(), epsilon = 1e-9);

    let equations = builder.equations(&params);
    assert!(equations.sum_fx().contains("+T - F_f - Mg·sin(30°) = 0"));

    let diagram = builder.layout(&params);
    for kind in [
        ForceKind::Weight,
        ForceKind::Normal,
        ForceKind::Tension,
        ForceKind::Friction,
    ] {
        assert!(diagram.vector(kind).is_some(), "missing {kind:?}");
    }
    assert!(diagram.vector(ForceKind::Push).is_none());
}

#[test]
fn test_render_svg() {
    let builder = DiagramBuilder::default();
    let svg = builder
        .render_svg(&up_slope_scenario())
        .expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("T=20N"));
}

#[test]
fn test_compact_variant_canvas() {
    let config = AppConfig::new(
        LayoutConfig::new(DiagramVariant::Compact, None),
        StyleConfig::default(),
    );
    let diagram = DiagramBuilder::new(config).layout(&up_slope_scenario());

    assert_eq!(diagram.canvas().width(), 600.0);
    assert_eq!(diagram.canvas().height(), 450.0);
}

#[test]
fn test_write_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("incline.svg");

    DiagramBuilder::default()
        .write_svg(&up_slope_scenario(), &path)
        .expect("Failed to write");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("R_N=84.9N"));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();
    let params = up_slope_scenario();

    let first = builder.render_svg(&params).unwrap();
    let _other = builder.render_svg(&ParameterSet::default()).unwrap();
    let second = builder.render_svg(&params).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_tutorial_drives_parameters() {
    let builder = DiagramBuilder::default();
    let mut tutorial = GuidedLearning::new();
    let mut params = ParameterSet::default();

    tutorial.answer("step1-q1", "upward").unwrap();
    params = params.apply(&tutorial.advance().unwrap());
    tutorial.answer("step2", "left").unwrap();
    params = params.apply(&tutorial.advance().unwrap());

    assert!(params.tension_enabled());
    assert_eq!(params.motion_direction(), MotionDirection::UpSlope);

    // Tension is enabled but still zero, so only friction appears
    let diagram = builder.layout(&params.with_angle(30.0));
    assert!(diagram.vector(ForceKind::Tension).is_none());
    assert!(diagram.vector(ForceKind::Friction).is_some());
}

#[test]
fn test_tutorial_errors_convert_to_incline_error() {
    fn answer_out_of_order(tutorial: &mut GuidedLearning) -> Result<(), InclineError> {
        tutorial.answer("step5", "up")?;
        Ok(())
    }

    let mut tutorial = GuidedLearning::new();
    let err = answer_out_of_order(&mut tutorial).unwrap_err();
    assert!(matches!(err, InclineError::Tutorial(_)));
    assert!(err.to_string().starts_with("Tutorial error:"));
}
