//! Property tests over the full layout pipeline.

use proptest::prelude::*;

use incline::{
    DiagramBuilder,
    config::{AppConfig, DiagramVariant, LayoutConfig, StyleConfig},
    params::{MotionDirection, ParameterSet},
};

fn motion_strategy() -> impl Strategy<Value = MotionDirection> {
    prop_oneof![
        Just(MotionDirection::None),
        Just(MotionDirection::UpSlope),
        Just(MotionDirection::DownSlope),
    ]
}

fn params_strategy() -> impl Strategy<Value = ParameterSet> {
    (
        0.0f64..=90.0,
        0.1f64..50.0,
        0.0f64..=1.0,
        0.0f64..100.0,
        0.0f64..100.0,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        motion_strategy(),
    )
        .prop_map(
            |(angle, mass, mu, tension, push, t_on, p_on, panel, motion)| {
                ParameterSet::default()
                    .with_angle(angle)
                    .with_mass(mass)
                    .with_friction_coefficient(mu)
                    .with_tension(tension, t_on)
                    .with_push(push, p_on)
                    .with_weight_panel(panel)
                    .with_motion_direction(motion)
            },
        )
}

fn check_labels_do_not_overlap(params: &ParameterSet) -> Result<(), TestCaseError> {
    let diagram = DiagramBuilder::default().layout(params);
    let labels: Vec<_> = diagram.labels().collect();

    for (i, (text_a, a)) in labels.iter().enumerate() {
        for (text_b, b) in &labels[i + 1..] {
            prop_assert!(
                !a.intersects(b),
                "labels {} and {} overlap: {:?} / {:?}",
                text_a,
                text_b,
                a,
                b
            );
        }
    }
    Ok(())
}

fn check_layout_is_idempotent(params: &ParameterSet, variant: DiagramVariant) -> Result<(), TestCaseError> {
    let config = AppConfig::new(LayoutConfig::new(variant, None), StyleConfig::default());
    let builder = DiagramBuilder::new(config);

    prop_assert_eq!(builder.layout(params), builder.layout(params));
    Ok(())
}

proptest! {
    #[test]
    fn labels_do_not_overlap(params in params_strategy()) {
        check_labels_do_not_overlap(&params)?;
    }

    #[test]
    fn layout_is_idempotent(
        params in params_strategy(),
        compact in any::<bool>(),
    ) {
        let variant = if compact { DiagramVariant::Compact } else { DiagramVariant::Full };
        check_layout_is_idempotent(&params, variant)?;
    }
}
