//! End-to-end tests driving the calculator the way a front-end would:
//! edit fields, dispatch actions, observe stored values and panels.

use approx::assert_abs_diff_eq;
use hydrocalc_core::{
    default_action, dispatch, format_number, Action, FieldId, FieldState, Panel, PanelBuffer,
};

fn session() -> (FieldState, PanelBuffer) {
    (FieldState::new(), PanelBuffer::new())
}

#[test]
fn test_mass_loss_concentration_round_trip() {
    // Solving forward then inverting must land back on the original
    // value within the 6-decimal storage precision.
    let cases = [
        (0.5, 120.0),
        (3.25, 0.004),
        (17.0, 981.5),
        (0.000123, 456.789),
    ];

    for (flow, conc) in cases {
        let (mut fields, mut panels) = session();
        fields.set_text(FieldId::Flow, &flow.to_string());
        fields.set_text(FieldId::Concentration, &conc.to_string());

        dispatch(Action::SolveMassLoss, &mut fields, &mut panels);
        fields.clear(FieldId::Concentration);
        dispatch(Action::SolveConcentration, &mut fields, &mut panels);

        let recovered = fields
            .get(FieldId::Concentration)
            .expect("concentration recomputed");
        // The stored mass carries up to 0.5e-6 of rounding error, which
        // the division scales by 1/flow; the recomputed concentration is
        // then rounded once more.
        let tol = 1e-6 + 0.5e-6 / flow;
        assert_abs_diff_eq!(recovered, conc, epsilon = tol);
    }
}

#[test]
fn test_worked_example_flow() {
    let (mut fields, mut panels) = session();
    dispatch(Action::LoadExample, &mut fields, &mut panels);

    // Example inputs fixed: flow=0.5, concentration=120, area=100,
    // intensity=0.01, coeff=0.8; both outputs blank, both panels hidden.
    assert_eq!(fields.get(FieldId::Flow), Some(0.5));
    assert_eq!(fields.get(FieldId::Concentration), Some(120.0));
    assert_eq!(fields.get(FieldId::Area), Some(100.0));
    assert_eq!(fields.get(FieldId::Intensity), Some(0.01));
    assert_eq!(fields.get(FieldId::Coefficient), Some(0.8));
    assert!(fields.is_blank(FieldId::MassLoss));
    assert!(fields.is_blank(FieldId::Runoff));
    assert!(panels.visible(Panel::Soil).is_none());
    assert!(panels.visible(Panel::Runoff).is_none());

    dispatch(Action::SolveMassLoss, &mut fields, &mut panels);
    assert_eq!(fields.get(FieldId::MassLoss), Some(60.0));

    dispatch(Action::SolveRunoffVolume, &mut fields, &mut panels);
    assert_eq!(fields.get(FieldId::Runoff), Some(0.8));

    let shown = panels.visible(Panel::Runoff).expect("runoff panel visible");
    assert!(!shown.is_error);
    assert!(shown.headline.contains("0.8"));
}

#[test]
fn test_clear_all_then_solves_report_missing_input() {
    let (mut fields, mut panels) = session();
    dispatch(Action::LoadExample, &mut fields, &mut panels);
    dispatch(Action::ClearAll, &mut fields, &mut panels);

    let solves = [
        Action::SolveMassLoss,
        Action::SolveConcentration,
        Action::SolveFlow,
        Action::SolveRunoffVolume,
        Action::SolveRequiredArea,
        Action::SolveIntensity,
    ];
    for action in solves {
        let before = fields.clone();
        dispatch(action, &mut fields, &mut panels);
        assert_eq!(fields, before, "{action:?} mutated a field on error");
    }

    // Each group's panel shows the last error
    assert!(panels.visible(Panel::Soil).expect("soil panel").is_error);
    assert!(panels.visible(Panel::Runoff).expect("runoff panel").is_error);
}

#[test]
fn test_coefficient_default_and_quirk() {
    // Absent coefficient defaults to 1 for the forward solve
    let (mut fields, mut panels) = session();
    fields.set_text(FieldId::Area, "100");
    fields.set_text(FieldId::Intensity, "0.01");
    dispatch(Action::SolveRunoffVolume, &mut fields, &mut panels);
    assert_eq!(fields.get(FieldId::Runoff), Some(1.0));

    // An explicit 0 is honored by the forward solve
    fields.set_text(FieldId::Coefficient, "0");
    dispatch(Action::SolveRunoffVolume, &mut fields, &mut panels);
    assert_eq!(fields.get(FieldId::Runoff), Some(0.0));

    // but treated as unset by the inverse solves
    fields.set_text(FieldId::Runoff, "1");
    dispatch(Action::SolveRequiredArea, &mut fields, &mut panels);
    assert_eq!(fields.get(FieldId::Area), Some(100.0));

    // and never written back
    assert_eq!(fields.raw(FieldId::Coefficient), "0");
}

#[test]
fn test_enter_key_default_actions() {
    let (mut fields, mut panels) = session();
    dispatch(Action::LoadExample, &mut fields, &mut panels);

    // Enter while a soil field has focus solves mass loss
    dispatch(default_action(FieldId::Concentration), &mut fields, &mut panels);
    assert_eq!(fields.get(FieldId::MassLoss), Some(60.0));

    // Enter while a runoff field has focus solves runoff volume
    dispatch(default_action(FieldId::Intensity), &mut fields, &mut panels);
    assert_eq!(fields.get(FieldId::Runoff), Some(0.8));
}

#[test]
fn test_panel_messages_format_for_display() {
    let (mut fields, mut panels) = session();
    fields.set_text(FieldId::Flow, "2500");
    fields.set_text(FieldId::Concentration, "2");
    dispatch(Action::SolveMassLoss, &mut fields, &mut panels);

    // Display formatting groups large magnitudes; storage does not.
    let shown = panels.visible(Panel::Soil).expect("panel visible");
    assert!(shown.headline.contains("5,000"), "headline: {}", shown.headline);
    assert_eq!(fields.raw(FieldId::MassLoss), "5000");
    assert_eq!(format_number(fields.get(FieldId::MassLoss)), "5,000");
}
