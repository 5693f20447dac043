//! Action dispatch: the glue between user actions, field state, pure
//! solvers, and the result panels.
//!
//! Each action runs to completion synchronously. A solve action reads
//! its fixed input subset, runs the pure solver, and on success writes
//! exactly one output field plus the owning panel; on failure it shows
//! the error and mutates nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fields::{FieldGroup, FieldId, FieldState};
use crate::presenter::{Message, Panel, ResultPresenter};
use crate::solver::{runoff, soil, SolveResult};

// Worked example constants loaded by `Action::LoadExample`.
const EXAMPLE_FLOW: f64 = 0.5; // m³/hr
const EXAMPLE_CONCENTRATION: f64 = 120.0; // kg/m³
const EXAMPLE_AREA: f64 = 100.0; // m²
const EXAMPLE_INTENSITY: f64 = 0.01; // m/hr (10 mm/hr)
const EXAMPLE_COEFFICIENT: f64 = 0.8;

/// Every user-triggerable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    SolveMassLoss,
    SolveConcentration,
    SolveFlow,
    SolveRunoffVolume,
    SolveRequiredArea,
    SolveIntensity,
    ClearSoil,
    ClearRunoff,
    ClearAll,
    LoadExample,
}

/// Default action for an Enter press while a field has focus: solve the
/// forward relation of that field's group.
pub fn default_action(focus: FieldId) -> Action {
    match focus.group() {
        FieldGroup::Soil => Action::SolveMassLoss,
        FieldGroup::Runoff => Action::SolveRunoffVolume,
    }
}

/// Run one action against the field state, reporting through the
/// presenter.
pub fn dispatch(action: Action, fields: &mut FieldState, presenter: &mut impl ResultPresenter) {
    debug!(?action, "dispatching calculator action");
    match action {
        Action::SolveMassLoss => apply(
            soil::solve_mass_loss(
                fields.get(FieldId::Flow),
                fields.get(FieldId::Concentration),
            ),
            Panel::Soil,
            fields,
            presenter,
        ),
        Action::SolveConcentration => apply(
            soil::solve_concentration(fields.get(FieldId::Flow), fields.get(FieldId::MassLoss)),
            Panel::Soil,
            fields,
            presenter,
        ),
        Action::SolveFlow => apply(
            soil::solve_flow(
                fields.get(FieldId::Concentration),
                fields.get(FieldId::MassLoss),
            ),
            Panel::Soil,
            fields,
            presenter,
        ),
        Action::SolveRunoffVolume => apply(
            runoff::solve_runoff_volume(
                fields.get(FieldId::Area),
                fields.get(FieldId::Intensity),
                fields.get(FieldId::Coefficient),
            ),
            Panel::Runoff,
            fields,
            presenter,
        ),
        Action::SolveRequiredArea => apply(
            runoff::solve_required_area(
                fields.get(FieldId::Runoff),
                fields.get(FieldId::Intensity),
                fields.get(FieldId::Coefficient),
            ),
            Panel::Runoff,
            fields,
            presenter,
        ),
        Action::SolveIntensity => apply(
            runoff::solve_intensity(
                fields.get(FieldId::Runoff),
                fields.get(FieldId::Area),
                fields.get(FieldId::Coefficient),
            ),
            Panel::Runoff,
            fields,
            presenter,
        ),
        Action::ClearSoil => clear_soil(fields, presenter),
        Action::ClearRunoff => clear_runoff(fields, presenter),
        Action::ClearAll => {
            clear_soil(fields, presenter);
            clear_runoff(fields, presenter);
        }
        Action::LoadExample => load_example(fields, presenter),
    }
}

fn apply(
    result: SolveResult,
    panel: Panel,
    fields: &mut FieldState,
    presenter: &mut impl ResultPresenter,
) {
    match result {
        Ok(solution) => {
            debug!(output = solution.output.name(), stored = solution.stored, "solve succeeded");
            fields.store(solution.output, solution.value);
            presenter.show(panel, &solution.message);
        }
        Err(err) => {
            debug!(%err, "solve refused");
            presenter.show(panel, &Message::error(err.to_string()));
        }
    }
}

fn clear_soil(fields: &mut FieldState, presenter: &mut impl ResultPresenter) {
    for id in [FieldId::Flow, FieldId::Concentration, FieldId::MassLoss] {
        fields.clear(id);
    }
    presenter.hide(Panel::Soil);
}

fn clear_runoff(fields: &mut FieldState, presenter: &mut impl ResultPresenter) {
    for id in [
        FieldId::Area,
        FieldId::Intensity,
        FieldId::Runoff,
        FieldId::Coefficient,
    ] {
        fields.clear(id);
    }
    presenter.hide(Panel::Runoff);
}

/// Fixed worked-example inputs; the two output fields start blank.
fn load_example(fields: &mut FieldState, presenter: &mut impl ResultPresenter) {
    fields.store(FieldId::Flow, EXAMPLE_FLOW);
    fields.store(FieldId::Concentration, EXAMPLE_CONCENTRATION);
    fields.clear(FieldId::MassLoss);
    fields.store(FieldId::Area, EXAMPLE_AREA);
    fields.store(FieldId::Intensity, EXAMPLE_INTENSITY);
    fields.store(FieldId::Coefficient, EXAMPLE_COEFFICIENT);
    fields.clear(FieldId::Runoff);
    presenter.hide(Panel::Soil);
    presenter.hide(Panel::Runoff);
}
