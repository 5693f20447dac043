//! Soil-group solvers: `mass-loss (kg/hr) = flow (m³/hr) × concentration (kg/m³)`.
//!
//! Three inversions of the same relation, each taking the other two
//! quantities and producing the third.

use super::{Solution, SolveError, SolveResult};
use crate::fields::FieldId;
use crate::format::format_value;

/// Mass loss from flow and concentration. Both inputs required.
pub fn solve_mass_loss(flow: Option<f64>, concentration: Option<f64>) -> SolveResult {
    let (Some(flow), Some(conc)) = (flow, concentration) else {
        return Err(SolveError::MissingInput(
            "Please enter both Flow and Concentration to calculate mass loss.",
        ));
    };
    let mass = flow * conc;
    Ok(Solution::new(
        FieldId::MassLoss,
        mass,
        format!("Mass loss = {} kg/hr", format_value(mass)),
        format!(
            "Computed as {} m³/hr × {} kg/m³",
            format_value(flow),
            format_value(conc)
        ),
    ))
}

/// Concentration from flow and mass loss. Flow must be non-zero.
pub fn solve_concentration(flow: Option<f64>, mass: Option<f64>) -> SolveResult {
    let (Some(flow), Some(mass)) = (flow, mass) else {
        return Err(SolveError::MissingInput(
            "Please enter both Flow and Mass loss to calculate concentration.",
        ));
    };
    if flow == 0.0 {
        return Err(SolveError::ZeroDivisor(
            "Flow must be non-zero to calculate concentration.",
        ));
    }
    let conc = mass / flow;
    Ok(Solution::new(
        FieldId::Concentration,
        conc,
        format!("Concentration = {} kg/m³", format_value(conc)),
        format!(
            "Computed as {} kg/hr ÷ {} m³/hr",
            format_value(mass),
            format_value(flow)
        ),
    ))
}

/// Flow from concentration and mass loss. Concentration must be non-zero.
pub fn solve_flow(concentration: Option<f64>, mass: Option<f64>) -> SolveResult {
    let (Some(conc), Some(mass)) = (concentration, mass) else {
        return Err(SolveError::MissingInput(
            "Please enter both Concentration and Mass loss to calculate flow.",
        ));
    };
    if conc == 0.0 {
        return Err(SolveError::ZeroDivisor(
            "Concentration must be non-zero to calculate flow.",
        ));
    }
    let flow = mass / conc;
    Ok(Solution::new(
        FieldId::Flow,
        flow,
        format!("Flow = {} m³/hr", format_value(flow)),
        format!(
            "Computed as {} kg/hr ÷ {} kg/m³",
            format_value(mass),
            format_value(conc)
        ),
    ))
}
