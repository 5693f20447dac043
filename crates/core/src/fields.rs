//! The calculator's field state: seven named quantities and the rules
//! for reading and writing them.
//!
//! The fields are the only storage in the system. They hold text, not
//! numbers, because users may leave them blank or type anything; the
//! numeric view is recovered on demand through [`FieldState::get`],
//! which maps blank or unparseable text to `None` and never fails.

use serde::{Deserialize, Serialize};

use crate::format::{canonical, round6};

/// Which relation a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldGroup {
    /// `mass-loss = flow × concentration`
    Soil,
    /// `runoff = area × intensity × coefficient`
    Runoff,
}

/// The seven named form fields.
///
/// Units are a documentation convention; the data itself is unitless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    /// Volumetric rate of the fluid stream (m³/hr).
    Flow,
    /// Contaminant mass per unit volume (kg/m³).
    Concentration,
    /// Mass discharged per unit time (kg/hr).
    MassLoss,
    /// Catchment area (m²).
    Area,
    /// Rainfall depth per unit time (m/hr).
    Intensity,
    /// Rainfall-driven volumetric rate (m³/hr).
    Runoff,
    /// Dimensionless runoff coefficient (0-1).
    Coefficient,
}

impl FieldId {
    /// All fields, in declaration order.
    pub const ALL: [FieldId; 7] = [
        FieldId::Flow,
        FieldId::Concentration,
        FieldId::MassLoss,
        FieldId::Area,
        FieldId::Intensity,
        FieldId::Runoff,
        FieldId::Coefficient,
    ];

    /// External wire name, matching the host form's field ids.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Flow => "flow",
            FieldId::Concentration => "concentration",
            FieldId::MassLoss => "massloss",
            FieldId::Area => "area",
            FieldId::Intensity => "intensity",
            FieldId::Runoff => "runoff",
            FieldId::Coefficient => "coeff",
        }
    }

    /// Look up a field by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    pub fn group(self) -> FieldGroup {
        match self {
            FieldId::Flow | FieldId::Concentration | FieldId::MassLoss => FieldGroup::Soil,
            FieldId::Area | FieldId::Intensity | FieldId::Runoff | FieldId::Coefficient => {
                FieldGroup::Runoff
            }
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Explicit record of the form's field contents.
///
/// Solvers never touch this directly; the session layer reads inputs
/// through [`FieldState::get`] and writes exactly one output per solve
/// through [`FieldState::store`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    slots: [String; 7],
}

impl FieldState {
    /// A state with every field blank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field.
    pub fn raw(&self, id: FieldId) -> &str {
        &self.slots[id.index()]
    }

    /// The input accessor: parse a field as a floating-point number.
    ///
    /// Blank and unparseable text both yield `None`; callers cannot
    /// distinguish the two, and nothing here ever fails.
    pub fn get(&self, id: FieldId) -> Option<f64> {
        let text = self.raw(id).trim();
        if text.is_empty() {
            return None;
        }
        text.parse::<f64>().ok().filter(|v| !v.is_nan())
    }

    /// Direct user edit of a field.
    pub fn set_text(&mut self, id: FieldId, text: &str) {
        self.slots[id.index()] = text.to_owned();
    }

    /// Solver write path: round to 6 decimals and store the canonical
    /// decimal text.
    pub fn store(&mut self, id: FieldId, value: f64) {
        self.slots[id.index()] = canonical(round6(value));
    }

    /// Reset a field to absent.
    pub fn clear(&mut self, id: FieldId) {
        self.slots[id.index()].clear();
    }

    /// Whether a field is currently blank.
    pub fn is_blank(&self, id: FieldId) -> bool {
        self.raw(id).trim().is_empty()
    }
}
