//! Soil-Loss & Rainfall-Runoff Calculator Core
//!
//! Unit-consistent solvers for two small hydrological relations:
//!
//! - **Soil group**: `mass-loss (kg/hr) = flow (m³/hr) × concentration (kg/m³)`
//! - **Runoff group**: `runoff (m³/hr) = area (m²) × intensity (m/hr) × coefficient`
//!
//! Each group can be solved for any of its variables given the others.
//! The crate keeps the arithmetic pure: solvers take possibly-absent
//! numbers and return a result or a user-facing refusal, the field
//! state is an explicit record, and presentation goes through a trait
//! so any front-end (terminal, form, test buffer) can plug in.
//!
//! ## Layers
//!
//! - [`format`] - display formatting and storage rounding
//! - [`fields`] - the named field record and its parse-or-absent accessor
//! - [`solver`] - the six pure solve operations
//! - [`presenter`] - result panel contract
//! - [`session`] - action dispatch wiring the layers together

pub mod fields;
pub mod format;
pub mod presenter;
pub mod session;
pub mod solver;

// Re-export the working surface
pub use fields::{FieldGroup, FieldId, FieldState};
pub use format::{format_number, format_value, round6};
pub use presenter::{Message, Panel, PanelBuffer, ResultPresenter};
pub use session::{default_action, dispatch, Action};
pub use solver::{SolveError, SolveResult, Solution};
