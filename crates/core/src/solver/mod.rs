//! Pure algebraic solvers for the two quantity triplets.
//!
//! Every solver is a total function over possibly-absent inputs: it
//! either returns a [`Solution`] or a [`SolveError`], and it touches no
//! state. The session layer owns field reads and writes, which keeps
//! the arithmetic independently testable.
//!
//! Precondition checks run in a fixed order - missing inputs first,
//! then zero divisors - and always before any arithmetic.

pub mod runoff;
pub mod soil;

use thiserror::Error;

use crate::fields::FieldId;
use crate::format::round6;
use crate::presenter::Message;

/// Outcome of one solve attempt.
pub type SolveResult = Result<Solution, SolveError>;

/// Why a solve was refused.
///
/// Both cases are recoverable and user-facing; the `Display` output is
/// the exact sentence shown on the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// One or more required quantities were blank or unparseable.
    #[error("{0}")]
    MissingInput(&'static str),
    /// A required divisor was present but equal to zero.
    #[error("{0}")]
    ZeroDivisor(&'static str),
}

/// A successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The one field this solve is allowed to write.
    pub output: FieldId,
    /// Raw computed value, used for display formatting.
    pub value: f64,
    /// Value as it will be stored: rounded to 6 decimal places.
    pub stored: f64,
    /// Panel content: formatted result plus the formula substitution.
    pub message: Message,
}

impl Solution {
    pub(crate) fn new(output: FieldId, value: f64, headline: String, detail: String) -> Self {
        Self {
            output,
            value,
            stored: round6(value),
            message: Message::success(headline, detail),
        }
    }
}
