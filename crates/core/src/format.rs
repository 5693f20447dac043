//! Display formatting for calculator quantities.
//!
//! Two independent rules live here and must not be conflated:
//!
//! - **Display formatting** ([`format_number`]): what the result panel shows.
//!   Large magnitudes get thousands grouping with at most 3 fractional
//!   digits; small magnitudes get fixed 6-digit precision with trailing
//!   zeros trimmed; absent or non-numeric values get an em-dash.
//! - **Storage rounding** ([`round6`] / [`canonical`]): what gets written
//!   back into a field after a solve. Always 6 decimal places, plain
//!   decimal text, no grouping.

/// Placeholder shown for absent or non-numeric values.
pub const PLACEHOLDER: &str = "—";

/// Magnitude at which display switches to grouped notation.
///
/// The branch keys on the raw absolute value, not a rounded one:
/// `999.9999999` still takes the fixed-point branch (and renders as
/// `"1000"` after its own rounding).
const GROUPING_THRESHOLD: f64 = 1000.0;

/// Format a possibly-absent value for display.
///
/// Total over its domain: every input produces a string, never a panic.
pub fn format_number(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_owned(), format_value)
}

/// Format a present value for display.
///
/// Non-finite values render as the placeholder; the solvers cannot
/// produce them (zero divisors are rejected first), so this only affects
/// direct callers.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    if value.abs() >= GROUPING_THRESHOLD {
        grouped(value)
    } else {
        trim_fraction(&format!("{value:.6}"))
    }
}

/// Round a computed result to the 6 decimal places kept in field storage.
///
/// Applied to the stored value only; display formatting works from the
/// raw value.
pub fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Plain decimal text for field storage: fixed 6 decimals, trailing
/// zeros trimmed, no grouping. Callers round first via [`round6`].
pub(crate) fn canonical(value: f64) -> String {
    trim_fraction(&format!("{value:.6}"))
}

/// Thousands-grouped rendering with at most 3 fractional digits.
fn grouped(value: f64) -> String {
    let text = format!("{value:.3}");
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Strip trailing fractional zeros, and the decimal point itself when
/// the whole fraction goes.
fn trim_fraction(text: &str) -> String {
    if !text.contains('.') {
        return text.to_owned();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
