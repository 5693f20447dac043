//! Runoff-group solvers:
//! `runoff (m³/hr) = area (m²) × intensity (m/hr) × coefficient (–)`.
//!
//! The coefficient is optional. The forward solve honors an explicit 0;
//! the two inverse solves treat 0 as unset and substitute the default
//! (see [`effective_coefficient`]). The coefficient field is never
//! written back.

use super::{Solution, SolveError, SolveResult};
use crate::fields::FieldId;
use crate::format::format_value;

/// Value the coefficient takes when the field is unset.
const DEFAULT_COEFFICIENT: f64 = 1.0;

/// Coefficient as used by the inverse solves: unset *or explicitly 0*
/// becomes the default. An explicit 0 therefore never reaches the
/// divisor. Known oddity, kept as observable behavior; see DESIGN.md.
fn effective_coefficient(coeff: Option<f64>) -> f64 {
    match coeff {
        Some(c) if c != 0.0 => c,
        _ => DEFAULT_COEFFICIENT,
    }
}

/// Runoff volume from area and intensity, with optional coefficient.
///
/// Here an explicit coefficient of 0 is honored and yields zero runoff;
/// only an unset field takes the default.
pub fn solve_runoff_volume(
    area: Option<f64>,
    intensity: Option<f64>,
    coeff: Option<f64>,
) -> SolveResult {
    let (Some(area), Some(intensity)) = (area, intensity) else {
        return Err(SolveError::MissingInput(
            "Please enter Area and Rainfall Intensity to calculate runoff volume.",
        ));
    };
    let c = coeff.unwrap_or(DEFAULT_COEFFICIENT);
    let runoff = area * intensity * c;
    Ok(Solution::new(
        FieldId::Runoff,
        runoff,
        format!("Runoff ≈ {} m³/hr", format_value(runoff)),
        format!(
            "{} m² × {} m/hr × {}",
            format_value(area),
            format_value(intensity),
            format_value(c)
        ),
    ))
}

/// Required area from runoff volume and intensity. Intensity must be
/// non-zero.
pub fn solve_required_area(
    runoff: Option<f64>,
    intensity: Option<f64>,
    coeff: Option<f64>,
) -> SolveResult {
    let (Some(runoff), Some(intensity)) = (runoff, intensity) else {
        return Err(SolveError::MissingInput(
            "Please enter Runoff volume and Rainfall Intensity to calculate required area.",
        ));
    };
    if intensity == 0.0 {
        return Err(SolveError::ZeroDivisor(
            "Rainfall intensity must be non-zero to calculate area.",
        ));
    }
    let c = effective_coefficient(coeff);
    let area = runoff / (intensity * c);
    Ok(Solution::new(
        FieldId::Area,
        area,
        format!("Required area ≈ {} m²", format_value(area)),
        format!(
            "Computed as {} m³/hr ÷ ({} m/hr × {})",
            format_value(runoff),
            format_value(intensity),
            format_value(c)
        ),
    ))
}

/// Rainfall intensity from runoff volume and area. Area must be
/// non-zero.
pub fn solve_intensity(
    runoff: Option<f64>,
    area: Option<f64>,
    coeff: Option<f64>,
) -> SolveResult {
    let (Some(runoff), Some(area)) = (runoff, area) else {
        return Err(SolveError::MissingInput(
            "Please enter Runoff volume and Area to calculate rainfall intensity.",
        ));
    };
    if area == 0.0 {
        return Err(SolveError::ZeroDivisor(
            "Area must be non-zero to calculate intensity.",
        ));
    }
    let c = effective_coefficient(coeff);
    let intensity = runoff / (area * c);
    Ok(Solution::new(
        FieldId::Intensity,
        intensity,
        format!("Intensity ≈ {} m/hr", format_value(intensity)),
        format!(
            "Computed as {} m³/hr ÷ ({} m² × {})",
            format_value(runoff),
            format_value(area),
            format_value(c)
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_with_explicit_coefficient() {
        let solution =
            solve_runoff_volume(Some(100.0), Some(0.01), Some(0.8)).expect("valid inputs");
        assert_eq!(solution.output, FieldId::Runoff);
        assert_eq!(solution.stored, 0.8);
        let detail = solution.message.detail.as_deref().expect("detail line");
        assert!(detail.contains("100"));
        assert!(detail.contains("0.01"));
        assert!(detail.contains("0.8"));
    }

    #[test]
    fn test_volume_defaults_absent_coefficient_to_one() {
        let solution = solve_runoff_volume(Some(100.0), Some(0.01), None).expect("valid inputs");
        assert_eq!(solution.stored, 1.0);
    }

    #[test]
    fn test_volume_honors_zero_coefficient() {
        // The forward solve does not substitute the default for 0.
        let solution = solve_runoff_volume(Some(100.0), Some(0.01), Some(0.0)).expect("valid");
        assert_eq!(solution.stored, 0.0);
    }

    #[test]
    fn test_volume_requires_area_and_intensity() {
        let err = solve_runoff_volume(None, Some(0.01), Some(0.8)).unwrap_err();
        assert_eq!(
            err,
            SolveError::MissingInput(
                "Please enter Area and Rainfall Intensity to calculate runoff volume."
            )
        );
    }

    #[test]
    fn test_area_rejects_zero_intensity() {
        let err = solve_required_area(Some(10.0), Some(0.0), Some(0.8)).unwrap_err();
        assert_eq!(
            err,
            SolveError::ZeroDivisor("Rainfall intensity must be non-zero to calculate area.")
        );
    }

    #[test]
    fn test_area_treats_zero_coefficient_as_unset() {
        let with_zero = solve_required_area(Some(1.0), Some(0.01), Some(0.0)).expect("valid");
        let with_none = solve_required_area(Some(1.0), Some(0.01), None).expect("valid");
        assert_eq!(with_zero.stored, with_none.stored);
        assert_eq!(with_zero.stored, 100.0);
    }

    #[test]
    fn test_intensity_rejects_zero_area() {
        let err = solve_intensity(Some(1.0), Some(0.0), None).unwrap_err();
        assert_eq!(
            err,
            SolveError::ZeroDivisor("Area must be non-zero to calculate intensity.")
        );
    }

    #[test]
    fn test_intensity_inverse_of_volume() {
        let runoff = solve_runoff_volume(Some(250.0), Some(0.004), Some(0.6))
            .expect("solve")
            .stored;
        let back = solve_intensity(Some(runoff), Some(250.0), Some(0.6))
            .expect("solve")
            .stored;
        assert!((back - 0.004).abs() < 1e-6, "inverse drifted: {back}");
    }
}
