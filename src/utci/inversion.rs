//! Solving a UTCI evaluation backwards: given a target index, find the one
//! input that produces it.

use anyhow::{Result, bail};

use crate::solver::{RootOutcome, secant_then_bisect};
use crate::utci::{UtciInputs, universal_thermal_climate_index};

/// The input solved for by [`calc_missing_utci_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtciSolveTarget {
    AirTemperature,
    RadiantTemperature,
    WindSpeed,
    RelativeHumidity,
}

/// Find the value of one input that yields `target_utci`, the other three
/// held at their values in `known` (the field being solved for is ignored).
///
/// Secant search starting from `[low_bound, up_bound]` with bisection
/// fallback; as with the PMV inversion, the secant is unbracketed and its
/// solution may land outside the interval. Useful for drawing comfort
/// polygons on psychrometric charts.
pub fn calc_missing_utci_input(
    target_utci: f64,
    known: &UtciInputs,
    missing: UtciSolveTarget,
    low_bound: f64,
    up_bound: f64,
    tolerance: f64,
) -> Result<f64> {
    let index = |x: f64| {
        let mut c = *known;
        match missing {
            UtciSolveTarget::AirTemperature => c.ta = x,
            UtciSolveTarget::RadiantTemperature => c.tr = x,
            UtciSolveTarget::WindSpeed => c.vel = x,
            UtciSolveTarget::RelativeHumidity => c.rh = x,
        }
        universal_thermal_climate_index(c.ta, c.tr, c.vel, c.rh)
    };

    // Wind speed lowers the index as it grows (in most of the domain);
    // reverse the residual so it crosses zero the same way as the others.
    let residual = |x: f64| match missing {
        UtciSolveTarget::WindSpeed => target_utci - index(x),
        _ => index(x) - target_utci,
    };

    match secant_then_bisect(low_bound, up_bound, residual, tolerance) {
        RootOutcome::Converged(x) => Ok(x),
        RootOutcome::NotFound => bail!(
            "{missing:?} search did not converge to UTCI {target_utci} from \
             [{low_bound}, {up_bound}]"
        ),
        RootOutcome::InvalidBracket => bail!(
            "UTCI {target_utci} is not reachable by {missing:?} within [{low_bound}, {up_bound}]"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_air_temperature() {
        let known = UtciInputs::new(0.0, 25.0, 1.0, 50.0);
        let ta = calc_missing_utci_input(
            20.0,
            &known,
            UtciSolveTarget::AirTemperature,
            0.0,
            100.0,
            0.001,
        )
        .unwrap();
        assert!((ta - 18.442664659625343).abs() < 1e-6, "ta = {ta}");

        let check = UtciInputs::new(ta, 25.0, 1.0, 50.0).evaluate();
        assert!((check - 20.0).abs() < 0.001, "utci = {check}");
    }

    #[test]
    fn test_solve_radiant_temperature() {
        let known = UtciInputs::new(22.0, 0.0, 1.0, 50.0);
        let tr = calc_missing_utci_input(
            20.0,
            &known,
            UtciSolveTarget::RadiantTemperature,
            0.0,
            100.0,
            0.001,
        )
        .unwrap();
        assert!((tr - 17.390708287384015).abs() < 1e-6, "tr = {tr}");
    }

    #[test]
    fn test_solve_wind_speed() {
        let known = UtciInputs::new(20.0, 20.0, 0.0, 50.0);
        let vel = calc_missing_utci_input(
            16.0,
            &known,
            UtciSolveTarget::WindSpeed,
            0.0,
            17.0,
            0.001,
        )
        .unwrap();
        assert!((vel - 3.138598079438941).abs() < 1e-6, "vel = {vel}");

        let check = UtciInputs::new(20.0, 20.0, vel, 50.0).evaluate();
        assert!((check - 16.0).abs() < 0.001, "utci = {check}");
    }

    #[test]
    fn test_solve_relative_humidity() {
        let known = UtciInputs::new(28.0, 28.0, 1.0, 0.0);
        let rh = calc_missing_utci_input(
            28.0,
            &known,
            UtciSolveTarget::RelativeHumidity,
            0.0,
            100.0,
            0.001,
        )
        .unwrap();
        assert!((rh - 50.36750666644873).abs() < 1e-6, "rh = {rh}");
    }

    #[test]
    fn test_unreachable_target_is_an_error() {
        // No wind speed in the clamped range can warm 20 C air to UTCI 30.
        let known = UtciInputs::new(20.0, 20.0, 0.0, 50.0);
        let outcome = calc_missing_utci_input(
            30.0,
            &known,
            UtciSolveTarget::WindSpeed,
            0.5,
            17.0,
            0.001,
        );
        assert!(outcome.is_err());
    }
}
