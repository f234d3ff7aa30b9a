//! Solving a PMV evaluation backwards: given a target vote, find the one
//! input that produces it.

use anyhow::{Result, bail, ensure};

use crate::pmv::engine::{ComfortInputs, pmv_elevated_airspeed};
use crate::pmv::fanger::ppd_from_pmv;
use crate::solver::{RootOutcome, bisect, secant_then_bisect};

/// The input solved for by [`calc_missing_pmv_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmvSolveTarget {
    AirTemperature,
    RadiantTemperature,
    AirSpeed,
    RelativeHumidity,
    MetabolicRate,
    ClothingInsulation,
    ExternalWork,
}

/// Find the value of one input that yields `target_pmv`, all other inputs
/// held at their values in `known` (the field being solved for is ignored).
///
/// The search starts from `[low_bound, up_bound]`; for most targets this is
/// a secant search with bisection fallback, so the solution may legitimately
/// land outside the interval. Clothing insulation is solved with bisection
/// directly, which behaves better on its flat response curve.
pub fn calc_missing_pmv_input(
    target_pmv: f64,
    known: &ComfortInputs,
    missing: PmvSolveTarget,
    low_bound: f64,
    up_bound: f64,
    tolerance: f64,
) -> Result<f64> {
    let vote = |x: f64| {
        let mut c = *known;
        match missing {
            PmvSolveTarget::AirTemperature => c.ta = x,
            PmvSolveTarget::RadiantTemperature => c.tr = x,
            PmvSolveTarget::AirSpeed => c.vel = x,
            PmvSolveTarget::RelativeHumidity => c.rh = x,
            PmvSolveTarget::MetabolicRate => c.met = x,
            PmvSolveTarget::ClothingInsulation => c.clo = x,
            PmvSolveTarget::ExternalWork => c.wme = x,
        }
        // Engine failures surface as NaN, which the solvers report as
        // non-convergence.
        match pmv_elevated_airspeed(&c) {
            Ok(r) => r.pmv,
            Err(_) => f64::NAN,
        }
    };

    // Air speed and external work lower the vote as they grow; orient the
    // residual so it crosses zero the same way for every target.
    let residual = |x: f64| match missing {
        PmvSolveTarget::AirSpeed | PmvSolveTarget::ExternalWork => target_pmv - vote(x),
        _ => vote(x) - target_pmv,
    };

    let outcome = match missing {
        PmvSolveTarget::ClothingInsulation => {
            bisect(low_bound, up_bound, residual, tolerance, 0.0)
        }
        _ => secant_then_bisect(low_bound, up_bound, residual, tolerance),
    };

    match outcome {
        RootOutcome::Converged(x) => Ok(x),
        RootOutcome::NotFound => bail!(
            "{missing:?} search did not converge to PMV {target_pmv} from [{low_bound}, {up_bound}]"
        ),
        RootOutcome::InvalidBracket => bail!(
            "PMV {target_pmv} is not reachable by {missing:?} within [{low_bound}, {up_bound}]"
        ),
    }
}

/// The two PMV values producing a given PPD.
///
/// The PPD polynomial is even, so the roots come as an exact plus/minus
/// pair `(pmv_lower, -pmv_lower)`. Only `5 < ppd < 100` is invertible.
pub fn pmv_from_ppd(ppd: f64, ppd_error: f64) -> Result<(f64, f64)> {
    ensure!(
        ppd > 5.0 && ppd < 100.0,
        "PPD of {ppd} % cannot be produced by any PMV (valid range is 5-100, exclusive)"
    );
    let residual = |pmv: f64| ppd_from_pmv(pmv) - ppd;
    match secant_then_bisect(-3.0, 0.0, residual, ppd_error) {
        RootOutcome::Converged(lower) => Ok((lower, -lower)),
        outcome => bail!("PPD {ppd} % inversion failed ({outcome:?})"),
    }
}
