//! PMV evaluation valid at any air speed.
//!
//! Fanger's heat balance assumes still to lightly moving air. For faster air
//! the pipeline first measures how much the air movement cools the subject
//! (via the two-node SET) and then evaluates Fanger at an equivalent
//! still-air condition lowered by that cooling effect.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::pmv::fanger::{HeatLossBreakdown, fanger_pmv};
use crate::pmv::two_node::pierce_set;
use crate::solver::{RootOutcome, secant_then_bisect};

/// Air speed [m/s] at or below which a condition counts as still air.
pub const DEFAULT_STILL_AIR_THRESHOLD: f64 = 0.1;
/// Cooling-effect search interval [C].
const COOLING_EFFECT_BRACKET: (f64, f64) = (0.0, 40.0);
/// Cooling-effect search tolerance [C].
const COOLING_EFFECT_EPS: f64 = 0.001;

/// Environmental and personal factors of a comfort evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortInputs {
    /// Air temperature [C].
    pub ta: f64,
    /// Mean radiant temperature [C].
    pub tr: f64,
    /// Relative air speed [m/s].
    pub vel: f64,
    /// Relative humidity [%].
    pub rh: f64,
    /// Metabolic rate [met].
    pub met: f64,
    /// Clothing insulation [clo].
    pub clo: f64,
    /// External work [met], normally 0.
    #[serde(default)]
    pub wme: f64,
    /// Air speed [m/s] at or below which the condition counts as still.
    #[serde(default = "default_still_air_threshold")]
    pub still_air_threshold: f64,
}

fn default_still_air_threshold() -> f64 {
    DEFAULT_STILL_AIR_THRESHOLD
}

impl ComfortInputs {
    /// Inputs from the six primary factors; no external work, still-air
    /// threshold 0.1 m/s.
    pub fn new(ta: f64, tr: f64, vel: f64, rh: f64, met: f64, clo: f64) -> Self {
        Self {
            ta,
            tr,
            vel,
            rh,
            met,
            clo,
            wme: 0.0,
            still_air_threshold: DEFAULT_STILL_AIR_THRESHOLD,
        }
    }
}

/// Full result of an elevated-airspeed PMV evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmvResult {
    /// Predicted mean vote (-3 cold .. +3 hot).
    pub pmv: f64,
    /// Predicted percentage dissatisfied [%].
    pub ppd: f64,
    /// Standard Effective Temperature at the actual air speed [C].
    pub set: f64,
    /// Air temperature after subtracting the cooling effect [C].
    pub ta_adj: f64,
    /// Cooling effect of the elevated air speed [C]; 0 in still air.
    pub cooling_effect: f64,
    /// Fanger heat losses at the adjusted condition.
    pub heat_loss: HeatLossBreakdown,
}

/// PMV/PPD of a condition at any air speed.
///
/// At or below the still-air threshold this is a plain Fanger evaluation.
/// Above it, the cooling effect `ce` is solved so that still air at
/// `(ta - ce, tr - ce)` reproduces the SET of the actual condition, and
/// Fanger is evaluated at that adjusted condition.
pub fn pmv_elevated_airspeed(inputs: &ComfortInputs) -> Result<PmvResult> {
    let ComfortInputs {
        ta,
        tr,
        vel,
        rh,
        met,
        clo,
        wme,
        still_air_threshold: still,
    } = *inputs;

    let set = pierce_set(ta, tr, vel, rh, met, clo, wme);

    if vel <= still {
        let fanger = fanger_pmv(ta, tr, vel, rh, met, clo, wme)?;
        return Ok(PmvResult {
            pmv: fanger.pmv,
            ppd: fanger.ppd,
            set,
            ta_adj: ta,
            cooling_effect: 0.0,
            heat_loss: fanger.heat_loss,
        });
    }

    // Cooling effect: the offset at which still air matches the actual SET.
    let residual = |ce: f64| set - pierce_set(ta - ce, tr - ce, still, rh, met, clo, wme);
    let (low, up) = COOLING_EFFECT_BRACKET;
    let cooling_effect = match secant_then_bisect(low, up, residual, COOLING_EFFECT_EPS) {
        RootOutcome::Converged(ce) => ce,
        RootOutcome::NotFound => {
            bail!("cooling effect search did not converge (ta = {ta} C, vel = {vel} m/s)")
        }
        RootOutcome::InvalidBracket => {
            bail!(
                "cooling effect not bracketed in [{low}, {up}] C (ta = {ta} C, vel = {vel} m/s)"
            )
        }
    };

    let ta_adj = ta - cooling_effect;
    let fanger = fanger_pmv(ta_adj, tr - cooling_effect, still, rh, met, clo, wme)?;
    Ok(PmvResult {
        pmv: fanger.pmv,
        ppd: fanger.ppd,
        set,
        ta_adj,
        cooling_effect,
        heat_loss: fanger.heat_loss,
    })
}
