//! Fanger steady-state heat balance (ISO 7730 PMV/PPD).

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Convergence tolerance for the clothing-temperature fixed point.
const TCL_CONVERGENCE_EPS: f64 = 0.00015;
/// Iteration budget for the clothing-temperature fixed point.
const TCL_MAX_ITERATIONS: usize = 150;

/// Per-component heat losses of the Fanger balance [W/m²].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatLossBreakdown {
    /// Dry heat diffusion through the skin.
    pub conduction: f64,
    /// Evaporative loss from sweating.
    pub sweating: f64,
    /// Latent respiration loss.
    pub latent_respiration: f64,
    /// Dry respiration loss.
    pub dry_respiration: f64,
    /// Radiative loss from the clothing surface.
    pub radiation: f64,
    /// Convective loss from the clothing surface.
    pub convection: f64,
}

impl HeatLossBreakdown {
    /// Sum of all six components [W/m²].
    pub fn total(&self) -> f64 {
        self.conduction
            + self.sweating
            + self.latent_respiration
            + self.dry_respiration
            + self.radiation
            + self.convection
    }
}

/// Result of a single Fanger evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FangerResult {
    /// Predicted mean vote on the 7-point sensation scale
    /// (-3 cold .. 0 neutral .. +3 hot).
    pub pmv: f64,
    /// Predicted percentage of dissatisfied occupants [%].
    pub ppd: f64,
    /// Heat losses behind the vote.
    pub heat_loss: HeatLossBreakdown,
}

/// PMV/PPD of a steady-state condition.
///
/// `ta` air temperature [C], `tr` mean radiant temperature [C], `vel`
/// relative air speed [m/s], `rh` relative humidity [%], `met` metabolic
/// rate [met], `clo` clothing insulation [clo], `wme` external work [met].
///
/// Valid for still to lightly moving air; above ~0.1 m/s use the
/// elevated-airspeed pipeline in [`crate::pmv::engine`], which corrects the
/// inputs with the SET cooling effect before calling this.
///
/// Fails if the clothing-surface temperature iteration does not converge.
pub fn fanger_pmv(
    ta: f64,
    tr: f64,
    vel: f64,
    rh: f64,
    met: f64,
    clo: f64,
    wme: f64,
) -> Result<FangerResult> {
    // Water vapor pressure [Pa].
    let pa = rh * 10.0 * (16.6536 - 4030.183 / (ta + 235.0)).exp();

    let icl = 0.155 * clo; // clothing resistance [m²K/W]
    let m = met * 58.15; // metabolic rate [W/m²]
    let w = wme * 58.15; // external work [W/m²]
    let mw = m - w;

    // Clothing area factor.
    let fcl = if icl <= 0.078 {
        1.0 + 1.29 * icl
    } else {
        1.05 + 0.645 * icl
    };

    // Forced-convection coefficient.
    let hcf = 12.1 * vel.sqrt();

    let taa = ta + 273.0;
    let tra = tr + 273.0;

    // Clothing surface temperature by fixed-point iteration.
    let tcla = taa + (35.5 - ta) / (3.5 * icl + 0.1);
    let p1 = icl * fcl;
    let p2 = p1 * 3.96;
    let p3 = p1 * 100.0;
    let p4 = p1 * taa;
    let p5 = 308.7 - 0.028 * mw + p2 * (tra / 100.0).powi(4);

    let mut xn = tcla / 100.0;
    let mut xf = tcla / 50.0;
    let mut hc = hcf;
    let mut iterations = 0;
    while (xn - xf).abs() > TCL_CONVERGENCE_EPS {
        xf = (xf + xn) / 2.0;
        // Natural convection, whichever coefficient dominates wins.
        let hcn = 2.38 * (100.0 * xf - taa).abs().powf(0.25);
        hc = if hcf > hcn { hcf } else { hcn };
        xn = (p5 + p4 * hc - p2 * xf.powi(4)) / (100.0 + p3 * hc);
        iterations += 1;
        if iterations > TCL_MAX_ITERATIONS {
            bail!(
                "clothing temperature iteration did not converge within {} iterations \
                 (ta = {} C, vel = {} m/s)",
                TCL_MAX_ITERATIONS,
                ta,
                vel
            );
        }
    }
    let tcl = 100.0 * xn - 273.0;

    let heat_loss = HeatLossBreakdown {
        conduction: 3.05 * 0.001 * (5733.0 - 6.99 * mw - pa),
        sweating: if mw > 58.15 { 0.42 * (mw - 58.15) } else { 0.0 },
        latent_respiration: 1.7 * 0.00001 * m * (5867.0 - pa),
        dry_respiration: 0.0014 * m * (34.0 - ta),
        radiation: 3.96 * fcl * (xn.powi(4) - (tra / 100.0).powi(4)),
        convection: fcl * hc * (tcl - ta),
    };

    // Thermal sensation transfer coefficient.
    let ts = 0.303 * (-0.036 * m).exp() + 0.028;
    let pmv = ts * (mw - heat_loss.total());

    Ok(FangerResult {
        pmv,
        ppd: ppd_from_pmv(pmv),
        heat_loss,
    })
}

/// Predicted percentage dissatisfied [%] for a PMV value.
///
/// Even polynomial of the vote; never below 5 % (a perfectly neutral
/// environment still dissatisfies one in twenty people).
pub fn ppd_from_pmv(pmv: f64) -> f64 {
    100.0 - 95.0 * (-0.03353 * pmv.powi(4) - 0.2179 * pmv.powi(2)).exp()
}
