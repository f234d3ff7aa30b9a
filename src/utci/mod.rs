//! Universal Thermal Climate Index, the outdoor "feels-like" temperature.
//!
//! UTCI condenses the response of the multi-node Fiala physiological model
//! into a single equivalent temperature. The detailed model is far too
//! expensive to evaluate per weather hour, so this module uses the published
//! 6th-order polynomial regression fitted to it, valid for wind speeds of
//! 0.5 to 17 m/s (inputs outside the range are clamped).

pub mod inversion;
pub mod parameter;
mod polynomial;

use serde::{Deserialize, Serialize};

use self::polynomial::utci_polynomial;

/// Wind speed [m/s] below which the regression stops being valid.
pub const MIN_WIND_SPEED: f64 = 0.5;
/// Wind speed [m/s] above which the regression stops being valid.
pub const MAX_WIND_SPEED: f64 = 17.0;

/// Environmental factors of a UTCI evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtciInputs {
    /// Air temperature [C].
    pub ta: f64,
    /// Mean radiant temperature [C].
    pub tr: f64,
    /// Wind speed 10 m above ground [m/s].
    pub vel: f64,
    /// Relative humidity [%].
    pub rh: f64,
}

impl UtciInputs {
    pub fn new(ta: f64, tr: f64, vel: f64, rh: f64) -> Self {
        Self { ta, tr, vel, rh }
    }

    /// UTCI [C] of these inputs.
    pub fn evaluate(&self) -> f64 {
        universal_thermal_climate_index(self.ta, self.tr, self.vel, self.rh)
    }
}

/// Universal Thermal Climate Index [C].
///
/// `ta` air temperature [C], `tr` mean radiant temperature [C], `vel` wind
/// speed 10 m above ground [m/s] (clamped to [0.5, 17]), `rh` relative
/// humidity [%]. The clamp makes the evaluation idempotent in speed: any
/// speed outside the range yields the value at the nearer bound.
pub fn universal_thermal_climate_index(ta: f64, tr: f64, vel: f64, rh: f64) -> f64 {
    let vel = vel.clamp(MIN_WIND_SPEED, MAX_WIND_SPEED);

    let eh_pa = saturated_vapor_pressure_hpa(ta) * (rh / 100.0);
    let pa_pr = eh_pa / 10.0; // vapor pressure [kPa]
    let d_tr = tr - ta;

    utci_polynomial(ta, vel, d_tr, pa_pr)
}

/// Coefficients of the UTCI-specific saturation vapor pressure fit, by
/// ascending power of absolute temperature starting at -2.
const SVP_COEFFICIENTS: [f64; 7] = [
    -2836.5744,
    -6028.076559,
    19.54263612,
    -0.02737830188,
    0.000016261698,
    7.0229056e-10,
    -1.8680009e-13,
];

/// Saturated water vapor pressure [hPa] at air temperature `ta` [C].
///
/// This fit is specific to the UTCI regression; the comfort models in
/// [`crate::pmv`] use the fits in [`crate::psychrometrics`] instead.
pub fn saturated_vapor_pressure_hpa(ta: f64) -> f64 {
    let tk = ta + 273.15;
    let mut es = 2.7150305 * tk.ln();
    for (i, g) in SVP_COEFFICIENTS.iter().enumerate() {
        es += g * tk.powi(i as i32 - 2);
    }
    es.exp() * 0.01
}
