//! Acceptability thresholds for PMV-based comfort classification.

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::pmv::engine::DEFAULT_STILL_AIR_THRESHOLD;

/// Thresholds separating comfortable from uncomfortable PMV conditions.
///
/// Immutable once built; [`PmvParameter::new`] validates every bound, so a
/// constructed value is always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmvParameter {
    ppd_comfort_thresh: f64,
    humid_ratio_upper: f64,
    humid_ratio_lower: f64,
    still_air_threshold: f64,
}

impl PmvParameter {
    /// Parameter set with explicit thresholds.
    ///
    /// `ppd_comfort_thresh` is the PPD [%] above which conditions count as
    /// uncomfortable (valid 5-100), `humid_ratio_lower`/`humid_ratio_upper`
    /// bound the acceptable humidity ratio [kg/kg] (each in [0, 1], lower
    /// not above upper), `still_air_threshold` is the air speed [m/s] below
    /// which no SET correction applies (non-negative).
    pub fn new(
        ppd_comfort_thresh: f64,
        humid_ratio_upper: f64,
        humid_ratio_lower: f64,
        still_air_threshold: f64,
    ) -> Result<Self> {
        ensure!(
            (5.0..=100.0).contains(&ppd_comfort_thresh),
            "ppd_comfort_thresh must be between 5 and 100, got {ppd_comfort_thresh}"
        );
        ensure!(
            (0.0..=1.0).contains(&humid_ratio_upper),
            "humid_ratio_upper must be between 0 and 1, got {humid_ratio_upper}"
        );
        ensure!(
            (0.0..=1.0).contains(&humid_ratio_lower),
            "humid_ratio_lower must be between 0 and 1, got {humid_ratio_lower}"
        );
        ensure!(
            humid_ratio_lower <= humid_ratio_upper,
            "humid_ratio_lower must not exceed humid_ratio_upper, got {humid_ratio_lower} > \
             {humid_ratio_upper}"
        );
        ensure!(
            still_air_threshold >= 0.0,
            "still_air_threshold must be non-negative, got {still_air_threshold}"
        );
        Ok(Self {
            ppd_comfort_thresh,
            humid_ratio_upper,
            humid_ratio_lower,
            still_air_threshold,
        })
    }

    /// Parameter set with the PPD threshold of an EN-15251 comfort class
    /// and default humidity/air-speed bounds.
    pub fn from_comfort_class(comfort_class: u8) -> Result<Self> {
        let mut params = Self::default();
        params.ppd_comfort_thresh = ppd_threshold_from_comfort_class(comfort_class)?;
        Ok(params)
    }

    /// PPD [%] above which conditions count as uncomfortable.
    pub fn ppd_comfort_thresh(&self) -> f64 {
        self.ppd_comfort_thresh
    }

    /// Upper bound of the acceptable humidity ratio [kg/kg].
    pub fn humid_ratio_upper(&self) -> f64 {
        self.humid_ratio_upper
    }

    /// Lower bound of the acceptable humidity ratio [kg/kg].
    pub fn humid_ratio_lower(&self) -> f64 {
        self.humid_ratio_lower
    }

    /// Air speed [m/s] at or below which no SET correction applies.
    pub fn still_air_threshold(&self) -> f64 {
        self.still_air_threshold
    }

    /// Whether a condition with this PPD and humidity ratio is comfortable.
    pub fn is_comfortable(&self, ppd: f64, humid_ratio: f64) -> bool {
        ppd <= self.ppd_comfort_thresh
            && humid_ratio >= self.humid_ratio_lower
            && humid_ratio <= self.humid_ratio_upper
    }

    /// Cold (-1), neutral (0) or hot (+1).
    pub fn thermal_condition(&self, pmv: f64, ppd: f64) -> i8 {
        if ppd >= self.ppd_comfort_thresh {
            if pmv > 0.0 { 1 } else { -1 }
        } else {
            0
        }
    }

    /// Why a condition is uncomfortable: -2 too dry, -1 too cold, 0
    /// comfortable, +1 too hot, +2 too humid.
    ///
    /// Thermal discomfort is checked before the humidity bounds, so a cold
    /// and dry condition reports cold.
    pub fn discomfort_reason(&self, pmv: f64, ppd: f64, humid_ratio: f64) -> i8 {
        if ppd >= self.ppd_comfort_thresh {
            if pmv > 0.0 { 1 } else { -1 }
        } else if humid_ratio < self.humid_ratio_lower {
            -2
        } else if humid_ratio > self.humid_ratio_upper {
            2
        } else {
            0
        }
    }
}

impl Default for PmvParameter {
    /// PPD threshold 10 %, humidity ratio unbounded within [0, 1],
    /// still-air threshold 0.1 m/s.
    fn default() -> Self {
        Self {
            ppd_comfort_thresh: 10.0,
            humid_ratio_upper: 1.0,
            humid_ratio_lower: 0.0,
            still_air_threshold: DEFAULT_STILL_AIR_THRESHOLD,
        }
    }
}

/// PPD acceptability threshold [%] of an EN-15251 comfort class (1, 2 or 3).
pub fn ppd_threshold_from_comfort_class(comfort_class: u8) -> Result<f64> {
    match comfort_class {
        1 => Ok(6.0),
        2 => Ok(10.0),
        3 => Ok(15.0),
        _ => bail!("EN-15251 comfort class must be 1, 2 or 3, got {comfort_class}"),
    }
}
