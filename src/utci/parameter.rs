//! Stress-category thresholds for UTCI classification.

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Boundary temperatures [C] between the UTCI stress categories.
///
/// The names follow the original UTCI assessment scale; `cold` and `heat`
/// bound the no-stress band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtciThresholds {
    pub extreme_cold: f64,
    pub very_strong_cold: f64,
    pub strong_cold: f64,
    pub moderate_cold: f64,
    pub cold: f64,
    pub heat: f64,
    pub moderate_heat: f64,
    pub strong_heat: f64,
    pub very_strong_heat: f64,
    pub extreme_heat: f64,
}

impl Default for UtciThresholds {
    /// The published UTCI assessment scale boundaries.
    fn default() -> Self {
        Self {
            extreme_cold: -40.0,
            very_strong_cold: -27.0,
            strong_cold: -13.0,
            moderate_cold: 0.0,
            cold: 9.0,
            heat: 26.0,
            moderate_heat: 28.0,
            strong_heat: 32.0,
            very_strong_heat: 38.0,
            extreme_heat: 46.0,
        }
    }
}

/// A validated set of UTCI stress thresholds.
///
/// Construction checks the full monotone chain from extreme cold to extreme
/// heat; a constructed value can be classified against without further
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtciParameter {
    thresholds: UtciThresholds,
}

impl UtciParameter {
    pub fn new(thresholds: UtciThresholds) -> Result<Self> {
        let t = &thresholds;
        ensure!(
            t.extreme_cold <= t.very_strong_cold,
            "extreme_cold ({}) must be <= very_strong_cold ({})",
            t.extreme_cold,
            t.very_strong_cold
        );
        ensure!(
            t.very_strong_cold <= t.strong_cold,
            "very_strong_cold ({}) must be <= strong_cold ({})",
            t.very_strong_cold,
            t.strong_cold
        );
        ensure!(
            t.strong_cold <= t.moderate_cold,
            "strong_cold ({}) must be <= moderate_cold ({})",
            t.strong_cold,
            t.moderate_cold
        );
        ensure!(
            t.moderate_cold <= t.cold,
            "moderate_cold ({}) must be <= cold ({})",
            t.moderate_cold,
            t.cold
        );
        ensure!(
            t.cold <= t.heat,
            "cold ({}) must be <= heat ({})",
            t.cold,
            t.heat
        );
        ensure!(
            t.heat <= t.moderate_heat,
            "heat ({}) must be <= moderate_heat ({})",
            t.heat,
            t.moderate_heat
        );
        ensure!(
            t.moderate_heat <= t.strong_heat,
            "moderate_heat ({}) must be <= strong_heat ({})",
            t.moderate_heat,
            t.strong_heat
        );
        ensure!(
            t.strong_heat <= t.very_strong_heat,
            "strong_heat ({}) must be <= very_strong_heat ({})",
            t.strong_heat,
            t.very_strong_heat
        );
        ensure!(
            t.very_strong_heat <= t.extreme_heat,
            "very_strong_heat ({}) must be <= extreme_heat ({})",
            t.very_strong_heat,
            t.extreme_heat
        );
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &UtciThresholds {
        &self.thresholds
    }

    /// Whether the index falls in the no-stress band (bounds inclusive).
    pub fn is_comfortable(&self, utci: f64) -> bool {
        utci >= self.thresholds.cold && utci <= self.thresholds.heat
    }

    /// Cold (-1), neutral (0) or hot (+1).
    pub fn thermal_condition(&self, utci: f64) -> i8 {
        let t = &self.thresholds;
        if utci < t.cold {
            -1
        } else if utci > t.heat {
            1
        } else {
            0
        }
    }

    /// Five-point stress scale: -2 strong/extreme cold .. +2 strong/extreme
    /// heat.
    pub fn thermal_condition_five_point(&self, utci: f64) -> i8 {
        let t = &self.thresholds;
        if utci < t.strong_cold {
            -2
        } else if utci < t.cold {
            -1
        } else if utci > t.strong_heat {
            2
        } else if utci > t.heat {
            1
        } else {
            0
        }
    }

    /// Seven-point stress scale: -3 very strong/extreme cold .. +3 very
    /// strong/extreme heat.
    pub fn thermal_condition_seven_point(&self, utci: f64) -> i8 {
        let t = &self.thresholds;
        if utci < t.very_strong_cold {
            -3
        } else if utci < t.strong_cold {
            -2
        } else if utci < t.cold {
            -1
        } else if utci > t.very_strong_heat {
            3
        } else if utci > t.strong_heat {
            2
        } else if utci > t.heat {
            1
        } else {
            0
        }
    }

    /// Nine-point stress scale: -4 very strong/extreme cold .. +4 very
    /// strong/extreme heat, with slight and moderate bands on each side.
    pub fn thermal_condition_nine_point(&self, utci: f64) -> i8 {
        let t = &self.thresholds;
        if utci < t.very_strong_cold {
            -4
        } else if utci < t.strong_cold {
            -3
        } else if utci < t.moderate_cold {
            -2
        } else if utci < t.cold {
            -1
        } else if utci > t.very_strong_heat {
            4
        } else if utci > t.strong_heat {
            3
        } else if utci > t.moderate_heat {
            2
        } else if utci > t.heat {
            1
        } else {
            0
        }
    }

    /// Eleven-point stress scale: -5 extreme cold .. +5 extreme heat.
    pub fn thermal_condition_eleven_point(&self, utci: f64) -> i8 {
        let t = &self.thresholds;
        if utci < t.extreme_cold {
            -5
        } else if utci < t.very_strong_cold {
            -4
        } else if utci < t.strong_cold {
            -3
        } else if utci < t.moderate_cold {
            -2
        } else if utci < t.cold {
            -1
        } else if utci > t.extreme_heat {
            5
        } else if utci > t.very_strong_heat {
            4
        } else if utci > t.strong_heat {
            3
        } else if utci > t.moderate_heat {
            2
        } else if utci > t.heat {
            1
        } else {
            0
        }
    }

    /// Category 0-9 on the original UTCI assessment scale, 0 extreme cold
    /// stress through 5 no stress to 9 extreme heat stress.
    ///
    /// The published scale skips the moderate-heat boundary on the hot side
    /// (categories 7 and 8 both carry "strong heat stress"), so
    /// `moderate_heat` plays no part here; quirk of the source scale.
    pub fn original_utci_category(&self, utci: f64) -> u8 {
        let t = &self.thresholds;
        if utci < t.extreme_cold {
            0
        } else if utci < t.very_strong_cold {
            1
        } else if utci < t.strong_cold {
            2
        } else if utci < t.moderate_cold {
            3
        } else if utci < t.cold {
            4
        } else if utci > t.extreme_heat {
            9
        } else if utci > t.very_strong_heat {
            8
        } else if utci > t.strong_heat {
            7
        } else if utci > t.heat {
            6
        } else {
            5
        }
    }
}

impl Default for UtciParameter {
    fn default() -> Self {
        Self {
            thresholds: UtciThresholds::default(),
        }
    }
}
