//! Moist-air property helpers shared by the comfort models.

/// Standard barometric pressure [Pa].
pub const STANDARD_PRESSURE: f64 = 101325.0;

/// Saturated water vapor pressure [torr] at air temperature `ta` [C].
///
/// Antoine-style fit used by the two-node physiology model, which works in
/// mmHg throughout.
pub fn saturated_vapor_pressure_torr(ta: f64) -> f64 {
    (18.6686 - 4030.183 / (ta + 235.0)).exp()
}

/// Saturated water vapor pressure [Pa] at absolute temperature `t_kelvin`.
///
/// Wagner-type correlation above 273 K, sublimation correlation over ice
/// below it.
pub fn saturated_vapor_pressure(t_kelvin: f64) -> f64 {
    if t_kelvin >= 273.0 {
        let sigma = 1.0 - t_kelvin / 647.096;
        let expression = sigma * (-7.85951783)
            + sigma.powf(1.5) * 1.84408259
            + sigma.powi(3) * (-11.7866487)
            + sigma.powf(3.5) * 22.6807411
            + sigma.powi(4) * (-15.9618719)
            + sigma.powf(7.5) * 1.80122502;
        ((647.096 / t_kelvin) * expression).exp() * 22064000.0
    } else {
        let theta = t_kelvin / 273.16;
        let expression =
            (1.0 - theta.powf(-1.5)) * (-13.928169) + (1.0 - theta.powf(-1.25)) * 34.707823;
        expression.exp() * 611.657
    }
}

/// Humidity ratio [kg water / kg dry air] of moist air.
///
/// `ta` is air temperature [C], `rh` relative humidity [%], `press`
/// barometric pressure [Pa] (use [`STANDARD_PRESSURE`] at sea level).
pub fn humid_ratio(ta: f64, rh: f64, press: f64) -> f64 {
    let partial_pressure = rh * 0.01 * saturated_vapor_pressure(ta + 273.0);
    partial_pressure * 0.621991 / (press - partial_pressure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturated_vapor_pressure_torr() {
        // 17.5 torr at 20 C is the textbook value.
        assert!((saturated_vapor_pressure_torr(20.0) - 17.53082542615424).abs() < 1e-9);
        assert!((saturated_vapor_pressure_torr(33.7) - 39.243261751632225).abs() < 1e-9);
    }

    #[test]
    fn test_saturated_vapor_pressure_reference_points() {
        // Boiling point: ~1 atm.
        assert!((saturated_vapor_pressure(373.15) - 101418.00716202069).abs() < 1e-3);
        // Room temperature.
        assert!((saturated_vapor_pressure(293.15) - 2339.1945816096377).abs() < 1e-6);
        // Below freezing, sublimation branch.
        assert!((saturated_vapor_pressure(253.15) - 103.26013691552815).abs() < 1e-6);
        // Triple point, ~611.7 Pa.
        assert!((saturated_vapor_pressure(273.16) - 611.657).abs() < 1e-3);
    }

    #[test]
    fn test_saturated_vapor_pressure_is_monotone() {
        let mut last = saturated_vapor_pressure(243.15);
        for i in 1..=40 {
            let t = 243.15 + 2.5 * i as f64;
            let svp = saturated_vapor_pressure(t);
            assert!(svp > last, "svp not increasing at {t} K");
            last = svp;
        }
    }

    #[test]
    fn test_humid_ratio() {
        assert!((humid_ratio(30.0, 50.0, STANDARD_PRESSURE) - 0.01319739670111252).abs() < 1e-12);
        assert!((humid_ratio(20.0, 100.0, STANDARD_PRESSURE) - 0.014559435477850872).abs() < 1e-12);
        assert!(
            (humid_ratio(-20.0, 50.0, STANDARD_PRESSURE) - 0.0003125594575498623).abs() < 1e-12
        );
        // Lower pressure holds more water per kg of dry air.
        assert!((humid_ratio(25.0, 50.0, 90000.0) - 0.011048611793484608).abs() < 1e-12);
    }

    #[test]
    fn test_humid_ratio_scales_with_humidity() {
        let half = humid_ratio(25.0, 50.0, STANDARD_PRESSURE);
        let full = humid_ratio(25.0, 100.0, STANDARD_PRESSURE);
        assert!(full > 1.9 * half && full < 2.1 * half, "half {half}, full {full}");
    }
}
