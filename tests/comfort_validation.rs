//! Validation of the comfort models against reference values and the
//! documented properties of each index.

use rand::Rng;

use thermal_comfort::batch::{pmv_batch, utci_batch};
use thermal_comfort::psychrometrics::{STANDARD_PRESSURE, humid_ratio};
use thermal_comfort::{
    ComfortInputs, PmvParameter, UtciInputs, UtciParameter, fanger_pmv, pierce_set,
    pmv_elevated_airspeed, pmv_from_ppd, ppd_from_pmv, universal_thermal_climate_index,
};

fn assert_close(name: &str, got: f64, expected: f64, tol: f64) {
    assert!(
        (got - expected).abs() <= tol,
        "{name}: got {got}, expected {expected} (tol {tol})"
    );
}

// Reference condition used throughout: a 19 C office with 23 C mean radiant
// temperature, 60 % humidity, 1.5 met activity and 0.4 clo clothing.
fn cool_office(vel: f64) -> ComfortInputs {
    ComfortInputs::new(19.0, 23.0, vel, 60.0, 1.5, 0.4)
}

#[test]
fn test_fanger_reference_values() {
    let r = fanger_pmv(19.0, 23.0, 0.1, 60.0, 1.5, 0.4, 0.0).unwrap();
    assert_close("pmv", r.pmv, -0.6806334984767242, 1e-9);
    assert_close("ppd", r.ppd, 14.737376427824898, 1e-7);
    assert_close("heat_loss total", r.heat_loss.total(), 103.78004, 1e-4);
}

#[test]
fn test_pierce_set_reference_value() {
    let set = pierce_set(19.0, 23.0, 0.5, 60.0, 1.5, 0.4, 0.0);
    assert_close("set", set, 18.89113827688506, 1e-6);
}

#[test]
fn test_elevated_airspeed_reference_values() {
    let r = pmv_elevated_airspeed(&cool_office(0.5)).unwrap();
    assert_close("pmv", r.pmv, -1.6745145094224465, 1e-6);
    assert_close("ppd", r.ppd, 60.38297488215319, 1e-4);
    assert_close("set", r.set, 18.89113827688506, 1e-6);
    assert_close("ce", r.cooling_effect, 3.6439985139666446, 1e-4);
}

#[test]
fn test_utci_reference_values() {
    let u = universal_thermal_climate_index(20.0, 20.0, 3.0, 50.0);
    assert_close("utci mild", u, 16.242240717451587, 1e-8);
    let u = universal_thermal_climate_index(30.0, 30.0, 0.5, 90.0);
    assert_close("utci hot humid", u, 35.51129365706173, 1e-8);
}

#[test]
fn test_still_air_engine_equals_plain_fanger() {
    // Below the threshold the pipeline must reproduce Fanger exactly, not
    // merely approximately: no cooling-effect solve happens at all.
    let inputs = cool_office(0.05);
    let engine = pmv_elevated_airspeed(&inputs).unwrap();
    let fanger = fanger_pmv(19.0, 23.0, 0.05, 60.0, 1.5, 0.4, 0.0).unwrap();
    assert_eq!(engine.pmv, fanger.pmv);
    assert_eq!(engine.ppd, fanger.ppd);
    assert_eq!(engine.heat_loss, fanger.heat_loss);
    assert_eq!(engine.cooling_effect, 0.0);
    assert_eq!(engine.ta_adj, 19.0);
}

#[test]
fn test_cooling_effect_is_monotone_in_air_speed() {
    let mut last = 0.0;
    for vel in [0.15, 0.3, 0.5, 0.8, 1.2, 2.0, 3.0] {
        let r = pmv_elevated_airspeed(&cool_office(vel)).unwrap();
        assert!(
            r.cooling_effect >= last,
            "cooling effect decreased at {vel} m/s: {} < {last}",
            r.cooling_effect
        );
        last = r.cooling_effect;
    }
}

#[test]
fn test_ppd_floor_and_monotonicity() {
    assert_eq!(ppd_from_pmv(0.0), 5.0);
    // |pmv1| < |pmv2| implies ppd(pmv1) <= ppd(pmv2), on both sides of zero.
    let mut last = 5.0;
    for i in 1..=60 {
        let pmv = 0.05 * i as f64;
        let warm = ppd_from_pmv(pmv);
        let cool = ppd_from_pmv(-pmv);
        assert_eq!(warm, cool, "ppd not symmetric at {pmv}");
        assert!(warm >= last, "ppd decreased at {pmv}");
        last = warm;
    }
}

#[test]
fn test_ppd_inversion_round_trip() {
    for i in 1..=25 {
        let pmv = 0.1 * i as f64; // 0.1 .. 2.5
        let ppd = ppd_from_pmv(pmv);
        let (lower, upper) = pmv_from_ppd(ppd, 0.001).unwrap();
        assert_eq!(upper, -lower);
        assert_close("recovered pmv", upper, pmv, 0.01);
        assert_close("ppd at lower root", ppd_from_pmv(lower), ppd, 0.01);
    }
}

#[test]
fn test_utci_speed_clamp_idempotence() {
    for (ta, rh) in [(-10.0, 80.0), (5.0, 50.0), (20.0, 50.0), (32.0, 70.0)] {
        let over = universal_thermal_climate_index(ta, ta, 18.0, rh);
        let at_max = universal_thermal_climate_index(ta, ta, 17.0, rh);
        assert_eq!(over, at_max, "high clamp not idempotent at {ta} C");

        let under = universal_thermal_climate_index(ta, ta, 0.1, rh);
        let at_min = universal_thermal_climate_index(ta, ta, 0.5, rh);
        assert_eq!(under, at_min, "low clamp not idempotent at {ta} C");
    }
}

#[test]
fn test_random_indoor_conditions_stay_physical() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let ta = rng.gen_range(15.0..35.0);
        let tr = ta + rng.gen_range(-3.0..3.0);
        let vel = rng.gen_range(0.0..1.5);
        let rh = rng.gen_range(20.0..80.0);
        let met = rng.gen_range(1.0..2.0);
        let clo = rng.gen_range(0.3..1.0);

        let inputs = ComfortInputs::new(ta, tr, vel, rh, met, clo);
        let r = pmv_elevated_airspeed(&inputs).unwrap_or_else(|e| {
            panic!("engine failed at ta {ta}, vel {vel}, met {met}, clo {clo}: {e}")
        });
        assert!(r.pmv.is_finite());
        assert!(r.set.is_finite());
        assert!(
            (5.0..=100.0).contains(&r.ppd),
            "ppd out of range: {} at ta {ta}",
            r.ppd
        );
        assert!(
            r.cooling_effect >= 0.0,
            "negative cooling effect {} at vel {vel}",
            r.cooling_effect
        );
        if vel <= inputs.still_air_threshold {
            assert_eq!(r.cooling_effect, 0.0);
        }
    }
}

#[test]
fn test_random_outdoor_utci_is_finite_and_bounded() {
    // Sampling stays inside the regression's fitted domain (the polynomial
    // diverges freely outside it, e.g. above ~5 kPa vapor pressure).
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let ta = rng.gen_range(-40.0..30.0);
        let tr = ta + rng.gen_range(-10.0..20.0);
        let vel = rng.gen_range(0.0..20.0);
        let rh = rng.gen_range(5.0..100.0);
        let u = universal_thermal_climate_index(ta, tr, vel, rh);
        assert!(u.is_finite(), "utci not finite at ta {ta}, vel {vel}");
        // Within the domain the index stays within a bounded margin of the
        // air temperature (wind chill at -12 C and 17 m/s reaches about -46).
        assert!(
            (u - ta).abs() < 60.0,
            "implausible utci {u} at ta {ta}, tr {tr}, vel {vel}, rh {rh}"
        );
    }
}

#[test]
fn test_pmv_classification_of_engine_output() {
    let params = PmvParameter::default();

    let r = pmv_elevated_airspeed(&cool_office(0.5)).unwrap();
    let hr = humid_ratio(19.0, 60.0, STANDARD_PRESSURE);
    assert!(!params.is_comfortable(r.ppd, hr));
    assert_eq!(params.thermal_condition(r.pmv, r.ppd), -1);
    assert_eq!(params.discomfort_reason(r.pmv, r.ppd, hr), -1);

    // A neutral condition classifies as comfortable.
    let neutral = ComfortInputs::new(25.0, 25.0, 0.1, 50.0, 1.2, 0.5);
    let r = pmv_elevated_airspeed(&neutral).unwrap();
    let hr = humid_ratio(25.0, 50.0, STANDARD_PRESSURE);
    assert!(params.is_comfortable(r.ppd, hr));
    assert_eq!(params.thermal_condition(r.pmv, r.ppd), 0);
    assert_eq!(params.discomfort_reason(r.pmv, r.ppd, hr), 0);
}

#[test]
fn test_utci_classification_of_reference_values() {
    let params = UtciParameter::default();

    let mild = universal_thermal_climate_index(20.0, 20.0, 3.0, 50.0);
    assert!(params.is_comfortable(mild));
    assert_eq!(params.original_utci_category(mild), 5);

    let hot = universal_thermal_climate_index(30.0, 30.0, 0.5, 90.0);
    assert!(!params.is_comfortable(hot));
    assert_eq!(params.thermal_condition(hot), 1);
    assert_eq!(params.thermal_condition_five_point(hot), 2);

    let frigid = universal_thermal_climate_index(-30.0, -30.0, 8.0, 70.0);
    assert_eq!(params.thermal_condition_eleven_point(frigid), -5);
    assert_eq!(params.original_utci_category(frigid), 0);
}

#[test]
fn test_batch_results_match_per_point_evaluation() {
    let pmv_conditions: Vec<ComfortInputs> = (0..8)
        .map(|i| ComfortInputs::new(18.0 + i as f64, 20.0, 0.1 * i as f64, 50.0, 1.2, 0.6))
        .collect();
    let results = pmv_batch(&pmv_conditions).unwrap();
    for (inputs, batch) in pmv_conditions.iter().zip(&results) {
        assert_eq!(*batch, pmv_elevated_airspeed(inputs).unwrap());
    }

    let utci_conditions: Vec<UtciInputs> = (0..8)
        .map(|i| UtciInputs::new(-10.0 + 5.0 * i as f64, -5.0 + 5.0 * i as f64, 2.0, 60.0))
        .collect();
    let values = utci_batch(&utci_conditions);
    for (inputs, value) in utci_conditions.iter().zip(&values) {
        assert_eq!(*value, inputs.evaluate());
    }
}
