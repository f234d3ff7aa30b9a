//! Pierce two-node (Gagge) model of human thermoregulation.
//!
//! The body is split into a skin and a core compartment whose temperatures
//! are stepped minute by minute over a one-hour exposure, with skin blood
//! flow, regulatory sweating and shivering responding to the drift from the
//! neutral set points. The final physiological state is then mapped to the
//! Standard Effective Temperature.

use crate::psychrometrics::saturated_vapor_pressure_torr;

/// Clothing area factor per clo of the standard garment.
const K_CLO: f64 = 0.25;
/// Body weight [kg] of the standard subject.
const BODY_WEIGHT: f64 = 69.9;
/// DuBois body surface area [m²] of the standard subject.
const BODY_SURFACE_AREA: f64 = 1.8258;
/// Metabolic conversion factor [W/m² per met].
const MET_FACTOR: f64 = 58.2;
/// Driving coefficient for regulatory sweating [g/(m²·h·K)].
const CSW: f64 = 170.0;
/// Driving coefficient for vasodilation.
const CDIL: f64 = 120.0;
/// Driving coefficient for vasoconstriction.
const CSTR: f64 = 0.5;
/// Neutral skin temperature [C].
const SKIN_TEMP_NEUTRAL: f64 = 33.7;
/// Neutral core temperature [C].
const CORE_TEMP_NEUTRAL: f64 = 36.49;
/// Neutral mean body temperature [C].
const BODY_TEMP_NEUTRAL: f64 = 36.49;
/// Neutral skin blood flow [L/(m²·h)].
const SKIN_BLOOD_FLOW_NEUTRAL: f64 = 6.3;
/// Radiative heat transfer coefficient [W/(m²·K)].
const CHR: f64 = 4.7;
/// Exposure length [min].
const EXPOSURE_MINUTES: usize = 60;
/// Finite-difference step of the SET solve [C].
const SET_SOLVE_DELTA: f64 = 0.0001;
/// Convergence tolerance of the SET solve [C].
const SET_SOLVE_TOL: f64 = 0.01;

/// Standard Effective Temperature [C] of a condition.
///
/// SET is the air temperature of an imaginary standard environment (50 % rh,
/// still air, 1 met, 0.6 clo equivalent) in which a standard subject would
/// exchange the same total heat at the same skin temperature and wettedness
/// as in the actual condition.
///
/// `ta` air temperature [C], `tr` mean radiant temperature [C], `vel`
/// relative air speed [m/s] (floored at 0.1), `rh` relative humidity [%],
/// `met` metabolic rate [met], `clo` clothing insulation [clo], `wme`
/// external work [met].
pub fn pierce_set(ta: f64, tr: f64, vel: f64, rh: f64, met: f64, clo: f64, wme: f64) -> f64 {
    let vapor_pressure = rh * saturated_vapor_pressure_torr(ta) / 100.0; // [torr]
    let air_speed = vel.max(0.1);

    // Physiological state, starting neutral.
    let mut skin_temp = SKIN_TEMP_NEUTRAL;
    let mut core_temp = CORE_TEMP_NEUTRAL;
    let mut skin_blood_flow = SKIN_BLOOD_FLOW_NEUTRAL;
    let mut alfa = 0.1; // skin fraction of total body mass
    let mut esk = 0.1 * met; // total evaporative loss from skin [W/m²]

    let pressure_atm: f64 = 101325.0 / 1000.0 * 0.009869;
    let lewis_ratio = 2.2 / pressure_atm; // [K/torr]

    let rcl = 0.155 * clo; // clothing resistance [m²K/W]
    let facl = 1.0 + 0.15 * clo; // clothing area factor
    let rm = met * MET_FACTOR; // resting metabolic rate [W/m²]
    let mut m = rm; // current rate incl. shivering [W/m²]

    // Skin wettedness ceiling and vapor permeation efficiency.
    let (wcrit, icl) = if clo <= 0.0 {
        (0.38 * air_speed.powf(-0.29), 1.0)
    } else {
        (0.59 * air_speed.powf(-0.08), 0.45)
    };

    // Convective coefficient: free vs forced, whichever dominates.
    let chc_free = 3.0 * pressure_atm.powf(0.53);
    let chc_forced = 8.600001 * (air_speed * pressure_atm).powf(0.53);
    let chc = chc_free.max(chc_forced);
    let ctc = CHR + chc;
    let ra = 1.0 / (facl * ctc); // air layer resistance [m²K/W]
    let operative_temp = (CHR * tr + chc * ta) / ctc;

    // Evaporative resistances of the air layer and the clothing.
    let rea = 1.0 / (lewis_ratio * facl * chc);
    let recl = rcl / (lewis_ratio * icl);

    let mut dry = 0.0;
    let mut pwet = 0.0;
    for _ in 0..EXPOSURE_MINUTES {
        // Heat flows [W/m²].
        dry = (skin_temp - operative_temp) / (ra + rcl);
        let core_to_skin = (core_temp - skin_temp) * (5.28 + 1.163 * skin_blood_flow);
        let latent_resp = 0.0023 * m * (44.0 - vapor_pressure);
        let dry_resp = 0.0014 * m * (34.0 - ta);
        let core_storage = m - core_to_skin - latent_resp - dry_resp - wme;
        let skin_storage = core_to_skin - dry - esk;

        // Thermal capacities [Wh/K] split by the skin mass fraction.
        let skin_capacity = 0.97 * alfa * BODY_WEIGHT;
        let core_capacity = 0.97 * (1.0 - alfa) * BODY_WEIGHT;
        skin_temp += skin_storage * BODY_SURFACE_AREA / (skin_capacity * 60.0);
        core_temp += core_storage * BODY_SURFACE_AREA / (core_capacity * 60.0);
        let body_temp = alfa * skin_temp + (1.0 - alfa) * core_temp;

        // Regulatory signals [K], one-sided around the neutral points.
        let warms = (skin_temp - SKIN_TEMP_NEUTRAL).max(0.0);
        let colds = (SKIN_TEMP_NEUTRAL - skin_temp).max(0.0);
        let warmc = (core_temp - CORE_TEMP_NEUTRAL).max(0.0);
        let coldc = (CORE_TEMP_NEUTRAL - core_temp).max(0.0);
        let warmb = (body_temp - BODY_TEMP_NEUTRAL).max(0.0);

        skin_blood_flow =
            ((SKIN_BLOOD_FLOW_NEUTRAL + CDIL * warmc) / (1.0 + CSTR * colds)).clamp(0.5, 90.0);

        // Regulatory sweating, capped at 500 g/(m²·h).
        let regsw = (CSW * warmb * (warms / 10.7).exp()).min(500.0);
        let mut ersw = 0.68 * regsw;

        let emax = (saturated_vapor_pressure_torr(skin_temp) - vapor_pressure) / (rea + recl);
        let prsw = ersw / emax;
        let mut wettedness = 0.06 + 0.94 * prsw;
        let mut edif = wettedness * emax - ersw;
        if wettedness > wcrit {
            wettedness = wcrit;
            let prsw = wcrit / 0.94;
            ersw = prsw * emax;
            edif = 0.06 * (1.0 - prsw) * emax;
        }
        if emax < 0.0 {
            // Condensation regime: evaporation shuts off entirely.
            edif = 0.0;
            ersw = 0.0;
            wettedness = wcrit;
        }
        esk = ersw + edif;
        pwet = wettedness;

        let shivering = 19.4 * colds * coldc;
        m = rm + shivering;
        alfa = 0.0417737 + 0.7451833 / (skin_blood_flow + 0.585417);
    }

    // Map the final state onto the standard environment.
    let hsk = dry + esk; // total skin heat loss [W/m²]
    let pssk = saturated_vapor_pressure_torr(skin_temp);
    let chcs = if met < 0.85 {
        3.0
    } else {
        (5.66 * (met - 0.85).powf(0.39)).max(3.0)
    };
    let ctcs = chcs + CHR;

    // Standard clothing scaled to the activity level.
    let rclos = 1.52 / ((met - wme / MET_FACTOR) + 0.6944) - 0.1835;
    let rcls = 0.155 * rclos;
    let facls = 1.0 + K_CLO * rclos;
    let fcls = 1.0 / (1.0 + 0.155 * facls * ctcs * rclos);
    let ims = 0.45;
    let icls = ims * chcs / ctcs * (1.0 - fcls) / (chcs / ctcs - fcls * ims);
    let ras = 1.0 / (facls * ctcs);
    let reas = 1.0 / (lewis_ratio * facls * chcs);
    let recls = rcls / (lewis_ratio * icls);
    let hd_s = 1.0 / (ras + rcls);
    let he_s = 1.0 / (reas + recls);

    // SET solved from the standard-environment heat balance by a
    // derivative-free Newton iteration.
    let balance = |x: f64| {
        hsk - hd_s * (skin_temp - x)
            - pwet * he_s * (pssk - 0.5 * saturated_vapor_pressure_torr(x))
    };
    let mut x_old = skin_temp - hsk / hd_s; // lower bound estimate
    let mut dx: f64 = 100.0;
    while dx.abs() > SET_SOLVE_TOL {
        let err1 = balance(x_old);
        let err2 = balance(x_old + SET_SOLVE_DELTA);
        let x = x_old - SET_SOLVE_DELTA * err1 / (err2 - err1);
        dx = x - x_old;
        x_old = x;
    }
    x_old
}
