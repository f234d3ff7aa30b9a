pub mod batch;
pub mod pmv;
pub mod psychrometrics;
pub mod solver;
pub mod utci;

// Prelude
pub use pmv::engine::{ComfortInputs, PmvResult, pmv_elevated_airspeed};
pub use pmv::fanger::{FangerResult, HeatLossBreakdown, fanger_pmv, ppd_from_pmv};
pub use pmv::inversion::{PmvSolveTarget, calc_missing_pmv_input, pmv_from_ppd};
pub use pmv::parameter::{PmvParameter, ppd_threshold_from_comfort_class};
pub use pmv::two_node::pierce_set;
pub use solver::{RootOutcome, bisect, secant, secant_then_bisect};
pub use utci::inversion::{UtciSolveTarget, calc_missing_utci_input};
pub use utci::parameter::{UtciParameter, UtciThresholds};
pub use utci::{UtciInputs, saturated_vapor_pressure_hpa, universal_thermal_climate_index};
