//! Parallel evaluation over slices of conditions.
//!
//! Weather-driven workflows evaluate the comfort models once per hour of an
//! annual series (8,760 points), and the two-node simulation inside each PMV
//! evaluation makes that the dominant cost. Every evaluation is a pure
//! function of its inputs, so the slice splits cleanly across threads.

use anyhow::Result;
use rayon::prelude::*;

use crate::pmv::engine::{ComfortInputs, PmvResult, pmv_elevated_airspeed};
use crate::utci::UtciInputs;

/// PMV results for a slice of conditions, in input order.
///
/// The first failing evaluation aborts the batch with its error.
pub fn pmv_batch(conditions: &[ComfortInputs]) -> Result<Vec<PmvResult>> {
    conditions.par_iter().map(pmv_elevated_airspeed).collect()
}

/// UTCI values for a slice of conditions, in input order.
pub fn utci_batch(conditions: &[UtciInputs]) -> Vec<f64> {
    conditions.par_iter().map(UtciInputs::evaluate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utci::universal_thermal_climate_index;

    #[test]
    fn test_pmv_batch_matches_sequential() {
        let conditions: Vec<ComfortInputs> = [0.05, 0.1, 0.3, 0.8, 1.5]
            .iter()
            .map(|&vel| ComfortInputs::new(24.0, 24.0, vel, 50.0, 1.2, 0.5))
            .collect();

        let batch = pmv_batch(&conditions).unwrap();
        assert_eq!(batch.len(), conditions.len());
        for (inputs, result) in conditions.iter().zip(&batch) {
            let sequential = pmv_elevated_airspeed(inputs).unwrap();
            assert_eq!(*result, sequential);
        }
    }

    #[test]
    fn test_utci_batch_matches_sequential() {
        let conditions: Vec<UtciInputs> = [-10.0, 0.0, 10.0, 20.0, 30.0]
            .iter()
            .map(|&ta| UtciInputs::new(ta, ta, 2.0, 60.0))
            .collect();

        let batch = utci_batch(&conditions);
        for (inputs, value) in conditions.iter().zip(&batch) {
            assert_eq!(
                *value,
                universal_thermal_climate_index(inputs.ta, inputs.tr, inputs.vel, inputs.rh)
            );
        }
    }

    #[test]
    fn test_empty_batches() {
        assert!(pmv_batch(&[]).unwrap().is_empty());
        assert!(utci_batch(&[]).is_empty());
    }
}
