use serde::{Deserialize, Serialize};
use crate::config::const_funcs::tonnes_to_mt;

/// Net rate after `elapsed_years` of compounding capacity loss.
///
/// `degradation` is a fraction (0.02 for 2%/yr).
pub fn decayed_rate(base_rate: f64, activity_factor: f64, degradation: f64, elapsed_years: i32) -> f64 {
    base_rate * activity_factor * remaining_capacity(degradation, elapsed_years)
}

/// Fraction of the original capacity left after `elapsed_years`.
pub fn remaining_capacity(degradation: f64, elapsed_years: i32) -> f64 {
    (1.0 - degradation).powi(elapsed_years.max(0))
}

/// Net existing-ecosystem sink in MtCO2e/yr for each of `years` offsets.
///
/// `base_capacity_tonnes` is area times effective rate, summed over the
/// forest and coastal classes.
pub fn existing_sink_series(base_capacity_tonnes: f64, activity_factor: f64, degradation: f64, years: i32) -> Vec<f64> {
    (0..years.max(0))
        .map(|n| tonnes_to_mt(decayed_rate(base_capacity_tonnes, activity_factor, degradation, n)))
        .collect()
}

/// Totals accumulated by stepping the standing ecosystems through the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationLedger {
    pub absorption_credit: f64,   // tCO2 still absorbed, net of activity
    pub degradation_loss: f64,    // tCO2 of capacity eroded
    pub sink_potential: Vec<f64>, // tCO2/yr before the activity factor
}

/// Steps the existing capacity year by year.
///
/// Capacity shrinks by `(1 - degradation)` each step whatever the activity
/// factor, so mature stands still lose potential.
pub fn accumulate_existing_sink(base_capacity_tonnes: f64, activity_factor: f64, degradation: f64, years: i32) -> DegradationLedger {
    let steps = years.max(0) as usize;
    let mut ledger = DegradationLedger {
        absorption_credit: 0.0,
        degradation_loss: 0.0,
        sink_potential: Vec::with_capacity(steps),
    };

    let mut capacity = 1.0;
    for _ in 0..steps {
        let sink_potential = base_capacity_tonnes * capacity;
        ledger.absorption_credit += sink_potential * activity_factor;
        ledger.degradation_loss += sink_potential * degradation;
        ledger.sink_potential.push(sink_potential);
        capacity *= 1.0 - degradation;
    }

    ledger
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_without_degradation() {
        let series = existing_sink_series(2_000_000.0, 1.0, 0.0, 10);
        assert!(series.iter().all(|&v| v == 2.0));

        let ledger = accumulate_existing_sink(1000.0, 0.5, 0.0, 5);
        assert!(ledger.sink_potential.iter().all(|&v| v == 1000.0));
        assert_eq!(ledger.degradation_loss, 0.0);
        assert_eq!(ledger.absorption_credit, 2500.0);
    }

    #[test]
    fn compounding_not_additive() {
        assert_relative_eq!(decayed_rate(100.0, 1.0, 0.1, 2), 81.0, epsilon = 1e-9);
        assert_relative_eq!(decayed_rate(100.0, 0.5, 0.1, 2), 40.5, epsilon = 1e-9);
    }

    #[test]
    fn non_increasing_with_degradation() {
        let series = existing_sink_series(5_000_000.0, 0.5, 0.02, 30);
        assert!(series.windows(2).all(|w| w[1] <= w[0]));
        assert!(series[29] < series[0]);
    }

    #[test]
    fn zero_activity_still_loses_capacity() {
        let ledger = accumulate_existing_sink(1000.0, 0.0, 0.1, 3);
        assert_eq!(ledger.absorption_credit, 0.0);
        // 1000*0.1 + 900*0.1 + 810*0.1
        assert_relative_eq!(ledger.degradation_loss, 271.0, epsilon = 1e-9);
        assert!(existing_sink_series(1000.0, 0.0, 0.1, 3).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn loop_matches_closed_form() {
        let ledger = accumulate_existing_sink(1000.0, 1.0, 0.05, 20);
        for (n, potential) in ledger.sink_potential.iter().enumerate() {
            assert_relative_eq!(*potential, decayed_rate(1000.0, 1.0, 0.05, n as i32), max_relative = 1e-12);
        }
    }

    #[test]
    fn non_positive_years_yield_empty_ledger() {
        let ledger = accumulate_existing_sink(1000.0, 1.0, 0.05, 0);
        assert!(ledger.sink_potential.is_empty());
        assert_eq!(ledger.absorption_credit, 0.0);
        assert!(existing_sink_series(1000.0, 1.0, 0.05, 0).is_empty());
        assert!(existing_sink_series(1000.0, 1.0, 0.05, -3).is_empty());
    }

    #[test]
    fn series_and_ledger_share_the_horizon() {
        let years = 12;
        let series = existing_sink_series(4_000_000.0, 0.5, 0.03, years);
        let ledger = accumulate_existing_sink(4_000_000.0, 0.5, 0.03, years);
        assert_eq!(series.len(), ledger.sink_potential.len());
        for (mt, potential) in series.iter().zip(&ledger.sink_potential) {
            assert_relative_eq!(*mt, potential * 0.5 / 1e6, max_relative = 1e-12);
        }
    }
}
