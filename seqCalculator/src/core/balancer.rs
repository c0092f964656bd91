use tracing::{debug, warn};

use crate::config::calculator_input::CalculatorInput;
use crate::config::const_funcs::{
    calc_effective_rates, calc_existing_capacity, calc_horizon_years, calc_weighted_rate, mt_to_tonnes,
};
use crate::config::constants::MAX_DISPLAY_UTILIZATION;
use crate::core::degradation::accumulate_existing_sink;
use crate::core::interpolation::{interpolate_emissions, EmissionAnchors};
use crate::models::results::{CalculatorResult, FeasibilityResult};
use crate::utils::logging::{self, CalculationType, OperationCategory};

/// Resolves how much new planting closes the gap between projected
/// emissions and the sequestration share of the policy target.
///
/// Never fails: a zero weighted rate yields an infinite area need rather
/// than an error.
pub fn calculate(input: &CalculatorInput) -> CalculatorResult {
    let _timing = logging::start_timing("calculate",
        OperationCategory::Calculation { subcategory: CalculationType::Balancer });

    let years = calc_horizon_years(input.initial_year, input.target_year);

    // Cumulative emissions are the quantity to offset, not the start-to-end delta
    let trajectory = interpolate_emissions(&EmissionAnchors::from_input(input));
    let cumulative_emissions = trajectory.cumulative();

    let sequestration_target = cumulative_emissions * input.sequestration_fraction();
    let sequestration_target_tonnes = mt_to_tonnes(sequestration_target);

    let (effective_forest_rate, effective_coastal_rate) = calc_effective_rates(input);
    let forest_fraction = input.new_planting_forest_fraction();
    let weighted_rate = calc_weighted_rate(forest_fraction, effective_forest_rate, effective_coastal_rate);

    let activity_factor = input.activity_factor();
    let existing_capacity = calc_existing_capacity(input, effective_forest_rate, effective_coastal_rate);
    let ledger = accumulate_existing_sink(existing_capacity, activity_factor, input.degradation_fraction(), years);

    let adjusted_target = (sequestration_target_tonnes - ledger.absorption_credit).max(0.0);
    let total_needed = adjusted_target + ledger.degradation_loss;
    let annual_sequestration_needed = total_needed / years as f64;

    let total_area_needed = if weighted_rate > 0.0 {
        annual_sequestration_needed / weighted_rate
    } else {
        warn!("Weighted new-planting rate is zero; area requirement is unbounded");
        f64::INFINITY
    };

    let forest_area_needed = total_area_needed * forest_fraction;
    let coastal_area_needed = total_area_needed * (1.0 - forest_fraction);

    let forest_feasibility = evaluate_feasibility(forest_area_needed, input.forest_area_available);
    let coastal_feasibility = evaluate_feasibility(coastal_area_needed, input.coastal_area_available);
    let overall_feasible = forest_feasibility.is_feasible && coastal_feasibility.is_feasible;

    debug!(
        years,
        cumulative_emissions,
        existing_credit = ledger.absorption_credit,
        degradation_loss = ledger.degradation_loss,
        total_area_needed,
        overall_feasible,
        "Balanced sequestration requirement"
    );

    CalculatorResult {
        total_reduction_needed: cumulative_emissions,
        sequestration_target,
        years,
        activity_factor,
        existing_absorption_credit: ledger.absorption_credit,
        degradation_loss: ledger.degradation_loss,
        total_area_needed,
        forest_area_needed,
        coastal_area_needed,
        effective_forest_rate,
        effective_coastal_rate,
        weighted_average_rate: weighted_rate,
        forest_feasibility,
        coastal_feasibility,
        overall_feasible,
        annual_sequestration_needed,
        cumulative_sequestration: total_needed,
    }
}

pub fn evaluate_feasibility(area_needed: f64, area_available: f64) -> FeasibilityResult {
    let is_feasible = area_needed <= area_available;

    let utilization_percent = if area_available > 0.0 {
        area_needed / area_available * 100.0
    } else if area_needed > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };

    FeasibilityResult {
        area_needed,
        area_available,
        is_feasible,
        utilization_percent: utilization_percent.min(MAX_DISPLAY_UTILIZATION),
        deficit_or_surplus: area_available - area_needed,
    }
}
