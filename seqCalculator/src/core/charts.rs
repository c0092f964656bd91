use tracing::debug;

use crate::config::calculator_input::CalculatorInput;
use crate::config::const_funcs::{calc_existing_base_rate, calc_existing_capacity, calc_horizon_years, tonnes_to_mt};
use crate::config::constants::MAX_PROJECTION_EXTENSION_YEARS;
use crate::core::balancer::calculate;
use crate::core::degradation::existing_sink_series;
use crate::core::interpolation::{interpolate_emissions, EmissionAnchors, EmissionsTrajectory};
use crate::core::roadmap::PlantingSchedule;
use crate::core::scenarios::{area_comparison, scenario_areas};
use crate::models::chart_data::*;
use crate::models::results::CalculatorResult;
use crate::utils::logging::{self, CalculationType, OperationCategory};

/// Builds every chart series for one input.
pub fn generate_all_chart_data(input: &CalculatorInput) -> AllChartData {
    let _timing = logging::start_timing("generate_all_chart_data",
        OperationCategory::Calculation { subcategory: CalculationType::Charts });

    let result = calculate(input);
    let trajectory = interpolate_emissions(&EmissionAnchors::from_input(input));

    let existing_forest_sequestration = existing_forest_chart(input, &result, &trajectory);
    let gross_emissions = gross_emission_chart(input, &trajectory);
    let carbon_balance = carbon_balance_chart(&trajectory, &existing_forest_sequestration);
    let new_planting = new_planting_chart(input, &result);
    let net_zero_balance = net_zero_chart(&carbon_balance, &new_planting);

    AllChartData {
        existing_forest_sequestration,
        gross_emissions,
        carbon_balance,
        new_planting,
        net_zero_balance,
    }
}

pub fn existing_forest_chart(
    input: &CalculatorInput,
    result: &CalculatorResult,
    trajectory: &EmissionsTrajectory,
) -> ExistingForestSequestrationChartData {
    let capacity = calc_existing_capacity(input, result.effective_forest_rate, result.effective_coastal_rate);
    let activity_factor = input.activity_factor();

    ExistingForestSequestrationChartData {
        years: trajectory.years.clone(),
        total_sequestration_mt: existing_sink_series(capacity, activity_factor, input.degradation_fraction(), trajectory.len() as i32),
        base_rate: calc_existing_base_rate(input, result.effective_forest_rate, result.effective_coastal_rate),
        activity_factor,
    }
}

pub fn gross_emission_chart(input: &CalculatorInput, trajectory: &EmissionsTrajectory) -> GrossEmissionChartData {
    let anchors = EmissionAnchors::from_input(input).as_array();

    let sparse_data_points = trajectory
        .years
        .iter()
        .map(|&year| anchors.iter().rev().find(|a| a.year == year).map(|a| a.value))
        .collect();

    GrossEmissionChartData {
        years: trajectory.years.clone(),
        sparse_data_points,
        data_point_years: anchors.iter().map(|a| a.year).collect(),
        data_point_values: anchors.iter().map(|a| a.value).collect(),
        interpolated_emissions: trajectory.values.clone(),
        policy_target_line: trajectory.values.iter().map(|v| v * input.sequestration_fraction()).collect(),
    }
}

pub fn carbon_balance_chart(
    trajectory: &EmissionsTrajectory,
    existing: &ExistingForestSequestrationChartData,
) -> CarbonBalanceChartData {
    let existing_forest_sequestration: Vec<f64> = existing.total_sequestration_mt.iter().map(|v| -v).collect();
    let net_balance = trajectory
        .values
        .iter()
        .zip(&existing_forest_sequestration)
        .map(|(gross, sink)| gross + sink)
        .collect();

    CarbonBalanceChartData {
        years: trajectory.years.clone(),
        gross_emissions: trajectory.values.clone(),
        existing_forest_sequestration,
        net_balance,
    }
}

/// Plants the required area evenly over the window and follows the
/// cumulative sink of the cohorts until it closes the gap, projecting up
/// to 50 years past the nominal end if needed.
pub fn new_planting_chart(input: &CalculatorInput, result: &CalculatorResult) -> NewPlantingChartData {
    let schedule = PlantingSchedule::from_result(input, result);
    let target_emission_reduction = tonnes_to_mt(result.cumulative_sequestration);

    let start_year = input.new_planting_start_year;
    let nominal_end = input.target_year.max(start_year);
    let projection_limit = nominal_end + MAX_PROJECTION_EXTENSION_YEARS;

    let mut chart = NewPlantingChartData {
        years: Vec::new(),
        annual_planting_area: Vec::new(),
        cumulative_planted_area: Vec::new(),
        cumulative_sequestration_gap: Vec::new(),
        target_reached_year: None,
        target_emission_reduction,
        is_target_achieved: false,
        annual_new_sequestration_mt: Vec::new(),
    };

    let mut cumulative_area = 0.0;
    let mut cumulative_sequestration = 0.0;

    for year in start_year..=projection_limit {
        let planted = schedule.area_planted_in(year);
        let annual_mt = tonnes_to_mt(schedule.sequestration_tonnes(year));
        cumulative_area += planted;
        cumulative_sequestration += annual_mt;
        let gap = (target_emission_reduction - cumulative_sequestration).max(0.0);

        chart.years.push(year);
        chart.annual_planting_area.push(planted);
        chart.cumulative_planted_area.push(cumulative_area);
        chart.annual_new_sequestration_mt.push(annual_mt);
        chart.cumulative_sequestration_gap.push(gap);

        if gap <= 0.0 && chart.target_reached_year.is_none() {
            chart.target_reached_year = Some(year);
        }
        if year >= nominal_end && chart.target_reached_year.is_some() {
            break;
        }
    }

    chart.is_target_achieved = chart.target_reached_year.is_some();
    debug!(
        target_reached_year = ?chart.target_reached_year,
        projected_years = chart.years.len(),
        "New planting projection complete"
    );
    chart
}

pub fn net_zero_chart(balance: &CarbonBalanceChartData, new_planting: &NewPlantingChartData) -> NetZeroBalanceChartData {
    let new_planting_sequestration: Vec<f64> = balance
        .years
        .iter()
        .map(|&year| -new_planting.sequestration_in(year))
        .collect();

    let net_balance = balance
        .net_balance
        .iter()
        .zip(&new_planting_sequestration)
        .map(|(net, new_sink)| net + new_sink)
        .collect();

    NetZeroBalanceChartData {
        years: balance.years.clone(),
        gross_emissions: balance.gross_emissions.clone(),
        existing_forest_sequestration: balance.existing_forest_sequestration.clone(),
        new_planting_sequestration,
        net_balance,
    }
}

/// Spreads the balancer's requirement linearly over the horizon, alongside
/// the available-versus-needed areas and the per-preset requirements.
///
/// Year 0 carries no sequestration or area; the final year carries the full
/// forest and coastal need.
pub fn generate_trajectory(input: &CalculatorInput, result: &CalculatorResult) -> TrajectoryChartData {
    let _timing = logging::start_timing("generate_trajectory",
        OperationCategory::Calculation { subcategory: CalculationType::Charts });

    let anchors = EmissionAnchors::from_input(input);
    let horizon = calc_horizon_years(input.initial_year, input.target_year);
    let spread = |total: f64, step: i32| {
        if step == 0 { 0.0 } else { total * step as f64 / horizon as f64 }
    };

    let data_points = (0..=horizon)
        .map(|step| {
            let year = input.initial_year + step;
            YearlyDataPoint {
                year,
                cumulative_sequestration: spread(result.annual_sequestration_needed * horizon as f64, step),
                annual_sequestration: if step == 0 { 0.0 } else { result.annual_sequestration_needed },
                remaining_emissions: (anchors.value_at(year) - input.target_emissions).max(0.0),
                forest_area_cumulative: spread(result.forest_area_needed, step),
                coastal_area_cumulative: spread(result.coastal_area_needed, step),
            }
        })
        .collect();

    TrajectoryChartData {
        trajectory: TrajectoryData::from_points(data_points),
        area_comparison: area_comparison(input, result),
        scenario_areas: scenario_areas(input),
    }
}
