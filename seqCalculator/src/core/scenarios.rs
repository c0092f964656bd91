use std::collections::BTreeMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::calculator_input::CalculatorInput;
use crate::config::const_funcs::calc_linear_ramp;
use crate::config::constants::{RISK_LEVELS, ROADMAP_RISK_LEVEL};
use crate::config::scenario_presets::SCENARIO_PRESETS;
use crate::core::balancer::calculate;
use crate::core::interpolation::{interpolate_emissions, EmissionAnchors};
use crate::core::roadmap::generate_roadmap;
use crate::models::chart_data::{AreaComparison, MultiRiskChartData, RiskScenarioData, ScenarioArea};
use crate::models::results::CalculatorResult;
use crate::utils::logging::{self, CalculationType, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub scenario_description: String,
    pub result: CalculatorResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparisonResult {
    pub scenarios: Vec<ScenarioResult>,
    pub most_feasible: Option<String>,
    pub recommendation: String,
}

/// Runs the balancer for every preset and recommends one.
pub fn compare_scenarios(base_input: &CalculatorInput) -> ScenarioComparisonResult {
    let _timing = logging::start_timing("compare_scenarios",
        OperationCategory::Calculation { subcategory: CalculationType::Scenarios });

    let scenarios: Vec<ScenarioResult> = SCENARIO_PRESETS
        .par_iter()
        .map(|preset| ScenarioResult {
            scenario_name: preset.name.to_string(),
            scenario_description: preset.description.to_string(),
            result: calculate(&preset.apply(base_input)),
        })
        .collect();

    let feasible_best = scenarios
        .iter()
        .filter(|s| s.result.overall_feasible)
        .min_by(|a, b| a.result.max_utilization().total_cmp(&b.result.max_utilization()));

    let (most_feasible, recommendation) = match feasible_best {
        Some(best) => (
            Some(best.scenario_name.clone()),
            format!("Recommended: {} - achieves target with lowest land utilization", best.scenario_name),
        ),
        None => {
            // Coastal land is usually the limiting class
            let closest = scenarios.iter().min_by(|a, b| {
                a.result.coastal_feasibility.utilization_percent
                    .total_cmp(&b.result.coastal_feasibility.utilization_percent)
            });
            match closest {
                Some(closest) => (
                    Some(closest.scenario_name.clone()),
                    format!("No scenario fully feasible. {} is closest but requires additional measures", closest.scenario_name),
                ),
                None => (None, "No scenarios available".to_string()),
            }
        }
    };

    info!("{}", recommendation);

    ScenarioComparisonResult {
        scenarios,
        most_feasible,
        recommendation,
    }
}

/// Recomputes the balancer at each named risk level and builds the roadmap
/// from the moderate one.
pub fn generate_multi_risk_chart_data(input: &CalculatorInput) -> MultiRiskChartData {
    let _timing = logging::start_timing("generate_multi_risk_chart_data",
        OperationCategory::Calculation { subcategory: CalculationType::Scenarios });

    let trajectory = interpolate_emissions(&EmissionAnchors::from_input(input));

    let variants: Vec<(CalculatorInput, CalculatorResult)> = RISK_LEVELS
        .par_iter()
        .map(|level| {
            let variant = input.with_risk_factor(level.risk_factor);
            let result = calculate(&variant);
            (variant, result)
        })
        .collect();

    let scenarios = RISK_LEVELS
        .iter()
        .zip(&variants)
        .map(|(level, (_, result))| RiskScenarioData {
            name: level.name.to_string(),
            risk_factor: level.risk_factor,
            color: level.color.to_string(),
            total_area_needed: result.total_area_needed,
            forest_area_needed: result.forest_area_needed,
            coastal_area_needed: result.coastal_area_needed,
            years: trajectory.years.clone(),
            area_trajectory: trajectory
                .years
                .iter()
                .map(|&year| result.total_area_needed * calc_linear_ramp(year, input.initial_year, input.target_year))
                .collect(),
            emissions_trajectory: trajectory.values.clone(),
        })
        .collect();

    let roadmap_level = &RISK_LEVELS[ROADMAP_RISK_LEVEL];
    let (moderate_input, moderate_result) = &variants[ROADMAP_RISK_LEVEL];
    let roadmap = generate_roadmap(moderate_input, moderate_result);

    MultiRiskChartData {
        scenarios,
        roadmap,
        roadmap_risk_level: roadmap_level.name.to_string(),
        roadmap_risk_factor: roadmap_level.risk_factor,
        current_forest: input.forest_area_available,
        current_coastal: input.coastal_area_available,
    }
}

/// Total, forest and coastal area each preset needs, keyed by preset name.
pub fn scenario_areas(base_input: &CalculatorInput) -> BTreeMap<String, ScenarioArea> {
    SCENARIO_PRESETS
        .par_iter()
        .map(|preset| {
            let result = calculate(&preset.apply(base_input));
            let area = ScenarioArea {
                total: result.total_area_needed,
                forest: result.forest_area_needed,
                coastal: result.coastal_area_needed,
                feasible: result.overall_feasible,
            };
            (preset.name.to_string(), area)
        })
        .collect()
}

pub fn area_comparison(input: &CalculatorInput, result: &CalculatorResult) -> AreaComparison {
    AreaComparison {
        labels: vec!["Forest".to_string(), "Coastal".to_string()],
        current: vec![input.forest_area_available, input.coastal_area_available],
        needed: vec![result.forest_area_needed, result.coastal_area_needed],
    }
}
