use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// One year of the net-zero roadmap. Sinks and mitigation are negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPoint {
    pub year: i32,
    pub emissions: f64,         // MtCO2e
    pub existing_sink: f64,     // MtCO2e
    pub new_sink: f64,          // MtCO2e
    pub other_mitigation: f64,  // MtCO2e
    pub net_balance: f64,       // MtCO2e
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapData {
    pub points: Vec<RoadmapPoint>,
    pub years: Vec<i32>,
    pub emissions: Vec<f64>,
    pub existing_sink: Vec<f64>,
    pub new_sink: Vec<f64>,
    pub other_mitigation: Vec<f64>,
    pub net_balance: Vec<f64>,
}

impl RoadmapData {
    pub fn from_points(points: Vec<RoadmapPoint>) -> Self {
        Self {
            years: points.iter().map(|p| p.year).collect(),
            emissions: points.iter().map(|p| p.emissions).collect(),
            existing_sink: points.iter().map(|p| p.existing_sink).collect(),
            new_sink: points.iter().map(|p| p.new_sink).collect(),
            other_mitigation: points.iter().map(|p| p.other_mitigation).collect(),
            net_balance: points.iter().map(|p| p.net_balance).collect(),
            points,
        }
    }
}

/// Outcome of checking the roadmap's end-of-horizon sink against policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathwayValidation {
    pub is_valid: bool,
    pub gap: f64,       // expected - actual (MtCO2e)
    pub expected: f64,  // MtCO2e
    pub actual: f64,    // MtCO2e
}

/// Data for a single risk scenario for multi-scenario charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScenarioData {
    pub name: String,
    pub risk_factor: f64,
    pub color: String,
    pub total_area_needed: f64,
    pub forest_area_needed: f64,
    pub coastal_area_needed: f64,
    pub years: Vec<i32>,
    pub area_trajectory: Vec<f64>,       // Cumulative area needed per year
    pub emissions_trajectory: Vec<f64>,  // Interpolated emissions per year
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiRiskChartData {
    pub scenarios: Vec<RiskScenarioData>,
    pub roadmap: RoadmapData,
    pub roadmap_risk_level: String,  // Risk level the roadmap was computed at
    pub roadmap_risk_factor: f64,
    pub current_forest: f64,
    pub current_coastal: f64,
}

/// Net sequestration of the standing ecosystems per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingForestSequestrationChartData {
    pub years: Vec<i32>,
    pub total_sequestration_mt: Vec<f64>,  // MtCO2e/yr
    pub base_rate: f64,                    // tCO2/ha/yr before degradation
    pub activity_factor: f64,
}

/// Gross emissions: anchors, interpolated line and policy share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossEmissionChartData {
    pub years: Vec<i32>,
    pub sparse_data_points: Vec<Option<f64>>,  // Value at anchor years only
    pub data_point_years: Vec<i32>,
    pub data_point_values: Vec<f64>,
    pub interpolated_emissions: Vec<f64>,
    pub policy_target_line: Vec<f64>,
}

/// Gross emissions against the standing-ecosystem sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonBalanceChartData {
    pub years: Vec<i32>,
    pub gross_emissions: Vec<f64>,
    pub existing_forest_sequestration: Vec<f64>,  // negative
    pub net_balance: Vec<f64>,
}

/// Net balance once new plantings are counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetZeroBalanceChartData {
    pub years: Vec<i32>,
    pub gross_emissions: Vec<f64>,
    pub existing_forest_sequestration: Vec<f64>,  // negative
    pub new_planting_sequestration: Vec<f64>,     // negative
    pub net_balance: Vec<f64>,
}

/// New planting area and the cumulative sink it builds up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlantingChartData {
    pub years: Vec<i32>,
    pub annual_planting_area: Vec<f64>,           // ha/yr
    pub cumulative_planted_area: Vec<f64>,        // ha
    pub cumulative_sequestration_gap: Vec<f64>,   // MtCO2e still to absorb
    pub target_reached_year: Option<i32>,
    pub target_emission_reduction: f64,           // MtCO2e
    pub is_target_achieved: bool,
    pub annual_new_sequestration_mt: Vec<f64>,    // MtCO2e/yr
}

impl NewPlantingChartData {
    /// Annual new-planting sink in `year`, zero outside the projection.
    pub fn sequestration_in(&self, year: i32) -> f64 {
        self.years
            .iter()
            .position(|&y| y == year)
            .map(|i| self.annual_new_sequestration_mt[i])
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllChartData {
    pub existing_forest_sequestration: ExistingForestSequestrationChartData,
    pub gross_emissions: GrossEmissionChartData,
    pub carbon_balance: CarbonBalanceChartData,
    pub new_planting: NewPlantingChartData,
    pub net_zero_balance: NetZeroBalanceChartData,
}

/// Standing versus needed area per ecosystem class, for bar charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaComparison {
    pub labels: Vec<String>,
    pub current: Vec<f64>,
    pub needed: Vec<f64>,
}

/// One year of the linear requirement trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyDataPoint {
    pub year: i32,
    pub cumulative_sequestration: f64,  // tCO2
    pub annual_sequestration: f64,      // tCO2/yr
    pub remaining_emissions: f64,       // MtCO2e above the target level
    pub forest_area_cumulative: f64,    // ha
    pub coastal_area_cumulative: f64,   // ha
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryData {
    pub years: Vec<i32>,
    pub annual_sequestration: Vec<f64>,
    pub cumulative_sequestration: Vec<f64>,
    pub remaining_emissions: Vec<f64>,
    pub forest_area_trajectory: Vec<f64>,
    pub coastal_area_trajectory: Vec<f64>,
    pub data_points: Vec<YearlyDataPoint>,
}

impl TrajectoryData {
    pub fn from_points(data_points: Vec<YearlyDataPoint>) -> Self {
        Self {
            years: data_points.iter().map(|p| p.year).collect(),
            annual_sequestration: data_points.iter().map(|p| p.annual_sequestration).collect(),
            cumulative_sequestration: data_points.iter().map(|p| p.cumulative_sequestration).collect(),
            remaining_emissions: data_points.iter().map(|p| p.remaining_emissions).collect(),
            forest_area_trajectory: data_points.iter().map(|p| p.forest_area_cumulative).collect(),
            coastal_area_trajectory: data_points.iter().map(|p| p.coastal_area_cumulative).collect(),
            data_points,
        }
    }
}

/// Area requirement of one scenario preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioArea {
    pub total: f64,
    pub forest: f64,
    pub coastal: f64,
    pub feasible: bool,
}

/// Requirement trajectory with the bar-chart datasets that accompany it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryChartData {
    pub trajectory: TrajectoryData,
    pub area_comparison: AreaComparison,
    pub scenario_areas: BTreeMap<String, ScenarioArea>,  // Keyed by preset name
}
