use serde::{Deserialize, Serialize};

/// Feasibility of the required area for one ecosystem class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    pub area_needed: f64,          // ha
    pub area_available: f64,       // ha
    pub is_feasible: bool,
    pub utilization_percent: f64,  // capped at 999.99 for display
    pub deficit_or_surplus: f64,   // positive = surplus (ha)
}

/// Output of the area/feasibility balancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    // Summary
    pub total_reduction_needed: f64,   // Cumulative emissions over the horizon (MtCO2e)
    pub sequestration_target: f64,     // Share assigned to sinks (MtCO2e)
    pub years: i32,

    // Standing ecosystems
    pub activity_factor: f64,
    pub existing_absorption_credit: f64,  // tCO2 over the horizon
    pub degradation_loss: f64,            // tCO2 over the horizon

    // Area requirements (ha)
    pub total_area_needed: f64,
    pub forest_area_needed: f64,
    pub coastal_area_needed: f64,

    // Rates used (tCO2/ha/yr)
    pub effective_forest_rate: f64,
    pub effective_coastal_rate: f64,
    pub weighted_average_rate: f64,

    // Feasibility
    pub forest_feasibility: FeasibilityResult,
    pub coastal_feasibility: FeasibilityResult,
    pub overall_feasible: bool,

    // Annual metrics
    pub annual_sequestration_needed: f64,  // tCO2/yr from new planting
    pub cumulative_sequestration: f64,     // tCO2 new planting must deliver
}

impl CalculatorResult {
    /// Worst utilization across the two classes.
    pub fn max_utilization(&self) -> f64 {
        self.forest_feasibility.utilization_percent.max(self.coastal_feasibility.utilization_percent)
    }
}
