use serde::Serialize;
use crate::config::calculator_input::CalculatorInput;

/// Predefined new-planting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub forest_percent: f64,
    pub include_below_ground: bool,
    pub description: &'static str,
}

impl ScenarioPreset {
    pub fn coastal_percent(&self) -> f64 {
        100.0 - self.forest_percent
    }

    /// Copy of `input` with this preset's allocation and biomass settings.
    pub fn apply(&self, input: &CalculatorInput) -> CalculatorInput {
        CalculatorInput {
            new_planting_forest_percent: self.forest_percent,
            include_below_ground: self.include_below_ground,
            ..input.clone()
        }
    }
}

pub const SCENARIO_PRESETS: [ScenarioPreset; 4] = [
    ScenarioPreset {
        key: "conservative",
        name: "Conservative",
        forest_percent: 90.0,
        include_below_ground: false,
        description: "Reflects current area ratio (~95:5)",
    },
    ScenarioPreset {
        key: "balanced",
        name: "Balanced",
        forest_percent: 80.0,
        include_below_ground: false,
        description: "Higher coastal efficiency",
    },
    ScenarioPreset {
        key: "coastal_optimized",
        name: "Coastal-Optimized",
        forest_percent: 70.0,
        include_below_ground: false,
        description: "Maximum mangrove potential",
    },
    ScenarioPreset {
        key: "full_biomass",
        name: "Full Biomass",
        forest_percent: 80.0,
        include_below_ground: true,
        description: "+37% sequestration (R:S ratio)",
    },
];

pub fn find_preset(key: &str) -> Option<&'static ScenarioPreset> {
    SCENARIO_PRESETS.iter().find(|p| p.key == key)
}
