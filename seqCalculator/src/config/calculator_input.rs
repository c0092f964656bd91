use serde::{Deserialize, Serialize};
use std::fmt;
use crate::config::constants::*;
use crate::models::forest_status::ExistingForestStatus;

/// Per-call configuration of the carbon-accounting engine.
///
/// Validated once with [`CalculatorInput::validate`] at the boundary; the
/// engine itself never re-checks ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInput {
    // Emission anchors (MtCO2e)
    pub emissions_initial: f64,
    pub emissions_peak: f64,
    pub target_emissions: f64,
    pub initial_year: i32,
    pub peak_year: i32,
    pub target_year: i32,

    pub sequestration_percent: f64,  // Share of reduction assigned to sinks

    // Standing ecosystems (hectares)
    pub forest_area_available: f64,
    pub coastal_area_available: f64,
    pub existing_forest_status: ExistingForestStatus,

    pub new_planting_forest_percent: f64,
    pub new_planting_start_year: i32,

    // Rates (tCO2/ha/yr)
    pub forest_rate: f64,
    pub coastal_rate: f64,
    pub include_below_ground: bool,
    pub root_to_shoot_ratio: f64,
    pub risk_factor: f64,        // % discount on new plantings
    pub degradation_rate: f64,   // % annual loss of existing capacity
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            emissions_initial: DEFAULT_EMISSIONS_INITIAL,
            emissions_peak: DEFAULT_EMISSIONS_PEAK,
            target_emissions: DEFAULT_TARGET_EMISSIONS,
            initial_year: DEFAULT_INITIAL_YEAR,
            peak_year: DEFAULT_PEAK_YEAR,
            target_year: DEFAULT_TARGET_YEAR,
            sequestration_percent: DEFAULT_SEQUESTRATION_PERCENT,
            forest_area_available: DEFAULT_FOREST_AREA,
            coastal_area_available: DEFAULT_COASTAL_AREA,
            existing_forest_status: ExistingForestStatus::Mixed,
            new_planting_forest_percent: DEFAULT_NEW_PLANTING_FOREST_PERCENT,
            new_planting_start_year: DEFAULT_NEW_PLANTING_START_YEAR,
            forest_rate: FOREST_SEQUESTRATION_RATE,
            coastal_rate: COASTAL_SEQUESTRATION_RATE,
            include_below_ground: false,
            root_to_shoot_ratio: ROOT_TO_SHOOT_RATIO,
            risk_factor: DEFAULT_RISK_FACTOR,
            degradation_rate: DEFAULT_DEGRADATION_RATE,
        }
    }
}

impl CalculatorInput {
    pub fn activity_factor(&self) -> f64 {
        self.existing_forest_status.activity_factor()
    }

    pub fn degradation_fraction(&self) -> f64 {
        self.degradation_rate / 100.0
    }

    pub fn new_planting_forest_fraction(&self) -> f64 {
        self.new_planting_forest_percent / 100.0
    }

    pub fn sequestration_fraction(&self) -> f64 {
        self.sequestration_percent / 100.0
    }

    /// Copy of this input with a different risk buffer.
    pub fn with_risk_factor(&self, risk_factor: f64) -> Self {
        Self { risk_factor, ..self.clone() }
    }

    pub fn validate(&self) -> Result<(), InputValidationError> {
        check_range("emissions_initial", self.emissions_initial, MIN_EMISSIONS, MAX_EMISSIONS)?;
        check_range("emissions_peak", self.emissions_peak, MIN_EMISSIONS, MAX_EMISSIONS)?;
        check_range("target_emissions", self.target_emissions, MIN_EMISSIONS, MAX_EMISSIONS)?;

        check_year("initial_year", self.initial_year, MIN_YEAR)?;
        check_year("peak_year", self.peak_year, MIN_YEAR)?;
        check_year("target_year", self.target_year, MIN_TARGET_YEAR)?;
        check_year("new_planting_start_year", self.new_planting_start_year, MIN_YEAR)?;

        if self.initial_year > self.peak_year {
            return Err(InputValidationError::YearOrdering {
                earlier: ("initial_year", self.initial_year),
                later: ("peak_year", self.peak_year),
            });
        }
        if self.peak_year > self.target_year {
            return Err(InputValidationError::YearOrdering {
                earlier: ("peak_year", self.peak_year),
                later: ("target_year", self.target_year),
            });
        }

        check_range("sequestration_percent", self.sequestration_percent, 0.0, 100.0)?;
        check_range("new_planting_forest_percent", self.new_planting_forest_percent, 0.0, 100.0)?;
        check_range("forest_area_available", self.forest_area_available, 0.0, f64::MAX)?;
        check_range("coastal_area_available", self.coastal_area_available, 0.0, f64::MAX)?;
        check_range("forest_rate", self.forest_rate, MIN_RATE, MAX_RATE)?;
        check_range("coastal_rate", self.coastal_rate, MIN_RATE, MAX_RATE)?;
        check_range("root_to_shoot_ratio", self.root_to_shoot_ratio, MIN_ROOT_TO_SHOOT, MAX_ROOT_TO_SHOOT)?;
        check_range("risk_factor", self.risk_factor, 0.0, 100.0)?;
        check_range("degradation_rate", self.degradation_rate, 0.0, 100.0)?;

        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), InputValidationError> {
    // NaN fails both comparisons, so test containment rather than exclusion
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(InputValidationError::OutOfRange { field, value, min, max })
    }
}

fn check_year(field: &'static str, year: i32, min: i32) -> Result<(), InputValidationError> {
    if (min..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(InputValidationError::YearOutOfRange { field, year, min, max: MAX_YEAR })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputValidationError {
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
    YearOutOfRange { field: &'static str, year: i32, min: i32, max: i32 },
    YearOrdering { earlier: (&'static str, i32), later: (&'static str, i32) },
}

impl fmt::Display for InputValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValidationError::OutOfRange { field, value, min, max } => {
                write!(f, "{} = {} is outside the allowed range [{}, {}]", field, value, min, max)
            },
            InputValidationError::YearOutOfRange { field, year, min, max } => {
                write!(f, "{} = {} is outside the allowed range [{}, {}]", field, year, min, max)
            },
            InputValidationError::YearOrdering { earlier, later } => {
                write!(f, "{} ({}) must not be after {} ({})", earlier.0, earlier.1, later.0, later.1)
            },
        }
    }
}

impl std::error::Error for InputValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_is_valid() {
        assert_eq!(CalculatorInput::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_percent() {
        let input = CalculatorInput { sequestration_percent: 120.0, ..Default::default() };
        match input.validate() {
            Err(InputValidationError::OutOfRange { field, .. }) => assert_eq!(field, "sequestration_percent"),
            other => panic!("unexpected validation outcome: {:?}", other),
        }
    }

    #[test]
    fn rejects_nan_area() {
        let input = CalculatorInput { coastal_area_available: f64::NAN, ..Default::default() };
        assert!(input.validate().is_err());
    }

    #[test]
    fn rejects_peak_after_target() {
        let input = CalculatorInput { peak_year: 2060, target_year: 2050, ..Default::default() };
        assert!(matches!(input.validate(), Err(InputValidationError::YearOrdering { .. })));
    }

    #[test]
    fn accepts_collapsed_horizon() {
        let input = CalculatorInput {
            initial_year: 2030,
            peak_year: 2030,
            target_year: 2030,
            ..Default::default()
        };
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let input: CalculatorInput =
            serde_json::from_str(r#"{"risk_factor": 20, "existing_forest_status": "active"}"#).unwrap();
        assert_eq!(input.risk_factor, 20.0);
        assert_eq!(input.existing_forest_status, ExistingForestStatus::Active);
        assert_eq!(input.forest_area_available, DEFAULT_FOREST_AREA);
    }
}
