use std::path::Path;
use anyhow::{Context, Result};
use tracing::info;

use crate::config::calculator_input::CalculatorInput;
use crate::utils::logging::{self, FileIOType, OperationCategory};

/// Reads a (possibly partial) JSON input file; missing fields keep their defaults.
///
/// The returned input is not validated.
pub fn load_input(path: impl AsRef<Path>) -> Result<CalculatorInput> {
    let _timing = logging::start_timing("load_input",
        OperationCategory::FileIO { subcategory: FileIOType::InputLoad });

    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let input = parse_input(&content)
        .with_context(|| format!("Invalid calculator input in {}", path.display()))?;

    info!("Loaded calculator input from {}", path.display());
    Ok(input)
}

pub fn parse_input(json: &str) -> Result<CalculatorInput> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forest_status::ExistingForestStatus;

    #[test]
    fn loads_partial_file() {
        let path = std::env::temp_dir().join(format!("seqcalc_input_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "sequestration_percent": 45, "existing_forest_status": "mature" }"#).unwrap();

        let input = load_input(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(input.sequestration_percent, 45.0);
        assert_eq!(input.existing_forest_status, ExistingForestStatus::Mature);
        assert_eq!(input.target_year, CalculatorInput::default().target_year);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(parse_input(r#"{ "existing_forest_status": "ancient" }"#).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_input("/nonexistent/seqcalc/input.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
