use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::core::scenarios::ScenarioComparisonResult;
use crate::models::chart_data::{AllChartData, MultiRiskChartData, PathwayValidation, RoadmapData, TrajectoryChartData};
use crate::models::results::CalculatorResult;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Serialize)]
struct EmissionsRow {
    year: i32,
    anchor_value: Option<f64>,
    interpolated_emissions: f64,
    policy_target: f64,
    existing_sequestration: f64,
    carbon_balance: f64,
}

#[derive(Serialize)]
struct NewPlantingRow {
    year: i32,
    annual_planting_area_ha: f64,
    cumulative_planted_area_ha: f64,
    annual_sequestration_mt: f64,
    remaining_gap_mt: f64,
}

#[derive(Serialize)]
struct NetZeroRow {
    year: i32,
    gross_emissions: f64,
    existing_sequestration: f64,
    new_planting_sequestration: f64,
    net_balance: f64,
}

#[derive(Serialize)]
struct AreaComparisonRow<'a> {
    ecosystem: &'a str,
    current_area_ha: f64,
    needed_area_ha: f64,
}

#[derive(Serialize)]
struct ScenarioAreaRow<'a> {
    scenario: &'a str,
    total_area_ha: f64,
    forest_area_ha: f64,
    coastal_area_ha: f64,
    feasible: bool,
}

#[derive(Serialize)]
struct RiskRow<'a> {
    scenario: &'a str,
    risk_factor: f64,
    year: i32,
    cumulative_area_ha: f64,
    emissions: f64,
}

#[derive(Serialize)]
struct ScenarioRow<'a> {
    scenario: &'a str,
    description: &'a str,
    total_area_ha: f64,
    forest_area_ha: f64,
    coastal_area_ha: f64,
    forest_utilization_percent: f64,
    coastal_utilization_percent: f64,
    overall_feasible: bool,
}

/// Writes calculation outputs under a timestamped directory.
pub struct CsvExporter {
    output_dir: PathBuf,
    verbose_logging: bool,
}

impl CsvExporter {
    /// Create a new exporter; output lands in `<output_dir>/<timestamp>/`.
    pub fn new(output_dir: impl AsRef<Path>, verbose_logging: bool) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let full_path = output_dir.as_ref().join(timestamp);
        std::fs::create_dir_all(&full_path)
            .with_context(|| format!("Failed to create output directory {}", full_path.display()))?;

        Ok(Self {
            output_dir: full_path,
            verbose_logging,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export every chart series as one CSV per chart.
    pub fn export_chart_data(&self, charts: &AllChartData) -> Result<()> {
        let _timing = logging::start_timing("export_chart_data",
            OperationCategory::FileIO { subcategory: FileIOType::CsvExport });

        let emissions = &charts.gross_emissions;
        let rows = emissions.years.iter().enumerate().map(|(i, &year)| EmissionsRow {
            year,
            anchor_value: emissions.sparse_data_points[i],
            interpolated_emissions: emissions.interpolated_emissions[i],
            policy_target: emissions.policy_target_line[i],
            existing_sequestration: charts.carbon_balance.existing_forest_sequestration[i],
            carbon_balance: charts.carbon_balance.net_balance[i],
        });
        self.write_rows("emissions.csv", rows)?;

        let planting = &charts.new_planting;
        let rows = planting.years.iter().enumerate().map(|(i, &year)| NewPlantingRow {
            year,
            annual_planting_area_ha: planting.annual_planting_area[i],
            cumulative_planted_area_ha: planting.cumulative_planted_area[i],
            annual_sequestration_mt: planting.annual_new_sequestration_mt[i],
            remaining_gap_mt: planting.cumulative_sequestration_gap[i],
        });
        self.write_rows("new_planting.csv", rows)?;

        let net_zero = &charts.net_zero_balance;
        let rows = net_zero.years.iter().enumerate().map(|(i, &year)| NetZeroRow {
            year,
            gross_emissions: net_zero.gross_emissions[i],
            existing_sequestration: net_zero.existing_forest_sequestration[i],
            new_planting_sequestration: net_zero.new_planting_sequestration[i],
            net_balance: net_zero.net_balance[i],
        });
        self.write_rows("net_zero_balance.csv", rows)
    }

    /// Export the requirement trajectory and its bar-chart datasets.
    pub fn export_trajectory(&self, chart: &TrajectoryChartData) -> Result<()> {
        let _timing = logging::start_timing("export_trajectory",
            OperationCategory::FileIO { subcategory: FileIOType::CsvExport });

        self.write_rows("trajectory.csv", chart.trajectory.data_points.iter())?;

        let comparison = &chart.area_comparison;
        let rows = comparison.labels.iter().enumerate().map(|(i, label)| AreaComparisonRow {
            ecosystem: label,
            current_area_ha: comparison.current[i],
            needed_area_ha: comparison.needed[i],
        });
        self.write_rows("area_comparison.csv", rows)?;

        let rows = chart.scenario_areas.iter().map(|(name, area)| ScenarioAreaRow {
            scenario: name,
            total_area_ha: area.total,
            forest_area_ha: area.forest,
            coastal_area_ha: area.coastal,
            feasible: area.feasible,
        });
        self.write_rows("scenario_areas.csv", rows)
    }

    pub fn export_roadmap(&self, roadmap: &RoadmapData) -> Result<()> {
        let _timing = logging::start_timing("export_roadmap",
            OperationCategory::FileIO { subcategory: FileIOType::CsvExport });
        self.write_rows("roadmap.csv", roadmap.points.iter())
    }

    pub fn export_risk_scenarios(&self, data: &MultiRiskChartData) -> Result<()> {
        let rows = data.scenarios.iter().flat_map(|scenario| {
            scenario.years.iter().enumerate().map(move |(i, &year)| RiskRow {
                scenario: &scenario.name,
                risk_factor: scenario.risk_factor,
                year,
                cumulative_area_ha: scenario.area_trajectory[i],
                emissions: scenario.emissions_trajectory[i],
            })
        });
        self.write_rows("risk_scenarios.csv", rows)
    }

    pub fn export_scenario_comparison(&self, comparison: &ScenarioComparisonResult) -> Result<()> {
        let rows = comparison.scenarios.iter().map(|s| ScenarioRow {
            scenario: &s.scenario_name,
            description: &s.scenario_description,
            total_area_ha: s.result.total_area_needed,
            forest_area_ha: s.result.forest_area_needed,
            coastal_area_ha: s.result.coastal_area_needed,
            forest_utilization_percent: s.result.forest_feasibility.utilization_percent,
            coastal_utilization_percent: s.result.coastal_feasibility.utilization_percent,
            overall_feasible: s.result.overall_feasible,
        });
        self.write_rows("scenario_comparison.csv", rows)
    }

    /// Export the full result bundle as pretty-printed JSON.
    pub fn export_json(
        &self,
        result: &CalculatorResult,
        charts: &AllChartData,
        trajectory: &TrajectoryChartData,
        multi_risk: &MultiRiskChartData,
        validation: &PathwayValidation,
    ) -> Result<PathBuf> {
        let _timing = logging::start_timing("export_json",
            OperationCategory::FileIO { subcategory: FileIOType::JsonExport });

        let bundle = serde_json::json!({
            "result": result,
            "charts": charts,
            "trajectory": trajectory.trajectory,
            "area_comparison": trajectory.area_comparison,
            "scenario_areas": trajectory.scenario_areas,
            "multi_risk": multi_risk,
            "pathway_validation": validation,
        });

        let path = self.output_dir.join("results.json");
        std::fs::write(&path, serde_json::to_string_pretty(&bundle)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if self.verbose_logging {
            info!("Exported JSON results to {}", path.display());
        }
        Ok(path)
    }

    fn write_rows<T: Serialize>(&self, file_name: &str, rows: impl IntoIterator<Item = T>) -> Result<()> {
        let path = self.output_dir.join(file_name);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        let mut count = 0usize;
        for row in rows {
            writer.serialize(row)?;
            count += 1;
        }
        writer.flush()?;

        if self.verbose_logging {
            info!("Exported {} rows to {}", count, path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::calculator_input::CalculatorInput;
    use crate::core::balancer::calculate;
    use crate::core::charts::{generate_all_chart_data, generate_trajectory};
    use crate::core::roadmap::{generate_roadmap, validate_pathway};
    use crate::core::scenarios::generate_multi_risk_chart_data;

    #[test]
    fn writes_chart_and_roadmap_files() {
        let base = std::env::temp_dir().join(format!("seqcalc_export_{}", std::process::id()));
        let exporter = CsvExporter::new(&base, false).unwrap();

        let input = CalculatorInput::default();
        let result = calculate(&input);
        exporter.export_chart_data(&generate_all_chart_data(&input)).unwrap();
        exporter.export_roadmap(&generate_roadmap(&input, &result)).unwrap();

        let roadmap = std::fs::read_to_string(exporter.output_dir().join("roadmap.csv")).unwrap();
        let mut lines = roadmap.lines();
        assert_eq!(
            lines.next(),
            Some("year,emissions,existing_sink,new_sink,other_mitigation,net_balance")
        );
        assert_eq!(lines.count(), 28);
        assert!(exporter.output_dir().join("new_planting.csv").exists());
        assert!(exporter.output_dir().join("emissions.csv").exists());

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn writes_trajectory_and_json_bundle() {
        let base = std::env::temp_dir().join(format!("seqcalc_bundle_{}", std::process::id()));
        let exporter = CsvExporter::new(&base, false).unwrap();

        let input = CalculatorInput::default();
        let result = calculate(&input);
        let charts = generate_all_chart_data(&input);
        let trajectory = generate_trajectory(&input, &result);
        let multi_risk = generate_multi_risk_chart_data(&input);
        let validation = validate_pathway(&multi_risk.roadmap, input.sequestration_percent);

        exporter.export_trajectory(&trajectory).unwrap();
        let csv = std::fs::read_to_string(exporter.output_dir().join("trajectory.csv")).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("year,cumulative_sequestration,annual_sequestration,remaining_emissions,forest_area_cumulative,coastal_area_cumulative")
        );
        assert_eq!(lines.count(), 28);
        let comparison = std::fs::read_to_string(exporter.output_dir().join("area_comparison.csv")).unwrap();
        assert_eq!(comparison.lines().count(), 3);
        let scenarios = std::fs::read_to_string(exporter.output_dir().join("scenario_areas.csv")).unwrap();
        assert_eq!(scenarios.lines().count(), 5);

        let path = exporter.export_json(&result, &charts, &trajectory, &multi_risk, &validation).unwrap();
        let bundle: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(
            bundle["area_comparison"]["current"][0].as_f64(),
            Some(input.forest_area_available)
        );
        assert_eq!(bundle["area_comparison"]["labels"][1], "Coastal");
        assert_eq!(bundle["trajectory"]["years"].as_array().map(|a| a.len()), Some(28));
        assert!(bundle["scenario_areas"]["Full Biomass"]["total"].is_number());
        assert_eq!(bundle["multi_risk"]["roadmap_risk_level"], "Moderate");

        std::fs::remove_dir_all(&base).unwrap();
    }
}
