use clap::Parser;
use crate::config::calculator_input::CalculatorInput;
use crate::models::forest_status::ExistingForestStatus;

#[derive(Parser, Debug)]
#[command(author, version, about = "Forest and coastal area needed to meet an emission-reduction target", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "JSON file with calculator input (missing fields use national defaults)")]
    input: Option<String>,

    #[arg(short = 's', long, help = "Share of reduction assigned to sequestration (%)")]
    sequestration_percent: Option<f64>,

    #[arg(short, long, help = "Risk buffer applied to new plantings (%)")]
    risk_factor: Option<f64>,

    #[arg(short, long, help = "Annual degradation of existing ecosystems (%)")]
    degradation_rate: Option<f64>,

    #[arg(long, help = "Existing forest status: mature, mixed or active")]
    forest_status: Option<ExistingForestStatus>,

    #[arg(short = 'f', long, help = "Share of new planting allocated to forest (%)")]
    forest_percent: Option<f64>,

    #[arg(long, default_value_t = false, help = "Include below-ground biomass")]
    below_ground: bool,

    #[arg(long, default_value_t = false)]
    compare_scenarios: bool,

    #[arg(long, default_value_t = false)]
    export_csv: bool,

    #[arg(long, default_value_t = false)]
    export_json: bool,

    #[arg(short, long, default_value = "output")]
    output_dir: String,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn compare_scenarios(&self) -> bool {
        self.compare_scenarios
    }

    pub fn export_csv(&self) -> bool {
        self.export_csv
    }

    pub fn export_json(&self) -> bool {
        self.export_json
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    /// Applies command-line overrides on top of a loaded or default input.
    pub fn apply_overrides(&self, input: CalculatorInput) -> CalculatorInput {
        let mut input = input;
        if let Some(percent) = self.sequestration_percent {
            input.sequestration_percent = percent;
        }
        if let Some(risk) = self.risk_factor {
            input.risk_factor = risk;
        }
        if let Some(degradation) = self.degradation_rate {
            input.degradation_rate = degradation;
        }
        if let Some(status) = self.forest_status {
            input.existing_forest_status = status;
        }
        if let Some(forest_percent) = self.forest_percent {
            input.new_planting_forest_percent = forest_percent;
        }
        if self.below_ground {
            input.include_below_ground = true;
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_given_fields() {
        let args = Args::parse_from(["seqcalc", "--risk-factor", "20", "--forest-status", "active", "--below-ground"]);
        let input = args.apply_overrides(CalculatorInput::default());
        assert_eq!(input.risk_factor, 20.0);
        assert_eq!(input.existing_forest_status, ExistingForestStatus::Active);
        assert!(input.include_below_ground);
        assert_eq!(input.sequestration_percent, CalculatorInput::default().sequestration_percent);
    }

    #[test]
    fn rejects_unknown_forest_status() {
        assert!(Args::try_parse_from(["seqcalc", "--forest-status", "ancient"]).is_err());
    }
}
