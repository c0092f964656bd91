// Main module declarations for the sequestration calculator

// Carbon-accounting engine
pub mod core {
    pub mod interpolation;
    pub mod degradation;
    pub mod maturity;
    pub mod balancer;
    pub mod roadmap;
    pub mod charts;
    pub mod scenarios;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod const_funcs;
    pub mod calculator_input;
    pub mod scenario_presets;
}

// Model definitions
pub mod models {
    pub mod forest_status;
    pub mod results;
    pub mod chart_data;
}

// Data loaders
pub mod data {
    pub mod input_loader;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::config::calculator_input::CalculatorInput;
pub use crate::core::balancer::calculate;
pub use crate::core::charts::{generate_all_chart_data, generate_trajectory};
pub use crate::core::roadmap::{generate_roadmap, validate_pathway};
pub use crate::models::forest_status::ExistingForestStatus;
pub use crate::models::results::{CalculatorResult, FeasibilityResult};
