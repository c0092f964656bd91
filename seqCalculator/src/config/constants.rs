// IPCC 2006 Tier 1 Sequestration Rates (tCO2/ha/year)
// Biomass growth (t dm/ha/yr) x carbon fraction (0.47) x CO2/C (44/12)
pub const FOREST_SEQUESTRATION_RATE: f64 = 6.9;   // Tropical rainforest (IPCC Vol.4 Table 4.9)
pub const COASTAL_SEQUESTRATION_RATE: f64 = 6.6;  // Mangrove (Alongi 2014)
pub const ROOT_TO_SHOOT_RATIO: f64 = 0.37;        // Tropical moist forest (IPCC Vol.4 Table 4.4)

// National Baseline (Indonesia)
pub const DEFAULT_FOREST_AREA: f64 = 120_343_230.0;  // hectares
pub const DEFAULT_COASTAL_AREA: f64 = 5_321_321.0;   // hectares

pub const DEFAULT_EMISSIONS_INITIAL: f64 = 1200.0;  // MtCO2e
pub const DEFAULT_EMISSIONS_PEAK: f64 = 1244.0;     // MtCO2e
pub const DEFAULT_TARGET_EMISSIONS: f64 = 540.0;    // MtCO2e

pub const DEFAULT_INITIAL_YEAR: i32 = 2023;
pub const DEFAULT_PEAK_YEAR: i32 = 2030;
pub const DEFAULT_TARGET_YEAR: i32 = 2050;
pub const DEFAULT_NEW_PLANTING_START_YEAR: i32 = 2023;

// Policy Parameters
pub const DEFAULT_SEQUESTRATION_PERCENT: f64 = 60.0;
pub const DEFAULT_NEW_PLANTING_FOREST_PERCENT: f64 = 80.0;
pub const DEFAULT_RISK_FACTOR: f64 = 0.0;
pub const DEFAULT_DEGRADATION_RATE: f64 = 2.0;     // % per year

// Unit Conversion
pub const TONNES_PER_MEGATONNE: f64 = 1_000_000.0;

// Existing Forest Activity Factors
pub const MATURE_ACTIVITY_FACTOR: f64 = 0.0;   // At equilibrium
pub const MIXED_ACTIVITY_FACTOR: f64 = 0.5;
pub const ACTIVE_ACTIVITY_FACTOR: f64 = 1.0;

// Cohort Maturity Curve
pub const ESTABLISHMENT_YEARS: f64 = 5.0;          // No credit before this age
pub const JUVENILE_END_YEARS: f64 = 15.0;          // End of sigmoid ramp
pub const FULL_MATURITY_YEARS: f64 = 40.0;         // Peak capacity
pub const JUVENILE_CAPACITY: f64 = 0.8;            // Capacity reached at end of ramp
pub const SIGMOID_STEEPNESS: f64 = 0.5;
pub const SIGMOID_MIDPOINT: f64 = 5.0;             // Years after establishment

// Display and Validation
pub const MAX_DISPLAY_UTILIZATION: f64 = 999.99;   // % cap for display
pub const PATHWAY_TOLERANCE_MT: f64 = 50.0;        // MtCO2e
pub const MAX_PROJECTION_EXTENSION_YEARS: i32 = 50;

// Input Bounds
pub const MIN_EMISSIONS: f64 = 0.0;
pub const MAX_EMISSIONS: f64 = 5000.0;
pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;
pub const MIN_TARGET_YEAR: i32 = 2025;
pub const MIN_RATE: f64 = 1.0;
pub const MAX_RATE: f64 = 50.0;
pub const MIN_ROOT_TO_SHOOT: f64 = 0.1;
pub const MAX_ROOT_TO_SHOOT: f64 = 1.0;

/// Named risk level used for multi-risk chart variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskLevel {
    pub name: &'static str,
    pub risk_factor: f64,
    pub color: &'static str,
}

pub const RISK_LEVELS: [RiskLevel; 3] = [
    RiskLevel { name: "Optimistic", risk_factor: 0.0, color: "#22c55e" },
    RiskLevel { name: "Moderate", risk_factor: 20.0, color: "#f59e0b" },
    RiskLevel { name: "Pessimistic", risk_factor: 40.0, color: "#ef4444" },
];

// Index into RISK_LEVELS whose result seeds the roadmap
pub const ROADMAP_RISK_LEVEL: usize = 1;
