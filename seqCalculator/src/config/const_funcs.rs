use crate::config::calculator_input::CalculatorInput;
use crate::config::constants::TONNES_PER_MEGATONNE;

/// Number of accounting years, never less than one.
pub fn calc_horizon_years(initial_year: i32, target_year: i32) -> i32 {
    (target_year - initial_year).max(1)
}

/// Years over which new planting is spread evenly.
pub fn calc_planting_window_years(input: &CalculatorInput) -> i32 {
    (input.target_year - input.new_planting_start_year).max(1)
}

/// Per-hectare rate after the below-ground multiplier and risk discount.
pub fn calc_effective_rate(base_rate: f64, include_below_ground: bool, root_to_shoot_ratio: f64, risk_factor: f64) -> f64 {
    let mut rate = base_rate;
    if include_below_ground {
        rate *= 1.0 + root_to_shoot_ratio;
    }
    rate * (1.0 - risk_factor / 100.0)
}

/// Effective (forest, coastal) rates for a given input.
pub fn calc_effective_rates(input: &CalculatorInput) -> (f64, f64) {
    let forest = calc_effective_rate(input.forest_rate, input.include_below_ground, input.root_to_shoot_ratio, input.risk_factor);
    let coastal = calc_effective_rate(input.coastal_rate, input.include_below_ground, input.root_to_shoot_ratio, input.risk_factor);
    (forest, coastal)
}

pub fn calc_weighted_rate(forest_fraction: f64, forest_rate: f64, coastal_rate: f64) -> f64 {
    forest_fraction * forest_rate + (1.0 - forest_fraction) * coastal_rate
}

/// Nominal annual absorption of the standing ecosystems in tonnes.
pub fn calc_existing_capacity(input: &CalculatorInput, forest_rate: f64, coastal_rate: f64) -> f64 {
    input.forest_area_available * forest_rate + input.coastal_area_available * coastal_rate
}

/// Area-weighted per-hectare rate of the standing ecosystems.
pub fn calc_existing_base_rate(input: &CalculatorInput, forest_rate: f64, coastal_rate: f64) -> f64 {
    let total_area = input.forest_area_available + input.coastal_area_available;
    if total_area > 0.0 {
        calc_existing_capacity(input, forest_rate, coastal_rate) / total_area
    } else {
        0.0
    }
}

/// Linear 0..1 ramp across `[start_year, end_year]`, clamped outside.
pub fn calc_linear_ramp(year: i32, start_year: i32, end_year: i32) -> f64 {
    if end_year <= start_year {
        return 1.0;
    }
    ((year - start_year) as f64 / (end_year - start_year) as f64).clamp(0.0, 1.0)
}

pub fn tonnes_to_mt(tonnes: f64) -> f64 {
    tonnes / TONNES_PER_MEGATONNE
}

pub fn mt_to_tonnes(mt: f64) -> f64 {
    mt * TONNES_PER_MEGATONNE
}
