use crate::config::constants::*;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Capacity fraction (0..=1) of a planting cohort by age in years.
///
/// Establishment earns nothing, a sigmoid ramp runs to 0.8 by year 15,
/// a linear ramp reaches full capacity at 40, and after that the cohort
/// decays at the same annual `degradation` fraction as standing forest.
/// The sigmoid branch stops short of 0.8 just below 15; the jump to exactly
/// 0.8 at 15 is kept as-is.
pub fn maturity_factor(years_since_planting: f64, degradation: f64) -> f64 {
    if years_since_planting < ESTABLISHMENT_YEARS {
        0.0
    } else if years_since_planting < JUVENILE_END_YEARS {
        let t = years_since_planting - ESTABLISHMENT_YEARS;
        JUVENILE_CAPACITY * sigmoid(SIGMOID_STEEPNESS * (t - SIGMOID_MIDPOINT))
    } else if years_since_planting < FULL_MATURITY_YEARS {
        let t = years_since_planting - JUVENILE_END_YEARS;
        JUVENILE_CAPACITY + (1.0 - JUVENILE_CAPACITY) * (t / (FULL_MATURITY_YEARS - JUVENILE_END_YEARS))
    } else {
        (1.0 - degradation).powf(years_since_planting - FULL_MATURITY_YEARS)
    }
}

/// Maturity of a cohort planted in `planting_year`, evaluated in `year`.
pub fn cohort_maturity(planting_year: i32, year: i32, degradation: f64) -> f64 {
    maturity_factor((year - planting_year) as f64, degradation)
}
