use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::config::calculator_input::CalculatorInput;
use crate::config::const_funcs::{calc_existing_capacity, calc_linear_ramp, calc_planting_window_years, tonnes_to_mt};
use crate::config::constants::PATHWAY_TOLERANCE_MT;
use crate::core::degradation::decayed_rate;
use crate::core::interpolation::EmissionAnchors;
use crate::core::maturity::cohort_maturity;
use crate::models::chart_data::{PathwayValidation, RoadmapData, RoadmapPoint};
use crate::models::results::CalculatorResult;
use crate::utils::logging::{self, CalculationType, OperationCategory};

/// Even annual planting of the required area across the planting window.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantingSchedule {
    pub start_year: i32,
    pub window_years: i32,
    pub annual_area: f64,   // ha/yr
    pub rate_per_ha: f64,   // tCO2/ha/yr at full maturity
    pub degradation: f64,   // fraction per year after full maturity
}

impl PlantingSchedule {
    pub fn from_result(input: &CalculatorInput, result: &CalculatorResult) -> Self {
        let window_years = calc_planting_window_years(input);
        let annual_area = if result.total_area_needed.is_finite() {
            result.total_area_needed / window_years as f64
        } else {
            warn!("Area requirement is unbounded; no planting cohorts scheduled");
            0.0
        };

        Self {
            start_year: input.new_planting_start_year,
            window_years,
            annual_area,
            rate_per_ha: result.weighted_average_rate,
            degradation: input.degradation_fraction(),
        }
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + self.window_years
    }

    /// Area planted during `year` itself.
    pub fn area_planted_in(&self, year: i32) -> f64 {
        if year >= self.start_year && year < self.end_year() {
            self.annual_area
        } else {
            0.0
        }
    }

    /// Area of each cohort planted up to and including `year`, keyed by planting year.
    pub fn cohorts_up_to(&self, year: i32) -> BTreeMap<i32, f64> {
        let last = year.min(self.end_year() - 1);
        (self.start_year..=last)
            .map(|planting_year| (planting_year, self.area_planted_in(planting_year)))
            .collect()
    }

    pub fn cumulative_area_by(&self, year: i32) -> f64 {
        self.cohorts_up_to(year).values().sum()
    }

    /// Absorption of every cohort standing in `year`, in tonnes.
    pub fn sequestration_tonnes(&self, year: i32) -> f64 {
        self.cohorts_up_to(year)
            .iter()
            .map(|(&planting_year, &area)| {
                area * self.rate_per_ha * cohort_maturity(planting_year, year, self.degradation)
            })
            .sum()
    }
}

/// Year-by-year balance of emissions against existing and new sinks plus
/// non-sequestration mitigation, over `[initial_year, target_year]`.
pub fn generate_roadmap(input: &CalculatorInput, baseline: &CalculatorResult) -> RoadmapData {
    let _timing = logging::start_timing("generate_roadmap",
        OperationCategory::Calculation { subcategory: CalculationType::Roadmap });

    let anchors = EmissionAnchors::from_input(input);
    let schedule = PlantingSchedule::from_result(input, baseline);
    let existing_capacity = calc_existing_capacity(input, baseline.effective_forest_rate, baseline.effective_coastal_rate);
    let activity_factor = input.activity_factor();
    let degradation = input.degradation_fraction();
    let other_share = 1.0 - input.sequestration_fraction();

    let points: Vec<RoadmapPoint> = (input.initial_year..=input.target_year)
        .map(|year| {
            let emissions = anchors.value_at(year);
            let elapsed = year - input.initial_year;
            let existing_sink = -tonnes_to_mt(decayed_rate(existing_capacity, activity_factor, degradation, elapsed));
            let new_sink = -tonnes_to_mt(schedule.sequestration_tonnes(year));
            let other_mitigation = -emissions * other_share
                * calc_linear_ramp(year, input.initial_year, input.target_year);

            RoadmapPoint {
                year,
                emissions,
                existing_sink,
                new_sink,
                other_mitigation,
                net_balance: emissions + existing_sink + new_sink + other_mitigation,
            }
        })
        .collect();

    if let Some(last) = points.last() {
        debug!(year = last.year, net_balance = last.net_balance, "Roadmap generated");
    }

    RoadmapData::from_points(points)
}

/// Compares the total sink at the end of the roadmap with the share of the
/// remaining emissions that sequestration is meant to neutralise.
///
/// `expected` is the final-year emissions times `sequestration_percent / 100`
/// (not the share of the reduction from initial to target emissions).
/// `actual` is the magnitude of the existing plus new sink in that year, and
/// the pathway is valid when the two differ by at most 50 MtCO2e.
pub fn validate_pathway(roadmap: &RoadmapData, sequestration_percent: f64) -> PathwayValidation {
    let (expected, actual) = match roadmap.points.last() {
        Some(last) => (
            last.emissions * sequestration_percent / 100.0,
            (last.existing_sink + last.new_sink).abs(),
        ),
        None => (0.0, 0.0),
    };
    let gap = expected - actual;

    PathwayValidation {
        is_valid: gap.abs() <= PATHWAY_TOLERANCE_MT,
        gap,
        expected,
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balancer::calculate;
    use crate::models::forest_status::ExistingForestStatus;
    use approx::assert_relative_eq;

    fn schedule() -> PlantingSchedule {
        PlantingSchedule {
            start_year: 2020,
            window_years: 10,
            annual_area: 100.0,
            rate_per_ha: 10.0,
            degradation: 0.0,
        }
    }

    #[test]
    fn schedule_spreads_area_over_window() {
        let s = schedule();
        assert_eq!(s.area_planted_in(2019), 0.0);
        assert_eq!(s.area_planted_in(2020), 100.0);
        assert_eq!(s.area_planted_in(2029), 100.0);
        assert_eq!(s.area_planted_in(2030), 0.0);
        assert_eq!(s.cumulative_area_by(2024), 500.0);
        assert_eq!(s.cumulative_area_by(2100), 1000.0);
        assert!(s.cohorts_up_to(2019).is_empty());
    }

    #[test]
    fn cohorts_contribute_after_establishment() {
        let s = schedule();
        assert_eq!(s.sequestration_tonnes(2024), 0.0);
        // Only the 2020 cohort is five years old in 2025
        assert_relative_eq!(
            s.sequestration_tonnes(2025),
            100.0 * 10.0 * cohort_maturity(2020, 2025, 0.0),
            epsilon = 1e-9
        );
        // Every cohort is past full maturity by 2070
        assert_relative_eq!(s.sequestration_tonnes(2070), 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn unbounded_area_schedules_nothing() {
        let input = CalculatorInput { risk_factor: 100.0, ..Default::default() };
        let result = calculate(&input);
        let s = PlantingSchedule::from_result(&input, &result);
        assert_eq!(s.annual_area, 0.0);
        assert_eq!(s.sequestration_tonnes(2050), 0.0);
    }

    #[test]
    fn roadmap_covers_horizon_and_sums() {
        let input = CalculatorInput::default();
        let result = calculate(&input);
        let roadmap = generate_roadmap(&input, &result);

        assert_eq!(roadmap.years.first(), Some(&2023));
        assert_eq!(roadmap.years.last(), Some(&2050));
        assert_eq!(roadmap.points.len(), 28);
        for p in &roadmap.points {
            assert!(p.existing_sink <= 0.0 && p.new_sink <= 0.0 && p.other_mitigation <= 0.0);
            assert_relative_eq!(
                p.net_balance,
                p.emissions + p.existing_sink + p.new_sink + p.other_mitigation,
                epsilon = 1e-9
            );
        }
        assert_eq!(roadmap.points[0].other_mitigation, 0.0);
        assert_eq!(roadmap.emissions[0], 1200.0);
        assert_eq!(*roadmap.emissions.last().unwrap(), 540.0);
    }

    #[test]
    fn mature_forest_has_no_existing_sink() {
        let input = CalculatorInput {
            existing_forest_status: ExistingForestStatus::Mature,
            ..Default::default()
        };
        let roadmap = generate_roadmap(&input, &calculate(&input));
        assert!(roadmap.existing_sink.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn pathway_validation_uses_tolerance() {
        let point = |existing_sink: f64, new_sink: f64| RoadmapPoint {
            year: 2050,
            emissions: 500.0,
            existing_sink,
            new_sink,
            other_mitigation: -200.0,
            net_balance: 0.0,
        };

        let valid = validate_pathway(&RoadmapData::from_points(vec![point(-200.0, -120.0)]), 60.0);
        assert!(valid.is_valid);
        assert_relative_eq!(valid.expected, 300.0);
        assert_relative_eq!(valid.actual, 320.0);
        assert_relative_eq!(valid.gap, -20.0);

        let invalid = validate_pathway(&RoadmapData::from_points(vec![point(-100.0, -100.0)]), 60.0);
        assert!(!invalid.is_valid);
        assert_relative_eq!(invalid.gap, 100.0);
    }

    #[test]
    fn expected_sink_is_share_of_final_year_emissions() {
        let input = CalculatorInput::default();
        let roadmap = generate_roadmap(&input, &calculate(&input));
        let validation = validate_pathway(&roadmap, input.sequestration_percent);
        // 540 MtCO2e in 2050 at 60%, not 60% of the 660 MtCO2e reduction
        assert_relative_eq!(validation.expected, 324.0, epsilon = 1e-9);
        assert_relative_eq!(validation.gap, validation.expected - validation.actual);
    }

    #[test]
    fn empty_roadmap_is_trivially_valid() {
        let validation = validate_pathway(&RoadmapData::from_points(Vec::new()), 60.0);
        assert!(validation.is_valid);
        assert_eq!(validation.gap, 0.0);
    }
}
