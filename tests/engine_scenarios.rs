//! End-to-end checks of the carbon-accounting engine through the public API.
use approx::assert_relative_eq;
use seqcalc::config::const_funcs::calc_existing_capacity;
use seqcalc::core::scenarios::generate_multi_risk_chart_data;
use seqcalc::{
    calculate, generate_all_chart_data, generate_roadmap, validate_pathway, CalculatorInput, CalculatorResult,
    ExistingForestStatus,
};

fn national_baseline() -> CalculatorInput {
    CalculatorInput {
        emissions_initial: 1200.0,
        emissions_peak: 1244.0,
        target_emissions: 540.0,
        initial_year: 2023,
        peak_year: 2030,
        target_year: 2050,
        sequestration_percent: 60.0,
        forest_rate: 6.9,
        coastal_rate: 6.6,
        new_planting_forest_percent: 80.0,
        existing_forest_status: ExistingForestStatus::Mixed,
        degradation_rate: 2.0,
        forest_area_available: 120_343_230.0,
        coastal_area_available: 5_321_321.0,
        ..Default::default()
    }
}

fn assert_feasibility_consistent(result: &CalculatorResult) {
    for feasibility in [&result.forest_feasibility, &result.coastal_feasibility] {
        assert_eq!(feasibility.is_feasible, feasibility.area_needed <= feasibility.area_available);
        assert!(feasibility.utilization_percent <= 999.99);
        if feasibility.deficit_or_surplus.is_finite() {
            assert_eq!(feasibility.is_feasible, feasibility.deficit_or_surplus >= 0.0);
        }
    }
    assert_eq!(
        result.overall_feasible,
        result.forest_feasibility.is_feasible && result.coastal_feasibility.is_feasible
    );
}

#[test]
fn national_baseline_scenario() {
    let input = national_baseline();
    assert!(input.validate().is_ok());

    let result = calculate(&input);
    assert_eq!(result.years, 27);
    assert!(result.total_area_needed > 0.0 && result.total_area_needed.is_finite());
    assert!(result.annual_sequestration_needed >= 0.0);
    assert_relative_eq!(result.weighted_average_rate, 6.84, epsilon = 1e-12);
    assert_relative_eq!(result.forest_area_needed, result.total_area_needed * 0.8, max_relative = 1e-12);

    let ratio = result.forest_area_needed / input.forest_area_available;
    assert_eq!(result.forest_feasibility.is_feasible, ratio <= 1.0);
    assert_feasibility_consistent(&result);

    // Mixed status credits half of the decaying standing sink
    let capacity = calc_existing_capacity(&input, 6.9, 6.6);
    let decay_sum: f64 = (0..27).map(|n| 0.98f64.powi(n)).sum();
    assert_relative_eq!(result.existing_absorption_credit, capacity * 0.5 * decay_sum, max_relative = 1e-9);
    assert_relative_eq!(result.degradation_loss, capacity * 0.02 * decay_sum, max_relative = 1e-9);
}

#[test]
fn collapsed_horizon_does_not_fail() {
    let input = CalculatorInput {
        initial_year: 2030,
        peak_year: 2030,
        target_year: 2030,
        new_planting_start_year: 2030,
        ..national_baseline()
    };
    let result = calculate(&input);
    assert_eq!(result.years, 1);
    for value in [
        result.total_reduction_needed,
        result.sequestration_target,
        result.total_area_needed,
        result.annual_sequestration_needed,
        result.cumulative_sequestration,
        result.weighted_average_rate,
    ] {
        assert!(value.is_finite());
    }
    assert_feasibility_consistent(&result);

    let roadmap = generate_roadmap(&input, &result);
    assert_eq!(roadmap.years, vec![2030]);
    assert!(roadmap.net_balance.iter().all(|v| v.is_finite()));

    let charts = generate_all_chart_data(&input);
    assert_eq!(charts.gross_emissions.years, vec![2030]);
    assert!(validate_pathway(&roadmap, input.sequestration_percent).gap.is_finite());
}

#[test]
fn zero_weighted_rate_is_the_only_infinity() {
    let input = CalculatorInput {
        initial_year: 2030,
        peak_year: 2030,
        target_year: 2030,
        risk_factor: 100.0,
        ..national_baseline()
    };
    let result = calculate(&input);
    assert_eq!(result.total_area_needed, f64::INFINITY);
    assert!(result.annual_sequestration_needed.is_finite());
    assert_feasibility_consistent(&result);

    let charts = generate_all_chart_data(&input);
    assert!(!charts.new_planting.is_target_achieved);
}

#[test]
fn calculate_is_idempotent() {
    let input = national_baseline();
    let first = calculate(&input);
    let second = calculate(&input);
    assert_eq!(first, second);
    assert_eq!(first.total_area_needed.to_bits(), second.total_area_needed.to_bits());
    assert_eq!(generate_all_chart_data(&input), generate_all_chart_data(&input));
}

#[test]
fn feasibility_consistent_across_configurations() {
    let statuses = ExistingForestStatus::ALL;
    for status in statuses {
        for percent in [0.0, 30.0, 60.0, 100.0] {
            for forest_share in [0.0, 50.0, 100.0] {
                for coastal_area in [0.0, 1_000.0, 5_321_321.0] {
                    let input = CalculatorInput {
                        existing_forest_status: status,
                        sequestration_percent: percent,
                        new_planting_forest_percent: forest_share,
                        coastal_area_available: coastal_area,
                        ..national_baseline()
                    };
                    assert_feasibility_consistent(&calculate(&input));
                }
            }
        }
    }
}

#[test]
fn degradation_free_existing_sink_is_flat() {
    let input = CalculatorInput {
        degradation_rate: 0.0,
        existing_forest_status: ExistingForestStatus::Active,
        ..national_baseline()
    };
    let charts = generate_all_chart_data(&input);
    let series = &charts.existing_forest_sequestration.total_sequestration_mt;
    assert!(series.iter().all(|&v| v == series[0]));
    assert_eq!(calculate(&input).degradation_loss, 0.0);
}

#[test]
fn roadmap_validation_reports_gap() {
    let input = national_baseline();
    let multi_risk = generate_multi_risk_chart_data(&input);
    let validation = validate_pathway(&multi_risk.roadmap, input.sequestration_percent);

    let last = multi_risk.roadmap.points.last().unwrap();
    assert_relative_eq!(validation.expected, last.emissions * 0.6, max_relative = 1e-12);
    assert_relative_eq!(validation.actual, -(last.existing_sink + last.new_sink), max_relative = 1e-12);
    assert_eq!(validation.is_valid, validation.gap.abs() <= 50.0);
}
