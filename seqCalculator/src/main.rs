use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use seqcalc::cli::cli::Args;
use seqcalc::config::calculator_input::CalculatorInput;
use seqcalc::core::balancer::calculate;
use seqcalc::config::const_funcs::tonnes_to_mt;
use seqcalc::core::charts::{generate_all_chart_data, generate_trajectory};
use seqcalc::core::roadmap::validate_pathway;
use seqcalc::core::scenarios::{compare_scenarios, generate_multi_risk_chart_data, ScenarioComparisonResult};
use seqcalc::data::input_loader::load_input;
use seqcalc::models::chart_data::{MultiRiskChartData, NewPlantingChartData, PathwayValidation, TrajectoryChartData};
use seqcalc::models::results::{CalculatorResult, FeasibilityResult};
use seqcalc::utils::csv_export::CsvExporter;
use seqcalc::utils::logging;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging())?;

    let base_input = match args.input() {
        Some(path) => load_input(path)?,
        None => CalculatorInput::default(),
    };
    let input = args.apply_overrides(base_input);
    input.validate().context("Calculator input rejected")?;

    println!("Carbon Sequestration Calculator ({}-{})", input.initial_year, input.target_year);

    let result = calculate(&input);
    let charts = generate_all_chart_data(&input);
    let trajectory = generate_trajectory(&input, &result);
    let multi_risk = generate_multi_risk_chart_data(&input);
    let validation = validate_pathway(&multi_risk.roadmap, input.sequestration_percent);

    print_result(&result);
    print_new_planting(&charts.new_planting);
    print_scenario_areas(&trajectory);
    print_validation(&multi_risk, &validation);

    let comparison = if args.compare_scenarios() {
        let comparison = compare_scenarios(&input);
        print_scenarios(&comparison);
        Some(comparison)
    } else {
        None
    };

    if args.export_csv() || args.export_json() {
        let exporter = CsvExporter::new(args.output_dir(), args.debug_logging())?;
        if args.export_csv() {
            exporter.export_chart_data(&charts)?;
            exporter.export_trajectory(&trajectory)?;
            exporter.export_roadmap(&multi_risk.roadmap)?;
            exporter.export_risk_scenarios(&multi_risk)?;
            if let Some(comparison) = &comparison {
                exporter.export_scenario_comparison(comparison)?;
            }
        }
        if args.export_json() {
            exporter.export_json(&result, &charts, &trajectory, &multi_risk, &validation)?;
        }
        info!("Exports written to {}", exporter.output_dir().display());
        println!("Results exported to {}", exporter.output_dir().display());
    }

    logging::print_timing_report();
    Ok(())
}

fn print_result(result: &CalculatorResult) {
    println!("\nSequestration Requirement");
    println!("-------------------------");
    println!("Accounting years:            {}", result.years);
    println!("Cumulative emissions:        {:.1} MtCO2e", result.total_reduction_needed);
    println!("Sequestration target:        {:.1} MtCO2e", result.sequestration_target);
    println!("Existing ecosystem credit:   {:.1} MtCO2e", tonnes_to_mt(result.existing_absorption_credit));
    println!("Degradation loss:            {:.1} MtCO2e", tonnes_to_mt(result.degradation_loss));
    println!("Annual new sequestration:    {:.2} MtCO2e/yr", tonnes_to_mt(result.annual_sequestration_needed));
    println!("Weighted new-planting rate:  {:.2} tCO2/ha/yr", result.weighted_average_rate);
    println!("Total new area needed:       {:.0} ha", result.total_area_needed);
    print_feasibility("Forest", &result.forest_feasibility);
    print_feasibility("Coastal", &result.coastal_feasibility);
    println!("Overall feasible:            {}", if result.overall_feasible { "yes" } else { "no" });
}

fn print_feasibility(label: &str, feasibility: &FeasibilityResult) {
    println!(
        "{:<8} needed {:.0} ha of {:.0} ha ({:.2}%), {} {:.0} ha",
        label,
        feasibility.area_needed,
        feasibility.area_available,
        feasibility.utilization_percent,
        if feasibility.is_feasible { "surplus" } else { "deficit" },
        feasibility.deficit_or_surplus.abs(),
    );
}

fn print_new_planting(chart: &NewPlantingChartData) {
    match chart.target_reached_year {
        Some(year) => println!("New plantings close the gap in {}", year),
        None => println!(
            "New plantings do not close the {:.1} MtCO2e gap within the projection",
            chart.target_emission_reduction
        ),
    }
}

fn print_scenario_areas(trajectory: &TrajectoryChartData) {
    println!("\nArea Needed by Scenario");
    println!("-----------------------");
    for (name, area) in &trajectory.scenario_areas {
        println!(
            "{:<18} forest {:>14.0} ha  coastal {:>12.0} ha  {}",
            name,
            area.forest,
            area.coastal,
            if area.feasible { "feasible" } else { "infeasible" },
        );
    }
}

fn print_validation(multi_risk: &MultiRiskChartData, validation: &PathwayValidation) {
    println!(
        "\nPathway at {} risk ({:.0}%) {}: expected sink {:.1} MtCO2e, actual {:.1} MtCO2e (gap {:.1})",
        multi_risk.roadmap_risk_level,
        multi_risk.roadmap_risk_factor,
        if validation.is_valid { "valid" } else { "invalid" },
        validation.expected,
        validation.actual,
        validation.gap,
    );
}

fn print_scenarios(comparison: &ScenarioComparisonResult) {
    println!("\nScenario Comparison");
    println!("-------------------");
    for scenario in &comparison.scenarios {
        println!(
            "{:<18} {:>14.0} ha  max utilization {:>7.2}%  {}",
            scenario.scenario_name,
            scenario.result.total_area_needed,
            scenario.result.max_utilization(),
            if scenario.result.overall_feasible { "feasible" } else { "infeasible" },
        );
    }
    println!("{}", comparison.recommendation);
}
