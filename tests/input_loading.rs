//! Loading calculator input from JSON files.
use seqcalc::data::input_loader::{load_input, parse_input};
use seqcalc::CalculatorInput;

#[test]
fn bundled_baseline_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/seqCalculator/assets/indonesia_baseline.json");
    let input = load_input(path).unwrap();
    assert_eq!(input, CalculatorInput::default());
    assert!(input.validate().is_ok());
}

#[test]
fn out_of_range_values_load_but_fail_validation() {
    let input = parse_input(r#"{ "risk_factor": 150 }"#).unwrap();
    let err = input.validate().unwrap_err();
    assert!(err.to_string().contains("risk_factor"));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(parse_input("{ not json").is_err());
    assert!(parse_input(r#"{ "initial_year": "soon" }"#).is_err());
}
