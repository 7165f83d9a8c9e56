mod common;

use rorscore::strategy::primary_strategy;
use rorscore::{
    calculate_rorschach, key_variable_strategies, tertiary_variable_strategies, CalculationResults,
    Card, CopingStyle, IndexOutcome, Response, SummaryReport,
};

fn introversive_protocol() -> Vec<Response> {
    Card::ALL
        .into_iter()
        .enumerate()
        .map(|(i, card)| match i {
            0..=3 => Response::blank(Some(card), 1)
                .with_location("D")
                .with_dq("+")
                .with_determinants(&["Ma"])
                .with_fq("o")
                .with_contents(&["H"]),
            4 => common::plain_w(card, 1).with_determinants(&["FC"]),
            _ => common::plain_w(card, 1),
        })
        .collect()
}

#[test]
fn lambda_precedes_introversive_style() {
    let results = calculate_rorschach(&introversive_protocol());
    assert_eq!(results.coping_style, CopingStyle::Introversive);
    assert_eq!(results.lambda, 1.0);

    let key: Vec<String> = key_variable_strategies(&results)
        .into_iter()
        .map(|s| s.variable)
        .collect();
    let lambda = key.iter().position(|v| v == "Lambda > 0.99");
    let style = key.iter().position(|v| v == "EB IS Introversive");
    assert!(lambda.is_some() && style.is_some(), "key variables: {key:?}");
    assert!(lambda < style);
}

#[test]
fn low_resource_protocol_flags_coping_deficit() {
    let results = calculate_rorschach(&common::one_per_card());
    assert!(results.cdi.positive);

    let primary = primary_strategy(&results).unwrap();
    assert_eq!(primary.variable, "CDI > 3");
    assert!(primary.is_primary);
}

#[test]
fn primary_strategy_falls_back_to_tertiary() {
    let results = CalculationResults {
        cdi: IndexOutcome::new(3, false),
        ..calculate_rorschach(&common::one_per_card())
    };
    assert!(key_variable_strategies(&results).is_empty());

    let tertiary = tertiary_variable_strategies(&results);
    let primary = primary_strategy(&results).unwrap();
    assert_eq!(primary, tertiary[0]);
    assert!(!primary.is_primary);
}

#[test]
fn report_governed_by_key_variables_when_present() {
    let report = SummaryReport::new(calculate_rorschach(&introversive_protocol()));
    assert!(report.has_strategies());
    assert_eq!(report.governing_strategies(), report.key_strategies.as_slice());

    let stripped = report.without_strategies();
    assert!(!stripped.has_strategies());
}

#[test]
fn report_json_lists_strategies() {
    let report = SummaryReport::new(calculate_rorschach(&introversive_protocol()));
    let value = serde_json::to_value(&report).unwrap();

    let key = value["key_strategies"].as_array().unwrap();
    assert!(key.iter().all(|s| s["isPrimary"] == true));
    assert_eq!(value["results"]["CopingStyle"], "Introversive");
}
