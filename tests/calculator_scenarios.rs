mod common;

use pretty_assertions::assert_eq;
use rorscore::scoring::{IndexInputs, SingleDeterminant};
use rorscore::scoring::indices::hvi;
use rorscore::{
    calculate_rorschach, classify_gphr, Card, CopingStyle, HumanRepresentation, IndexOutcome,
    Response, Scalar,
};

#[test]
fn one_pure_form_whole_per_card() {
    let results = calculate_rorschach(&common::one_per_card());

    assert_eq!(results.r, 10);
    assert_eq!(results.w, 10);
    assert_eq!(results.d, 0);
    assert_eq!(results.dd, 0);
    assert_eq!(results.pure_f, 10);
    assert_eq!(results.lambda, 0.0);
    assert_eq!(results.ea, 0.0);
    assert_eq!(results.coping_style, CopingStyle::Ambitent);
    assert_eq!(results.single_determinants[&SingleDeterminant::F], 10);
    assert_eq!(results.x_plus_percent, 1.0);
    assert_eq!(results.approach[&Card::I], vec!["W".to_string()]);
}

#[test]
fn blend_counts_toward_each_determinant_but_not_singles() {
    let responses = vec![Response::blank(Some(Card::I), 1)
        .with_location("W")
        .with_determinants(&["M", "FC"])
        .with_fq("o")];
    let results = calculate_rorschach(&responses);

    assert_eq!(results.blends, 1);
    assert_eq!(
        results.blends_list,
        vec![vec!["M".to_string(), "FC".to_string()]]
    );
    assert_eq!(results.human_movement, 1);
    assert_eq!(results.fc, 1);
    assert!(results.single_determinants.values().all(|&count| count == 0));
}

#[test]
fn pure_human_with_good_form_is_good_representation() {
    let response = Response::blank(Some(Card::III), 1)
        .with_contents(&["H"])
        .with_fq("o");
    assert_eq!(classify_gphr(&response), Some(HumanRepresentation::Good));
}

#[test]
fn hypervigilance_positive_when_all_criteria_hold() {
    let inputs = IndexInputs {
        sum_t: 0,
        zf: 13,
        zd: Scalar::Number(3.5),
        s: 4,
        h_total: 7,
        ..Default::default()
    };
    let outcome = hvi(&inputs);
    assert_eq!(outcome, IndexOutcome::new(4, true));
    assert!(outcome.to_string().ends_with("Positive"));
}

#[test]
fn rich_protocol_core_values() {
    let protocol = common::rich_protocol();
    let results = calculate_rorschach(protocol.responses());

    assert_eq!(results.r, 20);
    assert_eq!((results.w, results.d, results.dd, results.s), (8, 9, 3, 3));
    assert_eq!(results.human_movement, 4);
    assert_eq!((results.fc, results.cf, results.c), (3, 2, 0));
    assert_eq!(results.wsumc, 3.5);
    assert_eq!(results.ea, 7.5);
    assert_eq!(results.coping_style, CopingStyle::Ambitent);
    assert_eq!(results.pure_f, 7);
    assert!((results.lambda - 7.0 / 13.0).abs() < 1e-9);
    assert_eq!(results.populars, 7);
    assert_eq!(results.zf, 12);
    assert_eq!(results.zest, Scalar::Number(38.0));
    assert_eq!(results.fr, 1);
    assert_eq!(results.blends, 4);
}

#[test]
fn rich_protocol_derived_ratios() {
    let protocol = common::rich_protocol();
    let results = calculate_rorschach(protocol.responses());

    assert_eq!(
        (results.fqx_plus, results.fqx_o, results.fqx_u, results.fqx_minus),
        (0, 13, 4, 3)
    );
    assert_eq!(results.xa_percent, 17.0 / 20.0);
    assert_eq!(results.x_plus_percent, 13.0 / 20.0);
    assert_eq!(results.xu_percent, 4.0 / 20.0);
    assert_eq!(results.x_minus_percent, 3.0 / 20.0);
    // 17 W and D responses, one of them minus
    assert_eq!(results.w_plus_d, 17);
    assert_eq!(results.wda_percent, 16.0 / 17.0);
    assert_eq!(results.s_minus, 2);
    // six responses on VIII-X against fourteen on I-VII
    assert_eq!(results.afr, 6.0 / 14.0);
    // 3 * Fr + 5 pairs over R
    assert_eq!(results.pairs, 5);
    assert_eq!(results.egocentricity_index, 8.0 / 20.0);
    // Bt + Ls + 2 * Na over R
    assert_eq!(results.isolate_index, 4.0 / 20.0);
    // M = 4 against WSumC = 3.5 is not pervasive
    assert_eq!(results.eb_per, Scalar::Undetermined);
}

#[test]
fn rich_protocol_movement_and_human_content() {
    let protocol = common::rich_protocol();
    let results = calculate_rorschach(protocol.responses());

    assert_eq!((results.active_movement, results.passive_movement), (5, 2));
    assert_eq!((results.ma, results.mp), (3, 1));
    assert_eq!(results.color_shading_blends, 1);
    assert_eq!((results.mqual_o, results.mqual_u, results.mqual_minus), (4, 0, 0));
    assert_eq!((results.h, results.hd, results.hd_paren), (4, 1, 1));
    assert_eq!(results.h_total, 6);
}

#[test]
fn rich_protocol_special_scores() {
    let protocol = common::rich_protocol();
    let results = calculate_rorschach(protocol.responses());

    assert_eq!(results.dv1, 1);
    assert_eq!(results.incom1, 1);
    assert_eq!(results.sum6, 2);
    assert_eq!(results.wsum6, 3);
    assert_eq!((results.cop, results.mor, results.ab), (1, 1, 1));
}

#[test]
fn rows_without_card_do_not_count() {
    let mut responses = common::one_per_card();
    responses.push(Response::blank(None, 2).with_location("D").with_determinants(&["F"]));
    let results = calculate_rorschach(&responses);
    assert_eq!(results.r, 10);
    assert_eq!(results.d, 0);
}

#[test]
fn json_uses_summary_sheet_names() {
    let results = calculate_rorschach(&common::one_per_card());
    let value = serde_json::to_value(&results).unwrap();

    assert_eq!(value["R"], 10);
    assert_eq!(value["ZEst"], "-");
    assert_eq!(value["Zd"], "-");
    assert_eq!(value["CopingStyle"], "Ambitent");
    assert_eq!(value["HVI"], "0, NO");
}
