//! Structural summary calculation.
//!
//! [`calculate_rorschach`] is a pure function of the response list: it never
//! fails, holds no state between calls, and every denominator that can be zero
//! is guarded so that an empty protocol yields zeros rather than NaN.

use super::classifier::{classify_gphr, HumanRepresentation, HUMAN_MOVEMENT};
use super::counting::{Field, ResponseSet};
use super::formulas::{
    d_table, determine_coping_style, eb_per, guarded_ratio, lambda, zest_from_zf,
};
use super::indices::{IndexInputs, SpecialIndices};
use super::results::{CalculationResults, FormQualityDetails, LocationBucket, SingleDeterminant};
use crate::constants::{wsum6_weight, z_score};
use crate::core::{Card, Response, Scalar};
use std::collections::BTreeMap;
use tracing::{debug, trace};

const W_LOCATIONS: [&str; 2] = ["W", "WS"];
const D_LOCATIONS: [&str; 2] = ["D", "DS"];
const DD_LOCATIONS: [&str; 2] = ["Dd", "DdS"];
const S_LOCATIONS: [&str; 4] = ["S", "WS", "DS", "DdS"];
const WD_LOCATIONS: [&str; 4] = ["W", "WS", "D", "DS"];
const GOOD_FORM: [&str; 3] = ["+", "o", "u"];
const COLOR: [&str; 3] = ["FC", "CF", "C"];
const SHADING_FRAGMENTS: [&str; 4] = ["C'", "T", "V", "Y"];

/// Compute the full structural summary for a protocol.
///
/// Responses without a card are ignored; R counts the rest.
pub fn calculate_rorschach(responses: &[Response]) -> CalculationResults {
    let set = ResponseSet::new(responses);
    let r = set.len();
    let dets = Field::Determinants;
    let cont = Field::Contents;
    let ss = Field::SpecialScores;

    // Organizational activity
    let zf = set.count_where(|resp| !resp.z.is_empty());
    let zsum: f64 = set
        .iter()
        .filter_map(|resp| resp.card.and_then(|card| z_score(card, &resp.z)))
        .sum();
    let zest: Scalar<f64> = zest_from_zf(zf as f64).into();
    let zd = zest.map(|estimate| zsum - estimate);

    // Location and developmental quality
    let w = set.count_locations(&W_LOCATIONS);
    let d = set.count_locations(&D_LOCATIONS);
    let dd = set.count_locations(&DD_LOCATIONS);
    let s = set.count_locations(&S_LOCATIONS);
    let dq = |code: &str| set.count_where(|resp| resp.dq == code);

    // Determinants
    let human_movement = set.count_exact_all(&["M", "Ma", "Mp", "Ma-p"], dets);
    let animal_movement = set.count_exact_all(&["FM", "FMa", "FMp", "FMa-p"], dets);
    let inanimate_movement = set.count_exact_all(&["m", "ma", "mp", "ma-p"], dets);
    let fc = set.count_exact("FC", dets);
    let cf = set.count_exact("CF", dets);
    let c = set.count_exact("C", dets);
    let cn = set.count_exact("Cn", dets);
    let wsumc = 0.5 * fc as f64 + cf as f64 + 1.5 * c as f64;

    let sum_c_prime = set.count_contains_any(&["C'"], dets);
    let sum_t = set.count_contains_any(&["T"], dets);
    let sum_v = set.count_contains_any(&["V"], dets);
    let sum_y = set.count_contains_any(&["Y"], dets);
    let sum_shading = sum_c_prime + sum_t + sum_v + sum_y;

    let fr = set.count_where(|resp| resp.fr_score);
    let rf = set.count_where(|resp| resp.rf_score);
    let fd = set.count_exact("FD", dets);
    let pure_f = set.count_where(Response::is_pure_form);

    let blends_list: Vec<Vec<String>> = set
        .iter()
        .filter(|resp| resp.is_blend())
        .map(|resp| resp.determinants.clone())
        .collect();
    let color_shading_blends = set.count_where(|resp| {
        resp.is_blend()
            && resp.has_any_determinant(&COLOR)
            && resp
                .determinants
                .iter()
                .any(|det| SHADING_FRAGMENTS.iter().any(|frag| det.contains(frag)))
    });

    // EA / es / D
    let ea = human_movement as f64 + wsumc;
    let fm_plus_m = animal_movement + inanimate_movement;
    let es = fm_plus_m + sum_shading;
    let adj_es = es
        .saturating_sub(inanimate_movement.saturating_sub(1))
        .saturating_sub(sum_y.saturating_sub(1));
    let d_score = d_table(ea - es as f64);
    let adj_d = d_table(ea - adj_es as f64);
    let eb_per = eb_per(human_movement as f64, wsumc, ea);
    let lambda = lambda(pure_f, r);
    let coping_style = determine_coping_style(human_movement as f64, wsumc, ea, lambda);

    // Form quality
    let fq = |code: &str| set.count_where(|resp| resp.fq == code);
    let (fqx_plus, fqx_o, fqx_u, fqx_minus, fqx_none) = (fq("+"), fq("o"), fq("u"), fq("-"), fq("none"));
    let per_r = |n: usize| guarded_ratio(n as f64, r as f64);
    let xa_percent = per_r(fqx_plus + fqx_o + fqx_u);
    let x_plus_percent = per_r(fqx_plus + fqx_o);
    let xu_percent = per_r(fqx_u);
    let x_minus_percent = per_r(fqx_minus);

    let w_plus_d_locations = set.count_locations(&WD_LOCATIONS);
    let w_plus_d_good = set.count_where(|resp| {
        WD_LOCATIONS.contains(&resp.location.as_str()) && GOOD_FORM.contains(&resp.fq.as_str())
    });
    let wda_percent = guarded_ratio(w_plus_d_good as f64, w_plus_d_locations as f64);
    let s_minus = set
        .count_where(|resp| S_LOCATIONS.contains(&resp.location.as_str()) && resp.fq == "-");
    let mqual = |code: &str| {
        set.count_where(|resp| resp.fq == code && resp.has_any_determinant(&HUMAN_MOVEMENT))
    };

    // Affect and populars
    let populars = set.count_where(|resp| resp.popular);
    let last_three = set.count_on_cards(|card| card.is_last_three());
    let afr = guarded_ratio(last_three as f64, (r - last_three) as f64);

    // Human representation, always recomputed rather than read from the cache
    let gphr: Vec<Option<HumanRepresentation>> = set.iter().map(classify_gphr).collect();
    let ghr = gphr.iter().filter(|hr| **hr == Some(HumanRepresentation::Good)).count();
    let phr = gphr.iter().filter(|hr| **hr == Some(HumanRepresentation::Poor)).count();

    // Contents
    let content = |token: &str| set.count_exact(token, cont);
    let (h, h_paren, hd, hd_paren) = (content("H"), content("(H)"), content("Hd"), content("(Hd)"));
    let h_total = h + h_paren + hd + hd_paren;
    let (art, ay, bt, cl, food, ge, ls, na) = (
        content("Art"),
        content("Ay"),
        content("Bt"),
        content("Cl"),
        content("Fd"),
        content("Ge"),
        content("Ls"),
        content("Na"),
    );

    // Special scores
    let special = |token: &str| set.count_exact(token, ss);
    let (dv1, dv2, incom1, incom2) = (special("DV1"), special("DV2"), special("INCOM1"), special("INCOM2"));
    let (dr1, dr2, fabcom1, fabcom2) = (special("DR1"), special("DR2"), special("FABCOM1"), special("FABCOM2"));
    let (alog, contam) = (special("ALOG"), special("CONTAM"));
    let sum6 = dv1 + dv2 + incom1 + incom2 + dr1 + dr2 + fabcom1 + fabcom2 + alog + contam;
    let wsum6: u32 = set
        .iter()
        .flat_map(|resp| resp.special_scores.iter())
        .map(|score| wsum6_weight(score))
        .sum();
    let lv2 = dv2 + incom2 + dr2 + fabcom2;
    let (ab, ag, cop, mor) = (special("AB"), special("AG"), special("COP"), special("MOR"));

    // Movement direction
    let ma = set.count_exact_all(&["Ma", "Ma-p"], dets);
    let mp = set.count_exact_all(&["Mp", "Ma-p"], dets);
    let active_movement = set.count_contains_any(&["Ma", "FMa", "ma"], dets);
    let passive_movement = set.count_contains_any(&["Mp", "FMp", "mp"], dets);

    let pairs = set.count_where(|resp| resp.pair);
    let egocentricity_index = per_r((fr + rf) * 3 + pairs);
    let isolate_index = per_r(bt + 2 * cl + ge + ls + 2 * na);

    let indices = SpecialIndices::evaluate(&IndexInputs {
        r,
        zf,
        zd,
        dd,
        s,
        populars,
        fqx_plus,
        xa_percent,
        wda_percent,
        x_plus_percent,
        x_minus_percent,
        mqual_minus: mqual("-"),
        ea,
        es,
        adj_d,
        wsumc,
        fc,
        cf,
        c,
        fm_plus_m,
        sum_c_prime,
        sum_t,
        sum_v,
        sum_shading,
        fd,
        reflections: fr + rf,
        blends: blends_list.len(),
        color_shading_blends,
        active: active_movement,
        passive: passive_movement,
        afr,
        egocentricity: egocentricity_index,
        isolate: isolate_index,
        h,
        h_total,
        art,
        ay,
        food,
        ab,
        ag,
        cop,
        mor,
        level2: lv2,
        fabcom2,
        wsum6,
    });
    trace!(?indices, "special indices evaluated");

    let results = CalculationResults {
        r,
        w,
        d,
        dd,
        s,
        w_plus_d: w + d,
        dq_plus: dq("+"),
        dq_o: dq("o"),
        dq_v_plus: dq("v/+"),
        dq_v: dq("v"),
        zf,
        zsum,
        zest,
        zd,
        human_movement,
        animal_movement,
        inanimate_movement,
        fc,
        cf,
        c,
        cn,
        wsumc,
        sum_c_prime,
        sum_t,
        sum_v,
        sum_y,
        sum_shading,
        fr,
        rf,
        fd,
        pure_f,
        blends: blends_list.len(),
        pairs,
        fqx_plus,
        fqx_o,
        fqx_u,
        fqx_minus,
        fqx_none,
        mqual_plus: mqual("+"),
        mqual_o: mqual("o"),
        mqual_u: mqual("u"),
        mqual_minus: mqual("-"),
        mqual_none: mqual("none"),
        lambda,
        ea,
        es,
        d_score,
        adj_es,
        adj_d,
        eb_per,
        eb: format!("{} : {}", fm_plus_m, sum_shading),
        coping_style,
        xa_percent,
        wda_percent,
        x_plus_percent,
        xu_percent,
        x_minus_percent,
        s_minus,
        afr,
        populars,
        ghr,
        phr,
        h,
        h_paren,
        hd,
        hd_paren,
        hx: content("Hx"),
        a: content("A"),
        a_paren: content("(A)"),
        ad: content("Ad"),
        ad_paren: content("(Ad)"),
        an: content("An"),
        art,
        ay,
        bl: content("Bl"),
        bt,
        cg: content("Cg"),
        cl,
        ex: content("Ex"),
        food,
        fi: content("Fi"),
        ge,
        hh: content("Hh"),
        ls,
        na,
        sc: content("Sc"),
        sx: content("Sx"),
        xy: content("Xy"),
        id: content("Id"),
        dv1,
        dv2,
        incom1,
        incom2,
        dr1,
        dr2,
        fabcom1,
        fabcom2,
        alog,
        contam,
        sum6,
        wsum6,
        lv2,
        ab,
        ag,
        cop,
        cp: special("CP"),
        mor,
        per: special("PER"),
        psv: special("PSV"),
        pti: indices.pti,
        depi: indices.depi,
        cdi: indices.cdi,
        scon: indices.scon,
        hvi: indices.hvi,
        obs: indices.obs,
        ma,
        mp,
        active_movement,
        passive_movement,
        color_shading_blends,
        egocentricity_index,
        isolate_index,
        h_total,
        blends_list,
        approach: approach_by_card(&set),
        single_determinants: single_determinant_tally(&set),
        form_quality_details: form_quality_by_location(&set),
    };

    debug!(
        r = results.r,
        zf = results.zf,
        lambda = results.lambda,
        ea = results.ea,
        es = results.es,
        coping_style = %results.coping_style,
        "structural summary calculated"
    );

    results
}

/// Locations per card in response order; every card is present.
fn approach_by_card(set: &ResponseSet<'_>) -> BTreeMap<Card, Vec<String>> {
    let mut approach: BTreeMap<Card, Vec<String>> =
        Card::ALL.into_iter().map(|card| (card, Vec::new())).collect();
    for resp in set.iter() {
        if let Some(sequence) = resp.card.and_then(|card| approach.get_mut(&card)) {
            sequence.push(resp.location.clone());
        }
    }
    approach
}

/// Responses with exactly one determinant, by determinant class.
fn single_determinant_tally(set: &ResponseSet<'_>) -> BTreeMap<SingleDeterminant, usize> {
    let mut tally: BTreeMap<SingleDeterminant, usize> =
        SingleDeterminant::ALL.into_iter().map(|class| (class, 0)).collect();
    let singles = set
        .iter()
        .filter_map(|resp| match resp.determinants.as_slice() {
            [only] => SingleDeterminant::from_token(only),
            _ => None,
        });
    for class in singles {
        *tally.entry(class).or_default() += 1;
    }
    tally
}

fn form_quality_by_location(set: &ResponseSet<'_>) -> FormQualityDetails {
    let mut details = FormQualityDetails::default();
    for resp in set.iter() {
        let Some(bucket) = LocationBucket::classify(&resp.location) else {
            continue;
        };
        if let Some(tally) = details.tally_mut(&resp.fq) {
            *tally.entry(bucket).or_default() += 1;
        }
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_protocol_yields_zeros() {
        let results = calculate_rorschach(&[]);
        assert_eq!(results.r, 0);
        assert_eq!(results.lambda, 0.0);
        assert_eq!(results.ea, 0.0);
        assert_eq!(results.afr, 0.0);
        assert_eq!(results.egocentricity_index, 0.0);
        assert_eq!(results.isolate_index, 0.0);
        assert_eq!(results.wda_percent, 0.0);
        assert_eq!(results.xa_percent, 0.0);
        assert_eq!(results.x_plus_percent, 0.0);
        assert_eq!(results.xu_percent, 0.0);
        assert_eq!(results.x_minus_percent, 0.0);
        assert_eq!(results.zest, Scalar::Undetermined);
        assert_eq!(results.zd, Scalar::Undetermined);
        assert_eq!(results.d_score, Scalar::Number(0));
        assert_eq!(results.approach.len(), 10);
        assert!(results.approach.values().all(Vec::is_empty));
    }

    #[test]
    fn unassigned_rows_do_not_count() {
        let responses = vec![
            Response::blank(Some(Card::I), 1).with_location("W").with_fq("o"),
            Response::blank(None, 1).with_location("W").with_fq("o"),
        ];
        let results = calculate_rorschach(&responses);
        assert_eq!(results.r, 1);
        assert_eq!(results.w, 1);
        assert_eq!(results.fqx_o, 1);
    }

    #[test]
    fn z_scores_sum_table_values() {
        let responses = vec![
            Response::blank(Some(Card::I), 1).with_z("ZW"),
            Response::blank(Some(Card::VI), 1).with_z("ZS"),
            Response::blank(Some(Card::X), 1).with_z("Zq"),
        ];
        let results = calculate_rorschach(&responses);
        // the unknown Z type still counts toward Zf
        assert_eq!(results.zf, 3);
        assert_eq!(results.zsum, 7.5);
        assert_eq!(results.zest, Scalar::Number(6.0));
        assert_eq!(results.zd, Scalar::Number(1.5));
    }

    #[test]
    fn adjusted_es_discounts_m_and_y() {
        let responses = vec![
            Response::blank(Some(Card::I), 1).with_determinants(&["ma", "FY"]),
            Response::blank(Some(Card::II), 1).with_determinants(&["mp", "YF"]),
            Response::blank(Some(Card::III), 1).with_determinants(&["ma-p", "Y"]),
        ];
        let results = calculate_rorschach(&responses);
        assert_eq!(results.inanimate_movement, 3);
        assert_eq!(results.sum_y, 3);
        assert_eq!(results.es, 6);
        assert_eq!(results.adj_es, 2);
        assert_eq!(results.d_score, Scalar::Number(-2));
        assert_eq!(results.adj_d, Scalar::Number(0));
    }

    #[test]
    fn fq_breakdown_uses_location_precedence() {
        let responses = vec![
            Response::blank(Some(Card::I), 1).with_location("WS").with_fq("-"),
            Response::blank(Some(Card::II), 1).with_location("DdS").with_fq("-"),
            Response::blank(Some(Card::III), 1).with_location("DS").with_fq("u"),
            Response::blank(Some(Card::IV), 1).with_location("").with_fq("o"),
        ];
        let results = calculate_rorschach(&responses);
        let details = &results.form_quality_details;
        assert_eq!(details.minus[&LocationBucket::W], 1);
        assert_eq!(details.minus[&LocationBucket::Dd], 1);
        assert_eq!(details.unusual[&LocationBucket::D], 1);
        assert!(details.ordinary.values().all(|&n| n == 0));
        assert_eq!(results.s_minus, 2);
        assert_eq!(results.s, 3);
    }

    #[test]
    fn pervasive_introversive_ratio_is_reported() {
        let mut responses: Vec<Response> = Card::ALL
            .into_iter()
            .take(6)
            .map(|card| Response::blank(Some(card), 1).with_determinants(&["Ma"]))
            .collect();
        responses.push(Response::blank(Some(Card::VII), 1).with_determinants(&["CF"]));
        let results = calculate_rorschach(&responses);
        assert_eq!(results.ea, 7.0);
        assert_eq!(results.eb_per, Scalar::Number(6.0));
    }

    #[test]
    fn wda_only_counts_whole_and_common_detail() {
        let responses = vec![
            Response::blank(Some(Card::I), 1).with_location("W").with_fq("o"),
            Response::blank(Some(Card::II), 1).with_location("DS").with_fq("-"),
            Response::blank(Some(Card::III), 1).with_location("Dd").with_fq("-"),
            Response::blank(Some(Card::IV), 1).with_location("DdS").with_fq("-"),
        ];
        let results = calculate_rorschach(&responses);
        assert_eq!(results.wda_percent, 0.5);
        assert_eq!(results.xa_percent, 0.25);
        assert_eq!(results.x_minus_percent, 0.75);
    }

    #[test]
    fn egocentricity_triples_reflections_and_isolate_doubles_cl_na() {
        let responses = vec![
            Response::blank(Some(Card::I), 1)
                .with_reflections(true, false)
                .with_pair(true)
                .with_contents(&["Cl"]),
            Response::blank(Some(Card::II), 1)
                .with_reflections(false, true)
                .with_contents(&["Na", "Bt"]),
            Response::blank(Some(Card::III), 1).with_contents(&["Ge", "Ls"]),
            Response::blank(Some(Card::IV), 1).with_pair(true),
        ];
        let results = calculate_rorschach(&responses);
        // (3 * 2 + 2) / 4
        assert_eq!(results.egocentricity_index, 2.0);
        // (Bt 1 + 2 Cl + Ge 1 + Ls 1 + 2 Na) / 4
        assert_eq!(results.isolate_index, 1.75);
    }

    #[test]
    fn wsum6_weights_every_occurrence() {
        let responses = vec![
            Response::blank(Some(Card::I), 1).with_special_scores(&["DV1", "DR2"]),
            Response::blank(Some(Card::II), 1).with_special_scores(&["FABCOM2", "COP"]),
        ];
        let results = calculate_rorschach(&responses);
        assert_eq!(results.sum6, 3);
        assert_eq!(results.wsum6, 1 + 6 + 7);
        assert_eq!(results.lv2, 2);
        assert_eq!(results.cop, 1);
    }
}
