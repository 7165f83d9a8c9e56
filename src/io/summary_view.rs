//! Presentation rows for the upper and lower sections of the structural
//! summary.
//!
//! Both the markdown and the terminal writer render these; keeping the
//! labels and number formatting in one place keeps the two outputs in step.

use crate::core::{Card, Scalar};
use crate::scoring::{
    CalculationResults, IndexOutcome, LocationBucket, LocationTally, SingleDeterminant,
};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    /// A positive special index.
    Flagged,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
    pub emphasis: Emphasis,
}

impl SummaryRow {
    fn new(label: &'static str, value: impl Display) -> Self {
        Self {
            label,
            value: value.to_string(),
            emphasis: Emphasis::None,
        }
    }

    fn index(label: &'static str, outcome: IndexOutcome) -> Self {
        Self {
            label,
            value: outcome.to_string(),
            emphasis: if outcome.positive {
                Emphasis::Flagged
            } else {
                Emphasis::Clear
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    pub rows: Vec<SummaryRow>,
}

fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn scalar_fixed(value: Scalar<f64>, decimals: usize) -> String {
    value.map(|v| fixed(v, decimals)).to_string()
}

fn section(title: &'static str, rows: Vec<SummaryRow>) -> SummarySection {
    SummarySection { title, rows }
}

const FQ_LABELS: [&str; 5] = ["FQx+", "FQxo", "FQxu", "FQx-", "FQx none"];

fn location_breakdown(total: usize, tally: &LocationTally) -> String {
    let parts: Vec<String> = LocationBucket::ALL
        .iter()
        .map(|bucket| format!("{} {}", bucket.label(), tally.get(bucket).copied().unwrap_or(0)))
        .collect();
    format!("{total} ({})", parts.join(", "))
}

pub fn location_features_section(r: &CalculationResults) -> SummarySection {
    section(
        "Location Features",
        vec![
            SummaryRow::new("Zf", r.zf),
            SummaryRow::new("ZSum", fixed(r.zsum, 1)),
            SummaryRow::new("ZEst", scalar_fixed(r.zest, 1)),
            SummaryRow::new("W", r.w),
            SummaryRow::new("D", r.d),
            SummaryRow::new("W+D", r.w_plus_d),
            SummaryRow::new("Dd", r.dd),
            SummaryRow::new("S", r.s),
        ],
    )
}

pub fn developmental_quality_section(r: &CalculationResults) -> SummarySection {
    section(
        "Developmental Quality",
        vec![
            SummaryRow::new("+", r.dq_plus),
            SummaryRow::new("o", r.dq_o),
            SummaryRow::new("v/+", r.dq_v_plus),
            SummaryRow::new("v", r.dq_v),
        ],
    )
}

/// FQx totals split by W, D, Dd and S, followed by the M quality counts.
pub fn form_quality_section(r: &CalculationResults) -> SummarySection {
    let totals = [r.fqx_plus, r.fqx_o, r.fqx_u, r.fqx_minus, r.fqx_none];
    let mut rows: Vec<SummaryRow> = r
        .form_quality_details
        .rows()
        .into_iter()
        .zip(FQ_LABELS)
        .zip(totals)
        .map(|(((_, tally), label), total)| {
            SummaryRow::new(label, location_breakdown(total, tally))
        })
        .collect();
    rows.extend([
        SummaryRow::new("MQual+", r.mqual_plus),
        SummaryRow::new("MQualo", r.mqual_o),
        SummaryRow::new("MQualu", r.mqual_u),
        SummaryRow::new("MQual-", r.mqual_minus),
        SummaryRow::new("MQual none", r.mqual_none),
    ]);
    section("Form Quality", rows)
}

pub fn determinants_section(r: &CalculationResults) -> SummarySection {
    let blends: Vec<String> = r.blends_list.iter().map(|blend| blend.join(".")).collect();
    let blends = if blends.is_empty() {
        "-".to_string()
    } else {
        blends.join(", ")
    };
    let mut rows = vec![SummaryRow::new("Blends", blends)];
    rows.extend(SingleDeterminant::ALL.iter().map(|class| {
        SummaryRow::new(
            class.label(),
            r.single_determinants.get(class).copied().unwrap_or(0),
        )
    }));
    section("Determinants", rows)
}

pub fn contents_section(r: &CalculationResults) -> SummarySection {
    let counts = [
        ("H", r.h),
        ("(H)", r.h_paren),
        ("Hd", r.hd),
        ("(Hd)", r.hd_paren),
        ("Hx", r.hx),
        ("A", r.a),
        ("(A)", r.a_paren),
        ("Ad", r.ad),
        ("(Ad)", r.ad_paren),
        ("An", r.an),
        ("Art", r.art),
        ("Ay", r.ay),
        ("Bl", r.bl),
        ("Bt", r.bt),
        ("Cg", r.cg),
        ("Cl", r.cl),
        ("Ex", r.ex),
        ("Fd", r.food),
        ("Fi", r.fi),
        ("Ge", r.ge),
        ("Hh", r.hh),
        ("Ls", r.ls),
        ("Na", r.na),
        ("Sc", r.sc),
        ("Sx", r.sx),
        ("Xy", r.xy),
        ("Id", r.id),
    ];
    section(
        "Contents",
        counts
            .into_iter()
            .map(|(label, count)| SummaryRow::new(label, count))
            .collect(),
    )
}

/// Location sequence per card, joined with dots.
pub fn approach_section(r: &CalculationResults) -> SummarySection {
    let rows = Card::ALL
        .into_iter()
        .map(|card| {
            let sequence = r
                .approach
                .get(&card)
                .filter(|locations| !locations.is_empty())
                .map_or_else(|| "-".to_string(), |locations| locations.join("."));
            SummaryRow::new(card.as_str(), sequence)
        })
        .collect();
    section("Approach", rows)
}

pub fn special_scores_section(r: &CalculationResults) -> SummarySection {
    section(
        "Special Scores",
        vec![
            SummaryRow::new("DV", format!("{} : {}", r.dv1, r.dv2)),
            SummaryRow::new("INC", format!("{} : {}", r.incom1, r.incom2)),
            SummaryRow::new("DR", format!("{} : {}", r.dr1, r.dr2)),
            SummaryRow::new("FAB", format!("{} : {}", r.fabcom1, r.fabcom2)),
            SummaryRow::new("ALOG", r.alog),
            SummaryRow::new("CON", r.contam),
            SummaryRow::new("Raw Sum6", r.sum6),
            SummaryRow::new("Wgtd Sum6", r.wsum6),
            SummaryRow::new("AB", r.ab),
            SummaryRow::new("AG", r.ag),
            SummaryRow::new("COP", r.cop),
            SummaryRow::new("CP", r.cp),
            SummaryRow::new("MOR", r.mor),
            SummaryRow::new("PER", r.per),
            SummaryRow::new("PSV", r.psv),
        ],
    )
}

pub fn core_section(r: &CalculationResults) -> SummarySection {
    section(
        "Core",
        vec![
            SummaryRow::new("R", r.r),
            SummaryRow::new("Lambda", fixed(r.lambda, 2)),
            SummaryRow::new("EB", format!("{} : {}", r.human_movement, fixed(r.wsumc, 1))),
            SummaryRow::new("eb", &r.eb),
            SummaryRow::new("EA", fixed(r.ea, 1)),
            SummaryRow::new("es", r.es),
            SummaryRow::new("D", r.d_score),
            SummaryRow::new("Adj es", r.adj_es),
            SummaryRow::new("Adj D", r.adj_d),
            SummaryRow::new("EB Per", r.eb_per),
            SummaryRow::new("Style", r.coping_style),
        ],
    )
}

pub fn affect_section(r: &CalculationResults) -> SummarySection {
    section(
        "Affect",
        vec![
            SummaryRow::new("FC", r.fc),
            SummaryRow::new("CF", r.cf),
            SummaryRow::new("C", r.c),
            SummaryRow::new("Cn", r.cn),
            SummaryRow::new("WSumC", fixed(r.wsumc, 1)),
            SummaryRow::new("SumC'", r.sum_c_prime),
            SummaryRow::new("SumT", r.sum_t),
            SummaryRow::new("SumV", r.sum_v),
            SummaryRow::new("SumY", r.sum_y),
            SummaryRow::new("Afr", fixed(r.afr, 2)),
            SummaryRow::new("S", r.s),
            SummaryRow::new("Blends", r.blends),
            SummaryRow::new("CP", r.cp),
        ],
    )
}

pub fn interpersonal_section(r: &CalculationResults) -> SummarySection {
    section(
        "Interpersonal",
        vec![
            SummaryRow::new("COP", r.cop),
            SummaryRow::new("AG", r.ag),
            SummaryRow::new("GHR", r.ghr),
            SummaryRow::new("PHR", r.phr),
            SummaryRow::new("a:p", format!("{}:{}", r.active_movement, r.passive_movement)),
            SummaryRow::new("Food", r.food),
            SummaryRow::new("SumT", r.sum_t),
            SummaryRow::new("PER", r.per),
            SummaryRow::new("Isolate/R", fixed(r.isolate_index, 2)),
            SummaryRow::new("Human Cont", r.h_total),
            SummaryRow::new("Pure H", r.h),
            SummaryRow::new(
                "H:(H)+Hd+(Hd)",
                format!("{}:{}", r.h, r.h_paren + r.hd + r.hd_paren),
            ),
        ],
    )
}

pub fn self_perception_section(r: &CalculationResults) -> SummarySection {
    section(
        "Self-Perception",
        vec![
            SummaryRow::new("3r+(2)/R", fixed(r.egocentricity_index, 2)),
            SummaryRow::new("Fr+rF", r.fr + r.rf),
            SummaryRow::new("FD", r.fd),
            SummaryRow::new("An+Xy", r.an + r.xy),
            SummaryRow::new("MOR", r.mor),
        ],
    )
}

pub fn ideation_section(r: &CalculationResults) -> SummarySection {
    section(
        "Ideation",
        vec![
            SummaryRow::new("a:p", format!("{}:{}", r.active_movement, r.passive_movement)),
            SummaryRow::new("Ma:Mp", format!("{}:{}", r.ma, r.mp)),
            SummaryRow::new("2AB+Art+Ay", 2 * r.ab + r.art + r.ay),
            SummaryRow::new("M-", r.mqual_minus),
            SummaryRow::new("M none", r.mqual_none),
            SummaryRow::new("Sum6", r.sum6),
            SummaryRow::new("Lv2", r.lv2),
            SummaryRow::new("WSum6", r.wsum6),
            SummaryRow::new("MOR", r.mor),
        ],
    )
}

pub fn processing_section(r: &CalculationResults) -> SummarySection {
    section(
        "Processing",
        vec![
            SummaryRow::new("Zf", r.zf),
            SummaryRow::new("W:D:Dd", format!("{}:{}:{}", r.w, r.d, r.dd)),
            SummaryRow::new("W:M", format!("{}:{}", r.w, r.human_movement)),
            SummaryRow::new("Zd", scalar_fixed(r.zd, 1)),
            SummaryRow::new("PSV", r.psv),
            SummaryRow::new("DQ+", r.dq_plus),
            SummaryRow::new("DQv", r.dq_v),
        ],
    )
}

pub fn mediation_section(r: &CalculationResults) -> SummarySection {
    section(
        "Mediation",
        vec![
            SummaryRow::new("XA%", percent(r.xa_percent)),
            SummaryRow::new("WDA%", percent(r.wda_percent)),
            SummaryRow::new("X+%", percent(r.x_plus_percent)),
            SummaryRow::new("Xu%", percent(r.xu_percent)),
            SummaryRow::new("X-%", percent(r.x_minus_percent)),
            SummaryRow::new("S-", r.s_minus),
            SummaryRow::new("P", r.populars),
        ],
    )
}

pub fn special_indices_section(r: &CalculationResults) -> SummarySection {
    section(
        "Special Indices",
        vec![
            SummaryRow::new("PTI", r.pti),
            SummaryRow::index("DEPI", r.depi),
            SummaryRow::index("CDI", r.cdi),
            SummaryRow::index("S-CON", r.scon),
            SummaryRow::index("HVI", r.hvi),
            SummaryRow::index("OBS", r.obs),
        ],
    )
}

/// Upper-section tallies in summary sheet order.
pub fn upper_sections(r: &CalculationResults) -> Vec<SummarySection> {
    vec![
        location_features_section(r),
        developmental_quality_section(r),
        form_quality_section(r),
        determinants_section(r),
        contents_section(r),
        approach_section(r),
        special_scores_section(r),
    ]
}

/// Lower-section clusters in summary sheet order.
pub fn lower_sections(r: &CalculationResults) -> Vec<SummarySection> {
    vec![
        core_section(r),
        affect_section(r),
        interpersonal_section(r),
        self_perception_section(r),
        ideation_section(r),
        processing_section(r),
        mediation_section(r),
        special_indices_section(r),
    ]
}

/// The whole summary: upper section first, then the lower section.
pub fn summary_sections(r: &CalculationResults) -> Vec<SummarySection> {
    let mut sections = upper_sections(r);
    sections.extend(lower_sections(r));
    sections
}
