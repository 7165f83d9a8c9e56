//! Good / Poor Human Representation classification of single responses.
//!
//! A response is eligible when it has human content, human movement, or
//! animal movement scored together with COP or AG. Eligible responses are
//! run through an ordered rule list; the first rule that applies decides and
//! responses matching no rule are good. The rules overlap, so the order is
//! part of the scoring system and must not be rearranged.

use crate::core::{Card, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HUMAN_CONTENTS: [&str; 5] = ["H", "(H)", "Hd", "(Hd)", "Hx"];
pub const HUMAN_MOVEMENT: [&str; 4] = ["M", "Ma", "Mp", "Ma-p"];
pub const ANIMAL_MOVEMENT: [&str; 3] = ["FMa", "FMp", "FMa-p"];

const GOOD_FORM: [&str; 3] = ["+", "o", "u"];
const BAD_COGNITIVE: [&str; 8] = [
    "DR1", "DR2", "INCOM1", "INCOM2", "FABCOM1", "FABCOM2", "ALOG", "CONTAM",
];
const LEVEL_TWO: [&str; 6] = ["ALOG", "CONTAM", "DV2", "INCOM2", "DR2", "FABCOM2"];
const POPULAR_HUMAN_CARDS: [Card; 4] = [Card::III, Card::IV, Card::VII, Card::IX];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HumanRepresentation {
    #[serde(rename = "GHR")]
    Good,
    #[serde(rename = "PHR")]
    Poor,
}

impl HumanRepresentation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "GHR",
            Self::Poor => "PHR",
        }
    }
}

impl fmt::Display for HumanRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Rule {
    applies: fn(&Response) -> bool,
    outcome: HumanRepresentation,
}

const RULES: [Rule; 6] = [
    Rule {
        applies: pure_h_good_form_clean,
        outcome: HumanRepresentation::Good,
    },
    Rule {
        applies: bad_form_or_level_two,
        outcome: HumanRepresentation::Poor,
    },
    Rule {
        applies: cooperative_without_aggression,
        outcome: HumanRepresentation::Good,
    },
    Rule {
        applies: fabcom_morbid_or_anatomy,
        outcome: HumanRepresentation::Poor,
    },
    Rule {
        applies: popular_on_human_card,
        outcome: HumanRepresentation::Good,
    },
    Rule {
        applies: aggression_minor_slips_or_detail,
        outcome: HumanRepresentation::Poor,
    },
];

fn pure_h_good_form_clean(r: &Response) -> bool {
    r.has_any_content(&["H"])
        && GOOD_FORM.contains(&r.fq.as_str())
        && !r.has_any_special_score(&BAD_COGNITIVE)
        && !r.has_any_special_score(&["AG", "MOR"])
}

fn bad_form_or_level_two(r: &Response) -> bool {
    r.fq == "-" || r.fq == "none" || r.has_any_special_score(&LEVEL_TWO)
}

fn cooperative_without_aggression(r: &Response) -> bool {
    r.has_any_special_score(&["COP"]) && !r.has_any_special_score(&["AG"])
}

fn fabcom_morbid_or_anatomy(r: &Response) -> bool {
    r.has_any_special_score(&["FABCOM1", "MOR"]) || r.has_any_content(&["An"])
}

fn popular_on_human_card(r: &Response) -> bool {
    r.popular && r.card.is_some_and(|card| POPULAR_HUMAN_CARDS.contains(&card))
}

fn aggression_minor_slips_or_detail(r: &Response) -> bool {
    r.has_any_special_score(&["AG", "INCOM1", "DR1"]) || r.has_any_content(&["Hd"])
}

/// Whether the response takes part in GHR/PHR scoring at all.
pub fn is_eligible(r: &Response) -> bool {
    r.has_any_content(&HUMAN_CONTENTS)
        || r.has_any_determinant(&HUMAN_MOVEMENT)
        || (r.has_any_determinant(&ANIMAL_MOVEMENT) && r.has_any_special_score(&["COP", "AG"]))
}

/// Classify a response; `None` when it is not eligible.
pub fn classify_gphr(r: &Response) -> Option<HumanRepresentation> {
    if !is_eligible(r) {
        return None;
    }

    let outcome = RULES
        .iter()
        .find(|rule| (rule.applies)(r))
        .map_or(HumanRepresentation::Good, |rule| rule.outcome);
    Some(outcome)
}

/// `"GHR"`, `"PHR"` or `""`, the label the editor caches on a response.
pub fn gphr_label(r: &Response) -> &'static str {
    classify_gphr(r).map_or("", |hr| hr.as_str())
}
