//! Interpretive search strategy.
//!
//! Key variables are checked in a fixed order and every positive one is
//! listed; the first entry decides the interpretive routine. Tertiary
//! variables are the fallback when no key variable is positive.

use crate::scoring::{CalculationResults, CopingStyle};
use serde::Serialize;

const REMAINING_MARKER: &str = "(The remaining search routine";

/// One positive variable and the cluster order it prescribes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStrategy {
    pub variable: String,
    pub routine: String,
    #[serde(rename = "isPrimary")]
    pub is_primary: bool,
}

struct StrategyRule {
    variable: &'static str,
    routine: &'static str,
    applies: fn(&CalculationResults) -> bool,
}

fn d_below_adj_d(r: &CalculationResults) -> bool {
    r.d_score.unwrap_or(0) < r.adj_d.unwrap_or(0)
}

fn zd_extreme(r: &CalculationResults) -> bool {
    let zd = r.zd.unwrap_or(0.0);
    zd > 3.0 || zd < -3.0
}

const KEY_RULES: [StrategyRule; 12] = [
    StrategyRule {
        variable: "PTI > 3",
        routine: "Processing > Mediation > Ideation > Controls > Affect > Self-Perception > Interpersonal Perception",
        applies: |r| r.pti > 3,
    },
    StrategyRule {
        variable: "DEPI > 5 and CDI > 3",
        routine: "Interpersonal Perception > Self-Perception > Controls > Affect > Processing > Mediation > Ideation",
        applies: |r| r.depi.score > 5 && r.cdi.score > 3,
    },
    StrategyRule {
        variable: "DEPI > 5",
        routine: "Affect > Controls > Self-Perception > Interpersonal Perception > Processing > Mediation > Ideation",
        applies: |r| r.depi.score > 5,
    },
    StrategyRule {
        variable: "D < ADJ D",
        routine: "Controls > Situation Stress > (The remaining search routine should be that identified for the next positive key variable or the list of tertiary variables.)",
        applies: d_below_adj_d,
    },
    StrategyRule {
        variable: "CDI > 3",
        routine: "Controls > Interpersonal Perception > Self-Perception > Affect > Processing > Mediation > Ideation",
        applies: |r| r.cdi.score > 3,
    },
    StrategyRule {
        variable: "ADJ D is Minus",
        routine: "Controls > (The remaining search routine should be that identified for the next positive key variable or the list of tertiary variables.)",
        applies: |r| r.adj_d.unwrap_or(0) < 0,
    },
    StrategyRule {
        variable: "Lambda > 0.99",
        routine: "Processing > Mediation > Ideation > Controls > Affect > Self-Perception > Interpersonal Perception",
        applies: |r| r.lambda > 0.99,
    },
    StrategyRule {
        variable: "FR+RF > 0",
        routine: "Self-Perception > Interpersonal Perception > Controls (The remaining search routine should be selected from that identified for the next positive key variable or the list of tertiary variables.)",
        applies: |r| r.fr + r.rf > 0,
    },
    StrategyRule {
        variable: "EB IS Introversive",
        routine: "Ideation > Processing > Mediation > Controls > Affect > Self-Perception > Interpersonal Perception",
        applies: |r| r.coping_style == CopingStyle::Introversive,
    },
    StrategyRule {
        variable: "EB IS Extratensive",
        routine: "Affect > Self-Perception > Interpersonal Perception > Controls > Processing > Mediation > Ideation",
        applies: |r| r.coping_style == CopingStyle::Extratensive,
    },
    StrategyRule {
        variable: "p > a+1",
        routine: "Ideation > Processing > Mediation > Controls > Self-Perception > Interpersonal Perception > Affect",
        applies: |r| r.passive_movement > r.active_movement + 1,
    },
    StrategyRule {
        variable: "HVI Positive",
        routine: "Ideation > Processing > Mediation > Controls > Self-Perception > Interpersonal Perception > Affect",
        applies: |r| r.hvi.positive,
    },
];

const TERTIARY_RULES: [StrategyRule; 9] = [
    StrategyRule {
        variable: "OBS Positive",
        routine: "Processing > Mediation > Ideation > Controls > Affect > Self-Perception > Interpersonal Perception",
        applies: |r| r.obs.positive,
    },
    StrategyRule {
        variable: "DEPI = 5",
        routine: "Affect > Controls > Self-Perception > Interpersonal Perception > Processing > Mediation > Ideation",
        applies: |r| r.depi.score == 5,
    },
    StrategyRule {
        variable: "EA > 12",
        routine: "Controls > Ideation > Processing > Mediation > Affect > Self-Perception > Interpersonal Perception",
        applies: |r| r.ea > 12.0,
    },
    StrategyRule {
        variable: "M- > 0 or Mp > Ma or Sum6 Sp Sc > 5",
        routine: "Ideation > Mediation > Processing > Controls > Affect > Self-Perception > Interpersonal Perception",
        applies: |r| r.mqual_minus > 0 || r.mp > r.ma || r.sum6 > 5,
    },
    StrategyRule {
        variable: "Sum Shad > FM+m or CP+C > FC+1 or Afr < 0.46",
        routine: "Affect > Controls > Self-Perception > Interpersonal Perception > Processing > Mediation > Ideation",
        applies: |r| {
            r.sum_shading > r.animal_movement + r.inanimate_movement
                || r.cp + r.c > r.fc + 1
                || r.afr < 0.46
        },
    },
    StrategyRule {
        variable: "X-% > 20% or Zd > +3.0 or < -3.0",
        routine: "Processing > Mediation > Ideation > Controls > Affect > Self-Perception > Interpersonal Perception",
        applies: |r| r.x_minus_percent > 0.2 || zd_extreme(r),
    },
    StrategyRule {
        variable: "3r+(2)/R < .33",
        routine: "Self-Perception > Interpersonal Perception > Affect > Controls > Processing > Mediation > Ideation",
        applies: |r| r.egocentricity_index < 0.33,
    },
    StrategyRule {
        variable: "MOR > 2 or AG > 2",
        routine: "Self-Perception > Interpersonal Perception > Controls > Ideation > Processing > Mediation > Affect",
        applies: |r| r.mor > 2 || r.ag > 2,
    },
    StrategyRule {
        variable: "T = 0 or > 1",
        routine: "Self-Perception > Interpersonal Perception > Affect > Controls > Processing > Mediation > Ideation",
        applies: |r| r.sum_t == 0 || r.sum_t > 1,
    },
];

fn collect(rules: &[StrategyRule], results: &CalculationResults, is_primary: bool) -> Vec<SearchStrategy> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(results))
        .map(|rule| SearchStrategy {
            variable: rule.variable.to_string(),
            routine: rule.routine.to_string(),
            is_primary,
        })
        .collect()
}

/// Positive key variables, in priority order.
///
/// Undetermined D, Adj D and Zd read as 0 here.
pub fn key_variable_strategies(results: &CalculationResults) -> Vec<SearchStrategy> {
    collect(&KEY_RULES, results, true)
}

/// Positive tertiary variables, in priority order.
pub fn tertiary_variable_strategies(results: &CalculationResults) -> Vec<SearchStrategy> {
    collect(&TERTIARY_RULES, results, false)
}

/// The strategy that governs interpretation: the first positive key
/// variable, else the first positive tertiary variable.
pub fn primary_strategy(results: &CalculationResults) -> Option<SearchStrategy> {
    key_variable_strategies(results)
        .into_iter()
        .next()
        .or_else(|| tertiary_variable_strategies(results).into_iter().next())
}

/// Split a routine into its cluster order and the trailing note that hands
/// the rest of the order to the next variable, if there is one.
pub fn split_routine(routine: &str) -> (&str, Option<&str>) {
    match routine.find(REMAINING_MARKER) {
        Some(at) => {
            let order = routine[..at].trim_end().trim_end_matches('>').trim_end();
            (order, Some(&routine[at..]))
        }
        None => (routine, None),
    }
}

/// True for routines that defer the rest of the order to the next variable.
pub fn is_partial_routine(strategy: &SearchStrategy) -> bool {
    split_routine(&strategy.routine).1.is_some()
}
