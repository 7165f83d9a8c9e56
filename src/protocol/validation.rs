//! Input checks run before a protocol is scored.
//!
//! Blocking problems are errors; everything else is collected as warnings in
//! the [`ProtocolReport`] and scoring goes ahead.

use super::Protocol;
use crate::constants::{
    CONTENTS, DETERMINANTS, DEVELOPMENTAL_QUALITIES, FORM_QUALITIES, LOCATIONS, SPECIAL_SCORES,
    Z_TYPES,
};
use crate::core::{Error, Response, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Thresholds for protocol validation, the `[validation]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Below this many responses the protocol is flagged as possibly invalid.
    #[serde(default = "default_min_recommended_responses")]
    pub min_recommended_responses: usize,

    /// Reject protocols where some card has no response.
    #[serde(default = "default_require_all_cards")]
    pub require_all_cards: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_recommended_responses: default_min_recommended_responses(),
            require_all_cards: default_require_all_cards(),
        }
    }
}

fn default_min_recommended_responses() -> usize {
    14
}

fn default_require_all_cards() -> bool {
    true
}

/// Outcome of a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProtocolReport {
    /// Responses assigned to a card.
    pub valid_responses: usize,
    /// Rows without a card, skipped by the calculator.
    pub unassigned_rows: usize,
    pub warnings: Vec<String>,
}

impl ProtocolReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub fn validate_protocol(protocol: &Protocol, config: &ValidationConfig) -> Result<ProtocolReport> {
    let valid_responses = protocol.valid_responses().count();
    if valid_responses == 0 {
        return Err(Error::NoResponses);
    }

    let missing = protocol.missing_cards();
    if config.require_all_cards && !missing.is_empty() {
        return Err(Error::MissingCards(missing));
    }

    let mut warnings = Vec::new();
    if valid_responses < config.min_recommended_responses {
        warnings.push(format!(
            "Only {} responses recorded; fewer than {} may not yield a valid protocol.",
            valid_responses, config.min_recommended_responses
        ));
    }
    if !missing.is_empty() {
        let cards: Vec<&str> = missing.iter().map(|card| card.as_str()).collect();
        warnings.push(format!("No responses for cards: {}.", cards.join(", ")));
    }
    for response in protocol.valid_responses() {
        warnings.extend(unknown_codes(response));
    }

    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok(ProtocolReport {
        valid_responses,
        unassigned_rows: protocol.len() - valid_responses,
        warnings,
    })
}

/// Codes outside the scoring vocabulary. They count as zero when scored.
fn unknown_codes(response: &Response) -> Vec<String> {
    let label = match response.card {
        Some(card) => format!("Card {} response {}", card, response.response_index),
        None => format!("Response {}", response.response_index),
    };
    let label = label.as_str();

    let singles = [
        ("location", response.location.as_str(), &LOCATIONS[..]),
        ("DQ", response.dq.as_str(), &DEVELOPMENTAL_QUALITIES[..]),
        ("FQ", response.fq.as_str(), &FORM_QUALITIES[..]),
        ("Z", response.z.as_str(), &Z_TYPES[..]),
    ];
    let lists = [
        ("determinant", &response.determinants, &DETERMINANTS[..]),
        ("content", &response.contents, &CONTENTS[..]),
        ("special score", &response.special_scores, &SPECIAL_SCORES[..]),
    ];

    let single_issues = singles
        .into_iter()
        .filter(|(_, value, known)| !value.is_empty() && !known.contains(value))
        .map(|(kind, value, _)| format!("{}: unknown {} code {:?}", label, kind, value));
    let list_issues = lists.into_iter().flat_map(|(kind, values, known)| {
        values
            .iter()
            .filter(|value| !known.contains(&value.as_str()))
            .map(move |value| format!("{}: unknown {} code {:?}", label, kind, value))
            .collect::<Vec<_>>()
    });

    single_issues.chain(list_issues).collect()
}
