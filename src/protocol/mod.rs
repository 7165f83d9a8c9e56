//! Protocol import, export and editing helpers.
//!
//! A protocol file is a bare JSON array of responses. Import is strict: a
//! malformed document, a wrong field type or an unknown card fails here so
//! the calculator only ever sees well-typed rows.

mod sample;
pub mod validation;

pub use validation::{validate_protocol, ProtocolReport, ValidationConfig};

use crate::constants::z_score;
use crate::core::{Card, Error, Response, Result, ResultExt};
use crate::scoring::gphr_label;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Protocol(pub Vec<Response>);

impl Protocol {
    pub fn new(responses: Vec<Response>) -> Self {
        Self(responses)
    }

    /// One empty response per card, the starting grid for data entry.
    pub fn blank() -> Self {
        Self(Card::ALL.into_iter().map(|card| Response::blank(Some(card), 1)).collect())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::file_system_with_source("Failed to read protocol", path, e)
        })?;
        let protocol = Self::from_json(&contents)
            .context(format!("Invalid protocol {}", path.display()))?;
        tracing::debug!(path = %path.display(), rows = protocol.len(), "protocol loaded");
        Ok(protocol)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json)
            .map_err(|e| Error::file_system_with_source("Failed to write protocol", path, e))
    }

    pub fn responses(&self) -> &[Response] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an empty response to `card`, numbered after the card's last one.
    pub fn add_response(&mut self, card: Card) -> &mut Response {
        let index = self
            .0
            .iter()
            .filter(|r| r.card == Some(card))
            .count() as u32
            + 1;
        self.0.push(Response::blank(Some(card), index));
        let last = self.0.len() - 1;
        &mut self.0[last]
    }

    /// Refresh the cached `gphr` and `zscore` fields from the coded values.
    ///
    /// `zscore` is cleared whenever the lookup fails, so a stale value never
    /// survives a change to the Z code. Scoring never reads either field.
    pub fn annotate(&mut self) {
        for response in &mut self.0 {
            let label = gphr_label(response);
            response.gphr = Some(label.to_string());
            response.zscore = response
                .card
                .and_then(|card| z_score(card, &response.z));
        }
    }

    /// Rows assigned to a card; the ones that count toward R.
    pub fn valid_responses(&self) -> impl Iterator<Item = &Response> + '_ {
        self.0.iter().filter(|r| r.card.is_some())
    }

    /// Cards without any assigned response, in presentation order.
    pub fn missing_cards(&self) -> Vec<Card> {
        Card::ALL
            .into_iter()
            .filter(|card| !self.valid_responses().any(|r| r.card == Some(*card)))
            .collect()
    }
}

impl From<Vec<Response>> for Protocol {
    fn from(responses: Vec<Response>) -> Self {
        Self(responses)
    }
}
