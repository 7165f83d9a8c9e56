//! Coded Rorschach responses and the cards they belong to

use super::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten inkblot cards, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
}

impl Card {
    pub const ALL: [Card; 10] = [
        Card::I,
        Card::II,
        Card::III,
        Card::IV,
        Card::V,
        Card::VI,
        Card::VII,
        Card::VIII,
        Card::IX,
        Card::X,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Card::I => "I",
            Card::II => "II",
            Card::III => "III",
            Card::IV => "IV",
            Card::V => "V",
            Card::VI => "VI",
            Card::VII => "VII",
            Card::VIII => "VIII",
            Card::IX => "IX",
            Card::X => "X",
        }
    }

    /// Zero-based position in presentation order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The chromatic cards VIII, IX and X used for the affective ratio.
    pub fn is_last_three(&self) -> bool {
        matches!(self, Card::VIII | Card::IX | Card::X)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::ALL
            .into_iter()
            .find(|card| card.as_str() == s)
            .ok_or_else(|| Error::InvalidCard(s.to_string()))
    }
}

/// One coded answer to one card.
///
/// Field names on the wire match the exported protocol format. Tokens in
/// `location`, `dq`, `fq`, `z` and the three arrays are free-form codes; the
/// calculator matches them exactly and anything it does not recognise counts
/// as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// `None` for a row that has not been assigned to a card yet.
    #[serde(with = "card_field")]
    pub card: Option<Card>,
    pub response_index: u32,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_number: Option<u32>,
    pub dq: String,
    pub determinants: Vec<String>,
    pub fq: String,
    pub pair: bool,
    #[serde(rename = "FrScore", default)]
    pub fr_score: bool,
    #[serde(rename = "rFScore", default)]
    pub rf_score: bool,
    pub contents: Vec<String>,
    pub popular: bool,
    pub z: String,
    pub special_scores: Vec<String>,
    /// Cached GHR/PHR label written by the editor. Never read by the calculator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gphr: Option<String>,
    /// Cached Z value written by the editor. Never read by the calculator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zscore: Option<f64>,
}

impl Response {
    /// An empty row, as the input grid creates it.
    pub fn blank(card: Option<Card>, response_index: u32) -> Self {
        Self {
            card,
            response_index,
            location: String::new(),
            location_number: None,
            dq: String::new(),
            determinants: Vec::new(),
            fq: String::new(),
            pair: false,
            fr_score: false,
            rf_score: false,
            contents: Vec::new(),
            popular: false,
            z: String::new(),
            special_scores: Vec::new(),
            gphr: None,
            zscore: None,
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_dq(mut self, dq: &str) -> Self {
        self.dq = dq.to_string();
        self
    }

    pub fn with_determinants(mut self, determinants: &[&str]) -> Self {
        self.determinants = to_owned_tokens(determinants);
        self
    }

    pub fn with_fq(mut self, fq: &str) -> Self {
        self.fq = fq.to_string();
        self
    }

    pub fn with_contents(mut self, contents: &[&str]) -> Self {
        self.contents = to_owned_tokens(contents);
        self
    }

    pub fn with_special_scores(mut self, special_scores: &[&str]) -> Self {
        self.special_scores = to_owned_tokens(special_scores);
        self
    }

    pub fn with_z(mut self, z: &str) -> Self {
        self.z = z.to_string();
        self
    }

    pub fn with_pair(mut self, pair: bool) -> Self {
        self.pair = pair;
        self
    }

    pub fn with_popular(mut self, popular: bool) -> Self {
        self.popular = popular;
        self
    }

    pub fn with_reflections(mut self, fr_score: bool, rf_score: bool) -> Self {
        self.fr_score = fr_score;
        self.rf_score = rf_score;
        self
    }

    /// More than one determinant.
    pub fn is_blend(&self) -> bool {
        self.determinants.len() > 1
    }

    /// Exactly the single determinant `F`.
    pub fn is_pure_form(&self) -> bool {
        matches!(self.determinants.as_slice(), [only] if only == "F")
    }

    pub fn has_any_determinant(&self, tokens: &[&str]) -> bool {
        self.determinants.iter().any(|d| tokens.contains(&d.as_str()))
    }

    pub fn has_any_content(&self, tokens: &[&str]) -> bool {
        self.contents.iter().any(|c| tokens.contains(&c.as_str()))
    }

    pub fn has_any_special_score(&self, tokens: &[&str]) -> bool {
        self.special_scores
            .iter()
            .any(|s| tokens.contains(&s.as_str()))
    }
}

fn to_owned_tokens(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// `card` is a roman numeral on the wire, with `""` for an unassigned row.
mod card_field {
    use super::Card;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(card: &Option<Card>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(card.map_or("", |c| c.as_str()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Card>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<Card>()
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn cards_parse_and_order() {
        assert_eq!("VIII".parse::<Card>().unwrap(), Card::VIII);
        assert!("XI".parse::<Card>().is_err());
        assert!(Card::II < Card::X);
        assert_eq!(Card::X.index(), 9);
        assert!(Card::IX.is_last_three());
        assert!(!Card::VII.is_last_three());
    }

    #[test]
    fn deserializes_exported_row() {
        let json = indoc! {r#"
            {
              "card": "III",
              "response_index": 2,
              "location": "D",
              "location_number": 9,
              "dq": "+",
              "determinants": ["Ma", "FC"],
              "fq": "o",
              "pair": true,
              "FrScore": false,
              "rFScore": false,
              "contents": ["H", "Cg"],
              "popular": true,
              "z": "ZA",
              "special_scores": ["COP"],
              "gphr": "GHR",
              "zscore": 3.0
            }
        "#};
        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.card, Some(Card::III));
        assert_eq!(response.location_number, Some(9));
        assert!(response.is_blend());
        assert!(response.has_any_content(&["H"]));
        assert_eq!(response.zscore, Some(3.0));
    }

    #[test]
    fn empty_card_means_unassigned() {
        let json = r#"{"card":"","response_index":1,"location":"","dq":"","determinants":[],
            "fq":"","pair":false,"contents":[],"popular":false,"z":"","special_scores":[]}"#;
        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.card, None);
        assert!(!response.fr_score);

        let back = serde_json::to_value(&response).unwrap();
        assert_eq!(back["card"], "");
        assert!(back.get("gphr").is_none());
    }

    #[test]
    fn unknown_card_is_rejected() {
        let json = r#"{"card":"XI","response_index":1,"location":"","dq":"","determinants":[],
            "fq":"","pair":false,"contents":[],"popular":false,"z":"","special_scores":[]}"#;
        let err = serde_json::from_str::<Response>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid card identifier"));
    }

    #[test]
    fn pure_form_needs_single_f() {
        let pure = Response::blank(Some(Card::I), 1).with_determinants(&["F"]);
        let blend = Response::blank(Some(Card::I), 1).with_determinants(&["F", "FD"]);
        assert!(pure.is_pure_form());
        assert!(!blend.is_pure_form());
        assert!(!Response::blank(None, 1).is_pure_form());
    }
}
