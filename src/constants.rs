//! Fixed scoring tables of the Comprehensive System.
//!
//! All tables are compile-time constants. Lookups never fail loudly: a token
//! that is not in a table contributes nothing.

use crate::core::Card;

/// Organizational activity values for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreEntry {
    /// Whole blot (ZW)
    pub zw: f64,
    /// Adjacent detail (ZA)
    pub za: f64,
    /// Distant detail (ZD)
    pub zd: f64,
    /// White space integration (ZS)
    pub zs: f64,
}

impl ZScoreEntry {
    pub fn get(&self, z_type: &str) -> Option<f64> {
        match z_type {
            "ZW" => Some(self.zw),
            "ZA" => Some(self.za),
            "ZD" => Some(self.zd),
            "ZS" => Some(self.zs),
            _ => None,
        }
    }
}

const fn z(zw: f64, za: f64, zd: f64, zs: f64) -> ZScoreEntry {
    ZScoreEntry { zw, za, zd, zs }
}

/// Indexed by [`Card::index`].
pub const Z_SCORE_TABLE: [ZScoreEntry; 10] = [
    z(1.0, 4.0, 6.0, 3.5), // I
    z(4.5, 3.0, 5.5, 4.5), // II
    z(5.5, 3.0, 4.0, 4.5), // III
    z(2.0, 4.0, 3.5, 5.0), // IV
    z(1.0, 2.5, 5.0, 4.0), // V
    z(2.5, 2.5, 6.0, 6.5), // VI
    z(2.5, 1.0, 3.0, 4.0), // VII
    z(4.5, 3.0, 3.0, 4.0), // VIII
    z(5.5, 2.5, 4.5, 5.0), // IX
    z(5.5, 4.0, 4.5, 6.0), // X
];

/// Z value for a card and Z type token, `None` when the token is unknown.
pub fn z_score(card: Card, z_type: &str) -> Option<f64> {
    Z_SCORE_TABLE[card.index()].get(z_type)
}

/// Expected ZSum for Zf = 1..=50, at position `Zf - 1`.
///
/// The published table starts at Zf = 2; Zf = 1 is scored as 0.0.
pub const ZEST_TABLE: [f64; 50] = [
    0.0, 2.5, 6.0, 10.0, 13.5, 17.0, 20.5, 24.0, 27.5, 31.0, // 1-10
    34.5, 38.0, 41.5, 45.5, 49.0, 52.5, 56.0, 59.5, 63.0, 66.5, // 11-20
    70.0, 73.5, 77.0, 81.0, 84.5, 88.0, 91.5, 95.0, 98.5, 102.5, // 21-30
    105.5, 109.5, 112.5, 116.5, 120.0, 123.5, 127.0, 130.5, 134.0, 137.5, // 31-40
    141.0, 144.5, 148.0, 152.0, 155.5, 159.0, 162.5, 166.0, 169.5, 173.0, // 41-50
];

/// Weights of the six critical special scores (level 1 and 2) for WSum6.
pub const WSUM6_WEIGHTS: [(&str, u32); 10] = [
    ("DV1", 1),
    ("DV2", 2),
    ("INCOM1", 2),
    ("INCOM2", 4),
    ("DR1", 3),
    ("DR2", 6),
    ("FABCOM1", 4),
    ("FABCOM2", 7),
    ("ALOG", 5),
    ("CONTAM", 7),
];

pub fn wsum6_weight(special_score: &str) -> u32 {
    WSUM6_WEIGHTS
        .iter()
        .find(|(token, _)| *token == special_score)
        .map_or(0, |(_, weight)| *weight)
}

pub const LOCATIONS: [&str; 6] = ["W", "WS", "D", "DS", "Dd", "DdS"];

pub const DEVELOPMENTAL_QUALITIES: [&str; 4] = ["+", "o", "v/+", "v"];

pub const FORM_QUALITIES: [&str; 5] = ["+", "o", "u", "-", "none"];

pub const Z_TYPES: [&str; 4] = ["ZW", "ZA", "ZD", "ZS"];

pub const DETERMINANTS: [&str; 32] = [
    "M", "Ma", "Mp", "Ma-p", "FM", "FMa", "FMp", "FMa-p", "m", "ma", "mp", "ma-p", "FC", "CF",
    "C", "Cn", "FC'", "C'F", "C'", "FT", "TF", "T", "FV", "VF", "V", "FY", "YF", "Y", "Fr", "rF",
    "FD", "F",
];

pub const CONTENTS: [&str; 27] = [
    "H", "(H)", "Hd", "(Hd)", "Hx", "A", "(A)", "Ad", "(Ad)", "An", "Art", "Ay", "Bl", "Bt", "Cg",
    "Cl", "Ex", "Fd", "Fi", "Ge", "Hh", "Ls", "Na", "Sc", "Sx", "Xy", "Id",
];

pub const SPECIAL_SCORES: [&str; 17] = [
    "DV1", "DV2", "INCOM1", "INCOM2", "DR1", "DR2", "FABCOM1", "FABCOM2", "ALOG", "CONTAM", "AB",
    "AG", "COP", "CP", "MOR", "PER", "PSV",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_table_matches_reference_values() {
        assert_eq!(z_score(Card::I, "ZW"), Some(1.0));
        assert_eq!(z_score(Card::VI, "ZS"), Some(6.5));
        assert_eq!(z_score(Card::VII, "ZA"), Some(1.0));
        assert_eq!(z_score(Card::X, "ZS"), Some(6.0));
        assert_eq!(z_score(Card::III, "Z?"), None);
        assert_eq!(z_score(Card::III, ""), None);
    }

    #[test]
    fn zest_table_is_increasing() {
        assert!(ZEST_TABLE.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ZEST_TABLE[12], 41.5);
        assert_eq!(ZEST_TABLE[49], 173.0);
    }

    #[test]
    fn level_two_weighs_more_than_level_one() {
        assert!(wsum6_weight("DV1") < wsum6_weight("DV2"));
        assert!(wsum6_weight("DV2") < wsum6_weight("INCOM2"));
        assert!(wsum6_weight("FABCOM1") < wsum6_weight("FABCOM2"));
        assert_eq!(wsum6_weight("COP"), 0);
        assert_eq!(wsum6_weight("dv1"), 0);
    }

    #[test]
    fn vocabularies_cover_weighted_scores() {
        for (token, _) in WSUM6_WEIGHTS {
            assert!(SPECIAL_SCORES.contains(&token), "{token} missing");
        }
        for z_type in Z_TYPES {
            assert!(Z_SCORE_TABLE[0].get(z_type).is_some());
        }
    }
}
