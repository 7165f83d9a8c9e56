use super::Protocol;
use crate::core::{Card, Response};

impl Protocol {
    /// A fully coded 20-response protocol, two responses per card, that
    /// touches every cluster of the summary.
    pub fn sample() -> Self {
        let responses = vec![
            Response::blank(Some(Card::I), 1)
                .with_location("W")
                .with_dq("o")
                .with_determinants(&["F"])
                .with_fq("o")
                .with_contents(&["A"])
                .with_popular(true)
                .with_z("ZW"),
            Response::blank(Some(Card::I), 2)
                .with_location("WS")
                .with_dq("o")
                .with_determinants(&["FC'"])
                .with_fq("u")
                .with_contents(&["(Hd)"])
                .with_z("ZS"),
            Response::blank(Some(Card::II), 1)
                .with_location("D")
                .with_dq("+")
                .with_determinants(&["Ma", "FC"])
                .with_fq("o")
                .with_contents(&["H", "Cg"])
                .with_special_scores(&["COP"])
                .with_pair(true)
                .with_z("ZA"),
            Response::blank(Some(Card::II), 2)
                .with_location("DS")
                .with_dq("o")
                .with_determinants(&["CF"])
                .with_fq("-")
                .with_contents(&["Bl"])
                .with_special_scores(&["MOR"])
                .with_z("ZS"),
            Response::blank(Some(Card::III), 1)
                .with_location("D")
                .with_dq("+")
                .with_determinants(&["Ma"])
                .with_fq("o")
                .with_contents(&["H"])
                .with_popular(true)
                .with_pair(true)
                .with_z("ZA"),
            Response::blank(Some(Card::III), 2)
                .with_location("Dd")
                .with_dq("o")
                .with_determinants(&["F"])
                .with_fq("u")
                .with_contents(&["An"]),
            Response::blank(Some(Card::IV), 1)
                .with_location("W")
                .with_dq("o")
                .with_determinants(&["FT"])
                .with_fq("o")
                .with_contents(&["(A)"])
                .with_popular(true)
                .with_z("ZW"),
            Response::blank(Some(Card::IV), 2)
                .with_location("D")
                .with_dq("o")
                .with_determinants(&["F"])
                .with_fq("o")
                .with_contents(&["Bt"]),
            Response::blank(Some(Card::V), 1)
                .with_location("W")
                .with_dq("o")
                .with_determinants(&["FMa"])
                .with_fq("o")
                .with_contents(&["A"])
                .with_popular(true)
                .with_z("ZW"),
            Response::blank(Some(Card::V), 2)
                .with_location("W")
                .with_dq("o")
                .with_determinants(&["F"])
                .with_fq("o")
                .with_contents(&["A"])
                .with_z("ZW"),
            Response::blank(Some(Card::VI), 1)
                .with_location("D")
                .with_dq("o")
                .with_determinants(&["FT"])
                .with_fq("o")
                .with_contents(&["Ad"]),
            Response::blank(Some(Card::VI), 2)
                .with_location("Dd")
                .with_dq("v")
                .with_determinants(&["F"])
                .with_fq("-")
                .with_contents(&["Sx"])
                .with_special_scores(&["DV1"]),
            Response::blank(Some(Card::VII), 1)
                .with_location("W")
                .with_dq("+")
                .with_determinants(&["Mp"])
                .with_fq("o")
                .with_contents(&["H"])
                .with_popular(true)
                .with_pair(true)
                .with_z("ZW"),
            Response::blank(Some(Card::VII), 2)
                .with_location("D")
                .with_dq("o")
                .with_determinants(&["F"])
                .with_fq("o")
                .with_contents(&["Ls"]),
            Response::blank(Some(Card::VIII), 1)
                .with_location("D")
                .with_dq("o")
                .with_determinants(&["FMa", "FC"])
                .with_fq("o")
                .with_contents(&["A"])
                .with_popular(true)
                .with_pair(true),
            Response::blank(Some(Card::VIII), 2)
                .with_location("W")
                .with_dq("v/+")
                .with_determinants(&["CF", "YF"])
                .with_fq("u")
                .with_contents(&["Na"])
                .with_z("ZW"),
            Response::blank(Some(Card::IX), 1)
                .with_location("D")
                .with_dq("o")
                .with_determinants(&["mp"])
                .with_fq("u")
                .with_contents(&["Fi"]),
            Response::blank(Some(Card::IX), 2)
                .with_location("DdS")
                .with_dq("o")
                .with_determinants(&["F"])
                .with_fq("-")
                .with_contents(&["Hd"])
                .with_special_scores(&["INCOM1"])
                .with_z("ZS"),
            Response::blank(Some(Card::X), 1)
                .with_location("D")
                .with_dq("o")
                .with_determinants(&["FC"])
                .with_fq("o")
                .with_contents(&["A"])
                .with_popular(true)
                .with_pair(true),
            Response::blank(Some(Card::X), 2)
                .with_location("W")
                .with_dq("+")
                .with_determinants(&["Ma", "Fr"])
                .with_fq("o")
                .with_contents(&["H", "Art"])
                .with_special_scores(&["AB"])
                .with_reflections(true, false)
                .with_z("ZW"),
        ];
        Protocol::new(responses)
    }
}
