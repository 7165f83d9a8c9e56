//! Counting primitives over the valid responses of a protocol.
//!
//! Two token matching modes exist and must not be mixed up:
//! [`ResponseSet::count_exact`] compares whole tokens, while
//! [`ResponseSet::count_contains_any`] looks for a code fragment inside each
//! token (shading `T` inside `FT`, movement `Ma` inside `Ma-p`).

use crate::core::{Card, Response};

/// Which token array of a response to count in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Determinants,
    Contents,
    SpecialScores,
}

impl Field {
    fn tokens(self, r: &Response) -> &[String] {
        match self {
            Field::Determinants => &r.determinants,
            Field::Contents => &r.contents,
            Field::SpecialScores => &r.special_scores,
        }
    }
}

/// The responses that count toward R: those assigned to a card.
#[derive(Debug, Clone)]
pub struct ResponseSet<'a> {
    responses: Vec<&'a Response>,
}

impl<'a> ResponseSet<'a> {
    pub fn new(all: &'a [Response]) -> Self {
        Self {
            responses: all.iter().filter(|r| r.card.is_some()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Response> + '_ {
        self.responses.iter().copied()
    }

    /// Occurrences of `token` in `field`, counted per token not per response.
    pub fn count_exact(&self, token: &str, field: Field) -> usize {
        self.iter()
            .map(|r| field.tokens(r).iter().filter(|t| *t == token).count())
            .sum()
    }

    /// Sum of [`count_exact`](Self::count_exact) over several tokens.
    pub fn count_exact_all(&self, tokens: &[&str], field: Field) -> usize {
        tokens.iter().map(|t| self.count_exact(t, field)).sum()
    }

    /// Tokens in `field` containing at least one of `fragments`.
    pub fn count_contains_any(&self, fragments: &[&str], field: Field) -> usize {
        self.iter()
            .map(|r| {
                field
                    .tokens(r)
                    .iter()
                    .filter(|t| fragments.iter().any(|f| t.contains(f)))
                    .count()
            })
            .sum()
    }

    /// Responses satisfying `pred`.
    pub fn count_where(&self, pred: impl Fn(&Response) -> bool) -> usize {
        self.iter().filter(|&r| pred(r)).count()
    }

    /// Responses whose location is one of `locations`.
    pub fn count_locations(&self, locations: &[&str]) -> usize {
        self.count_where(|r| locations.contains(&r.location.as_str()))
    }

    pub fn count_on_cards(&self, pred: impl Fn(Card) -> bool) -> usize {
        self.count_where(|r| r.card.is_some_and(&pred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Response> {
        vec![
            Response::blank(Some(Card::I), 1).with_determinants(&["FT", "FC", "FC"]),
            Response::blank(Some(Card::II), 1).with_determinants(&["Ma-p", "FMa"]),
            Response::blank(None, 1).with_determinants(&["FC", "T"]),
        ]
    }

    #[test]
    fn unassigned_rows_are_skipped() {
        let all = sample();
        let set = ResponseSet::new(&all);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn exact_counts_every_token() {
        let all = sample();
        let set = ResponseSet::new(&all);
        assert_eq!(set.count_exact("FC", Field::Determinants), 2);
        assert_eq!(set.count_exact("T", Field::Determinants), 0);
        assert_eq!(set.count_exact_all(&["FMa", "Ma-p"], Field::Determinants), 2);
    }

    #[test]
    fn contains_matches_fragments() {
        let all = sample();
        let set = ResponseSet::new(&all);
        assert_eq!(set.count_contains_any(&["T"], Field::Determinants), 1);
        // "Ma-p" and "FMa" both contain "Ma"
        assert_eq!(set.count_contains_any(&["Ma"], Field::Determinants), 2);
        // a token matching two fragments still counts once
        assert_eq!(set.count_contains_any(&["Ma", "FMa"], Field::Determinants), 2);
    }

    #[test]
    fn card_filters() {
        let all = sample();
        let set = ResponseSet::new(&all);
        assert_eq!(set.count_on_cards(|c| c == Card::II), 1);
        assert_eq!(set.count_on_cards(|c| c.is_last_three()), 0);
    }
}
