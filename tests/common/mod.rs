// Shared fixtures for rorscore integration tests
#![allow(dead_code)]

use rorscore::{Card, Protocol, Response};

/// A plain pure-form whole response, the baseline row for most fixtures.
pub fn plain_w(card: Card, index: u32) -> Response {
    Response::blank(Some(card), index)
        .with_location("W")
        .with_dq("o")
        .with_determinants(&["F"])
        .with_fq("o")
}

/// One plain response per card.
pub fn one_per_card() -> Vec<Response> {
    Card::ALL.into_iter().map(|card| plain_w(card, 1)).collect()
}

/// The library's coded sample protocol.
pub fn rich_protocol() -> Protocol {
    Protocol::sample()
}
