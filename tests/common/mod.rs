//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;
use truco_mineiro::{Card, Deck, Game, MatchConfig};

static LOGGING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_env("TEST_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
});

/// Install the test subscriber once per binary. Set `TEST_LOG=debug` to see
/// engine transitions.
pub fn init_logging() {
    Lazy::force(&LOGGING);
}

pub fn cards(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|c| c.parse().unwrap()).collect()
}

pub fn card(code: &str) -> Card {
    code.parse().unwrap()
}

/// A game whose first hand deals `first` to seat 0 and `second` to seat 1.
pub fn stacked_game(first: &[&str], second: &[&str]) -> Game {
    stacked_game_with(MatchConfig::new().with_seed(1), first, second)
}

pub fn stacked_game_with(config: MatchConfig, first: &[&str], second: &[&str]) -> Game {
    init_logging();
    let deck = Deck::stacked(&cards(first), &cards(second)).unwrap();
    Game::with_deck(config, deck).unwrap()
}
