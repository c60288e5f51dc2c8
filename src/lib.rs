//! # truco-mineiro
//!
//! A rules engine for two-player Truco Mineiro.
//!
//! ## Rules in brief
//!
//! - 40-card Spanish-style deck, no 8s, 9s or 10s
//! - Four fixed trumps outrank everything: Zap (4 of clubs), Copeta (7 of
//!   hearts), Espadilha (ace of spades), Pica-fumo (7 of diamonds)
//! - Each hand has up to three tricks; two trick wins take the hand
//! - The hand is worth 1 point until someone calls truco. Bets climb
//!   3, 6, 9, 12, and refusing a bet hands the caller its value minus two
//!
//! ## Architecture
//!
//! - **Commands in, events out**: every mutation goes through [`Game`] and
//!   returns the [`GameEvent`]s it caused. Refused commands return
//!   [`EngineError::InvalidAction`] and change nothing but the log.
//! - **Pure rules**: trick resolution, hand scoring and the truco ladder live
//!   in `rules` as small state machines with no I/O.
//! - **Seeded shuffles**: [`GameRng`] makes any match replayable from its
//!   seed and command history.
//!
//! ## Modules
//!
//! - `core`: seats, players, commands, errors, configuration, RNG
//! - `cards`: suits, ranks, trumps, the deck
//! - `rules`: tricks, hands, truco
//! - `events`: structured events and the player-facing log
//! - `game`: the match driver and snapshots
//!
//! ## Example
//!
//! ```
//! use truco_mineiro::{Game, GameEvent, MatchConfig, PlayerId};
//!
//! let mut game = Game::new(MatchConfig::new().with_seed(42)).unwrap();
//! assert_eq!(game.current_player(), PlayerId::FIRST);
//!
//! game.start_turn().unwrap();
//! let events = game.play_card(PlayerId::FIRST, 0).unwrap();
//! assert_eq!(events.last(), Some(&GameEvent::TurnPassed { to: PlayerId::SECOND }));
//! ```

pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod rules;

pub use crate::core::{
    ActionRecord, Command, EngineError, GameRng, GameRngState, Hand, MatchConfig, Player,
    PlayerId, PlayerMap, Rejection,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::rules::{
    resolve_trick, HandOutcome, HandPhase, HandState, PlayedCard, Trick, TrickOutcome,
    TrickResult, TrucoState, TrucoValue,
};

pub use crate::events::{GameEvent, GameLog};

pub use crate::game::{Game, GameSnapshot, HandView, PlayerView, TrucoView};
