//! Core engine types: seats, players, commands, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionRecord, Command};
pub use config::{MatchConfig, DEFAULT_PLAYER_NAMES, DEFAULT_TARGET_SCORE};
pub use error::{EngineError, Rejection};
pub use player::{Hand, Player, PlayerId, PlayerMap, SEATS};
pub use rng::{GameRng, GameRngState};
