//! Commands accepted by the engine, and the record of accepted ones.
//!
//! Every operation the presentation layer can request is a [`Command`].
//! Accepted commands are stored as [`ActionRecord`]s; replaying the same
//! records on a game built from the same configuration reproduces the match.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A request from the presentation layer.
///
/// Only `PlayCard` names its actor explicitly. All other commands act on
/// behalf of the seat that currently holds the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Reveal the turn holder's hand.
    StartTurn,
    /// Play the card at `card_index` of `player`'s hand.
    PlayCard { player: PlayerId, card_index: usize },
    /// Ask for truco (bet goes to 3).
    CallTruco,
    /// Accept the pending call or raise.
    AcceptTruco,
    /// Refuse the pending call or raise; the hand ends.
    DenyTruco,
    /// Answer a call by raising the bet one step.
    RaiseTruco,
    /// Zero the scores and start over.
    ResetGame,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::StartTurn => write!(f, "start turn"),
            Command::PlayCard { player, card_index } => {
                write!(f, "play card {} from {}", card_index, player)
            }
            Command::CallTruco => write!(f, "call truco"),
            Command::AcceptTruco => write!(f, "accept truco"),
            Command::DenyTruco => write!(f, "deny truco"),
            Command::RaiseTruco => write!(f, "raise truco"),
            Command::ResetGame => write!(f, "reset game"),
        }
    }
}

/// An accepted command with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub player: PlayerId,

    /// The command taken.
    pub command: Command,

    /// Hand number when the command was taken.
    pub hand: u32,

    /// Position in the match-wide command sequence.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, command: Command, hand: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            hand,
            sequence,
        }
    }
}
