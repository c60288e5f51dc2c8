//! Engine error taxonomy.
//!
//! Two families of failure exist:
//!
//! - [`EngineError::InvalidAction`]: a command arrived that the current state
//!   does not allow. These are recoverable no-ops; the game appends an
//!   explanatory log entry and otherwise leaves state untouched.
//! - Everything else is a construction or invariant violation (a deck too
//!   small to deal from, a stacked deck with duplicates, unparseable card
//!   text). None of these occur during normal play.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;

/// Why a command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The match already has a winner; only a reset is accepted.
    MatchOver,
    /// The acting player does not hold the turn.
    NotYourTurn,
    /// The turn holder has not revealed their hand yet.
    TurnNotStarted,
    /// The turn holder already revealed their hand.
    TurnAlreadyStarted,
    /// A truco call is waiting for accept, deny or raise.
    TrucoPending,
    /// The card index is outside the player's hand.
    NoSuchCard,
    /// Truco was already called this hand.
    TrucoAlreadyCalled,
    /// There is no active truco to raise.
    NoTrucoToRaise,
    /// The current caller tried to raise their own bet.
    SelfRaise,
    /// The bet is already worth 12.
    TrucoAtMaximum,
    /// Accept or deny without a pending call.
    NoPendingTruco,
    /// The named seat does not exist.
    NoSuchSeat,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rejection::MatchOver => "the match is over",
            Rejection::NotYourTurn => "it is not their turn",
            Rejection::TurnNotStarted => "their turn has not started",
            Rejection::TurnAlreadyStarted => "their turn has already started",
            Rejection::TrucoPending => "a truco call is pending",
            Rejection::NoSuchCard => "there is no such card in their hand",
            Rejection::TrucoAlreadyCalled => "truco was already called",
            Rejection::NoTrucoToRaise => "there is no truco to raise",
            Rejection::SelfRaise => "nobody can raise their own truco",
            Rejection::TrucoAtMaximum => "the bet is already at the maximum (12)",
            Rejection::NoPendingTruco => "there is no truco call to answer",
            Rejection::NoSuchSeat => "there is no such seat",
        };
        f.write_str(text)
    }
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Recoverable: the command was refused and nothing changed.
    #[error("invalid action: {0}")]
    InvalidAction(Rejection),

    /// The deck cannot supply `needed` cards.
    #[error("insufficient cards: need {needed}, deck has {available}")]
    InsufficientCards { needed: usize, available: usize },

    /// A stacked deck named the same card twice.
    #[error("duplicate card in stacked deck: {0}")]
    DuplicateCard(Card),

    /// A seat number outside 0 and 1.
    #[error("no such seat: {0}")]
    InvalidSeat(u8),

    /// Card text could not be parsed.
    #[error("cannot parse card: {0:?}")]
    ParseCard(String),
}

impl EngineError {
    /// The rejection reason, if this is an `InvalidAction`.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            EngineError::InvalidAction(r) => Some(*r),
            _ => None,
        }
    }
}

impl From<Rejection> for EngineError {
    fn from(rejection: Rejection) -> Self {
        EngineError::InvalidAction(rejection)
    }
}
