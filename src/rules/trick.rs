//! Trick resolution and the table.
//!
//! A trick is one card from each seat. The stronger card wins; equal
//! strength is a drawn trick, which is a normal outcome.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::cards::Card;
use crate::core::{PlayerId, SEATS};

/// Outcome of comparing the first (A) and second (B) card of a trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrickOutcome {
    WinnerA,
    WinnerB,
    Tie,
}

/// Decide a trick between two cards.
///
/// ```
/// use truco_mineiro::cards::Card;
/// use truco_mineiro::rules::{resolve_trick, TrickOutcome};
///
/// let zap: Card = "4C".parse().unwrap();
/// let pica_fumo: Card = "7D".parse().unwrap();
///
/// assert_eq!(resolve_trick(&zap, &pica_fumo), TrickOutcome::WinnerA);
/// ```
#[must_use]
pub fn resolve_trick(a: &Card, b: &Card) -> TrickOutcome {
    match a.compare(b) {
        Ordering::Greater => TrickOutcome::WinnerA,
        Ordering::Less => TrickOutcome::WinnerB,
        Ordering::Equal => TrickOutcome::Tie,
    }
}

/// A trick result expressed in seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrickResult {
    Won(PlayerId),
    Tied,
}

impl TrickResult {
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            TrickResult::Won(p) => Some(p),
            TrickResult::Tied => None,
        }
    }
}

/// A card on the table and the seat that played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedCard {
    pub player: PlayerId,
    pub card: Card,
}

/// The current trick: at most one card per seat, in play order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    plays: SmallVec<[PlayedCard; SEATS]>,
}

impl Trick {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card on the table.
    ///
    /// Panics if the trick is already complete.
    pub fn push(&mut self, player: PlayerId, card: Card) {
        assert!(!self.is_complete(), "Trick already has both cards");
        self.plays.push(PlayedCard { player, card });
    }

    #[must_use]
    pub fn plays(&self) -> &[PlayedCard] {
        &self.plays
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plays.len() == SEATS
    }

    /// Seat that played first.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        self.plays.first().map(|p| p.player)
    }

    /// Result once both cards are down.
    #[must_use]
    pub fn result(&self) -> Option<TrickResult> {
        let [a, b] = self.plays.as_slice() else {
            return None;
        };
        Some(match resolve_trick(&a.card, &b.card) {
            TrickOutcome::WinnerA => TrickResult::Won(a.player),
            TrickOutcome::WinnerB => TrickResult::Won(b.player),
            TrickOutcome::Tie => TrickResult::Tied,
        })
    }

    /// Empty the table, returning what was on it.
    pub fn take(&mut self) -> Vec<PlayedCard> {
        self.plays.drain(..).collect()
    }
}
