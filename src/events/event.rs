//! Structured events returned by engine commands.
//!
//! Every accepted command returns the events it caused, in order. A
//! presentation layer animates from these; the engine itself never waits.
//! Playing the second card of a trick yields `CardPlayed` followed
//! immediately by `TrickResolved`, and a UI that wants a pause before
//! revealing the winner inserts it on its side.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::{TrickResult, TrucoValue};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new hand was dealt.
    HandDealt { hand_number: u32, leader: PlayerId },
    /// The turn holder revealed their hand.
    TurnStarted { player: PlayerId },
    /// A card went to the table. `trick_number` is 1-based.
    CardPlayed {
        player: PlayerId,
        card: Card,
        trick_number: u8,
    },
    /// Both cards are down and the trick is decided.
    TrickResolved { trick_number: u8, result: TrickResult },
    /// The turn moved to `to`.
    TurnPassed { to: PlayerId },
    TrucoCalled { by: PlayerId, value: TrucoValue },
    TrucoAccepted { by: PlayerId, value: TrucoValue },
    TrucoRaised { by: PlayerId, value: TrucoValue },
    /// `by` refused; `caller` scores `points`.
    TrucoDenied {
        by: PlayerId,
        caller: PlayerId,
        points: u32,
    },
    /// The hand is over. `points` is what the winner scored for it.
    HandEnded {
        winner: Option<PlayerId>,
        points: u32,
    },
    /// A score reached the match target.
    MatchWon { winner: PlayerId, score: u32 },
    /// Scores were zeroed for a new match.
    GameReset,
}

impl GameEvent {
    /// Whether this event closes a hand.
    #[must_use]
    pub fn is_hand_end(&self) -> bool {
        matches!(self, GameEvent::HandEnded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::CardPlayed {
            player: PlayerId::SECOND,
            card: "7H".parse().unwrap(),
            trick_number: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        let restored: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, restored);
    }

    #[test]
    fn test_is_hand_end() {
        assert!(GameEvent::HandEnded { winner: None, points: 0 }.is_hand_end());
        assert!(!GameEvent::GameReset.is_hand_end());
    }
}
