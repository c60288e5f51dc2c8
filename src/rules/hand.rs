//! The hand state machine: up to three tricks.
//!
//! ```text
//! Dealt -> TrickInProgress (x1..3) -> HandDecided
//! ```
//!
//! Each won trick is a trick point. Two trick points end the hand at once.
//! After three tricks the higher total wins; equal totals draw the hand.
//!
//! The winner of a trick leads the next one. After a drawn trick the seat
//! that led it leads again.

use serde::{Deserialize, Serialize};

use super::trick::TrickResult;
use crate::core::{PlayerId, PlayerMap};

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 3;

/// Tricks in a hand.
pub const TRICKS_PER_HAND: u8 = 3;

/// Trick points that decide a hand outright.
pub const TRICKS_TO_WIN: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandPhase {
    /// Cards dealt, no card played yet.
    Dealt,
    /// At least one card has been played and the hand is undecided.
    TrickInProgress,
    /// The hand has an outcome; a new deal follows.
    HandDecided,
}

/// How a hand ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandOutcome {
    Won(PlayerId),
    Drawn,
}

impl HandOutcome {
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            HandOutcome::Won(p) => Some(p),
            HandOutcome::Drawn => None,
        }
    }
}

/// Per-hand trick bookkeeping and turn ownership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandState {
    phase: HandPhase,
    trick_count: u8,
    trick_points: PlayerMap<u8>,
    current_player: PlayerId,
    trick_leader: PlayerId,
    last_result: Option<TrickResult>,
}

impl HandState {
    /// Fresh hand with `leader` to play first.
    #[must_use]
    pub fn new(leader: PlayerId) -> Self {
        Self {
            phase: HandPhase::Dealt,
            trick_count: 0,
            trick_points: PlayerMap::with_value(0),
            current_player: leader,
            trick_leader: leader,
            last_result: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> HandPhase {
        self.phase
    }

    /// Tricks resolved so far.
    #[must_use]
    pub fn trick_count(&self) -> u8 {
        self.trick_count
    }

    #[must_use]
    pub fn trick_points(&self) -> &PlayerMap<u8> {
        &self.trick_points
    }

    /// Seat that must act next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Seat that led (or will lead) the current trick.
    #[must_use]
    pub fn trick_leader(&self) -> PlayerId {
        self.trick_leader
    }

    /// Result of the most recent trick.
    #[must_use]
    pub fn last_result(&self) -> Option<TrickResult> {
        self.last_result
    }

    /// Hand the turn to the other seat.
    pub fn pass_turn(&mut self) -> PlayerId {
        self.current_player = self.current_player.opponent();
        self.current_player
    }

    /// Note that `leader` put down the first card of a trick.
    pub fn open_trick(&mut self, leader: PlayerId) {
        self.trick_leader = leader;
        self.phase = HandPhase::TrickInProgress;
    }

    /// Score a resolved trick and pick who acts next.
    ///
    /// Returns the hand outcome once the hand is decided.
    pub fn record_trick(&mut self, result: TrickResult) -> Option<HandOutcome> {
        debug_assert!(self.phase != HandPhase::HandDecided, "Hand already decided");

        self.trick_count += 1;
        self.last_result = Some(result);

        match result {
            TrickResult::Won(winner) => {
                self.trick_points[winner] += 1;
                self.current_player = winner;
                self.trick_leader = winner;
            }
            TrickResult::Tied => {
                self.current_player = self.trick_leader;
            }
        }

        let outcome = self.decide();
        if outcome.is_some() {
            self.phase = HandPhase::HandDecided;
        }
        outcome
    }

    fn decide(&self) -> Option<HandOutcome> {
        if let Some((seat, _)) = self.trick_points.iter().find(|&(_, &pts)| pts >= TRICKS_TO_WIN) {
            return Some(HandOutcome::Won(seat));
        }
        if self.trick_count < TRICKS_PER_HAND {
            return None;
        }

        let first = self.trick_points[PlayerId::FIRST];
        let second = self.trick_points[PlayerId::SECOND];
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => HandOutcome::Won(PlayerId::FIRST),
            std::cmp::Ordering::Less => HandOutcome::Won(PlayerId::SECOND),
            std::cmp::Ordering::Equal => HandOutcome::Drawn,
        })
    }
}
