//! Owned, serializable views of a [`Game`].
//!
//! A presentation layer renders entirely from a [`GameSnapshot`]. Concealed
//! hands still carry their cards; `hand_revealed` says whether to draw them
//! face up.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Command, PlayerId};
use crate::rules::{HandPhase, PlayedCard, TrickResult};

use super::game::Game;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub hand_revealed: bool,
    pub score: u32,
    pub is_turn: bool,
    pub has_started_turn: bool,
    pub cards_played: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrucoView {
    /// Points the hand is currently worth.
    pub value: u32,
    pub caller: Option<PlayerId>,
    pub active: bool,
    pub pending_response: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub hand_number: u32,
    pub phase: HandPhase,
    pub trick_count: u8,
    pub trick_points: [u8; 2],
    pub current_player: PlayerId,
    pub last_result: Option<TrickResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerView>,
    /// Cards of the trick in progress.
    pub table: Vec<PlayedCard>,
    pub last_trick: Vec<PlayedCard>,
    pub hand: HandView,
    pub truco: TrucoView,
    pub log: Vec<String>,
    pub deck_remaining: usize,
    pub target_score: u32,
    pub match_winner: Option<PlayerId>,
    pub legal_commands: Vec<Command>,
}

impl GameSnapshot {
    /// View of one seat.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &PlayerView {
        &self.players[seat.index()]
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let players = game
            .players()
            .iter()
            .map(|(seat, p)| PlayerView {
                seat,
                name: p.name.clone(),
                hand: p.hand.to_vec(),
                hand_revealed: p.hand_revealed(),
                score: p.score,
                is_turn: p.is_turn,
                has_started_turn: p.has_started_turn,
                cards_played: p.cards_played.clone(),
            })
            .collect();

        let state = game.hand_state();
        let truco = game.truco();

        Self {
            players,
            table: game.table().plays().to_vec(),
            last_trick: game.last_trick().to_vec(),
            hand: HandView {
                hand_number: game.hand_number(),
                phase: state.phase(),
                trick_count: state.trick_count(),
                trick_points: state.trick_points().to_array(),
                current_player: state.current_player(),
                last_result: state.last_result(),
            },
            truco: TrucoView {
                value: truco.hand_value(),
                caller: truco.caller(),
                active: truco.is_active(),
                pending_response: truco.pending_response(),
            },
            log: game.log().to_vec(),
            deck_remaining: game.deck().len(),
            target_score: game.config().target_score,
            match_winner: game.match_winner(),
            legal_commands: game.legal_commands(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    #[test]
    fn test_snapshot_conceals_until_started() {
        let mut game = Game::new(MatchConfig::new().with_seed(9)).unwrap();
        let snap = game.snapshot();
        assert!(!snap.player(PlayerId::FIRST).hand_revealed);
        assert_eq!(snap.player(PlayerId::FIRST).hand.len(), 3);
        assert_eq!(snap.deck_remaining, 34);
        assert_eq!(snap.truco.value, 1);

        game.start_turn().unwrap();
        let snap = game.snapshot();
        assert!(snap.player(PlayerId::FIRST).hand_revealed);
        assert!(!snap.player(PlayerId::SECOND).hand_revealed);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let game = Game::new(MatchConfig::new().with_seed(3)).unwrap();
        let snap = game.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let restored: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, restored);
    }
}
