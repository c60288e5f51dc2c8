//! Seats and per-seat state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Truco Mineiro is played heads-up, so only
//! seats 0 and 1 exist.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Mutable seat state: name, hand, score and turn flags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::Card;
use crate::rules::HAND_SIZE;

use super::error::EngineError;

/// Number of seats at the table.
pub const SEATS: usize = 2;

/// Seat identifier. Seats are 0-based: the first player is seat 0.
///
/// Only valid seats can be built from outside the crate. Deserialization
/// goes through `TryFrom<u8>` and refuses anything but 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub(crate) u8);

impl PlayerId {
    /// The first seat.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The second seat.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new seat ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < SEATS, "Seat must be 0 or 1");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use truco_mineiro::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEATS as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = EngineError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < SEATS {
            Ok(Self(id))
        } else {
            Err(EngineError::InvalidSeat(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use truco_mineiro::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<u8> = PlayerMap::with_value(0);
/// points[PlayerId::SECOND] += 1;
///
/// assert_eq!(points[PlayerId::FIRST], 0);
/// assert_eq!(points[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; SEATS],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Copy the entries out as a plain array.
    #[must_use]
    pub fn to_array(&self) -> [T; SEATS]
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Cards held by a player, in deal order.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// One seat's state for the whole match.
///
/// Everything except `score` and `name` is reset when a new hand is dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Cards still in hand.
    pub hand: Hand,
    /// Match points.
    pub score: u32,
    /// Whether this seat holds the turn.
    pub is_turn: bool,
    /// Whether the turn holder has revealed their hand.
    pub has_started_turn: bool,
    /// Cards this seat has played in the current hand.
    pub cards_played: Vec<Card>,
}

impl Player {
    /// Create a player with an empty hand and zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
            is_turn: false,
            has_started_turn: false,
            cards_played: Vec::new(),
        }
    }

    /// Replace the hand with freshly dealt cards.
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.clear();
        self.hand.extend(cards);
        self.cards_played.clear();
    }

    /// Remove the card at `index` from the hand.
    ///
    /// The card is also recorded in `cards_played`.
    /// Returns `None` if the index is out of range.
    pub fn take_card(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.cards_played.push(card);
        Some(card)
    }

    /// Add match points.
    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Whether this seat's hand may be shown face up.
    #[must_use]
    pub fn hand_revealed(&self) -> bool {
        self.is_turn && self.has_started_turn
    }

    /// Clear everything, including the score.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.score = 0;
        self.is_turn = false;
        self.has_started_turn = false;
        self.cards_played.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::new(1), PlayerId::SECOND);
        assert_eq!(format!("{}", PlayerId::FIRST), "Seat 0");
    }

    #[test]
    fn test_player_id_all() {
        let seats: Vec<_> = PlayerId::all().collect();
        assert_eq!(seats, vec![PlayerId::FIRST, PlayerId::SECOND]);
    }

    #[test]
    #[should_panic(expected = "Seat must be 0 or 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_id_rejects_unknown_seat() {
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::SECOND));
        assert_eq!(PlayerId::try_from(5), Err(EngineError::InvalidSeat(5)));

        assert_eq!(serde_json::to_string(&PlayerId::SECOND).unwrap(), "1");
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_map_new_and_iter() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &0), (PlayerId::SECOND, &10)]);
        assert_eq!(map.to_array(), [0, 10]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.0 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_take_card_records_play() {
        let mut player = Player::new("Ana");
        let zap = Card::new(Suit::Clubs, Rank::Four);
        let three = Card::new(Suit::Spades, Rank::Three);
        player.receive([zap, three]);

        assert_eq!(player.take_card(1), Some(three));
        assert_eq!(player.hand.as_slice(), &[zap]);
        assert_eq!(player.cards_played, vec![three]);

        assert_eq!(player.take_card(5), None);
        assert_eq!(player.hand.len(), 1);
    }

    #[test]
    fn test_reset_clears_score() {
        let mut player = Player::new("Bia");
        player.add_points(3);
        player.is_turn = true;
        player.has_started_turn = true;
        assert!(player.hand_revealed());

        player.reset();
        assert_eq!(player.score, 0);
        assert!(!player.is_turn);
        assert!(!player.hand_revealed());
        assert_eq!(player.name, "Bia");
    }
}
