//! The 40-card Truco deck.
//!
//! Eights, nines and tens are removed from a standard deck. The top of the
//! deck is the end of the vector; dealing pops from there.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{EngineError, GameRng};

/// An ordered pile of cards, consumed by dealing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Cards in a full deck.
    pub const SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

    /// Build a full deck in suit-major order. Deterministic.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Build a full deck arranged so that `deal(first.len())` hands out
    /// exactly `first` and `second`, in order.
    ///
    /// The remaining cards sit beneath in build order. Fails if a card is
    /// named twice.
    ///
    /// ```
    /// use truco_mineiro::cards::{Card, Deck};
    ///
    /// let first: Vec<Card> = ["4C", "7H", "3S"].iter().map(|c| c.parse().unwrap()).collect();
    /// let second: Vec<Card> = ["7D", "2C", "KH"].iter().map(|c| c.parse().unwrap()).collect();
    ///
    /// let mut deck = Deck::stacked(&first, &second).unwrap();
    /// let (a, b) = deck.deal(3).unwrap();
    ///
    /// assert_eq!(a, first);
    /// assert_eq!(b, second);
    /// assert_eq!(deck.len(), 34);
    /// ```
    pub fn stacked(first: &[Card], second: &[Card]) -> Result<Self, EngineError> {
        let mut named: Vec<Card> = Vec::with_capacity(first.len() + second.len());
        for &card in first.iter().chain(second) {
            if named.contains(&card) {
                return Err(EngineError::DuplicateCard(card));
            }
            named.push(card);
        }

        let mut cards: Vec<Card> = Self::build()
            .cards
            .into_iter()
            .filter(|c| !named.contains(c))
            .collect();

        // Deal order is first[0], second[0], first[1], ...; the first card
        // dealt must sit at the end.
        let rounds = first.len().max(second.len());
        let mut deal_order: Vec<Card> = Vec::with_capacity(named.len());
        for i in 0..rounds {
            deal_order.extend(first.get(i));
            deal_order.extend(second.get(i));
        }
        cards.extend(deal_order.into_iter().rev());

        Ok(Self { cards })
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle in place with a uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal `n` cards to each of two players, alternating, from the top.
    ///
    /// Fails with `InsufficientCards` (and leaves the deck untouched) if
    /// fewer than `2n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<(Vec<Card>, Vec<Card>), EngineError> {
        let needed = 2 * n;
        if self.cards.len() < needed {
            return Err(EngineError::InsufficientCards {
                needed,
                available: self.cards.len(),
            });
        }

        let mut first = Vec::with_capacity(n);
        let mut second = Vec::with_capacity(n);
        for _ in 0..n {
            first.extend(self.cards.pop());
            second.extend(self.cards.pop());
        }
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_build_has_forty_unique_cards() {
        let deck = Deck::build();
        assert_eq!(deck.len(), 40);

        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), 40);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(Deck::build(), Deck::build());
    }

    #[test]
    fn test_deal_alternates_from_top() {
        let mut deck = Deck::build();
        let top: Vec<Card> = deck.cards().iter().rev().take(4).copied().collect();

        let (a, b) = deck.deal(2).unwrap();
        assert_eq!(a, vec![top[0], top[2]]);
        assert_eq!(b, vec![top[1], top[3]]);
        assert_eq!(deck.len(), 36);
    }

    #[test]
    fn test_deal_three_leaves_thirty_four() {
        let mut deck = Deck::build();
        deck.shuffle(&mut GameRng::new(7));

        let (a, b) = deck.deal(3).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
        assert_eq!(deck.len(), 34);

        for card in a.iter().chain(&b) {
            assert!(!deck.cards().contains(card));
        }
    }

    #[test]
    fn test_deal_insufficient() {
        let mut deck = Deck::build();
        deck.deal(18).unwrap();
        assert_eq!(deck.len(), 4);

        let err = deck.deal(3).unwrap_err();
        assert_eq!(err, EngineError::InsufficientCards { needed: 6, available: 4 });
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_stacked_rejects_duplicates() {
        let zap: Card = "4C".parse().unwrap();
        let err = Deck::stacked(&[zap], &[zap]).unwrap_err();
        assert_eq!(err, EngineError::DuplicateCard(zap));
    }

    #[test]
    fn test_stacked_keeps_full_deck() {
        let first: Vec<Card> = vec!["AS".parse().unwrap()];
        let second: Vec<Card> = vec!["3H".parse().unwrap()];
        let deck = Deck::stacked(&first, &second).unwrap();

        assert_eq!(deck.len(), 40);
        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), 40);
    }
}
