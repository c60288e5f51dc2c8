//! Cards and their Truco Mineiro strength.
//!
//! ## Strength
//!
//! Four fixed trumps (manilhas) outrank everything, highest first:
//!
//! | Card        | Name      | Strength |
//! |-------------|-----------|----------|
//! | 4 of clubs  | Zap       | 14       |
//! | 7 of hearts | Copeta    | 13       |
//! | A of spades | Espadilha | 12       |
//! | 7 of diamonds | Pica-fumo | 11     |
//!
//! Every other card takes the index of its rank in
//! `4 < 5 < 6 < 7 < Q < J < K < A < 2 < 3`, i.e. 0 through 9.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::core::EngineError;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    /// All suits, in deck build order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    /// Lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
        }
    }

    /// One-letter code used by `Card`'s text form.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }
}

/// Card rank. Declaration order is the non-trump strength order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    /// All ranks, weakest to strongest.
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    /// Position in the non-trump order (0-9).
    #[must_use]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// Printed symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
        }
    }
}

/// The fixed trumps, strongest first, with their strength and name.
pub const FIXED_TRUMPS: [(Suit, Rank, u8, &str); 4] = [
    (Suit::Clubs, Rank::Four, 14, "Zap"),
    (Suit::Hearts, Rank::Seven, 13, "Copeta"),
    (Suit::Spades, Rank::Ace, 12, "Espadilha"),
    (Suit::Diamonds, Rank::Seven, 11, "Pica-fumo"),
];

/// Lowest strength held by a trump. Every non-trump is below it.
pub const MIN_TRUMP_STRENGTH: u8 = 11;

/// Strength of a suit/rank pair.
#[must_use]
pub fn strength_of(suit: Suit, rank: Rank) -> u8 {
    FIXED_TRUMPS
        .iter()
        .find(|(s, r, _, _)| *s == suit && *r == rank)
        .map(|&(_, _, strength, _)| strength)
        .unwrap_or_else(|| rank.order())
}

/// An immutable playing card.
///
/// Strength is computed once at construction. Serialized as `{suit, rank}`;
/// strength is recomputed on deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CardFace", into = "CardFace")]
pub struct Card {
    suit: Suit,
    rank: Rank,
    strength: u8,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct CardFace {
    suit: Suit,
    rank: Rank,
}

impl From<CardFace> for Card {
    fn from(face: CardFace) -> Self {
        Card::new(face.suit, face.rank)
    }
}

impl From<Card> for CardFace {
    fn from(card: Card) -> Self {
        CardFace {
            suit: card.suit,
            rank: card.rank,
        }
    }
}

impl Card {
    /// Create a card, computing its strength.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            strength: strength_of(suit, rank),
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Comparison value; higher wins.
    #[must_use]
    pub fn strength(&self) -> u8 {
        self.strength
    }

    /// Whether this is one of the four fixed trumps.
    #[must_use]
    pub fn is_trump(&self) -> bool {
        self.strength >= MIN_TRUMP_STRENGTH
    }

    /// Traditional name of a trump card.
    #[must_use]
    pub fn trump_name(&self) -> Option<&'static str> {
        FIXED_TRUMPS
            .iter()
            .find(|(s, r, _, _)| *s == self.suit && *r == self.rank)
            .map(|&(_, _, _, name)| name)
    }

    /// Compare by strength only.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use truco_mineiro::cards::{Card, Rank, Suit};
    ///
    /// let zap = Card::new(Suit::Clubs, Rank::Four);
    /// let three = Card::new(Suit::Hearts, Rank::Three);
    /// let other_three = Card::new(Suit::Spades, Rank::Three);
    ///
    /// assert_eq!(zap.compare(&three), Ordering::Greater);
    /// assert_eq!(three.compare(&other_three), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Card) -> Ordering {
        self.strength.cmp(&other.strength)
    }

    /// Short text form, e.g. `"4C"` or `"QD"`.
    #[must_use]
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.code())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank.symbol(), self.suit.name())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parse the short form produced by [`Card::code`], case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_uppercase();
        let mut chars = text.chars();
        let (Some(rank_char), Some(suit_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(EngineError::ParseCard(s.to_string()));
        };

        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.symbol().starts_with(rank_char))
            .ok_or_else(|| EngineError::ParseCard(s.to_string()))?;
        let suit = Suit::ALL
            .into_iter()
            .find(|su| su.code() == suit_char)
            .ok_or_else(|| EngineError::ParseCard(s.to_string()))?;

        Ok(Card::new(suit, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_trump_strengths() {
        assert_eq!(card("4C").strength(), 14);
        assert_eq!(card("7H").strength(), 13);
        assert_eq!(card("AS").strength(), 12);
        assert_eq!(card("7D").strength(), 11);
    }

    #[test]
    fn test_non_trump_strengths() {
        assert_eq!(card("4H").strength(), 0);
        assert_eq!(card("7S").strength(), 3);
        assert_eq!(card("QD").strength(), 4);
        assert_eq!(card("AH").strength(), 7);
        assert_eq!(card("3C").strength(), 9);
    }

    #[test]
    fn test_plain_ranks_climb_in_every_suit() {
        for suit in Suit::ALL {
            let plain: Vec<Card> = Rank::ALL
                .into_iter()
                .map(|r| Card::new(suit, r))
                .filter(|c| !c.is_trump())
                .collect();
            for pair in plain.windows(2) {
                assert_eq!(
                    pair[0].compare(&pair[1]),
                    std::cmp::Ordering::Less,
                    "{} should rank below {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn test_exactly_four_trumps() {
        let trumps: Vec<_> = Suit::ALL
            .into_iter()
            .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(s, r)))
            .filter(Card::is_trump)
            .collect();
        assert_eq!(trumps.len(), 4);
    }

    #[test]
    fn test_trump_names() {
        assert_eq!(card("4C").trump_name(), Some("Zap"));
        assert_eq!(card("7D").trump_name(), Some("Pica-fumo"));
        assert_eq!(card("7C").trump_name(), None);
    }

    #[test]
    fn test_parse_and_display() {
        let queen = card("qd");
        assert_eq!(queen, Card::new(Suit::Diamonds, Rank::Queen));
        assert_eq!(queen.code(), "QD");
        assert_eq!(queen.to_string(), "Q of diamonds");

        assert!("".parse::<Card>().is_err());
        assert!("10C".parse::<Card>().is_err());
        assert!("8C".parse::<Card>().is_err());
        assert!("4X".parse::<Card>().is_err());
    }

    #[test]
    fn test_serde_recomputes_strength() {
        let zap = card("4C");
        let json = serde_json::to_string(&zap).unwrap();
        assert_eq!(json, r#"{"suit":"Clubs","rank":"Four"}"#);

        let restored: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.strength(), 14);
        assert_eq!(restored, zap);
    }
}
