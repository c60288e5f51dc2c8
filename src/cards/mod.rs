//! Cards, ranking and the deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: closed enumerations of the 40-card deck
//! - `Card`: immutable suit/rank pair with a precomputed strength
//! - `Deck`: build, shuffle, deal

pub mod card;
pub mod deck;

pub use card::{strength_of, Card, Rank, Suit, FIXED_TRUMPS, MIN_TRUMP_STRENGTH};
pub use deck::Deck;
