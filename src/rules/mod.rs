//! Game rules: trick resolution, the hand state machine and truco betting.
//!
//! Each piece is a plain state machine with no knowledge of names, logs or
//! events. The [`Game`](crate::game::Game) drives them and reports.

pub mod hand;
pub mod trick;
pub mod truco;

pub use hand::{HandOutcome, HandPhase, HandState, HAND_SIZE, TRICKS_PER_HAND, TRICKS_TO_WIN};
pub use trick::{resolve_trick, PlayedCard, Trick, TrickOutcome, TrickResult};
pub use truco::{TrucoState, TrucoValue};
