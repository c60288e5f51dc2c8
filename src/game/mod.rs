//! The match driver and its snapshots.
//!
//! ## Key Types
//!
//! - `Game`: owns all state, accepts commands, returns events
//! - `GameSnapshot`: owned, serializable view for rendering

#[allow(clippy::module_inception)]
mod game;
mod snapshot;

pub use game::Game;
pub use snapshot::{GameSnapshot, HandView, PlayerView, TrucoView};
