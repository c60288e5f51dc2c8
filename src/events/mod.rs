//! What happened: structured events and the player-facing log.
//!
//! - [`GameEvent`]: machine-readable, returned from each command
//! - [`GameLog`]: human-readable text, cleared each hand

mod event;
mod log;

pub use event::GameEvent;
pub use log::GameLog;
