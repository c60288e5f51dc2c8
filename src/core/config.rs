//! Match configuration.
//!
//! The setup screen owns player names; the engine only consumes them once,
//! at match start. Missing or blank names fall back to "Player 1" and
//! "Player 2".
//!
//! Configuration can be built in code:
//!
//! ```
//! use truco_mineiro::core::MatchConfig;
//!
//! let config = MatchConfig::new()
//!     .with_player_names("Ana", "")
//!     .with_seed(7);
//!
//! assert_eq!(config.player_names, ["Ana".to_string(), "Player 2".to_string()]);
//! assert_eq!(config.seed, Some(7));
//! ```
//!
//! or read from the environment with [`MatchConfig::from_env`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::player::{PlayerId, SEATS};

/// Names used when the setup screen supplied none.
pub const DEFAULT_PLAYER_NAMES: [&str; SEATS] = ["Player 1", "Player 2"];

/// Points needed to win the match.
pub const DEFAULT_TARGET_SCORE: u32 = 12;

/// Environment variable holding the first seat's name.
pub const PLAYER1_NAME_VAR: &str = "TRUCO_PLAYER1_NAME";
/// Environment variable holding the second seat's name.
pub const PLAYER2_NAME_VAR: &str = "TRUCO_PLAYER2_NAME";
/// Environment variable holding the shuffle seed.
pub const SEED_VAR: &str = "TRUCO_SEED";

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Display names, indexed by seat.
    pub player_names: [String; SEATS],

    /// Shuffle seed. `None` draws one from entropy at match start.
    pub seed: Option<u64>,

    /// Score that ends the match.
    pub target_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_names: DEFAULT_PLAYER_NAMES.map(String::from),
            seed: None,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with default names, no seed and a target of 12.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both display names. Blank names keep their default.
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [
            name_or_default(Some(first.into()), PlayerId::FIRST),
            name_or_default(Some(second.into()), PlayerId::SECOND),
        ];
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the score that ends the match.
    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        assert!(target > 0, "Target score must be positive");
        self.target_score = target;
        self
    }

    /// Get a seat's display name.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.player_names[player.index()]
    }

    /// Read configuration from the process environment.
    ///
    /// See [`PLAYER1_NAME_VAR`], [`PLAYER2_NAME_VAR`] and [`SEED_VAR`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// An unparseable seed is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                warn!(value = %raw, error = %err, "Ignoring unparseable seed");
                None
            }
        });

        Self {
            player_names: [
                name_or_default(lookup(PLAYER1_NAME_VAR), PlayerId::FIRST),
                name_or_default(lookup(PLAYER2_NAME_VAR), PlayerId::SECOND),
            ],
            seed,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

fn name_or_default(name: Option<String>, seat: PlayerId) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => DEFAULT_PLAYER_NAMES[seat.index()].to_string(),
    }
}
