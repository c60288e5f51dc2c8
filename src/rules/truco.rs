//! Truco bet negotiation.
//!
//! ```text
//! Idle --call--> Called(3) --accept--> Accepted (bet active, no response pending)
//!                    |  \--deny----> hand ends, caller scores value - 2
//!                    \--raise--> Called(6 | 9 | 12)
//! ```
//!
//! The ladder is `1 -> 3 -> 6 -> 9 -> 12`. Only the seat that is not the
//! current caller may raise. All refusals are reported as a [`Rejection`]
//! and leave the state unchanged.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Rejection};

/// Points a hand is worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrucoValue {
    One,
    Three,
    Six,
    Nine,
    Twelve,
}

impl TrucoValue {
    /// Match points awarded for winning the hand.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            TrucoValue::One => 1,
            TrucoValue::Three => 3,
            TrucoValue::Six => 6,
            TrucoValue::Nine => 9,
            TrucoValue::Twelve => 12,
        }
    }

    /// The next ladder step, or `None` at 12.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            TrucoValue::One => Some(TrucoValue::Three),
            TrucoValue::Three => Some(TrucoValue::Six),
            TrucoValue::Six => Some(TrucoValue::Nine),
            TrucoValue::Nine => Some(TrucoValue::Twelve),
            TrucoValue::Twelve => None,
        }
    }

    /// Points the caller gets when this bet is refused.
    #[must_use]
    pub const fn denied_points(self) -> u32 {
        self.points().saturating_sub(2)
    }
}

impl std::fmt::Display for TrucoValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Bet state for one hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrucoState {
    value: TrucoValue,
    caller: Option<PlayerId>,
    active: bool,
    pending_response: bool,
}

impl Default for TrucoState {
    fn default() -> Self {
        Self {
            value: TrucoValue::One,
            caller: None,
            active: false,
            pending_response: false,
        }
    }
}

impl TrucoState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> TrucoValue {
        self.value
    }

    /// Seat that made the latest call or raise.
    #[must_use]
    pub fn caller(&self) -> Option<PlayerId> {
        self.caller
    }

    /// Whether truco has been called this hand.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a call or raise awaits an answer. Card play is blocked meanwhile.
    #[must_use]
    pub fn pending_response(&self) -> bool {
        self.pending_response
    }

    /// Points the hand is currently worth.
    #[must_use]
    pub fn hand_value(&self) -> u32 {
        self.value.points()
    }

    /// Whether `player` may raise right now.
    #[must_use]
    pub fn can_raise(&self, player: PlayerId) -> bool {
        self.active && self.caller != Some(player) && self.value.next().is_some()
    }

    /// Ask for truco. Only valid before any call this hand.
    pub fn call(&mut self, by: PlayerId) -> Result<TrucoValue, Rejection> {
        if self.active {
            return Err(Rejection::TrucoAlreadyCalled);
        }
        self.active = true;
        self.pending_response = true;
        self.caller = Some(by);
        self.value = TrucoValue::Three;
        Ok(self.value)
    }

    /// Accept the pending call; the bet stands at its current value.
    pub fn accept(&mut self) -> Result<TrucoValue, Rejection> {
        if !self.pending_response {
            return Err(Rejection::NoPendingTruco);
        }
        self.pending_response = false;
        Ok(self.value)
    }

    /// Refuse the pending call.
    ///
    /// Returns the caller and the points they are owed. The state itself is
    /// left as-is; the hand ends and a fresh `TrucoState` replaces it.
    pub fn deny(&self) -> Result<(PlayerId, u32), Rejection> {
        match (self.pending_response, self.caller) {
            (true, Some(caller)) => Ok((caller, self.value.denied_points())),
            _ => Err(Rejection::NoPendingTruco),
        }
    }

    /// Raise one ladder step. The raiser becomes the caller.
    pub fn raise(&mut self, by: PlayerId) -> Result<TrucoValue, Rejection> {
        if !self.active {
            return Err(Rejection::NoTrucoToRaise);
        }
        if self.caller == Some(by) {
            return Err(Rejection::SelfRaise);
        }
        let next = self.value.next().ok_or(Rejection::TrucoAtMaximum)?;

        self.value = next;
        self.caller = Some(by);
        self.pending_response = true;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::FIRST;
    const P1: PlayerId = PlayerId::SECOND;

    #[test]
    fn test_ladder() {
        let steps: Vec<u32> = std::iter::successors(Some(TrucoValue::One), |v| v.next())
            .map(TrucoValue::points)
            .collect();
        assert_eq!(steps, vec![1, 3, 6, 9, 12]);
        assert_eq!(TrucoValue::Three.denied_points(), 1);
    }

    #[test]
    fn test_call() {
        let mut truco = TrucoState::new();
        assert_eq!(truco.hand_value(), 1);

        assert_eq!(truco.call(P0), Ok(TrucoValue::Three));
        assert!(truco.is_active());
        assert!(truco.pending_response());
        assert_eq!(truco.caller(), Some(P0));

        let before = truco.clone();
        assert_eq!(truco.call(P1), Err(Rejection::TrucoAlreadyCalled));
        assert_eq!(truco, before);
    }

    #[test]
    fn test_accept() {
        let mut truco = TrucoState::new();
        assert_eq!(truco.accept(), Err(Rejection::NoPendingTruco));

        truco.call(P0).unwrap();
        assert_eq!(truco.accept(), Ok(TrucoValue::Three));
        assert!(!truco.pending_response());
        assert!(truco.is_active());
        assert_eq!(truco.hand_value(), 3);
    }

    #[test]
    fn test_deny() {
        let mut truco = TrucoState::new();
        assert_eq!(truco.deny(), Err(Rejection::NoPendingTruco));

        truco.call(P1).unwrap();
        assert_eq!(truco.deny(), Ok((P1, 1)));
    }

    #[test]
    fn test_raise_to_twelve() {
        let mut truco = TrucoState::new();
        truco.call(P0).unwrap();

        assert_eq!(truco.raise(P1), Ok(TrucoValue::Six));
        assert_eq!(truco.raise(P0), Ok(TrucoValue::Nine));
        assert_eq!(truco.raise(P1), Ok(TrucoValue::Twelve));
        assert_eq!(truco.caller(), Some(P1));

        assert!(!truco.can_raise(P0));
        assert_eq!(truco.raise(P0), Err(Rejection::TrucoAtMaximum));
        assert_eq!(truco.value(), TrucoValue::Twelve);
    }

    #[test]
    fn test_self_raise_rejected() {
        let mut truco = TrucoState::new();
        truco.call(P0).unwrap();

        let before = truco.clone();
        assert_eq!(truco.raise(P0), Err(Rejection::SelfRaise));
        assert_eq!(truco, before);
    }

    #[test]
    fn test_raise_needs_active_truco() {
        let mut truco = TrucoState::new();
        assert_eq!(truco.raise(P0), Err(Rejection::NoTrucoToRaise));
        assert_eq!(truco.value(), TrucoValue::One);
    }

    #[test]
    fn test_raise_after_accept() {
        let mut truco = TrucoState::new();
        truco.call(P0).unwrap();
        truco.accept().unwrap();

        assert!(truco.can_raise(P1));
        assert_eq!(truco.raise(P1), Ok(TrucoValue::Six));
        assert!(truco.pending_response());
    }
}
