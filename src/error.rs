//! Error types for rejected actions and invalid configuration.
//!
//! The action API itself never returns these: a rejected action is a no-op.
//! They are produced by [`GameState::check`](crate::GameState::check) and
//! [`GameConfig::validate`](crate::GameConfig::validate) so hosts can tell a
//! player why nothing happened. [`StateError`] guards the constructors that
//! build a state from loose parts, such as a saved snapshot.

use thiserror::Error;

use crate::player::PlayerId;

/// Errors that can occur when validating a game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A player's hand count is outside the supported range.
    #[error("player {} hand count {count} is outside 1..=5", .player.number())]
    HandCountOutOfRange {
        /// The player whose hand count is invalid.
        player: PlayerId,
        /// The rejected hand count.
        count: usize,
    },
}

/// Reasons an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game already has a winner.
    #[error("the game is over")]
    GameOver,
    /// The hand index does not address a hand of that player.
    #[error("hand not found")]
    HandNotFound,
    /// The hand has no fingers and cannot be used.
    #[error("hand is empty")]
    HandEmpty,
    /// A tap was attempted before selecting an attacking hand.
    #[error("no attacking hand selected")]
    NoHandSelected,
    /// The current player tried to tap one of their own hands.
    #[error("cannot tap your own hand")]
    SelfTap,
    /// The targeted hand is already out.
    #[error("target hand is empty")]
    TargetHandEmpty,
    /// The split distribution has the wrong number of hands.
    #[error("split has {got} hands, expected {expected}")]
    SplitLengthMismatch {
        /// Number of hands the player has.
        expected: usize,
        /// Number of entries in the distribution.
        got: usize,
    },
    /// A split entry exceeds the maximum finger count.
    #[error("split entry {0} is outside 0..=4")]
    SplitFingersOutOfRange(u8),
    /// The split does not preserve the player's finger total.
    #[error("split totals {got} fingers, expected {expected}")]
    SplitTotalMismatch {
        /// The player's current finger total.
        expected: u32,
        /// The distribution's finger total.
        got: u32,
    },
    /// The split is identical to the current hands.
    #[error("split does not change any hand")]
    SplitUnchanged,
    /// The configuration is invalid.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// Reasons a player or state built from loose parts was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// A player has too few or too many hands.
    #[error(transparent)]
    HandCount(#[from] ConfigError),
    /// A hand holds more fingers than the game allows.
    #[error("player {} hand {index} holds {fingers} fingers, more than 4", .player.number())]
    FingersOutOfRange {
        /// The player holding the hand.
        player: PlayerId,
        /// Index of the offending hand.
        index: usize,
        /// The stored finger count.
        fingers: u8,
    },
    /// A player was stored in the other player's seat.
    #[error("player {} is stored in seat {}", .found.number(), .seat.number())]
    SeatMismatch {
        /// The seat being filled.
        seat: PlayerId,
        /// The identity of the player found there.
        found: PlayerId,
    },
    /// The selection does not point at a live hand of the player to move.
    #[error("selected hand {0} is not a live hand of the current player")]
    InvalidSelection(usize),
    /// Both players have every hand out, which no game can reach.
    #[error("both players are eliminated")]
    BothEliminated,
    /// The recorded winner disagrees with the hands.
    #[error("recorded winner does not match the hands")]
    WinnerMismatch,
}

/// A player number other than 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid player id {0}, expected 1 or 2")]
pub struct InvalidPlayerId(pub u8);
