//! Game state and transition rules.
//!
//! A [`GameState`] is a plain value. Every [`Action`] produces a new state via
//! [`GameState::apply`]; the state it was applied to is never touched. Hosts
//! keep whichever state is current and apply one action at a time.

mod action;
mod legal;
mod rules;
pub mod state;

pub use action::Action;
pub use state::GameState;

use crate::player::PlayerId;

/// Returns the winner of `state`, if any.
///
/// A player wins once every one of the opponent's hands is out.
#[must_use]
pub fn check_winner(state: &GameState) -> Option<PlayerId> {
    if state.player1().is_eliminated() {
        return Some(PlayerId::Two);
    }
    if state.player2().is_eliminated() {
        return Some(PlayerId::One);
    }
    None
}
