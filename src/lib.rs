//! A Chopsticks hand game engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] value and a closed set of [`Action`]s.
//! Every action is applied through a total transition function: an illegal
//! action never fails, it returns a state equal to the one it was given.
//!
//! # Example
//!
//! ```
//! use chopsticks::{Action, GameState, PlayerId};
//!
//! let state = GameState::default();
//! let state = state.apply(&Action::SelectHand { hand_index: 0 });
//! let state = state.apply(&Action::Tap {
//!     target_player: PlayerId::Two,
//!     target_hand_index: 0,
//! });
//!
//! assert_eq!(state.player2().hands(), &[2, 1]);
//! assert_eq!(state.current_turn(), PlayerId::Two);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod config;
pub mod error;
pub mod fingers;
pub mod game;
pub mod player;

// Re-export main types
pub use config::{GameConfig, MAX_HANDS, MIN_HANDS, SkinTheme};
pub use error::{ActionError, ConfigError, InvalidPlayerId, StateError};
pub use fingers::{MAX_FINGERS, STARTING_FINGERS, WRAP_AT, wrap};
pub use game::{Action, GameState, check_winner};
pub use player::{Player, PlayerId};
