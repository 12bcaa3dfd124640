use alloc::vec::Vec;

use crate::config::GameConfig;
use crate::player::PlayerId;

/// Everything a host can ask the engine to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Choose the current player's attacking hand.
    SelectHand {
        /// Index into the current player's hands.
        hand_index: usize,
    },
    /// Attack an opponent hand with the selected hand.
    Tap {
        /// The player owning the target hand.
        target_player: PlayerId,
        /// Index into the target player's hands.
        target_hand_index: usize,
    },
    /// Redistribute the current player's fingers across their own hands.
    Split {
        /// New finger count for every hand, in hand order.
        distribution: Vec<u8>,
    },
    /// Start over with the default two hands each.
    Reset,
    /// Start over with the given configuration.
    Configure(GameConfig),
}
