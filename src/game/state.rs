//! Game state type.

use crate::config::GameConfig;
use crate::error::{ConfigError, StateError};
use crate::player::{Player, PlayerId};

use super::check_winner;

/// A complete snapshot of a game.
///
/// States are values: transitions build a new state and leave the old one
/// alone, so comparing two states tells whether an action did anything.
///
/// With the `serde` feature a state can be saved and loaded. Loading runs the
/// same checks as [`GameState::from_parts`] and also refuses a recorded winner
/// that disagrees with the hands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGameState")
)]
pub struct GameState {
    pub(super) player1: Player,
    pub(super) player2: Player,
    pub(super) current_turn: PlayerId,
    /// Attacking hand of the current player, pending a target.
    pub(super) selected_hand_index: Option<usize>,
    pub(super) winner: Option<PlayerId>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGameState {
    player1: Player,
    player2: Player,
    current_turn: PlayerId,
    selected_hand_index: Option<usize>,
    winner: Option<PlayerId>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self::from_parts(
            raw.player1,
            raw.player2,
            raw.current_turn,
            raw.selected_hand_index,
        )?;
        if state.winner != raw.winner {
            return Err(StateError::WinnerMismatch);
        }
        Ok(state)
    }
}

impl Default for GameState {
    /// Two hands each, one finger per hand, player 1 to move.
    fn default() -> Self {
        Self::with_hands(2, 2)
    }
}

impl GameState {
    /// Creates the opening state for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if either hand count is outside `1..=5`.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_hands(config.player1_hands, config.player2_hands))
    }

    /// Assembles a state from its parts, deriving the winner from the hands.
    ///
    /// # Errors
    ///
    /// Fails if a player sits in the wrong seat, if both players are out, or
    /// if the selection is not a live hand of `current_turn` in a game still
    /// in progress.
    ///
    /// ```
    /// use chopsticks::{GameState, Player, PlayerId};
    ///
    /// let state = GameState::from_parts(
    ///     Player::from_hands(PlayerId::One, vec![2, 0]).unwrap(),
    ///     Player::from_hands(PlayerId::Two, vec![0, 0]).unwrap(),
    ///     PlayerId::Two,
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(state.winner(), Some(PlayerId::One));
    /// ```
    pub fn from_parts(
        player1: Player,
        player2: Player,
        current_turn: PlayerId,
        selected_hand_index: Option<usize>,
    ) -> Result<Self, StateError> {
        for (seat, player) in [(PlayerId::One, &player1), (PlayerId::Two, &player2)] {
            if player.id() != seat {
                return Err(StateError::SeatMismatch {
                    seat,
                    found: player.id(),
                });
            }
        }
        if player1.is_eliminated() && player2.is_eliminated() {
            return Err(StateError::BothEliminated);
        }

        let mut state = Self {
            player1,
            player2,
            current_turn,
            selected_hand_index,
            winner: None,
        };
        state.winner = check_winner(&state);

        if let Some(index) = selected_hand_index {
            let live = state.current_player().fingers(index).is_some_and(|f| f > 0);
            if !live || state.is_terminal() {
                return Err(StateError::InvalidSelection(index));
            }
        }
        Ok(state)
    }

    fn with_hands(player1_hands: usize, player2_hands: usize) -> Self {
        Self {
            player1: Player::new(PlayerId::One, player1_hands),
            player2: Player::new(PlayerId::Two, player2_hands),
            current_turn: PlayerId::One,
            selected_hand_index: None,
            winner: None,
        }
    }

    /// Returns player 1.
    #[must_use]
    pub const fn player1(&self) -> &Player {
        &self.player1
    }

    /// Returns player 2.
    #[must_use]
    pub const fn player2(&self) -> &Player {
        &self.player2
    }

    /// Returns the player with the given identity.
    #[must_use]
    pub const fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    /// Returns whose action is legal next.
    #[must_use]
    pub const fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> &Player {
        self.player(self.current_turn)
    }

    /// Returns the player waiting for their turn.
    #[must_use]
    pub const fn opponent(&self) -> &Player {
        self.player(self.current_turn.other())
    }

    /// Returns the selected attacking hand, if any.
    #[must_use]
    pub const fn selected_hand_index(&self) -> Option<usize> {
        self.selected_hand_index
    }

    /// Returns the winner, if the game is decided.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Returns whether the game has been won.
    ///
    /// Only [`Action::Reset`](super::Action::Reset) and
    /// [`Action::Configure`](super::Action::Configure) change a finished game.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the number of hands of player 1 and player 2.
    #[must_use]
    pub fn hands_per_player(&self) -> (usize, usize) {
        (
            self.player1.number_of_hands(),
            self.player2.number_of_hands(),
        )
    }

    /// Returns a copy with `player` stored in `seat`.
    pub(super) fn with_player(&self, seat: PlayerId, player: Player) -> Self {
        let (player1, player2) = match seat {
            PlayerId::One => (player, self.player2.clone()),
            PlayerId::Two => (self.player1.clone(), player),
        };
        Self {
            player1,
            player2,
            ..*self
        }
    }
}
