use crate::config::GameConfig;
use crate::error::ActionError;
use crate::fingers::{is_valid_count, wrap};
use crate::player::PlayerId;

use super::{Action, GameState, check_winner};

impl GameState {
    /// Applies `action` and returns the resulting state.
    ///
    /// This never fails. An action that is not legal right now returns a state
    /// equal to `self`; use [`GameState::check`] to learn why.
    ///
    /// # Example
    ///
    /// ```
    /// use chopsticks::{Action, GameState, PlayerId};
    ///
    /// let state = GameState::default();
    /// // Tapping without selecting a hand first does nothing.
    /// let next = state.apply(&Action::Tap {
    ///     target_player: PlayerId::Two,
    ///     target_hand_index: 0,
    /// });
    /// assert_eq!(next, state);
    /// ```
    #[must_use]
    pub fn apply(&self, action: &Action) -> Self {
        match self.check(action) {
            Ok(next) => {
                log::trace!("applied {action:?}");
                if self.winner.is_none() {
                    if let Some(winner) = next.winner {
                        log::debug!("player {} wins", winner.number());
                    }
                }
                next
            }
            Err(err) => {
                log::debug!("rejected {action:?}: {err}");
                self.clone()
            }
        }
    }

    /// Applies `action`, reporting why it was rejected instead of ignoring it.
    ///
    /// # Errors
    ///
    /// Returns the first rule `action` breaks in the current state.
    pub fn check(&self, action: &Action) -> Result<Self, ActionError> {
        match action {
            Action::SelectHand { hand_index } => self.try_select_hand(*hand_index),
            Action::Tap {
                target_player,
                target_hand_index,
            } => self.try_tap(*target_player, *target_hand_index),
            Action::Split { distribution } => self.try_split(distribution),
            Action::Reset => Ok(Self::default()),
            Action::Configure(config) => Ok(Self::new(config)?),
        }
    }

    /// Selects the current player's attacking hand.
    #[must_use]
    pub fn select_hand(&self, hand_index: usize) -> Self {
        self.apply(&Action::SelectHand { hand_index })
    }

    /// Taps an opponent hand with the selected hand.
    #[must_use]
    pub fn tap(&self, target_player: PlayerId, target_hand_index: usize) -> Self {
        self.apply(&Action::Tap {
            target_player,
            target_hand_index,
        })
    }

    /// Redistributes the current player's fingers.
    #[must_use]
    pub fn split(&self, distribution: &[u8]) -> Self {
        self.apply(&Action::Split {
            distribution: distribution.to_vec(),
        })
    }

    /// Starts a new game with `config`, or does nothing if it is invalid.
    #[must_use]
    pub fn configure(&self, config: GameConfig) -> Self {
        self.apply(&Action::Configure(config))
    }

    /// Returns the default opening state.
    #[must_use]
    pub fn reset(&self) -> Self {
        self.apply(&Action::Reset)
    }

    const fn ensure_in_progress(&self) -> Result<(), ActionError> {
        if self.winner.is_some() {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    fn try_select_hand(&self, hand_index: usize) -> Result<Self, ActionError> {
        self.ensure_in_progress()?;

        let fingers = self
            .current_player()
            .fingers(hand_index)
            .ok_or(ActionError::HandNotFound)?;
        if fingers == 0 {
            return Err(ActionError::HandEmpty);
        }

        Ok(Self {
            selected_hand_index: Some(hand_index),
            ..self.clone()
        })
    }

    fn try_tap(
        &self,
        target_player: PlayerId,
        target_hand_index: usize,
    ) -> Result<Self, ActionError> {
        self.ensure_in_progress()?;

        let selected = self.selected_hand_index.ok_or(ActionError::NoHandSelected)?;
        if target_player == self.current_turn {
            return Err(ActionError::SelfTap);
        }

        let attacking = self
            .current_player()
            .fingers(selected)
            .ok_or(ActionError::HandNotFound)?;
        if attacking == 0 {
            return Err(ActionError::HandEmpty);
        }

        let target = self.player(target_player);
        let target_fingers = target
            .fingers(target_hand_index)
            .ok_or(ActionError::HandNotFound)?;
        if target_fingers == 0 {
            return Err(ActionError::TargetHandEmpty);
        }

        let landed = wrap(target_fingers.saturating_add(attacking));
        let hit = target.with_hand(target_hand_index, landed);
        Ok(self.with_player(target_player, hit).end_turn())
    }

    fn try_split(&self, distribution: &[u8]) -> Result<Self, ActionError> {
        self.ensure_in_progress()?;

        let player = self.current_player();
        if distribution.len() != player.number_of_hands() {
            return Err(ActionError::SplitLengthMismatch {
                expected: player.number_of_hands(),
                got: distribution.len(),
            });
        }
        if let Some(&bad) = distribution.iter().find(|&&h| !is_valid_count(h)) {
            return Err(ActionError::SplitFingersOutOfRange(bad));
        }

        let expected = player.total_fingers();
        let got = distribution.iter().map(|&h| u32::from(h)).sum();
        if got != expected {
            return Err(ActionError::SplitTotalMismatch { expected, got });
        }
        if distribution == player.hands() {
            return Err(ActionError::SplitUnchanged);
        }

        let redistributed = player.with_hands(distribution);
        Ok(self.with_player(self.current_turn, redistributed).end_turn())
    }

    /// Passes the turn, clears the selection and settles the winner.
    fn end_turn(mut self) -> Self {
        self.current_turn = self.current_turn.other();
        self.selected_hand_index = None;
        self.winner = check_winner(&self);
        self
    }
}
