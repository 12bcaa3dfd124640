//! Game configuration.

use crate::error::ConfigError;
use crate::player::PlayerId;

/// Fewest hands a player can be configured with.
pub const MIN_HANDS: usize = 1;

/// Most hands a player can be configured with.
pub const MAX_HANDS: usize = 5;

/// Cosmetic hand style. The rules never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[non_exhaustive]
pub enum SkinTheme {
    /// Plain hand images.
    #[default]
    Default,
    /// Claw-shaped hand images.
    Claw,
    /// Cartoon hands with the finger count drawn as a number.
    Cartoon,
}

/// Configuration for a game of Chopsticks.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use chopsticks::{GameConfig, SkinTheme};
///
/// let config = GameConfig::default()
///     .with_player1_hands(3)
///     .with_player2_hands(4)
///     .with_skin_theme(SkinTheme::Claw);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of hands for player 1.
    pub player1_hands: usize,
    /// Number of hands for player 2.
    pub player2_hands: usize,
    /// Hand style used by the presentation layer.
    pub skin_theme: SkinTheme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1_hands: 2,
            player2_hands: 2,
            skin_theme: SkinTheme::Default,
        }
    }
}

impl GameConfig {
    /// Creates a configuration with both hand counts clamped into `1..=5`.
    ///
    /// # Example
    ///
    /// ```
    /// use chopsticks::GameConfig;
    ///
    /// let config = GameConfig::clamped(0, 9);
    /// assert_eq!(config.player1_hands, 1);
    /// assert_eq!(config.player2_hands, 5);
    /// ```
    #[must_use]
    pub fn clamped(player1_hands: usize, player2_hands: usize) -> Self {
        Self {
            player1_hands: player1_hands.clamp(MIN_HANDS, MAX_HANDS),
            player2_hands: player2_hands.clamp(MIN_HANDS, MAX_HANDS),
            skin_theme: SkinTheme::Default,
        }
    }

    /// Sets the number of hands for player 1.
    ///
    /// The value is not checked here; see [`GameConfig::validate`].
    #[must_use]
    pub const fn with_player1_hands(mut self, hands: usize) -> Self {
        self.player1_hands = hands;
        self
    }

    /// Sets the number of hands for player 2.
    ///
    /// The value is not checked here; see [`GameConfig::validate`].
    #[must_use]
    pub const fn with_player2_hands(mut self, hands: usize) -> Self {
        self.player2_hands = hands;
        self
    }

    /// Sets the hand style.
    ///
    /// # Example
    ///
    /// ```
    /// use chopsticks::{GameConfig, SkinTheme};
    ///
    /// let config = GameConfig::default().with_skin_theme(SkinTheme::Cartoon);
    /// assert_eq!(config.skin_theme, SkinTheme::Cartoon);
    /// ```
    #[must_use]
    pub const fn with_skin_theme(mut self, theme: SkinTheme) -> Self {
        self.skin_theme = theme;
        self
    }

    /// Returns the configured hand count for `player`.
    #[must_use]
    pub const fn hands_for(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::One => self.player1_hands,
            PlayerId::Two => self.player2_hands,
        }
    }

    /// Checks that both hand counts are within `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HandCountOutOfRange`] for the first player whose
    /// hand count is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for player in [PlayerId::One, PlayerId::Two] {
            let count = self.hands_for(player);
            if !(MIN_HANDS..=MAX_HANDS).contains(&count) {
                return Err(ConfigError::HandCountOutOfRange { player, count });
            }
        }
        Ok(())
    }
}
