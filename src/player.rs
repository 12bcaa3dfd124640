//! Player identities and hand sets.

use alloc::vec;
use alloc::vec::Vec;

use crate::config::{MAX_HANDS, MIN_HANDS};
use crate::error::{ConfigError, InvalidPlayerId, StateError};
use crate::fingers::{MAX_FINGERS, STARTING_FINGERS, is_valid_count};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    /// Player 1, who moves first.
    One,
    /// Player 2.
    Two,
}

impl PlayerId {
    /// Returns the other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns the player's number, 1 or 2.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(InvalidPlayerId(other)),
        }
    }
}

/// A player's hands.
///
/// Each hand holds `0..=4` fingers. A hand with zero fingers is out but keeps
/// its index, so hand indices stay stable for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPlayer")
)]
pub struct Player {
    id: PlayerId,
    hands: Vec<u8>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPlayer {
    id: PlayerId,
    hands: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPlayer> for Player {
    type Error = StateError;

    fn try_from(raw: RawPlayer) -> Result<Self, Self::Error> {
        Self::from_hands(raw.id, raw.hands)
    }
}

impl Player {
    /// Creates a player with `number_of_hands` hands holding one finger each.
    ///
    /// The count must already be within `1..=5`.
    #[must_use]
    pub(crate) fn new(id: PlayerId, number_of_hands: usize) -> Self {
        Self {
            id,
            hands: vec![STARTING_FINGERS; number_of_hands],
        }
    }

    /// Creates a player holding exactly `hands`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::HandCount`] if there are not `1..=5` hands and
    /// [`StateError::FingersOutOfRange`] for the first hand above four.
    ///
    /// ```
    /// use chopsticks::{Player, PlayerId};
    ///
    /// let player = Player::from_hands(PlayerId::Two, vec![0, 3]).unwrap();
    /// assert_eq!(player.active_hands(), 1);
    /// assert!(Player::from_hands(PlayerId::Two, vec![0, 5]).is_err());
    /// ```
    pub fn from_hands(id: PlayerId, hands: Vec<u8>) -> Result<Self, StateError> {
        let count = hands.len();
        if !(MIN_HANDS..=MAX_HANDS).contains(&count) {
            return Err(ConfigError::HandCountOutOfRange { player: id, count }.into());
        }
        let bad = hands.iter().enumerate().find(|&(_, &h)| !is_valid_count(h));
        if let Some((index, &fingers)) = bad {
            return Err(StateError::FingersOutOfRange {
                player: id,
                index,
                fingers,
            });
        }
        Ok(Self { id, hands })
    }

    /// Returns the player's identity.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the finger count of every hand, in hand order.
    #[must_use]
    pub fn hands(&self) -> &[u8] {
        &self.hands
    }

    /// Returns the number of hands, live or not.
    #[must_use]
    pub fn number_of_hands(&self) -> usize {
        self.hands.len()
    }

    /// Returns the finger count of the hand at `index`.
    #[must_use]
    pub fn fingers(&self, index: usize) -> Option<u8> {
        self.hands.get(index).copied()
    }

    /// Returns the sum of all finger counts.
    #[must_use]
    pub fn total_fingers(&self) -> u32 {
        self.hands.iter().map(|&h| u32::from(h)).sum()
    }

    /// Returns the number of hands still in play.
    #[must_use]
    pub fn active_hands(&self) -> usize {
        self.hands.iter().filter(|&&h| h > 0).count()
    }

    /// Returns whether every hand is out.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.hands.iter().all(|&h| h == 0)
    }

    /// Returns whether redistributing fingers is worth offering.
    ///
    /// A single finger cannot be split, so at least two are required.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.total_fingers() > 1 && self.active_hands() >= 1
    }

    /// Proposes a split for this player.
    ///
    /// The first dead hand is refilled with half of the first hand holding more
    /// than one finger. Without such a pair the fingers are spread as evenly as
    /// possible, earlier hands taking the remainder. Returns `None` when the
    /// proposal would not change anything.
    ///
    /// ```
    /// use chopsticks::{Player, PlayerId};
    ///
    /// let player = Player::from_hands(PlayerId::One, vec![0, 3]).unwrap();
    /// assert_eq!(player.suggested_split(), Some(vec![1, 2]));
    /// ```
    #[must_use]
    pub fn suggested_split(&self) -> Option<Vec<u8>> {
        if self.total_fingers() <= 1 {
            return None;
        }

        let dead = self.hands.iter().position(|&h| h == 0);
        let donor = self.hands.iter().position(|&h| h > 1);
        let proposal = if let (Some(dead), Some(donor)) = (dead, donor) {
            let mut dist = self.hands.clone();
            let transfer = dist[donor] / 2;
            dist[dead] = transfer;
            dist[donor] -= transfer;
            dist
        } else {
            self.even_distribution()
        };

        (proposal != self.hands && proposal.iter().all(|&h| h <= MAX_FINGERS)).then_some(proposal)
    }

    fn even_distribution(&self) -> Vec<u8> {
        let count = self.hands.len() as u32;
        let total = self.total_fingers();
        let avg = total / count;
        let remainder = total % count;
        (0..count)
            .map(|i| (avg + u32::from(i < remainder)) as u8)
            .collect()
    }

    /// Returns a copy of this player with the hand at `index` set to `fingers`.
    ///
    /// An out-of-range index leaves the copy unchanged.
    #[must_use]
    pub(crate) fn with_hand(&self, index: usize, fingers: u8) -> Self {
        let mut next = self.clone();
        if let Some(hand) = next.hands.get_mut(index) {
            *hand = fingers;
        }
        next
    }

    /// Returns a copy of this player holding `hands` instead.
    ///
    /// `hands` must already have passed the split checks.
    #[must_use]
    pub(crate) fn with_hands(&self, hands: &[u8]) -> Self {
        Self {
            id: self.id,
            hands: hands.to_vec(),
        }
    }
}
