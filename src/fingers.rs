//! Finger arithmetic.

/// Largest finger count a live hand can hold.
pub const MAX_FINGERS: u8 = 4;

/// Finger total at which a hand is knocked out.
pub const WRAP_AT: u8 = 5;

/// Finger count every hand starts a game with.
pub const STARTING_FINGERS: u8 = 1;

/// Maps a finger total back into `0..=4`.
///
/// Exactly five knocks the hand out; anything above wraps around.
///
/// ```
/// use chopsticks::wrap;
///
/// assert_eq!(wrap(3), 3);
/// assert_eq!(wrap(5), 0);
/// assert_eq!(wrap(6), 1);
/// assert_eq!(wrap(8), 3);
/// ```
#[must_use]
pub const fn wrap(total: u8) -> u8 {
    total % WRAP_AT
}

/// Returns whether `fingers` is a count a hand can hold.
#[must_use]
pub const fn is_valid_count(fingers: u8) -> bool {
    fingers <= MAX_FINGERS
}
