use alloc::vec::Vec;

use crate::fingers::MAX_FINGERS;

use super::{Action, GameState};

impl GameState {
    /// Returns every action the current player may take right now.
    ///
    /// Hand selections come first, then taps for the selected hand (if any),
    /// then splits. [`Action::Reset`] and [`Action::Configure`] are always
    /// available and not listed. A finished game has no legal actions.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }

        let mut actions: Vec<Action> = live_hands(self.current_player().hands())
            .map(|hand_index| Action::SelectHand { hand_index })
            .collect();

        if self.selected_hand_index.is_some() {
            let target_player = self.current_turn.other();
            actions.extend(
                live_hands(self.opponent().hands()).map(|target_hand_index| Action::Tap {
                    target_player,
                    target_hand_index,
                }),
            );
        }

        actions.extend(
            self.legal_splits()
                .into_iter()
                .map(|distribution| Action::Split { distribution }),
        );

        actions
    }

    /// Returns every distribution the current player may split into.
    #[must_use]
    pub fn legal_splits(&self) -> Vec<Vec<u8>> {
        if self.is_terminal() {
            return Vec::new();
        }

        let player = self.current_player();
        let mut out = Vec::new();
        let mut current = Vec::with_capacity(player.number_of_hands());
        fill(
            player.number_of_hands(),
            player.total_fingers(),
            &mut current,
            &mut out,
        );
        out.retain(|dist| dist.as_slice() != player.hands());
        out
    }
}

fn live_hands(hands: &[u8]) -> impl Iterator<Item = usize> + '_ {
    hands
        .iter()
        .enumerate()
        .filter(|&(_, &fingers)| fingers > 0)
        .map(|(index, _)| index)
}

/// Pushes every way of spreading `total` over `remaining` more hands.
fn fill(remaining: usize, total: u32, current: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
    if remaining == 0 {
        if total == 0 {
            out.push(current.clone());
        }
        return;
    }

    let cap = u32::from(MAX_FINGERS);
    if total > cap * remaining as u32 {
        return;
    }

    for fingers in 0..=cap.min(total) {
        current.push(fingers as u8);
        fill(remaining - 1, total - fingers, current, out);
        current.pop();
    }
}
