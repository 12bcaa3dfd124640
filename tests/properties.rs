//! Property tests over arbitrary action sequences.

use chopsticks::{Action, GameConfig, GameState, MAX_FINGERS, PlayerId, wrap};
use proptest::prelude::*;

fn player_id() -> impl Strategy<Value = PlayerId> {
    prop_oneof![Just(PlayerId::One), Just(PlayerId::Two)]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..6).prop_map(|hand_index| Action::SelectHand { hand_index }),
        4 => (player_id(), 0usize..6).prop_map(|(target_player, target_hand_index)| {
            Action::Tap {
                target_player,
                target_hand_index,
            }
        }),
        2 => prop::collection::vec(0u8..=5, 1..=5)
            .prop_map(|distribution| Action::Split { distribution }),
    ]
}

fn assert_well_formed(state: &GameState, hands: (usize, usize)) {
    assert_eq!(state.hands_per_player(), hands);
    for id in [PlayerId::One, PlayerId::Two] {
        assert!(state.player(id).hands().iter().all(|&h| h <= MAX_FINGERS));
    }
    if let Some(index) = state.selected_hand_index() {
        assert!(state.current_player().fingers(index).unwrap_or(0) > 0);
    }
    let expected_winner = if state.player1().is_eliminated() {
        Some(PlayerId::Two)
    } else if state.player2().is_eliminated() {
        Some(PlayerId::One)
    } else {
        None
    };
    assert_eq!(state.winner(), expected_winner);
}

#[test]
fn wrap_stays_in_range() {
    for current in 1..=MAX_FINGERS {
        for added in 1..=MAX_FINGERS {
            let total = current + added;
            assert!(wrap(total) <= MAX_FINGERS);
            assert_eq!(wrap(total), total % 5);
        }
    }
}

proptest! {
    #[test]
    fn transitions_keep_invariants(
        p1 in 1usize..=5,
        p2 in 1usize..=5,
        actions in prop::collection::vec(action(), 0..80),
    ) {
        let config = GameConfig::default().with_player1_hands(p1).with_player2_hands(p2);
        let mut state = GameState::new(&config).unwrap();

        for action in &actions {
            let next = state.apply(action);
            let accepted = state.check(action).is_ok();
            assert_well_formed(&next, (p1, p2));

            if !accepted {
                prop_assert_eq!(&next, &state);
            }

            match action {
                Action::Tap { target_player, .. } => {
                    if *target_player == state.current_turn() {
                        prop_assert_eq!(&next, &state);
                    }
                    if accepted {
                        prop_assert_eq!(next.current_turn(), state.current_turn().other());
                        prop_assert_eq!(next.selected_hand_index(), None);
                        prop_assert_eq!(next.player(state.current_turn()), state.current_player());
                    } else {
                        prop_assert_eq!(next.current_turn(), state.current_turn());
                    }
                }
                Action::Split { distribution } => {
                    if accepted {
                        let before = state.current_player();
                        let after = next.player(state.current_turn());
                        prop_assert_eq!(after.total_fingers(), before.total_fingers());
                        prop_assert_ne!(after.hands(), before.hands());
                        prop_assert_eq!(after.hands(), distribution.as_slice());
                        prop_assert_eq!(next.current_turn(), state.current_turn().other());
                        prop_assert_eq!(next.player(state.current_turn().other()), state.opponent());
                    } else {
                        prop_assert_eq!(next.current_turn(), state.current_turn());
                    }
                }
                Action::SelectHand { .. } => {
                    prop_assert_eq!(next.current_turn(), state.current_turn());
                    prop_assert_eq!(next.player1(), state.player1());
                    prop_assert_eq!(next.player2(), state.player2());
                }
                Action::Reset | Action::Configure(_) => {}
            }

            if state.is_terminal() {
                prop_assert!(!accepted);
                prop_assert_eq!(&next, &state);
            }

            state = next;
        }
    }

    #[test]
    fn out_of_range_configuration_is_ignored(
        p1 in 0usize..10,
        p2 in 0usize..10,
    ) {
        let start = GameState::default().select_hand(1);
        let config = GameConfig::default().with_player1_hands(p1).with_player2_hands(p2);
        let next = start.configure(config);
        let valid = (1..=5).contains(&p1) && (1..=5).contains(&p2);

        if valid {
            prop_assert_eq!(next.hands_per_player(), (p1, p2));
            prop_assert_eq!(next.selected_hand_index(), None);
        } else {
            prop_assert_eq!(&next, &start);
        }

        let clamped = start.configure(GameConfig::clamped(p1, p2));
        prop_assert_eq!(clamped.hands_per_player(), (p1.clamp(1, 5), p2.clamp(1, 5)));
    }
}
