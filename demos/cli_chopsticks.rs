//! CLI chopsticks example.

use std::io::{self, Write};

use chopsticks::{Action, GameConfig, GameState, Player, PlayerId};

fn main() {
    println!("Chopsticks CLI example (type 'h' for help, 'q' to quit)");

    let mut state = GameState::default();

    loop {
        print_table(&state);

        if let Some(winner) = state.winner() {
            println!("Player {} wins!", winner.number());
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    state = state.reset();
                    continue;
                }
                _ => break,
            }
        }

        println!("{}", format_actions(&state));
        let input = prompt_line(&format!("Player {}> ", state.current_turn().number()));
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default();
        let args: Vec<usize> = words.filter_map(|w| w.parse().ok()).collect();

        let actions = match (command, args.as_slice()) {
            ("s" | "select", &[hand]) => vec![Action::SelectHand { hand_index: hand }],
            ("t" | "tap", &[target]) => vec![Action::Tap {
                target_player: state.current_turn().other(),
                target_hand_index: target,
            }],
            ("a" | "attack", &[hand, target]) => vec![
                Action::SelectHand { hand_index: hand },
                Action::Tap {
                    target_player: state.current_turn().other(),
                    target_hand_index: target,
                },
            ],
            ("p" | "split", dist) if !dist.is_empty() => vec![Action::Split {
                distribution: dist.iter().map(|&h| h.min(u8::MAX as usize) as u8).collect(),
            }],
            ("auto", &[]) => match state.current_player().suggested_split() {
                Some(distribution) => vec![Action::Split { distribution }],
                None => {
                    println!("No useful split available.");
                    continue;
                }
            },
            ("c" | "configure", &[p1, p2]) => {
                vec![Action::Configure(GameConfig::clamped(p1, p2))]
            }
            ("r" | "reset", &[]) => vec![Action::Reset],
            ("h" | "help", _) => {
                print_help();
                continue;
            }
            ("q" | "quit", _) => break,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        for action in &actions {
            match state.check(action) {
                Ok(next) => state = next,
                Err(err) => {
                    println!("Nothing happened: {err}");
                    break;
                }
            }
        }
    }

    println!("Goodbye.");
}

fn print_help() {
    println!("  s <hand>          select your attacking hand");
    println!("  t <hand>          tap an opponent hand with the selected hand");
    println!("  a <hand> <target> select and tap in one go");
    println!("  p <n> <n> ...     split your fingers, one count per hand");
    println!("  auto              apply the suggested split");
    println!("  c <p1> <p2>       start over with the given hand counts (1-5)");
    println!("  r                 start over with two hands each");
    println!("  q                 quit");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!();
    for id in [PlayerId::One, PlayerId::Two] {
        let marker = if state.current_turn() == id && state.winner().is_none() {
            "*"
        } else {
            " "
        };
        let player = state.player(id);
        let selected = (state.current_turn() == id)
            .then(|| state.selected_hand_index())
            .flatten();
        println!(
            "{} Player {}: {}",
            marker,
            id.number(),
            format_hands(player, selected)
        );
    }
    println!();
}

fn format_hands(player: &Player, selected: Option<usize>) -> String {
    player
        .hands()
        .iter()
        .enumerate()
        .map(|(index, &fingers)| {
            let text = format!("[{index}:{fingers}]");
            if fingers == 0 {
                colorize(&text, "90")
            } else if selected == Some(index) {
                colorize(&text, "33")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_actions(state: &GameState) -> String {
    let legal = state.legal_actions();
    let can_tap = legal.iter().any(|a| matches!(a, Action::Tap { .. }));
    let can_split = legal.iter().any(|a| matches!(a, Action::Split { .. }));

    let parts = [
        format_action("select", "s", !legal.is_empty()),
        format_action("tap", "t", can_tap),
        format_action("attack", "a", !legal.is_empty()),
        format_action("split", "p", can_split),
        format_action("auto", "auto", state.current_player().suggested_split().is_some()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
