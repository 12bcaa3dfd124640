use chopsticks::{Action, GameConfig, GameState, Player, PlayerId, SkinTheme};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
    skin_theme: SkinTheme,
    last_rejection: Option<String>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: GameState::default(),
            skin_theme: SkinTheme::Default,
            last_rejection: None,
        }
    }

    pub fn reset(&mut self) {
        self.dispatch(&Action::Reset);
        self.skin_theme = SkinTheme::Default;
    }

    pub fn configure(&mut self, player1_hands: u32, player2_hands: u32, skin_theme: &str) -> bool {
        let skin_theme = skin_from_str(skin_theme);
        let config = GameConfig::default()
            .with_player1_hands(player1_hands as usize)
            .with_player2_hands(player2_hands as usize)
            .with_skin_theme(skin_theme);
        let accepted = self.dispatch(&Action::Configure(config));
        if accepted {
            self.skin_theme = skin_theme;
        }
        accepted
    }

    pub fn select_hand(&mut self, hand_index: u32) -> bool {
        self.dispatch(&Action::SelectHand {
            hand_index: hand_index as usize,
        })
    }

    pub fn tap(&mut self, target_player: u8, target_hand_index: u32) -> bool {
        let target_player = match PlayerId::try_from(target_player) {
            Ok(id) => id,
            Err(err) => {
                self.last_rejection = Some(err.to_string());
                return false;
            }
        };
        self.dispatch(&Action::Tap {
            target_player,
            target_hand_index: target_hand_index as usize,
        })
    }

    pub fn split(&mut self, distribution: Vec<u8>) -> bool {
        self.dispatch(&Action::Split { distribution })
    }

    pub fn suggested_split(&self) -> Option<Vec<u8>> {
        if self.state.is_terminal() {
            return None;
        }
        self.state.current_player().suggested_split()
    }

    pub fn last_rejection(&self) -> Option<String> {
        self.last_rejection.clone()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            player1: JsPlayer::from(self.state.player1()),
            player2: JsPlayer::from(self.state.player2()),
            current_turn: self.state.current_turn().number(),
            selected_hand_index: self.state.selected_hand_index().map(|i| i as u32),
            winner: self.state.winner().map(PlayerId::number),
            skin_theme: skin_to_str(self.skin_theme),
        };

        to_js_value(&snapshot)
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmGame {
    /// Applies `action`, remembering why it was ignored if it was.
    fn dispatch(&mut self, action: &Action) -> bool {
        match self.state.check(action) {
            Ok(next) => {
                self.state = next;
                self.last_rejection = None;
                true
            }
            Err(err) => {
                self.last_rejection = Some(err.to_string());
                false
            }
        }
    }
}

#[derive(Serialize)]
struct Snapshot {
    player1: JsPlayer,
    player2: JsPlayer,
    current_turn: u8,
    selected_hand_index: Option<u32>,
    winner: Option<u8>,
    skin_theme: &'static str,
}

#[derive(Serialize)]
struct JsPlayer {
    id: u8,
    hands: Vec<u8>,
    number_of_hands: u32,
    total_fingers: u32,
    can_split: bool,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().number(),
            hands: player.hands().to_vec(),
            number_of_hands: player.number_of_hands() as u32,
            total_fingers: player.total_fingers(),
            can_split: player.can_split(),
        }
    }
}

fn skin_from_str(value: &str) -> SkinTheme {
    match value {
        "claw" => SkinTheme::Claw,
        "cartoon" => SkinTheme::Cartoon,
        _ => SkinTheme::Default,
    }
}

fn skin_to_str(theme: SkinTheme) -> &'static str {
    match theme {
        SkinTheme::Claw => "claw",
        SkinTheme::Cartoon => "cartoon",
        _ => "default",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
