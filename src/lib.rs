// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;

// よく使う型と関数はクレートの直下からも使えるようにしておくよ。
pub use app::GameApp;
pub use components::card::{Card, CardColor, Rank, Suit};
pub use components::card_move::Move;
pub use components::game_state::GameStatus;
pub use components::layout::Layout;
pub use components::location::Location;
pub use components::pile::Pile;
pub use config::GameConfig;
pub use error::{ConfigError, MoveRejected, MoveResult};
pub use logic::auto_move::{auto_move, find_automatic_move};
pub use logic::deck::{create_standard_deck, shuffle_deck, shuffle_deck_with};
pub use logic::rules::{is_valid_sequence, validate_move};
pub use systems::deal_system::{deal, new_game, new_game_with_seed};
pub use systems::move_card_system::apply_move;
pub use systems::stock_system::draw;
pub use systems::win_condition_system::game_status;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
