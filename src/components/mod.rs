// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
// どれも盤面を作っている値型たち。
pub mod card;
pub mod card_move;
pub mod game_state;
pub mod layout;
pub mod location;
pub mod pile;
