// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! どれも盤面を読むだけの純粋な関数で、盤面を書き換えることはない。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use foundation::{can_move_to_foundation, find_foundation_for};
pub use move_validation::{is_move_valid, validate_move, ValidatedMove};
pub use stock_waste::{can_deal_from_stock, can_reset_stock_from_waste};
pub use tableau::{can_move_to_tableau, is_valid_sequence};
pub use win_condition::check_win_condition;
