// src/systems/mod.rs
//! 盤面を次の盤面に進める遷移関数たちだよ。
//! どれも `&Layout` を受け取って新しい `Layout` を返す。

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;
