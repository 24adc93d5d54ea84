// src/logic/mod.rs
//! デッキ操作、ルール判定、自動移動のロジック。

pub mod auto_move;
pub mod deck;
pub mod rules;
