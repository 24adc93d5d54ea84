// src/config/mod.rs
//! ルールの定数と、ゲーム設定をまとめるよ。

pub mod game_config;
pub mod rules;

pub use game_config::GameConfig;
