// src/app/mod.rs
//! 表示側 (JavaScript) とつなぐ窓口をまとめるモジュールだよ！

pub mod game_app;
pub mod state_getter;

pub use game_app::GameApp;
