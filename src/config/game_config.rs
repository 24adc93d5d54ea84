// src/config/game_config.rs
//! ホストページから渡されるゲーム設定だよ。

use serde::{Deserialize, Serialize};

use crate::components::layout::Layout;
use crate::error::ConfigError;
use crate::systems::deal_system::{new_game, new_game_with_seed};

/// ゲーム設定。今はシードだけ！
///
/// `seed` を指定すると毎回同じ配り方になる（デバッグや再現用）。
/// 指定しなければ OS の乱数で配る。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seed: Option<u64>,
}

impl GameConfig {
    /// JSON 文字列から設定を読む。空のオブジェクト `{}` ならデフォルト。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// この設定で新しいゲームを配る。
    pub fn deal(&self) -> Layout {
        match self.seed {
            Some(seed) => new_game_with_seed(seed),
            None => new_game(),
        }
    }
}
