// src/app/state_getter.rs
//! 今の盤面を、表示側が描画に使う JSON スナップショットに変換するよ。

use log::{debug, error};

use crate::components::layout::Layout;
use crate::protocol::GameStateData;

/// 盤面を JSON 文字列にして返します。
pub fn get_state_json(layout: &Layout) -> Result<String, String> {
    let state = GameStateData::from(layout);
    debug!("Serializing game state ({} moves)...", state.move_count);

    serde_json::to_string(&state).map_err(|e| {
        let error_msg = format!("Failed to serialize game state: {}", e);
        error!("{}", error_msg);
        error_msg
    })
}
