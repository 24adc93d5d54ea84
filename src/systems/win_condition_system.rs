// src/systems/win_condition_system.rs

use crate::components::game_state::GameStatus;
use crate::components::layout::Layout;
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするよ！🏆🎉
///
/// これは `apply_move` とは別の、呼びたい人だけが呼ぶ API。移動の実行中に
/// 勝敗を判定することはない。
pub fn game_status(layout: &Layout) -> GameStatus {
    if check_win_condition(layout) {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}
