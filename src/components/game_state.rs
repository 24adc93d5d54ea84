// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲームの現在の状態を表す列挙型だよ！🏆
///
/// 移動の却下は状態じゃなくて、遷移関数の `Err` で表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    InProgress,
    /// 全部の組札が A〜K で埋まった！
    Won,
}

impl GameStatus {
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_status_comparison() {
        assert!(GameStatus::Won.is_won());
        assert!(!GameStatus::InProgress.is_won());
        assert_ne!(GameStatus::Won, GameStatus::InProgress);
    }
}
