//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::layout::Layout;
use crate::config::rules::CARDS_PER_SUIT;

/// 全部の組札に 13 枚ずつ積まれていればクリア！🏆
///
/// 組札には同じスートの A から順にしか積めないので、13 枚あればそのスートは揃っている。
pub fn check_win_condition(layout: &Layout) -> bool {
    layout.foundations().iter().all(|pile| pile.len() == CARDS_PER_SUIT)
}
