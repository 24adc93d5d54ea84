//! 場札 (Tableau) に関するルールを定義するよ。
//! まとめて動かせる並びの判定と、場札の上に置けるかどうかの判定。

use itertools::Itertools;

use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;

/// 場札の `start_index` から一番上までが、まとめて動かせる並びかチェックする。
///
/// 条件:
/// - 全部表向き
/// - 隣り合う2枚 (下, 上) で、上のランクがちょうど1つ小さくて、色が違う
///
/// 表向きの1枚だけなら、それだけで正しい並び。範囲外のインデックスは false。
pub fn is_valid_sequence(pile: &Pile, start_index: usize) -> bool {
    let Some(run) = pile.cards().get(start_index..) else {
        return false;
    };
    if run.is_empty() || !run.iter().all(Card::is_face_up) {
        return false;
    }
    run.iter().tuple_windows().all(|(current, next)| stacks_on(next, current))
}

/// `card` を `below` の上に積める並びか（ランクが1つ下で色違い）。
pub(crate) fn stacks_on(card: &Card, below: &Card) -> bool {
    card.color() != below.color() && below.rank().previous() == Some(card.rank())
}

/// 指定されたカード（動かす並びの一番下）が、場札 `target` の一番上に置けるかチェックする。
///
/// - 空の列には King だけ置ける🤴
/// - そうでなければ、一番上が表向きで、色が違って、ランクがちょうど1つ上
pub fn can_move_to_tableau(card: &Card, target: &Pile) -> bool {
    match target.top_card() {
        Some(top) => top.is_face_up() && stacks_on(card, &top),
        None => card.rank() == Rank::King,
    }
}
