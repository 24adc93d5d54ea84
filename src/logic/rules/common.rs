//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::components::pile::Pile;
use crate::error::{MoveRejected, MoveResult};

/// 場所に対応する山を取り出す。番号が範囲外なら `UnknownPile`。
pub(crate) fn pile_at(layout: &Layout, location: Location) -> MoveResult<&Pile> {
    layout.pile(location).ok_or(MoveRejected::UnknownPile(location))
}

/// `start_index` が None なら一番上のカードの位置にする。空の山なら `EmptySourcePile`。
pub(crate) fn resolve_start_index(pile: &Pile, start_index: Option<usize>) -> MoveResult<usize> {
    let top = pile.top_index().ok_or(MoveRejected::EmptySourcePile(pile.kind()))?;
    let start = start_index.unwrap_or(top);
    if start > top {
        return Err(MoveRejected::IndexOutOfRange { index: start, len: pile.len() });
    }
    Ok(start)
}
