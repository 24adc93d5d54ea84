// src/logic/auto_move.rs
//! カードの自動移動（ダブルクリックで置ける場所に飛ばすやつ）をまとめるモジュールだよ！🪄✨

use crate::components::card_move::Move;
use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::error::{MoveRejected, MoveResult};
use crate::logic::rules::common::{pile_at, resolve_start_index};
use crate::logic::rules::{self, ValidatedMove};
use crate::systems::move_card_system::apply_move;

/// `source` の一番上のカードを自動で動かせる移動先を探すよ。
///
/// 1. まず組札を試す（どの組札かはルール側が探してくれる。組札にあるカードは対象外）
/// 2. ダメなら場札を 0 列目から順番に試す（自分の列は飛ばす）
///
/// 見つかったら、その移動を返す。見つからなければ None。
pub fn find_automatic_move(layout: &Layout, source: Location) -> Option<Move> {
    let to_foundation = Move::top(source, Location::Foundation(0));
    if let Ok(ValidatedMove::Cards { target, .. }) = rules::validate_move(layout, &to_foundation) {
        return Some(Move::top(source, target));
    }

    Location::tableaus()
        .filter(|&target| target != source)
        .map(|target| Move::top(source, target))
        .find(|mv| rules::is_move_valid(layout, mv))
}

/// `source` の一番上のカードを自動で動かして、新しい盤面を返す。
///
/// 移動先が見つからなければ `NoLegalTarget`。移動元が空や裏向きなら、
/// そのときの理由（`EmptySourcePile` など）をそのまま返す。
pub fn auto_move(layout: &Layout, source: Location) -> MoveResult<Layout> {
    if source == Location::Stock {
        return Err(MoveRejected::StockOnlyFeedsWaste);
    }
    match find_automatic_move(layout, source) {
        Some(mv) => apply_move(layout, &mv),
        None => {
            // 移動元そのものに問題があるなら、そっちの理由を優先して返す
            let pile = pile_at(layout, source)?;
            let index = resolve_start_index(pile, None)?;
            if !pile.cards()[index].is_face_up() {
                return Err(MoveRejected::NotFaceUp { index });
            }
            Err(MoveRejected::NoLegalTarget(source))
        }
    }
}
