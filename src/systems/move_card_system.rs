// src/systems/move_card_system.rs

use crate::components::card_move::Move;
use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::error::MoveResult;
use crate::logic::rules::common::pile_at;
use crate::logic::rules::{validate_move, ValidatedMove};
use crate::systems::stock_system;

/// カード移動を実行するよ！🖱️💨
///
/// 呼び出し側が事前にチェックしていても、ここで必ずもう一度ルールを検証する。
/// 成功したら新しい盤面を返して、渡された盤面には一切触らない。
/// 却下されたら理由を返すだけ（盤面は呼び出し側が持っているものがそのまま有効）。
///
/// 成功時の処理:
/// 1. 移動元から `start_index` より上を取り出す
/// 2. 移動先に積む
/// 3. 移動元が場札なら、新しく一番上になったカードを表にする
/// 4. 手数を 1 増やす
///
/// 山札 → 捨て札の移動はドロー（山札が空ならリサイクル）として扱う。
pub fn apply_move(layout: &Layout, mv: &Move) -> MoveResult<Layout> {
    match validate_move(layout, mv)? {
        ValidatedMove::Draw | ValidatedMove::Recycle => Ok(stock_system::draw(layout)),
        ValidatedMove::Cards { source, start_index, target } => {
            move_cards(layout, source, start_index, target)
        }
    }
}

/// 検証済みの移動を盤面に反映する。
fn move_cards(layout: &Layout, source: Location, start_index: usize, target: Location) -> MoveResult<Layout> {
    let (moving, remainder) = pile_at(layout, source)?.take(start_index)?;
    let remainder = if source.is_tableau() { remainder.flip_top_if_face_down() } else { remainder };
    let landed = pile_at(layout, target)?.append(&moving);

    Ok(layout
        .clone()
        .with_pile(remainder)
        .with_pile(landed)
        .with_move_count(layout.move_count() + 1))
}
