// src/systems/stock_system.rs
//! 山札をクリックしたときの処理（捨て札へ1枚めくる、捨て札を山札に戻す）だよ。

use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::components::pile::Pile;
use crate::logic::rules::stock_waste;

/// 山札をめくる。必ず成功する。
///
/// - 山札にカードがあれば、一番上を表向きで捨て札へ。手数 +1。
/// - 山札が空なら、捨て札を戻す（`reset_waste_to_stock`）。手数は増えない。
pub fn draw(layout: &Layout) -> Layout {
    if stock_waste::can_deal_from_stock(layout) {
        deal_one_card_from_stock(layout)
    } else {
        reset_waste_to_stock(layout)
    }
}

fn deal_one_card_from_stock(layout: &Layout) -> Layout {
    let stock = layout.stock();
    let Some(top_index) = stock.top_index() else {
        return layout.clone();
    };
    let mut remaining = stock.cards().to_vec();
    let drawn: Vec<_> = remaining.drain(top_index..).map(|card| card.with_face_up(true)).collect();

    layout
        .clone()
        .with_pile(Pile::with_cards(Location::Stock, remaining))
        .with_pile(layout.waste().append(&drawn))
        .with_move_count(layout.move_count() + 1)
}

/// 捨て札を逆順にして全部裏返し、新しい山札にする。捨て札は空になる。
///
/// 山札が残っているとき、または捨て札も空のときは盤面をそのまま返す。
pub fn reset_waste_to_stock(layout: &Layout) -> Layout {
    if !stock_waste::can_reset_stock_from_waste(layout) {
        return layout.clone();
    }
    let stock = layout.waste().cards().iter().rev().map(|card| card.with_face_up(false)).collect();

    layout
        .clone()
        .with_pile(Pile::with_cards(Location::Stock, stock))
        .with_pile(Pile::new(Location::Waste))
}
