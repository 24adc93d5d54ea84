//! 組札 (Foundation) へのカード移動ルールを定義するよ。
//!
//! 組札はスートに固定されていない。空の組札ならどれでも A を受け入れて、
//! そのあとは一番上と同じスートで1つ上のランクだけを受け入れる。

use crate::components::card::{Card, Rank};
use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::components::pile::Pile;

/// 指定されたカードが、組札 `target` の一番上に置けるかチェックする。
pub fn can_move_to_foundation(card: &Card, target: &Pile) -> bool {
    match target.top_card() {
        None => card.rank() == Rank::Ace,
        Some(top) => top.suit() == card.suit() && card.rank().previous() == Some(top.rank()),
    }
}

/// カードを置ける組札を 0 番から順に探して、最初に見つかった場所を返すよ。
/// どこにも置けなければ None。
pub fn find_foundation_for(layout: &Layout, card: &Card) -> Option<Location> {
    layout.foundations().iter().find(|pile| can_move_to_foundation(card, pile)).map(Pile::kind)
}
