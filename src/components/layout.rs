// src/components/layout.rs

use crate::components::card::{Card, Rank, Suit};
use crate::components::location::Location;
use crate::components::pile::Pile;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// ゲーム全体の盤面だよ！🃏
///
/// 山札1つ、捨て札1つ、組札4つ、場札7列、それと手数カウンター。
/// 盤面を変えるのは `systems` の遷移関数だけで、変えるときは必ず
/// 新しい `Layout` を作って返す（元の盤面には触らない）。
///
/// 外から山を差し込む入口は無い。盤面は `empty` か `deal` から始まって、
/// 遷移関数を通ってしか変わらないので、カードが増えたり減ったりしないし、
/// どの山も自分の場所に入っている。JSON からも組み立てられない
/// （表示側へは `protocol::GameStateData` に変換して渡す）。
///
/// ```compile_fail
/// let layout: klondike_engine::Layout = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; FOUNDATION_COUNT],
    tableaus: [Pile; TABLEAU_COUNT],
    move_count: u32,
}

impl Layout {
    /// カードが1枚もない盤面。配る前の状態とテスト用。
    pub fn empty() -> Self {
        Self {
            stock: Pile::new(Location::Stock),
            waste: Pile::new(Location::Waste),
            foundations: std::array::from_fn(|i| Pile::new(Location::Foundation(i as u8))),
            tableaus: std::array::from_fn(|i| Pile::new(Location::Tableau(i as u8))),
            move_count: 0,
        }
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Pile] {
        &self.tableaus
    }

    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.foundations.get(index)
    }

    pub fn tableau(&self, index: usize) -> Option<&Pile> {
        self.tableaus.get(index)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// 場所から山を引く。範囲外の番号なら None。
    pub fn pile(&self, location: Location) -> Option<&Pile> {
        match location {
            Location::Stock => Some(&self.stock),
            Location::Waste => Some(&self.waste),
            Location::Foundation(index) => self.foundations.get(usize::from(index)),
            Location::Tableau(index) => self.tableaus.get(usize::from(index)),
        }
    }

    /// 場所の一番上のカード。
    pub fn top_card(&self, location: Location) -> Option<Card> {
        self.pile(location).and_then(Pile::top_card)
    }

    /// 全部の山を Stock, Waste, Foundation 0..4, Tableau 0..7 の順に回す。
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        [&self.stock, &self.waste]
            .into_iter()
            .chain(self.foundations.iter())
            .chain(self.tableaus.iter())
    }

    /// 盤面にある全カードの (スート, ランク)。枚数保存の確認用。
    pub fn card_identities(&self) -> Vec<(Suit, Rank)> {
        let mut all: Vec<(Suit, Rank)> =
            self.piles().flat_map(|pile| pile.cards().iter().map(Card::identity)).collect();
        all.sort();
        all
    }

    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    // --- ここから下は遷移関数専用 ---

    /// 山を差し替えた盤面を作る。`pile.kind()` の場所に入る。
    pub(crate) fn with_pile(mut self, pile: Pile) -> Self {
        match pile.kind() {
            Location::Stock => self.stock = pile,
            Location::Waste => self.waste = pile,
            Location::Foundation(index) => {
                if let Some(slot) = self.foundations.get_mut(usize::from(index)) {
                    *slot = pile;
                }
            }
            Location::Tableau(index) => {
                if let Some(slot) = self.tableaus.get_mut(usize::from(index)) {
                    *slot = pile;
                }
            }
        }
        self
    }

    pub(crate) fn with_move_count(mut self, move_count: u32) -> Self {
        self.move_count = move_count;
        self
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout_has_every_pile() {
        let layout = Layout::empty();
        assert_eq!(layout.piles().count(), 2 + FOUNDATION_COUNT + TABLEAU_COUNT);
        assert_eq!(layout.card_count(), 0);
        assert_eq!(layout.move_count(), 0);
        assert_eq!(layout.foundation(2).map(Pile::kind), Some(Location::Foundation(2)));
        assert_eq!(layout.tableau(6).map(Pile::kind), Some(Location::Tableau(6)));
        assert!(layout.pile(Location::Tableau(7)).is_none());
    }

    #[test]
    fn with_pile_replaces_the_matching_slot() {
        let card = Card::new(Suit::Spade, Rank::King).with_face_up(true);
        let layout = Layout::empty().with_pile(Pile::with_cards(Location::Tableau(3), vec![card]));

        assert_eq!(layout.top_card(Location::Tableau(3)), Some(card));
        assert_eq!(layout.card_count(), 1);
        assert_eq!(layout.card_identities(), vec![(Suit::Spade, Rank::King)]);
    }
}
