// src/components/pile.rs

use crate::components::card::Card;
use crate::components::location::Location;
use crate::error::{MoveRejected, MoveResult};

/// カードの山ひとつを表すよ。
///
/// `cards[0]` が一番下（最初に置かれたカード）、最後の要素が一番上。
/// どのメソッドも自分自身は変えずに、新しい `Pile` を返す。前の状態を
/// 持っている人がいても、その中身が勝手に変わることはない！
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    kind: Location,
    cards: Vec<Card>,
}

impl Pile {
    /// 空の山を作る。
    pub fn new(kind: Location) -> Self {
        Self { kind, cards: Vec::new() }
    }

    pub fn with_cards(kind: Location, cards: Vec<Card>) -> Self {
        Self { kind, cards }
    }

    pub fn kind(&self) -> Location {
        self.kind
    }

    /// 表示用に中身を全部見せる。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード。空なら None。
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// 一番上のカードのインデックス。
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// `from_index` から上を全部取り出して、(取り出したカード, 残りの山) を返す。
    pub fn take(&self, from_index: usize) -> MoveResult<(Vec<Card>, Pile)> {
        if from_index >= self.cards.len() {
            return Err(MoveRejected::IndexOutOfRange { index: from_index, len: self.cards.len() });
        }
        let (rest, removed) = self.cards.split_at(from_index);
        Ok((removed.to_vec(), Pile::with_cards(self.kind, rest.to_vec())))
    }

    /// 一番上にカードを積んだ新しい山を返す。
    pub fn append(&self, cards: &[Card]) -> Pile {
        let mut next = self.cards.clone();
        next.extend_from_slice(cards);
        Pile::with_cards(self.kind, next)
    }

    /// 一番上が裏向きなら表にする。空か、もう表向きなら何もしない。
    pub fn flip_top_if_face_down(&self) -> Pile {
        let mut next = self.clone();
        if let Some(top) = next.cards.last_mut() {
            if !top.is_face_up() {
                *top = top.with_face_up(true);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn tableau_of(cards: &[(Suit, Rank, bool)]) -> Pile {
        Pile::with_cards(
            Location::Tableau(0),
            cards.iter().map(|&(s, r, up)| Card::new(s, r).with_face_up(up)).collect(),
        )
    }

    #[test]
    fn top_card_of_empty_and_filled() {
        assert_eq!(Pile::new(Location::Waste).top_card(), None);

        let pile = tableau_of(&[(Suit::Club, Rank::King, false), (Suit::Heart, Rank::Two, true)]);
        assert_eq!(pile.top_card(), Some(Card::new(Suit::Heart, Rank::Two).with_face_up(true)));
        assert_eq!(pile.top_index(), Some(1));
    }

    #[test]
    fn take_splits_at_index() {
        let pile = tableau_of(&[
            (Suit::Club, Rank::King, false),
            (Suit::Heart, Rank::Eight, true),
            (Suit::Spade, Rank::Seven, true),
        ]);

        let (removed, rest) = pile.take(1).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].rank(), Rank::Eight);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest.kind(), Location::Tableau(0));
        // 元の山はそのまま
        assert_eq!(pile.len(), 3);
    }

    #[test]
    fn take_out_of_range() {
        let pile = tableau_of(&[(Suit::Club, Rank::King, true)]);
        assert_eq!(pile.take(1), Err(MoveRejected::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(
            Pile::new(Location::Waste).take(0),
            Err(MoveRejected::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn append_puts_cards_on_top() {
        let pile = tableau_of(&[(Suit::Club, Rank::King, true)]);
        let added = pile.append(&[Card::new(Suit::Heart, Rank::Queen).with_face_up(true)]);

        assert_eq!(added.len(), 2);
        assert_eq!(added.top_card().map(|c| c.rank()), Some(Rank::Queen));
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn flip_top_only_when_face_down() {
        let pile = tableau_of(&[(Suit::Club, Rank::King, false), (Suit::Heart, Rank::Two, false)]);
        let flipped = pile.flip_top_if_face_down();
        assert!(flipped.cards()[1].is_face_up());
        assert!(!flipped.cards()[0].is_face_up(), "下のカードは裏のまま");

        // もう表なら変化なし
        assert_eq!(flipped.flip_top_if_face_down(), flipped);
        // 空でも大丈夫
        let empty = Pile::new(Location::Tableau(3));
        assert_eq!(empty.flip_top_if_face_down(), empty);
    }
}
