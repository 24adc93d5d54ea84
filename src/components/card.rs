// src/components/card.rs

use std::fmt;

// serde を使う宣言！レイアウトを JSON にして表示側に渡すときに使うよ。
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// 山札を作るときに回す全スート。この順番がそのまま `create_standard_deck` の並びになる。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// スートからカードの色を決めるよ。色はスートだけで決まる！
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Spade => "♠",
        }
    }
}

/// カードの色（赤か黒か）だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `Ace = 1` から始まるので、`rank as u8` がそのまま 1〜13 の数値になる。
/// J/Q/K は 11/12/13 として扱うよ（表示のときだけ文字になる）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 1 (Ace) 〜 13 (King) の数値を返すよ。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクに戻す。1〜13 以外なら None！
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// ひとつ上のランク。King の上は無いので None。
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// ひとつ下のランク。Ace の下は無いので None。
    pub fn previous(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    /// 表示用のラベル (A, 2..10, J, Q, K)。
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードそのものを表す値型だよ！🃏
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: 表向きなら true
///
/// フィールドは外から書き換えられないようにしてあるよ。裏返すときは
/// `flipped()` や `with_face_up()` で新しいカードを作る。色はスートから
/// 計算するだけなので、スートと食い違うことはありえない！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作るよ。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// 表裏をひっくり返した新しいカードを返す。
    pub fn flipped(&self) -> Self {
        self.with_face_up(!self.is_face_up)
    }

    /// 表裏を指定した新しいカードを返す。
    pub fn with_face_up(&self, is_face_up: bool) -> Self {
        Self { is_face_up, ..*self }
    }

    /// 表裏を無視して同じカードかどうか。枚数保存のチェックで使うよ。
    pub fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_up {
            write!(f, "{}{}", self.rank.label(), self.suit.symbol())
        } else {
            write!(f, "[{}{}]", self.rank.label(), self.suit.symbol())
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.rank(), Rank::Ace);
        assert!(!card.is_face_up(), "作ったばかりのカードは裏向きのはず");
    }

    #[test]
    fn color_follows_suit() {
        assert_eq!(Card::new(Suit::Heart, Rank::Two).color(), CardColor::Red);
        assert_eq!(Card::new(Suit::Diamond, Rank::Two).color(), CardColor::Red);
        assert_eq!(Card::new(Suit::Club, Rank::Two).color(), CardColor::Black);
        assert_eq!(Card::new(Suit::Spade, Rank::Two).color(), CardColor::Black);
    }

    #[test]
    fn flipping_returns_a_new_value() {
        let down = Card::new(Suit::Club, Rank::Nine);
        let up = down.flipped();

        assert!(up.is_face_up());
        assert!(!down.is_face_up(), "元のカードは変わらないはず");
        assert_eq!(up.identity(), down.identity());
        assert_eq!(up.flipped(), down);
        assert_eq!(down.with_face_up(true), up);
    }

    #[test]
    fn rank_values_and_neighbours() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
        assert_eq!(Rank::Queen.next(), Some(Rank::King));
        assert_eq!(Rank::King.next(), None);
        assert_eq!(Rank::Two.previous(), Some(Rank::Ace));
        assert_eq!(Rank::Ace.previous(), None);
        assert!(Rank::Ten < Rank::Jack);
    }

    #[test]
    fn display_uses_labels() {
        let card = Card::new(Suit::Heart, Rank::Queen);
        assert_eq!(card.to_string(), "[Q♥]");
        assert_eq!(card.flipped().to_string(), "Q♥");
        assert_eq!(Card::new(Suit::Spade, Rank::Ten).flipped().to_string(), "10♠");
    }
}
