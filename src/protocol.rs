// src/protocol.rs

// このファイルは、エンジンと表示側 (JavaScript) の間でやり取りする
// JSON の形を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON、`Deserialize` は JSON -> Rust。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardColor, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::components::pile::Pile;
use crate::logic::rules::is_valid_sequence;
use crate::systems::win_condition_system::game_status;

// --- 表示側からエンジンへ ---

/// 表示側が送ってくる移動の提案。中身は `Move` そのもの。
pub use crate::components::card_move::Move as MoveRequest;

// --- エンジンから表示側へ ---

/// カード1枚分の表示用データ。裏向きのカードでもスートとランクは入れておく
/// （見せるかどうかは表示側が `is_face_up` で決める）。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub color: CardColor,
    pub label: String,
    pub is_face_up: bool,
    /// このカードから上をまとめてドラッグできるか。
    pub is_draggable: bool,
}

/// 山ひとつ分の表示用データ。`cards[0]` が一番下。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileData {
    pub location: Location,
    pub cards: Vec<CardData>,
}

/// 盤面まるごとのスナップショット。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub piles: Vec<PileData>,
    pub move_count: u32,
    pub status: GameStatus,
}

impl CardData {
    fn from_card(card: &Card, is_draggable: bool) -> Self {
        Self {
            suit: card.suit(),
            rank: card.rank(),
            color: card.color(),
            label: format!("{}{}", card.rank().label(), card.suit().symbol()),
            is_face_up: card.is_face_up(),
            is_draggable,
        }
    }
}

impl PileData {
    fn from_pile(pile: &Pile) -> Self {
        let top_index = pile.top_index();
        let cards = pile
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let is_draggable = match pile.kind() {
                    Location::Tableau(_) => is_valid_sequence(pile, index),
                    Location::Waste | Location::Foundation(_) => Some(index) == top_index,
                    Location::Stock => false,
                };
                CardData::from_card(card, is_draggable)
            })
            .collect();
        Self { location: pile.kind(), cards }
    }
}

impl From<&Layout> for GameStateData {
    fn from(layout: &Layout) -> Self {
        Self {
            piles: layout.piles().map(PileData::from_pile).collect(),
            move_count: layout.move_count(),
            status: game_status(layout),
        }
    }
}
