// src/components/card_move.rs

use serde::{Deserialize, Serialize};

use crate::components::location::Location;

/// 表示側から提案されるカード移動だよ。
///
/// - `source`: 移動元の場所
/// - `start_index`: 移動元の山の何枚目から動かすか。None なら一番上の1枚。
/// - `target`: 移動先の場所
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub source: Location,
    #[serde(default)]
    pub start_index: Option<usize>,
    pub target: Location,
}

impl Move {
    /// 一番上の1枚を動かす移動。
    pub fn top(source: Location, target: Location) -> Self {
        Self { source, start_index: None, target }
    }

    /// 場札の `start_index` から上をまとめて動かす移動。
    pub fn run(source: Location, start_index: usize, target: Location) -> Self {
        Self { source, start_index: Some(start_index), target }
    }

    /// 山札から捨て札へのドロー。
    pub fn draw() -> Self {
        Self::top(Location::Stock, Location::Waste)
    }

    pub fn is_draw(&self) -> bool {
        self.source == Location::Stock && self.target == Location::Waste
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_index_defaults_to_top() {
        let mv: Move = serde_json::from_str(r#"{"source":"Waste","target":{"Tableau":1}}"#).unwrap();
        assert_eq!(mv, Move::top(Location::Waste, Location::Tableau(1)));
        assert!(Move::draw().is_draw());
        assert!(!mv.is_draw());
    }
}
