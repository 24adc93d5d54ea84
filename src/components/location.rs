// src/components/location.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// カードが置かれている場所の種類を示す Enum だよ。
/// 移動元・移動先の指定は全部これでやる。文字列で "tableau" とか渡すのはナシ！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// 山札 (Stock)。裏向きのカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。番号 (0-3) を持つけど、スートには縛られていない。
    Foundation(u8),
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
}

impl Location {
    /// このレイアウトに実在する場所かどうか。番号が範囲外なら false。
    pub fn is_in_layout(self) -> bool {
        match self {
            Location::Stock | Location::Waste => true,
            Location::Foundation(index) => usize::from(index) < FOUNDATION_COUNT,
            Location::Tableau(index) => usize::from(index) < TABLEAU_COUNT,
        }
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, Location::Tableau(_))
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, Location::Foundation(_))
    }

    /// 全 Foundation の場所を 0 から順に返す。
    pub fn foundations() -> impl Iterator<Item = Location> {
        (0..FOUNDATION_COUNT as u8).map(Location::Foundation)
    }

    /// 全 Tableau の場所を 0 から順に返す。
    pub fn tableaus() -> impl Iterator<Item = Location> {
        (0..TABLEAU_COUNT as u8).map(Location::Tableau)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Stock => write!(f, "stock"),
            Location::Waste => write!(f, "waste"),
            Location::Foundation(index) => write!(f, "foundation {}", index),
            Location::Tableau(index) => write!(f, "tableau {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_bounds() {
        assert!(Location::Stock.is_in_layout());
        assert!(Location::Waste.is_in_layout());
        assert!(Location::Foundation(3).is_in_layout());
        assert!(!Location::Foundation(4).is_in_layout());
        assert!(Location::Tableau(6).is_in_layout());
        assert!(!Location::Tableau(7).is_in_layout());
    }

    #[test]
    fn iterators_cover_every_pile() {
        assert_eq!(Location::foundations().count(), 4);
        assert_eq!(Location::tableaus().last(), Some(Location::Tableau(6)));
    }

    #[test]
    fn json_shape() {
        // 表示側とやり取りする JSON の形をここで固定しておく
        let json = serde_json::to_string(&Location::Tableau(2)).unwrap();
        assert_eq!(json, r#"{"Tableau":2}"#);
        let back: Location = serde_json::from_str(r#""Waste""#).unwrap();
        assert_eq!(back, Location::Waste);
    }
}
