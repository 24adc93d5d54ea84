// src/config/rules.rs
//! クロンダイクのルールで決まっている数を定義するよ！
//! 山札の枚数とか、列の数とか。

pub const DECK_SIZE: usize = 52; // 1デッキの枚数
pub const CARDS_PER_SUIT: usize = 13; // 1スートの枚数 (A〜K)

pub const FOUNDATION_COUNT: usize = 4; // 組札の数
pub const TABLEAU_COUNT: usize = 7; // 場札の列の数

/// 配り終わったあと場札に乗っている枚数 (1+2+...+7 = 28)
pub const DEALT_TO_TABLEAUS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
/// 配り終わったあと山札に残る枚数
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - DEALT_TO_TABLEAUS;
