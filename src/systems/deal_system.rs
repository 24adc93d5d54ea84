// src/systems/deal_system.rs

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::card::Card;
use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::components::pile::Pile;
use crate::config::rules::TABLEAU_COUNT;
use crate::logic::deck::{create_standard_deck, shuffle_deck_with};

/// シャッフル済みのデッキから初期盤面を作るよ！🎉
///
/// # 処理の流れ
/// 1. 場札 i 列目 (0〜6) に、デッキの末尾から i+1 枚ずつ取り出して、取り出した順に積む。
///    最後に積んだ1枚だけ表向き、それ以外は裏向き。
/// 2. 残ったカード (52枚なら24枚) は、その並びのまま全部裏向きで山札へ。
/// 3. 捨て札と組札は空、手数は 0。
///
/// デッキが足りないときは、配れたところまでで止まる（52枚なら必ず足りる）。
pub fn deal(mut deck: Vec<Card>) -> Layout {
    let mut layout = Layout::empty();

    for tableau_index in 0..TABLEAU_COUNT {
        let mut column = Vec::with_capacity(tableau_index + 1);
        for card_in_tableau in 0..=tableau_index {
            let Some(card) = deck.pop() else {
                break;
            };
            // その列の一番上のカードだけ表向きにするよ！👀
            column.push(card.with_face_up(card_in_tableau == tableau_index));
        }
        layout = layout.with_pile(Pile::with_cards(Location::Tableau(tableau_index as u8), column));
    }

    let stock = deck.into_iter().map(|card| card.with_face_up(false)).collect();
    layout.with_pile(Pile::with_cards(Location::Stock, stock))
}

/// 新しいデッキを作ってシャッフルして配る。
pub fn new_game() -> Layout {
    new_game_with_rng(&mut thread_rng())
}

/// シードを指定して配る。同じシードなら同じ盤面になる。
pub fn new_game_with_seed(seed: u64) -> Layout {
    new_game_with_rng(&mut StdRng::seed_from_u64(seed))
}

pub fn new_game_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Layout {
    deal(shuffle_deck_with(&create_standard_deck(), rng))
}
