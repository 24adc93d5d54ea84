// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;
use rand::{seq::SliceRandom, thread_rng, Rng};

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スートごとに A〜K の順で並ぶ。乱数は使わないので、何回呼んでも同じ並び。
/// 生成された時点では、すべてのカードは裏向き！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルした新しいデッキを返すよ。元のデッキはそのまま。
pub fn shuffle_deck(deck: &[Card]) -> Vec<Card> {
    shuffle_deck_with(deck, &mut thread_rng())
}

/// 乱数生成器を指定してシャッフルする版。シード付きのゲームやテストで使う。
///
/// `SliceRandom::shuffle` は最後のインデックスから 1 まで下がりながら
/// 入れ替える Fisher–Yates なので、並びは一様にランダムになる。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique: HashSet<_> = deck.iter().map(Card::identity).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. すべてのカードが裏向きかチェック！
        assert!(deck.iter().all(|card| !card.is_face_up()), "デッキに表向きのカードが含まれています！");
    }

    #[test]
    fn deck_creation_is_deterministic() {
        assert_eq!(create_standard_deck(), create_standard_deck());
    }

    #[test]
    fn test_shuffle_keeps_the_same_cards() {
        let deck = create_standard_deck();
        let shuffled = shuffle_deck(&deck);

        let before: HashSet<_> = deck.iter().map(Card::identity).collect();
        let after: HashSet<_> = shuffled.iter().map(Card::identity).collect();
        assert_eq!(shuffled.len(), 52, "シャッフルでカード数が変わった！");
        assert_eq!(before, after);
        // 入力はそのまま
        assert_eq!(deck, create_standard_deck());
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let deck = create_standard_deck();
        let a = shuffle_deck_with(&deck, &mut StdRng::seed_from_u64(42));
        let b = shuffle_deck_with(&deck, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_not_biased_toward_identity() {
        // 元の位置に残るカードの数は、一様なシャッフルなら平均 1 枚。
        // 200 回やって平均が 3 枚を超えたら明らかにおかしい。
        let deck = create_standard_deck();
        let mut rng = StdRng::seed_from_u64(7);
        let rounds = 200;
        let mut fixed_points = 0;
        let mut identical = 0;
        for _ in 0..rounds {
            let shuffled = shuffle_deck_with(&deck, &mut rng);
            fixed_points += deck.iter().zip(&shuffled).filter(|(a, b)| a == b).count();
            if shuffled == deck {
                identical += 1;
            }
        }
        let mean = fixed_points as f64 / rounds as f64;
        assert!(mean < 3.0, "元の位置に残るカードが多すぎる: 平均 {}", mean);
        assert_eq!(identical, 0, "シャッフルしても順番が変わってない");
    }
}
