// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//!
//! ここは盤面を読むだけで、何も書き換えない。結果は `ValidatedMove` か
//! 却下理由の `MoveRejected` のどちらか。

use crate::components::card_move::Move;
use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::error::{MoveRejected, MoveResult};
use crate::logic::rules::common::{pile_at, resolve_start_index};
use crate::logic::rules::{foundation, stock_waste, tableau};

/// 検証を通った移動。実行側はこれをそのまま適用すればいい。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedMove {
    /// 山札の一番上を捨て札へ。
    Draw,
    /// 山札が空なので捨て札を裏返して山札に戻す。
    Recycle,
    /// `source` の `start_index` から上を `target` へ。
    /// 組札が移動先のときは、`target` は実際に見つかった組札になっている。
    Cards { source: Location, start_index: usize, target: Location },
}

/// 提案された移動がルール上できるか検証する。
pub fn validate_move(layout: &Layout, mv: &Move) -> MoveResult<ValidatedMove> {
    for location in [mv.source, mv.target] {
        if !location.is_in_layout() {
            return Err(MoveRejected::UnknownPile(location));
        }
    }

    // 山札から動かせるのはドローだけ
    if mv.source == Location::Stock {
        return match mv.target {
            Location::Waste if stock_waste::can_deal_from_stock(layout) => Ok(ValidatedMove::Draw),
            Location::Waste => Ok(ValidatedMove::Recycle),
            _ => Err(MoveRejected::StockOnlyFeedsWaste),
        };
    }

    let (target_pile, target) = match mv.target {
        Location::Stock | Location::Waste => return Err(MoveRejected::IllegalTarget(mv.target)),
        other => (pile_at(layout, other)?, other),
    };

    match (mv.source, mv.target) {
        (Location::Tableau(from), Location::Tableau(to)) if from == to => {
            return Err(MoveRejected::SelfMove(from));
        }
        // 組札から組札へは動かせない
        (Location::Foundation(_), Location::Foundation(_)) => {
            return Err(MoveRejected::FoundationToFoundation);
        }
        _ => {}
    }

    let source_pile = pile_at(layout, mv.source)?;
    let start_index = resolve_start_index(source_pile, mv.start_index)?;
    let run = &source_pile.cards()[start_index..];
    let first = run[0];

    match mv.source {
        Location::Waste | Location::Foundation(_) => {
            if run.len() > 1 {
                return Err(MoveRejected::NotTopCard(mv.source));
            }
            if !first.is_face_up() {
                return Err(MoveRejected::NotFaceUp { index: start_index });
            }
        }
        Location::Tableau(_) => {
            if !first.is_face_up() {
                return Err(MoveRejected::NotFaceUp { index: start_index });
            }
            if !tableau::is_valid_sequence(source_pile, start_index) {
                return Err(MoveRejected::InvalidSequence { start_index });
            }
        }
        Location::Stock => return Err(MoveRejected::StockOnlyFeedsWaste),
    }

    let target = match target {
        Location::Foundation(_) => {
            if run.len() > 1 {
                return Err(MoveRejected::SequenceTooLongForFoundation { len: run.len() });
            }
            foundation::find_foundation_for(layout, &first)
                .ok_or(MoveRejected::WrongRankOrColorForTarget(target))?
        }
        _ => {
            if !tableau::can_move_to_tableau(&first, target_pile) {
                return Err(MoveRejected::WrongRankOrColorForTarget(target));
            }
            target
        }
    };

    Ok(ValidatedMove::Cards { source: mv.source, start_index, target })
}

/// 検証だけして、できるかどうかを返す。
pub fn is_move_valid(layout: &Layout, mv: &Move) -> bool {
    validate_move(layout, mv).is_ok()
}
