//! # Error Types
//!
//! カード移動が却下された理由と、設定読み込みのエラーをまとめるよ。
//!
//! どれもその場で回復できるエラーで、プロセスを落とすようなものは無い。
//! 却下されたときレイアウトは一切変わらないので、表示側はカードを元の位置に
//! 戻すだけでいい。

use serde::Serialize;
use thiserror::Error;

use crate::components::location::Location;

// =============================================================================
// Move Rejected
// =============================================================================

/// 提案された移動がルール上できなかった理由だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum MoveRejected {
    /// 開始インデックスが移動元の山の範囲外。
    #[error("start index {index} is outside a pile of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// 移動元の山にカードが1枚も無い。
    #[error("{0} has no card to move")]
    EmptySourcePile(Location),

    /// 裏向きのカードを動かそうとした。
    #[error("card at index {index} is face down")]
    NotFaceUp { index: usize },

    /// 場札の指定範囲が、降順・色違いの並びになっていない。
    #[error("cards from index {start_index} are not a descending alternating-colour run")]
    InvalidSequence { start_index: usize },

    /// 移動先の組札・場札の受け入れ条件を満たしていない。
    #[error("{0} does not accept this card")]
    WrongRankOrColorForTarget(Location),

    /// 組札には1枚ずつしか置けない。
    #[error("a foundation takes one card at a time, not {len}")]
    SequenceTooLongForFoundation { len: usize },

    /// 同じ場札の列への移動。
    #[error("tableau {0} cannot be moved onto itself")]
    SelfMove(u8),

    /// 組札から別の組札への移動。
    #[error("a card cannot move from one foundation to another")]
    FoundationToFoundation,

    /// Waste と Foundation は一番上のカードしか動かせない。
    #[error("only the top card of {0} can be moved")]
    NotTopCard(Location),

    /// 番号が範囲外の場所。
    #[error("{0} is not part of the layout")]
    UnknownPile(Location),

    /// Stock や Waste にはカードを置けない。
    #[error("cards cannot be placed on the {0}")]
    IllegalTarget(Location),

    /// Stock から動かせるのは Waste へのドローだけ。
    #[error("the stock only feeds the waste")]
    StockOnlyFeedsWaste,

    /// 自動移動で、受け入れてくれる組札も場札も見つからなかった。
    #[error("no foundation or tableau accepts {0}'s top card")]
    NoLegalTarget(Location),
}

impl MoveRejected {
    /// 表示側の診断用に、変わらない理由コードを返すよ。
    pub fn code(&self) -> &'static str {
        match self {
            MoveRejected::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            MoveRejected::EmptySourcePile(_) => "EMPTY_SOURCE_PILE",
            MoveRejected::NotFaceUp { .. } => "NOT_FACE_UP",
            MoveRejected::InvalidSequence { .. } => "INVALID_SEQUENCE",
            MoveRejected::WrongRankOrColorForTarget(_) => "WRONG_RANK_OR_COLOR_FOR_TARGET",
            MoveRejected::SequenceTooLongForFoundation { .. } => "SEQUENCE_TOO_LONG_FOR_FOUNDATION",
            MoveRejected::SelfMove(_) => "SELF_MOVE",
            MoveRejected::FoundationToFoundation => "FOUNDATION_TO_FOUNDATION",
            MoveRejected::NotTopCard(_) => "NOT_TOP_CARD",
            MoveRejected::UnknownPile(_) => "UNKNOWN_PILE",
            MoveRejected::IllegalTarget(_) => "ILLEGAL_TARGET",
            MoveRejected::StockOnlyFeedsWaste => "STOCK_ONLY_FEEDS_WASTE",
            MoveRejected::NoLegalTarget(_) => "NO_LEGAL_TARGET",
        }
    }
}

/// 移動の Result 型エイリアス。
pub type MoveResult<T> = Result<T, MoveRejected>;

// =============================================================================
// Config Error
// =============================================================================

/// ホストページから渡された設定 JSON が読めなかったときのエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config: {0}")]
    Parse(#[from] serde_json::Error),
}
