// src/app/game_app.rs

// --- 必要なものをインポート ---
use wasm_bindgen::prelude::*;
// log クレートのマクロをインポート
use log::{debug, info, warn};

use crate::app::state_getter;
use crate::components::layout::Layout;
use crate::components::location::Location;
use crate::config::GameConfig;
use crate::error::MoveRejected;
use crate::logic::auto_move;
use crate::logic::rules;
use crate::protocol::MoveRequest;
use crate::systems::{move_card_system, stock_system, win_condition_system};

/// 表示側 (JavaScript) から使うゲームの窓口だよ。
///
/// 今の盤面をひとつだけ持っていて、移動が通るたびに新しい盤面に丸ごと
/// 差し替える。却下されたら盤面はそのまま。
#[wasm_bindgen]
pub struct GameApp {
    config: GameConfig,
    layout: Layout,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(GameConfig::default())
    }

    /// 設定 JSON (`{"seed": 42}` など) から作る。
    pub fn with_config(config_json: &str) -> Result<GameApp, String> {
        let config = GameConfig::from_json(config_json).map_err(|e| {
            warn!("GameApp: {}", e);
            e.to_string()
        })?;
        Ok(Self::from_config(config))
    }

    /// シャッフルし直して、新しいゲームを配る。
    pub fn new_game(&mut self) {
        self.layout = self.config.deal();
        info!("GameApp: new game dealt (seed: {:?})", self.config.seed);
    }

    /// 移動を提案する。JSON の `MoveRequest` を受け取って、通れば新しい盤面の JSON を返す。
    pub fn propose_move(&mut self, move_json: &str) -> Result<String, String> {
        let request: MoveRequest = serde_json::from_str(move_json).map_err(|e| {
            let error_msg = format!("Failed to deserialize move request: {}. JSON: {}", e, move_json);
            warn!("GameApp: {}", error_msg);
            error_msg
        })?;
        let result = move_card_system::apply_move(&self.layout, &request);
        self.commit(result, &format!("{:?}", request))
    }

    /// 山札をめくる（山札が空なら捨て札を戻す）。必ず成功する。
    pub fn propose_draw(&mut self) -> Result<String, String> {
        self.layout = stock_system::draw(&self.layout);
        debug!("GameApp: draw (stock: {}, waste: {})", self.layout.stock().len(), self.layout.waste().len());
        state_getter::get_state_json(&self.layout)
    }

    /// ダブルクリック用。`source` (JSON の `Location`) の一番上のカードを置ける場所に動かす。
    pub fn auto_move(&mut self, source_json: &str) -> Result<String, String> {
        let source: Location = serde_json::from_str(source_json).map_err(|e| {
            let error_msg = format!("Failed to deserialize location: {}. JSON: {}", e, source_json);
            warn!("GameApp: {}", error_msg);
            error_msg
        })?;
        let result = auto_move::auto_move(&self.layout, source);
        self.commit(result, &format!("auto move from {}", source))
    }

    /// 場札 `tableau_index` 列目の `start_index` 枚目から上を、まとめてドラッグできるか。
    pub fn is_valid_sequence(&self, tableau_index: u8, start_index: usize) -> bool {
        self.layout
            .tableau(usize::from(tableau_index))
            .is_some_and(|pile| rules::is_valid_sequence(pile, start_index))
    }

    pub fn get_state_json(&self) -> Result<String, String> {
        state_getter::get_state_json(&self.layout)
    }

    pub fn move_count(&self) -> u32 {
        self.layout.move_count()
    }

    /// 勝利判定。移動の処理とは別に、表示側が聞きたいときだけ呼ぶ。
    pub fn is_won(&self) -> bool {
        win_condition_system::game_status(&self.layout).is_won()
    }
}

impl GameApp {
    pub fn from_config(config: GameConfig) -> Self {
        let layout = config.deal();
        info!("GameApp: initialized (seed: {:?})", config.seed);
        Self { config, layout }
    }

    /// Rust 側から今の盤面を見る。
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// 遷移の結果を反映する。成功なら盤面を差し替えて JSON を返す。
    fn commit(&mut self, result: Result<Layout, MoveRejected>, what: &str) -> Result<String, String> {
        match result {
            Ok(next) => {
                debug!("GameApp: accepted {} (moves: {})", what, next.move_count());
                self.layout = next;
                state_getter::get_state_json(&self.layout)
            }
            Err(reason) => {
                info!("GameApp: rejected {}: {}", what, reason);
                Err(format!("{}: {}", reason.code(), reason))
            }
        }
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
