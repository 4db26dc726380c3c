// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// ゲーム全体の進行状態だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// 4つの組札が全部 13 枚になった。
    Won,
}

/// オートコンプリートの状態機械。
///
/// `Unavailable` → (場札に裏向きカードが無くなる) → `Available` (ボタン表示)
/// → (ボタン押下) → `Running` (tick ごとに1手) → 手が無くなったら `Unavailable`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoCompleteStatus {
    Unavailable,
    Available,
    Running,
}

/// 画面の時計の中身。表示は外部のウィジェットがやる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameClock {
    pub elapsed_ms: u64,
    pub running: bool,
}

impl GameClock {
    /// 動いていなければ動かす。既に動いていたら何もしない。
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// 時間を進める。表示 (秒) が変わったら true。
    pub fn advance(&mut self, delta_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        let before = self.elapsed_ms / 1000;
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        self.elapsed_ms / 1000 != before
    }

    /// "mm:ss" 形式。
    pub fn display(&self) -> String {
        let total_secs = self.elapsed_ms / 1000;
        format!("{:02}:{:02}", (total_secs / 60) % 60, total_secs % 60)
    }
}

/// ゲーム状態を保持するコンポーネント。
///
/// ゲーム状態用の特別なエンティティ (いつも Entity(0)) に1つだけ付く。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub auto_complete: AutoCompleteStatus,
    pub clock: GameClock,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            status: GameStatus::Playing,
            auto_complete: AutoCompleteStatus::Unavailable,
            clock: GameClock::default(),
        }
    }
}

impl Component for GameState {}
