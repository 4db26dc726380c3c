// src/app/game_app.rs
//! JavaScript から使う窓口。入力イベントを受け取って GameController に渡し、
//! 溜まった描画コマンドを JSON でコールバックに流すよ。

use std::sync::{Arc, Mutex, MutexGuard};

use js_sys::{Error, Function};
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::app::controller::{GameController, MoveOutcome};
use crate::app::event_handler::InputEvent;
use crate::config::GameConfig;
use crate::ecs::entity::Entity;
use crate::error::GameError;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from(Error::new(&message.to_string()))
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        js_error(err)
    }
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    controller: Arc<Mutex<GameController>>,
    /// 描画コマンド (JSON 配列の文字列) を受け取る JS の関数。
    on_render: Arc<Mutex<Option<Function>>>,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` が無ければデフォルト設定で始める。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)?,
            None => GameConfig::default(),
        };
        let controller = GameController::new(config)?;
        info!("GameApp: 初期化完了。");
        Ok(Self {
            controller: Arc::new(Mutex::new(controller)),
            on_render: Arc::new(Mutex::new(None)),
        })
    }

    /// 描画コールバックを登録して、今の盤面を丸ごと送る。
    pub fn set_render_callback(&self, callback: Function) -> Result<(), JsValue> {
        *self.on_render.lock().map_err(|_| js_error("render callback lock poisoned"))? = Some(callback);
        self.flush()
    }

    /// `{"type":"PointerDown","x":..,"y":..}` みたいな JSON のイベントを処理する。
    pub fn handle_event_json(&self, event_json: &str) -> Result<(), JsValue> {
        let event: InputEvent = serde_json::from_str(event_json).map_err(js_error)?;
        self.dispatch(event)
    }

    pub fn pointer_down(&self, x: f32, y: f32) -> Result<(), JsValue> {
        self.dispatch(InputEvent::PointerDown { x, y })
    }

    pub fn pointer_move(&self, x: f32, y: f32) -> Result<(), JsValue> {
        self.dispatch(InputEvent::PointerMove { x, y })
    }

    pub fn pointer_up(&self, x: f32, y: f32) -> Result<(), JsValue> {
        self.dispatch(InputEvent::PointerUp { x, y })
    }

    pub fn stock_placeholder_clicked(&self) -> Result<(), JsValue> {
        self.dispatch(InputEvent::StockPlaceholderClicked)
    }

    pub fn auto_complete_clicked(&self) -> Result<(), JsValue> {
        self.dispatch(InputEvent::AutoCompleteClicked)
    }

    pub fn restart(&self) -> Result<(), JsValue> {
        self.dispatch(InputEvent::RestartClicked)
    }

    pub fn win_dialog_restart(&self) -> Result<(), JsValue> {
        self.dispatch(InputEvent::WinDialogRestartClicked)
    }

    /// カード (エンティティ番号) を空き列へ。`slot_code` は 0-6 が場札、10-13 が組札。
    pub fn move_to_slot(&self, card_id: usize, slot_code: i32) -> Result<bool, JsValue> {
        let outcome = self.lock_controller()?.move_to_slot(Entity(card_id), slot_code)?;
        self.flush()?;
        Ok(outcome != MoveOutcome::Rejected)
    }

    /// requestAnimationFrame などから経過時間 (ms) を渡してもらう。
    pub fn tick(&self, elapsed_ms: f64) -> Result<(), JsValue> {
        let elapsed_ms = if elapsed_ms.is_finite() && elapsed_ms > 0.0 { elapsed_ms as u64 } else { 0 };
        self.dispatch(InputEvent::Tick { elapsed_ms })
    }

    /// コールバックを使わない場合はこっちでまとめて取り出す。
    pub fn take_commands_json(&self) -> Result<String, JsValue> {
        let commands = self.lock_controller()?.drain_commands();
        serde_json::to_string(&commands).map_err(js_error)
    }

    /// ゲーム状態 (勝敗・オートコンプリート・時計) の JSON。デバッグ用。
    pub fn state_json(&self) -> Result<String, JsValue> {
        let controller = self.lock_controller()?;
        let state = controller.game_state().ok_or_else(|| js_error("game state missing"))?;
        serde_json::to_string(state).map_err(js_error)
    }
}

impl GameApp {
    fn lock_controller(&self) -> Result<MutexGuard<'_, GameController>, JsValue> {
        self.controller.lock().map_err(|_| js_error("controller lock poisoned"))
    }

    fn dispatch(&self, event: InputEvent) -> Result<(), JsValue> {
        {
            let mut controller = self.lock_controller()?;
            if let Err(err) = controller.handle_event(event) {
                error!("GameApp: {:?} の処理に失敗: {}", event, err);
                return Err(err.into());
            }
        }
        self.flush()
    }

    /// 溜まったコマンドをコールバックに送る。ロックを外してから呼ぶので、
    /// コールバックの中から GameApp を触っても大丈夫。
    fn flush(&self) -> Result<(), JsValue> {
        let Some(callback) = self
            .on_render
            .lock()
            .map_err(|_| js_error("render callback lock poisoned"))?
            .clone()
        else {
            return Ok(());
        };
        let commands = self.lock_controller()?.drain_commands();
        if commands.is_empty() {
            return Ok(());
        }
        let json = serde_json::to_string(&commands).map_err(js_error)?;
        callback.call1(&JsValue::NULL, &JsValue::from_str(&json))?;
        Ok(())
    }
}
