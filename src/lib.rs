// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod logger;
pub mod logic;
pub mod systems;

#[cfg(test)]
mod test_support;

pub use app::controller::{GameController, MoveOutcome};
pub use app::event_handler::InputEvent;
pub use app::game_app::GameApp;
pub use app::renderer::RenderCommand;
pub use config::GameConfig;
pub use error::{GameError, GameResult};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("Panic hook set! 🃏");
}
