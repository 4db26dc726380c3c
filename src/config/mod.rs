// src/config/mod.rs
//! 設定まわり。レイアウト定数と、JSON から読めるゲーム設定。

pub mod game_config;
pub mod layout;

pub use game_config::GameConfig;
