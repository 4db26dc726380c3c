// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod controller;
pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod init_handler;
pub mod renderer;
pub mod stock_handler;
