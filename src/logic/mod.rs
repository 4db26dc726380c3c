// src/logic/mod.rs
//! ゲームのルールや計算ロジック。World を読むだけで書き換えはしないよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
