// src/error.rs
//! セットアップや検索で失敗した時のエラー型。
//! ルール判定そのもの (置ける? 置けない?) は bool で返すので、ここには来ないよ。

use thiserror::Error;

use crate::components::stack::ContainerKind;
use crate::ecs::entity::Entity;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("entity {0} is not a card")]
    UnknownCard(Entity),
    #[error("no {0:?} container in the world")]
    MissingContainer(ContainerKind),
    #[error("pile {pile} does not exist in the {kind:?} container")]
    PileOutOfRange { kind: ContainerKind, pile: u8 },
    #[error("expected 52 cards in the world, found {0}")]
    IncompleteDeck(usize),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
