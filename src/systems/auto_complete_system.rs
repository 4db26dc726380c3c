// src/systems/auto_complete_system.rs

use log::{debug, info};

use crate::components::game_state::{AutoCompleteStatus, GameState};
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::GameResult;
use crate::logic::auto_move::{cards_outside_foundation, next_auto_complete_move};
use crate::systems::move_card_system::MoveCardSystem;
use crate::systems::win_condition_system::GAME_STATE_ENTITY;

/// オートコンプリート1手ぶんの結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoCompleteStep {
    /// 動いていない (Running じゃない)。
    Idle,
    /// 1枚組札に上げた。
    Moved(Entity),
    /// もう上げられるカードが無いので止まった。
    Finished,
}

/// オートコンプリートを1手ずつ進めるシステムだよ 🪄
///
/// GameState が `Running` の間、呼ばれるたびに1枚だけ組札へ上げる。
/// 手が尽きたら `Unavailable` に戻す (勝ち判定は呼び出し側)。
#[derive(Default)]
pub struct AutoCompleteSystem {
    mover: MoveCardSystem,
}

impl AutoCompleteSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, world: &mut World) -> GameResult<AutoCompleteStep> {
        let running = world
            .get_component::<GameState>(GAME_STATE_ENTITY)
            .map_or(false, |state| state.auto_complete == AutoCompleteStatus::Running);
        if !running {
            return Ok(AutoCompleteStep::Idle);
        }

        match next_auto_complete_move(world) {
            Some(plan) => {
                self.mover.apply_plan(world, &plan)?;
                debug!("AutoComplete: 残り {} 枚", cards_outside_foundation(world));
                Ok(plan.cards.first().copied().map_or(AutoCompleteStep::Finished, AutoCompleteStep::Moved))
            }
            None => {
                if let Some(state) = world.get_component_mut::<GameState>(GAME_STATE_ENTITY) {
                    state.auto_complete = AutoCompleteStatus::Unavailable;
                }
                info!("AutoComplete: 終了 (残り {} 枚)", cards_outside_foundation(world));
                Ok(AutoCompleteStep::Finished)
            }
        }
    }
}

impl System for AutoCompleteSystem {
    fn run(&mut self, world: &mut World) {
        if let Err(err) = self.step(world) {
            log::error!("AutoComplete: {}", err);
        }
    }
}
