// src/systems/move_card_system.rs

use log::{debug, info};

use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::GameResult;
use crate::logic::auto_move::find_automatic_move;
use crate::logic::rules::{plan_move, MoveDestination, MovePlan};
use crate::systems::container_system;

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どのカードをどこに動かすか」を受け取って、ルール上可能かチェックし、
/// 可能なら World の状態を更新するよ。状態は持たない。
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// `destination` を指定した移動。動いたら true。
    pub fn check_move(&self, world: &mut World, card: Entity, destination: MoveDestination) -> GameResult<bool> {
        match plan_move(world, card, destination) {
            Some(plan) => {
                self.apply_plan(world, &plan)?;
                Ok(true)
            }
            None => {
                debug!("MoveCardSystem: {} -> {:?} はルール違反！🙅", card, destination);
                Ok(false)
            }
        }
    }

    /// クリックされたカードを自動で行き先に動かす。動いたら true。
    pub fn check_automatic_moves(&self, world: &mut World, card: Entity) -> GameResult<bool> {
        match find_automatic_move(world, card) {
            Some(plan) => {
                self.apply_plan(world, &plan)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 計画どおりに動かす。上のカードから順に外して、下のカードから順に表向きで積む。
    /// こうすると並びが保たれて、移動元の場札のめくりも1回で済む。
    pub fn apply_plan(&self, world: &mut World, plan: &MovePlan) -> GameResult<()> {
        for &card in plan.cards.iter().rev() {
            container_system::remove_card(world, card);
        }
        for &card in &plan.cards {
            container_system::add_card(world, card, true, plan.to)?;
        }
        info!("MoveCardSystem: {} 枚を {:?} へ移動 ✨", plan.cards.len(), plan.to);
        Ok(())
    }
}
