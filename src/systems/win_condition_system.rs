// src/systems/win_condition_system.rs

use log::{info, warn};

use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::ContainerKind;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::logic::rules::{check_win_condition, get_container};

/// ゲーム状態を持つ特別なエンティティ。
pub const GAME_STATE_ENTITY: Entity = Entity(0);

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 4つの組札が全部13枚になっていたら、GameState を `Won` にして時計を止める。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 組札が全部埋まっているか (状態は変えない)。
    pub fn is_won(&self, world: &World) -> bool {
        get_container(world, ContainerKind::Foundation).map_or(false, check_win_condition)
    }

    /// 勝っていたら状態を更新して true。
    pub fn check_win(&self, world: &mut World) -> bool {
        if !self.is_won(world) {
            return false;
        }
        match world.get_component_mut::<GameState>(GAME_STATE_ENTITY) {
            Some(state) => {
                if state.status != GameStatus::Won {
                    info!("WinConditionSystem: 勝利条件達成！🏆 タイム {}", state.clock.display());
                }
                state.status = GameStatus::Won;
                state.clock.stop();
            }
            None => warn!("WinConditionSystem: GameState が見つかりません！状態を更新できませんでした。"),
        }
        true
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        self.check_win(world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, ALL_RANKS, ALL_SUITS};
    use crate::components::stack::StackType;
    use crate::logic::rules::foundation_index_of;
    use crate::test_support::{empty_board, place};

    /// 組札に各スート `ranks` 枚ずつ積む。
    fn fill_foundations(world: &mut World, ranks: usize) {
        for suit in ALL_SUITS {
            for &rank in &ALL_RANKS[..ranks] {
                place(world, suit, rank, StackType::Foundation(foundation_index_of(suit)), true);
            }
        }
    }

    #[test]
    fn win_needs_every_foundation_complete() {
        let mut world = empty_board();
        fill_foundations(&mut world, 12);
        // 3つのスートだけ K まで
        for suit in &ALL_SUITS[..3] {
            place(&mut world, *suit, Rank::King, StackType::Foundation(foundation_index_of(*suit)), true);
        }
        let mut system = WinConditionSystem::new();
        assert!(!system.check_win(&mut world), "4×12+3 枚ではまだ");
        system.run(&mut world);
        assert_eq!(world.get_component::<GameState>(GAME_STATE_ENTITY).unwrap().status, GameStatus::Playing);
    }

    #[test]
    fn full_foundations_win_and_stop_the_clock() {
        let mut world = empty_board();
        world.get_component_mut::<GameState>(GAME_STATE_ENTITY).unwrap().clock.start();
        fill_foundations(&mut world, 13);

        let mut system = WinConditionSystem::new();
        system.run(&mut world);
        let state = world.get_component::<GameState>(GAME_STATE_ENTITY).unwrap();
        assert_eq!(state.status, GameStatus::Won);
        assert!(!state.clock.running);
        println!("勝利判定テスト、成功！🏆");
    }
}
