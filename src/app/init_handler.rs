// src/app/init_handler.rs
//! World の初期化。コンポーネント登録と、ゲーム状態・置き場・カードのエンティティ作成。

use log::info;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::container::CardContainer;
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::GameState;
use crate::components::position::Position;
use crate::components::stack::{StackInfo, ALL_CONTAINERS};
use crate::config::GameConfig;
use crate::ecs::world::World;
use crate::logic::deck::create_standard_deck;
use crate::systems::win_condition_system::GAME_STATE_ENTITY;

/// 新しい World を作る。カードはまだどの列にも入っていない (配るのは DealSystem)。
///
/// エンティティの並び:
/// * `Entity(0)`: GameState
/// * 次の4つ: Foundation / Tableau / Stock / Waste の CardContainer
/// * 残り52個: カード (Card + Position)
pub fn initialize_world(config: &GameConfig) -> World {
    let mut world = World::new();
    world.register_component::<Card>();
    world.register_component::<StackInfo>();
    world.register_component::<Position>();
    world.register_component::<DraggingInfo>();
    world.register_component::<GameState>();
    world.register_component::<CardContainer>();

    world.create_entity_with_id(GAME_STATE_ENTITY);
    world.add_component(GAME_STATE_ENTITY, GameState::default());

    for kind in ALL_CONTAINERS {
        let entity = world.create_entity();
        world.add_component(entity, CardContainer::new(kind, config.table_width));
    }

    // 最初は山札の位置に重ねておく (配るとすぐ上書きされる)
    let stock_origin = crate::config::layout::container_origin(
        crate::components::stack::ContainerKind::Stock,
        config.table_width,
    );
    for card in create_standard_deck() {
        let entity = world.create_entity();
        world.add_component(entity, card);
        world.add_component(entity, stock_origin);
    }
    info!(
        "App::Init: World を作ったよ (カード {} 枚 = {} スート × {} ランク)",
        world.get_all_entities_with_component::<Card>().len(),
        ALL_SUITS.len(),
        ALL_RANKS.len()
    );
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::stack::ContainerKind;
    use crate::ecs::entity::Entity;
    use crate::logic::rules::find_container;

    #[test]
    fn world_has_state_containers_and_deck() {
        let world = initialize_world(&GameConfig::default());
        assert!(world.get_component::<GameState>(Entity(0)).is_some());
        assert_eq!(world.get_all_entities_with_component::<CardContainer>().len(), 4);
        assert_eq!(world.get_all_entities_with_component::<Card>().len(), 52);
        assert!(world.get_all_entities_with_component::<StackInfo>().is_empty(), "まだ配っていない");

        let (stock_entity, stock) = find_container(&world, ContainerKind::Stock).unwrap();
        assert_eq!(stock_entity, Entity(3));
        assert_eq!(stock.origin.x, 1344.0 - 150.0 - 30.0);
    }
}
