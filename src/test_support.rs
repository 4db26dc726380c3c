// src/test_support.rs
//! テスト用の盤面ビルダーと、52枚の整合性チェック。

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::init_handler::initialize_world;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::{StackInfo, StackType, ALL_CONTAINERS};
use crate::config::GameConfig;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::rules::get_container;
use crate::systems::container_system::add_card;
use crate::systems::deal_system::DealSystem;

/// カードは全部作ってあるけど、どの列も空の World。
pub fn empty_board() -> World {
    initialize_world(&GameConfig::default())
}

/// シード固定で配った World。
pub fn dealt_board(seed: u64) -> World {
    let mut world = empty_board();
    DealSystem::new()
        .execute(&mut world, &mut StdRng::seed_from_u64(seed), 0)
        .unwrap();
    world
}

/// スートとランクからカードのエンティティを探す。
pub fn card_entity(world: &World, suit: Suit, rank: Rank) -> Entity {
    world
        .get_all_entities_with_component::<Card>()
        .into_iter()
        .find(|&e| {
            world
                .get_component::<Card>(e)
                .map_or(false, |card| card.suit == suit && card.rank == rank)
        })
        .unwrap()
}

/// カードを列の一番上に置く。
pub fn place(world: &mut World, suit: Suit, rank: Rank, stack: StackType, face_up: bool) -> Entity {
    let entity = card_entity(world, suit, rank);
    add_card(world, entity, face_up, stack).unwrap();
    entity
}

pub fn stack_of(world: &World, card: Entity) -> Option<StackType> {
    world.get_component::<StackInfo>(card).map(|info| info.stack_type)
}

/// 盤面の整合性チェック。置かれているカードの枚数を返す。
///
/// * どのカードも高々1つの列にしかいない
/// * 列に入っているカードの StackInfo がその列を指している
/// * StackInfo を持つカードは必ずどこかの列に入っている
pub fn audit_board(world: &World) -> usize {
    let mut seen = std::collections::HashSet::new();
    for kind in ALL_CONTAINERS {
        let container = get_container(world, kind).unwrap();
        for (pile_index, pile) in container.piles().enumerate() {
            for &card in pile {
                assert!(seen.insert(card), "{} が2つの列に入っている", card);
                assert_eq!(
                    stack_of(world, card),
                    Some(kind.stack(pile_index as u8)),
                    "{} の StackInfo が列と食い違っている",
                    card
                );
            }
        }
    }
    for card in world.get_all_entities_with_component::<StackInfo>() {
        assert!(seen.contains(&card), "{} は StackInfo を持っているのにどの列にもいない", card);
    }
    seen.len()
}
