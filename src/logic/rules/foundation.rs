//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::{debug, warn};

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use super::common::{get_foundation_suit, get_top_card_entity};

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// スートが列のスートと同じで、列が空なら A、そうでなければ一番上の次のランク。
pub fn can_move_to_foundation(
    world: &World,
    card_to_move_entity: Entity,
    target_foundation_index: u8,
) -> bool {
    let Some(card_to_move) = world.get_component::<Card>(card_to_move_entity) else {
        warn!("[Foundation Rule] {} に Card コンポーネントが無いよ", card_to_move_entity);
        return false;
    };
    let Some(target_suit) = get_foundation_suit(target_foundation_index) else {
        warn!("[Foundation Rule] 無効な Foundation インデックス {}", target_foundation_index);
        return false;
    };
    if card_to_move.suit != target_suit {
        return false;
    }

    let result = match get_top_card_entity(world, StackType::Foundation(target_foundation_index)) {
        None => card_to_move.rank == Rank::Ace,
        Some(top_entity) => match world.get_component::<Card>(top_entity) {
            Some(top_card) => card_to_move.rank.value() == top_card.rank.value() + 1,
            None => false,
        },
    };
    debug!(
        "[Foundation Rule] {} -> Foundation({}): {}",
        card_to_move, target_foundation_index, result
    );
    result
}

/// 組札の一番上のランク値 (空なら 0)。オートコンプリートで使う。
pub fn foundation_top_value(world: &World, foundation_index: u8) -> u8 {
    get_top_card_entity(world, StackType::Foundation(foundation_index))
        .and_then(|top| world.get_component::<Card>(top))
        .map_or(0, |card| card.rank.value())
}
