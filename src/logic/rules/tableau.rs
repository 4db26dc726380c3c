//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::{debug, warn};

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use super::common::{are_opposite_colors, get_top_card_entity};

/// 指定されたカードが、特定の場札 (Tableau) の一番上に置けるかチェックする。
///
/// 一番上のカードより1つ小さいランクで色違いならOK。空の列には K だけ。
pub fn can_move_to_tableau(
    world: &World,
    card_to_move_entity: Entity,
    target_tableau_index: u8,
) -> bool {
    let Some(card_to_move) = world.get_component::<Card>(card_to_move_entity) else {
        warn!("[Tableau Rule] {} に Card コンポーネントが無いよ", card_to_move_entity);
        return false;
    };

    match get_top_card_entity(world, StackType::Tableau(target_tableau_index)) {
        Some(top_entity) => {
            let Some(top_card) = world.get_component::<Card>(top_entity) else {
                return false;
            };
            let colors_different = are_opposite_colors(card_to_move.suit, top_card.suit);
            let rank_is_one_less = card_to_move.rank.value() + 1 == top_card.rank.value();
            debug!(
                "[Tableau Rule] {} onto {}: colors different = {}, rank is one less = {}",
                card_to_move, top_card, colors_different, rank_is_one_less
            );
            top_card.is_face_up && colors_different && rank_is_one_less
        }
        None => {
            let is_king = card_to_move.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty Tableau({}): is king = {}", card_to_move, target_tableau_index, is_king);
            is_king
        }
    }
}
