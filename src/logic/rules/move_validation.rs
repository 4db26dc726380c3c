// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//! 「どこに落としたか」から「どのカードをどの列へ動かすか」の計画を作るよ。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::{ContainerKind, StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use super::common::{get_container, is_playable, is_top_of_pile, moving_group};
use super::foundation::can_move_to_foundation;
use super::tableau::can_move_to_tableau;

/// 移動先。カードの上、空の場札の置き場所、空の組札の置き場所のどれか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDestination {
    Card(Entity),
    /// 場札の列 (0-6) の置き場所。
    TableauSlot(u8),
    /// 組札の列 (0-3) の置き場所。
    FoundationSlot(u8),
}

impl MoveDestination {
    /// 数値コードから変換する。0-6 は場札の置き場所、10-13 は組札の置き場所。
    pub fn from_slot_code(code: i32) -> Option<MoveDestination> {
        match code {
            0..=6 => Some(MoveDestination::TableauSlot(code as u8)),
            10..=13 => Some(MoveDestination::FoundationSlot((code - 10) as u8)),
            _ => None,
        }
    }
}

/// 実行できると分かった移動。`cards` は下から上の順。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub cards: Vec<Entity>,
    pub to: StackType,
}

impl MovePlan {
    pub fn single(card: Entity, to: StackType) -> Self {
        Self { cards: vec![card], to }
    }
}

/// `card` を `destination` に動かせるならその計画を返す。ダメなら `None`。
///
/// * 組札のカードの上: 動かすカードが列の一番上で、同じスートの次のランク
/// * 場札のカードの上: 1つ小さいランクで色違い (テールごと移動)
/// * 空の場札: K だけ (テールごと移動)
/// * 空の組札: 列のスートの A だけ
pub fn plan_move(world: &World, card: Entity, destination: MoveDestination) -> Option<MovePlan> {
    if world.get_component::<Card>(card).is_none() || !is_playable(world, card) {
        debug!("[Move Validation] {} はプレイできないカード", card);
        return None;
    }
    let source = world.get_component::<StackInfo>(card)?.stack_type;

    let plan = match destination {
        MoveDestination::Card(target) => plan_onto_card(world, card, source, target),
        MoveDestination::TableauSlot(pile) => {
            let tableau = get_container(world, ContainerKind::Tableau)?;
            (usize::from(pile) < tableau.pile_count()
                && tableau.is_pile_empty(pile)
                && can_move_to_tableau(world, card, pile))
            .then(|| MovePlan { cards: moving_group(world, card), to: StackType::Tableau(pile) })
        }
        MoveDestination::FoundationSlot(pile) => {
            let foundation = get_container(world, ContainerKind::Foundation)?;
            (usize::from(pile) < foundation.pile_count()
                && foundation.is_pile_empty(pile)
                && is_top_of_pile(world, card)
                && can_move_to_foundation(world, card, pile))
            .then(|| MovePlan::single(card, StackType::Foundation(pile)))
        }
    };
    debug!("[Move Validation] {} -> {:?}: {:?}", card, destination, plan);
    plan
}

fn plan_onto_card(world: &World, card: Entity, source: StackType, target: Entity) -> Option<MovePlan> {
    if target == card {
        return None;
    }
    let target_card = world.get_component::<Card>(target)?;
    if !target_card.is_face_up || !is_top_of_pile(world, target) {
        return None;
    }
    let target_stack = world.get_component::<StackInfo>(target)?.stack_type;
    if target_stack == source {
        return None;
    }
    match target_stack {
        StackType::Foundation(pile) => (is_top_of_pile(world, card) && can_move_to_foundation(world, card, pile))
            .then(|| MovePlan::single(card, target_stack)),
        StackType::Tableau(pile) => can_move_to_tableau(world, card, pile)
            .then(|| MovePlan { cards: moving_group(world, card), to: target_stack }),
        StackType::Stock | StackType::Waste => None,
    }
}
