//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit, ALL_SUITS};
use crate::components::container::CardContainer;
use crate::components::stack::{ContainerKind, StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// 場札に重ねられる組み合わせ (色違い) か。
pub fn are_opposite_colors(a: Suit, b: Suit) -> bool {
    CardColor::from_suit(a) != CardColor::from_suit(b)
}

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Spade ♠️, 1: Heart ❤️, 2: Diamond ♦️, 3: Club ♣️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    ALL_SUITS.get(usize::from(foundation_index)).copied()
}

/// スートから組札のインデックスへ。`get_foundation_suit` の逆。
pub fn foundation_index_of(suit: Suit) -> u8 {
    match suit {
        Suit::Spade => 0,
        Suit::Heart => 1,
        Suit::Diamond => 2,
        Suit::Club => 3,
    }
}

/// 指定した種類のコンテナエンティティとそのコンポーネントを探す。
pub fn find_container(world: &World, kind: ContainerKind) -> Option<(Entity, &CardContainer)> {
    world
        .get_all_entities_with_component::<CardContainer>()
        .into_iter()
        .find_map(|entity| {
            world
                .get_component::<CardContainer>(entity)
                .filter(|container| container.kind == kind)
                .map(|container| (entity, container))
        })
}

pub fn get_container(world: &World, kind: ContainerKind) -> Option<&CardContainer> {
    find_container(world, kind).map(|(_, container)| container)
}

/// 指定されたスタック (`target_stack`) の一番上にあるカードのエンティティID (`Entity`) を取得するよ。
pub fn get_top_card_entity(world: &World, target_stack: StackType) -> Option<Entity> {
    get_container(world, target_stack.kind())?.top(target_stack.pile_index())
}

/// カードが今いる列の一番上か。どこにも置かれていないカードは false。
pub fn is_top_of_pile(world: &World, card_entity: Entity) -> bool {
    world
        .get_component::<StackInfo>(card_entity)
        .map_or(false, |info| get_top_card_entity(world, info.stack_type) == Some(card_entity))
}

/// 一緒に動くカードたち。場札なら掴んだカードとその上に積まれた全部 (下から上)、
/// それ以外はカード1枚だけ。
pub fn moving_group(world: &World, card_entity: Entity) -> Vec<Entity> {
    let Some(info) = world.get_component::<StackInfo>(card_entity) else {
        return vec![card_entity];
    };
    match info.stack_type {
        StackType::Tableau(pile) => get_container(world, ContainerKind::Tableau)
            .map(|tableau| {
                let cards = tableau.pile(pile);
                match cards.iter().position(|&e| e == card_entity) {
                    Some(slot) => cards[slot..].to_vec(),
                    None => vec![card_entity],
                }
            })
            .unwrap_or_else(|| vec![card_entity]),
        _ => vec![card_entity],
    }
}

/// プレイ (移動元) にできるカードか。表向きで、捨て札・組札ならその一番上。
pub fn is_playable(world: &World, card_entity: Entity) -> bool {
    let face_up = world
        .get_component::<Card>(card_entity)
        .map_or(false, |card| card.is_face_up);
    if !face_up {
        return false;
    }
    match world.get_component::<StackInfo>(card_entity).map(|info| info.stack_type) {
        Some(StackType::Waste) | Some(StackType::Foundation(_)) => is_top_of_pile(world, card_entity),
        Some(_) => true,
        None => false,
    }
}

/// ドラッグを始められるカードか。表向きで、捨て札なら一番上だけ。
pub fn is_draggable(world: &World, card_entity: Entity) -> bool {
    let face_up = world
        .get_component::<Card>(card_entity)
        .map_or(false, |card| card.is_face_up);
    let stack_type = world.get_component::<StackInfo>(card_entity).map(|info| info.stack_type);
    match stack_type {
        Some(StackType::Waste) => face_up && is_top_of_pile(world, card_entity),
        Some(_) => face_up,
        None => false,
    }
}
