// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! クリックしたカードの行き先探しと、オートコンプリートの次の1手探し。
//! ここは World を読むだけで、実際に動かすのは systems 側。

use log::debug;

use crate::components::card::Card;
use crate::components::stack::{ContainerKind, StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::rules::{
    self, can_move_to_foundation, can_move_to_tableau, foundation_index_of, foundation_top_value,
    get_container, MovePlan,
};

/// クリックされたカードの自動の行き先を探す。最初に見つかったものを返すよ。
///
/// 1. 組札 0..3 (カードが列の一番上の時だけ)。カード1枚で移動。
/// 2. 場札 0..6 (自分の列は飛ばす)。テールごと移動。
///
/// 捨て札の一番上以外のカードは動かせない。
pub fn find_automatic_move(world: &World, card_entity: Entity) -> Option<MovePlan> {
    let card = world.get_component::<Card>(card_entity)?;
    let source = world.get_component::<StackInfo>(card_entity)?.stack_type;
    if !rules::is_playable(world, card_entity) {
        debug!("[AutoMove] {} は動かせないカード", card);
        return None;
    }

    if rules::is_top_of_pile(world, card_entity) {
        if let Some(pile) = (0..4u8).find(|&pile| can_move_to_foundation(world, card_entity, pile)) {
            debug!("[AutoMove] {} -> Foundation({})", card, pile);
            return Some(MovePlan::single(card_entity, StackType::Foundation(pile)));
        }
    }

    let tableau_piles = get_container(world, ContainerKind::Tableau)?.pile_count() as u8;
    let target = (0..tableau_piles)
        .filter(|&pile| source != StackType::Tableau(pile))
        .find(|&pile| can_move_to_tableau(world, card_entity, pile))?;
    debug!("[AutoMove] {} -> Tableau({})", card, target);
    Some(MovePlan {
        cards: rules::moving_group(world, card_entity),
        to: StackType::Tableau(target),
    })
}

/// オートコンプリートできる盤面か。場札に裏向きのカードが1枚も無ければOK。
pub fn can_auto_complete(world: &World) -> bool {
    let Some(tableau) = get_container(world, ContainerKind::Tableau) else {
        return false;
    };
    tableau.piles().flatten().all(|&entity| {
        world
            .get_component::<Card>(entity)
            .map_or(false, |card| card.is_face_up)
    })
}

/// オートコンプリートの次の1手。
///
/// 捨て札の全カード (下から上)、場札の各列の一番上、山札の全カード (下から上) の順に見て、
/// 自分のスートの組札の一番上のちょうど次のランクのカードを最初に見つけたら、それを組札へ。
/// 山札・捨て札はどのカードでも候補になる (山札は自由にめくれるので)。
pub fn next_auto_complete_move(world: &World) -> Option<MovePlan> {
    let waste = get_container(world, ContainerKind::Waste)?;
    let tableau = get_container(world, ContainerKind::Tableau)?;
    let stock = get_container(world, ContainerKind::Stock)?;
    let foundation_tops: Vec<u8> = (0..4u8).map(|pile| foundation_top_value(world, pile)).collect();

    let tableau_tops = tableau.piles().filter_map(|pile| pile.last());
    let candidates = itertools::chain!(waste.pile(0), tableau_tops, stock.pile(0));

    let (card_entity, pile) = candidates
        .filter_map(|&entity| {
            let card = world.get_component::<Card>(entity)?;
            let pile = foundation_index_of(card.suit);
            (card.rank.value() == foundation_tops[usize::from(pile)] + 1).then_some((entity, pile))
        })
        .next()?;
    debug!("[AutoComplete] 次の1手: {} -> Foundation({})", card_entity, pile);
    Some(MovePlan::single(card_entity, StackType::Foundation(pile)))
}

/// 組札以外に残っているカードの枚数。
pub fn cards_outside_foundation(world: &World) -> usize {
    [ContainerKind::Tableau, ContainerKind::Stock, ContainerKind::Waste]
        .into_iter()
        .filter_map(|kind| get_container(world, kind))
        .map(|container| container.card_count())
        .sum()
}
