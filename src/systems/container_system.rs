// src/systems/container_system.rs
//! カード置き場 (CardContainer) を書き換える操作をまとめたよ。📦
//!
//! `StackInfo` / `Position` / 表裏を書き換えていいのはここだけ。
//! 追加・削除のたびに「列の中身」と「カード側の置き場所」が食い違わないようにしてる。

use log::{debug, info, warn};

use crate::components::card::Card;
use crate::components::container::CardContainer;
use crate::components::position::Position;
use crate::components::stack::{ContainerKind, StackInfo, StackType, ALL_CONTAINERS};
use crate::config::layout::WASTE_FAN_SIZE;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};
use crate::logic::rules::find_container;

/// 種類からコンテナのエンティティを探す。
pub fn container_entity(world: &World, kind: ContainerKind) -> GameResult<Entity> {
    find_container(world, kind)
        .map(|(entity, _)| entity)
        .ok_or(GameError::MissingContainer(kind))
}

fn container_mut(world: &mut World, kind: ContainerKind) -> GameResult<&mut CardContainer> {
    let entity = container_entity(world, kind)?;
    world
        .get_component_mut::<CardContainer>(entity)
        .ok_or(GameError::MissingContainer(kind))
}

/// 列の一番上のカードを置くべき位置。
pub fn pile_position(world: &World, stack: StackType) -> Option<Position> {
    find_container(world, stack.kind()).map(|(_, container)| container.pile_position(stack.pile_index()))
}

/// カードを列の一番上に積む。ルールのチェックはしないよ。
///
/// 描画順 = 積んだ後の列の長さ、表裏 = `face_up`、位置 = 列の一番上の位置。
/// 捨て札に積んだら扇を並べ直す。
pub fn add_card(world: &mut World, card: Entity, face_up: bool, stack: StackType) -> GameResult<()> {
    if world.get_component::<Card>(card).is_none() {
        return Err(GameError::UnknownCard(card));
    }
    if world.get_component::<StackInfo>(card).is_some() {
        // 1枚のカードが2つの列に入らないように、先に今の列から外す
        warn!("[Container] {} はまだ別の列にいるので先に外すよ", card);
        remove_card(world, card);
    }

    let kind = stack.kind();
    let pile = stack.pile_index();
    let container = container_mut(world, kind)?;
    let len = container
        .push(pile, card)
        .ok_or(GameError::PileOutOfRange { kind, pile })?;
    let position = container.pile_position(pile);

    if let Some(card_component) = world.get_component_mut::<Card>(card) {
        card_component.flip(face_up);
    }
    world.add_component(card, StackInfo::new(stack, len as u32));
    world.add_component(card, position);

    if kind == ContainerKind::Waste {
        update_waste_order(world);
    }
    Ok(())
}

/// カードを今の列から取り除く。入っていなければ警告して false。
///
/// 場札では、取り除いた後に列の一番上を表向きにする (めくり)。
/// 捨て札では扇を並べ直す。
pub fn remove_card(world: &mut World, card: Entity) -> bool {
    let Some(stack) = world.get_component::<StackInfo>(card).map(|info| info.stack_type) else {
        warn!("[Container] {} はどの列にも入っていないよ", card);
        return false;
    };
    let kind = stack.kind();
    let pile = stack.pile_index();

    let (removed, new_top) = match container_mut(world, kind) {
        Ok(container) => (container.remove(pile, card), container.top(pile)),
        Err(err) => {
            warn!("[Container] {}", err);
            return false;
        }
    };
    if removed {
        world.remove_component::<StackInfo>(card);
    } else {
        warn!("[Container] {} は {:?} に入っていないよ", card, stack);
    }

    match kind {
        ContainerKind::Tableau => {
            if let Some(top) = new_top {
                reveal(world, top);
            }
        }
        ContainerKind::Waste => update_waste_order(world),
        ContainerKind::Foundation | ContainerKind::Stock => {}
    }
    removed
}

/// 裏向きなら表にする。
fn reveal(world: &mut World, card: Entity) {
    if let Some(card_component) = world.get_component_mut::<Card>(card) {
        if !card_component.is_face_up {
            card_component.flip(true);
            info!("[Container] {} をめくったよ 👀", card_component);
        }
    }
}

/// 捨て札の描画順と扇の位置を、列全体について計算し直す。
///
/// 一番上が開始位置、その下が1つずらし、それより古いカードは全部2つずらし。
pub fn update_waste_order(world: &mut World) {
    let Some((_, waste)) = find_container(world, ContainerKind::Waste) else {
        return;
    };
    let cards = waste.pile(0).to_vec();
    let len = cards.len();
    let layout: Vec<(Entity, u32, Position)> = cards
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &card)| (card, (len - i) as u32, waste.fan_position(i.min(WASTE_FAN_SIZE - 1))))
        .collect();

    for (card, draw_order, position) in layout {
        if let Some(info) = world.get_component_mut::<StackInfo>(card) {
            info.draw_order = draw_order;
        }
        world.add_component(card, position);
    }
}

/// 全部の列を空にして、カードを宙ぶらりん (StackInfo なし) にする。
pub fn reset(world: &mut World) -> Vec<Entity> {
    let mut orphaned = Vec::new();
    for kind in ALL_CONTAINERS {
        match container_mut(world, kind) {
            Ok(container) => orphaned.extend(container.clear()),
            Err(err) => warn!("[Container] {}", err),
        }
    }
    for &card in &orphaned {
        world.remove_component::<StackInfo>(card);
    }
    debug!("[Container] リセット: {} 枚を外したよ", orphaned.len());
    orphaned
}

/// 山札の一番上を捨て札に表向きで移す。
pub fn deal_stock_card(world: &mut World, card: Entity) -> GameResult<()> {
    remove_card(world, card);
    add_card(world, card, true, StackType::Waste)
}

/// 捨て札を全部 (上から順に) 裏向きで山札に戻す。戻した枚数を返す。
pub fn reload_stock(world: &mut World) -> GameResult<usize> {
    let mut moved = 0;
    loop {
        let Some(card) = container_mut(world, ContainerKind::Waste)?.top(0) else {
            break;
        };
        remove_card(world, card);
        add_card(world, card, false, StackType::Stock)?;
        moved += 1;
    }
    Ok(moved)
}
