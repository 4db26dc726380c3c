// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).

use log::{debug, info, warn};

use crate::app::event_handler::release_target;
use crate::components::dragging_info::DraggingInfo;
use crate::components::position::Position;
use crate::components::stack::{StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::rules::{self, MoveDestination};

/// ポインターを離した結果。
#[derive(Debug, Clone, PartialEq)]
pub enum DragRelease {
    /// しきい値を超えて動かさずに離した = クリック。
    Click { card: Entity, original_positions: Vec<(Entity, Position)> },
    /// ドラッグして離した。落とし先が無ければ `destination` は `None`。
    Drop {
        card: Entity,
        destination: Option<MoveDestination>,
        original_positions: Vec<(Entity, Position)>,
    },
}

impl DragRelease {
    pub fn card(&self) -> Entity {
        match self {
            DragRelease::Click { card, .. } | DragRelease::Drop { card, .. } => *card,
        }
    }

    pub fn original_positions(&self) -> &[(Entity, Position)] {
        match self {
            DragRelease::Click { original_positions, .. } | DragRelease::Drop { original_positions, .. } => {
                original_positions
            }
        }
    }
}

/// 今アクティブなドラッグ (あれば1つだけ)。
pub fn active_drag(world: &World) -> Option<(Entity, &DraggingInfo)> {
    world
        .get_all_entities_with_component::<DraggingInfo>()
        .into_iter()
        .next()
        .and_then(|entity| world.get_component::<DraggingInfo>(entity).map(|info| (entity, info)))
}

/// ドラッグ開始時の処理。掴めたら true。
///
/// * 表向きのカード (捨て札は一番上だけ): 場札ならテールごと掴む
/// * 山札の一番上: 動かないけど、離したらクリック扱いにするために押下を記録
pub fn handle_drag_start(world: &mut World, card: Entity, point: Position) -> bool {
    if let Some((current, _)) = active_drag(world) {
        warn!("Drag already active on {}. Ignoring press on {}", current, card);
        return false;
    }

    let stack = world.get_component::<StackInfo>(card).map(|info| info.stack_type);
    let info = if rules::is_draggable(world, card) {
        let group = rules::moving_group(world, card);
        let positions = group
            .iter()
            .map(|&e| world.get_component::<Position>(e).copied().unwrap_or_default())
            .collect();
        DraggingInfo::new(group, positions, point, stack)
    } else if stack == Some(StackType::Stock) && rules::is_top_of_pile(world, card) {
        let position = world.get_component::<Position>(card).copied().unwrap_or_default();
        DraggingInfo::click_only(card, position, point)
    } else {
        debug!("{} is not draggable", card);
        return false;
    };

    info!("Drag start on {} ({} card(s))", card, info.group.len());
    world.add_component(card, info);
    true
}

/// ドラッグ中の位置更新。グループ全体を指の移動量だけずらす。
pub fn update_dragged_position(world: &mut World, point: Position, drag_threshold: f32) {
    let Some((card, _)) = active_drag(world) else {
        return;
    };
    let Some(info) = world.get_component_mut::<DraggingInfo>(card) else {
        return;
    };
    if !info.movable {
        return;
    }
    if point.manhattan_distance(info.press_point) > drag_threshold {
        info.dragged = true;
    }
    let dx = point.x - info.last_point.x;
    let dy = point.y - info.last_point.y;
    info.last_point = point;
    let (group, source) = (info.group.clone(), info.source);

    for entity in group {
        if !still_in(world, entity, source) {
            continue;
        }
        if let Some(position) = world.get_component_mut::<Position>(entity) {
            *position = position.translated(dx, dy);
        }
    }
}

/// 掴んだ時の列にまだいるか。途中で別の列へ動かされたカードは false。
fn still_in(world: &World, entity: Entity, source: Option<StackType>) -> bool {
    world.get_component::<StackInfo>(entity).map(|info| info.stack_type) == source
}

/// ドラッグ終了時の処理。DraggingInfo を外して、クリックか落とし先かを返す。
pub fn handle_drag_end(world: &mut World, point: Position) -> Option<DragRelease> {
    let (card, _) = active_drag(world)?;
    let info = world.remove_component::<DraggingInfo>(card)?;
    // 別の列へ移ったカードはそこの位置が正しいので、元に戻す対象から外す
    let original_positions: Vec<(Entity, Position)> = info
        .group
        .iter()
        .copied()
        .zip(info.original_positions.iter().copied())
        .filter(|&(entity, _)| {
            let live = still_in(world, entity, info.source);
            if !live {
                warn!("{} left {:?} during the drag", entity, info.source);
            }
            live
        })
        .collect();

    if !info.dragged {
        debug!("Released {} without dragging: click", card);
        return Some(DragRelease::Click { card, original_positions });
    }
    let destination = release_target(world, point, &info.group);
    debug!("Dropped {} at ({}, {}) onto {:?}", card, point.x, point.y, destination);
    Some(DragRelease::Drop { card, destination, original_positions })
}

/// 移動できなかった時に、元の位置へ戻す。
pub fn snap_back(world: &mut World, original_positions: &[(Entity, Position)]) {
    for &(entity, position) in original_positions {
        world.add_component(entity, position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::systems::container_system;
    use crate::test_support::{empty_board, place};

    #[test]
    fn dragging_a_tableau_card_takes_its_tail() {
        let mut world = empty_board();
        place(&mut world, Suit::Club, Rank::Ten, StackType::Tableau(1), false);
        let nine = place(&mut world, Suit::Heart, Rank::Nine, StackType::Tableau(1), true);
        let eight = place(&mut world, Suit::Spade, Rank::Eight, StackType::Tableau(1), true);

        assert!(handle_drag_start(&mut world, nine, Position::new(0.0, 0.0)));
        let (grabbed, info) = active_drag(&world).unwrap();
        assert_eq!(grabbed, nine);
        assert_eq!(info.group, vec![nine, eight]);
    }

    #[test]
    fn face_down_and_covered_waste_cards_cannot_be_grabbed() {
        let mut world = empty_board();
        let hidden = place(&mut world, Suit::Club, Rank::Ten, StackType::Tableau(1), false);
        let old_waste = place(&mut world, Suit::Club, Rank::Two, StackType::Waste, true);
        place(&mut world, Suit::Club, Rank::Three, StackType::Waste, true);

        assert!(!handle_drag_start(&mut world, hidden, Position::default()));
        assert!(!handle_drag_start(&mut world, old_waste, Position::default()));
        assert!(active_drag(&world).is_none());
    }

    #[test]
    fn second_press_is_ignored_while_dragging() {
        let mut world = empty_board();
        let a = place(&mut world, Suit::Club, Rank::Ten, StackType::Tableau(1), true);
        let b = place(&mut world, Suit::Heart, Rank::Ten, StackType::Tableau(2), true);
        assert!(handle_drag_start(&mut world, a, Position::default()));
        assert!(!handle_drag_start(&mut world, b, Position::default()));
        assert_eq!(world.get_all_entities_with_component::<DraggingInfo>(), vec![a]);
    }

    #[test]
    fn small_moves_stay_a_click_and_group_follows_pointer() {
        let mut world = empty_board();
        let nine = place(&mut world, Suit::Heart, Rank::Nine, StackType::Tableau(1), true);
        let eight = place(&mut world, Suit::Spade, Rank::Eight, StackType::Tableau(1), true);
        let start_nine = *world.get_component::<Position>(nine).unwrap();
        let start_eight = *world.get_component::<Position>(eight).unwrap();

        handle_drag_start(&mut world, nine, Position::new(100.0, 300.0));
        update_dragged_position(&mut world, Position::new(110.0, 305.0), 20.0);
        assert_eq!(*world.get_component::<Position>(nine).unwrap(), start_nine.translated(10.0, 5.0));
        assert_eq!(*world.get_component::<Position>(eight).unwrap(), start_eight.translated(10.0, 5.0));

        let release = handle_drag_end(&mut world, Position::new(110.0, 305.0)).unwrap();
        assert!(matches!(release, DragRelease::Click { card, .. } if card == nine));
        snap_back(&mut world, release.original_positions());
        assert_eq!(*world.get_component::<Position>(nine).unwrap(), start_nine);
        assert!(active_drag(&world).is_none());
    }

    #[test]
    fn crossing_the_threshold_makes_a_drag() {
        let mut world = empty_board();
        let nine = place(&mut world, Suit::Heart, Rank::Nine, StackType::Tableau(1), true);
        handle_drag_start(&mut world, nine, Position::new(100.0, 300.0));
        update_dragged_position(&mut world, Position::new(115.0, 306.0), 20.0);
        let release = handle_drag_end(&mut world, Position::new(5.0, 5.0)).unwrap();
        assert_eq!(
            release,
            DragRelease::Drop {
                card: nine,
                destination: None,
                original_positions: release.original_positions().to_vec(),
            }
        );
    }

    #[test]
    fn cards_moved_away_mid_drag_are_left_alone() {
        let mut world = empty_board();
        let ace = place(&mut world, Suit::Spade, Rank::Ace, StackType::Tableau(0), true);
        let start = *world.get_component::<Position>(ace).unwrap();

        assert!(handle_drag_start(&mut world, ace, start.translated(10.0, 10.0)));
        update_dragged_position(&mut world, start.translated(60.0, 60.0), 20.0);

        // ドラッグ中に別の処理で組札へ上がった
        container_system::remove_card(&mut world, ace);
        container_system::add_card(&mut world, ace, true, StackType::Foundation(0)).unwrap();
        let on_foundation = *world.get_component::<Position>(ace).unwrap();

        update_dragged_position(&mut world, start.translated(200.0, 200.0), 20.0);
        assert_eq!(*world.get_component::<Position>(ace).unwrap(), on_foundation, "もう指には付いてこない");

        let release = handle_drag_end(&mut world, start.translated(200.0, 200.0)).unwrap();
        assert_eq!(release.card(), ace);
        assert!(release.original_positions().is_empty());
        snap_back(&mut world, release.original_positions());
        assert_eq!(*world.get_component::<Position>(ace).unwrap(), on_foundation);
    }

    #[test]
    fn stock_top_is_click_only() {
        let mut world = empty_board();
        place(&mut world, Suit::Club, Rank::Ten, StackType::Stock, false);
        let top = place(&mut world, Suit::Club, Rank::Jack, StackType::Stock, false);
        let before = *world.get_component::<Position>(top).unwrap();

        assert!(handle_drag_start(&mut world, top, Position::new(0.0, 0.0)));
        update_dragged_position(&mut world, Position::new(200.0, 200.0), 20.0);
        assert_eq!(*world.get_component::<Position>(top).unwrap(), before, "山札のカードは動かない");
        assert!(matches!(handle_drag_end(&mut world, Position::new(200.0, 200.0)), Some(DragRelease::Click { .. })));
    }
}
