// src/app/event_handler.rs
//! ユーザー入力 (ポインター・ボタン・時間) と、クリック位置の当たり判定。

use log::trace;
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::{ContainerKind, StackInfo, StackType};
use crate::config::layout::is_point_in_card_rect;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::rules::{get_container, is_top_of_pile, MoveDestination};

/// 外 (レンダラー/ウィジェット) から入ってくるイベントだよ。JSON では `"type"` で見分ける。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// 空の山札の置き場所 (リロード) が押された。
    StockPlaceholderClicked,
    AutoCompleteClicked,
    RestartClicked,
    WinDialogRestartClicked,
    /// 前回からの経過時間。時計とオートコンプリートを進める。
    Tick { elapsed_ms: u64 },
}

/// クリックされた要素の種類を表す Enum だよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// カードがクリックされた。一番手前のもの。
    Card(Entity),
    /// 場札の列の置き場所。
    TableauSlot(u8),
    /// 組札の列の置き場所。
    FoundationSlot(u8),
    /// 山札の置き場所 (カードが無い時に見えるリロードボタン)。
    StockPlaceholder,
    WasteArea,
}

/// クリックされた座標に基づいて、どのゲーム要素がクリックされたかを特定する関数だよ！
///
/// 1. カード: 座標を含むカードのうち描画順が一番手前のもの (`exclude` のカードは無視)
/// 2. 置き場所: 場札・組札の各列、山札、捨て札の順
pub fn find_clicked_element(world: &World, point: Position, exclude: &[Entity]) -> Option<ClickTarget> {
    if let Some(&card) = cards_under_point(world, point, exclude).first() {
        trace!("Hit card {} at ({}, {})", card, point.x, point.y);
        return Some(ClickTarget::Card(card));
    }
    find_clicked_slot(world, point)
}

/// 座標の下にあるカードを手前から順に並べる。
fn cards_under_point(world: &World, point: Position, exclude: &[Entity]) -> Vec<Entity> {
    let mut hits: Vec<(u32, Entity)> = world
        .get_all_entities_with_component::<Card>()
        .into_iter()
        .filter(|entity| !exclude.contains(entity))
        .filter_map(|entity| {
            let info = world.get_component::<StackInfo>(entity)?;
            let pos = world.get_component::<Position>(entity)?;
            is_point_in_card_rect(point, *pos).then_some((info.draw_order, entity))
        })
        .collect();
    hits.sort_by(|a, b| b.cmp(a));
    hits.into_iter().map(|(_, entity)| entity).collect()
}

/// 置き場所 (カード1枚ぶんの矩形) の当たり判定。
fn find_clicked_slot(world: &World, point: Position) -> Option<ClickTarget> {
    let slot_hit = |kind: ContainerKind| -> Option<u8> {
        let container = get_container(world, kind)?;
        (0..container.pile_count() as u8)
            .find(|&pile| is_point_in_card_rect(point, container.placeholder_position(pile)))
    };

    if let Some(pile) = slot_hit(ContainerKind::Tableau) {
        return Some(ClickTarget::TableauSlot(pile));
    }
    if let Some(pile) = slot_hit(ContainerKind::Foundation) {
        return Some(ClickTarget::FoundationSlot(pile));
    }
    if slot_hit(ContainerKind::Stock).is_some() {
        return Some(ClickTarget::StockPlaceholder);
    }
    if slot_hit(ContainerKind::Waste).is_some() {
        return Some(ClickTarget::WasteArea);
    }
    None
}

/// ドラッグしたカードを離した時の落とし先。
///
/// 手前から見て、ドラッグ中のグループ以外で「場札か組札の一番上にある表向きのカード」が
/// あればそのカード。無ければ場札・組札の置き場所。どれでもなければ `None` (元に戻す)。
pub fn release_target(world: &World, point: Position, group: &[Entity]) -> Option<MoveDestination> {
    let card_target = cards_under_point(world, point, group).into_iter().find(|&entity| {
        let face_up = world.get_component::<Card>(entity).map_or(false, |card| card.is_face_up);
        let on_play_area = world.get_component::<StackInfo>(entity).map_or(false, |info| {
            matches!(info.stack_type, StackType::Tableau(_) | StackType::Foundation(_))
        });
        face_up && on_play_area && is_top_of_pile(world, entity)
    });
    if let Some(entity) = card_target {
        return Some(MoveDestination::Card(entity));
    }
    match find_clicked_slot(world, point)? {
        ClickTarget::TableauSlot(pile) => Some(MoveDestination::TableauSlot(pile)),
        ClickTarget::FoundationSlot(pile) => Some(MoveDestination::FoundationSlot(pile)),
        _ => None,
    }
}
