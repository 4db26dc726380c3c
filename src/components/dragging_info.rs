// src/components/dragging_info.rs

use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// ドラッグ中のカードに付くコンポーネントだよ！🖱️➡️🃏
///
/// 掴んだカード本体だけが持つ。World 全体で同時に1つまでという約束
/// (アクティブなドラッグは常に1つ) をコントローラーが守っている。
#[derive(Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    /// 一緒に動くカードたち (掴んだカード + その上に積まれたテール)。
    /// 下から上の順で、先頭が掴んだカード自身。
    pub group: Vec<Entity>,
    /// ドラッグ開始前の各カードの位置。`group` と同じ順番。
    pub original_positions: Vec<Position>,
    /// 押した地点。
    pub press_point: Position,
    /// 直前のポインター位置。移動量の計算に使う。
    pub last_point: Position,
    /// しきい値を超えて「ドラッグした」と見なされたか。
    /// false のまま離したらクリック扱い。
    pub dragged: bool,
    /// 指に付いて動くか。山札のカードは押して離すだけ (クリック専用) なので false。
    pub movable: bool,
    /// 掴んだ時にグループがいた列。ここから居なくなったカードはもう触らない。
    pub source: Option<StackType>,
}

impl DraggingInfo {
    pub fn new(
        group: Vec<Entity>,
        original_positions: Vec<Position>,
        press_point: Position,
        source: Option<StackType>,
    ) -> Self {
        Self {
            group,
            original_positions,
            press_point,
            last_point: press_point,
            dragged: false,
            movable: true,
            source,
        }
    }

    /// 動かさないでクリックだけ受け付ける押下 (山札のカード用)。
    pub fn click_only(card: Entity, position: Position, press_point: Position) -> Self {
        Self {
            movable: false,
            ..Self::new(vec![card], vec![position], press_point, Some(StackType::Stock))
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.group.contains(&entity)
    }
}

impl Component for DraggingInfo {}
