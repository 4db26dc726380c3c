// src/app/renderer.rs
//! 描画コマンドの生成。実際に描くのは外のレンダラー (JS) で、
//! ここでは World の状態と前回送った状態を比べて、変わったカードだけコマンドにするよ。🎨

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::app::drag_handler::active_drag;
use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::StackInfo;
use crate::config::layout::DRAG_Z_BOOST;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

/// レンダラーへの指示。JSON では `"type"` で見分ける。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderCommand {
    /// カードを (x, y, z) に、`image` の画像で置く。`animate_ms` が 0 なら即座に。
    PlaceCard {
        card: Entity,
        image: String,
        x: f32,
        y: f32,
        z: u32,
        animate_ms: u32,
    },
    ShowWinDialog,
    HideWinDialog,
    AutoCompleteButton { visible: bool },
    ClockText { text: String },
}

/// 1枚のカードの見た目。
#[derive(Debug, Clone, PartialEq)]
struct CardView {
    image: String,
    position: Position,
    z: u32,
}

/// 前回送ったカードの見た目を覚えておく。
#[derive(Debug, Default)]
pub struct RenderState {
    last_rendered: HashMap<Entity, CardView>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 次の `sync` で全カードを送り直させる。
    pub fn invalidate(&mut self) {
        self.last_rendered.clear();
    }

    /// 変わったカードの PlaceCard を `out` に積む。
    ///
    /// ドラッグ中のグループは Z を底上げして、アニメーションなしで指に付いてくる。
    /// それ以外は `animate_ms` かけて目標位置へ。
    pub fn sync(&mut self, world: &World, animate_ms: u32, out: &mut VecDeque<RenderCommand>) {
        let dragging = active_drag(world).map(|(_, info)| info);

        for entity in world.get_all_entities_with_component::<Card>() {
            let Some(card) = world.get_component::<Card>(entity) else {
                continue;
            };
            let position = world.get_component::<Position>(entity).copied().unwrap_or_default();
            let draw_order = world.get_component::<StackInfo>(entity).map_or(0, |info| info.draw_order);
            let in_drag = dragging.map_or(false, |info| info.contains(entity));
            let view = CardView {
                image: card.visible_image_key(),
                position,
                z: if in_drag { draw_order + DRAG_Z_BOOST } else { draw_order },
            };
            if self.last_rendered.get(&entity) == Some(&view) {
                continue;
            }
            out.push_back(RenderCommand::PlaceCard {
                card: entity,
                image: view.image.clone(),
                x: view.position.x,
                y: view.position.y,
                z: view.z,
                animate_ms: if in_drag { 0 } else { animate_ms },
            });
            self.last_rendered.insert(entity, view);
        }
    }
}
