// src/systems/deal_system.rs

use log::info;
use rand::Rng;

use crate::components::card::Card;
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};
use crate::logic::deck::{deal_plan, shuffle_deck, DECK_SIZE};
use crate::systems::container_system;

/// 新しいゲームのカード配りシステムだよ！🎉
///
/// 52枚のカードエンティティは作り直さずに使い回す。全部の列を空にして、
/// シャッフルして、山札と場札に配り直すだけ。
#[derive(Default)]
pub struct DealSystem;

impl DealSystem {
    pub fn new() -> Self {
        Self
    }

    /// 配り直す。`tableau_removes` 列ぶん場札を減らして、その分を山札に回す。
    ///
    /// 1. 全部の列を空にする (ドラッグ中の情報も捨てる)
    /// 2. シャッフル
    /// 3. 山札に裏向きで `stock_count` 枚
    /// 4. 場札の列 `i` に `i+1` 枚 (一番上だけ表)
    /// 5. ゲーム状態 (勝敗・オートコンプリート・時計) を初期化
    pub fn execute<R: Rng + ?Sized>(&self, world: &mut World, rng: &mut R, tableau_removes: u8) -> GameResult<()> {
        container_system::reset(world);
        for entity in world.get_all_entities_with_component::<DraggingInfo>() {
            world.remove_component::<DraggingInfo>(entity);
        }

        let mut cards: Vec<Entity> = world.get_all_entities_with_component::<Card>();
        if cards.len() != DECK_SIZE {
            return Err(GameError::IncompleteDeck(cards.len()));
        }
        shuffle_deck(&mut cards, rng);

        let plan = deal_plan(tableau_removes);
        let (stock_cards, tableau_cards) = cards.split_at(plan.stock_count);
        for &card in stock_cards {
            container_system::add_card(world, card, false, StackType::Stock)?;
        }
        for (&card, &(pile, face_up)) in tableau_cards.iter().zip(plan.tableau.iter()) {
            container_system::add_card(world, card, face_up, StackType::Tableau(pile))?;
        }

        for entity in world.get_all_entities_with_component::<GameState>() {
            if let Some(state) = world.get_component_mut::<GameState>(entity) {
                *state = GameState::default();
            }
        }
        info!(
            "🃏 配り終わったよ！ 山札 {} 枚 / 場札 {} 枚 (取り除いた列: {})",
            stock_cards.len(),
            tableau_cards.len(),
            tableau_removes
        );
        Ok(())
    }
}
