// src/app/stock_handler.rs
//! Handles logic related to clicking the Stock pile (dealing to Waste, resetting Waste).

use log::info;

use crate::components::stack::{ContainerKind, StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};
use crate::logic::rules::{get_container, stock_waste};
use crate::systems::container_system;

/// Deals the clicked Stock card to the Waste pile, face up.
/// Returns true if a card was dealt, false otherwise.
pub fn deal_one_card_from_stock(world: &mut World, card: Entity) -> GameResult<bool> {
    let in_stock = world
        .get_component::<StackInfo>(card)
        .map_or(false, |info| info.stack_type == StackType::Stock);
    if !in_stock {
        return Ok(false);
    }
    let stock_is_empty = get_container(world, ContainerKind::Stock)
        .ok_or(GameError::MissingContainer(ContainerKind::Stock))?
        .is_pile_empty(0);
    if !stock_waste::can_deal_from_stock(stock_is_empty) {
        return Ok(false);
    }

    container_system::deal_stock_card(world, card)?;
    info!("Card {} moved from Stock to Waste.", card);
    Ok(true)
}

/// Moves the whole Waste pile back to the Stock, face down, when the Stock is empty.
/// Returns true if the reset was performed, false otherwise.
pub fn reset_waste_to_stock(world: &mut World) -> GameResult<bool> {
    let stock_is_empty = get_container(world, ContainerKind::Stock)
        .ok_or(GameError::MissingContainer(ContainerKind::Stock))?
        .is_pile_empty(0);
    let waste_is_empty = get_container(world, ContainerKind::Waste)
        .ok_or(GameError::MissingContainer(ContainerKind::Waste))?
        .is_pile_empty(0);

    if !stock_waste::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
        info!("Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return Ok(false);
    }
    let moved = container_system::reload_stock(world)?;
    info!("Waste pile reset to Stock complete ({} cards).", moved);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::test_support::{empty_board, place, stack_of};

    #[test]
    fn dealing_flips_the_card_onto_the_waste() {
        let mut world = empty_board();
        let card = place(&mut world, Suit::Heart, Rank::Four, StackType::Stock, false);
        assert!(deal_one_card_from_stock(&mut world, card).unwrap());
        assert_eq!(stack_of(&world, card), Some(StackType::Waste));
        assert!(world.get_component::<Card>(card).unwrap().is_face_up);
        assert!(!deal_one_card_from_stock(&mut world, card).unwrap(), "もう山札にいない");
    }

    #[test]
    fn reset_only_when_stock_is_empty() {
        let mut world = empty_board();
        let a = place(&mut world, Suit::Heart, Rank::Four, StackType::Stock, false);
        let b = place(&mut world, Suit::Heart, Rank::Five, StackType::Stock, false);
        deal_one_card_from_stock(&mut world, b).unwrap();
        assert!(!reset_waste_to_stock(&mut world).unwrap(), "山札がまだ残っている");

        deal_one_card_from_stock(&mut world, a).unwrap();
        assert!(reset_waste_to_stock(&mut world).unwrap());
        assert_eq!(stack_of(&world, b), Some(StackType::Stock));
        assert!(!reset_waste_to_stock(&mut world).unwrap(), "捨て札が空");
    }
}
