// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Rank, Suit, ALL_RANKS};
use crate::components::stack::{ContainerKind, StackType};
use crate::test_support::{empty_board, place};

// --- 各ルール関数のテスト ---

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
    assert!(are_opposite_colors(Suit::Heart, Suit::Spade));
    assert!(!are_opposite_colors(Suit::Heart, Suit::Diamond));
    println!("CardColor テスト、成功！🎉");
}

#[test]
fn test_foundation_suit_order() {
    assert_eq!(get_foundation_suit(0), Some(Suit::Spade));
    assert_eq!(get_foundation_suit(3), Some(Suit::Club));
    assert_eq!(get_foundation_suit(4), None);
    for idx in 0..4 {
        let suit = get_foundation_suit(idx).unwrap();
        assert_eq!(foundation_index_of(suit), idx);
    }
}

#[test]
fn test_stock_waste_rules() {
    // ストックがある場合
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false), "ストックがある場合はリセットできないはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    // ストックが空の場合
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");
    println!("Stock/Waste ルールテスト、成功！🎉");
}

#[test]
fn test_win_condition() {
    let mut world = empty_board();
    for idx in 0..4u8 {
        let suit = get_foundation_suit(idx).unwrap();
        for rank in ALL_RANKS {
            if !(suit == Suit::Club && rank == Rank::King) {
                place(&mut world, suit, rank, StackType::Foundation(idx), true);
            }
        }
    }
    assert!(
        !check_win_condition(get_container(&world, ContainerKind::Foundation).unwrap()),
        "51枚ではクリアじゃないはず！🙅"
    );

    place(&mut world, Suit::Club, Rank::King, StackType::Foundation(3), true);
    assert!(
        check_win_condition(get_container(&world, ContainerKind::Foundation).unwrap()),
        "52枚全部上がればクリアなはず！🏆"
    );
    println!("ゲームクリア判定テスト、成功！🎉");
}

// --- World を使うテスト ---

#[test]
fn test_can_move_to_tableau_world() {
    let mut world = empty_board();
    let king_spades = place(&mut world, Suit::Spade, Rank::King, StackType::Waste, true);
    let queen_hearts = place(&mut world, Suit::Heart, Rank::Queen, StackType::Tableau(2), true);
    let queen_spades = place(&mut world, Suit::Spade, Rank::Queen, StackType::Tableau(3), true);
    place(&mut world, Suit::Club, Rank::King, StackType::Tableau(1), true);

    // 空の列には K だけ
    assert!(can_move_to_tableau(&world, king_spades, 0), "K は空の列に置けるはず");
    assert!(!can_move_to_tableau(&world, queen_hearts, 0), "Q は空の列に置けないはず");

    // K♣ の上: 色違いで1つ小さいランク
    assert!(can_move_to_tableau(&world, queen_hearts, 1), "Q♥ は K♣ の上に置けるはず");
    assert!(!can_move_to_tableau(&world, queen_spades, 1), "Q♠ は K♣ の上に置けないはず (同じ色)");
    assert!(!can_move_to_tableau(&world, king_spades, 1), "K は K の上に置けないはず");
    println!("Tableau 移動ルールテスト、成功！🎉");
}

#[test]
fn test_tableau_target_must_be_face_up() {
    let mut world = empty_board();
    place(&mut world, Suit::Club, Rank::Six, StackType::Tableau(0), false);
    let five = place(&mut world, Suit::Heart, Rank::Five, StackType::Waste, true);
    assert!(!can_move_to_tableau(&world, five, 0), "裏向きのカードの上には置けない");
}

#[test]
fn test_can_move_to_foundation_rules() {
    let mut world = empty_board();
    let ace_hearts = place(&mut world, Suit::Heart, Rank::Ace, StackType::Waste, true);
    let two_spades = place(&mut world, Suit::Spade, Rank::Two, StackType::Tableau(0), true);

    assert!(can_move_to_foundation(&world, ace_hearts, 1), "A♥ はハートの組札へ");
    assert!(!can_move_to_foundation(&world, ace_hearts, 0), "A♥ はスペードの組札には行けない");
    assert!(!can_move_to_foundation(&world, two_spades, 0), "空の組札には A だけ");

    place(&mut world, Suit::Spade, Rank::Ace, StackType::Foundation(0), true);
    assert_eq!(foundation_top_value(&world, 0), 1);
    assert_eq!(foundation_top_value(&world, 2), 0);
    assert!(can_move_to_foundation(&world, two_spades, 0), "A♠ の上に 2♠");
    println!("Foundation 移動ルールテスト、成功！🎉");
}

#[test]
fn test_plan_move_decision_table() {
    let mut world = empty_board();
    let ten = place(&mut world, Suit::Club, Rank::Ten, StackType::Tableau(0), true);
    let nine = place(&mut world, Suit::Heart, Rank::Nine, StackType::Tableau(1), true);
    let eight = place(&mut world, Suit::Spade, Rank::Eight, StackType::Tableau(1), true);
    let ace = place(&mut world, Suit::Diamond, Rank::Ace, StackType::Waste, true);
    let king = place(&mut world, Suit::Diamond, Rank::King, StackType::Tableau(4), true);

    // 9♥ を 10♣ の上へ: 8♠ もついてくる
    let plan = plan_move(&world, nine, MoveDestination::Card(ten)).unwrap();
    assert_eq!(plan.cards, vec![nine, eight]);
    assert_eq!(plan.to, StackType::Tableau(0));

    // 上にカードが乗っている 9♥ は移動先にならない
    assert_eq!(plan_move(&world, king, MoveDestination::Card(nine)), None);

    // 組札の空き: 列のスートの A だけ、1枚で
    assert_eq!(
        plan_move(&world, ace, MoveDestination::FoundationSlot(2)),
        Some(MovePlan::single(ace, StackType::Foundation(2)))
    );
    assert_eq!(plan_move(&world, ace, MoveDestination::FoundationSlot(1)), None);
    // テールがあるカードは組札に行けない
    assert_eq!(plan_move(&world, nine, MoveDestination::FoundationSlot(1)), None);

    // 場札の空き: K だけ。埋まっている列の置き場所はダメ
    assert!(plan_move(&world, king, MoveDestination::TableauSlot(6)).is_some());
    assert_eq!(plan_move(&world, king, MoveDestination::TableauSlot(0)), None);
    assert_eq!(plan_move(&world, nine, MoveDestination::TableauSlot(6)), None);
    assert_eq!(plan_move(&world, king, MoveDestination::TableauSlot(9)), None);

    // 自分自身の上には置けない
    assert_eq!(plan_move(&world, eight, MoveDestination::Card(eight)), None);
}

#[test]
fn test_waste_cards_below_the_top_are_not_playable() {
    let mut world = empty_board();
    let six = place(&mut world, Suit::Spade, Rank::Six, StackType::Tableau(0), true);
    let covered = place(&mut world, Suit::Heart, Rank::Five, StackType::Waste, true);
    let top = place(&mut world, Suit::Diamond, Rank::Five, StackType::Waste, true);

    assert!(!is_playable(&world, covered));
    assert!(is_playable(&world, top));
    assert_eq!(plan_move(&world, covered, MoveDestination::Card(six)), None);
    assert!(plan_move(&world, top, MoveDestination::Card(six)).is_some());
}

#[test]
fn test_slot_codes() {
    assert_eq!(MoveDestination::from_slot_code(0), Some(MoveDestination::TableauSlot(0)));
    assert_eq!(MoveDestination::from_slot_code(6), Some(MoveDestination::TableauSlot(6)));
    assert_eq!(MoveDestination::from_slot_code(7), None);
    assert_eq!(MoveDestination::from_slot_code(10), Some(MoveDestination::FoundationSlot(0)));
    assert_eq!(MoveDestination::from_slot_code(13), Some(MoveDestination::FoundationSlot(3)));
    assert_eq!(MoveDestination::from_slot_code(-1), None);
}

#[test]
fn test_moving_group_and_top() {
    let mut world = empty_board();
    let bottom = place(&mut world, Suit::Club, Rank::Ten, StackType::Tableau(5), false);
    let middle = place(&mut world, Suit::Heart, Rank::Nine, StackType::Tableau(5), true);
    let top = place(&mut world, Suit::Spade, Rank::Eight, StackType::Tableau(5), true);

    assert_eq!(moving_group(&world, middle), vec![middle, top]);
    assert_eq!(moving_group(&world, top), vec![top]);
    assert!(is_top_of_pile(&world, top));
    assert!(!is_top_of_pile(&world, bottom));
    assert_eq!(get_top_card_entity(&world, StackType::Tableau(5)), Some(top));
    assert_eq!(get_top_card_entity(&world, StackType::Tableau(6)), None);
    assert!(!is_draggable(&world, bottom), "裏向きは掴めない");
    assert!(is_draggable(&world, middle));
}
