// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use rand::seq::SliceRandom;
use rand::Rng;

/// 1組のトランプの枚数。
pub const DECK_SIZE: usize = 52;
/// 場札の列数。
pub const TABLEAU_PILES: u8 = 7;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スート順 (Spade, Heart, Diamond, Club) × ランク順 (A..K) で並んでいて、
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// 何でもシャッフルする。乱数生成器は呼び出し側が渡す (シード固定でテストできるように)。
pub fn shuffle_deck<T, R: Rng + ?Sized>(deck: &mut [T], rng: &mut R) {
    deck.shuffle(rng);
}

/// 配り方の計画。山札に何枚入れて、場札のどの列に表/裏で置くか。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealPlan {
    pub stock_count: usize,
    /// 配る順番に (列番号, 表向きか)。
    pub tableau: Vec<(u8, bool)>,
}

/// 場札から `removes` 列を取り除いた配り方を計算する。
///
/// 山札は `24 + 7r - r(r-1)/2` 枚、場札は列 `i` (0..7-r) に `i+1` 枚で
/// 一番上だけ表向き。合計は必ず 52 枚になる。
pub fn deal_plan(removes: u8) -> DealPlan {
    let r = usize::from(removes.min(TABLEAU_PILES - 1));
    let stock_count = 24 + 7 * r - r * r.saturating_sub(1) / 2;
    let mut tableau = Vec::new();
    for pile in 0..(TABLEAU_PILES - r as u8) {
        for slot in 0..=pile {
            tableau.push((pile, slot == pile));
        }
    }
    DealPlan { stock_count, tableau }
}
