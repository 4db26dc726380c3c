// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// カード置き場 (コンテナ) の種類だよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// 組札。スートごとに4列。
    Foundation,
    /// 場札。7列。
    Tableau,
    /// 山札。
    Stock,
    /// 山札からめくったカードの置き場。
    Waste,
}

pub const ALL_CONTAINERS: [ContainerKind; 4] = [
    ContainerKind::Foundation,
    ContainerKind::Tableau,
    ContainerKind::Stock,
    ContainerKind::Waste,
];

impl ContainerKind {
    /// このコンテナが持つ列 (パイル) の数。
    pub fn pile_count(self) -> usize {
        match self {
            ContainerKind::Foundation => 4,
            ContainerKind::Tableau => 7,
            ContainerKind::Stock | ContainerKind::Waste => 1,
        }
    }

    /// コンテナ + 列番号から StackType を作る。Stock/Waste は列番号を無視する。
    pub fn stack(self, pile_index: u8) -> StackType {
        match self {
            ContainerKind::Foundation => StackType::Foundation(pile_index),
            ContainerKind::Tableau => StackType::Tableau(pile_index),
            ContainerKind::Stock => StackType::Stock,
            ContainerKind::Waste => StackType::Waste,
        }
    }
}

/// カードが存在する場所 (どのコンテナの何列目か) を示す Enum だよ。
/// Clone, Copy: 値を簡単に複製できるようにする。
/// Serialize, Deserialize: JSON でレンダラーとやり取りするため。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 組札。0: Spade, 1: Heart, 2: Diamond, 3: Club
    Foundation(u8),
    /// 場札。列番号 (0-6)。
    Tableau(u8),
    Stock,
    Waste,
}

impl StackType {
    pub fn kind(self) -> ContainerKind {
        match self {
            StackType::Foundation(_) => ContainerKind::Foundation,
            StackType::Tableau(_) => ContainerKind::Tableau,
            StackType::Stock => ContainerKind::Stock,
            StackType::Waste => ContainerKind::Waste,
        }
    }

    pub fn pile_index(self) -> u8 {
        match self {
            StackType::Foundation(i) | StackType::Tableau(i) => i,
            StackType::Stock | StackType::Waste => 0,
        }
    }
}

/// カードの「置き場所」コンポーネント。
///
/// カードからコンテナへの弱い参照 (コンテナ種別 + 列番号) で、所有はしない。
/// 列の中身の正本は `CardContainer` 側が持っていて、このコンポーネントは
/// コンテナの add/remove からしか書き換えない約束だよ。
/// コンテナから外れている間 (リセット直後など) はこのコンポーネント自体が無い。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackInfo {
    pub stack_type: StackType,
    /// 描画順。追加した時点の列の長さ (1 始まり) で、大きいほど手前。
    pub draw_order: u32,
}

impl StackInfo {
    pub fn new(stack_type: StackType, draw_order: u32) -> Self {
        Self { stack_type, draw_order }
    }
}

impl Component for StackInfo {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_type_round_trip_through_kind() {
        for kind in ALL_CONTAINERS {
            for pile in 0..kind.pile_count() as u8 {
                let stack = kind.stack(pile);
                assert_eq!(stack.kind(), kind);
                assert_eq!(stack.pile_index(), pile);
            }
        }
        assert_eq!(ContainerKind::Tableau.pile_count(), 7);
        assert_eq!(ContainerKind::Foundation.pile_count(), 4);
    }

    #[test]
    fn test_stack_info_creation() {
        let info = StackInfo::new(StackType::Tableau(2), 5);
        assert_eq!(info.stack_type, StackType::Tableau(2));
        assert_eq!(info.draw_order, 5);
        println!("StackInfo 作成テスト、成功！👍");
    }
}
