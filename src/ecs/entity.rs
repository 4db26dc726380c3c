// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

/// Entity（エンティティ）は、ゲームに登場する「モノ」を表すただの ID だよ！
///
/// カード1枚1枚、カード置き場 (コンテナ)、ゲーム状態そのものもエンティティ。
/// ID だけだと意味はなくて、コンポーネントと組み合わせて初めて
/// 「ID 7 はスペードのAで、場札の3列目にある」みたいな意味を持つんだ。
///
/// カードの ID はゲームをまたいでずっと同じ。新しいゲームでは
/// 同じエンティティを配り直すだけだよ。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
