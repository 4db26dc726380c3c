// src/ecs/system.rs

use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// システムはゲームのロジックを1ステップぶん実行する役割を持つ。
/// コントローラー (またはテスト) が必要なタイミングで `run` を呼ぶんだ。
/// 例えば勝利判定システムは `run` のたびに組札を数えて、揃っていれば
/// GameState を Won にする。
pub trait System {
    /// このシステムを1回実行するよ。
    fn run(&mut self, world: &mut World);
}
