// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 2D のシーン座標 (カード左上) を表すコンポーネントだよ。📍
///
/// ルール判定には使わない、レンダラー向けのヒント。コンテナが
/// カードを置いた時に「ここに描いてね」という目標位置を入れておく。
/// ドラッグ中だけは指の動きに合わせて直接書き換わる。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// マンハッタン距離。ドラッグ開始のしきい値判定に使う。
    pub fn manhattan_distance(self, other: Position) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Component for Position {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_move_position() {
        let pos = Position::new(100.5, -50.0);
        assert_eq!(pos.x, 100.5);
        assert_eq!(pos.y, -50.0);
        assert_eq!(pos.translated(-0.5, 10.0), Position::new(100.0, -40.0));
        assert_eq!(Position::default(), Position::new(0.0, 0.0));
    }

    #[test]
    fn manhattan_distance_adds_both_axes() {
        let a = Position::new(0.0, 0.0);
        assert_eq!(a.manhattan_distance(Position::new(3.0, -4.0)), 7.0);
        assert_eq!(a.manhattan_distance(a), 0.0);
    }
}
