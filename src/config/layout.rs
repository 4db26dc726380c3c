// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードの大きさ、各コンテナの開始位置、カード同士のずらし幅など。

use crate::components::position::Position;
use crate::components::stack::ContainerKind;

pub const CARD_WIDTH: f32 = 150.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 210.0; // カード画像の高さ
pub const PAD: f32 = 30.0; // 画面端とコンテナの余白
pub const PILE_GAP: f32 = 10.0; // 列と列の隙間

/// 組札・場札の列間の X 方向の間隔
pub const PILE_X_OFFSET: f32 = CARD_WIDTH + PILE_GAP;
/// 場札でカードをずらす量 (カードの高さの 1/6)
pub const TABLEAU_Y_OFFSET: f32 = CARD_HEIGHT / 6.0;
/// 捨て札を扇状に広げる量 (左向き)
pub const WASTE_FAN_X_OFFSET: f32 = -(CARD_WIDTH / 4.0);
/// 捨て札で見せる最大枚数
pub const WASTE_FAN_SIZE: usize = 3;

/// ドラッグ中のカードを手前に出すための Z の底上げ
pub const DRAG_Z_BOOST: u32 = 100;

/// コンテナの開始位置 (1列目のカード左上)。Stock と Waste は画面右上なので
/// テーブルの幅に依存する。
pub fn container_origin(kind: ContainerKind, table_width: f32) -> Position {
    match kind {
        ContainerKind::Foundation => Position::new(PAD, PAD),
        ContainerKind::Tableau => Position::new(PAD, CARD_HEIGHT + PAD * 2.0),
        ContainerKind::Stock => Position::new(table_width - CARD_WIDTH - PAD, PAD),
        ContainerKind::Waste => Position::new(table_width - CARD_WIDTH * 2.0 - PAD * 2.0, PAD),
    }
}

/// コンテナごとのずらし幅 (x, y)。
pub fn container_strides(kind: ContainerKind) -> (f32, f32) {
    match kind {
        ContainerKind::Foundation => (PILE_X_OFFSET, 0.0),
        ContainerKind::Tableau => (PILE_X_OFFSET, TABLEAU_Y_OFFSET),
        ContainerKind::Stock => (0.0, 0.0),
        ContainerKind::Waste => (WASTE_FAN_X_OFFSET, 0.0),
    }
}

/// 点が矩形 (左上 + カード1枚ぶんの大きさ) の中にあるか。
pub fn is_point_in_card_rect(point: Position, top_left: Position) -> bool {
    point.x >= top_left.x
        && point.x < top_left.x + CARD_WIDTH
        && point.y >= top_left.y
        && point.y < top_left.y + CARD_HEIGHT
}
