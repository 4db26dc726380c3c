// src/components/container.rs

use crate::components::position::Position;
use crate::components::stack::ContainerKind;
use crate::config::layout;
use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// カード置き場 (Foundation / Tableau / Stock / Waste) のコンポーネントだよ。📦
///
/// 列 (パイル) ごとのカードの並びの正本はここ。各列は追加順で、
/// 最後の要素が一番上 (ドラッグ・プレイできる側)。
/// 中身の書き換えは `systems::container_system` の add/remove/reset だけが行う。
#[derive(Debug, Clone, PartialEq)]
pub struct CardContainer {
    pub kind: ContainerKind,
    /// 1列目・1枚目のカード左上の位置。
    pub origin: Position,
    /// 列ごとの X 方向のずらし幅 (Waste では扇の広げ幅)。
    pub x_offset: f32,
    /// 列の中でカードを重ねる時の Y 方向のずらし幅。
    pub y_offset: f32,
    piles: Vec<Vec<Entity>>,
}

impl CardContainer {
    /// 種類とテーブル幅からレイアウト込みで作る。
    pub fn new(kind: ContainerKind, table_width: f32) -> Self {
        let (x_offset, y_offset) = layout::container_strides(kind);
        Self {
            kind,
            origin: layout::container_origin(kind, table_width),
            x_offset,
            y_offset,
            piles: vec![Vec::new(); kind.pile_count()],
        }
    }

    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// 列の中身 (下から上)。範囲外の列は空。
    pub fn pile(&self, pile_index: u8) -> &[Entity] {
        self.piles
            .get(usize::from(pile_index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn piles(&self) -> impl Iterator<Item = &[Entity]> {
        self.piles.iter().map(Vec::as_slice)
    }

    pub fn top(&self, pile_index: u8) -> Option<Entity> {
        self.pile(pile_index).last().copied()
    }

    pub fn pile_len(&self, pile_index: u8) -> usize {
        self.pile(pile_index).len()
    }

    pub fn is_pile_empty(&self, pile_index: u8) -> bool {
        self.pile(pile_index).is_empty()
    }

    /// 全ての列のカード枚数の合計。
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Vec::len).sum()
    }

    /// カードがどの列の何番目にあるか。
    pub fn locate(&self, card: Entity) -> Option<(u8, usize)> {
        self.piles.iter().enumerate().find_map(|(pile_index, pile)| {
            pile.iter()
                .position(|&e| e == card)
                .map(|slot| (pile_index as u8, slot))
        })
    }

    /// 列の一番上のカードの表示位置。列の開始位置 + 列番号ぶんの X + 枚数ぶんの Y。
    /// 列が空なら1枚目の位置 (= 列の置き場所そのもの)。
    pub fn pile_position(&self, pile_index: u8) -> Position {
        let slot = self.pile_len(pile_index).saturating_sub(1);
        self.slot_position(pile_index, slot)
    }

    /// 列の `slot` 番目 (0 始まり) のカードの表示位置。
    pub fn slot_position(&self, pile_index: u8, slot: usize) -> Position {
        self.origin.translated(
            f32::from(pile_index) * self.x_offset,
            slot as f32 * self.y_offset,
        )
    }

    /// 捨て札の扇の位置。0 が一番上のカード (開始位置そのまま)。
    pub fn fan_position(&self, fan_index: usize) -> Position {
        self.origin.translated(fan_index as f32 * self.x_offset, 0.0)
    }

    /// 列の置き場所 (空の列のプレースホルダー) の左上。
    pub fn placeholder_position(&self, pile_index: u8) -> Position {
        self.slot_position(pile_index, 0)
    }

    /// 列に積む。積んだ後の列の長さを返す。範囲外の列なら `None`。
    pub(crate) fn push(&mut self, pile_index: u8, card: Entity) -> Option<usize> {
        let pile = self.piles.get_mut(usize::from(pile_index))?;
        pile.push(card);
        Some(pile.len())
    }

    /// 列から取り除く。入っていなければ false。
    pub(crate) fn remove(&mut self, pile_index: u8, card: Entity) -> bool {
        match self.piles.get_mut(usize::from(pile_index)) {
            Some(pile) => match pile.iter().position(|&e| e == card) {
                Some(slot) => {
                    pile.remove(slot);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// 列の一番上を取り出す。
    pub(crate) fn pop(&mut self, pile_index: u8) -> Option<Entity> {
        self.piles.get_mut(usize::from(pile_index))?.pop()
    }

    /// 全ての列を空にして、入っていたカードを返す。
    pub(crate) fn clear(&mut self) -> Vec<Entity> {
        self.piles.iter_mut().flat_map(std::mem::take).collect()
    }
}

impl Component for CardContainer {}
