// src/components/card.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// カードのスート（マーク）だよ！♠️❤️♦️♣️
///
/// 並び順には意味があって、組札 (Foundation) の列番号と一致する。
/// 0: Spade, 1: Heart, 2: Diamond, 3: Club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

/// カードのランク。A = 1 … K = 13 として数値比較できるようにしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    /// 画像キーに使う1文字 (S/H/D/C)。
    pub fn letter(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }
}

impl Rank {
    /// 1..=13 の数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 裏向きカードを描く時の画像キー。
pub const BACKSIDE_IMAGE: &str = "backside";

/// カードそのものを表すコンポーネントだよ！🃏
///
/// `suit` と `rank` はカードの不変の正体。`is_face_up` だけが
/// コンテナ操作 (add/remove) とめくり処理で書き換わる。
/// どこに置かれているかは `StackInfo` コンポーネントの担当。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表裏をセットする。裏向きのカードはドラッグもプレイもできない。
    pub fn flip(&mut self, face_up: bool) {
        self.is_face_up = face_up;
    }

    /// レンダラーに渡す画像キー。"AS", "10H", "QD" みたいな形。
    pub fn face_image_key(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.letter())
    }

    /// 今の表裏で実際に見えている画像のキー。
    pub fn visible_image_key(&self) -> String {
        if self.is_face_up {
            self.face_image_key()
        } else {
            BACKSIDE_IMAGE.to_string()
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.face_image_key())
    }
}

impl Component for Card {}
