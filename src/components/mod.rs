// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod container; // カード置き場 📦
pub mod dragging_info;
pub mod game_state;
pub mod position;
pub mod stack;

pub use card::{Card, Rank, Suit};
pub use container::CardContainer;
pub use dragging_info::DraggingInfo;
pub use game_state::{AutoCompleteStatus, GameClock, GameState, GameStatus};
pub use position::Position;
pub use stack::{ContainerKind, StackInfo, StackType};
