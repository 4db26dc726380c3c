// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体が World に登録できるデータ部品であることを示すマーカー。
/// `Debug` はログ出力用、`'static` は `TypeId` で型を区別するために必要。
pub trait Component: std::fmt::Debug + 'static {}
