// src/config/game_config.rs

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// 場札から取り除ける列の最大数 (7列のうち最低1列は残す)。
pub const MAX_TABLEAU_REMOVES: u8 = 6;

/// ゲームの設定だよ！⚙️
///
/// JS 側から JSON で渡せる。書かなかった項目はデフォルト値になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// テーブル (描画領域) の幅。山札・捨て札の位置がこれで決まる。
    pub table_width: f32,
    pub table_height: f32,
    /// 配る時に場札の右側から取り除く列の数。0 なら普通のクロンダイク。
    pub tableau_removes: u8,
    /// 押してからこの距離 (マンハッタン) を超えて動いたらドラッグ扱い。
    pub drag_threshold: f32,
    /// カードが目標位置まで動くアニメーションの長さ。
    pub move_animation_ms: u32,
    /// オートコンプリートで1手ごとに待つ時間。
    pub auto_complete_step_ms: u64,
    /// シャッフルのシード。指定すると毎回同じ配り方になる。
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            table_width: 1344.0,
            table_height: 756.0,
            tableau_removes: 0,
            drag_threshold: 20.0,
            move_animation_ms: 300,
            auto_complete_step_ms: 100,
            seed: None,
        }
    }
}

impl GameConfig {
    /// JSON 文字列から読み込んで検証する。
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.tableau_removes > MAX_TABLEAU_REMOVES {
            return Err(GameError::InvalidConfig(format!(
                "tableau_removes must be at most {}, got {}",
                MAX_TABLEAU_REMOVES, self.tableau_removes
            )));
        }
        if !(self.table_width > 0.0 && self.table_height > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "table size must be positive, got {}x{}",
                self.table_width, self.table_height
            )));
        }
        if self.drag_threshold < 0.0 {
            return Err(GameError::InvalidConfig("drag_threshold must not be negative".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.drag_threshold, 20.0);
        assert_eq!(config.auto_complete_step_ms, 100);
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config = GameConfig::from_json(r#"{"tableau_removes": 2, "seed": 42}"#).unwrap();
        assert_eq!(config.tableau_removes, 2);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.table_width, 1344.0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = GameConfig::from_json(r#"{"tableau_removes": 7}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        let err = GameConfig::from_json(r#"{"table_width": 0}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }
}
