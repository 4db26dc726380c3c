//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::ALL_RANKS;
use crate::components::container::CardContainer;

/// 4つの組札が全部 A〜K (13枚) で埋まっていればクリア！🏆
pub fn check_win_condition(foundation: &CardContainer) -> bool {
    foundation.pile_count() == 4
        && foundation.piles().all(|pile| pile.len() == ALL_RANKS.len())
}
