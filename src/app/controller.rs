// src/app/controller.rs
//! ゲーム全体の進行役。入力イベントを1つずつ処理して、World を更新して、
//! 描画コマンドを溜めていくよ。🎮

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::drag_handler::{self, DragRelease};
use crate::app::event_handler::{find_clicked_element, ClickTarget, InputEvent};
use crate::app::init_handler::initialize_world;
use crate::app::renderer::{RenderCommand, RenderState};
use crate::app::stock_handler;
use crate::components::card::Card;
use crate::components::game_state::{AutoCompleteStatus, GameState, GameStatus};
use crate::components::position::Position;
use crate::components::stack::{StackInfo, StackType};
use crate::config::GameConfig;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::GameResult;
use crate::logic::auto_move::can_auto_complete;
use crate::logic::rules::MoveDestination;
use crate::systems::{
    AutoCompleteStep, AutoCompleteSystem, DealSystem, MoveCardSystem, WinConditionSystem, GAME_STATE_ENTITY,
};

/// `validate_move` の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// ルール違反などで何も動かなかった。
    Rejected,
    Moved,
    /// 動いて、その結果ゲームクリアになった。
    Won,
}

pub struct GameController {
    world: World,
    config: GameConfig,
    rng: StdRng,
    commands: VecDeque<RenderCommand>,
    render_state: RenderState,
    /// オートコンプリートの次の1手までに溜まった時間。
    auto_complete_elapsed_ms: u64,
    move_system: MoveCardSystem,
    deal_system: DealSystem,
    win_system: WinConditionSystem,
    auto_complete_system: AutoCompleteSystem,
}

impl GameController {
    /// 設定を検証して World を作り、最初のゲームを配る。
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut controller = Self {
            world: initialize_world(&config),
            config,
            rng,
            commands: VecDeque::new(),
            render_state: RenderState::new(),
            auto_complete_elapsed_ms: 0,
            move_system: MoveCardSystem::new(),
            deal_system: DealSystem::new(),
            win_system: WinConditionSystem::new(),
            auto_complete_system: AutoCompleteSystem::new(),
        };
        controller.new_game()?;
        Ok(controller)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game_state(&self) -> Option<&GameState> {
        self.world.get_component::<GameState>(GAME_STATE_ENTITY)
    }

    fn game_state_mut(&mut self) -> Option<&mut GameState> {
        self.world.get_component_mut::<GameState>(GAME_STATE_ENTITY)
    }

    /// 溜まった描画コマンドを全部取り出す。
    pub fn drain_commands(&mut self) -> Vec<RenderCommand> {
        self.commands.drain(..).collect()
    }

    /// シャッフルして配り直す。時計・オートコンプリート・勝利ダイアログもリセット。
    pub fn new_game(&mut self) -> GameResult<()> {
        self.deal_system
            .execute(&mut self.world, &mut self.rng, self.config.tableau_removes)?;
        self.auto_complete_elapsed_ms = 0;
        self.render_state.invalidate();
        self.commands.push_back(RenderCommand::HideWinDialog);
        self.commands.push_back(RenderCommand::AutoCompleteButton { visible: false });
        self.commands.push_back(RenderCommand::ClockText { text: GameState::default().clock.display() });
        self.check_auto_complete();
        self.sync_render();
        info!("GameController: 新しいゲームを始めたよ！🃏");
        Ok(())
    }

    /// カードを動かす。`destination` が無ければ自動で行き先を探す (クリック)。
    ///
    /// 山札のカードは捨て札へめくる。場札の裏向きカードは動かせない。
    /// 動いたら時計を動かし、オートコンプリートできるかと勝利を確認する。
    pub fn validate_move(&mut self, card: Entity, destination: Option<MoveDestination>) -> GameResult<MoveOutcome> {
        if self.is_locked() {
            return Ok(MoveOutcome::Rejected);
        }
        let Some(stack) = self.world.get_component::<StackInfo>(card).map(|info| info.stack_type) else {
            warn!("GameController: {} はどの列にも入っていないよ", card);
            return Ok(MoveOutcome::Rejected);
        };
        let face_up = self.world.get_component::<Card>(card).map_or(false, |c| c.is_face_up);

        let moved = match (stack, destination) {
            (StackType::Stock, _) => stock_handler::deal_one_card_from_stock(&mut self.world, card)?,
            (StackType::Tableau(_), _) if !face_up => false,
            (_, Some(destination)) => self.move_system.check_move(&mut self.world, card, destination)?,
            (_, None) => self.move_system.check_automatic_moves(&mut self.world, card)?,
        };
        if moved {
            if let Some(state) = self.game_state_mut() {
                state.clock.start();
            }
        } else {
            debug!("GameController: {} は動かなかった", card);
        }

        self.check_auto_complete();
        if self.check_win() {
            return Ok(MoveOutcome::Won);
        }
        Ok(if moved { MoveOutcome::Moved } else { MoveOutcome::Rejected })
    }

    /// 場札に裏向きカードが無くなっていたらオートコンプリートボタンを出す。
    pub fn check_auto_complete(&mut self) -> bool {
        let Some(current) = self.game_state().map(|state| (state.status, state.auto_complete)) else {
            return false;
        };
        if current.0 == GameStatus::Won || current.1 == AutoCompleteStatus::Running {
            return false;
        }
        let available = can_auto_complete(&self.world);
        let next = if available { AutoCompleteStatus::Available } else { AutoCompleteStatus::Unavailable };
        if next != current.1 {
            if let Some(state) = self.game_state_mut() {
                state.auto_complete = next;
            }
            self.commands.push_back(RenderCommand::AutoCompleteButton { visible: available });
        }
        available
    }

    /// オートコンプリートを始める。ボタンが出ている時だけ。
    pub fn start_auto_complete(&mut self) -> bool {
        let available = self
            .game_state()
            .map_or(false, |state| state.status == GameStatus::Playing && state.auto_complete == AutoCompleteStatus::Available);
        if !available {
            return false;
        }
        if let Some((card, _)) = drag_handler::active_drag(&self.world) {
            warn!("GameController: {} をドラッグ中なのでオートコンプリートは始めない", card);
            return false;
        }
        if let Some(state) = self.game_state_mut() {
            state.auto_complete = AutoCompleteStatus::Running;
            state.clock.start();
        }
        self.auto_complete_elapsed_ms = 0;
        self.commands.push_back(RenderCommand::AutoCompleteButton { visible: false });
        info!("GameController: オートコンプリート開始 🪄");
        true
    }

    /// 勝っていたら勝利ダイアログを出す (1回だけ)。
    pub fn check_win(&mut self) -> bool {
        let already_won = self.game_state().map_or(false, |state| state.status == GameStatus::Won);
        if !self.win_system.check_win(&mut self.world) {
            return false;
        }
        if !already_won {
            self.commands.push_back(RenderCommand::AutoCompleteButton { visible: false });
            self.commands.push_back(RenderCommand::ShowWinDialog);
            if let Some(text) = self.game_state().map(|state| state.clock.display()) {
                self.commands.push_back(RenderCommand::ClockText { text });
            }
        }
        true
    }

    /// 入力イベントを1つ処理して、描画コマンドを更新する。
    pub fn handle_event(&mut self, event: InputEvent) -> GameResult<()> {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(Position::new(x, y))?,
            InputEvent::PointerMove { x, y } => {
                drag_handler::update_dragged_position(&mut self.world, Position::new(x, y), self.config.drag_threshold)
            }
            InputEvent::PointerUp { x, y } => self.pointer_up(Position::new(x, y))?,
            InputEvent::StockPlaceholderClicked => self.reload_stock()?,
            InputEvent::AutoCompleteClicked => {
                self.start_auto_complete();
            }
            InputEvent::RestartClicked | InputEvent::WinDialogRestartClicked => self.new_game()?,
            InputEvent::Tick { elapsed_ms } => self.tick(elapsed_ms)?,
        }
        self.sync_render();
        Ok(())
    }

    /// 空き列の番号で落とし先を指定して動かす。0-6 は場札、10-13 は組札の置き場所。
    pub fn move_to_slot(&mut self, card: Entity, slot_code: i32) -> GameResult<MoveOutcome> {
        let Some(destination) = MoveDestination::from_slot_code(slot_code) else {
            warn!("GameController: 知らない置き場所の番号 {}", slot_code);
            return Ok(MoveOutcome::Rejected);
        };
        let outcome = self.validate_move(card, Some(destination))?;
        self.sync_render();
        Ok(outcome)
    }

    fn is_on_table(&self, point: Position) -> bool {
        (0.0..self.config.table_width).contains(&point.x) && (0.0..self.config.table_height).contains(&point.y)
    }

    /// 勝った後とオートコンプリート中は盤面を触らせない。
    fn is_locked(&self) -> bool {
        self.game_state().map_or(true, |state| {
            state.status == GameStatus::Won || state.auto_complete == AutoCompleteStatus::Running
        })
    }

    fn pointer_down(&mut self, point: Position) -> GameResult<()> {
        if self.is_locked() || !self.is_on_table(point) {
            return Ok(());
        }
        if let Some((current, _)) = drag_handler::active_drag(&self.world) {
            warn!("GameController: {} をドラッグ中なので押下を無視するよ", current);
            return Ok(());
        }
        match find_clicked_element(&self.world, point, &[]) {
            Some(ClickTarget::Card(card)) => {
                drag_handler::handle_drag_start(&mut self.world, card, point);
            }
            Some(ClickTarget::StockPlaceholder) => self.reload_stock()?,
            Some(other) => debug!("GameController: {:?} が押されたけど何もしない", other),
            None => {}
        }
        Ok(())
    }

    fn pointer_up(&mut self, point: Position) -> GameResult<()> {
        let Some(release) = drag_handler::handle_drag_end(&mut self.world, point) else {
            return Ok(());
        };
        let card = release.card();
        let outcome = match &release {
            DragRelease::Click { .. } => self.validate_move(card, None)?,
            DragRelease::Drop { destination: Some(destination), .. } => self.validate_move(card, Some(*destination))?,
            DragRelease::Drop { destination: None, .. } => MoveOutcome::Rejected,
        };
        if outcome == MoveOutcome::Rejected {
            drag_handler::snap_back(&mut self.world, release.original_positions());
        }
        Ok(())
    }

    fn reload_stock(&mut self) -> GameResult<()> {
        if self.is_locked() {
            return Ok(());
        }
        stock_handler::reset_waste_to_stock(&mut self.world)?;
        Ok(())
    }

    /// 時計を進めて、オートコンプリート中なら溜まった時間で1手進める。
    fn tick(&mut self, elapsed_ms: u64) -> GameResult<()> {
        let clock_text = self
            .game_state_mut()
            .and_then(|state| state.clock.advance(elapsed_ms).then(|| state.clock.display()));
        if let Some(text) = clock_text {
            self.commands.push_back(RenderCommand::ClockText { text });
        }

        let running = self
            .game_state()
            .map_or(false, |state| state.auto_complete == AutoCompleteStatus::Running);
        if !running {
            return Ok(());
        }
        let step_ms = self.config.auto_complete_step_ms;
        self.auto_complete_elapsed_ms = self.auto_complete_elapsed_ms.saturating_add(elapsed_ms);
        if self.auto_complete_elapsed_ms < step_ms {
            return Ok(());
        }
        // 1 tick で進めるのは1手だけ。余りは次の1手ぶんまで持ち越す
        self.auto_complete_elapsed_ms = (self.auto_complete_elapsed_ms - step_ms).min(step_ms);

        if self.auto_complete_system.step(&mut self.world)? == AutoCompleteStep::Finished {
            self.auto_complete_elapsed_ms = 0;
            self.check_win();
        }
        Ok(())
    }

    fn sync_render(&mut self) {
        self.render_state
            .sync(&self.world, self.config.move_animation_ms, &mut self.commands);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
