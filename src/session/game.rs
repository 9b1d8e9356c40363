//! The game session: the single entry point for collaborators.
//!
//! A session owns one match. Every mutating call either applies completely
//! and returns the events it caused, or is rejected with a [`GameError`] and
//! leaves the session exactly as it was.
//!
//! Phase flow:
//! ```text
//! Playing --move/pass--> Playing
//! Playing --five in a row / full board--> Finished        (Gomoku)
//! Playing --second pass--> Scoring --score--> Finished    (Go)
//! Playing --resign / draw / timeout--> Finished
//! ```
//! Only `reset_game` and `set_game_mode` leave Finished.

use super::clock::{ClockTick, PlayerClock, TimeControl};
use super::events::{EventQueue, GameEvent};
use super::history::{MoveHistory, RestorePoint};
use crate::board::{point_label, BoardState, GroupAnalyzer};
use crate::core::constants::PASSES_TO_END;
use crate::core::settings::GameSettings;
use crate::core::types::{
    Action, CapturedStone, Cell, EndReason, GameMode, GameOutcome, GamePhase, GameResult, KoPoint,
    Move, Stone,
};
use crate::error::GameError;
use crate::games::go::{
    calculate_score, capture_dead_neighbors, find_dead_stones, would_be_suicide, KoTracker,
    ScoreReport,
};
use crate::games::gomoku;
use tracing::{debug, info};

/// Events from an accepted call, or the reason it was rejected.
pub type EventResult = Result<Vec<GameEvent>, GameError>;

#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    settings: GameSettings,
    board: BoardState,
    analyzer: GroupAnalyzer,
    ko: KoTracker,
    history: MoveHistory,
    clock: TimeControl,
    phase: GamePhase,
    outcome: Option<GameOutcome>,
    /// Black stones removed from the board (White's prisoners)
    captured_black: u32,
    /// White stones removed from the board (Black's prisoners)
    captured_white: u32,
    /// Count of consecutive passes (2 = game over)
    consecutive_passes: u8,
    score: Option<ScoreReport>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        let settings = GameSettings::default();
        let mut session = Self {
            mode,
            settings,
            board: BoardState::new(mode.board_size()),
            analyzer: GroupAnalyzer::new(),
            ko: KoTracker::new(),
            history: MoveHistory::new(),
            clock: TimeControl::new(&settings),
            phase: GamePhase::Playing,
            outcome: None,
            captured_black: 0,
            captured_white: 0,
            consecutive_passes: 0,
            score: None,
        };
        session.reset_game();
        session
    }

    pub fn with_settings(mode: GameMode, settings: GameSettings) -> Result<Self, GameError> {
        let mut session = Self::new(mode);
        session.set_game_settings(settings)?;
        Ok(session)
    }

    // ── Inbound ─────────────────────────────────────────────────────

    /// Place the current player's stone at (row, col).
    pub fn submit_move(&mut self, row: usize, col: usize) -> EventResult {
        if let Err(e) = validate_move(
            &self.board,
            &self.ko,
            self.mode,
            self.phase,
            &mut self.analyzer,
            row,
            col,
        ) {
            debug!(row, col, error = %e, "move rejected");
            return Err(e);
        }

        let mover = self.board.current_player();
        let before = self.restore_point();
        let mut events = EventQueue::new();

        self.board.place(row, col, mover);
        self.board.advance_move_number();
        self.consecutive_passes = 0;
        debug!(
            player = %mover,
            point = %point_label(row, col, self.board.size()),
            move_number = self.board.move_number(),
            "stone placed"
        );

        let mut mv = Move::place(row, col, mover);
        if self.mode == GameMode::Go {
            let captured =
                capture_dead_neighbors(&mut self.board, &mut self.analyzer, row, col, mover);
            if !captured.is_empty() {
                debug!(player = %mover, count = captured.len(), "stones captured");
            }
            self.credit_captures(&captured);
            if let Some(ko) =
                self.ko
                    .update(&self.board, &mut self.analyzer, row, col, mover, &captured)
            {
                debug!(point = %point_label(ko.row, ko.col, self.board.size()), "ko");
                events.push(GameEvent::KoOccurred {
                    row: ko.row,
                    col: ko.col,
                });
            }
            mv.captured_stones = captured;
        }
        self.history.record(mv, before);
        events.push(GameEvent::BoardUpdated);

        if self.clock.on_move_completed(mover) {
            events.push(self.time_event());
        }

        match self.mode {
            GameMode::Gomoku if gomoku::check_win(&self.board, row, col, mover) => {
                self.finish(mover.win(), EndReason::FiveInRow, &mut events);
            }
            GameMode::Gomoku if gomoku::is_board_full(&self.board) => {
                self.finish(GameResult::Draw, EndReason::BoardFull, &mut events);
            }
            // Go is only ever decided by scoring, resignation or time.
            _ => self.board.switch_player(),
        }
        Ok(events.finish())
    }

    /// Pass the turn (Go only). The second consecutive pass ends play and
    /// scores the game.
    pub fn pass(&mut self) -> EventResult {
        self.ensure_playing()?;
        if self.mode != GameMode::Go {
            return Err(GameError::Unsupported("pass", self.mode));
        }

        let mover = self.board.current_player();
        let before = self.restore_point();
        let mut events = EventQueue::new();

        self.board.advance_move_number();
        self.consecutive_passes += 1;
        self.ko.clear();
        self.history.record(Move::pass(mover), before);
        events.push(GameEvent::BoardUpdated);
        debug!(player = %mover, passes = self.consecutive_passes, "pass");

        if self.clock.on_move_completed(mover) {
            events.push(self.time_event());
        }

        if self.consecutive_passes >= PASSES_TO_END {
            self.score_game(&mut events);
        } else {
            self.board.switch_player();
        }
        Ok(events.finish())
    }

    /// The current player gives up; the opponent wins.
    pub fn resign(&mut self) -> EventResult {
        self.ensure_playing()?;
        let loser = self.board.current_player();
        let mut events = EventQueue::new();
        self.finish(loser.opponent().win(), EndReason::Resignation, &mut events);
        Ok(events.finish())
    }

    /// End the game as a draw.
    pub fn request_draw(&mut self) -> EventResult {
        self.ensure_playing()?;
        let mut events = EventQueue::new();
        self.finish(GameResult::Draw, EndReason::DrawAgreed, &mut events);
        Ok(events.finish())
    }

    /// Take back the most recent turn, stone or pass.
    pub fn undo(&mut self) -> EventResult {
        self.ensure_playing()?;
        let Some((mv, before)) = self.history.pop() else {
            return Err(GameError::NothingToUndo);
        };

        if let Action::Place(row, col) = mv.action {
            self.board.remove(row, col);
        }
        for stone in &mv.captured_stones {
            self.board.place(stone.row, stone.col, stone.color);
            match stone.color {
                Stone::Black => self.captured_black = self.captured_black.saturating_sub(1),
                Stone::White => self.captured_white = self.captured_white.saturating_sub(1),
            }
        }
        self.board.rewind_move_number();
        self.board.set_current_player(mv.player);
        self.ko.restore(before.ko);
        self.consecutive_passes = before.consecutive_passes;
        debug!(player = %mv.player, move_number = self.board.move_number(), "undo");

        let mut events = EventQueue::new();
        events.push(GameEvent::BoardUpdated);
        Ok(events.finish())
    }

    /// One second has elapsed. Charges the side to move while the clock runs.
    pub fn tick(&mut self) -> EventResult {
        self.ensure_playing()?;
        if !self.clock.is_running() {
            return Ok(Vec::new());
        }

        let active = self.board.current_player();
        let mut events = EventQueue::new();
        let tick = self.clock.tick(active);
        events.push(self.time_event());
        if tick == ClockTick::Expired {
            info!(player = %active, "out of time");
            self.finish(active.opponent().win(), EndReason::Timeout, &mut events);
        }
        Ok(events.finish())
    }

    /// Switch games. Always starts a fresh match.
    pub fn set_game_mode(&mut self, mode: GameMode) -> Vec<GameEvent> {
        self.mode = mode;
        self.reset_game()
    }

    /// Clear the board and every counter and start a new match in the
    /// current mode.
    pub fn reset_game(&mut self) -> Vec<GameEvent> {
        let previous_phase = self.phase;

        self.board = BoardState::new(self.mode.board_size());
        self.ko.clear();
        self.history.clear();
        self.captured_black = 0;
        self.captured_white = 0;
        self.consecutive_passes = 0;
        self.score = None;
        self.outcome = None;
        self.phase = GamePhase::Playing;
        self.clock.reset(&self.settings);
        if self.mode == GameMode::Go {
            self.clock.start();
        }
        debug!(mode = %self.mode, "new game");

        let mut events = EventQueue::new();
        events.push(GameEvent::BoardUpdated);
        if previous_phase != GamePhase::Playing {
            events.push(GameEvent::GamePhaseChanged(GamePhase::Playing));
        }
        if self.clock.is_running() {
            events.push(self.time_event());
        }
        events.finish()
    }

    /// Replace komi and time control. Only allowed before play starts.
    pub fn set_game_settings(&mut self, settings: GameSettings) -> EventResult {
        settings.validate().map_err(GameError::InvalidSettings)?;
        if self.has_started() {
            return Err(GameError::SettingsLocked);
        }

        self.settings = settings;
        let running = self.clock.is_running();
        self.clock.reset(&self.settings);
        if running {
            self.clock.start();
        }

        let mut events = EventQueue::new();
        if running {
            events.push(self.time_event());
        }
        Ok(events.finish())
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn current_player(&self) -> Stone {
        self.board.current_player()
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Cell {
        self.board.occupancy_at(row, col)
    }

    pub fn move_number(&self) -> u32 {
        self.board.move_number()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn history(&self) -> &[Move] {
        self.history.moves()
    }

    /// Black stones captured so far (White's prisoners).
    pub fn captured_black(&self) -> u32 {
        self.captured_black
    }

    /// White stones captured so far (Black's prisoners).
    pub fn captured_white(&self) -> u32 {
        self.captured_white
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn result(&self) -> Option<GameResult> {
        self.outcome.map(|o| o.result)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn score_report(&self) -> Option<&ScoreReport> {
        self.score.as_ref()
    }

    pub fn black_score(&self) -> Option<f64> {
        self.score.map(|s| s.black_total)
    }

    pub fn white_score(&self) -> Option<f64> {
        self.score.map(|s| s.white_total)
    }

    /// Seconds on `color`'s clock face.
    pub fn remaining_time(&self, color: Stone) -> u32 {
        self.clock.remaining(color)
    }

    pub fn clock(&self, color: Stone) -> &PlayerClock {
        self.clock.clock(color)
    }

    pub fn is_in_byo_yomi(&self, color: Stone) -> bool {
        self.clock.is_in_byo_yomi(color)
    }

    pub fn byo_yomi_periods(&self, color: Stone) -> u32 {
        self.clock.byo_yomi_periods(color)
    }

    pub fn ko_point(&self) -> Option<KoPoint> {
        self.ko.current()
    }

    pub fn can_undo(&self) -> bool {
        self.phase == GamePhase::Playing && !self.history.is_empty()
    }

    /// Would the current player's stone at (row, col) be accepted?
    pub fn is_legal(&self, row: usize, col: usize) -> Result<(), GameError> {
        let mut analyzer = GroupAnalyzer::new();
        validate_move(
            &self.board,
            &self.ko,
            self.mode,
            self.phase,
            &mut analyzer,
            row,
            col,
        )
    }

    /// Every point the current player may play, in row-major order.
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        let mut analyzer = GroupAnalyzer::new();
        self.board
            .empty_points()
            .filter(|&(row, col)| {
                validate_move(
                    &self.board,
                    &self.ko,
                    self.mode,
                    self.phase,
                    &mut analyzer,
                    row,
                    col,
                )
                .is_ok()
            })
            .collect()
    }

    // ── Internals ───────────────────────────────────────────────────

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.phase == GamePhase::Playing {
            Ok(())
        } else {
            Err(GameError::NotPlaying(self.phase))
        }
    }

    /// Play has started once a move was made or a second was charged.
    fn has_started(&self) -> bool {
        self.phase != GamePhase::Playing
            || !self.history.is_empty()
            || self.clock.elapsed_seconds() > 0
    }

    fn restore_point(&self) -> RestorePoint {
        RestorePoint {
            ko: self.ko.current(),
            consecutive_passes: self.consecutive_passes,
        }
    }

    fn credit_captures(&mut self, stones: &[CapturedStone]) {
        for stone in stones {
            match stone.color {
                Stone::Black => self.captured_black += 1,
                Stone::White => self.captured_white += 1,
            }
        }
    }

    fn time_event(&self) -> GameEvent {
        GameEvent::TimeUpdated {
            black_seconds: self.clock.remaining(Stone::Black),
            white_seconds: self.clock.remaining(Stone::White),
        }
    }

    fn set_phase(&mut self, phase: GamePhase, events: &mut EventQueue) {
        if self.phase == phase {
            return;
        }
        info!(from = ?self.phase, to = ?phase, "phase changed");
        self.phase = phase;
        events.push(GameEvent::GamePhaseChanged(phase));
    }

    /// Sweep dead stones, count the board and finish the game.
    fn score_game(&mut self, events: &mut EventQueue) {
        self.set_phase(GamePhase::Scoring, events);

        let dead = find_dead_stones(&self.board, &mut self.analyzer);
        if !dead.is_empty() {
            for stone in &dead {
                self.board.remove(stone.row, stone.col);
            }
            self.credit_captures(&dead);
            debug!(count = dead.len(), "dead stones removed");
            // Keep prisoners equal to the captures recorded in history.
            if let Some(last) = self.history.last_mut() {
                last.captured_stones.extend(dead);
            }
            events.push(GameEvent::BoardUpdated);
        }

        let report = calculate_score(
            &self.board,
            self.captured_black,
            self.captured_white,
            self.settings.komi,
        );
        self.score = Some(report);
        info!(
            black = report.black_total,
            white = report.white_total,
            "score counted"
        );
        events.push(GameEvent::ScoreChanged {
            black: report.black_total,
            white: report.white_total,
        });
        self.finish(report.result(), EndReason::Score, events);
    }

    fn finish(&mut self, result: GameResult, reason: EndReason, events: &mut EventQueue) {
        self.outcome = Some(GameOutcome { result, reason });
        self.clock.stop();
        info!(?result, ?reason, "game over");
        events.push(GameEvent::GameOver {
            winner: result.winner(),
        });
        self.set_phase(GamePhase::Finished, events);
    }
}

/// Legality of a stone at (row, col) for the side to move.
fn validate_move(
    board: &BoardState,
    ko: &KoTracker,
    mode: GameMode,
    phase: GamePhase,
    analyzer: &mut GroupAnalyzer,
    row: usize,
    col: usize,
) -> Result<(), GameError> {
    if phase != GamePhase::Playing {
        return Err(GameError::NotPlaying(phase));
    }
    if !board.in_bounds(row, col) {
        return Err(GameError::OutOfBounds {
            row,
            col,
            size: board.size(),
        });
    }
    if !board.is_empty(row, col) {
        return Err(GameError::Occupied { row, col });
    }
    if mode == GameMode::Go {
        let mover = board.current_player();
        if ko.is_violation(row, col, mover, board.move_number()) {
            return Err(GameError::KoViolation { row, col });
        }
        if would_be_suicide(board, analyzer, row, col, mover) {
            return Err(GameError::Suicide { row, col });
        }
    }
    Ok(())
}
