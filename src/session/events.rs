//! Outbound notifications produced by session calls.
//!
//! Each mutating call returns the events it caused instead of invoking
//! callbacks. The presentation layer maps them to redraws, dialogs and
//! clock labels; the rules never touch UI types.

use crate::core::types::{GamePhase, Stone};
use serde::{Deserialize, Serialize};

/// A single state change reported to the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Stones changed (move, pass, capture, undo, reset or dead-stone sweep).
    BoardUpdated,

    /// The match ended. `None` means a draw.
    GameOver { winner: Option<Stone> },

    GamePhaseChanged(GamePhase),

    /// Final totals after scoring, komi included.
    ScoreChanged { black: f64, white: f64 },

    /// Seconds shown on each clock (main time, or the current byo-yomi period).
    TimeUpdated { black_seconds: u32, white_seconds: u32 },

    /// A ko was just created at this point.
    KoOccurred { row: usize, col: usize },
}

impl GameEvent {
    /// Delivery rank when one call produces several events; lower goes first.
    pub fn priority(&self) -> u8 {
        match self {
            GameEvent::BoardUpdated => 0,
            GameEvent::GameOver { .. } => 1,
            GameEvent::GamePhaseChanged(_) => 2,
            GameEvent::ScoreChanged { .. } => 3,
            GameEvent::TimeUpdated { .. } => 4,
            GameEvent::KoOccurred { .. } => 5,
        }
    }
}

/// Collects events during one call and hands them out in priority order.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: GameEvent) {
        // Later time updates supersede earlier ones within the same call
        if let GameEvent::TimeUpdated { .. } = event {
            self.events
                .retain(|e| !matches!(e, GameEvent::TimeUpdated { .. }));
        }
        if event == GameEvent::BoardUpdated && self.events.contains(&event) {
            return;
        }
        self.events.push(event);
    }

    /// Stable sort keeps same-priority events (e.g. Scoring then Finished)
    /// in the order they happened.
    pub(crate) fn finish(mut self) -> Vec<GameEvent> {
        self.events.sort_by_key(GameEvent::priority);
        self.events
    }
}
