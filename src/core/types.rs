//! Shared data structures for both games.

use super::constants::{GOMOKU_BOARD_SIZE, GO_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stone color. Also used to name the player who owns that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(&self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
        }
    }

    /// The result in which this color wins.
    pub fn win(&self) -> GameResult {
        match self {
            Stone::Black => GameResult::BlackWin,
            Stone::White => GameResult::WhiteWin,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupancy of a single intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn stone(&self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Stone::Black),
            Cell::White => Some(Stone::White),
        }
    }

    pub fn is(&self, stone: Stone) -> bool {
        self.stone() == Some(stone)
    }
}

impl From<Stone> for Cell {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

/// Which game the session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Gomoku,
    Go,
}

impl GameMode {
    pub fn board_size(&self) -> usize {
        match self {
            GameMode::Gomoku => GOMOKU_BOARD_SIZE,
            GameMode::Go => GO_BOARD_SIZE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Gomoku => "Gomoku",
            GameMode::Go => "Go",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of a match. Scoring is only reachable in Go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Scoring,
    Finished,
}

/// Final result of a completed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    BlackWin,
    WhiteWin,
    Draw,
}

impl GameResult {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            GameResult::BlackWin => Some(Stone::Black),
            GameResult::WhiteWin => Some(Stone::White),
            GameResult::Draw => None,
        }
    }
}

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    FiveInRow,
    BoardFull,
    Resignation,
    DrawAgreed,
    Timeout,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: GameResult,
    pub reason: EndReason,
}

/// What a player did on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Place(usize, usize),
    Pass,
}

/// A stone removed from the board, kept so undo can put it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedStone {
    pub row: usize,
    pub col: usize,
    pub color: Stone,
}

/// A recorded turn. Captures are listed in removal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Stone,
    pub captured_stones: Vec<CapturedStone>,
}

impl Move {
    pub fn place(row: usize, col: usize, player: Stone) -> Self {
        Self {
            action: Action::Place(row, col),
            player,
            captured_stones: Vec::new(),
        }
    }

    pub fn pass(player: Stone) -> Self {
        Self {
            action: Action::Pass,
            player,
            captured_stones: Vec::new(),
        }
    }

    /// Number of captured stones of the given color.
    pub fn captured_of(&self, color: Stone) -> u32 {
        self.captured_stones
            .iter()
            .filter(|s| s.color == color)
            .count() as u32
    }
}

/// The point the `ko_color` player may not refill on the very next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KoPoint {
    pub row: usize,
    pub col: usize,
    /// Color of the single stone that was captured
    pub ko_color: Stone,
    /// Move counter value right after the capturing move
    pub move_number: u32,
}
