//! Error types for the rules engine and its configuration.

use crate::core::types::{GameMode, GamePhase};
use thiserror::Error;

/// Broad category of a rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The move breaks a rule of the game
    IllegalMove,
    /// The call makes no sense in the current state
    InvalidOperation,
}

/// Why a session call was rejected. A rejected call never mutates the session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("point ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("point ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("move at ({row}, {col}) would leave its own group without liberties")]
    Suicide { row: usize, col: usize },

    #[error("move at ({row}, {col}) immediately retakes a ko")]
    KoViolation { row: usize, col: usize },

    #[error("game is not in play (phase {0:?})")]
    NotPlaying(GamePhase),

    #[error("there is no move to undo")]
    NothingToUndo,

    #[error("{0} is not available in {1}")]
    Unsupported(&'static str, GameMode),

    #[error("settings cannot change once play has started")]
    SettingsLocked,

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::OutOfBounds { .. }
            | GameError::Occupied { .. }
            | GameError::Suicide { .. }
            | GameError::KoViolation { .. } => ErrorKind::IllegalMove,
            _ => ErrorKind::InvalidOperation,
        }
    }

    pub fn is_illegal_move(&self) -> bool {
        self.kind() == ErrorKind::IllegalMove
    }
}

/// Failure to load a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            GameError::Occupied { row: 1, col: 1 }.kind(),
            ErrorKind::IllegalMove
        );
        assert!(GameError::KoViolation { row: 0, col: 0 }.is_illegal_move());
        assert_eq!(GameError::NothingToUndo.kind(), ErrorKind::InvalidOperation);
        assert!(!GameError::NotPlaying(GamePhase::Finished).is_illegal_move());
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::OutOfBounds {
            row: 20,
            col: 3,
            size: 19,
        };
        assert_eq!(err.to_string(), "point (20, 3) is outside the 19x19 board");
        assert_eq!(
            GameError::Unsupported("pass", GameMode::Gomoku).to_string(),
            "pass is not available in Gomoku"
        );
    }
}
