//! Stoneplay - Rules Engine for Gomoku and Go
//!
//! A [`GameSession`] owns one match and is the only thing a front end needs to
//! call. Every mutating call returns the [`GameEvent`]s it caused, or a
//! [`GameError`] if it was rejected.
//!
//! ```
//! use stoneplay::{GameEvent, GameMode, GameSession};
//!
//! let mut session = GameSession::new(GameMode::Go);
//! let events = session.submit_move(3, 3).unwrap();
//! assert_eq!(events, vec![GameEvent::BoardUpdated]);
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod games;
pub mod session;

pub use crate::core::types::{
    Action, CapturedStone, Cell, EndReason, GameMode, GameOutcome, GamePhase, GameResult, KoPoint,
    Move, Stone,
};
pub use crate::core::GameSettings;
pub use error::{ErrorKind, GameError, SettingsError};
pub use games::go::ScoreReport;
pub use session::{format_clock, GameEvent, GameSession};
