//! Match orchestration: the session state machine, its history, clocks and
//! outbound events.

pub mod clock;
pub mod events;
pub mod game;
pub mod history;

pub use clock::{format_clock, ClockTick, PlayerClock, TimeControl};
pub use events::GameEvent;
pub use game::{EventResult, GameSession};
pub use history::{MoveHistory, RestorePoint};
