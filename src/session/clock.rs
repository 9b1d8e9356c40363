//! Main time plus byo-yomi, driven by one `tick` per elapsed second.
//!
//! While main time lasts it counts down. Once it is gone the player is in
//! byo-yomi: the current period counts down, and finishing a move renews it.
//! A period that runs out is consumed; losing the last one loses the game.

use crate::core::settings::GameSettings;
use crate::core::types::Stone;
use serde::{Deserialize, Serialize};

/// What a one-second tick did to a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    Running,
    /// The player has no time and no periods left
    Expired,
}

/// Remaining time for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerClock {
    pub main_remaining: u32,
    pub period_remaining: u32,
    pub periods_left: u32,
}

impl PlayerClock {
    fn new(settings: &GameSettings) -> Self {
        // Zero-length periods cannot be played in, so they do not count.
        let periods_left = if settings.byo_yomi_time == 0 {
            0
        } else {
            settings.byo_yomi_periods
        };
        Self {
            main_remaining: settings.main_time,
            period_remaining: settings.byo_yomi_time,
            periods_left,
        }
    }

    pub fn in_byo_yomi(&self) -> bool {
        self.main_remaining == 0
    }

    /// Seconds a clock face would show.
    pub fn display_seconds(&self) -> u32 {
        if self.in_byo_yomi() {
            self.period_remaining
        } else {
            self.main_remaining
        }
    }

    fn tick(&mut self, byo_yomi_time: u32) -> ClockTick {
        if self.main_remaining > 0 {
            self.main_remaining -= 1;
            if self.main_remaining == 0 && self.periods_left == 0 {
                return ClockTick::Expired;
            }
            return ClockTick::Running;
        }
        if self.periods_left == 0 {
            return ClockTick::Expired;
        }

        self.period_remaining = self.period_remaining.saturating_sub(1);
        if self.period_remaining == 0 {
            self.periods_left -= 1;
            if self.periods_left == 0 {
                return ClockTick::Expired;
            }
            self.period_remaining = byo_yomi_time;
        }
        ClockTick::Running
    }

    /// Refill the current period after a completed move. Returns true if
    /// the clock changed.
    fn renew_period(&mut self, byo_yomi_time: u32) -> bool {
        if !self.in_byo_yomi() || self.periods_left == 0 || self.period_remaining == byo_yomi_time {
            return false;
        }
        self.period_remaining = byo_yomi_time;
        true
    }
}

/// Both players' clocks. Only the side to move is charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeControl {
    black: PlayerClock,
    white: PlayerClock,
    byo_yomi_time: u32,
    running: bool,
    elapsed_seconds: u64,
}

impl TimeControl {
    /// Fresh clocks, stopped.
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            black: PlayerClock::new(settings),
            white: PlayerClock::new(settings),
            byo_yomi_time: settings.byo_yomi_time,
            running: false,
            elapsed_seconds: 0,
        }
    }

    /// Re-derive both clocks from `settings` and stop them.
    pub fn reset(&mut self, settings: &GameSettings) {
        *self = Self::new(settings);
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds charged to either player since the last reset.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn clock(&self, color: Stone) -> &PlayerClock {
        match color {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    fn clock_mut(&mut self, color: Stone) -> &mut PlayerClock {
        match color {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        }
    }

    /// Charge one second to `active`. Does nothing while stopped.
    pub fn tick(&mut self, active: Stone) -> ClockTick {
        if !self.running {
            return ClockTick::Running;
        }
        self.elapsed_seconds += 1;
        let byo_yomi_time = self.byo_yomi_time;
        self.clock_mut(active).tick(byo_yomi_time)
    }

    /// `mover` finished a move. Returns true if their displayed time changed.
    pub fn on_move_completed(&mut self, mover: Stone) -> bool {
        if !self.running {
            return false;
        }
        let byo_yomi_time = self.byo_yomi_time;
        self.clock_mut(mover).renew_period(byo_yomi_time)
    }

    pub fn remaining(&self, color: Stone) -> u32 {
        self.clock(color).display_seconds()
    }

    pub fn is_in_byo_yomi(&self, color: Stone) -> bool {
        self.clock(color).in_byo_yomi()
    }

    pub fn byo_yomi_periods(&self, color: Stone) -> u32 {
        self.clock(color).periods_left
    }
}

/// Format seconds as `mm:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
