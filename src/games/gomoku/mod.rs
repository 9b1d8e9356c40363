//! Gomoku (Five in a Row).

pub mod logic;

pub use logic::{check_win, is_board_full, longest_line};
