//! Game-specific rules: Gomoku and Go.

pub mod go;
pub mod gomoku;
