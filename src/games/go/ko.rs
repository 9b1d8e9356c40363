//! Simple ko: a single stone just captured may not be retaken at once.

use crate::board::{BoardState, GroupAnalyzer};
use crate::core::types::{CapturedStone, KoPoint, Stone};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KoTracker {
    active: Option<KoPoint>,
}

impl KoTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<KoPoint> {
        self.active
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Put back a ko point saved before an undone move.
    pub fn restore(&mut self, ko: Option<KoPoint>) {
        self.active = ko;
    }

    /// Recompute the ko point after `mover` played (row, col) and removed
    /// `captured`. The board's move counter must already include this move.
    /// Returns the new ko point, if the move created one.
    pub fn update(
        &mut self,
        board: &BoardState,
        analyzer: &mut GroupAnalyzer,
        row: usize,
        col: usize,
        mover: Stone,
        captured: &[CapturedStone],
    ) -> Option<KoPoint> {
        self.active = detect_ko(board, analyzer, row, col, mover, captured);
        self.active
    }

    /// True iff `mover` playing (row, col) now would retake the active ko.
    pub fn is_violation(&self, row: usize, col: usize, mover: Stone, move_number: u32) -> bool {
        self.active.is_some_and(|ko| {
            ko.row == row && ko.col == col && ko.move_number == move_number && ko.ko_color == mover
        })
    }
}

/// A ko arises when exactly one stone was captured and the capturing stone is
/// itself alone with the captured point as its only liberty.
fn detect_ko(
    board: &BoardState,
    analyzer: &mut GroupAnalyzer,
    row: usize,
    col: usize,
    mover: Stone,
    captured: &[CapturedStone],
) -> Option<KoPoint> {
    let [stone] = captured else {
        return None;
    };
    if !board.in_bounds(row, col) {
        return None;
    }
    let lone = analyzer
        .group_indices(board, board.index(row, col), mover)
        .len()
        == 1;
    if !lone || analyzer.count_liberties(board, row, col, mover) != 1 {
        return None;
    }
    Some(KoPoint {
        row: stone.row,
        col: stone.col,
        ko_color: stone.color,
        move_number: board.move_number(),
    })
}
