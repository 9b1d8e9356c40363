//! Connected groups of same-colored stones and their liberties.
//!
//! All traversals use an explicit stack over flat board indices. The visited
//! marks are generation-stamped so the buffers are reused across calls
//! without clearing.

use super::state::{BoardState, ORTHOGONAL};
use crate::core::types::Stone;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct GroupAnalyzer {
    marks: Vec<u32>,
    epoch: u32,
    stack: Vec<usize>,
}

impl GroupAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh traversal over a board with `area` points.
    fn begin(&mut self, area: usize) {
        if self.marks.len() != area {
            self.marks = vec![0; area];
            self.epoch = 0;
        }
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            self.marks.fill(0);
            self.epoch = 1;
        }
        self.stack.clear();
    }

    /// Mark `index` visited. Returns false if it already was.
    fn visit(&mut self, index: usize) -> bool {
        if self.marks[index] == self.epoch {
            return false;
        }
        self.marks[index] = self.epoch;
        true
    }

    /// Flat indices of the group containing `start`, sorted ascending.
    /// Empty if `start` does not hold a `color` stone.
    pub fn group_indices(&mut self, board: &BoardState, start: usize, color: Stone) -> Vec<usize> {
        let mut group = Vec::new();
        if start >= board.area() || !board.cell(start).is(color) {
            return group;
        }

        self.begin(board.area());
        self.visit(start);
        self.stack.push(start);
        while let Some(index) = self.stack.pop() {
            group.push(index);
            for &dir in &ORTHOGONAL {
                if let Some(n) = board.neighbor(index, dir) {
                    if board.cell(n).is(color) && self.visit(n) {
                        self.stack.push(n);
                    }
                }
            }
        }
        group.sort_unstable();
        group
    }

    /// Get all stones in the same group as the `color` stone at (row, col).
    /// Returns an empty set if that point does not hold a `color` stone.
    pub fn find_group(
        &mut self,
        board: &BoardState,
        row: usize,
        col: usize,
        color: Stone,
    ) -> BTreeSet<(usize, usize)> {
        if !board.in_bounds(row, col) {
            return BTreeSet::new();
        }
        self.group_indices(board, board.index(row, col), color)
            .into_iter()
            .map(|i| board.point(i))
            .collect()
    }

    /// True iff the group containing (row, col) touches at least one empty point.
    pub fn has_liberties(
        &mut self,
        board: &BoardState,
        row: usize,
        col: usize,
        color: Stone,
    ) -> bool {
        self.has_liberties_in_order(board, row, col, color, &ORTHOGONAL)
    }

    /// Liberty search expanding neighbors in the given direction order.
    /// The answer depends only on the board, never on `order`.
    fn has_liberties_in_order(
        &mut self,
        board: &BoardState,
        row: usize,
        col: usize,
        color: Stone,
        order: &[(isize, isize); 4],
    ) -> bool {
        if !board.in_bounds(row, col) {
            return false;
        }
        let start = board.index(row, col);
        if !board.cell(start).is(color) {
            return false;
        }

        self.begin(board.area());
        self.visit(start);
        self.stack.push(start);
        while let Some(index) = self.stack.pop() {
            for &dir in order {
                let Some(n) = board.neighbor(index, dir) else {
                    continue;
                };
                let cell = board.cell(n);
                if cell.is_empty() {
                    return true;
                }
                if cell.is(color) && self.visit(n) {
                    self.stack.push(n);
                }
            }
        }
        false
    }

    /// Count liberties (distinct empty adjacent points) of a group.
    pub fn count_liberties(
        &mut self,
        board: &BoardState,
        row: usize,
        col: usize,
        color: Stone,
    ) -> usize {
        if !board.in_bounds(row, col) {
            return 0;
        }
        let group = self.group_indices(board, board.index(row, col), color);
        let mut liberties: Vec<usize> = group
            .iter()
            .flat_map(|&i| board.neighbors(i))
            .filter(|&n| board.cell(n).is_empty())
            .collect();
        liberties.sort_unstable();
        liberties.dedup();
        liberties.len()
    }
}
