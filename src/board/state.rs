//! Board occupancy, side to move and move counter.

use crate::core::types::{Cell, Stone};

/// Orthogonal directions as (row delta, col delta): up, down, left, right.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Square grid stored row-major in a flat vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    size: usize,
    cells: Vec<Cell>,
    current_player: Stone,
    move_number: u32,
}

impl BoardState {
    /// Empty board with Black to move (Black plays first in both games).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            current_player: Stone::Black,
            move_number: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Flat index of an in-bounds point.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn point(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Occupancy at (row, col). Points off the board read as empty.
    pub fn occupancy_at(&self, row: usize, col: usize) -> Cell {
        if self.in_bounds(row, col) {
            self.cells[self.index(row, col)]
        } else {
            Cell::Empty
        }
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[self.index(row, col)].is_empty()
    }

    /// Put a stone on an empty in-bounds point. Returns false and leaves the
    /// board alone otherwise.
    pub fn place(&mut self, row: usize, col: usize, stone: Stone) -> bool {
        if !self.is_empty(row, col) {
            return false;
        }
        let index = self.index(row, col);
        self.cells[index] = Cell::from(stone);
        true
    }

    /// Take whatever is at (row, col) off the board.
    pub fn remove(&mut self, row: usize, col: usize) {
        if self.in_bounds(row, col) {
            let index = self.index(row, col);
            self.cells[index] = Cell::Empty;
        }
    }

    /// Reset every point to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn set_current_player(&mut self, player: Stone) {
        self.current_player = player;
    }

    /// Switch to the other player's turn
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn advance_move_number(&mut self) {
        self.move_number += 1;
    }

    pub fn rewind_move_number(&mut self) {
        self.move_number = self.move_number.saturating_sub(1);
    }

    /// Neighbor of `index` in direction `(dr, dc)`, if it is on the board.
    pub fn neighbor(&self, index: usize, (dr, dc): (isize, isize)) -> Option<usize> {
        let (row, col) = self.point(index);
        let nr = row.checked_add_signed(dr)?;
        let nc = col.checked_add_signed(dc)?;
        self.in_bounds(nr, nc).then(|| self.index(nr, nc))
    }

    /// On-board orthogonal neighbors of `index`.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        ORTHOGONAL
            .iter()
            .filter_map(move |&dir| self.neighbor(index, dir))
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|c| c.is(stone)).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// All empty points in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| self.point(i))
    }
}

/// Human-readable label such as `A19`: column letter from `A`, rows counted
/// from the bottom edge.
pub fn point_label(row: usize, col: usize, size: usize) -> String {
    let letter = (b'A' + (col.min(25) as u8)) as char;
    format!("{}{}", letter, size.saturating_sub(row))
}
