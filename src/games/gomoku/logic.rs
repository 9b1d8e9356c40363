//! Gomoku rules: five or more in a row wins.

use crate::board::BoardState;
use crate::core::constants::WIN_LENGTH;
use crate::core::types::Stone;

/// Directions to check for lines: (row_delta, col_delta)
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Check if the stone at (row, col) is part of 5+ in a row for `player`.
/// Assumes the stone is already placed.
pub fn check_win(board: &BoardState, row: usize, col: usize, player: Stone) -> bool {
    if !board.occupancy_at(row, col).is(player) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| count_line(board, row, col, dr, dc, player) >= WIN_LENGTH)
}

/// The longest run through (row, col) for `player`, across all four axes.
pub fn longest_line(board: &BoardState, row: usize, col: usize, player: Stone) -> u32 {
    if !board.occupancy_at(row, col).is(player) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| count_line(board, row, col, dr, dc, player))
        .max()
        .unwrap_or(0)
}

/// Count consecutive stones in both directions from (row, col).
fn count_line(
    board: &BoardState,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Stone,
) -> u32 {
    1 + count_direction(board, row, col, dr, dc, player)
        + count_direction(board, row, col, -dr, -dc, player)
}

/// Count consecutive stones in one direction from (row, col), excluding center.
fn count_direction(
    board: &BoardState,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Stone,
) -> u32 {
    let mut count = 0;
    let mut index = board.index(row, col);
    while let Some(next) = board.neighbor(index, (dr, dc)) {
        if !board.cell(next).is(player) {
            break;
        }
        count += 1;
        index = next;
    }
    count
}

/// Check if the board is full (draw condition).
pub fn is_board_full(board: &BoardState) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::GOMOKU_BOARD_SIZE;

    fn board() -> BoardState {
        BoardState::new(GOMOKU_BOARD_SIZE)
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = board();
        for c in 0..5 {
            board.place(7, c, Stone::Black);
        }
        assert!(check_win(&board, 7, 2, Stone::Black));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = board();
        for r in 0..5 {
            board.place(r, 7, Stone::White);
        }
        assert!(check_win(&board, 2, 7, Stone::White));
    }

    #[test]
    fn test_diagonal_win() {
        let mut board = board();
        for i in 0..5 {
            board.place(i, i, Stone::Black);
        }
        assert!(check_win(&board, 2, 2, Stone::Black));
    }

    #[test]
    fn test_anti_diagonal_win_at_edge() {
        let mut board = board();
        for i in 0..5 {
            board.place(i, 14 - i, Stone::Black);
        }
        assert!(check_win(&board, 0, 14, Stone::Black));
        assert!(check_win(&board, 4, 10, Stone::Black));
    }

    #[test]
    fn test_no_win_with_four() {
        let mut board = board();
        for c in 0..4 {
            board.place(7, c, Stone::Black);
        }
        assert!(!check_win(&board, 7, 2, Stone::Black));
        assert_eq!(longest_line(&board, 7, 2, Stone::Black), 4);
    }

    #[test]
    fn test_six_in_row_wins() {
        let mut board = board();
        for c in 0..6 {
            board.place(7, c, Stone::Black);
        }
        assert!(check_win(&board, 7, 3, Stone::Black));
    }

    #[test]
    fn test_broken_line_does_not_win() {
        let mut board = board();
        for c in [0, 1, 2, 4, 5] {
            board.place(7, c, Stone::Black);
        }
        board.place(7, 3, Stone::White);
        assert!(!check_win(&board, 7, 2, Stone::Black));
    }

    #[test]
    fn test_wrong_color_never_wins() {
        let mut board = board();
        for c in 0..5 {
            board.place(7, c, Stone::Black);
        }
        assert!(!check_win(&board, 7, 2, Stone::White));
    }

    #[test]
    fn test_board_not_full() {
        assert!(!is_board_full(&board()));
    }
}
