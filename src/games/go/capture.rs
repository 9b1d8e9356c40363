//! Go captures and the suicide rule.

use crate::board::{BoardState, GroupAnalyzer, ORTHOGONAL};
use crate::core::types::{CapturedStone, Stone};

/// Remove every opponent group touching (row, col) that has no liberties left.
///
/// Call after `mover`'s stone has been placed at (row, col). Returns the
/// removed stones group by group, each group in row-major order.
pub fn capture_dead_neighbors(
    board: &mut BoardState,
    analyzer: &mut GroupAnalyzer,
    row: usize,
    col: usize,
    mover: Stone,
) -> Vec<CapturedStone> {
    let mut captured = Vec::new();
    if !board.in_bounds(row, col) {
        return captured;
    }
    let opponent = mover.opponent();
    let origin = board.index(row, col);

    for dir in ORTHOGONAL {
        let Some(n) = board.neighbor(origin, dir) else {
            continue;
        };
        // A group touching the stone twice is already gone on the second visit.
        if !board.cell(n).is(opponent) {
            continue;
        }
        let (nr, nc) = board.point(n);
        if analyzer.has_liberties(board, nr, nc, opponent) {
            continue;
        }
        for index in analyzer.group_indices(board, n, opponent) {
            let (r, c) = board.point(index);
            board.remove(r, c);
            captured.push(CapturedStone {
                row: r,
                col: c,
                color: opponent,
            });
        }
    }
    captured
}

/// Would placing a `color` stone at (row, col) capture anything?
pub fn would_capture(
    board: &BoardState,
    analyzer: &mut GroupAnalyzer,
    row: usize,
    col: usize,
    color: Stone,
) -> bool {
    let mut trial = board.clone();
    if !trial.place(row, col, color) {
        return false;
    }
    let origin = trial.index(row, col);
    let opponent = color.opponent();
    let captures = trial.neighbors(origin).any(|n| {
        let (nr, nc) = trial.point(n);
        trial.cell(n).is(opponent) && !analyzer.has_liberties(&trial, nr, nc, opponent)
    });
    captures
}

/// Would placing a `color` stone at (row, col) leave its own group without
/// liberties while capturing nothing?
///
/// Points that cannot hold a stone at all (occupied or off the board) are
/// not suicide; the caller rejects them separately.
pub fn would_be_suicide(
    board: &BoardState,
    analyzer: &mut GroupAnalyzer,
    row: usize,
    col: usize,
    color: Stone,
) -> bool {
    if !board.is_empty(row, col) {
        return false;
    }
    let origin = board.index(row, col);
    // Quick accept: an empty neighbor is a liberty for the new stone.
    if board.neighbors(origin).any(|n| board.cell(n).is_empty()) {
        return false;
    }
    if would_capture(board, analyzer, row, col, color) {
        return false;
    }
    let mut trial = board.clone();
    trial.place(row, col, color);
    !analyzer.has_liberties(&trial, row, col, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Cell;
    use proptest::prelude::*;

    fn board_with(size: usize, stones: &[(usize, usize, Stone)]) -> BoardState {
        let mut board = BoardState::new(size);
        for &(r, c, s) in stones {
            board.place(r, c, s);
        }
        board
    }

    fn play(
        board: &mut BoardState,
        analyzer: &mut GroupAnalyzer,
        r: usize,
        c: usize,
        s: Stone,
    ) -> Vec<CapturedStone> {
        assert!(board.place(r, c, s));
        capture_dead_neighbors(board, analyzer, r, c, s)
    }

    #[test]
    fn test_capture_single_stone() {
        let mut board = board_with(
            19,
            &[
                (5, 5, Stone::White),
                (4, 5, Stone::Black),
                (6, 5, Stone::Black),
                (5, 4, Stone::Black),
            ],
        );
        let mut analyzer = GroupAnalyzer::new();
        let captured = play(&mut board, &mut analyzer, 5, 6, Stone::Black);
        assert_eq!(
            captured,
            vec![CapturedStone {
                row: 5,
                col: 5,
                color: Stone::White
            }]
        );
        assert_eq!(board.occupancy_at(5, 5), Cell::Empty);
    }

    #[test]
    fn test_capture_two_groups_with_one_move() {
        // Two separate white stones whose last shared liberty is the corner.
        let mut board = board_with(
            9,
            &[
                (0, 1, Stone::White),
                (1, 0, Stone::White),
                (0, 2, Stone::Black),
                (1, 1, Stone::Black),
                (2, 0, Stone::Black),
            ],
        );
        let mut analyzer = GroupAnalyzer::new();
        let captured = play(&mut board, &mut analyzer, 0, 0, Stone::Black);
        assert_eq!(captured.len(), 2);
        assert!(board.is_empty(0, 1));
        assert!(board.is_empty(1, 0));
    }

    #[test]
    fn test_capture_multi_stone_group() {
        let mut board = board_with(
            9,
            &[
                (0, 0, Stone::White),
                (0, 1, Stone::White),
                (1, 0, Stone::Black),
                (1, 1, Stone::Black),
            ],
        );
        let mut analyzer = GroupAnalyzer::new();
        let captured = play(&mut board, &mut analyzer, 0, 2, Stone::Black);
        assert_eq!(captured.len(), 2);
        assert_eq!(board.count(Stone::White), 0);
    }

    #[test]
    fn test_no_capture_when_liberty_remains() {
        let mut board = board_with(9, &[(4, 4, Stone::White), (3, 4, Stone::Black)]);
        let mut analyzer = GroupAnalyzer::new();
        let captured = play(&mut board, &mut analyzer, 5, 4, Stone::Black);
        assert!(captured.is_empty());
        assert_eq!(board.occupancy_at(4, 4), Cell::White);
    }

    #[test]
    fn test_corner_suicide() {
        let board = board_with(9, &[(0, 1, Stone::White), (1, 0, Stone::White)]);
        let mut analyzer = GroupAnalyzer::new();
        assert!(would_be_suicide(&board, &mut analyzer, 0, 0, Stone::Black));
        assert!(!would_be_suicide(&board, &mut analyzer, 0, 0, Stone::White));
    }

    #[test]
    fn test_filling_own_last_liberty_is_suicide() {
        // Black group (0,0)-(0,1) whose only liberty is (0,2), surrounded by white.
        let board = board_with(
            9,
            &[
                (0, 0, Stone::Black),
                (0, 1, Stone::Black),
                (1, 0, Stone::White),
                (1, 1, Stone::White),
                (1, 2, Stone::White),
                (0, 3, Stone::White),
            ],
        );
        let mut analyzer = GroupAnalyzer::new();
        assert!(would_be_suicide(&board, &mut analyzer, 0, 2, Stone::Black));
    }

    #[test]
    fn test_capturing_move_is_not_suicide() {
        // White (0,1) has a single liberty at (0,0); Black playing there has
        // no empty neighbor but captures.
        let board = board_with(
            9,
            &[
                (0, 1, Stone::White),
                (1, 0, Stone::White),
                (0, 2, Stone::Black),
                (1, 1, Stone::Black),
                (2, 0, Stone::Black),
            ],
        );
        let mut analyzer = GroupAnalyzer::new();
        assert!(would_capture(&board, &mut analyzer, 0, 0, Stone::Black));
        assert!(!would_be_suicide(&board, &mut analyzer, 0, 0, Stone::Black));
    }

    #[test]
    fn test_would_capture_leaves_board_untouched() {
        let board = board_with(
            19,
            &[
                (5, 5, Stone::White),
                (4, 5, Stone::Black),
                (6, 5, Stone::Black),
                (5, 4, Stone::Black),
            ],
        );
        let before = board.clone();
        let mut analyzer = GroupAnalyzer::new();

        assert!(would_capture(&board, &mut analyzer, 5, 6, Stone::Black));
        assert!(!would_capture(&board, &mut analyzer, 5, 6, Stone::White));
        assert!(!would_capture(&board, &mut analyzer, 3, 3, Stone::Black));
        // Occupied and off-board points capture nothing
        assert!(!would_capture(&board, &mut analyzer, 5, 5, Stone::Black));
        assert!(!would_capture(&board, &mut analyzer, 19, 0, Stone::Black));
        assert_eq!(board, before);
    }

    #[test]
    fn test_connecting_to_living_group_is_not_suicide() {
        let board = board_with(
            9,
            &[
                (0, 1, Stone::White),
                (1, 0, Stone::Black),
                (2, 0, Stone::Black),
            ],
        );
        // (0,0): neighbors (0,1) White and (1,0) Black with liberties.
        let mut analyzer = GroupAnalyzer::new();
        assert!(!would_be_suicide(&board, &mut analyzer, 0, 0, Stone::Black));
    }

    fn cell_strategy() -> impl Strategy<Value = Option<Stone>> {
        prop_oneof![
            2 => Just(None),
            3 => Just(Some(Stone::Black)),
            3 => Just(Some(Stone::White)),
        ]
    }

    proptest! {
        #[test]
        fn test_zero_liberty_zero_capture_is_always_suicide(
            cells in prop::collection::vec(cell_strategy(), 49),
            color in prop_oneof![Just(Stone::Black), Just(Stone::White)],
        ) {
            let mut board = BoardState::new(7);
            for (i, cell) in cells.iter().enumerate() {
                if let Some(stone) = cell {
                    board.place(i / 7, i % 7, *stone);
                }
            }
            let mut analyzer = GroupAnalyzer::new();

            let empties: Vec<(usize, usize)> = board.empty_points().collect();
            for (r, c) in empties {
                let mut after = board.clone();
                after.place(r, c, color);
                let origin = after.index(r, c);
                let captures = after.neighbors(origin).any(|n| {
                    let (nr, nc) = after.point(n);
                    after.cell(n).is(color.opponent())
                        && analyzer.count_liberties(&after, nr, nc, color.opponent()) == 0
                });
                let own_liberties = analyzer.count_liberties(&after, r, c, color);

                let expected = own_liberties == 0 && !captures;
                prop_assert_eq!(would_be_suicide(&board, &mut analyzer, r, c, color), expected);
            }
        }
    }
}
