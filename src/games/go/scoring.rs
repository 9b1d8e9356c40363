//! End-of-game scoring for Go.
//!
//! Area scoring: each side gets its stones on the board, the opponent stones
//! it captured and the empty regions it surrounds alone. White adds komi.
//! Before counting, groups without two eyes are taken off as dead.

use crate::board::{BoardState, GroupAnalyzer, ORTHOGONAL};
use crate::core::constants::EYES_TO_LIVE;
use crate::core::types::{CapturedStone, GameResult, Stone};
use serde::{Deserialize, Serialize};

/// Empty points owned by each side. Regions touching both colors, or no
/// stones at all, are neutral (dame).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub black: u32,
    pub white: u32,
    pub neutral: u32,
}

/// Full score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub black_stones: u32,
    pub white_stones: u32,
    pub territory: Territory,
    /// White stones captured by Black
    pub black_captures: u32,
    /// Black stones captured by White
    pub white_captures: u32,
    pub komi: f64,
    pub black_total: f64,
    pub white_total: f64,
}

impl ScoreReport {
    /// Higher total wins; equal totals draw.
    pub fn result(&self) -> GameResult {
        if self.black_total > self.white_total {
            GameResult::BlackWin
        } else if self.white_total > self.black_total {
            GameResult::WhiteWin
        } else {
            GameResult::Draw
        }
    }
}

/// An empty point is an eye for `color` when all four orthogonal neighbors
/// are on the board and hold `color` stones.
pub fn is_eye(board: &BoardState, row: usize, col: usize, color: Stone) -> bool {
    if !board.is_empty(row, col) {
        return false;
    }
    let index = board.index(row, col);
    ORTHOGONAL.iter().all(|&dir| {
        board
            .neighbor(index, dir)
            .is_some_and(|n| board.cell(n).is(color))
    })
}

/// Stones of every group that touches fewer than two eye points.
///
/// All groups are judged on the board as given, so the answer does not
/// depend on the order groups are visited in.
pub fn find_dead_stones(board: &BoardState, analyzer: &mut GroupAnalyzer) -> Vec<CapturedStone> {
    let mut processed = vec![false; board.area()];
    let mut dead = Vec::new();

    for start in 0..board.area() {
        if processed[start] {
            continue;
        }
        let Some(color) = board.cell(start).stone() else {
            continue;
        };
        let group = analyzer.group_indices(board, start, color);
        for &index in &group {
            processed[index] = true;
        }

        let mut eyes: Vec<usize> = group
            .iter()
            .flat_map(|&index| board.neighbors(index))
            .filter(|&n| {
                let (r, c) = board.point(n);
                is_eye(board, r, c, color)
            })
            .collect();
        eyes.sort_unstable();
        eyes.dedup();

        if eyes.len() < EYES_TO_LIVE {
            dead.extend(group.iter().map(|&index| {
                let (row, col) = board.point(index);
                CapturedStone { row, col, color }
            }));
        }
    }
    dead
}

/// Flood-fill every empty region and credit it to the only color bordering it.
pub fn count_territory(board: &BoardState) -> Territory {
    let mut territory = Territory::default();
    let mut visited = vec![false; board.area()];
    let mut stack = Vec::new();

    for start in 0..board.area() {
        if visited[start] || !board.cell(start).is_empty() {
            continue;
        }

        let mut size = 0u32;
        let mut touches_black = false;
        let mut touches_white = false;
        visited[start] = true;
        stack.push(start);

        while let Some(index) = stack.pop() {
            size += 1;
            for n in board.neighbors(index) {
                match board.cell(n).stone() {
                    None => {
                        if !visited[n] {
                            visited[n] = true;
                            stack.push(n);
                        }
                    }
                    Some(Stone::Black) => touches_black = true,
                    Some(Stone::White) => touches_white = true,
                }
            }
        }

        match (touches_black, touches_white) {
            (true, false) => territory.black += size,
            (false, true) => territory.white += size,
            _ => territory.neutral += size,
        }
    }
    territory
}

/// Score the board as it stands.
///
/// `captured_black` / `captured_white` are the numbers of black / white
/// stones removed so far, including dead stones already swept.
pub fn calculate_score(
    board: &BoardState,
    captured_black: u32,
    captured_white: u32,
    komi: f64,
) -> ScoreReport {
    let black_stones = board.count(Stone::Black) as u32;
    let white_stones = board.count(Stone::White) as u32;
    let territory = count_territory(board);

    let black_total = f64::from(black_stones + captured_white + territory.black);
    let white_total = f64::from(white_stones + captured_black + territory.white) + komi;

    ScoreReport {
        black_stones,
        white_stones,
        territory,
        black_captures: captured_white,
        white_captures: captured_black,
        komi,
        black_total,
        white_total,
    }
}
