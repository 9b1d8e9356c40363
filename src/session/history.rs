//! Append-only record of turns, used for undo.

use crate::core::types::{KoPoint, Move};

/// Session state from just before a recorded move that the move itself
/// does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestorePoint {
    pub ko: Option<KoPoint>,
    pub consecutive_passes: u8,
}

/// Moves plus a parallel stack of restore points, one per move.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
    restore_points: Vec<RestorePoint>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mv: Move, before: RestorePoint) {
        self.moves.push(mv);
        self.restore_points.push(before);
    }

    /// Remove the most recent move and the state saved before it.
    pub fn pop(&mut self) -> Option<(Move, RestorePoint)> {
        let mv = self.moves.pop()?;
        let before = self.restore_points.pop().unwrap_or(RestorePoint {
            ko: None,
            consecutive_passes: 0,
        });
        Some((mv, before))
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Move> {
        self.moves.last_mut()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.restore_points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Action, Stone};

    fn restore(passes: u8) -> RestorePoint {
        RestorePoint {
            ko: None,
            consecutive_passes: passes,
        }
    }

    #[test]
    fn test_record_and_pop_lifo() {
        let mut history = MoveHistory::new();
        history.record(Move::place(3, 3, Stone::Black), restore(0));
        history.record(Move::pass(Stone::White), restore(0));
        assert_eq!(history.len(), 2);

        let (mv, before) = history.pop().unwrap();
        assert_eq!(mv.action, Action::Pass);
        assert_eq!(before.consecutive_passes, 0);
        let (mv, _) = history.pop().unwrap();
        assert_eq!(mv.action, Action::Place(3, 3));
        assert!(history.pop().is_none());
        assert!(history.is_empty());
    }
}
