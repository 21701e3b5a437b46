// src/game/history.rs

use crate::game::board::Position;
use crate::game::moves::{apply_move, undo_move, Move};

/// A line of play over the pure applier: the current position plus the moves
/// that produced it. Undo rewinds through `undo_move`, whose snapshots make
/// the reversal exact.
pub struct History {
    current: Position,
    moves: Vec<Move>,
}

impl History {
    pub fn new(start: Position) -> Self {
        Self {
            current: start,
            moves: Vec::with_capacity(512),
        }
    }

    #[inline]
    pub fn current(&self) -> &Position {
        &self.current
    }

    pub fn apply(&mut self, mv: Move) {
        self.current = apply_move(&self.current, &mv);
        self.moves.push(mv);
    }

    /// Rewinds the last move; `false` at the starting position.
    pub fn undo(&mut self) -> bool {
        match self.moves.pop() {
            Some(mv) => {
                self.current = undo_move(&self.current, &mv);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }
}
