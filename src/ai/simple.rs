//! A simple baseline bot: `RandomBot`.
use std::fmt::{Debug, Formatter};

use internal_iterator::InternalIterator;
use rand::Rng;

use crate::ai::Bot;
use crate::board::Color;
use crate::games::checkers::{CheckersBoard, Move};

/// Bot that chooses moves randomly uniformly among possible moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &CheckersBoard, color: Color) -> Option<(Move, CheckersBoard)> {
        let count = board.available_moves(color).count();
        if count == 0 {
            return None;
        }

        let index = self.rng.gen_range(0..count);
        let mv = board.available_moves(color).nth(index)?;
        let child = board.clone_and_apply(&mv);
        Some((mv, child))
    }
}
