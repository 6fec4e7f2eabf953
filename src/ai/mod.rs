use std::fmt::Debug;

use crate::board::Color;
use crate::games::checkers::{CheckersBoard, Move};

pub mod minimax;
pub mod simple;

pub trait Bot: Debug {
    /// Pick a move for `color` to play, together with the board it results in.
    /// Returns `None` if `color` has no moves available, which means it has lost.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &CheckersBoard, color: Color) -> Option<(Move, CheckersBoard)>;
}
