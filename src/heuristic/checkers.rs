use std::cmp::max;

use crate::ai::minimax::Heuristic;
use crate::board::Color;
use crate::games::checkers::CheckersBoard;

/// Score for a won position, larger than any material difference.
pub const WIN_SCORE: i32 = 1_000;

/// Material evaluation: each man is worth `man` and each king `king`.
/// Decided boards score `±WIN_SCORE`, minus the number of plies it took to get there
/// so faster wins and slower losses are preferred.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MaterialHeuristic {
    pub man: i32,
    pub king: i32,
}

impl Default for MaterialHeuristic {
    fn default() -> Self {
        MaterialHeuristic { man: 1, king: 4 }
    }
}

impl MaterialHeuristic {
    pub fn new(man: i32, king: i32) -> Self {
        MaterialHeuristic { man, king }
    }
}

impl Heuristic for MaterialHeuristic {
    type V = i32;

    fn value(&self, board: &CheckersBoard, pov: Color, depth: u32) -> i32 {
        match board.winner() {
            Some(winner) => winner.sign::<i32>(pov) * (WIN_SCORE - depth as i32),
            None => board.evaluate(pov, self.man, self.king),
        }
    }

    fn loss(&self, depth: u32) -> i32 {
        -(WIN_SCORE - depth as i32)
    }

    fn merge(old: i32, new: i32) -> (i32, bool) {
        (max(old, new), new >= old)
    }
}
