use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::ops::{ControlFlow, Neg};

use internal_iterator::InternalIterator;
use log::trace;
use rand::Rng;

use crate::ai::Bot;
use crate::board::Color;
use crate::games::checkers::{CheckersBoard, Move};

pub trait Heuristic: Debug {
    /// The type used to represent the heuristic value of a board.
    type V: Copy + Ord + Debug + Neg<Output = Self::V>;

    /// Return the heuristic value for the given board from the POV of `pov`.
    /// `depth` is the number of moves played since the board the search was started on,
    /// it can be used to prefer faster wins or slower losses.
    fn value(&self, board: &CheckersBoard, pov: Color, depth: u32) -> Self::V;

    /// The value, from the POV of the player to move, of a board where that player has no moves left.
    fn loss(&self, depth: u32) -> Self::V;

    /// Merge old and new into a new value, and return whether the new value is at least as good the old one.
    /// For standard minimax searches this can simply be implemented as: `(max(old, new), new >= old)`
    fn merge(old: Self::V, new: Self::V) -> (Self::V, bool);
}

#[derive(Debug)]
pub struct MinimaxResult<V> {
    /// The value of the board from the POV of the player to move.
    pub value: V,

    /// The best move to play and the board it results in,
    /// `None` if the board is done, the player has no moves or the search depth was 0.
    pub best: Option<(Move, CheckersBoard)>,
}

/// Evaluate the board for `color` to move using minimax with the given heuristic up to the given depth.
/// Return both the value and the best move. If multiple moves have the same value pick a random one using `rng`.
///
/// Every move at the root is searched with a full window, so the values being compared for
/// the random pick are exact. Deeper nodes use alpha-beta pruning.
pub fn minimax<H: Heuristic>(
    board: &CheckersBoard,
    heuristic: &H,
    depth: u32,
    color: Color,
    rng: &mut impl Rng,
) -> MinimaxResult<H::V> {
    if depth == 0 || board.winner().is_some() {
        return MinimaxResult {
            value: heuristic.value(board, color, 0),
            best: None,
        };
    }

    let mut selector = RandomBestMoveSelector::new(rng);
    let mut best_value: Option<H::V> = None;
    let mut best = None;

    board.available_moves(color).for_each(|mv: Move| {
        let child = board.clone_and_apply(&mv);
        let value = -negamax_recurse(heuristic, &child, color.other(), 1, depth - 1, None, None);
        trace!("considering move {} for {}: {:?}", mv, color, value);

        let accept = match best_value.map(|best_value| value.cmp(&best_value)) {
            None | Some(Ordering::Greater) => selector.reset(),
            Some(Ordering::Equal) => selector.accept(),
            Some(Ordering::Less) => false,
        };
        if accept {
            best_value = Some(value);
            best = Some((mv, child));
        }
    });

    match best_value {
        Some(value) => MinimaxResult { value, best },
        None => MinimaxResult {
            value: heuristic.loss(0),
            best: None,
        },
    }
}

/// Evaluate the board for `color` to move using minimax with the given heuristic up to the given depth.
/// Only returns the value without selecting a move, and so doesn't require an `Rng`.
pub fn minimax_value<H: Heuristic>(board: &CheckersBoard, heuristic: &H, depth: u32, color: Color) -> H::V {
    negamax_recurse(heuristic, board, color, 0, depth, None, None)
}

/// Pick each of the equally good moves with equal probability,
/// implemented using [reservoir sampling](https://en.wikipedia.org/wiki/Reservoir_sampling).
struct RandomBestMoveSelector<'a, R: Rng> {
    rng: &'a mut R,
    count: u32,
}

impl<'a, R: Rng> RandomBestMoveSelector<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        RandomBestMoveSelector { rng, count: 0 }
    }

    /// A strictly better move was found, forget about the previous ones.
    fn reset(&mut self) -> bool {
        self.count = 1;
        true
    }

    /// A move as good as the current best was found.
    fn accept(&mut self) -> bool {
        self.count += 1;
        self.rng.gen_range(0..self.count) == 0
    }
}

/// The core minimax implementation.
/// Alpha-Beta Negamax, implementation based on
/// <https://en.wikipedia.org/wiki/Negamax#Negamax_with_alpha_beta_pruning>
///
/// The returned value is from the POV of `color`. A missing bound means that side of the window is unbounded.
fn negamax_recurse<H: Heuristic>(
    heuristic: &H,
    board: &CheckersBoard,
    color: Color,
    length: u32,
    depth_left: u32,
    alpha: Option<H::V>,
    beta: Option<H::V>,
) -> H::V {
    if depth_left == 0 || board.winner().is_some() {
        return heuristic.value(board, color, length);
    }

    let mut best_value: Option<H::V> = None;
    let mut alpha = alpha;

    let early = board.available_moves(color).try_for_each(|mv: Move| {
        let child = board.clone_and_apply(&mv);

        let child_value = -negamax_recurse(
            heuristic,
            &child,
            color.other(),
            length + 1,
            depth_left - 1,
            beta.map(Neg::neg),
            alpha.map(Neg::neg),
        );

        let new_best_value = best_value.map_or(child_value, |best_value| H::merge(best_value, child_value).0);
        let new_alpha = alpha.map_or(new_best_value, |alpha| H::merge(alpha, new_best_value).0);

        best_value = Some(new_best_value);
        alpha = Some(new_alpha);

        if beta.map_or(false, |beta| H::merge(beta, new_alpha).1) {
            ControlFlow::Break(new_best_value)
        } else {
            ControlFlow::Continue(())
        }
    });

    match early {
        ControlFlow::Break(value) => value,
        ControlFlow::Continue(()) => best_value.unwrap_or_else(|| heuristic.loss(length)),
    }
}

pub struct MiniMaxBot<H: Heuristic, R: Rng> {
    depth: u32,
    heuristic: H,
    rng: R,
}

impl<H: Heuristic, R: Rng> Debug for MiniMaxBot<H, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MiniMaxBot {{ depth: {}, heuristic: {:?} }}",
            self.depth, self.heuristic
        )
    }
}

impl<H: Heuristic, R: Rng> MiniMaxBot<H, R> {
    pub fn new(depth: u32, heuristic: H, rng: R) -> Self {
        assert!(depth > 0, "requires depth>0 to find the best move");
        MiniMaxBot { depth, heuristic, rng }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<H: Heuristic, R: Rng> Bot for MiniMaxBot<H, R> {
    fn select_move(&mut self, board: &CheckersBoard, color: Color) -> Option<(Move, CheckersBoard)> {
        minimax(board, &self.heuristic, self.depth, color, &mut self.rng).best
    }
}
