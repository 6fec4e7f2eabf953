//! Utilities to generate a `CheckersBoard` in a random or scripted state.
use rand::Rng;

use crate::ai::simple::RandomBot;
use crate::ai::Bot;
use crate::board::Color;
use crate::games::checkers::{CheckersBoard, Square};

/// Play the given `(from, to)` moves starting from `start` with `color` to move, including their captures.
/// Returns the resulting board and the color to move next.
pub fn board_with_moves(start: CheckersBoard, color: Color, moves: &[(Square, Square)]) -> (CheckersBoard, Color) {
    let mut curr = start;
    let mut color = color;

    for &(from, to) in moves {
        assert!(curr.winner().is_none(), "Board already done, playing {}->{} on {}", from, to, curr);

        let piece = curr.piece(from);
        assert!(
            piece.map_or(false, |piece| piece.color() == color),
            "No piece of {} on {} in {}",
            color,
            from,
            curr
        );

        let captured = match curr.legal_moves(from).remove(&to) {
            Some(captured) => captured,
            None => panic!("Move not available, playing {}->{} on {}", from, to, curr),
        };
        if let Err(e) = curr.apply_move(from, to) {
            panic!("Failed to play {}->{} on {}: {}", from, to, curr, e);
        }
        curr.remove(&captured);

        color = color.other();
    }

    (curr, color)
}

/// Generate a board by playing `n` random moves on `start`, with `color` to move first.
/// Returns the board and the color to move, or `None` if the game ended before `n` moves were played.
pub fn random_board_with_moves(
    start: &CheckersBoard,
    color: Color,
    n: u32,
    rng: &mut impl Rng,
) -> Option<(CheckersBoard, Color)> {
    let mut bot = RandomBot::new(rng);
    let mut board = start.clone();
    let mut color = color;

    for _ in 0..n {
        if board.winner().is_some() {
            return None;
        }
        let (_, next) = bot.select_move(&board, color)?;
        board = next;
        color = color.other();
    }

    Some((board, color))
}
