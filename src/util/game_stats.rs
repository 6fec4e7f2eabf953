//! Utilities for collecting game statistics and testing move generation.
use std::collections::HashMap;

use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::Color;
use crate::games::checkers::CheckersBoard;

/// The number of move sequences of length `depth` starting with `color` to move.
/// See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &CheckersBoard, color: Color, depth: u32) -> u64 {
    let mut map = HashMap::default();
    perft_recurse(&mut map, board.clone(), color, depth)
}

fn perft_recurse(
    map: &mut HashMap<(CheckersBoard, Color, u32), u64>,
    board: CheckersBoard,
    color: Color,
    depth: u32,
) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.winner().is_some() {
        return 0;
    }

    // the key includes depth, otherwise the same board encountered at different depths would be miscounted
    let key = (board, color, depth);
    if let Some(&p) = map.get(&key) {
        return p;
    }
    let board = &key.0;

    let mut p = 0;
    board.available_moves(color).for_each(|mv| {
        p += perft_recurse(map, board.clone_and_apply(&mv), color.other(), depth - 1);
    });

    map.insert(key, p);
    p
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games starting from `start` with `color` to move,
/// played by `bot` for both sides. Games are cut off after `max_length` moves.
pub fn average_game_stats(start: &CheckersBoard, color: Color, mut bot: impl Bot, n: u64, max_length: u32) -> GameStats {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut board = start.clone();
        let mut color = color;

        for _ in 0..max_length {
            if board.winner().is_some() {
                break;
            }
            total_moves += board.available_moves(color).count();
            total_positions += 1;

            match bot.select_move(&board, color) {
                Some((_, next)) => board = next,
                None => break,
            }
            color = color.other();
        }
    }

    GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    }
}
