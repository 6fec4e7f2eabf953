use std::collections::HashSet;

use internal_iterator::InternalIterator;

use checkers_engine::board::Color;
use checkers_engine::games::checkers::{CheckersBoard, Move};

mod perft;

pub fn board_test_main(board: &CheckersBoard, color: Color) {
    println!("Currently testing board with {} to move\n{:?}\n{}", color, board, board);

    board.assert_valid();
    if board.winner().is_some() {
        return;
    }

    test_available_match(board, color);
    test_forced_capture(board, color);
    test_men_step_forward(board, color);
    test_children(board, color);
}

/// `available_moves` must be exactly the union of `legal_moves` over all pieces, with and without the cache.
fn test_available_match(board: &CheckersBoard, color: Color) {
    let available: Vec<Move> = board.available_moves(color).collect();

    let mut cached = board.clone();
    cached.update_forced_captures(color);

    let mut expected = vec![];
    for piece in board.pieces(color) {
        let legal = board.legal_moves(piece.square());
        assert_eq!(legal, cached.legal_moves(piece.square()), "cache changes legal moves of {:?}", piece);

        for (to, captured) in legal {
            expected.push(Move {
                from: piece.square(),
                to,
                captured,
            });
        }
    }

    assert_eq!(available, expected);
    assert_eq!(board.has_moves(color), !available.is_empty());

    let unique: HashSet<_> = available.iter().map(|mv| (mv.from, mv.to)).collect();
    assert_eq!(unique.len(), available.len(), "Found duplicate move");
}

fn test_forced_capture(board: &CheckersBoard, color: Color) {
    let available: Vec<Move> = board.available_moves(color).collect();
    let any_capture = available.iter().any(|mv| mv.is_capture());

    assert_eq!(any_capture, board.has_capture(color));
    if any_capture {
        for mv in &available {
            assert!(mv.is_capture(), "non-capturing move {} while a capture is available", mv);
        }
        for piece in board.pieces(color) {
            let moves = board.legal_moves(piece.square());
            assert!(moves.values().all(|captured| !captured.is_empty()));
        }
    }
}

fn test_men_step_forward(board: &CheckersBoard, color: Color) {
    for piece in board.pieces(color).filter(|p| !p.is_king()) {
        for (to, captured) in board.piece_moves(piece.square()) {
            if captured.is_empty() {
                assert_eq!(
                    to.row() as i32 - piece.row() as i32,
                    color.forward() as i32,
                    "man {:?} steps backwards to {}",
                    piece,
                    to
                );
            }
        }
    }
}

fn test_children(board: &CheckersBoard, color: Color) {
    let before = board.clone();

    board.available_moves(color).for_each(|mv: Move| {
        let child = board.clone_and_apply(&mv);
        child.assert_valid();

        assert_eq!(
            child.piece_count(color.other()) as usize,
            board.piece_count(color.other()) as usize - mv.captured.len()
        );
        assert_eq!(child.piece_count(color), board.piece_count(color));
        assert!(child.king_count(color) >= board.king_count(color));

        let moved = child.piece(mv.to).unwrap();
        assert_eq!(moved.color(), color);
        assert!(child.piece(mv.from).is_none());
        for captured in &mv.captured {
            assert!(child.piece(captured.square()).is_none());
        }
    });

    assert_eq!(*board, before, "branching modified the original board");
    assert_eq!(board.possible_positions(color).len(), board.available_moves(color).count());
}
