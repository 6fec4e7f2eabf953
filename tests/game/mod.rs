use checkers_engine::ai::minimax::MiniMaxBot;
use checkers_engine::ai::Bot;
use checkers_engine::board::Color;
use checkers_engine::games::checkers::{CheckersBoard, Game, GameConfig, Square};
use checkers_engine::heuristic::checkers::MaterialHeuristic;
use checkers_engine::util::rng::consistent_rng;

use crate::util::board;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn computer(color: Color) -> Option<(Color, Box<dyn Bot>)> {
    let bot: Box<dyn Bot> = Box::new(MiniMaxBot::new(2, MaterialHeuristic::default(), consistent_rng()));
    Some((color, bot))
}

#[test]
fn select_own_piece() {
    let mut game = Game::human_vs_human();

    assert!(game.select(5, 0));
    assert_eq!(game.selected(), Some(sq(5, 0)));
    assert_eq!(*game.valid_moves(), game.board().legal_moves(sq(5, 0)));
    assert_eq!(game.valid_moves().keys().copied().collect::<Vec<_>>(), vec![sq(4, 1)]);
}

#[test]
fn select_nothing() {
    let mut game = Game::human_vs_human();

    // empty square, opponent piece, off the board
    assert!(!game.select(4, 1));
    assert!(!game.select(2, 1));
    assert!(!game.select(-1, 3));
    assert!(!game.select(3, 8));
    assert_eq!(game.selected(), None);
    assert!(game.valid_moves().is_empty());
}

#[test]
fn reselect_other_piece() {
    let mut game = Game::human_vs_human();

    assert!(game.select(5, 0));
    // not a legal destination, but another own piece
    assert!(game.select(5, 2));
    assert_eq!(game.selected(), Some(sq(5, 2)));
    assert_eq!(game.valid_moves().len(), 2);
}

#[test]
fn illegal_destination_deselects() {
    let mut game = Game::human_vs_human();
    let before = game.board().clone();

    assert!(game.select(5, 0));
    assert!(!game.select(3, 2));

    assert_eq!(game.selected(), None);
    assert!(game.valid_moves().is_empty());
    assert_eq!(*game.board(), before);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn move_flips_turn() {
    let mut game = Game::human_vs_human();

    assert!(game.select(5, 0));
    assert!(game.select(4, 1));

    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.selected(), None);
    assert!(game.valid_moves().is_empty());
    assert!(game.board().piece(sq(4, 1)).is_some());
    assert!(game.board().piece(sq(5, 0)).is_none());

    // white pieces can no longer be selected
    assert!(!game.select(5, 2));
    assert!(game.select(2, 1));
}

#[test]
fn capture_in_game() {
    let start = board(concat!(
        ".......b/",
        "......../",
        "......../",
        "......../",
        "...b..../",
        "..w...../",
        ".......w/",
        "........",
    ));
    let mut game = Game::with_board(start, Color::White, None);

    // the other piece can be selected but has nowhere to go
    assert!(game.select(6, 7));
    assert!(game.valid_moves().is_empty());
    assert!(!game.select(5, 6));
    assert_eq!(game.turn(), Color::White);

    assert!(game.select(5, 2));
    assert!(game.select(3, 4));

    assert_eq!(game.turn(), Color::Black);
    assert!(game.board().piece(sq(4, 3)).is_none());
    assert_eq!(game.board().piece_count(Color::Black), 1);
    assert_eq!(game.winner(), None);
    game.board().assert_valid();
}

#[test]
fn last_capture_wins() {
    let start = board(concat!(
        "......../",
        "......../",
        "......../",
        "......../",
        "...b..../",
        "..w...../",
        "......../",
        "........",
    ));
    let mut game = Game::with_board(start, Color::White, computer(Color::Black));

    assert!(game.select(5, 2));
    assert!(game.select(3, 4));

    assert_eq!(game.winner(), Some(Color::White));
    assert!(!game.select(3, 4));
    assert!(!game.computer_move());
}

#[test]
fn blocked_side_loses() {
    let start = board(concat!(
        "...b..../",
        "b.b...../",
        ".w....../",
        "......../",
        "......../",
        "......../",
        "......../",
        "........",
    ));

    let game = Game::with_board(start.clone(), Color::White, None);
    assert_eq!(game.winner(), Some(Color::Black));

    let game = Game::with_board(start, Color::White, computer(Color::White));
    assert_eq!(game.winner(), Some(Color::Black));
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn computer_blocked_after_human_move() {
    // the black man on (6, 1) is stuck behind white pieces
    let start = board(concat!(
        "......../",
        "......../",
        "......../",
        "......../",
        ".....w../",
        "w.w...../",
        ".b....../",
        "w.w.....",
    ));
    let mut game = Game::with_board(start, Color::White, computer(Color::Black));
    assert_eq!(game.winner(), None);

    assert!(game.select(4, 5));
    assert!(game.select(3, 4));

    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.board().piece_count(Color::Black), 1);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn computer_answers() {
    let mut game = Game::new(GameConfig::default(), consistent_rng());
    assert_eq!(game.computer(), Some(Color::Black));

    assert!(game.select(5, 0));
    assert!(game.select(4, 1));

    // black has already answered and it is white's turn again
    assert_eq!(game.turn(), Color::White);
    let advanced = game.board().pieces(Color::Black).filter(|p| p.row() == 3).count();
    assert_eq!(advanced, 1);
    assert_eq!(game.board().piece_count(Color::Black), 12);
    assert_eq!(game.board().piece_count(Color::White), 12);
    game.board().assert_valid();
}

#[test]
fn computer_plays_white() {
    let config = GameConfig {
        depth: 2,
        computer: Some(Color::White),
        ..GameConfig::default()
    };
    let game = Game::new(config, consistent_rng());

    assert_eq!(game.turn(), Color::Black);
    assert_ne!(*game.board(), CheckersBoard::default());
    let advanced = game.board().pieces(Color::White).filter(|p| p.row() == 4).count();
    assert_eq!(advanced, 1);
}

#[test]
fn computer_move_on_demand() {
    let mut game = Game::with_board(CheckersBoard::default(), Color::White, computer(Color::Black));

    // the engine plays white's move, then black answers
    assert!(game.computer_move());
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board().pieces(Color::White).filter(|p| p.row() == 4).count(), 1);
    assert_eq!(game.board().pieces(Color::Black).filter(|p| p.row() == 3).count(), 1);

    let mut humans = Game::human_vs_human();
    assert!(!humans.computer_move());
}

#[test]
fn computer_vs_computer_until_done() {
    let mut game = Game::with_board(CheckersBoard::default(), Color::White, computer(Color::Black));

    // white is played on demand, black answers automatically
    for _ in 0..300 {
        if game.winner().is_some() {
            break;
        }
        game.computer_move();
        game.board().assert_valid();
    }
}
