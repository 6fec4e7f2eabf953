use checkers_engine::board::Color;
use checkers_engine::games::checkers::CheckersBoard;
use checkers_engine::util::game_stats::perft;

#[test]
fn perft_start() {
    let board = CheckersBoard::default();
    let expected: [u64; 5] = [1, 7, 49, 302, 1469];

    for (depth, &expected) in expected.iter().enumerate() {
        let actual = perft(&board, Color::White, depth as u32);
        println!("depth {} -> {} =? {}", depth, expected, actual);
        assert_eq!(expected, actual);
    }
}

#[test]
fn perft_start_is_symmetric() {
    // the start position is symmetric under a half turn, so black to move has the same tree
    let board = CheckersBoard::default();
    for depth in 0..4 {
        assert_eq!(perft(&board, Color::White, depth), perft(&board, Color::Black, depth));
    }
}
