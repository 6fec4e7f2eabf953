#![allow(clippy::assertions_on_constants)]

use std::time::Instant;

use checkers_engine::ai::minimax::minimax;
use checkers_engine::ai::simple::RandomBot;
use checkers_engine::board::Color;
use checkers_engine::games::checkers::CheckersBoard;
use checkers_engine::heuristic::checkers::MaterialHeuristic;
use checkers_engine::util::board_gen::random_board_with_moves;
use checkers_engine::util::game_stats::{average_game_stats, perft};
use checkers_engine::util::rng::{consistent_rng, seeded_rng};
use itertools::Itertools;

fn main() {
    env_logger::init();

    let heuristic = MaterialHeuristic::default();

    bench("perft_start_6", || {
        perft(&CheckersBoard::default(), Color::White, 6);
    });

    for depth in [4, 6] {
        bench(&format!("minimax_start_{}", depth), || {
            minimax(&CheckersBoard::default(), &heuristic, depth, Color::White, &mut consistent_rng());
        });
    }

    let mut rng = seeded_rng(1);
    let midgame = random_board_with_moves(&CheckersBoard::default(), Color::White, 20, &mut rng);
    if let Some((board, color)) = midgame {
        println!("Midgame position, {} to move:\n{}", color, board);
        bench("minimax_midgame_6", || {
            minimax(&board, &heuristic, 6, color, &mut consistent_rng());
        });
    }

    let stats = average_game_stats(
        &CheckersBoard::default(),
        Color::White,
        RandomBot::new(consistent_rng()),
        100,
        200,
    );
    println!("Random games: {:?}", stats);
}

const ITERATION_COUNT: usize = 10;
const REMOVED_OUTLIERS_PER_SIDE: usize = 1;

fn bench(name: &str, mut f: impl FnMut()) {
    assert!(ITERATION_COUNT > REMOVED_OUTLIERS_PER_SIDE * 2);
    println!("Running benchmark {}", name);

    // benchmark function
    let mut timings = vec![];

    for _ in 0..ITERATION_COUNT {
        let start = Instant::now();
        f();

        let end = Instant::now();
        timings.push(end - start);
    }

    // remove outliers
    for _ in 0..REMOVED_OUTLIERS_PER_SIDE {
        timings.remove(timings.iter().position_min().unwrap());
        timings.remove(timings.iter().position_max().unwrap());
    }

    // print results
    let timings = timings.iter().map(|d| d.as_secs_f32() * 1000.0).collect_vec();
    let mean = timings.iter().sum::<f32>() / timings.len() as f32;
    let stddev = (timings.iter().map(|&f| (f - mean).powi(2)).sum::<f32>() / timings.len() as f32).sqrt();

    println!("  {:.2}ms\t +- {:.2}ms", mean, stddev);
}
