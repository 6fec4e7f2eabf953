#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! An engine for [American checkers](https://en.wikipedia.org/wiki/Checkers) on an 8x8 board,
//! together with a computer opponent.
//!
//! # Features
//!
//! * [CheckersBoard](crate::games::checkers::CheckersBoard): the board as a plain value,
//!     with move generation that discovers multi-jump capture chains of any length and enforces
//!     the rule that capturing is mandatory.
//! * [Game](crate::games::checkers::Game): the turn and selection state machine a user interface talks to,
//!     using row/column clicks.
//! * Game-playing algorithms, specifically:
//!     * [RandomBot](crate::ai::simple::RandomBot),
//!         which simply picks a random move.
//!     * [MiniMaxBot](crate::ai::minimax::MiniMaxBot),
//!         which picks the best move as evaluated by a customizable heuristic at a fixed depth
//!         (implemented as alpha-beta negamax), breaking ties uniformly at random.
//! * A material [heuristic](crate::heuristic::checkers::MaterialHeuristic) with configurable
//!     man and king values.
//! * Random board generation and perft, see [board_gen](crate::util::board_gen) and
//!     [game_stats](crate::util::game_stats).
//!
//! # Examples
//!
//! ## List the available moves on a board and play the first one.
//!
//! ```
//! # use checkers_engine::board::Color;
//! # use checkers_engine::games::checkers::CheckersBoard;
//! # use internal_iterator::InternalIterator;
//! let board = CheckersBoard::default();
//! println!("{}", board);
//!
//! board.available_moves(Color::White).for_each(|mv| {
//!     println!("{}", mv)
//! });
//!
//! let positions = board.possible_positions(Color::White);
//! assert_eq!(positions.len(), 7);
//! ```
//!
//! ## Play against the computer
//!
//! ```
//! # use checkers_engine::board::Color;
//! # use checkers_engine::games::checkers::{Game, GameConfig};
//! # use checkers_engine::util::rng::consistent_rng;
//! let mut game = Game::new(GameConfig::default(), consistent_rng());
//!
//! // select the white man on (5, 0), then move it to (4, 1)
//! assert!(game.select(5, 0));
//! assert!(game.select(4, 1));
//!
//! // the computer has already answered
//! assert_eq!(game.turn(), Color::White);
//! ```

pub mod board;

pub mod ai;

pub mod games;

pub mod heuristic;

pub mod util;
