//! [American checkers](https://en.wikipedia.org/wiki/Checkers) on an 8x8 board, with mandatory captures
//! and multi-jumps.
pub use board::*;
pub use game::*;
pub use io::*;
pub use mv::*;
pub use piece::*;
pub use square::*;

mod board;
mod game;
mod io;
mod mv;
mod piece;
mod square;
