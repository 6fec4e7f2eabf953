use std::error::Error;
use std::fmt::{Display, Formatter};

/// One of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    /// Starts on the bottom three rows and moves first.
    White,
    /// Starts on the top three rows.
    Black,
}

/// The reason a move was rejected by [CheckersBoard::apply_move](crate::games::checkers::CheckersBoard::apply_move).
/// No mutation happens when one of these is returned.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayError {
    /// There is no piece on the origin square.
    NoPiece,
    /// The destination square is not empty.
    Occupied,
    /// The destination is not in the legal move set of the piece.
    NotAvailable,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// `1` if `self == pov`, `-1` otherwise.
    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Color) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }

    /// The row delta of a non-capturing step for a man of this color.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row on which a man of this color is promoted to king.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl Display for PlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlayError::NoPiece => "no piece on the origin square",
            PlayError::Occupied => "destination square is occupied",
            PlayError::NotAvailable => "destination is not a legal move for this piece",
        };
        write!(f, "{}", s)
    }
}

impl Error for PlayError {}
