use crate::board::Color;
use crate::games::checkers::Square;

/// A single checker. Pieces are plain values owned by the cell of the board they are on,
/// only [CheckersBoard](crate::games::checkers::CheckersBoard) moves or promotes them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    square: Square,
    color: Color,
    king: bool,
}

impl Piece {
    pub fn new(square: Square, color: Color) -> Piece {
        Piece { square, color, king: false }
    }

    pub fn new_king(square: Square, color: Color) -> Piece {
        Piece { square, color, king: true }
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn row(&self) -> u8 {
        self.square.row()
    }

    pub fn col(&self) -> u8 {
        self.square.col()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_king(&self) -> bool {
        self.king
    }

    pub fn to_char(&self) -> char {
        let c = self.color.to_char();
        if self.king {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    pub(super) fn move_to(&mut self, square: Square) {
        self.square = square;
    }

    /// Promote this piece, returns whether it was not a king yet.
    pub(super) fn make_king(&mut self) -> bool {
        let promoted = !self.king;
        self.king = true;
        promoted
    }
}
