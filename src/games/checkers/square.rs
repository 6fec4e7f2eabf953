use std::fmt::{Debug, Display, Formatter};

/// A square on the 8x8 board, stored as `row * 8 + col`.
/// Row 0 is Black's back rank, row 7 is White's back rank.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

/// One of the four diagonal step directions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

pub type SquareAllIter = std::iter::Map<std::ops::Range<u8>, fn(u8) -> Square>;

impl Square {
    pub const SIZE: u8 = 8;

    pub fn new(row: u8, col: u8) -> Square {
        assert!(row < Self::SIZE, "row {} out of range", row);
        assert!(col < Self::SIZE, "col {} out of range", col);
        Square(row * Self::SIZE + col)
    }

    /// Like [Square::new] but returns `None` instead of panicking for coordinates off the board.
    pub fn try_new(row: i32, col: i32) -> Option<Square> {
        let range = 0..Self::SIZE as i32;
        if range.contains(&row) && range.contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn from_index(index: u8) -> Square {
        assert!(index < Self::SIZE * Self::SIZE);
        Square(index)
    }

    /// All squares in row-major order.
    pub fn all() -> SquareAllIter {
        let f: fn(u8) -> Square = Square::from_index;
        (0..Self::SIZE * Self::SIZE).map(f)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> u8 {
        self.0 / Self::SIZE
    }

    pub fn col(self) -> u8 {
        self.0 % Self::SIZE
    }

    /// Only dark squares are ever occupied.
    pub fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// The square `steps` steps away in direction `dir`, or `None` if that leaves the board.
    pub fn offset(self, dir: Direction, steps: i8) -> Option<Square> {
        let row = self.row() as i32 + (dir.dr * steps) as i32;
        let col = self.col() as i32 + (dir.dc * steps) as i32;
        Square::try_new(row, col)
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction { dr: -1, dc: -1 },
        Direction { dr: -1, dc: 1 },
        Direction { dr: 1, dc: -1 },
        Direction { dr: 1, dc: 1 },
    ];
}

impl Debug for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
