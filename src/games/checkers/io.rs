use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Write};

use itertools::Itertools;

use crate::board::Color;
use crate::games::checkers::{CheckersBoard, Piece, Square};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidDiagram {
    pub diagram: String,
    pub reason: &'static str,
}

impl CheckersBoard {
    /// Parse a board from its diagram: 8 rows separated by `/`, row 0 first.
    /// Each row has 8 characters, `.` for an empty square, `b`/`w` for men and `B`/`W` for kings.
    ///
    /// The start position is `.b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.`.
    pub fn from_diagram(diagram: &str) -> Result<CheckersBoard, InvalidDiagram> {
        let err = |reason| InvalidDiagram {
            diagram: diagram.into(),
            reason,
        };

        let rows = diagram.trim().split('/').collect_vec();
        if rows.len() != Square::SIZE as usize {
            return Err(err("Expected 8 rows"));
        }

        let mut board = CheckersBoard::empty();
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != Square::SIZE as usize {
                return Err(err("Expected 8 columns"));
            }

            for (col, c) in line.chars().enumerate() {
                let square = Square::new(row as u8, col as u8);
                let piece = match c {
                    '.' => continue,
                    'b' => Piece::new(square, Color::Black),
                    'w' => Piece::new(square, Color::White),
                    'B' => Piece::new_king(square, Color::Black),
                    'W' => Piece::new_king(square, Color::White),
                    _ => return Err(err("Invalid character in diagram")),
                };

                if !square.is_dark() {
                    return Err(err("Piece on a light square"));
                }
                board.place(piece);
            }
        }

        Ok(board)
    }

    pub fn to_diagram(&self) -> String {
        let mut s = String::new();
        for row in 0..Square::SIZE {
            if row != 0 {
                s.push('/');
            }
            for col in 0..Square::SIZE {
                s.push(tile_to_char(self.piece(Square::new(row, col))));
            }
        }
        s
    }
}

fn tile_to_char(tile: Option<Piece>) -> char {
    match tile {
        Some(piece) => piece.to_char(),
        None => '.',
    }
}

impl Debug for CheckersBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CheckersBoard(\"{}\")", self.to_diagram())
    }
}

impl Display for CheckersBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " +--------+")?;
        for row in 0..Square::SIZE {
            write!(f, "{}|", row)?;
            for col in 0..Square::SIZE {
                f.write_char(tile_to_char(self.piece(Square::new(row, col))))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, " +--------+")?;
        writeln!(f, "  01234567")?;
        writeln!(f, "value: {}", self.evaluate(Color::White, 1, 4))?;
        Ok(())
    }
}

impl Display for InvalidDiagram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid diagram {:?}: {}", self.diagram, self.reason)
    }
}

impl Error for InvalidDiagram {}
