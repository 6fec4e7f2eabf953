use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::games::checkers::{Piece, Square};

/// The moves available to a single piece: destination square to the pieces captured by going there,
/// in capture order. The list is empty for a simple step.
pub type MoveSet = BTreeMap<Square, Vec<Piece>>;

/// A single entry of a [MoveSet] together with the square it starts from.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Vec<Piece>,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)?;
        if self.is_capture() {
            write!(f, " x {}", self.captured.iter().map(|p| p.square()).join(" x "))?;
        }
        Ok(())
    }
}
