use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::{Color, PlayError};
use crate::games::checkers::{Direction, Move, MoveSet, Piece, Square};

const CELLS: usize = (Square::SIZE * Square::SIZE) as usize;

/// An 8x8 checkers board. This is a plain value: cloning it yields a fully independent board.
///
/// Besides the grid the board keeps the number of live pieces and kings per color,
/// and an optional cache of the capturing moves available to one color (see [CheckersBoard::update_forced_captures]).
/// The cache is never part of equality or hashing.
#[derive(Clone)]
pub struct CheckersBoard {
    cells: [Option<Piece>; CELLS],
    pieces_left: [u8; 2],
    kings_left: [u8; 2],
    forced: Option<ForcedCaptures>,
}

/// The capturing moves of every piece of `color` that has at least one, computed once per turn.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ForcedCaptures {
    color: Color,
    moves: BTreeMap<Square, MoveSet>,
}

impl ForcedCaptures {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn moves(&self) -> &BTreeMap<Square, MoveSet> {
        &self.moves
    }
}

impl Default for CheckersBoard {
    fn default() -> Self {
        CheckersBoard::new()
    }
}

impl CheckersBoard {
    /// The standard start position: twelve pieces per color on the dark squares of the three back ranks.
    pub fn new() -> Self {
        let mut board = CheckersBoard::empty();
        for square in Square::all().filter(|s| s.is_dark()) {
            let color = match square.row() {
                0..=2 => Color::Black,
                5..=7 => Color::White,
                _ => continue,
            };
            board.place(Piece::new(square, color));
        }
        board
    }

    pub fn empty() -> Self {
        CheckersBoard {
            cells: [None; CELLS],
            pieces_left: [0; 2],
            kings_left: [0; 2],
            forced: None,
        }
    }

    /// Put `piece` on its square. Panics if the square is light or already occupied.
    pub fn place(&mut self, piece: Piece) {
        let square = piece.square();
        assert!(square.is_dark(), "pieces can only be placed on dark squares, got {}", square);
        assert!(self.cells[square.index()].is_none(), "square {} is already occupied", square);

        self.cells[square.index()] = Some(piece);
        self.pieces_left[piece.color().index()] += 1;
        if piece.is_king() {
            self.kings_left[piece.color().index()] += 1;
        }
        self.forced = None;
    }

    pub fn piece(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// All pieces of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.cells
            .iter()
            .filter_map(|&cell| cell)
            .filter(move |piece| piece.color() == color)
    }

    /// The number of live pieces of `color`, kings included.
    pub fn piece_count(&self, color: Color) -> u8 {
        self.pieces_left[color.index()]
    }

    pub fn king_count(&self, color: Color) -> u8 {
        self.kings_left[color.index()]
    }

    /// The color whose opponent has no pieces left.
    pub fn winner(&self) -> Option<Color> {
        if self.piece_count(Color::Black) == 0 {
            Some(Color::White)
        } else if self.piece_count(Color::White) == 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Material from the POV of `maximizer`: `men * man_value + kings * king_value` for `maximizer`
    /// minus the same for the other color.
    pub fn evaluate(&self, maximizer: Color, man_value: i32, king_value: i32) -> i32 {
        let material = |color: Color| {
            let kings = self.king_count(color) as i32;
            let men = self.piece_count(color) as i32 - kings;
            men * man_value + kings * king_value
        };
        material(maximizer) - material(maximizer.other())
    }

    /// The moves of the piece on `square` ignoring the forced capture rule.
    /// Empty if there is no piece on `square`.
    pub fn piece_moves(&self, square: Square) -> MoveSet {
        let mut moves = MoveSet::new();
        let piece = match self.piece(square) {
            Some(piece) => piece,
            None => return moves,
        };

        let mut captured = vec![];
        for dir in start_directions(piece) {
            let jumped = self.discover_jumps(piece, square, dir, &mut captured, &mut moves);
            if !jumped {
                if let Some(to) = square.offset(dir, 1) {
                    if self.piece(to).is_none() {
                        record(&mut moves, to, vec![]);
                    }
                }
            }
        }

        debug_assert!(captured.is_empty());
        moves
    }

    /// Follow a capture chain from `from` in direction `dir`, recording every square where a chain ends.
    /// Once a jump lands the chain may continue in any of the four directions.
    /// Returns whether a jump was possible in this direction.
    fn discover_jumps(
        &self,
        piece: Piece,
        from: Square,
        dir: Direction,
        captured: &mut Vec<Piece>,
        moves: &mut MoveSet,
    ) -> bool {
        let (over, land) = match (from.offset(dir, 1), from.offset(dir, 2)) {
            (Some(over), Some(land)) => (over, land),
            _ => return false,
        };

        let jumped = match self.piece(over) {
            Some(other) if other.color() != piece.color() && !captured.contains(&other) => other,
            _ => return false,
        };
        // the moving piece still occupies its start square, so chains can't pass through it
        if self.piece(land).is_some() {
            return false;
        }

        captured.push(jumped);

        let mut extended = false;
        for next in Direction::ALL {
            extended |= self.discover_jumps(piece, land, next, captured, moves);
        }
        if !extended {
            record(moves, land, captured.clone());
        }

        captured.pop();
        true
    }

    /// The capturing subset of [CheckersBoard::piece_moves].
    pub fn capture_moves(&self, square: Square) -> MoveSet {
        let mut moves = self.piece_moves(square);
        moves.retain(|_, captured| !captured.is_empty());
        moves
    }

    /// Whether any piece of `color` can capture.
    pub fn has_capture(&self, color: Color) -> bool {
        if let Some(forced) = &self.forced {
            if forced.color == color {
                return !forced.moves.is_empty();
            }
        }
        self.pieces(color)
            .any(|piece| !self.capture_moves(piece.square()).is_empty())
    }

    /// The legal moves for the piece on `square`, respecting the forced capture rule:
    /// if any piece of the same color can capture, only capturing moves are returned (possibly none).
    pub fn legal_moves(&self, square: Square) -> MoveSet {
        let piece = match self.piece(square) {
            Some(piece) => piece,
            None => return MoveSet::new(),
        };

        if let Some(forced) = &self.forced {
            if forced.color == piece.color() {
                return if forced.moves.is_empty() {
                    self.piece_moves(square)
                } else {
                    forced.moves.get(&square).cloned().unwrap_or_default()
                };
            }
        }

        if self.has_capture(piece.color()) {
            self.capture_moves(square)
        } else {
            self.piece_moves(square)
        }
    }

    /// Recompute the forced capture cache for `color`. This is done once per turn by the game controller.
    pub fn update_forced_captures(&mut self, color: Color) {
        let moves = self
            .pieces(color)
            .map(|piece| (piece.square(), self.capture_moves(piece.square())))
            .filter(|(_, moves)| !moves.is_empty())
            .collect();
        self.forced = Some(ForcedCaptures { color, moves });
    }

    pub fn reset_forced_captures(&mut self) {
        self.forced = None;
    }

    pub fn forced_captures(&self) -> Option<&ForcedCaptures> {
        self.forced.as_ref()
    }

    /// Move the piece on `from` to `to`, promoting it if it reaches its promotion row.
    /// Captured pieces are not removed, use [CheckersBoard::remove] with the captures from [CheckersBoard::legal_moves].
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), PlayError> {
        if self.piece(from).is_none() {
            return Err(PlayError::NoPiece);
        }
        if self.piece(to).is_some() {
            return Err(PlayError::Occupied);
        }
        if !self.legal_moves(from).contains_key(&to) {
            return Err(PlayError::NotAvailable);
        }

        self.move_piece(from, to);
        Ok(())
    }

    fn move_piece(&mut self, from: Square, to: Square) {
        let mut piece = match self.cells[from.index()].take() {
            Some(piece) => piece,
            None => unreachable!("no piece to move on {}", from),
        };
        debug_assert!(self.cells[to.index()].is_none());

        piece.move_to(to);
        if to.row() == piece.color().promotion_row() && piece.make_king() {
            self.kings_left[piece.color().index()] += 1;
        }

        self.cells[to.index()] = Some(piece);
        self.forced = None;
    }

    /// Remove captured pieces from the board.
    /// Panics if one of them is not on the board, which means the captures are stale.
    pub fn remove(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            let square = piece.square();
            let actual = match self.cells[square.index()] {
                Some(actual) if actual.color() == piece.color() => actual,
                _ => panic!("cannot remove {:?}, it is not on the board", piece),
            };

            self.cells[square.index()] = None;
            let index = actual.color().index();
            self.pieces_left[index] -= 1;
            if actual.is_king() {
                self.kings_left[index] -= 1;
            }
        }
        self.forced = None;
    }

    /// Clone this board and apply `mv` including its captures. `self` is not modified.
    pub fn clone_and_apply(&self, mv: &Move) -> CheckersBoard {
        // skip cloning the forced capture cache, it is invalid for the new position anyway
        let mut next = CheckersBoard {
            cells: self.cells,
            pieces_left: self.pieces_left,
            kings_left: self.kings_left,
            forced: None,
        };
        next.move_piece(mv.from, mv.to);
        next.remove(&mv.captured);
        next
    }

    /// Every move `color` can make, respecting the forced capture rule.
    pub fn available_moves(&self, color: Color) -> AvailableMoves<'_> {
        AvailableMoves { board: self, color }
    }

    pub fn has_moves(&self, color: Color) -> bool {
        self.available_moves(color).find_map(|_| Some(())).is_some()
    }

    /// All boards reachable by `color` playing a single move.
    pub fn possible_positions(&self, color: Color) -> Vec<CheckersBoard> {
        self.available_moves(color)
            .map(|mv| self.clone_and_apply(&mv))
            .collect()
    }

    /// Check the piece and king counters against the grid.
    pub fn assert_valid(&self) {
        for color in Color::BOTH {
            let pieces = self.pieces(color).count();
            let kings = self.pieces(color).filter(|p| p.is_king()).count();
            assert_eq!(pieces, self.piece_count(color) as usize, "piece count mismatch for {}", color);
            assert_eq!(kings, self.king_count(color) as usize, "king count mismatch for {}", color);
        }
        for square in Square::all() {
            if let Some(piece) = self.piece(square) {
                assert_eq!(piece.square(), square, "piece on {} thinks it is somewhere else", square);
                assert!(square.is_dark(), "piece on light square {}", square);
            }
        }
    }
}

fn start_directions(piece: Piece) -> impl Iterator<Item = Direction> {
    let forward = piece.color().forward();
    Direction::ALL
        .iter()
        .copied()
        .filter(move |dir| piece.is_king() || dir.dr == forward)
}

/// Keep the longest chain when multiple chains end on the same square.
fn record(moves: &mut MoveSet, to: Square, captured: Vec<Piece>) {
    match moves.get(&to) {
        Some(existing) if existing.len() >= captured.len() => {}
        _ => {
            moves.insert(to, captured);
        }
    }
}

/// Iterator returned by [CheckersBoard::available_moves].
#[derive(Debug)]
pub struct AvailableMoves<'a> {
    board: &'a CheckersBoard,
    color: Color,
}

impl<'a> InternalIterator for AvailableMoves<'a> {
    type Item = Move;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let board = self.board;
        let all: Vec<(Square, MoveSet)> = board
            .pieces(self.color)
            .map(|piece| (piece.square(), board.piece_moves(piece.square())))
            .collect();
        let forced = all
            .iter()
            .any(|(_, moves)| moves.values().any(|captured| !captured.is_empty()));

        for (from, moves) in all {
            for (to, captured) in moves {
                if forced && captured.is_empty() {
                    continue;
                }
                if board.piece(to).is_some() {
                    continue;
                }
                if let ControlFlow::Break(r) = f(Move { from, to, captured }) {
                    return ControlFlow::Break(r);
                }
            }
        }

        ControlFlow::Continue(())
    }
}

impl PartialEq for CheckersBoard {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.pieces_left == other.pieces_left && self.kings_left == other.kings_left
    }
}

impl Eq for CheckersBoard {}

impl Hash for CheckersBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.pieces_left.hash(state);
        self.kings_left.hash(state);
    }
}
