use log::debug;
use rand::Rng;

use crate::ai::minimax::MiniMaxBot;
use crate::ai::Bot;
use crate::board::Color;
use crate::games::checkers::{CheckersBoard, MoveSet, Square};
use crate::heuristic::checkers::MaterialHeuristic;

/// Settings for a game against the computer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Search depth in plies.
    pub depth: u32,
    pub heuristic: MaterialHeuristic,
    /// The color played by the computer, `None` for a game between two humans.
    pub computer: Option<Color>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            depth: 4,
            heuristic: MaterialHeuristic::default(),
            computer: Some(Color::Black),
        }
    }
}

/// The turn and selection state machine on top of a [CheckersBoard].
///
/// A presentation layer forwards clicked squares to [Game::select], and reads back [Game::board],
/// [Game::valid_moves] and [Game::winner] to redraw. When the turn passes to the computer its move is
/// searched and played before `select` returns.
#[derive(Debug)]
pub struct Game {
    board: CheckersBoard,
    turn: Color,
    selected: Option<Square>,
    valid_moves: MoveSet,
    winner: Option<Color>,
    computer: Option<(Color, Box<dyn Bot>)>,
}

impl Game {
    /// A new game from the start position, with the computer searching using `rng` to break ties.
    pub fn new<R: Rng + 'static>(config: GameConfig, rng: R) -> Game {
        let computer = config.computer.map(|color| {
            let bot: Box<dyn Bot> = Box::new(MiniMaxBot::new(config.depth, config.heuristic, rng));
            (color, bot)
        });
        Game::with_board(CheckersBoard::new(), Color::White, computer)
    }

    pub fn human_vs_human() -> Game {
        Game::with_board(CheckersBoard::new(), Color::White, None)
    }

    /// A game starting from an arbitrary board with `turn` to move.
    pub fn with_board(board: CheckersBoard, turn: Color, computer: Option<(Color, Box<dyn Bot>)>) -> Game {
        let mut game = Game {
            board,
            turn,
            selected: None,
            valid_moves: MoveSet::new(),
            winner: None,
            computer,
        };
        game.start_turn();
        game
    }

    pub fn board(&self) -> &CheckersBoard {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// The destinations of the selected piece, and the pieces each one captures.
    pub fn valid_moves(&self) -> &MoveSet {
        &self.valid_moves
    }

    pub fn computer(&self) -> Option<Color> {
        self.computer.as_ref().map(|(color, _)| *color)
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner.or_else(|| self.board.winner())
    }

    /// Handle a click on `(row, col)`. With a piece selected this first tries to move it there;
    /// if that is not a legal move the click is treated as a new selection instead.
    ///
    /// Returns whether a piece was selected or a move was played.
    pub fn select(&mut self, row: i32, col: i32) -> bool {
        if self.winner().is_some() {
            return false;
        }

        let square = match Square::try_new(row, col) {
            Some(square) => square,
            None => {
                self.deselect();
                return false;
            }
        };

        if self.selected.is_some() {
            if self.try_move(square) {
                return true;
            }
            self.deselect();
        }

        match self.board.piece(square) {
            Some(piece) if piece.color() == self.turn => {
                self.selected = Some(square);
                self.valid_moves = self.board.legal_moves(square);
                true
            }
            _ => false,
        }
    }

    fn deselect(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    /// Move the selected piece to `to`, returns whether the move happened.
    fn try_move(&mut self, to: Square) -> bool {
        let from = match self.selected {
            Some(from) => from,
            None => return false,
        };
        if self.board.piece(to).is_some() || !self.valid_moves.contains_key(&to) {
            return false;
        }

        if let Err(e) = self.board.apply_move(from, to) {
            debug!("rejected move {}->{}: {}", from, to, e);
            return false;
        }
        let captured = self.valid_moves.remove(&to).unwrap_or_default();
        self.board.remove(&captured);
        debug!("{} played {}->{}, capturing {}", self.turn, from, to, captured.len());

        self.change_turn();
        true
    }

    fn change_turn(&mut self) {
        self.deselect();
        self.turn = self.turn.other();
        self.start_turn();
    }

    fn start_turn(&mut self) {
        self.board.update_forced_captures(self.turn);

        if let Some(winner) = self.board.winner() {
            debug!("{} has no pieces left, {} wins", winner.other(), winner);
            return;
        }
        if !self.board.has_moves(self.turn) {
            debug!("{} cannot move, {} wins", self.turn, self.turn.other());
            self.winner = Some(self.turn.other());
            return;
        }

        if self.computer() == Some(self.turn) {
            self.computer_move();
        }
    }

    /// Let the computer search and play a move for the side to move, replacing the board with the result.
    /// If the side to move has no moves the other side is declared the winner.
    ///
    /// Returns whether a move was played.
    pub fn computer_move(&mut self) -> bool {
        if self.winner().is_some() {
            return false;
        }

        let color = self.turn;
        let choice = match &mut self.computer {
            Some((_, bot)) => bot.select_move(&self.board, color),
            None => return false,
        };

        match choice {
            Some((mv, board)) => {
                debug!("computer plays {} for {}", mv, color);
                self.board = board;
                self.change_turn();
                true
            }
            None => {
                debug!("computer has no moves for {}, {} wins", color, color.other());
                self.winner = Some(color.other());
                false
            }
        }
    }
}
