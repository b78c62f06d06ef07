//! Draughts (Russian rules) on an 8×8 board.
//!
//! State machine: awaiting-move, forced-continuation (mid capture
//! chain), terminal. Captures are mandatory; a piece that captures and
//! can capture again must continue, and only that piece may move until
//! its chain ends. Promotion is evaluated only once the chain has fully
//! terminated, so a man that can keep capturing as a man does so before
//! becoming a king. The mover wins the moment the opponent has no
//! pieces or no legal reply.

pub mod moves;

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Engine, GameResult, Grid, Side};
use moves::{legal_moves, captures_from, promotion_row, MoveList};

/// Contents of one board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareState {
    #[default]
    Empty,
    Man(Side),
    King(Side),
}

impl SquareState {
    /// Owning side, if the square holds a piece.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            SquareState::Man(side) | SquareState::King(side) => Some(side),
            SquareState::Empty => None,
        }
    }
}

/// A proposed move: source, destination, and the square of the captured
/// piece for capture moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraughtsMove {
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<Coord>,
}

/// Read-only state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraughtsSnapshot {
    /// 8×8 board, row-major.
    pub board: Vec<Vec<SquareState>>,
    /// Side to move.
    pub active_side: Side,
    /// Terminal outcome, if any.
    pub result: Option<GameResult>,
    /// Square of the piece that must continue capturing, mid-chain.
    pub chain: Option<Coord>,
}

/// Draughts engine state.
#[derive(Clone, Debug)]
pub struct Draughts {
    board: Grid<SquareState, 8, 8>,
    active_side: Side,
    result: Option<GameResult>,
    chain: Option<Coord>,
}

impl Draughts {
    /// Create a game in the standard starting position.
    ///
    /// Twelve men per side on the dark squares: Black on rows 0–2,
    /// White on rows 5–7. White moves first, toward row 0.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Grid::new();
        for at in board.coords() {
            if (at.row + at.col) % 2 == 1 {
                if at.row < 3 {
                    board.set(at, SquareState::Man(Side::Black));
                } else if at.row > 4 {
                    board.set(at, SquareState::Man(Side::White));
                }
            }
        }
        Self {
            board,
            active_side: Side::White,
            result: None,
            chain: None,
        }
    }

    /// Create a game from an explicit position, for endgame setups.
    #[must_use]
    pub fn from_position(
        pieces: &[(Coord, SquareState)],
        active_side: Side,
    ) -> Self {
        let mut board = Grid::new();
        for &(at, square) in pieces {
            board.set(at, square);
        }
        Self {
            board,
            active_side,
            result: None,
            chain: None,
        }
    }

    /// Side to move.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    /// All legal moves for the side to move.
    ///
    /// Honors mandatory capture and a pending chain; empty once the
    /// game is terminal.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.result.is_some() {
            return MoveList::new();
        }
        legal_moves(&self.board, self.active_side, self.chain)
    }

    /// Number of pieces on the board for `side`.
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.board
            .coords()
            .filter(|&at| self.board.get(at).side() == Some(side))
            .count()
    }

    fn finish_move(&mut self, mover_square: Coord) {
        let side = self.active_side;
        self.chain = None;

        // Promotion only after the chain has fully terminated.
        if self.board.get(mover_square) == SquareState::Man(side)
            && mover_square.row == promotion_row(side)
        {
            self.board.set(mover_square, SquareState::King(side));
        }

        // Win check before the turn is handed over.
        let opponent = side.opponent();
        let opponent_has_pieces = self.piece_count(opponent) > 0;
        if !opponent_has_pieces || legal_moves(&self.board, opponent, None).is_empty() {
            self.result = Some(GameResult::Winner(side));
        } else {
            self.active_side = opponent;
        }
    }
}

impl Default for Draughts {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Draughts {
    type Move = DraughtsMove;
    type Snapshot = DraughtsSnapshot;

    fn apply(&mut self, mv: DraughtsMove) -> bool {
        if self.result.is_some() {
            return false;
        }
        if !self.board.in_bounds(mv.from) || !self.board.in_bounds(mv.to) {
            return false;
        }
        // Membership in the generated legal set covers every rule at
        // once: ownership, board geometry, mandatory capture, chain.
        if !self.legal_moves().contains(&mv) {
            return false;
        }

        let piece = self.board.get(mv.from);
        self.board.set(mv.from, SquareState::Empty);
        self.board.set(mv.to, piece);

        if let Some(captured) = mv.captured {
            self.board.set(captured, SquareState::Empty);

            // Same piece, same rank: can it capture again?
            if !captures_from(&self.board, mv.to).is_empty() {
                self.chain = Some(mv.to);
                return true;
            }
        }

        self.finish_move(mv.to);
        true
    }

    fn snapshot(&self) -> DraughtsSnapshot {
        DraughtsSnapshot {
            board: self.board.rows(),
            active_side: self.active_side,
            result: self.result,
            chain: self.chain,
        }
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }
}
