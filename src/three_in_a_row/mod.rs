//! Three-in-a-row on a 3×3 board.
//!
//! The smallest engine: two sides alternate marking empty cells; three
//! marks in a line win, nine moves without a line is a draw. The win
//! check only scans the lines through the cell just placed.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Engine, GameResult, Grid, Side};

/// Cell contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    const fn of(side: Side) -> Self {
        match side {
            Side::White => Cell::White,
            Side::Black => Cell::Black,
        }
    }
}

/// A proposed placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMove {
    pub row: usize,
    pub col: usize,
}

/// Read-only state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeInARowSnapshot {
    /// 3×3 board, row-major.
    pub board: Vec<Vec<Cell>>,
    /// Side to move.
    pub active_side: Side,
    /// Terminal outcome, if any.
    pub result: Option<GameResult>,
    /// Successful moves so far (9 = board full).
    pub move_count: u32,
}

/// Three-in-a-row engine state.
#[derive(Clone, Debug)]
pub struct ThreeInARow {
    board: Grid<Cell, 3, 3>,
    active_side: Side,
    result: Option<GameResult>,
    move_count: u32,
}

impl ThreeInARow {
    /// Create a game with an empty board; White moves first.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Grid::new(),
            active_side: Side::White,
            result: None,
            move_count: 0,
        }
    }

    /// Side to move.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    /// Whether the three lines through `at` contain a win for `side`.
    fn wins_through(&self, at: Coord, side: Side) -> bool {
        let mark = Cell::of(side);
        let cell = |r: usize, c: usize| self.board.get(Coord::new(r, c));

        if (0..3).all(|c| cell(at.row, c) == mark) {
            return true;
        }
        if (0..3).all(|r| cell(r, at.col) == mark) {
            return true;
        }
        // Diagonals only matter when the placed cell lies on one.
        if at.row == at.col && (0..3).all(|i| cell(i, i) == mark) {
            return true;
        }
        if at.row + at.col == 2 && (0..3).all(|i| cell(i, 2 - i) == mark) {
            return true;
        }
        false
    }
}

impl Default for ThreeInARow {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ThreeInARow {
    type Move = CellMove;
    type Snapshot = ThreeInARowSnapshot;

    fn apply(&mut self, mv: CellMove) -> bool {
        if self.result.is_some() {
            return false;
        }
        let at = Coord::new(mv.row, mv.col);
        if !self.board.in_bounds(at) || self.board.get(at) != Cell::Empty {
            return false;
        }

        let side = self.active_side;
        self.board.set(at, Cell::of(side));
        self.move_count += 1;

        if self.wins_through(at, side) {
            self.result = Some(GameResult::Winner(side));
        } else if self.move_count == 9 {
            self.result = Some(GameResult::Draw);
        } else {
            self.active_side = side.opponent();
        }
        true
    }

    fn snapshot(&self) -> ThreeInARowSnapshot {
        ThreeInARowSnapshot {
            board: self.board.rows(),
            active_side: self.active_side,
            result: self.result,
            move_count: self.move_count,
        }
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }
}
