//! Tile-merge puzzle on a 4×4 board (2048 rules).
//!
//! Each move compresses every line toward the chosen direction, merges
//! adjacent equal tiles once per pass, and re-compresses. A move that
//! changes nothing is a no-op; a move that changes the board spawns
//! exactly one new tile (2 at 90%, 4 at 10%) on a uniformly chosen
//! empty cell. Reaching 2048 latches a one-shot `won` flag and play
//! continues; the game is over only when the board is full and no two
//! orthogonal neighbors are equal.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Engine, GameResult, GameRng, Grid};

const SIZE: usize = 4;

/// Move direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    #[must_use]
    pub const fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// Read-only state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMergeSnapshot {
    /// 4×4 board of tile values, row-major; 0 = empty.
    pub board: Vec<Vec<u32>>,
    /// Accumulated merge score.
    pub score: u32,
    /// Latched once a 2048 tile has been built.
    pub won: bool,
    /// Set when no move can change the board.
    pub game_over: bool,
}

/// Tile-merge engine state.
#[derive(Clone, Debug)]
pub struct TileMerge {
    board: Grid<u32, SIZE, SIZE>,
    score: u32,
    won: bool,
    game_over: bool,
    rng: GameRng,
}

/// One board line pulled out along the move direction, merged, and
/// written back. Index 0 is the edge tiles compress toward.
fn merge_line(line: &mut [u32; SIZE], score: &mut u32, won: &mut bool) {
    // Compress: non-empty values keep order, zeros fall to the back.
    let mut compressed = [0u32; SIZE];
    let mut n = 0;
    for &value in line.iter() {
        if value != 0 {
            compressed[n] = value;
            n += 1;
        }
    }

    // Merge each pair at most once, front to back, then re-compress.
    let mut merged = [0u32; SIZE];
    let mut out = 0;
    let mut i = 0;
    while i < n {
        if i + 1 < n && compressed[i] == compressed[i + 1] {
            let value = compressed[i] * 2;
            merged[out] = value;
            *score += value;
            if value == 2048 {
                *won = true;
            }
            i += 2;
        } else {
            merged[out] = compressed[i];
            i += 1;
        }
        out += 1;
    }

    *line = merged;
}

impl TileMerge {
    /// Create a game with two spawned tiles.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            board: Grid::new(),
            score: 0,
            won: false,
            game_over: false,
            rng: GameRng::new(seed),
        };
        game.spawn_tile();
        game.spawn_tile();
        game
    }

    /// Create a game from an explicit board, for endgame setups.
    ///
    /// Returns `None` if the rows are not 4×4.
    #[must_use]
    pub fn from_board(rows: &[Vec<u32>], seed: u64) -> Option<Self> {
        let board = Grid::from_rows(rows)?;
        let mut game = Self {
            board,
            score: 0,
            won: false,
            game_over: false,
            rng: GameRng::new(seed),
        };
        game.game_over = game.is_stuck();
        Some(game)
    }

    /// Accumulated merge score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether a 2048 tile has ever been built.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Whether no move can change the board.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The coordinates a line walks for `direction`, starting at the
    /// edge tiles compress toward.
    fn line_coords(direction: Direction, index: usize) -> [Coord; SIZE] {
        let mut coords = [Coord::new(0, 0); SIZE];
        for (i, at) in coords.iter_mut().enumerate() {
            *at = match direction {
                Direction::Left => Coord::new(index, i),
                Direction::Right => Coord::new(index, SIZE - 1 - i),
                Direction::Up => Coord::new(i, index),
                Direction::Down => Coord::new(SIZE - 1 - i, index),
            };
        }
        coords
    }

    fn spawn_tile(&mut self) {
        let empty: Vec<Coord> = self
            .board
            .coords()
            .filter(|&at| self.board.get(at) == 0)
            .collect();
        if empty.is_empty() {
            return;
        }
        let at = empty[self.rng.gen_range_usize(0..empty.len())];
        let value = if self.rng.gen_bool(0.1) { 4 } else { 2 };
        self.board.set(at, value);
    }

    /// A board is stuck when it has no empty cell and no two equal
    /// orthogonal neighbors.
    fn is_stuck(&self) -> bool {
        for at in self.board.coords() {
            let value = self.board.get(at);
            if value == 0 {
                return false;
            }
            if at.col + 1 < SIZE && self.board.get(Coord::new(at.row, at.col + 1)) == value {
                return false;
            }
            if at.row + 1 < SIZE && self.board.get(Coord::new(at.row + 1, at.col)) == value {
                return false;
            }
        }
        true
    }
}

impl Engine for TileMerge {
    type Move = Direction;
    type Snapshot = TileMergeSnapshot;

    fn apply(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let mut changed = false;
        for index in 0..SIZE {
            let coords = Self::line_coords(direction, index);
            let mut line = [0u32; SIZE];
            for (i, &at) in coords.iter().enumerate() {
                line[i] = self.board.get(at);
            }

            let before = line;
            merge_line(&mut line, &mut self.score, &mut self.won);
            if line != before {
                changed = true;
                for (i, &at) in coords.iter().enumerate() {
                    self.board.set(at, line[i]);
                }
            }
        }

        if !changed {
            return false;
        }

        self.spawn_tile();
        self.game_over = self.is_stuck();
        true
    }

    fn snapshot(&self) -> TileMergeSnapshot {
        TileMergeSnapshot {
            board: self.board.rows(),
            score: self.score,
            won: self.won,
            game_over: self.game_over,
        }
    }

    fn result(&self) -> Option<GameResult> {
        // Single-player: the terminal outcome is stalemate, not a win
        // for a side. The `won`/`game_over` flags carry the details.
        None
    }
}
