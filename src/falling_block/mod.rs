//! Falling-block puzzle on a 10×20 board.
//!
//! The active piece lives above the board in pivot coordinates; rows may
//! be negative while a piece is still inside the spawn buffer, columns
//! never leave 0..10. A failed downward step locks the piece into the
//! board, clears full rows, scores them against the current level, and
//! draws the next piece from the bag of 7; the game ends when a fresh
//! spawn collides with the stack. Sessions can be checkpointed with
//! [`FallingBlock::snapshot`] and resumed with [`FallingBlock::restore`].

pub mod bag;
pub mod pieces;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Engine, GameResult, GameRng, GameRngState, Grid, SnapshotError};
use bag::PieceBag;
use pieces::{rotated_offsets, Shape};

const WIDTH: usize = 10;
const HEIGHT: usize = 20;

const SPAWN_ROW: i32 = 0;
const SPAWN_COL: i32 = 4;

/// Score per cleared-line count (index = lines - 1), multiplied by level.
const LINE_SCORES: [u32; 4] = [100, 300, 700, 1500];

/// Player action for one engine step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockAction {
    Left,
    Right,
    Rotate,
    SoftDrop,
    /// Gravity step issued by the session clock; same motion as a soft
    /// drop.
    Tick,
}

/// The piece currently falling: shape, rotation step, pivot position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePiece {
    pub shape: Shape,
    /// 90° clockwise steps, 0..4.
    pub rotation: u8,
    /// Pivot row; negative while in the spawn buffer.
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    /// Absolute board cells occupied by this piece.
    #[must_use]
    pub fn cells(&self) -> [(i32, i32); 4] {
        let mut cells = rotated_offsets(self.shape, self.rotation);
        for cell in &mut cells {
            *cell = (self.row + cell.0, self.col + cell.1);
        }
        cells
    }
}

/// Serializable session checkpoint; the exact inverse of
/// [`FallingBlock::restore`] for anything [`FallingBlock::snapshot`]
/// produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallingBlockSnapshot {
    /// 10×20 board, row-major; 0 = empty, otherwise shape index + 1.
    pub board: Vec<Vec<u8>>,
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub game_over: bool,
    /// The falling piece; `None` only once the game is over.
    pub active: Option<ActivePiece>,
    /// Undrawn remainder of the current bag fill.
    pub bag: Vec<Shape>,
    /// RNG position, so restored games continue the same sequence.
    pub rng: GameRngState,
}

/// Falling-block engine state.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingBlock {
    board: Grid<u8, WIDTH, HEIGHT>,
    score: u32,
    lines_cleared: u32,
    game_over: bool,
    active: Option<ActivePiece>,
    bag: PieceBag,
    rng: GameRng,
}

impl FallingBlock {
    /// Create a game with an empty board and the first piece spawned.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let bag = PieceBag::new(&mut rng);
        let mut game = Self {
            board: Grid::new(),
            score: 0,
            lines_cleared: 0,
            game_over: false,
            active: None,
            bag,
            rng,
        };
        game.spawn_next();
        game
    }

    /// Reconstruct a game from a snapshot.
    ///
    /// Validates board dimensions, cell tags, bag contents, and the
    /// active piece. A terminal flag on a snapshot with zero score and
    /// zero cleared lines is treated as stale and cleared; a fresh game
    /// cannot be over, so such a flag only ever comes from a corrupt or
    /// stale checkpoint.
    pub fn restore(snapshot: &FallingBlockSnapshot) -> Result<Self, SnapshotError> {
        let board: Grid<u8, WIDTH, HEIGHT> =
            Grid::from_rows(&snapshot.board).ok_or(SnapshotError::DimensionMismatch {
                expected_width: WIDTH,
                expected_height: HEIGHT,
            })?;

        for at in board.coords() {
            let tag = board.get(at);
            if tag as usize > Shape::ALL.len() {
                return Err(SnapshotError::InvalidCell {
                    row: at.row,
                    col: at.col,
                });
            }
        }

        let bag = PieceBag::from_remaining(snapshot.bag.clone())
            .ok_or(SnapshotError::InvalidPiece)?;

        if let Some(piece) = snapshot.active {
            if piece.rotation >= 4 || !fits(&board, &piece) {
                return Err(SnapshotError::InvalidPiece);
            }
        }

        let mut game_over = snapshot.game_over;
        if game_over && snapshot.score == 0 && snapshot.lines_cleared == 0 {
            game_over = false;
        }

        let mut game = Self {
            board,
            score: snapshot.score,
            lines_cleared: snapshot.lines_cleared,
            game_over,
            active: snapshot.active,
            bag,
            rng: GameRng::from_state(&snapshot.rng),
        };
        // A cleared terminal flag must leave a playable game behind.
        if !game.game_over && game.active.is_none() {
            game.spawn_next();
        }
        Ok(game)
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared.
    #[must_use]
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Current level: one step up every ten cleared rows.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.lines_cleared / 10 + 1
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The falling piece, if the game is still running.
    #[must_use]
    pub fn active_piece(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Draw the next shape and place it at the spawn position; the game
    /// ends if the spawn area is already occupied.
    fn spawn_next(&mut self) {
        let shape = self.bag.draw(&mut self.rng);
        let piece = ActivePiece {
            shape,
            rotation: 0,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        };
        if fits(&self.board, &piece) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.game_over = true;
        }
    }

    /// Try to move/rotate the active piece into `candidate`.
    fn try_place(&mut self, candidate: ActivePiece) -> bool {
        if fits(&self.board, &candidate) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Burn the active piece into the board, clear full rows, score
    /// them, and spawn the next piece.
    fn lock(&mut self, piece: ActivePiece) {
        let tag = piece.shape.index() as u8 + 1;
        for (row, col) in piece.cells() {
            if row >= 0 {
                self.board.set(Coord::new(row as usize, col as usize), tag);
            }
        }
        self.active = None;

        let cleared = self.clear_full_rows();
        if cleared > 0 {
            self.score += LINE_SCORES[cleared as usize - 1] * self.level();
            self.lines_cleared += cleared;
        }

        self.spawn_next();
    }

    /// Remove fully occupied rows, inserting empty rows at the top.
    ///
    /// Returns the number of rows removed.
    fn clear_full_rows(&mut self) -> u32 {
        let full: SmallVec<[usize; 4]> = (0..HEIGHT)
            .filter(|&row| (0..WIDTH).all(|col| self.board.get(Coord::new(row, col)) != 0))
            .collect();

        for &row in &full {
            // Shift everything above `row` down one.
            for r in (1..=row).rev() {
                for col in 0..WIDTH {
                    let above = self.board.get(Coord::new(r - 1, col));
                    self.board.set(Coord::new(r, col), above);
                }
            }
            for col in 0..WIDTH {
                self.board.set(Coord::new(0, col), 0);
            }
        }

        full.len() as u32
    }
}

/// Whether a piece overlaps the walls, the floor, or the stack.
///
/// Rows above the board (negative) are the spawn buffer and always free.
fn fits(board: &Grid<u8, WIDTH, HEIGHT>, piece: &ActivePiece) -> bool {
    piece.cells().iter().all(|&(row, col)| {
        if col < 0 || col >= WIDTH as i32 || row >= HEIGHT as i32 {
            return false;
        }
        row < 0 || board.get(Coord::new(row as usize, col as usize)) == 0
    })
}

impl Engine for FallingBlock {
    type Move = BlockAction;
    type Snapshot = FallingBlockSnapshot;

    fn apply(&mut self, action: BlockAction) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match action {
            BlockAction::Left => self.try_place(ActivePiece {
                col: piece.col - 1,
                ..piece
            }),
            BlockAction::Right => self.try_place(ActivePiece {
                col: piece.col + 1,
                ..piece
            }),
            BlockAction::Rotate => {
                if !piece.shape.rotatable() {
                    return false;
                }
                // No wall kick: a colliding rotation is rejected as-is.
                self.try_place(ActivePiece {
                    rotation: (piece.rotation + 1) % 4,
                    ..piece
                })
            }
            BlockAction::SoftDrop | BlockAction::Tick => {
                let dropped = ActivePiece {
                    row: piece.row + 1,
                    ..piece
                };
                if fits(&self.board, &dropped) {
                    self.active = Some(dropped);
                } else {
                    self.lock(piece);
                }
                true
            }
        }
    }

    fn snapshot(&self) -> FallingBlockSnapshot {
        FallingBlockSnapshot {
            board: self.board.rows(),
            score: self.score,
            lines_cleared: self.lines_cleared,
            level: self.level(),
            game_over: self.game_over,
            active: self.active,
            bag: self.bag.remaining().to_vec(),
            rng: self.rng.state(),
        }
    }

    fn result(&self) -> Option<GameResult> {
        // Single-player: terminal state is carried by `game_over`.
        None
    }
}
