//! Engine capability surface shared by all four games.
//!
//! Each engine is an independent value type implementing [`Engine`]:
//! - What moves exist (`Move`)
//! - How a move mutates state (`apply`)
//! - What a session sees (`snapshot`)
//!
//! There is no shared base state; boards differ in shape and cell
//! semantics per engine.

use serde::{Deserialize, Serialize};

/// One of the two sides in a turn-based game.
///
/// White always moves first. The single-player puzzle engines
/// (TileMerge, FallingBlock) do not use sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Capability surface consumed by the surrounding session layer.
///
/// ## Implementation Notes
///
/// - `apply`: validates the move against the current state; returns
///   `false` with zero mutation on any illegal input, and never panics.
///   Once `result` is `Some`, every further `apply` returns `false`.
/// - `snapshot`: pure read, stable field names, no hidden mutation.
/// - `result`: `None` while the game continues.
pub trait Engine {
    /// Move or action type accepted by this engine.
    type Move;

    /// Serializable state snapshot exposed to the caller.
    type Snapshot: Serialize;

    /// Validate and apply a move. Returns `false` (no mutation) if illegal.
    fn apply(&mut self, mv: Self::Move) -> bool;

    /// Read the current state as a snapshot.
    fn snapshot(&self) -> Self::Snapshot;

    /// Terminal outcome, or `None` if the game continues.
    fn result(&self) -> Option<GameResult>;
}
