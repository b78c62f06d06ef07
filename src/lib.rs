//! # gridplay
//!
//! Deterministic board and puzzle game engines for session-based bots.
//!
//! ## Design Principles
//!
//! 1. **Pure computation**: Every engine is synchronous, single-threaded,
//!    in-memory state. No I/O, no locking; one engine instance per
//!    session, at most one `apply` in flight (the caller's contract).
//!
//! 2. **Boolean failure, zero mutation**: Illegal moves and inapplicable
//!    actions return `false` and leave the state untouched. Nothing in
//!    an engine panics.
//!
//! 3. **Deterministic randomness**: Tile spawns and bag draws come from
//!    a seeded ChaCha8 stream whose position travels with snapshots, so
//!    a restored session replays identically.
//!
//! ## Engines
//!
//! - `three_in_a_row`: 3×3, two-symbol win detection
//! - `draughts`: 8×8 Russian rules with mandatory captures, multi-jump
//!   chains, and promotion
//! - `tile_merge`: 4×4 compress-and-merge puzzle (2048 rules)
//! - `falling_block`: 10×20 falling-block puzzle with a bag-of-7
//!   randomizer and snapshot/restore
//!
//! Engines share the [`core::Engine`] capability surface
//! (`apply`/`snapshot`/`result`) but no state; boards differ in shape
//! and cell semantics per game.

pub mod core;
pub mod draughts;
pub mod falling_block;
pub mod three_in_a_row;
pub mod tile_merge;

// Re-export commonly used types
pub use crate::core::{
    Coord, Engine, GameResult, GameRng, GameRngState, Grid, Side, SnapshotError,
};

pub use crate::three_in_a_row::{Cell, CellMove, ThreeInARow, ThreeInARowSnapshot};

pub use crate::draughts::{Draughts, DraughtsMove, DraughtsSnapshot, SquareState};

pub use crate::tile_merge::{Direction, TileMerge, TileMergeSnapshot};

pub use crate::falling_block::{
    bag::PieceBag,
    pieces::Shape,
    ActivePiece, BlockAction, FallingBlock, FallingBlockSnapshot,
};
