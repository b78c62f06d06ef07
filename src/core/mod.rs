//! Core engine types: boards, sides, results, RNG, snapshot errors.
//!
//! This module contains the building blocks shared by every game engine.
//! Engines own their state and rules; nothing here is game-specific.

pub mod board;
pub mod engine;
pub mod rng;
pub mod snapshot;

pub use board::{Coord, Grid};
pub use engine::{Engine, GameResult, Side};
pub use rng::{GameRng, GameRngState};
pub use snapshot::SnapshotError;
