//! Fixed-dimension board grid shared by all engines.
//!
//! Boards differ in shape and cell semantics per engine (3×3, 8×8, 4×4,
//! 10×20), so dimensions are const parameters and cell types are
//! engine-defined tags. Dimensions are fixed for the lifetime of a game
//! instance; only cell contents change.

use serde::{Deserialize, Serialize};

/// A board coordinate: `row` first, then `col`, both 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by a signed delta.
    ///
    /// Returns `None` if the result would leave the `H`×`W` board.
    #[must_use]
    pub fn offset<const W: usize, const H: usize>(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row < 0 || col < 0 || row >= H as i32 || col >= W as i32 {
            return None;
        }
        Some(Self::new(row as usize, col as usize))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed `W`×`H` grid of cell tags, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T, const W: usize, const H: usize> {
    cells: [[T; W]; H],
}

impl<T: Copy + Default, const W: usize, const H: usize> Grid<T, W, H> {
    /// Create a grid with every cell set to `T::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[T::default(); W]; H],
        }
    }

    /// Board width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Board height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, at: Coord) -> bool {
        at.row < H && at.col < W
    }

    /// Read a cell.
    #[must_use]
    pub fn get(&self, at: Coord) -> T {
        self.cells[at.row][at.col]
    }

    /// Write a cell.
    pub fn set(&mut self, at: Coord, value: T) {
        self.cells[at.row][at.col] = value;
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        (0..H).flat_map(|row| (0..W).map(move |col| Coord::new(row, col)))
    }

    /// Export the grid as nested rows for a snapshot.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<T>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    /// Rebuild a grid from snapshot rows.
    ///
    /// Returns `None` if the row or column counts do not match `H`×`W`.
    #[must_use]
    pub fn from_rows(rows: &[Vec<T>]) -> Option<Self> {
        if rows.len() != H || rows.iter().any(|row| row.len() != W) {
            return None;
        }
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                grid.cells[r][c] = value;
            }
        }
        Some(grid)
    }
}

impl<T: Copy + Default, const W: usize, const H: usize> Default for Grid<T, W, H> {
    fn default() -> Self {
        Self::new()
    }
}
