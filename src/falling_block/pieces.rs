//! The seven falling-block shapes.
//!
//! Each shape is four offsets relative to a pivot cell, `(dr, dc)` with
//! rows growing downward. Rotation is the pure coordinate transform
//! `(dr, dc) -> (-dc, dr)` applied once per 90° step; there is no
//! wall-kick search, so a rotation that collides is simply rejected by
//! the engine. The O shape is not rotatable at all.

use serde::{Deserialize, Serialize};

/// Shape identifier for the seven tetrominoes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    /// All seven shapes, in bag-fill order.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Stable index, 0..7.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Shape::I => 0,
            Shape::O => 1,
            Shape::T => 2,
            Shape::S => 3,
            Shape::Z => 4,
            Shape::J => 5,
            Shape::L => 6,
        }
    }

    /// Shape for a stable index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Shape> {
        match index {
            0 => Some(Shape::I),
            1 => Some(Shape::O),
            2 => Some(Shape::T),
            3 => Some(Shape::S),
            4 => Some(Shape::Z),
            5 => Some(Shape::J),
            6 => Some(Shape::L),
            _ => None,
        }
    }

    /// Pivot-relative cell offsets in spawn orientation.
    #[must_use]
    pub const fn offsets(self) -> [(i32, i32); 4] {
        match self {
            Shape::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
            Shape::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
            Shape::T => [(0, -1), (0, 0), (0, 1), (-1, 0)],
            Shape::S => [(0, 0), (0, 1), (1, -1), (1, 0)],
            Shape::Z => [(0, -1), (0, 0), (1, 0), (1, 1)],
            Shape::J => [(-1, -1), (0, -1), (0, 0), (0, 1)],
            Shape::L => [(-1, 1), (0, -1), (0, 0), (0, 1)],
        }
    }

    /// Whether rotation can change this shape's cells.
    #[must_use]
    pub const fn rotatable(self) -> bool {
        !matches!(self, Shape::O)
    }
}

/// Offsets after `rotation` 90° clockwise steps.
#[must_use]
pub fn rotated_offsets(shape: Shape, rotation: u8) -> [(i32, i32); 4] {
    let mut offsets = shape.offsets();
    for _ in 0..(rotation % 4) {
        for cell in &mut offsets {
            *cell = (-cell.1, cell.0);
        }
    }
    offsets
}
