//! Snapshot restore errors.
//!
//! Illegal moves are boolean failures; a structurally inconsistent
//! snapshot handed to `restore` is the one condition the surrounding
//! system must guard against explicitly, so it gets a real error type.

/// Why a snapshot could not be restored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// Board rows/columns do not match the engine's fixed dimensions.
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
    },
    /// A board cell carries a tag outside the engine's closed set.
    InvalidCell { row: usize, col: usize },
    /// The active piece or bag references an unknown shape or an
    /// impossible placement.
    InvalidPiece,
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::DimensionMismatch {
                expected_width,
                expected_height,
            } => write!(
                f,
                "snapshot board is not {expected_width}x{expected_height}"
            ),
            SnapshotError::InvalidCell { row, col } => {
                write!(f, "snapshot cell ({row}, {col}) holds an unknown tag")
            }
            SnapshotError::InvalidPiece => write!(f, "snapshot piece data is inconsistent"),
        }
    }
}

impl std::error::Error for SnapshotError {}
