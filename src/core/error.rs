//! Engine error types.

use thiserror::Error;

use super::position::Position;

/// Errors from grid construction, deserialization, and single-cell edits.
///
/// The rest of the engine is total: [`Grid::load`](crate::core::Grid::load)
/// clips and pads rather than failing, and
/// [`Grid::tick`](crate::core::Grid::tick) has no failure modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grid dimensions must both be positive and their product must fit
    /// in `usize`.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// The position lies outside the grid.
    #[error("position {position} out of bounds for {width}x{height} grid")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// Width of the grid that rejected it.
        width: usize,
        /// Height of the grid that rejected it.
        height: usize,
    },

    /// A serialized grid's cell count contradicts its declared dimensions.
    #[error("cell count {found} does not match {width}x{height} grid")]
    CellCountMismatch {
        /// Declared width in cells.
        width: usize,
        /// Declared height in cells.
        height: usize,
        /// Number of cells actually supplied.
        found: usize,
    },
}
