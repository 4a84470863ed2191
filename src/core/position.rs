//! Grid positions and row-major index math.
//!
//! Grids store cell states in a flat row-major vector, so positions and
//! flat indices convert both ways: index `i` in a grid `width` cells wide
//! corresponds to `(i % width, i / width)`.

use serde::{Deserialize, Serialize};

/// A 0-indexed cell coordinate pair.
///
/// `x` grows rightward along a row, `y` grows downward across rows. The
/// origin `(0, 0)` is the top-left corner. A position has no identity
/// beyond its coordinates and is not tied to any particular grid.
///
/// ## Example
///
/// ```
/// use wireworld_engine::core::Position;
///
/// let position = Position::new(2, 1);
/// assert_eq!(position.to_index(4), 6);
/// assert_eq!(Position::from_index(6, 4), position);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, counted from the left edge.
    pub x: usize,
    /// Row, counted from the top edge.
    pub y: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The position of flat row-major index `index` in a grid `width`
    /// cells wide.
    #[must_use]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: index % width,
            y: index / width,
        }
    }

    /// The flat row-major index of this position in a grid `width` cells
    /// wide.
    ///
    /// Meaningful only when `x < width`; the grid's checked lookups
    /// ([`Grid::index_of`](crate::core::Grid::index_of) and friends)
    /// validate both axes before converting.
    #[must_use]
    pub const fn to_index(self, width: usize) -> usize {
        self.x + self.y * width
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
