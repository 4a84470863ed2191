//! The grid value: dimensions plus a row-major vector of cell states.
//!
//! ## Representation
//!
//! A `Grid` stores bare [`CellState`]s in an [`im::Vector`], row-major:
//! index `i` holds the cell at `(i % width, i / width)`. Positions are
//! computed on demand rather than stored per cell. Every grid the crate
//! hands out holds exactly `width * height` states, and deserialization
//! enforces the same: a serialized form whose cell count or dimensions
//! disagree is rejected rather than decoded.
//!
//! ## Persistence
//!
//! `Grid` is a persistent value. Cloning is O(1), and the operations that
//! change cells ([`load`](Grid::load), [`with_cell`](Grid::with_cell),
//! [`tick`](Grid::tick)) return new grids sharing structure with their
//! input. Old snapshots stay valid and cheap to keep.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellState};
use super::error::GridError;
use super::position::Position;

/// A rectangular Wireworld grid.
///
/// Equality is structural: two grids are equal iff they have the same
/// dimensions and the same state at every position.
///
/// ## Example
///
/// ```
/// use wireworld_engine::{CellState, Grid, Position};
///
/// let grid = Grid::new(4, 3).unwrap();
/// assert_eq!(grid.len(), 12);
/// assert_eq!(grid.get(Position::new(3, 2)), Some(CellState::Empty));
/// assert_eq!(grid.get(Position::new(4, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vector<CellState>,
}

impl Grid {
    /// Create a grid with every cell [`CellState::Empty`].
    ///
    /// Both dimensions must be positive and the cell count
    /// `width * height` must fit in `usize`; anything else is
    /// [`GridError::InvalidDimensions`].
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let area = checked_area(width, height)?;

        Ok(Self {
            width,
            height,
            cells: std::iter::repeat(CellState::Empty).take(area).collect(),
        })
    }

    /// Create a grid and load `template` into it.
    ///
    /// Shorthand for [`Grid::new`] followed by [`Grid::load`].
    pub fn from_template(
        width: usize,
        height: usize,
        template: &str,
    ) -> Result<Self, GridError> {
        Ok(Self::new(width, height)?.load(template))
    }

    /// Internal constructor for passes that rebuild the cell vector.
    ///
    /// Callers uphold the `width * height` cell count.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vector<CellState>) -> Self {
        debug_assert_eq!(Some(cells.len()), width.checked_mul(height));
        Self {
            width,
            height,
            cells,
        }
    }

    /// The cell vector itself, for structural updates.
    pub(crate) fn inner(&self) -> &Vector<CellState> {
        &self.cells
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total cell count. Always `width() * height()`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    ///
    /// Always `false` for a constructed grid, since both dimensions are
    /// positive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `position` lies inside the grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// The flat row-major index of `position`, or `None` if out of bounds.
    ///
    /// Both axes are checked. An `x` past the right edge never wraps onto
    /// the next row, even though the raw index math would land in range.
    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.to_index(self.width))
    }

    /// The state at `position`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<CellState> {
        self.index_of(position).map(|index| self.cells[index])
    }

    /// Iterate the cells in row-major order.
    ///
    /// Positions are computed on demand from each cell's index.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &state)| Cell::new(Position::from_index(index, self.width), state))
    }

    /// Iterate the bare states in row-major order.
    pub fn states(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().copied()
    }
}

impl std::fmt::Display for Grid {
    /// Render the grid in the template alphabet, one line per row, with
    /// empty cells as spaces and no trailing newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, &state) in self.cells.iter().enumerate() {
            if index > 0 && index % self.width == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", state.as_char())?;
        }
        Ok(())
    }
}

/// Untrusted mirror of `Grid`'s serialized form.
///
/// Deserialization lands here first; the `TryFrom` conversion checks the
/// dimensions and cell count before a `Grid` is produced, so decoded
/// grids uphold the same invariant as constructed ones.
#[derive(Deserialize)]
struct GridParts {
    width: usize,
    height: usize,
    cells: Vector<CellState>,
}

impl TryFrom<GridParts> for Grid {
    type Error = GridError;

    fn try_from(parts: GridParts) -> Result<Self, GridError> {
        let area = checked_area(parts.width, parts.height)?;
        if parts.cells.len() != area {
            return Err(GridError::CellCountMismatch {
                width: parts.width,
                height: parts.height,
                found: parts.cells.len(),
            });
        }

        Ok(Self {
            width: parts.width,
            height: parts.height,
            cells: parts.cells,
        })
    }
}

/// The cell count implied by the dimensions, or `InvalidDimensions` when
/// either is zero or the product overflows `usize`.
fn checked_area(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(GridError::InvalidDimensions { width, height })
}
