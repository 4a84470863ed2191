//! The synchronous transition rule and its neighbor lookup.
//!
//! One tick maps every cell through the Wireworld rule:
//!
//! | current     | condition                       | next        |
//! |-------------|---------------------------------|-------------|
//! | `Head`      | always                          | `Tail`      |
//! | `Tail`      | always                          | `Conductor` |
//! | `Conductor` | exactly 1 or 2 `Head` neighbors | `Head`      |
//! | `Conductor` | otherwise                       | `Conductor` |
//! | `Empty`     | always                          | `Empty`     |
//!
//! Every next state is computed from the pre-tick grid alone. The pass
//! builds a fresh cell vector, so no cell ever observes a half-updated
//! neighborhood.

use smallvec::SmallVec;

use crate::core::{CellState, Grid, Position};

/// Moore neighborhood offsets: the row above, the same row, the row below.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Grid {
    /// The in-bounds Moore neighbors of `position`, in row-major order.
    ///
    /// Out-of-bounds candidates are excluded rather than treated as empty,
    /// and there is no wraparound: corner cells have 3 neighbors, edge
    /// cells 5, interior cells 8.
    #[must_use]
    pub fn neighbors(&self, position: Position) -> SmallVec<[Position; 8]> {
        let width = self.width() as i64;
        let height = self.height() as i64;

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = position.x as i64 + dx;
                let y = position.y as i64 + dy;

                ((0..width).contains(&x) && (0..height).contains(&y))
                    .then(|| Position::new(x as usize, y as usize))
            })
            .collect()
    }

    /// Number of `Head` cells adjacent to `position`.
    fn head_neighbors(&self, position: Position) -> usize {
        self.neighbors(position)
            .into_iter()
            .filter(|&neighbor| self.get(neighbor) == Some(CellState::Head))
            .count()
    }

    /// Whether a conductor at `position` ignites on the next tick.
    fn ignites(&self, position: Position) -> bool {
        matches!(self.head_neighbors(position), 1 | 2)
    }

    /// Advance the whole grid by one synchronous step.
    ///
    /// Heads decay to tails, tails settle back to conductors, and a
    /// conductor ignites to a head iff exactly 1 or 2 of its neighbors are
    /// heads. Empty cells never change. The receiver is untouched; `tick`
    /// cannot fail.
    ///
    /// ## Example
    ///
    /// ```
    /// use wireworld_engine::{CellState, Grid, Position};
    ///
    /// let grid = Grid::from_template(5, 1, "h####").unwrap();
    /// let next = grid.tick();
    ///
    /// assert_eq!(next.get(Position::new(0, 0)), Some(CellState::Tail));
    /// assert_eq!(next.get(Position::new(1, 0)), Some(CellState::Head));
    /// assert_eq!(grid.get(Position::new(0, 0)), Some(CellState::Head));
    /// ```
    #[must_use]
    pub fn tick(&self) -> Grid {
        let cells = self
            .cells()
            .map(|cell| match cell.state {
                CellState::Head => CellState::Tail,
                CellState::Tail => CellState::Conductor,
                CellState::Conductor if self.ignites(cell.position) => CellState::Head,
                unchanged => unchanged,
            })
            .collect();

        Grid::from_parts(self.width(), self.height(), cells)
    }
}
