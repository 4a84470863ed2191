//! Single-cell edits.

use crate::core::{CellState, Grid, GridError, Position};

impl Grid {
    /// A copy of this grid with the cell at `position` set to `state`.
    ///
    /// The receiver is untouched; the returned grid shares structure with
    /// it everywhere but the edited slot. Editing outside the grid is
    /// [`GridError::OutOfBounds`].
    ///
    /// ## Example
    ///
    /// ```
    /// use wireworld_engine::{CellState, Grid, Position};
    ///
    /// let grid = Grid::new(3, 3).unwrap();
    /// let edited = grid.with_cell(Position::new(1, 1), CellState::Head).unwrap();
    ///
    /// assert_eq!(edited.get(Position::new(1, 1)), Some(CellState::Head));
    /// assert_eq!(grid.get(Position::new(1, 1)), Some(CellState::Empty));
    /// assert!(grid.with_cell(Position::new(3, 0), CellState::Head).is_err());
    /// ```
    pub fn with_cell(&self, position: Position, state: CellState) -> Result<Grid, GridError> {
        let index = self.index_of(position).ok_or(GridError::OutOfBounds {
            position,
            width: self.width(),
            height: self.height(),
        })?;

        Ok(Grid::from_parts(
            self.width(),
            self.height(),
            self.inner().update(index, state),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{CellState, Grid, GridError, Position};

    #[test]
    fn test_with_cell_sets_only_the_target() {
        let grid = Grid::new(4, 3).unwrap();
        let edited = grid.with_cell(Position::new(2, 1), CellState::Head).unwrap();

        for cell in edited.cells() {
            let expected = if cell.position == Position::new(2, 1) {
                CellState::Head
            } else {
                CellState::Empty
            };
            assert_eq!(cell.state, expected);
        }
    }

    #[test]
    fn test_with_cell_leaves_receiver_untouched() {
        let grid = Grid::new(4, 3).unwrap();
        let snapshot = grid.clone();
        let _ = grid.with_cell(Position::new(0, 0), CellState::Tail).unwrap();
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_with_cell_overwrites_existing_state() {
        let grid = Grid::new(2, 2)
            .unwrap()
            .with_cell(Position::new(0, 0), CellState::Conductor)
            .unwrap()
            .with_cell(Position::new(0, 0), CellState::Tail)
            .unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(CellState::Tail));
    }

    #[test]
    fn test_with_cell_out_of_bounds() {
        let grid = Grid::new(4, 3).unwrap();

        let result = grid.with_cell(Position::new(4, 0), CellState::Head);
        assert_eq!(
            result,
            Err(GridError::OutOfBounds {
                position: Position::new(4, 0),
                width: 4,
                height: 3,
            })
        );

        assert!(grid.with_cell(Position::new(0, 3), CellState::Head).is_err());
        assert!(grid
            .with_cell(Position::new(4, 3), CellState::Head)
            .is_err());
    }

    #[test]
    fn test_with_cell_preserves_dimensions() {
        let grid = Grid::new(6, 2).unwrap();
        let edited = grid.with_cell(Position::new(5, 1), CellState::Head).unwrap();
        assert_eq!(edited.width(), 6);
        assert_eq!(edited.height(), 2);
        assert_eq!(edited.len(), 12);
    }
}
