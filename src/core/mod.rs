//! Core grid model: positions, cell states, the grid value, and errors.
//!
//! These types are the shared vocabulary between the engine and its hosts.
//! They are plain immutable values; the operations that load, edit, and
//! advance grids live in [`crate::engine`].

pub mod cell;
pub mod error;
pub mod grid;
pub mod position;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use grid::Grid;
pub use position::Position;
