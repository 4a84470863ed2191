//! Cell states and the position/state pair handed out by grid iteration.
//!
//! ## CellState
//!
//! The four mutually exclusive states of Wireworld. The template alphabet
//! maps characters to states: `'h'` is an electron head, `'t'` an electron
//! tail, `'#'` a conductor, and every other character (including space) is
//! empty background.
//!
//! ## Cell
//!
//! A position paired with the state found there. Grids store bare states
//! in row-major order and build `Cell`s on demand when iterated.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// The state of a single cell.
///
/// Signal pulses travel as `Head` cells, decay through `Tail`, and settle
/// back into `Conductor`. `Empty` is inert background and never changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Inert background. Never transitions.
    #[default]
    Empty,
    /// Wire. Becomes `Head` when exactly 1 or 2 neighbors are `Head`.
    Conductor,
    /// An electron head, the leading edge of a signal pulse.
    Head,
    /// An electron tail, the decay state immediately after `Head`.
    Tail,
}

impl CellState {
    /// Decode a template character.
    ///
    /// Total: unrecognized characters (including space) decode to `Empty`.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            'h' => Self::Head,
            't' => Self::Tail,
            '#' => Self::Conductor,
            _ => Self::Empty,
        }
    }

    /// The template character for this state.
    ///
    /// Inverse of [`from_char`](CellState::from_char), with `Empty`
    /// rendered as a space.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Conductor => '#',
            Self::Head => 'h',
            Self::Tail => 't',
        }
    }
}

/// A cell: a grid position paired with the state found there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Where the cell sits in its grid.
    pub position: Position,
    /// The cell's state.
    pub state: CellState,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(position: Position, state: CellState) -> Self {
        Self { position, state }
    }
}
