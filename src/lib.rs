//! # wireworld-engine
//!
//! A Wireworld cellular automaton engine: rectangular grids of four-state
//! cells (empty, conductor, electron head, electron tail) advanced in
//! discrete synchronous steps by a fixed local rule.
//!
//! ## Design Principles
//!
//! 1. **Grids Are Values**: Every operation returns a new `Grid` and leaves
//!    its input untouched. Snapshots, history, and undo need no bookkeeping;
//!    keep the old value.
//!
//! 2. **Total Where Possible**: `load` centers, clips, and pads rather than
//!    erroring, and `tick` cannot fail. Only zero-sized construction and
//!    out-of-bounds edits return errors.
//!
//! 3. **Host-Agnostic**: No rendering, input handling, or scheduling.
//!    Hosts pick a template, call `load`/`with_cell`/`tick` at whatever
//!    cadence suits them, and read the grid back.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) grid cloning via `im-rs`;
//!   single-cell edits share structure with the previous grid.
//!
//! - **Synchronous Rule**: Each tick reads only the pre-tick grid and
//!   builds the next one whole, so no cell ever observes a half-updated
//!   neighborhood.
//!
//! - **Immutable Sharing**: Grids never change after construction and can
//!   be sent or shared across threads freely.
//!
//! ## Modules
//!
//! - `core`: Positions, cell states, the grid value, errors
//! - `engine`: Template loading, single-cell edits, the transition rule
//! - `templates`: Built-in circuit diagrams and the named-template catalog

pub mod core;
pub mod engine;
pub mod templates;

// Re-export commonly used types
pub use crate::core::{Cell, CellState, Grid, GridError, Position};

pub use crate::templates::TemplateCatalog;
