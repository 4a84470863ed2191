//! Grid operations: template loading, single-cell edits, and the
//! synchronous transition rule.
//!
//! Every operation here is a pure function over [`Grid`] values. It reads
//! the receiver, returns a new grid, and leaves the receiver untouched:
//!
//! - [`Grid::load`] replaces a grid's cells with a centered template
//! - [`Grid::with_cell`] replaces the state of one cell
//! - [`Grid::tick`] advances the whole grid by one synchronous step
//! - [`Grid::neighbors`] lists a position's in-bounds Moore neighbors
//!
//! The operations attach to `Grid` directly; this module only organizes
//! their implementations.
//!
//! [`Grid`]: crate::core::Grid
//! [`Grid::load`]: crate::core::Grid::load
//! [`Grid::with_cell`]: crate::core::Grid::with_cell
//! [`Grid::tick`]: crate::core::Grid::tick
//! [`Grid::neighbors`]: crate::core::Grid::neighbors

mod edit;
mod rules;
mod template;
