//! Template loading.
//!
//! A template is a plain text block in the cell alphabet (`'h'` head,
//! `'t'` tail, `'#'` conductor, anything else empty). Loading centers the
//! block in the grid: blank lines pad it vertically, spaces pad each line
//! horizontally, and content past the grid's edges is clipped. The
//! operation is total; no template string can make it fail.

use im::Vector;

use crate::core::{CellState, Grid};

impl Grid {
    /// A copy of this grid with `template` loaded into it, centered.
    ///
    /// The template is split on `'\n'` and every segment counts as a line,
    /// so leading and trailing newlines contribute blank lines that take
    /// part in vertical centering. Centering puts the extra line of an odd
    /// vertical deficit below, and left-pads every line by the same amount,
    /// computed from the longest line. Templates taller than the grid lose
    /// their bottom lines; lines longer than the grid lose their right end.
    ///
    /// Every cell of the result comes from the template: cells outside the
    /// diagram become [`CellState::Empty`], whatever the receiver held.
    ///
    /// ## Example
    ///
    /// ```
    /// use wireworld_engine::Grid;
    ///
    /// let grid = Grid::new(4, 3).unwrap().load("h#");
    /// assert_eq!(grid.to_string(), "    \n h# \n    ");
    /// ```
    #[must_use]
    pub fn load(&self, template: &str) -> Grid {
        let lines = center_lines(template, self.width(), self.height());
        let cells: Vector<CellState> = lines
            .iter()
            .flat_map(|line| line.chars().map(CellState::from_char))
            .collect();

        Grid::from_parts(self.width(), self.height(), cells)
    }
}

/// Center `template`'s lines in a `width` by `height` block.
///
/// Returns exactly `height` lines of exactly `width` characters each.
fn center_lines(template: &str, width: usize, height: usize) -> Vec<String> {
    pad_to_width(width, pad_to_height(height, template.split('\n').collect()))
}

/// Pad with blank lines above and below until the count reaches `height`,
/// putting the extra line of an odd deficit below. Lines past `height` are
/// dropped from the bottom.
fn pad_to_height(height: usize, lines: Vec<&str>) -> Vec<&str> {
    let deficit = height.saturating_sub(lines.len());
    let top = deficit / 2;

    let mut padded = Vec::with_capacity(height);
    padded.resize(top, "");
    padded.extend(lines);
    padded.truncate(height);
    padded.resize(height, "");
    padded
}

/// Left-pad every line by the same amount, chosen so the longest line is
/// centered, then right-pad with spaces to exactly `width` characters.
/// Characters past `width` are dropped from the right.
fn pad_to_width(width: usize, lines: Vec<&str>) -> Vec<String> {
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let pad = width.saturating_sub(longest) / 2;

    lines
        .iter()
        .map(|line| {
            " ".repeat(pad)
                .chars()
                .chain(line.chars())
                .chain(std::iter::repeat(' '))
                .take(width)
                .collect()
        })
        .collect()
}
