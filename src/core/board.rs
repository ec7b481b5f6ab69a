//! Board module - manages the game grid
//!
//! The board is a 10x19 grid of cells, each empty or holding a locked block's
//! color. Uses a flat array for cache locality and zero-allocation row
//! shifting. Coordinates: (x, y) with x running left to right and y running
//! top to bottom; new pieces spawn with their origin at `SPAWN_LOC`.
//!
//! The board knows nothing about falling pieces; it only stores locked cells
//! and the rules for row completion and compaction.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Where new pieces' origins are placed; constant for the session
pub const SPAWN_LOC: Point = Point::new(BOARD_WIDTH as i32 / 2, 0);

/// The game board - `BOARD_WIDTH` columns x `BOARD_HEIGHT` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates; `None` if out of bounds
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * BOARD_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Cell content at (x, y).
    ///
    /// Out-of-range access is a caller bug, not a recoverable error: the
    /// legality checks above this layer are responsible for bounds, so a bad
    /// coordinate here must fail fast rather than corrupt grid invariants.
    ///
    /// # Panics
    /// Panics if (x, y) is outside the grid.
    pub fn content(&self, x: i32, y: i32) -> Cell {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx],
            None => panic!("grid access out of bounds: ({x}, {y})"),
        }
    }

    /// Cell content at a point. Panics like [`content`](Board::content).
    pub fn content_at(&self, loc: Point) -> Cell {
        self.content(loc.x, loc.y)
    }

    /// Set the cell at (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) is outside the grid.
    pub fn set_content(&mut self, x: i32, y: i32, cell: Cell) {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx] = cell,
            None => panic!("grid access out of bounds: ({x}, {y})"),
        }
    }

    /// Set the cell at a point. Panics like [`set_content`](Board::set_content).
    pub fn set_content_at(&mut self, loc: Point, cell: Cell) {
        self.set_content(loc.x, loc.y, cell);
    }

    /// Set every in-bounds location in the list to `cell`.
    ///
    /// Shares the lenient contract of [`are_locs_empty`](Board::are_locs_empty):
    /// callers pass mapped piece locations that may straddle the top border,
    /// and out-of-bounds points are skipped rather than indexed.
    pub fn fill_locs(&mut self, locs: &[Point], cell: Cell) {
        for loc in locs {
            if let Some(idx) = Self::index(loc.x, loc.y) {
                self.cells[idx] = cell;
            }
        }
    }

    /// True iff every *in-bounds* location in the list is empty.
    ///
    /// The list may contain points outside the grid (mapped piece locations
    /// straddling a wall during a move or rotation attempt); those are
    /// silently ignored, never indexed. Vacuously true if no point is
    /// in-bounds.
    pub fn are_locs_empty(&self, locs: &[Point]) -> bool {
        locs.iter().all(|loc| match Self::index(loc.x, loc.y) {
            Some(idx) => self.cells[idx].is_none(),
            None => true,
        })
    }

    /// True iff no cell in the row is empty
    pub fn is_row_complete(&self, row: usize) -> bool {
        assert!(row < BOARD_HEIGHT, "row index out of bounds: {row}");
        let start = row * BOARD_WIDTH;
        self.cells[start..start + BOARD_WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Indices of all currently complete rows, ascending
    pub fn completed_row_indices(&self) -> ArrayVec<usize, BOARD_HEIGHT> {
        (0..BOARD_HEIGHT)
            .filter(|&row| self.is_row_complete(row))
            .collect()
    }

    /// Remove all completed rows and compact; returns the count removed.
    ///
    /// Each completed row is removed independently at its *original* index,
    /// ascending. Removing a row shifts everything above it down by one,
    /// which preserves the position and completeness of still-complete rows
    /// below it, so no re-scan is needed between removals.
    pub fn remove_completed_rows(&mut self) -> usize {
        let full_rows = self.completed_row_indices();
        for &row in &full_rows {
            self.remove_row(row);
        }
        full_rows.len()
    }

    /// Remove one row: shift every row above it down by one, blank row 0
    fn remove_row(&mut self, row: usize) {
        for y in (1..=row).rev() {
            self.copy_row_into_row(y - 1, y);
        }
        self.fill_row(0, None);
    }

    /// Copy a source row's contents into a target row
    fn copy_row_into_row(&mut self, source: usize, target: usize) {
        let src_start = source * BOARD_WIDTH;
        let dst_start = target * BOARD_WIDTH;
        self.cells
            .copy_within(src_start..src_start + BOARD_WIDTH, dst_start);
    }

    /// Fill a row with the given cell content
    fn fill_row(&mut self, row: usize, cell: Cell) {
        let start = row * BOARD_WIDTH;
        for c in &mut self.cells[start..start + BOARD_WIDTH] {
            *c = cell;
        }
    }

    /// Set every cell to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Fixed spawn location for new pieces' origins
    pub fn spawn_loc(&self) -> Point {
        SPAWN_LOC
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Print the grid contents (color index or `.`), for debugging
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match self.cells[y * BOARD_WIDTH + x] {
                    Some(color) => write!(f, "{:2}", color.index())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockColor;

    #[test]
    fn test_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(BOARD_WIDTH));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 19), None);
        assert_eq!(Board::index(0, -1), None);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for y in 0..BOARD_HEIGHT as i32 {
            for x in 0..BOARD_WIDTH as i32 {
                assert_eq!(board.content(x, y), None);
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_content_panics_out_of_bounds() {
        let board = Board::new();
        board.content(-1, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_content_panics_out_of_bounds() {
        let mut board = Board::new();
        board.set_content(0, BOARD_HEIGHT as i32, Some(BlockColor::Red));
    }

    #[test]
    fn test_fill_locs_skips_out_of_bounds() {
        let mut board = Board::new();
        let locs = [
            Point::new(3, -1), // above the grid: skipped
            Point::new(3, 0),
            Point::new(4, 0),
        ];
        board.fill_locs(&locs, Some(BlockColor::Purple));

        assert_eq!(board.content(3, 0), Some(BlockColor::Purple));
        assert_eq!(board.content(4, 0), Some(BlockColor::Purple));
    }

    #[test]
    fn test_spawn_loc_is_top_center() {
        let board = Board::new();
        assert_eq!(board.spawn_loc(), Point::new(5, 0));
    }

    #[test]
    fn test_display_grid_shape() {
        let mut board = Board::new();
        board.set_content(0, 0, Some(BlockColor::Red));
        let text = board.to_string();
        assert_eq!(text.lines().count(), BOARD_HEIGHT);
        assert!(text.starts_with(" 0"));
    }
}
