//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell is either empty (`0`) or holds a
//! power-of-two tile. Uses a flat array for cache locality and so the whole
//! board is `Copy`; every engine operation hands back a fresh value instead
//! of mutating the caller's board.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom) and col
//! ranges 0..3 (left to right).

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{is_tile_value, Cell, Line, BOARD_SIZE, CELL_COUNT, EMPTY};

/// Coordinates of a cell as (row, col)
pub type Position = (usize, usize);

/// Empty cells of a board in row-major order (stack-only)
pub type EmptyCells = ArrayVec<Position, CELL_COUNT>;

/// Rejected board input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },
    #[error("row {row} must have {expected} cells, got {actual}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, which is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Cell },
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// The game board - 4x4 cells using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Build a board from rows, validating shape and tile values.
    ///
    /// ```
    /// use twenty48_core::Board;
    ///
    /// let board = Board::from_rows(&[
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 8],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(1, 1), Some(4));
    ///
    /// assert!(Board::from_rows(&[[3, 0, 0, 0]; 4]).is_err());
    /// assert!(Board::from_rows(&[[0, 0, 0, 0]; 3]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount {
                expected: BOARD_SIZE,
                actual: rows.len(),
            });
        }

        let mut cells = [EMPTY; CELL_COUNT];
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != BOARD_SIZE {
                return Err(BoardError::RowLength {
                    row,
                    expected: BOARD_SIZE,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value != EMPTY && !is_tile_value(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
                cells[row * BOARD_SIZE + col] = value;
            }
        }

        Ok(Self { cells })
    }

    /// Assemble a board from lines the engine produced itself.
    ///
    /// Merging and transforms only ever yield empties or doubled tiles, so the
    /// tile invariant carries over from the source board.
    pub(crate) fn from_lines(lines: [Line; BOARD_SIZE]) -> Self {
        let mut cells = [EMPTY; CELL_COUNT];
        for (row, line) in lines.iter().enumerate() {
            cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE].copy_from_slice(line);
        }
        Self { cells }
    }

    /// Get size of the board (cells per side)
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col) to a tile or [`EMPTY`]
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), BoardError> {
        let idx = Self::index(row, col).ok_or(BoardError::OutOfBounds {
            row,
            col,
            size: BOARD_SIZE,
        })?;
        if value != EMPTY && !is_tile_value(value) {
            return Err(BoardError::InvalidTile { row, col, value });
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Copy of the board with one cell replaced, for callers inside the engine
    /// that already hold a legal tile and an in-bounds position.
    pub(crate) fn with_cell(&self, (row, col): Position, value: Cell) -> Self {
        let mut next = *self;
        next.cells[row * BOARD_SIZE + col] = value;
        next
    }

    /// Check if position is empty (within bounds and no tile)
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(EMPTY))
    }

    /// Row `row` read left to right
    ///
    /// # Panics
    ///
    /// Panics if `row >= BOARD_SIZE`.
    pub fn row(&self, row: usize) -> Line {
        let mut line = [EMPTY; BOARD_SIZE];
        line.copy_from_slice(&self.cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE]);
        line
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> [Line; BOARD_SIZE] {
        std::array::from_fn(|row| self.row(row))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Enumerate empty cells in row-major order
    ///
    /// Stack-only; empty when the board is full.
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == EMPTY)
            .map(|(idx, _)| (idx / BOARD_SIZE, idx % BOARD_SIZE))
            .collect()
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != EMPTY)
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != EMPTY).count()
    }

    /// Sum of all tile values (conserved by merges)
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// Largest tile, or [`EMPTY`] on an empty board
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[Line; BOARD_SIZE]> for Board {
    type Error = BoardError;

    fn try_from(rows: [Line; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows().iter().map(|line| line.to_vec()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &value) in line.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if value == EMPTY {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 3), Some(3));
        assert_eq!(Board::index(1, 0), Some(4));
        assert_eq!(Board::index(3, 3), Some(15));
        assert_eq!(Board::index(4, 0), None);
        assert_eq!(Board::index(0, 4), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, 2).unwrap();
        board.set(2, 1, 64).unwrap();

        assert_eq!(board.get(0, 0), Some(2));
        assert_eq!(board.get(2, 1), Some(64));

        assert_eq!(board.cells[0], 2);
        assert_eq!(board.cells[2 * 4 + 1], 64);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut board = Board::new();
        assert_eq!(
            board.set(1, 2, 12),
            Err(BoardError::InvalidTile {
                row: 1,
                col: 2,
                value: 12
            })
        );
        assert_eq!(
            board.set(4, 0, 2),
            Err(BoardError::OutOfBounds {
                row: 4,
                col: 0,
                size: 4
            })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_from_lines_matches_from_rows() {
        let rows = [[2, 4, 8, 16], [0, 0, 0, 0], [32, 0, 64, 0], [0, 0, 0, 2]];
        assert_eq!(Board::from_lines(rows), Board::from_rows(&rows).unwrap());
        assert_eq!(Board::from_lines(rows).rows(), rows);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(&[[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0], [0, 2, 2, 2]])
            .unwrap();
        let empties: Vec<Position> = board.empty_cells().into_iter().collect();
        assert_eq!(empties, vec![(0, 1), (2, 3), (3, 0)]);
    }

    #[test]
    fn test_with_cell_leaves_source_untouched() {
        let board = Board::new();
        let next = board.with_cell((3, 2), 4);
        assert_eq!(board.tile_count(), 0);
        assert_eq!(next.get(3, 2), Some(4));
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_rows(&[[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2048]])
            .unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "     2      .      .      .");
        assert_eq!(lines[3], "     .      .      .   2048");
    }

    #[test]
    fn test_serde_rows_roundtrip_and_validation() {
        let board = Board::from_rows(&[[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 8, 0], [0, 0, 0, 16]])
            .unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[2,0,0,0],[0,4,0,0],[0,0,8,0],[0,0,0,16]]");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        assert!(serde_json::from_str::<Board>("[[2,0,0,0],[0,4,0,0],[0,0,8,0]]").is_err());
        assert!(serde_json::from_str::<Board>("[[5,0,0,0],[0,4,0,0],[0,0,8,0],[0,0,0,0]]").is_err());
    }
}
