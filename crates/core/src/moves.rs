//! Moves module - the four directional moves
//!
//! Only [`move_left`] touches the merge primitive. The other directions are
//! compositions with two involutions:
//!
//! | Move | Composition |
//! |------|-------------|
//! | left | merge every row |
//! | right | reverse rows, left, reverse rows |
//! | up | transpose, left, transpose |
//! | down | transpose, right, transpose |

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::line::merge_line;
use crate::types::{Direction, Line, BOARD_SIZE};

/// Mirror the board horizontally (reverse each row independently)
pub fn reverse_rows(board: &Board) -> Board {
    let mut rows = board.rows();
    for row in rows.iter_mut() {
        row.reverse();
    }
    Board::from_lines(rows)
}

/// Swap rows and columns (grid[i][j] becomes grid[j][i])
pub fn transpose(board: &Board) -> Board {
    let rows = board.rows();
    let columns: [Line; BOARD_SIZE] =
        std::array::from_fn(|col| std::array::from_fn(|row| rows[row][col]));
    Board::from_lines(columns)
}

/// Slide every row towards column 0
pub fn move_left(board: &Board) -> (Board, u64) {
    let mut points = 0u64;
    let rows = board.rows().map(|row| {
        let (merged, gained) = merge_line(row);
        points += gained;
        merged
    });
    (Board::from_lines(rows), points)
}

/// Slide every row towards the last column
pub fn move_right(board: &Board) -> (Board, u64) {
    let (moved, points) = move_left(&reverse_rows(board));
    (reverse_rows(&moved), points)
}

/// Slide every column towards row 0
pub fn move_up(board: &Board) -> (Board, u64) {
    let (moved, points) = move_left(&transpose(board));
    (transpose(&moved), points)
}

/// Slide every column towards the last row
pub fn move_down(board: &Board) -> (Board, u64) {
    let (moved, points) = move_right(&transpose(board));
    (transpose(&moved), points)
}

/// Apply the move for `direction` without spawning
pub fn slide(board: &Board, direction: Direction) -> (Board, u64) {
    match direction {
        Direction::Left => move_left(board),
        Direction::Right => move_right(board),
        Direction::Up => move_up(board),
        Direction::Down => move_down(board),
    }
}

/// Check if sliding in `direction` would move or merge any tile
pub fn can_move(board: &Board, direction: Direction) -> bool {
    slide(board, direction).0 != *board
}

/// Directions that would change the board, in [`Direction::ALL`] order
pub fn available_moves(board: &Board) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(board, direction))
        .collect()
}
