//! Terminal detection

use crate::board::Board;
use crate::line::can_merge;
use crate::types::BOARD_SIZE;

/// Check if any row or column holds a mergeable neighbour pair
pub fn has_adjacent_merge(board: &Board) -> bool {
    let rows = board.rows();
    (0..BOARD_SIZE).any(|i| {
        (1..BOARD_SIZE).any(|j| {
            can_merge(rows[i][j - 1], rows[i][j]) || can_merge(rows[j - 1][i], rows[j][i])
        })
    })
}

/// True when the board is full and no neighbouring pair can merge.
///
/// Only real neighbours are compared (index >= 1 within each line), so a
/// board edge never counts as a match.
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() && !has_adjacent_merge(board)
}
