//! Line module - compaction and merge of a single row
//!
//! Every move reduces to this primitive: the board is reoriented so the move
//! runs leftward, then each row goes through [`merge_line`].

use arrayvec::ArrayVec;

use crate::types::{Cell, Line, BOARD_SIZE, EMPTY, MAX_TILE};

/// Two neighbouring cells that would combine if slid together
#[inline]
pub fn can_merge(a: Cell, b: Cell) -> bool {
    a == b && a != EMPTY && a < MAX_TILE
}

/// Slide a line towards index 0 and merge equal neighbours.
///
/// 1. Empty cells are dropped, tile order is kept.
/// 2. A single forward pass merges a tile into the previous output cell when
///    both are equal and the output cell has not merged yet this pass.
/// 3. The result is padded with empty cells on the right.
///
/// Returns the new line and the points scored (sum of merged tile values).
///
/// ```
/// use twenty48_core::merge_line;
///
/// assert_eq!(merge_line([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
/// assert_eq!(merge_line([0, 4, 4, 8]), ([8, 8, 0, 0], 8));
/// assert_eq!(merge_line([2, 0, 0, 2]), ([4, 0, 0, 0], 4));
/// ```
pub fn merge_line(line: Line) -> (Line, u64) {
    let tiles: ArrayVec<Cell, BOARD_SIZE> =
        line.iter().copied().filter(|&value| value != EMPTY).collect();

    let mut out = [EMPTY; BOARD_SIZE];
    let mut len = 0usize;
    let mut points = 0u64;
    // Whether out[len - 1] may still absorb the next tile.
    let mut open = false;

    for value in tiles {
        if open && can_merge(out[len - 1], value) {
            let merged = value * 2;
            out[len - 1] = merged;
            points += u64::from(merged);
            open = false;
        } else {
            out[len] = value;
            len += 1;
            open = true;
        }
    }

    (out, points)
}
