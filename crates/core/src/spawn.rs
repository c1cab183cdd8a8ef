//! Spawn module - placing new tiles
//!
//! A spawn draws twice from the RNG: first the index into
//! [`Board::empty_cells`], then a roll against the [`SpawnWeights`] total.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Board;
use crate::rng::SpawnRng;
use crate::types::{Cell, SpawnWeights};

/// Where a tile landed and what it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Place one tile into a uniformly chosen empty cell.
///
/// A full board is returned unchanged with `None`; that is not an error.
pub fn spawn_tile<R: SpawnRng + ?Sized>(
    board: &Board,
    rng: &mut R,
    weights: SpawnWeights,
) -> (Board, Option<SpawnedTile>) {
    let empties = board.empty_cells();
    if empties.is_empty() {
        return (*board, None);
    }

    let pick = rng.below(empties.len() as u32) as usize;
    let (row, col) = empties[pick];
    let value = weights.tile_for_roll(rng.below(weights.total()));
    trace!(row, col, value, "spawned tile");

    (
        board.with_cell((row, col), value),
        Some(SpawnedTile { row, col, value }),
    )
}
