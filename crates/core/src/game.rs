//! Game module - the public turn contract
//!
//! Ties the pieces together: a move, an optional spawn, and the terminal check.
//! The engine holds no session state; callers keep the board and add up the
//! points from each [`MoveOutcome`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::Board;
use crate::moves::slide;
use crate::rng::SpawnRng;
use crate::spawn::{spawn_tile, SpawnedTile};
use crate::terminal::is_game_over;
use crate::types::{Direction, SpawnWeights, INITIAL_TILES};

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Board after the move and any spawn
    pub board: Board,
    /// Points earned from merges this turn
    pub points: u64,
    /// No further move can change the board
    pub game_over: bool,
    /// Whether any tile moved or merged
    pub moved: bool,
    /// Tile placed after the move (`None` when nothing moved)
    pub spawned: Option<SpawnedTile>,
}

/// Fresh board with two spawned tiles, and a score of 0 (default weights)
pub fn new_game<R: SpawnRng + ?Sized>(rng: &mut R) -> (Board, u64) {
    new_game_with(rng, SpawnWeights::default())
}

/// Fresh board with two spawned tiles, and a score of 0
pub fn new_game_with<R: SpawnRng + ?Sized>(rng: &mut R, weights: SpawnWeights) -> (Board, u64) {
    let mut board = Board::new();
    for _ in 0..INITIAL_TILES {
        board = spawn_tile(&board, rng, weights).0;
    }
    (board, 0)
}

/// Apply `direction` to `board` (default weights)
pub fn play<R: SpawnRng + ?Sized>(board: &Board, direction: Direction, rng: &mut R) -> MoveOutcome {
    play_with(board, direction, rng, SpawnWeights::default())
}

/// Apply `direction` to `board`.
///
/// If nothing moves the input board comes back unchanged and no tile is
/// spawned. Otherwise exactly one tile is spawned, and the terminal flag is
/// computed on the board after the spawn.
///
/// ```
/// use twenty48_core::{play, Board, Direction, SimpleRng};
///
/// let board = Board::from_rows(&[
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ])
/// .unwrap();
///
/// let outcome = play(&board, Direction::Left, &mut SimpleRng::new(1));
/// assert!(outcome.moved);
/// assert_eq!(outcome.points, 4);
/// assert_eq!(outcome.board.get(0, 0), Some(4));
/// assert_eq!(outcome.board.tile_count(), 2);
/// ```
pub fn play_with<R: SpawnRng + ?Sized>(
    board: &Board,
    direction: Direction,
    rng: &mut R,
    weights: SpawnWeights,
) -> MoveOutcome {
    let (candidate, points) = slide(board, direction);
    let moved = candidate != *board;

    let (next, spawned) = if moved {
        spawn_tile(&candidate, rng, weights)
    } else {
        (candidate, None)
    };

    let game_over = is_game_over(&next);
    trace!(%direction, points, moved, game_over, "applied move");
    if game_over {
        debug!(max_tile = next.max_tile(), "no moves left");
    }

    MoveOutcome {
        board: next,
        points,
        game_over,
        moved,
        spawned,
    }
}

/// An RNG and spawn weights bundled behind the two-call interface
#[derive(Debug, Clone)]
pub struct Engine<R> {
    rng: R,
    weights: SpawnWeights,
}

impl<R: SpawnRng> Engine<R> {
    /// Create an engine with default spawn weights
    pub fn new(rng: R) -> Self {
        Self::with_weights(rng, SpawnWeights::default())
    }

    pub fn with_weights(rng: R, weights: SpawnWeights) -> Self {
        Self { rng, weights }
    }

    pub fn weights(&self) -> SpawnWeights {
        self.weights
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Start a game: two tiles, score 0
    pub fn new_game(&mut self) -> (Board, u64) {
        new_game_with(&mut self.rng, self.weights)
    }

    /// Apply one move
    pub fn play(&mut self, board: &Board, direction: Direction) -> MoveOutcome {
        play_with(board, direction, &mut self.rng, self.weights)
    }
}
