//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the 2048 rules: the board, the merge primitive, the
//! four directional moves, tile spawning, and terminal detection.
//! It has **no dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games (replays, training data)
//! - **Stateless**: Boards go in, new boards come out; nothing is mutated in place
//! - **Testable**: Randomness is injected, so spawns can be scripted exactly
//! - **Fast**: `Board` is a `Copy` flat array and every move is stack-only
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, validation, empty-cell enumeration
//! - [`line`]: single-line compaction and merge
//! - [`moves`]: row reversal, transpose, and the four moves built from them
//! - [`spawn`]: weighted tile placement
//! - [`rng`]: the injectable [`SpawnRng`] capability and its implementations
//! - [`terminal`]: game-over detection
//! - [`game`]: the turn contract (`new_game`, `play`) and [`Engine`]
//!
//! # Game Rules
//!
//! - **Move**: every tile slides as far as it can towards the chosen edge
//! - **Merge**: two equal tiles meeting combine into one of double value,
//!   scoring that value; a tile merges at most once per move
//!   (`[2,2,2,2]` left gives `[4,4,0,0]`, not `[8,0,0,0]`)
//! - **Spawn**: a move that changes the board adds one tile (2 or 4) to a
//!   random empty cell; a move that changes nothing adds nothing
//! - **Game over**: the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use twenty48_core::{Engine, SimpleRng};
//! use twenty48_core::types::Direction;
//!
//! let mut engine = Engine::new(SimpleRng::new(12345));
//! let (mut board, mut score) = engine.new_game();
//! assert_eq!(board.tile_count(), 2);
//!
//! for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     let outcome = engine.play(&board, direction);
//!     score += outcome.points;
//!     board = outcome.board;
//!     if outcome.game_over {
//!         break;
//!     }
//! }
//! assert!(board.tile_count() >= 2);
//! # let _ = score;
//! ```

pub mod board;
pub mod game;
pub mod line;
pub mod moves;
pub mod rng;
pub mod spawn;
pub mod terminal;

pub use twenty48_types as types;
pub use twenty48_types::{Cell, Direction, SpawnWeights};

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, EmptyCells, Position};
pub use game::{new_game, new_game_with, play, play_with, Engine, MoveOutcome};
pub use line::{can_merge, merge_line};
pub use moves::{
    available_moves, can_move, move_down, move_left, move_right, move_up, reverse_rows, slide,
    transpose,
};
pub use rng::{RandRng, SimpleRng, SpawnRng};
pub use spawn::{spawn_tile, SpawnedTile};
pub use terminal::{has_adjacent_merge, is_game_over};
