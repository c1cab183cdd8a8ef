//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! Everything here is plain data, usable from the rules engine, a UI layer, or
//! a network adapter without pulling in any game logic.
//!
//! # Board Dimensions
//!
//! The board is a fixed square grid:
//!
//! - **Size**: 4x4 (`BOARD_SIZE`), 16 cells (`CELL_COUNT`)
//! - **Rows**: indexed 0-3 top to bottom
//! - **Columns**: indexed 0-3 left to right
//!
//! # Cells
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` (`EMPTY`) | no tile |
//! | `2, 4, 8, ...` | tile holding a power of two |
//!
//! # Spawning
//!
//! After every move that changes the board one tile is spawned into a random
//! empty cell. Its value is drawn from [`SpawnWeights`]:
//!
//! | Tile | Default weight | Probability |
//! |------|----------------|-------------|
//! | 2 | 3 | 3/4 |
//! | 4 | 1 | 1/4 |
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Direction, SpawnWeights, BOARD_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir: Direction = "left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!("sideways".parse::<Direction>().is_err());
//!
//! // Legacy single-letter codes
//! assert_eq!(Direction::from_legacy_code('h').unwrap(), Direction::Up);
//!
//! // Spawn weights
//! let weights = SpawnWeights::default();
//! assert_eq!(weights.total(), 4);
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board side length in cells (4x4)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Smallest tile the spawner produces
pub const SPAWN_TILE_LOW: Cell = 2;

/// Larger, rarer tile the spawner produces
pub const SPAWN_TILE_HIGH: Cell = 4;

/// Marker for an empty cell
pub const EMPTY: Cell = 0;

/// Largest tile a `Cell` can hold. Two of these never merge.
pub const MAX_TILE: Cell = 1 << (Cell::BITS - 1);

/// A cell on the game board
///
/// `0` is empty, anything else is a tile holding a power of two >= 2.
pub type Cell = u32;

/// One row or column of the board, read in move order.
pub type Line = [Cell; BOARD_SIZE];

/// Returns true if `value` is a legal tile (power of two, at least 2).
///
/// ```
/// use twenty48_types::is_tile_value;
///
/// assert!(is_tile_value(2));
/// assert!(is_tile_value(2048));
/// assert!(!is_tile_value(0));
/// assert!(!is_tile_value(1));
/// assert!(!is_tile_value(6));
/// ```
pub fn is_tile_value(value: Cell) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// The four move directions
///
/// Tiles slide towards the named edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parse one of the legacy single-character codes:
    /// `g` (gauche), `d` (droite), `h` (haut), `b` (bas).
    ///
    /// These collide with the English letters accepted by [`FromStr`]
    /// (`d` means right here, down there), so they live behind their own
    /// constructor.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Direction;
    ///
    /// assert_eq!(Direction::from_legacy_code('g').unwrap(), Direction::Left);
    /// assert_eq!(Direction::from_legacy_code('D').unwrap(), Direction::Right);
    /// assert_eq!(Direction::from_legacy_code('b').unwrap(), Direction::Down);
    /// assert!(Direction::from_legacy_code('x').is_err());
    /// ```
    pub fn from_legacy_code(code: char) -> Result<Self, ParseDirectionError> {
        match code.to_ascii_lowercase() {
            'g' => Ok(Direction::Left),
            'd' => Ok(Direction::Right),
            'h' => Ok(Direction::Up),
            'b' => Ok(Direction::Down),
            _ => Err(ParseDirectionError(code.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that does not name one of the four directions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized direction {0:?} (expected left, right, up or down)")]
pub struct ParseDirectionError(pub String);

/// Relative odds of spawning a 2 versus a 4
///
/// The engine rolls `below(total)` and spawns a 2 when the roll lands in
/// the first `two` slots, a 4 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpawnWeights")]
pub struct SpawnWeights {
    two: u32,
    four: u32,
}

/// Default weight for a spawned 2
pub const DEFAULT_TWO_WEIGHT: u32 = 3;

/// Default weight for a spawned 4
pub const DEFAULT_FOUR_WEIGHT: u32 = 1;

impl SpawnWeights {
    /// Build weights, rejecting a pair that can never produce a tile.
    pub fn new(two: u32, four: u32) -> Result<Self, SpawnWeightsError> {
        match two.checked_add(four) {
            Some(0) => Err(SpawnWeightsError::Empty),
            None => Err(SpawnWeightsError::Overflow),
            Some(_) => Ok(Self { two, four }),
        }
    }

    /// Only 2s are ever spawned
    pub fn twos_only() -> Self {
        Self { two: 1, four: 0 }
    }

    pub fn two(&self) -> u32 {
        self.two
    }

    pub fn four(&self) -> u32 {
        self.four
    }

    /// Sum of both weights (always > 0)
    pub fn total(&self) -> u32 {
        self.two + self.four
    }

    /// Map a roll in `[0, total)` to a tile value
    pub fn tile_for_roll(&self, roll: u32) -> Cell {
        if roll < self.two {
            SPAWN_TILE_LOW
        } else {
            SPAWN_TILE_HIGH
        }
    }
}

impl Default for SpawnWeights {
    fn default() -> Self {
        Self {
            two: DEFAULT_TWO_WEIGHT,
            four: DEFAULT_FOUR_WEIGHT,
        }
    }
}

#[derive(Deserialize)]
struct RawSpawnWeights {
    two: u32,
    four: u32,
}

impl TryFrom<RawSpawnWeights> for SpawnWeights {
    type Error = SpawnWeightsError;

    fn try_from(raw: RawSpawnWeights) -> Result<Self, Self::Error> {
        SpawnWeights::new(raw.two, raw.four)
    }
}

/// Rejected spawn weight pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnWeightsError {
    #[error("spawn weights must not both be zero")]
    Empty,
    #[error("spawn weights overflow u32 when summed")]
    Overflow,
}
