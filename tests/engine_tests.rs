//! Engine tests - the new_game / play contract end to end

use std::collections::VecDeque;

use twenty48::core::{
    available_moves, is_game_over, new_game, play, play_with, slide, Board, Engine, RandRng,
    SimpleRng, SpawnRng, SpawnedTile,
};
use twenty48::types::{Direction, SpawnWeights};

/// Hands out pre-recorded draws in order.
struct ScriptedRng {
    draws: VecDeque<u32>,
}

impl ScriptedRng {
    fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl SpawnRng for ScriptedRng {
    fn below(&mut self, bound: u32) -> u32 {
        let v = self.draws.pop_front().expect("ran out of scripted draws");
        assert!(v < bound, "draw {} out of range {}", v, bound);
        v
    }
}

fn board(rows: [[u32; 4]; 4]) -> Board {
    Board::from_rows(&rows).unwrap()
}

#[test]
fn test_new_game_has_two_small_tiles() {
    for seed in 0..50 {
        let (board, score) = new_game(&mut SimpleRng::new(seed));
        assert_eq!(score, 0);
        assert_eq!(board.tile_count(), 2);
        for &v in board.cells() {
            assert!(v == 0 || v == 2 || v == 4, "unexpected tile {}", v);
        }
    }
}

#[test]
fn test_new_game_with_rand_rng() {
    let (board, score) = new_game(&mut RandRng::seeded(99));
    assert_eq!(score, 0);
    assert_eq!(board.tile_count(), 2);
}

#[test]
fn test_play_exact_spawn() {
    let b = board([[2, 2, 0, 0], [0; 4], [0; 4], [4, 0, 0, 0]]);
    // After left, empty cells in row-major order start (0,1), (0,2), ...
    // Draw index 2 -> (0,3), roll 3 -> a 4.
    let mut rng = ScriptedRng::new(&[2, 3]);
    let outcome = play(&b, Direction::Left, &mut rng);

    assert_eq!(
        outcome.board,
        board([[4, 0, 0, 4], [0; 4], [0; 4], [4, 0, 0, 0]])
    );
    assert_eq!(outcome.points, 4);
    assert!(outcome.moved);
    assert!(!outcome.game_over);
    assert_eq!(
        outcome.spawned,
        Some(SpawnedTile {
            row: 0,
            col: 3,
            value: 4
        })
    );
}

#[test]
fn test_noop_move_returns_input_and_spawns_nothing() {
    let b = board([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    let mut rng = ScriptedRng::new(&[]);
    for direction in [Direction::Left, Direction::Right, Direction::Up] {
        let outcome = play(&b, direction, &mut rng);
        assert_eq!(outcome.board, b, "{} should not change the board", direction);
        assert_eq!(outcome.points, 0);
        assert!(!outcome.moved);
        assert_eq!(outcome.spawned, None);
    }
}

#[test]
fn test_conservation_with_and_without_spawn() {
    let b = board([[2, 2, 4, 4], [8, 0, 8, 0], [0, 0, 0, 2], [2, 0, 0, 0]]);
    let before = b.tile_sum();
    assert_eq!(slide(&b, Direction::Left).0.tile_sum(), before);

    let outcome = play(&b, Direction::Left, &mut SimpleRng::new(4));
    let spawned = outcome.spawned.expect("board changed, so a tile spawns");
    assert_eq!(outcome.board.tile_sum(), before + u64::from(spawned.value));
}

#[test]
fn test_game_over_flag_on_locked_board() {
    let b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(is_game_over(&b));
    let outcome = play(&b, Direction::Down, &mut ScriptedRng::new(&[]));
    assert_eq!(outcome.board, b);
    assert!(outcome.game_over);
}

#[test]
fn test_full_board_with_merge_is_not_over() {
    let b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
    assert!(!is_game_over(&b));
    assert_eq!(available_moves(&b).as_slice(), &[Direction::Left, Direction::Right]);
}

#[test]
fn test_custom_weights_only_spawn_fours() {
    let weights = SpawnWeights::new(0, 1).unwrap();
    let b = board([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let outcome = play_with(&b, Direction::Left, &mut SimpleRng::new(1), weights);
    assert_eq!(outcome.spawned.map(|t| t.value), Some(4));
}

#[test]
fn test_session_score_accumulates() {
    let mut engine = Engine::new(SimpleRng::new(2048));
    let (mut board, mut score) = engine.new_game();
    let mut turns = 0;

    while turns < 500 {
        let moves = available_moves(&board);
        let Some(&direction) = moves.first() else {
            break;
        };
        let before = board.tile_sum();
        let outcome = engine.play(&board, direction);
        assert!(outcome.moved);
        let spawned = outcome.spawned.map(|t| u64::from(t.value)).unwrap_or(0);
        assert_eq!(outcome.board.tile_sum(), before + spawned);

        score += outcome.points;
        board = outcome.board;
        turns += 1;
        if outcome.game_over {
            assert!(available_moves(&board).is_empty());
            break;
        }
    }

    assert!(turns > 0);
    assert!(score > 0);
}

#[test]
fn test_outcome_serializes() {
    let b = board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let outcome = play(&b, Direction::Left, &mut ScriptedRng::new(&[0, 0]));
    let json = serde_json::to_value(outcome).unwrap();
    assert_eq!(json["points"], 4);
    assert_eq!(json["board"][0][0], 4);
    assert_eq!(json["spawned"]["col"], 1);
}
