//! Headless self-play driver.
//!
//! Plays whole games through the public engine API with a uniformly random
//! choice among the moves that change the board. Used for smoke runs,
//! seeding reproducible fixtures, and eyeballing spawn statistics.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{available_moves, Board, Engine, SimpleRng};
use crate::types::{Cell, SpawnWeights, DEFAULT_FOUR_WEIGHT, DEFAULT_TWO_WEIGHT};

#[derive(Parser, Debug, Clone)]
#[command(name = "selfplay", about = "Play 2048 games with a random move policy")]
pub struct SelfplayArgs {
    /// Number of games to play.
    #[arg(long, env = "TWENTY48_GAMES", default_value_t = 1)]
    pub games: u32,
    /// Seed of the first game; game i uses seed + i.
    #[arg(long, env = "TWENTY48_SEED", default_value_t = 1)]
    pub seed: u32,
    /// Stop a game after this many moves even if it is not over.
    #[arg(long, default_value_t = 10_000)]
    pub max_moves: u32,
    /// Relative weight of spawning a 2.
    #[arg(long, default_value_t = DEFAULT_TWO_WEIGHT)]
    pub two_weight: u32,
    /// Relative weight of spawning a 4.
    #[arg(long, default_value_t = DEFAULT_FOUR_WEIGHT)]
    pub four_weight: u32,
    /// Emit one JSON object per game instead of text.
    #[arg(long)]
    pub json: bool,
    /// Tracing filter used when RUST_LOG is unset, e.g. "info", "twenty48_core=trace".
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl SelfplayArgs {
    pub fn spawn_weights(&self) -> Result<SpawnWeights> {
        SpawnWeights::new(self.two_weight, self.four_weight).with_context(|| {
            format!(
                "invalid spawn weights --two-weight {} --four-weight {}",
                self.two_weight, self.four_weight
            )
        })
    }
}

/// How one game ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub seed: u32,
    pub moves: u32,
    pub score: u64,
    pub max_tile: Cell,
    pub game_over: bool,
    pub board: Board,
}

/// Play one game to the end (or `max_moves`).
///
/// The spawn RNG and the move policy are both seeded from `seed`, so the
/// same arguments always replay the same game.
pub fn play_game(seed: u32, weights: SpawnWeights, max_moves: u32) -> GameSummary {
    let mut engine = Engine::with_weights(SimpleRng::new(seed), weights);
    let mut policy = StdRng::seed_from_u64(u64::from(seed));

    let (mut board, mut score) = engine.new_game();
    let mut moves = 0u32;
    let mut game_over = false;

    while moves < max_moves {
        let options = available_moves(&board);
        let Some(&direction) = options.choose(&mut policy) else {
            game_over = true;
            break;
        };

        let outcome = engine.play(&board, direction);
        score += outcome.points;
        board = outcome.board;
        moves += 1;

        if outcome.game_over {
            game_over = true;
            break;
        }
    }

    GameSummary {
        seed,
        moves,
        score,
        max_tile: board.max_tile(),
        game_over,
        board,
    }
}

/// Play every configured game, writing one report per game to `out`.
pub fn run<W: Write>(args: &SelfplayArgs, out: &mut W) -> Result<Vec<GameSummary>> {
    let weights = args.spawn_weights()?;
    let mut summaries = Vec::with_capacity(args.games as usize);

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game);
        debug!(game, seed, "starting game");
        let summary = play_game(seed, weights, args.max_moves);
        info!(
            seed,
            moves = summary.moves,
            score = summary.score,
            max_tile = summary.max_tile,
            game_over = summary.game_over,
            "game finished"
        );

        if args.json {
            let line = serde_json::to_string(&summary).context("serialize game summary")?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(
                out,
                "seed={} moves={} score={} max_tile={} over={}",
                summary.seed, summary.moves, summary.score, summary.max_tile, summary.game_over
            )?;
            writeln!(out, "{}", summary.board)?;
        }
        summaries.push(summary);
    }

    out.flush()?;
    Ok(summaries)
}
