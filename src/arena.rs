//! Match generation between configured players.
//!
//! Plays full games of the pawn race, move by move, between any two player
//! configurations. Records the winner, ply count, and final placement per
//! game, with sequential and rayon-parallel runners and JSONL output.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use serde::Serialize;

use crate::board::position::Position;
use crate::board::square::Color;
use crate::eval::heuristic::{Heuristic, ALL_HEURISTICS};
use crate::player::{Player, RandomPlayer, SearchPlayer};

/// A player configuration the harness can instantiate per game.
#[derive(Clone, Debug)]
pub enum PlayerSpec {
    /// Uniform-random move choice.
    Random,
    /// Minimax search with a fixed depth, heuristic set, and pruning flag.
    Minimax {
        depth: u32,
        heuristics: Vec<Heuristic>,
        pruning: bool,
    },
}

impl PlayerSpec {
    /// Standard engine configuration: full heuristic set with pruning on.
    pub fn engine(depth: u32) -> PlayerSpec {
        PlayerSpec::Minimax {
            depth,
            heuristics: ALL_HEURISTICS.to_vec(),
            pruning: true,
        }
    }

    /// Builds a fresh player for one game, seeded for reproducibility.
    pub fn build(&self, seed: u64) -> Box<dyn Player> {
        match self {
            PlayerSpec::Random => Box::new(RandomPlayer::with_seed(seed)),
            PlayerSpec::Minimax {
                depth,
                heuristics,
                pruning,
            } => Box::new(SearchPlayer::with_seed(*depth, heuristics, *pruning, seed)),
        }
    }

    /// Label used in records and summaries.
    pub fn label(&self) -> String {
        match self {
            PlayerSpec::Random => "random".to_string(),
            PlayerSpec::Minimax { depth, .. } => format!("minimax (depth:{})", depth),
        }
    }
}

/// Configuration for a batch of games.
#[derive(Clone)]
pub struct MatchConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Maximum plies per game before declaring a draw.
    pub max_plies: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy-derived per-game seeds).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
    /// White player configuration.
    pub white: PlayerSpec,
    /// Black player configuration.
    pub black: PlayerSpec,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            num_games: 10,
            max_plies: 200,
            threads: 1,
            seed: 0,
            quiet: false,
            white: PlayerSpec::engine(3),
            black: PlayerSpec::Random,
        }
    }
}

/// How a single game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    /// A side had no legal moves, or the ply limit was reached.
    Draw,
}

/// A complete recorded game.
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// How the game ended.
    pub outcome: Outcome,
    /// Label of the winning player, if any.
    pub winner: Option<String>,
    /// Number of plies played.
    pub plies: u32,
    /// Piece placement at the end of the game, in FEN field form.
    pub final_fen: String,
}

/// Plays one game between two players and returns its record.
///
/// A side with no legal moves ends the game as a draw, as does reaching
/// `max_plies` without a decision.
pub fn play_game(
    white: &mut dyn Player,
    black: &mut dyn Player,
    max_plies: u32,
    game_id: usize,
) -> GameRecord {
    let mut position = Position::start();
    let mut plies = 0u32;
    let outcome = loop {
        if let Some(winner) = position.winner() {
            break match winner {
                Color::White => Outcome::WhiteWins,
                Color::Black => Outcome::BlackWins,
            };
        }
        if plies >= max_plies {
            break Outcome::Draw;
        }
        let mover: &mut dyn Player = match position.side_to_move() {
            Color::White => white,
            Color::Black => black,
        };
        match mover.next_move(&position) {
            Ok(mv) => position = position.apply(mv),
            Err(_) => break Outcome::Draw,
        }
        plies += 1;
    };

    let winner = match outcome {
        Outcome::WhiteWins => Some(white.name()),
        Outcome::BlackWins => Some(black.name()),
        Outcome::Draw => None,
    };
    GameRecord {
        game_id,
        outcome,
        winner,
        plies,
        final_fen: position.to_fen(),
    }
}

/// Runs a batch of games per the config, returning all records in order of
/// completion.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_matches(config: &MatchConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_matches_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs a batch of games, calling `on_game` with each completed record so
/// the caller can stream them to disk instead of collecting.
pub fn run_matches_with_callback<F>(config: &MatchConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_matches_parallel(config, on_game);
    } else {
        run_matches_sequential(config, on_game);
    }
}

fn game_seed(config: &MatchConfig, game_id: usize) -> u64 {
    if config.seed != 0 {
        config.seed.wrapping_add(game_id as u64)
    } else {
        rand::random::<u64>()
    }
}

fn report_game(config: &MatchConfig, done: usize, game: &GameRecord, elapsed_secs: f64) {
    let outcome = match &game.winner {
        Some(label) => format!("{} wins", label),
        None => "draw".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} in {} plies ({:.2}s)",
        done, config.num_games, outcome, game.plies, elapsed_secs,
    );
}

/// Sequential runner: plays games one at a time.
fn run_matches_sequential<F>(config: &MatchConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let seed = game_seed(config, i);
        let mut white = config.white.build(seed);
        let mut black = config.black.build(seed ^ 0x9e37_79b9_7f4a_7c15);
        let game_start = Instant::now();
        let game = play_game(white.as_mut(), black.as_mut(), config.max_plies, i);
        if !config.quiet {
            report_game(config, i + 1, &game, game_start.elapsed().as_secs_f64());
        }
        on_game(game);
    }
}

/// Parallel runner: plays games concurrently using rayon. A channel delivers
/// completed games back to the callback on the calling thread.
fn run_matches_parallel<F>(config: &MatchConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let seed = game_seed(&config_clone, i);
                    let mut white = config_clone.white.build(seed);
                    let mut black = config_clone.black.build(seed ^ 0x9e37_79b9_7f4a_7c15);
                    let game_start = Instant::now();
                    let game =
                        play_game(white.as_mut(), black.as_mut(), config_clone.max_plies, i);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        report_game(&config_clone, n, &game, game_start.elapsed().as_secs_f64());
                    }
                    let _ = tx.send(game);
                });
        });
    });

    for game in rx {
        on_game(game);
    }

    handle.join().expect("match worker thread panicked");
}

/// Aggregate results over a batch of games.
#[derive(Clone, Debug, Serialize)]
pub struct MatchSummary {
    pub games: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
    pub white_win_pct: f64,
    pub black_win_pct: f64,
    pub draw_pct: f64,
    pub avg_plies: f64,
}

/// Tallies outcomes across a batch of game records.
pub fn summarize(games: &[GameRecord]) -> MatchSummary {
    let total = games.len();
    let mut white_wins = 0usize;
    let mut black_wins = 0usize;
    let mut draws = 0usize;
    let mut total_plies = 0u64;

    for game in games {
        total_plies += game.plies as u64;
        match game.outcome {
            Outcome::WhiteWins => white_wins += 1,
            Outcome::BlackWins => black_wins += 1,
            Outcome::Draw => draws += 1,
        }
    }

    let pct = |n: usize| 100.0 * n as f64 / total.max(1) as f64;
    MatchSummary {
        games: total,
        white_wins,
        black_wins,
        draws,
        white_win_pct: pct(white_wins),
        black_win_pct: pct(black_wins),
        draw_pct: pct(draws),
        avg_plies: total_plies as f64 / total.max(1) as f64,
    }
}

/// Prints a match summary to stderr.
pub fn print_summary(config: &MatchConfig, games: &[GameRecord]) {
    let summary = summarize(games);
    eprintln!("=== Match Summary ===");
    eprintln!("Games: {}", summary.games);
    eprintln!("White [{}]: {} ({:.1}%)", config.white.label(), summary.white_wins, summary.white_win_pct);
    eprintln!("Black [{}]: {} ({:.1}%)", config.black.label(), summary.black_wins, summary.black_win_pct);
    eprintln!("Draws: {} ({:.1}%)", summary.draws, summary.draw_pct);
    eprintln!("Avg plies/game: {:.1}", summary.avg_plies);
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}
