//! Player abstraction.
//!
//! A player maps a position to a chosen move: either uniform-random choice
//! over the legal moves or a delegation to the minimax search engine. Both
//! variants record how many moves they have produced and a running mean of
//! per-call decision latency for the match harness to read.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::movegen::legal_moves;
use crate::board::position::Position;
use crate::board::square::Move;
use crate::eval::heuristic::{Evaluator, Heuristic};
use crate::search::minimax::SearchEngine;
use crate::NoLegalMoves;

/// Running decision statistics with a Welford-style incremental mean, so
/// the average stays exact without storing every sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveStats {
    moves: u64,
    mean_latency_secs: f64,
}

impl MoveStats {
    pub fn record(&mut self, elapsed: Duration) {
        self.record_secs(elapsed.as_secs_f64());
    }

    pub fn record_secs(&mut self, secs: f64) {
        self.moves += 1;
        self.mean_latency_secs += (secs - self.mean_latency_secs) / self.moves as f64;
    }

    pub fn total_moves(&self) -> u64 {
        self.moves
    }

    /// Mean decision latency in seconds; 0.0 before the first move.
    pub fn average_latency_secs(&self) -> f64 {
        self.mean_latency_secs
    }
}

/// Something that can pick the next move for the side to move.
pub trait Player {
    /// Returns the player's chosen move, or [`NoLegalMoves`] when the side
    /// to move has none.
    fn next_move(&mut self, position: &Position) -> Result<Move, NoLegalMoves>;

    /// Display name for reports.
    fn name(&self) -> String;

    /// Number of moves produced so far.
    fn total_moves(&self) -> u64;

    /// Running mean of per-call decision latency, in seconds.
    fn average_decision_latency(&self) -> f64;
}

/// Picks uniformly at random among the legal moves.
pub struct RandomPlayer {
    rng: SmallRng,
    stats: MoveStats,
}

impl RandomPlayer {
    pub fn new() -> RandomPlayer {
        RandomPlayer {
            rng: SmallRng::from_entropy(),
            stats: MoveStats::default(),
        }
    }

    pub fn with_seed(seed: u64) -> RandomPlayer {
        RandomPlayer {
            rng: SmallRng::seed_from_u64(seed),
            stats: MoveStats::default(),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn next_move(&mut self, position: &Position) -> Result<Move, NoLegalMoves> {
        let start = Instant::now();
        let moves = legal_moves(position);
        if moves.is_empty() {
            return Err(NoLegalMoves);
        }
        let mv = moves[self.rng.gen_range(0..moves.len())];
        self.stats.record(start.elapsed());
        Ok(mv)
    }

    fn name(&self) -> String {
        "random".to_string()
    }

    fn total_moves(&self) -> u64 {
        self.stats.total_moves()
    }

    fn average_decision_latency(&self) -> f64 {
        self.stats.average_latency_secs()
    }
}

/// Delegates to the minimax search engine with a depth, heuristic set, and
/// pruning flag all fixed at construction.
pub struct SearchPlayer {
    engine: SearchEngine,
    depth: u32,
    pruning: bool,
    stats: MoveStats,
}

impl SearchPlayer {
    /// `depth` must be at least 1; the core does not validate it.
    pub fn new(depth: u32, heuristics: &[Heuristic], pruning: bool) -> SearchPlayer {
        SearchPlayer {
            engine: SearchEngine::new(Evaluator::new(heuristics)),
            depth,
            pruning,
            stats: MoveStats::default(),
        }
    }

    /// Seeded variant for reproducible tie-breaking.
    pub fn with_seed(depth: u32, heuristics: &[Heuristic], pruning: bool, seed: u64) -> SearchPlayer {
        SearchPlayer {
            engine: SearchEngine::with_seed(Evaluator::new(heuristics), seed),
            depth,
            pruning,
            stats: MoveStats::default(),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Player for SearchPlayer {
    fn next_move(&mut self, position: &Position) -> Result<Move, NoLegalMoves> {
        let start = Instant::now();
        let mv = self.engine.choose_move(position, self.depth, self.pruning)?;
        self.stats.record(start.elapsed());
        Ok(mv)
    }

    fn name(&self) -> String {
        format!("minimax (depth:{})", self.depth)
    }

    fn total_moves(&self) -> u64 {
        self.stats.total_moves()
    }

    fn average_decision_latency(&self) -> f64 {
        self.stats.average_latency_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::Color;
    use crate::eval::ALL_HEURISTICS;

    const BLOCKED_FEN: &str = "8/1p1p4/1P1P4/8/8/8/8/8";

    #[test]
    fn running_average_matches_spec_sequence() {
        let mut stats = MoveStats::default();
        for secs in [1.0, 0.25, 1.75] {
            stats.record_secs(secs);
        }
        assert_eq!(stats.total_moves(), 3);
        assert!((stats.average_latency_secs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn running_average_is_incremental() {
        let mut stats = MoveStats::default();
        stats.record_secs(2.0);
        assert!((stats.average_latency_secs() - 2.0).abs() < 1e-12);
        stats.record_secs(4.0);
        assert!((stats.average_latency_secs() - 3.0).abs() < 1e-12);
        stats.record_secs(0.0);
        assert!((stats.average_latency_secs() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn random_player_returns_legal_move_and_counts_it() {
        let mut player = RandomPlayer::with_seed(7);
        let pos = Position::start();
        for i in 1..=5 {
            let mv = player.next_move(&pos).unwrap();
            assert!(legal_moves(&pos).contains(&mv));
            assert_eq!(player.total_moves(), i);
        }
        assert!(player.average_decision_latency() >= 0.0);
    }

    #[test]
    fn random_player_fails_without_moves() {
        let pos = Position::from_fen(BLOCKED_FEN, Color::White).unwrap();
        let mut player = RandomPlayer::with_seed(7);
        assert_eq!(player.next_move(&pos), Err(NoLegalMoves));
        assert_eq!(player.total_moves(), 0, "failed calls are not counted");
    }

    #[test]
    fn random_player_is_deterministic_per_seed() {
        let pos = Position::start();
        let mv1 = RandomPlayer::with_seed(99).next_move(&pos).unwrap();
        let mv2 = RandomPlayer::with_seed(99).next_move(&pos).unwrap();
        assert_eq!(mv1, mv2);
    }

    #[test]
    fn search_player_finds_the_breakthrough() {
        let pos = Position::from_fen("8/1p1p4/8/8/8/5p2/1P1P4/8", Color::Black).unwrap();
        let mut player =
            SearchPlayer::with_seed(3, &[Heuristic::MaterialBalance], false, 42);
        let mv = player.next_move(&pos).unwrap();
        assert_eq!(mv, Move::from_uci("f3f2").unwrap());
        assert_eq!(player.total_moves(), 1);
    }

    #[test]
    fn search_player_fails_without_moves() {
        let pos = Position::from_fen(BLOCKED_FEN, Color::White).unwrap();
        let mut player = SearchPlayer::with_seed(3, &ALL_HEURISTICS, true, 42);
        assert_eq!(player.next_move(&pos), Err(NoLegalMoves));
    }

    #[test]
    fn player_names_describe_configuration() {
        assert_eq!(RandomPlayer::new().name(), "random");
        assert_eq!(SearchPlayer::new(4, &ALL_HEURISTICS, true).name(), "minimax (depth:4)");
    }
}
