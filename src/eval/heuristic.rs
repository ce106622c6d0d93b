//! Heuristic position evaluation.
//!
//! Composes an ordered list of named heuristic terms into one integer score
//! for a position from one color's perspective. Each term is a pure function
//! of the oriented [`EvaluationGrid`], so the same code scores both colors.
//!
//! Design: the tag-to-function lookup is built once at construction, making
//! the term set data-driven instead of a growing conditional chain.

use super::grid::{Cell, EvaluationGrid};
use crate::board::position::Position;
use crate::board::square::Color;

/// Relative weight of a pawn in the material term.
const PAWN_WEIGHT: i32 = 1;

/// Bonus per rank advanced from the start rank.
const ADVANCE_STEP: i32 = 5;

/// Penalty for an own pawn an opponent can capture next move.
const CAPTURE_RISK_PENALTY: i32 = -20;

/// Grid row the perspective color's pawns start on.
const START_ROW: i32 = 1;

/// Highest row counted by the advancement term; the final two ranks are
/// excluded from the count.
const ADVANCE_CAP_ROW: i32 = 5;

/// A named, independently-computable heuristic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    MaterialBalance,
    DiagonalSupport,
    LateralSupport,
    AdvancementBonus,
    StackedPenalty,
    CaptureRisk,
}

/// Every available term, in a stable order.
pub const ALL_HEURISTICS: [Heuristic; 6] = [
    Heuristic::MaterialBalance,
    Heuristic::DiagonalSupport,
    Heuristic::LateralSupport,
    Heuristic::AdvancementBonus,
    Heuristic::StackedPenalty,
    Heuristic::CaptureRisk,
];

type TermFn = fn(&EvaluationGrid) -> i32;

impl Heuristic {
    /// The scoring function implementing this term.
    fn term_fn(self) -> TermFn {
        match self {
            Heuristic::MaterialBalance => material_balance,
            Heuristic::DiagonalSupport => diagonal_support,
            Heuristic::LateralSupport => lateral_support,
            Heuristic::AdvancementBonus => advancement_bonus,
            Heuristic::StackedPenalty => stacked_penalty,
            Heuristic::CaptureRisk => capture_risk,
        }
    }
}

/// Own piece count minus the opponent's, weighted. The variant fields only
/// pawns, so every piece carries [`PAWN_WEIGHT`].
fn material_balance(grid: &EvaluationGrid) -> i32 {
    (grid.count(Cell::Own) - grid.count(Cell::Opponent)) * PAWN_WEIGHT
}

/// +1 per own pawn with an own pawn one rank behind it, diagonally adjacent
/// on either side. Pawns on the home rank have no rank behind them.
fn diagonal_support(grid: &EvaluationGrid) -> i32 {
    grid.own_pawns()
        .filter(|&(row, col)| grid.is_own(row - 1, col - 1) || grid.is_own(row - 1, col + 1))
        .count() as i32
}

/// +1 per own pawn with an own pawn in an immediately adjacent file on the
/// same rank.
fn lateral_support(grid: &EvaluationGrid) -> i32 {
    grid.own_pawns()
        .filter(|&(row, col)| grid.is_own(row, col - 1) || grid.is_own(row, col + 1))
        .count() as i32
}

/// 5 points per rank advanced from the start rank, summed over own pawns;
/// the final two ranks do not add to the count.
fn advancement_bonus(grid: &EvaluationGrid) -> i32 {
    grid.own_pawns()
        .map(|(row, _)| (row.min(ADVANCE_CAP_ROW) - START_ROW).max(0) * ADVANCE_STEP)
        .sum()
}

/// -1 per own pawn with another own pawn directly behind it on the same file.
fn stacked_penalty(grid: &EvaluationGrid) -> i32 {
    -(grid
        .own_pawns()
        .filter(|&(row, col)| grid.is_own(row - 1, col))
        .count() as i32)
}

/// -20 per own pawn standing diagonally one rank ahead of an opponent pawn's
/// path, i.e. immediately capturable.
fn capture_risk(grid: &EvaluationGrid) -> i32 {
    grid.own_pawns()
        .filter(|&(row, col)| grid.is_opponent(row + 1, col - 1) || grid.is_opponent(row + 1, col + 1))
        .count() as i32
        * CAPTURE_RISK_PENALTY
}

/// Composes an immutable ordered list of heuristic terms, fixed at player
/// construction, into a single evaluator.
#[derive(Debug, Clone)]
pub struct Evaluator {
    terms: Vec<(Heuristic, TermFn)>,
}

impl Evaluator {
    /// Builds the strategy table for the given tags. Duplicate tags are kept
    /// and counted twice; the caller owns the composition.
    pub fn new(tags: &[Heuristic]) -> Evaluator {
        Evaluator {
            terms: tags.iter().map(|&tag| (tag, tag.term_fn())).collect(),
        }
    }

    /// The configured tags, in evaluation order.
    pub fn heuristics(&self) -> Vec<Heuristic> {
        self.terms.iter().map(|(tag, _)| *tag).collect()
    }

    /// Scores the position from the perspective color: the sum of the
    /// configured terms on the oriented grid. An empty term list always
    /// scores exactly 0.
    pub fn score(&self, position: &Position, perspective: Color) -> i32 {
        if self.terms.is_empty() {
            return 0;
        }
        let grid = EvaluationGrid::new(position, perspective);
        self.terms.iter().map(|(_, term)| term(&grid)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_one(tag: Heuristic, fen: &str, perspective: Color) -> i32 {
        let pos = Position::from_fen(fen, perspective).unwrap();
        Evaluator::new(&[tag]).score(&pos, perspective)
    }

    #[test]
    fn empty_term_list_scores_zero_everywhere() {
        let evaluator = Evaluator::new(&[]);
        for fen in [
            "8/pppppppp/8/8/8/8/PPPPPPPP/8",
            "8/1p1p4/8/8/8/5p2/1P1P4/8",
            "8/8/8/8/8/8/8/8",
        ] {
            let pos = Position::from_fen(fen, Color::White).unwrap();
            assert_eq!(evaluator.score(&pos, Color::White), 0);
            assert_eq!(evaluator.score(&pos, Color::Black), 0);
        }
    }

    #[test]
    fn material_balance_is_signed_count_difference() {
        let fen = "8/1p1p4/8/8/8/5p2/1P1P4/8";
        assert_eq!(score_one(Heuristic::MaterialBalance, fen, Color::Black), 1);
        assert_eq!(score_one(Heuristic::MaterialBalance, fen, Color::White), -1);
        assert_eq!(
            score_one(Heuristic::MaterialBalance, "8/pppppppp/8/8/8/8/PPPPPPPP/8", Color::White),
            0
        );
    }

    #[test]
    fn diagonal_support_counts_supported_pawns() {
        // c3 is supported by b2; b2 itself is on the lowest pawn rank.
        assert_eq!(
            score_one(Heuristic::DiagonalSupport, "8/8/8/8/8/2P5/1P6/8", Color::White),
            1
        );
        // A full chain: b2 supports c3, c3 supports d4.
        assert_eq!(
            score_one(Heuristic::DiagonalSupport, "8/8/8/8/3P4/2P5/1P6/8", Color::White),
            2
        );
        // Support is +1 per supported pawn even with two supporters.
        assert_eq!(
            score_one(Heuristic::DiagonalSupport, "8/8/8/8/8/2P5/1P1P4/8", Color::White),
            1
        );
        // Mirrored for Black: b7 supports c6.
        assert_eq!(
            score_one(Heuristic::DiagonalSupport, "8/1p6/2p5/8/8/8/8/8", Color::Black),
            1
        );
    }

    #[test]
    fn lateral_support_counts_both_neighbors() {
        assert_eq!(
            score_one(Heuristic::LateralSupport, "8/8/8/8/8/8/1PP5/8", Color::White),
            2
        );
        assert_eq!(
            score_one(Heuristic::LateralSupport, "8/8/8/8/8/8/1P1P4/8", Color::White),
            0
        );
        assert_eq!(
            score_one(Heuristic::LateralSupport, "8/8/8/8/8/8/PPP5/8", Color::White),
            3
        );
    }

    #[test]
    fn advancement_bonus_scales_with_ranks_advanced() {
        assert_eq!(
            score_one(Heuristic::AdvancementBonus, "8/8/8/8/8/8/P7/8", Color::White),
            0
        );
        assert_eq!(
            score_one(Heuristic::AdvancementBonus, "8/8/8/8/P7/8/8/8", Color::White),
            10
        );
        // Black mirrored: c5 is two ranks advanced from rank 7.
        assert_eq!(
            score_one(Heuristic::AdvancementBonus, "8/8/8/2p5/8/8/8/8", Color::Black),
            10
        );
    }

    #[test]
    fn advancement_bonus_excludes_final_two_ranks() {
        // Rank 6 is the last counted rank for White: 4 steps.
        let capped = score_one(Heuristic::AdvancementBonus, "8/8/P7/8/8/8/8/8", Color::White);
        assert_eq!(capped, 20);
        // Rank 7 adds nothing beyond the cap.
        assert_eq!(
            score_one(Heuristic::AdvancementBonus, "8/P7/8/8/8/8/8/8", Color::White),
            capped
        );
    }

    #[test]
    fn stacked_pawns_are_penalized() {
        assert_eq!(
            score_one(Heuristic::StackedPenalty, "8/8/8/8/8/P7/P7/8", Color::White),
            -1
        );
        assert_eq!(
            score_one(Heuristic::StackedPenalty, "8/8/8/8/8/P7/8/8", Color::White),
            0
        );
        // Three in a file: two pawns have one directly behind.
        assert_eq!(
            score_one(Heuristic::StackedPenalty, "8/8/8/8/P7/P7/P7/8", Color::White),
            -2
        );
    }

    #[test]
    fn capture_risk_flags_capturable_pawns() {
        // White b3 sits in the capture path of Black c4.
        assert_eq!(
            score_one(Heuristic::CaptureRisk, "8/8/8/8/2p5/1P6/8/8", Color::White),
            -20
        );
        // Head-on block is not capturable.
        assert_eq!(
            score_one(Heuristic::CaptureRisk, "8/8/8/8/1p6/1P6/8/8", Color::White),
            0
        );
        // Symmetric from Black's side: the same contact puts c4 at risk of
        // nothing (b3 captures toward rank 4 diagonals a4/c4).
        assert_eq!(
            score_one(Heuristic::CaptureRisk, "8/8/8/8/2p5/1P6/8/8", Color::Black),
            -20
        );
    }

    #[test]
    fn terms_sum_in_composition() {
        let fen = "8/8/8/8/8/2P5/1PP5/8";
        let pos = Position::from_fen(fen, Color::White).unwrap();
        let material = Evaluator::new(&[Heuristic::MaterialBalance]).score(&pos, Color::White);
        let lateral = Evaluator::new(&[Heuristic::LateralSupport]).score(&pos, Color::White);
        let both = Evaluator::new(&[Heuristic::MaterialBalance, Heuristic::LateralSupport])
            .score(&pos, Color::White);
        assert_eq!(both, material + lateral);
    }

    #[test]
    fn full_set_prefers_healthy_structure() {
        let evaluator = Evaluator::new(&ALL_HEURISTICS);
        // A connected pair beats the same pair stacked on one file, with the
        // lead pawns equally advanced.
        let connected = Position::from_fen("8/8/8/8/8/1PP5/8/8", Color::White).unwrap();
        let stacked = Position::from_fen("8/8/8/8/8/1P6/1P6/8", Color::White).unwrap();
        assert!(
            evaluator.score(&connected, Color::White) > evaluator.score(&stacked, Color::White),
            "connected={} stacked={}",
            evaluator.score(&connected, Color::White),
            evaluator.score(&stacked, Color::White)
        );
    }

    #[test]
    fn evaluator_reports_configured_tags() {
        let evaluator = Evaluator::new(&[Heuristic::CaptureRisk, Heuristic::MaterialBalance]);
        assert_eq!(
            evaluator.heuristics(),
            vec![Heuristic::CaptureRisk, Heuristic::MaterialBalance]
        );
    }
}
