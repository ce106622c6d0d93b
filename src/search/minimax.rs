//! Depth-bounded minimax with optional alpha-beta pruning.
//!
//! The maximizer is fixed to the root's side-to-move for the whole call;
//! it does not flip with each ply. Terminal tests run in a fixed order at
//! every node: back-rank wins first (White takes priority when both masks
//! somehow hit), then the depth cutoff, then expansion. A position with no
//! legal moves inside the tree is a draw leaf worth 0; only a root with no
//! legal moves is an error.
//!
//! With pruning enabled the root's chosen move and value must match the
//! unpruned search exactly; only the number of visited nodes may differ.
//! Child values are therefore evaluated in full, including their own
//! terminal check, before the parent applies its bound update, and each
//! child is tagged with whether its value is exact: a cut-off subtree
//! reports a bound clamped at the inherited window, so only values strictly
//! inside that window are trusted when the parent picks its move.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::node::{SearchNode, WinStatus};
use crate::board::movegen::legal_moves;
use crate::board::position::Position;
use crate::board::square::{Color, Move};
use crate::eval::heuristic::Evaluator;
use crate::NoLegalMoves;

/// Reward for a position the maximizer has won.
pub const WIN_VALUE: i32 = 10;

/// Reward for a position the maximizer has lost.
pub const LOSS_VALUE: i32 = -10;

/// Value of a stalemate leaf.
pub const DRAW_VALUE: i32 = 0;

const ALPHA_INIT: i32 = i32::MIN;
const BETA_INIT: i32 = i32::MAX;

/// The root result of one search call.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub value: i32,
    pub win_status: WinStatus,
    /// Number of nodes visited, for pruning-effectiveness checks.
    pub nodes: u64,
}

/// Recursive depth-first minimax engine.
///
/// Owns the horizon evaluator and the random source used for tie-breaking,
/// so a seeded engine searches deterministically.
pub struct SearchEngine {
    evaluator: Evaluator,
    rng: SmallRng,
}

impl SearchEngine {
    /// Creates an engine seeded from entropy.
    pub fn new(evaluator: Evaluator) -> SearchEngine {
        SearchEngine {
            evaluator,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed tie-break seed for reproducible runs.
    pub fn with_seed(evaluator: Evaluator, seed: u64) -> SearchEngine {
        SearchEngine {
            evaluator,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Picks a move for the side to move, looking `depth >= 1` plies ahead.
    pub fn choose_move(
        &mut self,
        position: &Position,
        depth: u32,
        pruning: bool,
    ) -> Result<Move, NoLegalMoves> {
        Ok(self.search(position, depth, pruning)?.best_move)
    }

    /// Runs the full search and reports the root value and node count along
    /// with the chosen move.
    pub fn search(
        &mut self,
        position: &Position,
        depth: u32,
        pruning: bool,
    ) -> Result<SearchOutcome, NoLegalMoves> {
        let root_moves = legal_moves(position);
        if root_moves.is_empty() {
            return Err(NoLegalMoves);
        }

        let maximizer = position.side_to_move();
        let mut nodes = 0u64;
        let root = self.explore(
            position, None, maximizer, depth, ALPHA_INIT, BETA_INIT, pruning, &mut nodes,
        );

        // A root that is already decided by the win rule never expands; any
        // legal move is equivalent there, so hand back the first one.
        let best_move = root.best_reply.unwrap_or(root_moves[0]);
        Ok(SearchOutcome {
            best_move,
            value: root.value,
            win_status: root.win_status,
            nodes,
        })
    }

    /// Preorder depth-first expansion of one node.
    ///
    /// `alpha` is the best value the maximizer can force so far, `beta` the
    /// best the minimizer can force; both are inherited from the parent's
    /// bounds at the time of the call and returned inside the node.
    #[allow(clippy::too_many_arguments)]
    fn explore(
        &mut self,
        position: &Position,
        originating: Option<Move>,
        maximizer: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        pruning: bool,
        nodes: &mut u64,
    ) -> SearchNode {
        *nodes += 1;

        if let Some(winner) = position.winner() {
            let (value, status) = if winner == maximizer {
                (WIN_VALUE, WinStatus::Win)
            } else {
                (LOSS_VALUE, WinStatus::Loss)
            };
            return SearchNode::leaf(value, originating, status, alpha, beta);
        }

        if depth == 0 {
            let value = self.evaluator.score(position, maximizer);
            return SearchNode::leaf(value, originating, WinStatus::Unknown, alpha, beta);
        }

        let moves = legal_moves(position);
        if moves.is_empty() {
            // Stalemate leaf inside the tree.
            return SearchNode::leaf(DRAW_VALUE, originating, WinStatus::Draw, alpha, beta);
        }

        let maximizing = position.side_to_move() == maximizer;
        let mut children: Vec<Child> = Vec::with_capacity(moves.len());

        for mv in moves {
            let child_position = position.apply(mv);
            let child = self.explore(
                &child_position,
                Some(mv),
                maximizer,
                depth - 1,
                alpha,
                beta,
                pruning,
                nodes,
            );
            // A value strictly inside the window the child was searched
            // with is its true minimax value; anything clamped at a bound
            // is only a bound. Without pruning every value is exact.
            let exact = !pruning || (child.value > alpha && child.value < beta);
            children.push(Child {
                value: child.value,
                mv,
                status: child.win_status,
                exact,
            });

            if maximizing {
                alpha = alpha.max(child.value);
            } else {
                beta = beta.min(child.value);
            }
            if pruning && alpha >= beta {
                break;
            }
        }

        // The backed-up value is the plain fail-soft extreme over every
        // gathered child, bounds included, so the window bookkeeping above
        // stays the textbook algorithm; exactness only steers which reply
        // is reported.
        let value = children
            .iter()
            .map(|c| c.value)
            .reduce(|a, b| if maximizing { a.max(b) } else { a.min(b) })
            .unwrap_or(DRAW_VALUE);
        let chosen = select(&children, maximizing, &mut self.rng);
        SearchNode {
            value,
            best_reply: Some(chosen.mv),
            originating_move: originating,
            win_status: chosen.status,
            alpha,
            beta,
        }
    }
}

/// One gathered child value, tagged with whether the value is exact or a
/// bound from a cut-off subtree.
#[derive(Clone, Copy)]
struct Child {
    value: i32,
    mv: Move,
    status: WinStatus,
    exact: bool,
}

/// Picks the reply among gathered children: uniformly at random when every
/// child is exact and every value equal (documented tie-break
/// nondeterminism), otherwise the first strict maximum or minimum among
/// the exact children.
///
/// A cut-off child reports a bound clamped at the running window, which can
/// collide with the best exact value without actually matching it, so bound
/// children never join a tie and never displace an exact best. They are
/// considered only when a cutoff left no exact child at all; the node's own
/// value then lands on its window edge and the parent ignores the reply.
fn select(children: &[Child], maximizing: bool, rng: &mut SmallRng) -> Child {
    debug_assert!(!children.is_empty());

    let all_equal = children
        .iter()
        .all(|c| c.exact && c.value == children[0].value);
    if all_equal {
        if children.len() == 1 {
            return children[0];
        }
        return children[rng.gen_range(0..children.len())];
    }

    let mut best: Option<Child> = None;
    for child in children.iter().filter(|c| c.exact) {
        let better = match best {
            None => true,
            Some(b) => {
                if maximizing {
                    child.value > b.value
                } else {
                    child.value < b.value
                }
            }
        };
        if better {
            best = Some(*child);
        }
    }
    best.unwrap_or(children[0])
}
