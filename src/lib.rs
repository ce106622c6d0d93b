//! Pawnstorm engine library.
//!
//! A pawns-only chess variant: the first side to land a pawn on the
//! opponent's home rank wins. Exposes the board representation, heuristic
//! evaluation, minimax search, and player abstractions for use by the match
//! harness and integration tests.

pub mod arena;
pub mod board;
pub mod eval;
pub mod player;
pub mod search;

/// The single error raised by the core contract.
///
/// Raised only when the position handed to `SearchEngine::choose_move` or
/// `Player::next_move` itself has no legal moves. Positions without moves
/// discovered deeper in the search tree are scored as draw leaves instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no legal moves in the current position")]
pub struct NoLegalMoves;
