//! Legal move generation.
//!
//! Enumerates the legal pawn moves for the side to move: a single advance
//! onto an empty square, a double advance from the start rank over two empty
//! squares, and diagonal captures of opposing pawns. The variant has no
//! en passant and no promotion; the game ends the moment a pawn reaches the
//! far rank, so a promoted piece could never act.

use super::bitboard::squares;
use super::position::Position;
use super::square::Move;

/// Generates all legal moves for the side to move.
///
/// The enumeration is exhaustive and duplicate-free; the order (by pawn
/// square, advances before captures) is deterministic but not significant.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let us = position.side_to_move();
    let own = position.occupancy(us);
    let theirs = position.occupancy(us.opponent());
    let occupied = position.occupied();
    let dir = us.forward();

    let mut moves = Vec::new();

    for from in squares(own) {
        if let Some(to) = from.offset(0, dir) {
            if occupied & to.bit() == 0 {
                moves.push(Move::new(from, to));
                if from.rank() == us.start_rank() {
                    if let Some(two) = from.offset(0, 2 * dir) {
                        if occupied & two.bit() == 0 {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }
        for file_delta in [-1i8, 1] {
            if let Some(to) = from.offset(file_delta, dir) {
                if theirs & to.bit() != 0 {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    moves
}
