//! Bitboard constants and helpers.
//!
//! An occupancy mask is a 64-bit value whose set bits mark the squares held
//! by one color's pawns. The win-test masks are each side's target rank:
//! White wins by reaching rank 8 (Black's home rank), Black by reaching
//! rank 1 (White's home rank).

use super::square::{Color, Square};

/// All squares of rank 1 (White's home rank).
pub const RANK_1: u64 = 0xFF;

/// All squares of rank 8 (Black's home rank).
pub const RANK_8: u64 = 0xFF << 56;

/// Mask of all squares on the given 0-based rank.
pub const fn rank_mask(rank: u8) -> u64 {
    0xFF << (rank as u64 * 8)
}

/// The win-test mask for a color: the opponent's home rank.
pub const fn win_mask(color: Color) -> u64 {
    match color {
        Color::White => RANK_8,
        Color::Black => RANK_1,
    }
}

/// Iterates the squares set in an occupancy mask, lowest index first.
pub fn squares(mask: u64) -> impl Iterator<Item = Square> {
    let mut remaining = mask;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let index = remaining.trailing_zeros() as u8;
        remaining &= remaining - 1;
        Some(Square::new(index))
    })
}
