//! Pawn-race position.
//!
//! Holds the complete snapshot of a game at a point in time: one occupancy
//! mask per color plus the side to move. Positions are plain `Copy` values;
//! applying a move always produces a fresh position, so sibling branches of
//! a search never share mutable board state.

use super::bitboard::win_mask;
use super::fen::{encode_placement, parse_placement, FenError};
use super::square::{Color, Move, Square};

/// Complete board state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    white: u64,
    black: u64,
    turn: Color,
}

impl Position {
    /// Creates a position from raw occupancy masks.
    pub fn new(white: u64, black: u64, turn: Color) -> Position {
        debug_assert_eq!(white & black, 0, "colors may not share a square");
        Position { white, black, turn }
    }

    /// The variant's starting position: a full rank of pawns per side,
    /// White on rank 2, Black on rank 7, White to move.
    pub fn start() -> Position {
        Position {
            white: 0xFF00,
            black: 0x00FF_0000_0000_0000,
            turn: Color::White,
        }
    }

    /// Parses a position from the piece-placement field of a FEN string,
    /// e.g. `"8/1p1p4/8/8/8/5p2/1P1P4/8"`.
    pub fn from_fen(fen: &str, turn: Color) -> Result<Position, FenError> {
        let (white, black) = parse_placement(fen)?;
        Ok(Position { white, black, turn })
    }

    /// Encodes the piece placement back into FEN rank notation.
    pub fn to_fen(&self) -> String {
        encode_placement(self.white, self.black)
    }

    /// The occupancy mask for one color.
    pub fn occupancy(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Mask of all occupied squares.
    pub fn occupied(&self) -> u64 {
        self.white | self.black
    }

    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    /// Returns the same position with the side to move replaced.
    pub fn with_side_to_move(&self, turn: Color) -> Position {
        Position { turn, ..*self }
    }

    /// The color of the pawn on a square, if any.
    pub fn pawn_at(&self, square: Square) -> Option<Color> {
        if self.white & square.bit() != 0 {
            Some(Color::White)
        } else if self.black & square.bit() != 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// The back-rank win test: true iff the color's occupancy intersects
    /// its win mask (the opponent's home rank).
    pub fn is_win(&self, color: Color) -> bool {
        self.occupancy(color) & win_mask(color) != 0
    }

    /// The winner by the back-rank rule, if any. The rules engine should
    /// never produce a position where both masks hit, but if it does White
    /// takes priority so the caller gets a stable answer.
    pub fn winner(&self) -> Option<Color> {
        if self.is_win(Color::White) {
            Some(Color::White)
        } else if self.is_win(Color::Black) {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Applies a move, returning the resulting position with the turn
    /// flipped. The input position is left untouched.
    pub fn apply(&self, mv: Move) -> Position {
        debug_assert_eq!(self.pawn_at(mv.from), Some(self.turn), "no own pawn on from-square");
        let mut next = *self;
        let (own, theirs) = match self.turn {
            Color::White => (&mut next.white, &mut next.black),
            Color::Black => (&mut next.black, &mut next.white),
        };
        *own &= !mv.from.bit();
        *own |= mv.to.bit();
        *theirs &= !mv.to.bit();
        next.turn = self.turn.opponent();
        next
    }
}
