//! Squares, colors, and moves.
//!
//! Squares are indexed 0..64 with a1 = 0 and index = rank * 8 + file, so
//! bit `i` of an occupancy mask marks square `i`.

use std::fmt;

/// A side in the pawn race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposing color.
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction of advance: +1 for White, -1 for Black.
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The 0-based rank this color's pawns start on.
    pub const fn start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Lowercase name used in output and match records.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// A board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    /// Creates a square from a raw 0..64 index.
    pub fn new(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Creates a square from 0-based file and rank coordinates.
    pub const fn from_coords(file: u8, rank: u8) -> Square {
        Square(rank * 8 + file)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-based file (a = 0).
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// 0-based rank (rank 1 = 0).
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// The occupancy-mask bit for this square.
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// Returns the square offset by the given file and rank deltas, or
    /// `None` if it falls off the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::from_coords(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation like `"f3"`.
    pub fn from_name(name: &str) -> Option<Square> {
        let mut chars = name.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let file = (file_char as u8).checked_sub(b'a')?;
        let rank = (rank_char as u8).checked_sub(b'1')?;
        if file < 8 && rank < 8 {
            Some(Square::from_coords(file, rank))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            (b'1' + self.rank()) as char
        )
    }
}

/// A pawn move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Parses a move from UCI-style notation like `"f3f2"`.
    pub fn from_uci(uci: &str) -> Option<Move> {
        // The length check counts bytes, so make sure the midpoint is a
        // character boundary before slicing multi-byte input.
        if uci.len() != 4 || !uci.is_char_boundary(2) {
            return None;
        }
        let from = Square::from_name(&uci[..2])?;
        let to = Square::from_name(&uci[2..])?;
        Some(Move { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
