//! Board representation and move generation.
//!
//! Contains the core data structures for squares, colors, moves, bitboard
//! occupancy, and the pawns-only position with its legal-move enumeration.

pub mod bitboard;
pub mod fen;
pub mod movegen;
pub mod position;
pub mod square;

pub use bitboard::{squares, win_mask, RANK_1, RANK_8};
pub use fen::{encode_placement, parse_placement, FenError};
pub use movegen::legal_moves;
pub use position::Position;
pub use square::{Color, Move, Square};
