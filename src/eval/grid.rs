//! Oriented evaluation grid.
//!
//! Projects a position's two occupancy masks into a transient 8x8 grid of
//! own/opponent/empty cells, normalized to the perspective color: row 0 is
//! that color's home rank and own pawns always advance toward increasing
//! row index. Heuristic term code is therefore perspective-agnostic.

use crate::board::bitboard::squares;
use crate::board::position::Position;
use crate::board::square::{Color, Square};

/// One cell of the evaluation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Own,
    Opponent,
    Empty,
}

/// Transient 8x8 projection of a position, built on demand inside the
/// evaluator and discarded after use.
#[derive(Debug, Clone)]
pub struct EvaluationGrid {
    cells: [[Cell; 8]; 8],
}

/// Maps a square to (row, col) for the given perspective. White reads ranks
/// as-is; Black's board is flipped so its advance also runs up the rows.
fn orient(square: Square, perspective: Color) -> (usize, usize) {
    let row = match perspective {
        Color::White => square.rank(),
        Color::Black => 7 - square.rank(),
    };
    (row as usize, square.file() as usize)
}

impl EvaluationGrid {
    /// Builds the grid for a position from the perspective color.
    pub fn new(position: &Position, perspective: Color) -> EvaluationGrid {
        let mut cells = [[Cell::Empty; 8]; 8];
        for sq in squares(position.occupancy(perspective)) {
            let (row, col) = orient(sq, perspective);
            cells[row][col] = Cell::Own;
        }
        for sq in squares(position.occupancy(perspective.opponent())) {
            let (row, col) = orient(sq, perspective);
            cells[row][col] = Cell::Opponent;
        }
        EvaluationGrid { cells }
    }

    /// The cell at (row, col), or `None` when the coordinates fall outside
    /// the board. Signed inputs keep neighbor probes in term code simple.
    pub fn at(&self, row: i32, col: i32) -> Option<Cell> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// True iff the cell at (row, col) is on the board and holds an own pawn.
    pub fn is_own(&self, row: i32, col: i32) -> bool {
        self.at(row, col) == Some(Cell::Own)
    }

    /// True iff the cell at (row, col) is on the board and holds an
    /// opponent pawn.
    pub fn is_opponent(&self, row: i32, col: i32) -> bool {
        self.at(row, col) == Some(Cell::Opponent)
    }

    /// Iterates (row, col) coordinates of all own pawns.
    pub fn own_pawns(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                if self.cells[row as usize][col as usize] == Cell::Own {
                    Some((row, col))
                } else {
                    None
                }
            })
        })
    }

    /// Counts cells of the given kind.
    pub fn count(&self, cell: Cell) -> i32 {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == cell)
            .count() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_FEN: &str = "8/1p1p4/8/8/8/5p2/1P1P4/8";

    #[test]
    fn white_perspective_rows_follow_ranks() {
        let pos = Position::from_fen(SCENARIO_FEN, Color::White).unwrap();
        let grid = EvaluationGrid::new(&pos, Color::White);
        // White pawns on b2/d2: row 1, cols 1 and 3.
        assert!(grid.is_own(1, 1));
        assert!(grid.is_own(1, 3));
        // Black pawns on b7/d7 appear high up the grid.
        assert!(grid.is_opponent(6, 1));
        assert!(grid.is_opponent(6, 3));
        assert!(grid.is_opponent(2, 5));
    }

    #[test]
    fn black_perspective_flips_rows() {
        let pos = Position::from_fen(SCENARIO_FEN, Color::Black).unwrap();
        let grid = EvaluationGrid::new(&pos, Color::Black);
        // Black pawns on rank 7 sit one row above Black's home rank.
        assert!(grid.is_own(1, 1));
        assert!(grid.is_own(1, 3));
        // The advanced f3 pawn is close to goal: row 5.
        assert!(grid.is_own(5, 5));
        assert!(grid.is_opponent(6, 1));
        assert!(grid.is_opponent(6, 3));
    }

    #[test]
    fn out_of_range_probes_are_none() {
        let grid = EvaluationGrid::new(&Position::start(), Color::White);
        assert_eq!(grid.at(-1, 0), None);
        assert_eq!(grid.at(0, 8), None);
        assert!(!grid.is_own(8, 0));
        assert!(!grid.is_opponent(0, -1));
    }

    #[test]
    fn counts_match_masks() {
        let pos = Position::from_fen(SCENARIO_FEN, Color::White).unwrap();
        let grid = EvaluationGrid::new(&pos, Color::White);
        assert_eq!(grid.count(Cell::Own), 2);
        assert_eq!(grid.count(Cell::Opponent), 3);
        assert_eq!(grid.count(Cell::Empty), 59);
        assert_eq!(grid.own_pawns().count(), 2);
    }
}
