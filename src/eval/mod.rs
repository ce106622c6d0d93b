//! Position evaluation.
//!
//! Scores a position from one color's perspective by composing named
//! heuristic terms, each computed on an oriented occupancy grid.

pub mod grid;
pub mod heuristic;

pub use grid::{Cell, EvaluationGrid};
pub use heuristic::{Evaluator, Heuristic, ALL_HEURISTICS};
