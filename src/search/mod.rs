//! Game-tree search.
//!
//! Depth-bounded minimax over the pawn-race tree, with optional alpha-beta
//! pruning and heuristic evaluation at the search horizon.

pub mod minimax;
pub mod node;

pub use minimax::{SearchEngine, SearchOutcome, DRAW_VALUE, LOSS_VALUE, WIN_VALUE};
pub use node::{SearchNode, WinStatus};
