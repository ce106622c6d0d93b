//! Search node model.
//!
//! A node is the transient record of one explored position. Nodes are
//! created on expansion and discarded as soon as the parent has consumed
//! their value; no tree is retained across searches. Alpha and beta travel
//! down the recursion as call parameters and come back up inside the
//! returned node, so no parent back-reference is needed.

use crate::board::square::Move;

/// Outcome classification of a searched position, relative to the maximizer
/// fixed at the root of the search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinStatus {
    Win,
    Loss,
    Draw,
    Unknown,
}

/// Transient record of one explored position.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    /// The node's backed-up value.
    pub value: i32,
    /// The move selected from this position, if it was expanded. Only the
    /// immediate reply is tracked, never the full line.
    pub best_reply: Option<Move>,
    /// The move that produced this position from its parent; `None` at the
    /// true root.
    pub originating_move: Option<Move>,
    pub win_status: WinStatus,
    /// Final bounds at this node. Only meaningful when pruning is enabled.
    pub alpha: i32,
    pub beta: i32,
}

impl SearchNode {
    /// A leaf node: terminal or horizon position with no reply selected.
    pub fn leaf(
        value: i32,
        originating_move: Option<Move>,
        win_status: WinStatus,
        alpha: i32,
        beta: i32,
    ) -> SearchNode {
        SearchNode {
            value,
            best_reply: None,
            originating_move,
            win_status,
            alpha,
            beta,
        }
    }
}
