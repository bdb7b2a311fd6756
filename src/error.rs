use thiserror::Error;

/// Input-validation failures for the layout engine.
///
/// Routing and coloring themselves never fail: an unroutable edge falls back
/// to a straight segment and an unreachable color lookup falls back to the
/// neutral color. Only malformed input is rejected, and it is rejected fast.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("empty commit history")]
    EmptyHistory,

    #[error("duplicate commit id {0}")]
    DuplicateCommit(String),

    #[error("commit {child} references unknown parent {parent}")]
    DanglingParent { child: String, parent: String },

    #[error("commit {id} is on row {row} but a previous commit is on row {prev}; rows must strictly increase")]
    NonMonotonicRow { id: String, row: usize, prev: usize },
}
