use crate::color::ColorIdx;

/// A commit node in the DAG, already positioned on the row/column grid.
#[derive(Debug, Clone)]
pub struct CommitNode {
    /// Unique commit ID (SHA)
    pub id: String,
    /// Parent commit IDs, first-parent first
    pub parents: Vec<String>,
    /// Grid row; strictly increasing with discovery order, smaller = newer
    pub row: usize,
    /// Grid column of the commit's anchor cell
    pub column: usize,
    /// Column just past the rightmost occupied cell of this row; a display
    /// hint for label placement, set by the router
    pub label_column: Option<usize>,
    /// Palette color, set by the colorer
    pub color: Option<ColorIdx>,
}

impl CommitNode {
    pub fn new(id: String, parents: Vec<String>, row: usize, column: usize) -> Self {
        Self {
            id,
            parents,
            row,
            column,
            label_column: None,
            color: None,
        }
    }

    /// Anchor cell of this commit as `(column, row)`
    pub fn anchor(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// First parent of this commit, if any
    pub fn first_parent(&self) -> Option<&str> {
        self.parents.first().map(String::as_str)
    }
}
