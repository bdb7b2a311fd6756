use crate::color::{LineageColorer, Palette};
use crate::core::{CommitNode, Dag};
use crate::error::GraphError;
use crate::layout::{Path, PathRouter};

/// Result of a layout run: the positioned, colored node set plus one routed,
/// colored path per parent edge.
#[derive(Debug, Clone)]
pub struct GraphLayout {
    pub dag: Dag,
    pub paths: Vec<Path>,
}

impl GraphLayout {
    /// Commits in discovery order (newest first)
    pub fn commits(&self) -> impl Iterator<Item = &CommitNode> {
        self.dag.order.iter().filter_map(|id| self.dag.nodes.get(id))
    }

    pub fn commit(&self, id: &str) -> Option<&CommitNode> {
        self.dag.nodes.get(id)
    }
}

/// Lay out a positioned commit history: validate the input, route one
/// connector path per parent edge, then color commits and paths by lineage.
///
/// Commits must be ordered newest first with strictly increasing rows, and
/// every parent must resolve within the set. `palette` of `None` selects the
/// default five-entry palette.
///
/// Pure and synchronous: all scratch state (occupancy grid, color map) is
/// rebuilt per call, so repeated calls on the same input give identical
/// output.
pub fn layout(commits: Vec<CommitNode>, palette: Option<Palette>) -> Result<GraphLayout, GraphError> {
    let mut dag = Dag::from_commits(commits)?;

    let mut router = PathRouter::new(&dag);
    let mut paths = router.route(&mut dag);

    let colorer = LineageColorer::new(palette.unwrap_or_default());
    colorer.colorize(&mut dag, &mut paths);

    Ok(GraphLayout { dag, paths })
}
