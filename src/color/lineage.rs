use crate::color::{ColorIdx, Palette};
use crate::core::{CommitNode, Dag};
use crate::layout::Path;
use tracing::{debug, warn};

/// Deterministic branch colorer.
///
/// Walks the DAG from the overall root toward the newest tip. A lineage keeps
/// one color until a fork; each extra fork child takes the next palette entry
/// in cyclic order; a merge edge is colored by the incoming branch rather
/// than the merge commit itself.
pub struct LineageColorer {
    palette: Palette,
}

impl LineageColorer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Assign a color to every commit and every routed path.
    pub fn colorize(&self, dag: &mut Dag, paths: &mut [Path]) {
        // oldest -> newest: discovery order is newest first
        let order: Vec<String> = dag.order.iter().rev().cloned().collect();

        // the overall root seeds the palette
        if let Some(root_id) = order.first() {
            if let Some(root) = dag.nodes.get_mut(root_id) {
                root.color = Some(0);
            }
        }

        self.color_forks(dag, &order);
        self.color_continuations(dag, &order);

        // disconnected inputs only; a connected DAG is fully colored by now
        for id in &order {
            if let Some(node) = dag.nodes.get_mut(id) {
                if node.color.is_none() {
                    warn!(commit = %id, "commit unreachable from the root, using neutral color");
                    node.color = Some(self.palette.neutral());
                }
            }
        }

        self.color_paths(dag, paths);
    }

    /// Fork pass: each commit with more than one child takes the color
    /// flowing into it along its first-parent chain, back-fills that color
    /// onto uncolored ancestors, and deals its children cyclic colors.
    fn color_forks(&self, dag: &mut Dag, order: &[String]) {
        for id in order {
            if dag.children_of(id).len() < 2 {
                continue;
            }

            let inflow = self.inflow_color(dag, id);
            if let Some(node) = dag.nodes.get_mut(id) {
                node.color = Some(inflow);
            }
            self.backfill_first_parents(dag, id, inflow);

            let children = dag.children_of(id).to_vec();
            for (i, child_id) in children.iter().enumerate() {
                let color = self.palette.cycle(inflow, i);
                if let Some(child) = dag.nodes.get_mut(child_id) {
                    child.color = Some(color);
                }
            }
        }
    }

    /// Continuation pass: an uncolored commit inherits its first parent's
    /// color. Parents are older, so they were already visited.
    fn color_continuations(&self, dag: &mut Dag, order: &[String]) {
        for id in order {
            let Some(node) = dag.nodes.get(id) else { continue };
            if node.color.is_some() {
                continue;
            }
            let Some(parent_id) = node.first_parent().map(str::to_string) else {
                continue;
            };
            let inherited = dag.nodes.get(&parent_id).and_then(|p| p.color);
            if let Some(color) = inherited {
                if let Some(node) = dag.nodes.get_mut(id) {
                    node.color = Some(color);
                }
            }
        }
    }

    /// Color flowing into `id`: the nearest colored commit on its
    /// first-parent chain, starting at `id` itself. The seeded root
    /// guarantees termination for any commit that can reach it.
    fn inflow_color(&self, dag: &Dag, id: &str) -> ColorIdx {
        let mut cur = id.to_string();
        while let Some(node) = dag.nodes.get(&cur) {
            if let Some(color) = node.color {
                return color;
            }
            match node.first_parent() {
                Some(parent) => cur = parent.to_string(),
                None => break,
            }
        }
        warn!(commit = %id, "no colored ancestor on first-parent chain, using neutral color");
        self.palette.neutral()
    }

    /// Back-propagate a fork's color onto every uncolored ancestor of its
    /// first-parent chain, stopping at the first colored one.
    fn backfill_first_parents(&self, dag: &mut Dag, fork_id: &str, color: ColorIdx) {
        let first_parent = dag
            .nodes
            .get(fork_id)
            .and_then(|n| n.first_parent().map(str::to_string));
        let Some(mut cur) = first_parent else {
            // the seeded root itself can be a fork
            debug!(commit = %fork_id, "fork has no parents, nothing to back-fill");
            return;
        };

        loop {
            let Some(node) = dag.nodes.get_mut(&cur) else {
                return;
            };
            if node.color.is_some() {
                return;
            }
            node.color = Some(color);
            match node.first_parent() {
                Some(parent) => cur = parent.to_string(),
                None => return,
            }
        }
    }

    /// A path into a merge commit shows the incoming branch, so it takes the
    /// parent's color; any other path takes its child's color.
    fn color_paths(&self, dag: &Dag, paths: &mut [Path]) {
        for path in paths {
            let child_is_merge = dag
                .nodes
                .get(&path.child_id)
                .map_or(false, CommitNode::is_merge);
            let source = if child_is_merge {
                &path.parent_id
            } else {
                &path.child_id
            };
            let color = dag
                .nodes
                .get(source)
                .and_then(|n| n.color)
                .unwrap_or_else(|| self.palette.neutral());
            path.color = Some(color);
        }
    }
}
