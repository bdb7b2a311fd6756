use super::{edge::Edge, node::CommitNode};
use crate::error::GraphError;
use std::collections::HashMap;

/// Directed Acyclic Graph representing commit history.
///
/// Nodes are indexed by commit ID; `order` preserves the discovery order of
/// the input (newest first, rows strictly increasing) so that no algorithm
/// has to rely on map iteration order.
#[derive(Debug, Clone)]
pub struct Dag {
    /// All nodes indexed by commit ID
    pub nodes: HashMap<String, CommitNode>,
    /// Commit IDs in discovery order (row ascending, newest first)
    pub order: Vec<String>,
    /// All edges in the graph, in discovery order
    pub edges: Vec<Edge>,
    /// Quick lookup: commit ID -> children IDs, in discovery order
    pub children: HashMap<String, Vec<String>>,
}

impl Dag {
    /// Build a DAG from positioned commits, validating the input contract:
    /// non-empty, unique IDs, strictly increasing rows, no dangling parents.
    pub fn from_commits(commits: Vec<CommitNode>) -> Result<Self, GraphError> {
        if commits.is_empty() {
            return Err(GraphError::EmptyHistory);
        }

        let mut dag = Self {
            nodes: HashMap::with_capacity(commits.len()),
            order: Vec::with_capacity(commits.len()),
            edges: Vec::new(),
            children: HashMap::new(),
        };

        let mut prev_row = None;
        for node in commits {
            if dag.nodes.contains_key(&node.id) {
                return Err(GraphError::DuplicateCommit(node.id));
            }
            if let Some(prev) = prev_row {
                if node.row <= prev {
                    return Err(GraphError::NonMonotonicRow {
                        id: node.id,
                        row: node.row,
                        prev,
                    });
                }
            }
            prev_row = Some(node.row);
            dag.add_node(node);
        }

        // Every parent must resolve to a commit in the same set
        for edge in &dag.edges {
            if !dag.nodes.contains_key(&edge.to) {
                return Err(GraphError::DanglingParent {
                    child: edge.from.clone(),
                    parent: edge.to.clone(),
                });
            }
        }

        Ok(dag)
    }

    /// Add a commit node, materializing its parent edges
    fn add_node(&mut self, node: CommitNode) {
        let id = node.id.clone();

        for parent_id in &node.parents {
            let edge = if node.parents.len() > 1 {
                Edge::merge(id.clone(), parent_id.clone())
            } else {
                Edge::new(id.clone(), parent_id.clone())
            };
            self.edges.push(edge);

            self.children
                .entry(parent_id.clone())
                .or_default()
                .push(id.clone());
        }

        self.order.push(id.clone());
        self.nodes.insert(id, node);
    }

    /// Get all root commits (no parents)
    pub fn roots(&self) -> Vec<&CommitNode> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|node| node.is_root())
            .collect()
    }

    /// Get all leaf commits (no children)
    pub fn leaves(&self) -> Vec<&CommitNode> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|node| !self.children.contains_key(&node.id))
            .collect()
    }

    /// Children of a commit, in discovery order
    pub fn children_of(&self, commit_id: &str) -> &[String] {
        self.children
            .get(commit_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The designated overall root: the oldest commit of the positioned
    /// sequence (largest row). Seeds the color palette.
    pub fn oldest(&self) -> Option<&CommitNode> {
        self.order.last().and_then(|id| self.nodes.get(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if DAG contains orphan branches
    pub fn has_orphan_branches(&self) -> bool {
        self.roots().len() > 1
    }

    /// Get statistics about the DAG
    pub fn stats(&self) -> DagStats {
        let merge_commits = self.nodes.values().filter(|n| n.is_merge()).count();
        let root_commits = self.roots().len();
        let leaf_commits = self.leaves().len();

        DagStats {
            total_commits: self.nodes.len(),
            total_edges: self.edges.len(),
            merge_commits,
            root_commits,
            leaf_commits,
            has_orphans: self.has_orphan_branches(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DagStats {
    pub total_commits: usize,
    pub total_edges: usize,
    pub merge_commits: usize,
    pub root_commits: usize,
    pub leaf_commits: usize,
    pub has_orphans: bool,
}
