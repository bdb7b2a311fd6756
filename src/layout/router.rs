use crate::color::ColorIdx;
use crate::core::Dag;
use crate::layout::OccupancyGrid;
use smallvec::{smallvec, SmallVec};
use tracing::warn;

/// A grid position as `(column, row)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A routed connector between a child commit and one of its parents.
///
/// Points run from the child's anchor to the parent's anchor with rows
/// non-decreasing. The color is set by the colorer after routing.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
    pub child_id: String,
    pub parent_id: String,
    pub color: Option<ColorIdx>,
}

impl Path {
    fn new(points: Vec<Point>, child_id: String, parent_id: String) -> Self {
        Self {
            points,
            child_id,
            parent_id,
            color: None,
        }
    }

    /// Child anchor (first point)
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Parent anchor (last point)
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

/// Routing passes, in the order they run. Easy edges are committed first so
/// they keep clean vertical lines; harder edges route around whatever is
/// already occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoutePass {
    /// Direct neighbor on the next row, column delta within one
    ShortNearVertical,
    /// Same column, any row distance
    Vertical,
    /// Column delta within one, more than one row down
    NearVertical,
    /// Any remaining geometry
    Remaining,
    /// Straight two-point segment; never fails
    Fallback,
}

impl RoutePass {
    const ALL: [RoutePass; 5] = [
        RoutePass::ShortNearVertical,
        RoutePass::Vertical,
        RoutePass::NearVertical,
        RoutePass::Remaining,
        RoutePass::Fallback,
    ];

    fn accepts(self, dx: i64, dy: i64) -> bool {
        match self {
            RoutePass::ShortNearVertical => (-1..=1).contains(&dx) && dy == 1,
            RoutePass::Vertical => dx == 0,
            RoutePass::NearVertical => (-1..=1).contains(&dx) && dy > 1,
            RoutePass::Remaining | RoutePass::Fallback => true,
        }
    }
}

/// Routes one collision-avoiding path per parent edge over the occupancy
/// grid, then derives per-row label columns from the final occupancy.
pub struct PathRouter {
    grid: OccupancyGrid,
    linked: Vec<bool>,
}

impl PathRouter {
    pub fn new(dag: &Dag) -> Self {
        Self {
            grid: OccupancyGrid::for_dag(dag),
            linked: vec![false; dag.edge_count()],
        }
    }

    /// Route every parent edge. Exactly one path per edge: edges the greedy
    /// pathfinder cannot place are drawn as straight fallback segments.
    /// Sets each commit's `label_column` as a side effect.
    pub fn route(&mut self, dag: &mut Dag) -> Vec<Path> {
        let mut paths = Vec::with_capacity(dag.edge_count());

        for pass in RoutePass::ALL {
            for idx in 0..dag.edges.len() {
                if self.linked[idx] {
                    continue;
                }
                let edge = &dag.edges[idx];
                let (Some(child), Some(parent)) =
                    (dag.nodes.get(&edge.from), dag.nodes.get(&edge.to))
                else {
                    // dangling parents are rejected at construction
                    continue;
                };

                let from = Point::new(child.column, child.row);
                let to = Point::new(parent.column, parent.row);
                let dx = to.x as i64 - from.x as i64;
                let dy = to.y as i64 - from.y as i64;
                if !pass.accepts(dx, dy) {
                    continue;
                }

                let points = if pass == RoutePass::Fallback {
                    Some(vec![from, to])
                } else {
                    self.find_path(from, to)
                };

                if let Some(points) = points {
                    let path = Path::new(points, edge.from.clone(), edge.to.clone());
                    self.commit_path(idx, &path);
                    paths.push(path);
                }
            }
        }

        for node in dag.nodes.values_mut() {
            node.label_column = Some(self.grid.label_column(node.row));
        }

        paths
    }

    /// Greedy stepwise walk from `from` down to `to`, one row per step with a
    /// column delta chosen by the sign of the remaining horizontal distance.
    /// A step may land on any unoccupied cell, or on the target anchor.
    fn find_path(&self, from: Point, to: Point) -> Option<Vec<Point>> {
        let target = (to.x as i64, to.y as i64);
        let mut cur = (from.x as i64, from.y as i64);
        let mut points = vec![from];

        loop {
            let dx = target.0 - cur.0;
            let dy = target.1 - cur.1;
            if dx == 0 && dy == 0 {
                return Some(points);
            }
            if dy < 0 {
                // rows strictly increase child -> parent, so the walk should
                // never pass the parent row
                warn!(
                    from_x = from.x,
                    from_y = from.y,
                    to_x = to.x,
                    to_y = to.y,
                    "pathfinder walked past the parent row"
                );
                return None;
            }

            let candidates: SmallVec<[i64; 3]> = match dx.signum() {
                0 => smallvec![0, -1],
                -1 => smallvec![-1, 0, 1],
                _ => smallvec![1, 0],
            };

            let mut stepped = false;
            for mx in candidates {
                let next = (cur.0 + mx, cur.1 + 1);
                if next == target || self.grid.is_free(next.0, next.1) {
                    points.push(Point::new(next.0 as usize, next.1 as usize));
                    cur = next;
                    stepped = true;
                    break;
                }
            }
            if !stepped {
                return None;
            }
        }
    }

    /// Consume the path's cells and mark its edge linked
    fn commit_path(&mut self, edge_idx: usize, path: &Path) {
        for point in &path.points {
            self.grid.occupy(point.x, point.y);
        }
        self.linked[edge_idx] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CommitNode;

    fn node(id: &str, parents: &[&str], row: usize, column: usize) -> CommitNode {
        CommitNode::new(
            id.to_string(),
            parents.iter().map(|p| p.to_string()).collect(),
            row,
            column,
        )
    }

    fn route(commits: Vec<CommitNode>) -> (Dag, Vec<Path>) {
        let mut dag = Dag::from_commits(commits).unwrap();
        let mut router = PathRouter::new(&dag);
        let paths = router.route(&mut dag);
        (dag, paths)
    }

    fn assert_valid(dag: &Dag, paths: &[Path]) {
        assert_eq!(paths.len(), dag.edge_count());
        for path in paths {
            assert!(path.points.len() >= 2);
            let child = &dag.nodes[&path.child_id];
            let parent = &dag.nodes[&path.parent_id];
            assert_eq!(path.start(), Point::new(child.column, child.row));
            assert_eq!(path.end(), Point::new(parent.column, parent.row));
            for pair in path.points.windows(2) {
                assert!(pair[1].y >= pair[0].y, "rows must be non-decreasing");
            }
        }
    }

    #[test]
    fn test_linear_history_routes_vertically() {
        let (dag, paths) = route(vec![
            node("c0", &["c1"], 0, 0),
            node("c1", &["c2"], 1, 0),
            node("c2", &[], 2, 0),
        ]);

        assert_valid(&dag, &paths);
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(path.points.len(), 2);
            assert_eq!(path.start().x, path.end().x);
        }
    }

    #[test]
    fn test_fork_routes_around_sibling_anchor() {
        // b sits one column right and must step down before cutting over
        let (dag, paths) = route(vec![
            node("b", &["r"], 0, 1),
            node("a", &["r"], 1, 0),
            node("r", &[], 2, 0),
        ]);

        assert_valid(&dag, &paths);
        let b_path = paths.iter().find(|p| p.child_id == "b").unwrap();
        assert_eq!(
            b_path.points,
            vec![Point::new(1, 0), Point::new(1, 1), Point::new(0, 2)]
        );
    }

    #[test]
    fn test_blocked_edge_falls_back_to_straight_segment() {
        // a -> c is walled in by b's anchor and the left grid edge
        let (dag, paths) = route(vec![
            node("a", &["c"], 0, 0),
            node("b", &["c"], 1, 0),
            node("c", &[], 2, 0),
        ]);

        assert_valid(&dag, &paths);
        let a_path = paths.iter().find(|p| p.child_id == "a").unwrap();
        assert_eq!(a_path.points, vec![Point::new(0, 0), Point::new(0, 2)]);
    }

    #[test]
    fn test_merge_commit_gets_one_path_per_parent() {
        let (dag, paths) = route(vec![
            node("m", &["a", "b"], 0, 0),
            node("a", &["r"], 1, 0),
            node("b", &["r"], 2, 1),
            node("r", &[], 3, 0),
        ]);

        assert_valid(&dag, &paths);
        assert_eq!(paths.iter().filter(|p| p.child_id == "m").count(), 2);
    }

    #[test]
    fn test_routing_is_deterministic() {
        let commits = || {
            vec![
                node("m", &["a", "b"], 0, 0),
                node("a", &["r"], 1, 0),
                node("b", &["r"], 2, 1),
                node("r", &[], 3, 0),
            ]
        };
        let (_, first) = route(commits());
        let (_, second) = route(commits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_label_column_set_past_rightmost_occupancy() {
        let (dag, _) = route(vec![
            node("b", &["r"], 0, 1),
            node("a", &["r"], 1, 0),
            node("r", &[], 2, 0),
        ]);

        // row 1 holds a's anchor at column 0 and b's detour at column 1
        assert_eq!(dag.nodes["a"].label_column, Some(2));
        assert_eq!(dag.nodes["b"].label_column, Some(2));
        assert_eq!(dag.nodes["r"].label_column, Some(1));
    }
}
