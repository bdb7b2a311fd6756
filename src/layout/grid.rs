use crate::core::Dag;

/// Extra columns beyond the widest observed anchor, so detours around busy
/// columns are not silently truncated on wide histories.
const COLUMN_HEADROOM: usize = 8;

/// Shared occupancy state of the router: one boolean cell per grid position.
///
/// A cell is marked once any commit anchor or committed path segment has used
/// it, and is never unmarked within a layout run. Out-of-bounds cells read as
/// occupied, so the pathfinder cannot wander off the grid.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Size a grid for a positioned DAG: one row per commit row, columns from
    /// the maximum observed anchor column plus headroom. Anchor cells are
    /// marked occupied from the start.
    pub fn for_dag(dag: &Dag) -> Self {
        let rows = dag
            .nodes
            .values()
            .map(|n| n.row + 1)
            .max()
            .unwrap_or(0);
        let cols = dag
            .nodes
            .values()
            .map(|n| n.column + 1)
            .max()
            .unwrap_or(0)
            + COLUMN_HEADROOM;

        let mut grid = Self::new(rows, cols);
        for node in dag.nodes.values() {
            grid.occupy(node.column, node.row);
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(x, y)` is in bounds and unoccupied. Signed coordinates so
    /// the pathfinder can probe one step left of column zero.
    pub fn is_free(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.cols || y >= self.rows {
            return false;
        }
        !self.cells[y * self.cols + x]
    }

    /// Mark a cell occupied. Write-once: occupied cells never revert.
    pub fn occupy(&mut self, x: usize, y: usize) {
        if x < self.cols && y < self.rows {
            self.cells[y * self.cols + x] = true;
        }
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        !self.is_free(x as i64, y as i64)
    }

    /// Column just past the rightmost occupied cell of `row`; the label
    /// anchor for that row.
    pub fn label_column(&self, row: usize) -> usize {
        if row >= self.rows {
            return 1;
        }
        let mut rightmost = 0;
        for x in 0..self.cols {
            if self.cells[row * self.cols + x] {
                rightmost = x;
            }
        }
        rightmost + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_read_as_occupied() {
        let grid = OccupancyGrid::new(3, 4);
        assert!(grid.is_free(0, 0));
        assert!(!grid.is_free(-1, 0));
        assert!(!grid.is_free(0, 3));
        assert!(!grid.is_free(4, 0));
    }

    #[test]
    fn test_occupy_is_write_once() {
        let mut grid = OccupancyGrid::new(2, 2);
        grid.occupy(1, 1);
        assert!(grid.is_occupied(1, 1));
        grid.occupy(1, 1);
        assert!(grid.is_occupied(1, 1));
    }

    #[test]
    fn test_label_column_tracks_rightmost() {
        let mut grid = OccupancyGrid::new(2, 6);
        grid.occupy(0, 0);
        grid.occupy(3, 0);
        assert_eq!(grid.label_column(0), 4);
        // empty row still yields a valid anchor
        assert_eq!(grid.label_column(1), 1);
    }
}
