pub mod grid;
pub mod router;

pub use grid::OccupancyGrid;
pub use router::{Path, PathRouter, Point};
