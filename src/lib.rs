pub mod color;
pub mod core;
pub mod engine;
pub mod error;
pub mod layout;

pub use crate::color::{ColorIdx, LineageColorer, Palette};
pub use crate::core::{CommitNode, Dag, DagStats, Edge, EdgeType};
pub use crate::engine::{layout, GraphLayout};
pub use crate::error::GraphError;
pub use crate::layout::{OccupancyGrid, Path, PathRouter, Point};
