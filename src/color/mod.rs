pub mod lineage;
pub mod palette;

pub use lineage::LineageColorer;
pub use palette::{ColorIdx, Palette};
