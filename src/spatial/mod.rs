//! Spatial partitioning for the pair phase.

pub mod grid;

pub use grid::{SpatialGrid, CELL_SIZE_FACTOR, UNASSIGNED};
