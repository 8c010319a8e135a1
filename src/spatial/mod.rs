pub mod grid;
pub mod occupancy;

pub use grid::CellGrid;
pub use occupancy::OccupancyMask;
