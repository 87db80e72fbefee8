//! Raw read-side queries

pub mod occupancy;

pub use occupancy::SqlOccupancyQueries;
