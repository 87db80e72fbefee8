//! Occupancy dashboard aggregate
//!
//! Pure grid/grouping logic plus the raw-scan interface implemented by the
//! database layer.

pub mod model;
pub mod repository;

pub use model::{
    build_range_grid, days_in_range, group_room_details, month_days, CustomerStay, DayStatus,
    RoomDay, RoomOccupancy, StayRow,
};
pub use repository::OccupancyQueries;
