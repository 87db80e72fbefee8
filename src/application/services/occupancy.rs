//! Occupancy dashboard service
//!
//! Thin orchestration over the raw scans: validate the requested window,
//! run the scan, expand rows into the grid or the per-room groupings.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::occupancy::{
    build_range_grid, days_in_range, group_room_details, month_days, OccupancyQueries, RoomDay,
    RoomOccupancy,
};
use crate::domain::{DomainError, DomainResult};

pub struct OccupancyService {
    queries: Arc<dyn OccupancyQueries>,
}

impl OccupancyService {
    pub fn new(queries: Arc<dyn OccupancyQueries>) -> Self {
        Self { queries }
    }

    /// One `Booked`/`Available` cell per (room, day) over the inclusive
    /// range, every room present, ordered by room name then date.
    pub async fn range_grid(&self, from: NaiveDate, to: NaiveDate) -> DomainResult<Vec<RoomDay>> {
        if from > to {
            return Err(DomainError::Validation(
                "Start date must not be after end date".to_string(),
            ));
        }
        let rows = self.queries.range_stays(from, to).await?;
        Ok(build_range_grid(&rows, from, to))
    }

    /// Every room with its active (customer, booking, covered days) groups;
    /// bookingless rooms carry an empty list.
    pub async fn rooms_details(&self) -> DomainResult<Vec<RoomOccupancy>> {
        let rows = self.queries.active_stays().await?;
        Ok(group_room_details(&rows))
    }

    /// The literal calendar days of a month (28-31 entries).
    pub fn month_days(&self, year: i32, month: u32) -> DomainResult<Vec<NaiveDate>> {
        month_days(year, month)
            .ok_or_else(|| DomainError::Validation(format!("Invalid month: {}", month)))
    }

    /// The literal calendar days of an inclusive range.
    pub fn range_days(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        days_in_range(from, to)
    }
}

// ── Tests ──────────────────────────────────────────────────────
