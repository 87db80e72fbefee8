//! Occupancy scan interface
//!
//! The two read operations behind the dashboard. Implementations run raw
//! parameterized SQL and map rows to `StayRow`; rooms without active
//! bookings must still yield a row (left-join semantics).

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::StayRow;
use crate::domain::DomainResult;

#[async_trait]
pub trait OccupancyQueries: Send + Sync {
    /// One row per (room, active stay) pair whose interval touches the
    /// inclusive `[from, to]` window, plus one bare row per room without
    /// such a stay. Ordered by room name.
    async fn range_stays(&self, from: NaiveDate, to: NaiveDate) -> DomainResult<Vec<StayRow>>;

    /// One row per (room, active stay, customer) triple across all dates,
    /// plus one bare row per bookingless room. Ordered by room name, then
    /// customer name.
    async fn active_stays(&self) -> DomainResult<Vec<StayRow>>;
}
