//! Booking repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Booking, BookingLine, BookingState};
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking header plus its lines in one transaction,
    /// returning the stored booking with assigned IDs and reference name.
    async fn save(&self, booking: Booking) -> DomainResult<Booking>;

    /// Find booking (with lines) by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>>;

    /// All bookings with lines, newest first
    async fn find_all(&self) -> DomainResult<Vec<Booking>>;

    /// Bookings whose header dates fall inside the report window:
    /// `checkin_date >= checkin_from` and `checkout_date <= checkout_to`,
    /// each bound applied only when given.
    async fn find_for_report(
        &self,
        checkin_from: Option<NaiveDate>,
        checkout_to: Option<NaiveDate>,
    ) -> DomainResult<Vec<Booking>>;

    /// Append a line to an existing booking, returning it with its ID
    async fn add_line(&self, line: BookingLine) -> DomainResult<BookingLine>;

    /// Lines for the given room whose owning booking is in an active state,
    /// optionally skipping one line (the line currently being edited).
    async fn find_active_lines_for_room(
        &self,
        room_id: i32,
        exclude_line: Option<i32>,
    ) -> DomainResult<Vec<BookingLine>>;

    /// Overwrite the booking's lifecycle state
    async fn set_state(&self, id: i32, state: BookingState) -> DomainResult<()>;
}
