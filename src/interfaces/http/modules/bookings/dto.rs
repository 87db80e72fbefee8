//! Booking API data transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Booking;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct BookingLineRequest {
    #[validate(range(min = 1))]
    pub room_id: i32,
    /// Stay start instant (UTC)
    pub checkin_date: DateTime<Utc>,
    /// Stay end instant (UTC); must not precede check-in
    pub checkout_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1))]
    pub guest_id: i32,
    #[validate(length(min = 1), nested)]
    pub lines: Vec<BookingLineRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingLineResponse {
    pub id: i32,
    pub room_id: i32,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: DateTime<Utc>,
    pub duration_days: i64,
    /// Mirrors the owning booking's state
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: i32,
    /// Reference used by invoices, e.g. "BK00042"
    pub name: String,
    pub guest_id: i32,
    pub state: String,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<BookingLineResponse>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        let status = b.line_status().as_str().to_string();
        Self {
            id: b.id,
            name: b.name.clone(),
            guest_id: b.guest_id,
            state: b.state.as_str().to_string(),
            checkin_date: b.checkin_date,
            checkout_date: b.checkout_date,
            created_at: b.created_at,
            lines: b
                .lines
                .into_iter()
                .map(|l| BookingLineResponse {
                    id: l.id,
                    room_id: l.room_id,
                    checkin_date: l.checkin_date,
                    checkout_date: l.checkout_date,
                    duration_days: l.duration_days,
                    status: status.clone(),
                })
                .collect(),
        }
    }
}
