//! Dashboard API data transfer objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::occupancy::{CustomerStay, RoomDay, RoomOccupancy};

/// Inclusive date window for the occupancy grid
#[derive(Debug, Deserialize, IntoParams)]
pub struct RangeParams {
    /// First day, "YYYY-MM-DD"
    pub date_from: NaiveDate,
    /// Last day, "YYYY-MM-DD"
    pub date_to: NaiveDate,
}

/// (year, month) pair for the month-days helper
#[derive(Debug, Deserialize, IntoParams)]
pub struct MonthParams {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

/// One grid cell: a room on a calendar day
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDayResponse {
    pub room_id: i32,
    pub room_name: String,
    /// "YYYY-MM-DD"
    pub booking_date: String,
    /// "Booked" or "Available"
    pub status: String,
}

impl From<RoomDay> for RoomDayResponse {
    fn from(c: RoomDay) -> Self {
        Self {
            room_id: c.room_id,
            room_name: c.room_name,
            booking_date: c.date.to_string(),
            status: c.status.as_str().to_string(),
        }
    }
}

/// One customer stay inside a room's detail listing
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerStayResponse {
    pub customer_name: String,
    pub booking_id: i32,
    /// Every covered day, ascending, "YYYY-MM-DD"
    pub booking_dates: Vec<String>,
}

impl From<CustomerStay> for CustomerStayResponse {
    fn from(s: CustomerStay) -> Self {
        Self {
            customer_name: s.customer_name,
            booking_id: s.booking_id,
            booking_dates: s.dates.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// One room with its customer stays; empty list when the room is free
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomOccupancyResponse {
    pub room_id: i32,
    pub room_name: String,
    pub customer_bookings: Vec<CustomerStayResponse>,
}

impl From<RoomOccupancy> for RoomOccupancyResponse {
    fn from(r: RoomOccupancy) -> Self {
        Self {
            room_id: r.room_id,
            room_name: r.room_name,
            customer_bookings: r.stays.into_iter().map(Into::into).collect(),
        }
    }
}
