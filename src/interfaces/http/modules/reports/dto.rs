//! Report API data transfer objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{ReportFilter, ReportFormat};
use crate::reporting::ReportRow;

/// Requested output encoding
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatParam {
    Pdf,
    Xlsx,
}

impl From<ReportFormatParam> for ReportFormat {
    fn from(p: ReportFormatParam) -> Self {
        match p {
            ReportFormatParam::Pdf => ReportFormat::Pdf,
            ReportFormatParam::Xlsx => ReportFormat::Xlsx,
        }
    }
}

/// Report window, optional room restriction and encoding
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingReportRequest {
    /// Keep bookings checking in on or after this day
    pub checkin: Option<NaiveDate>,
    /// Keep bookings checking out on or before this day
    pub checkout: Option<NaiveDate>,
    /// Keep only lines for this room
    pub room_id: Option<i32>,
    pub format: ReportFormatParam,
}

/// Same filters without an encoding; returns the rows as JSON
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingReportRowsRequest {
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
    pub room_id: Option<i32>,
}

impl BookingReportRowsRequest {
    pub fn filter(&self) -> ReportFilter {
        ReportFilter {
            checkin_from: self.checkin,
            checkout_to: self.checkout,
            room_id: self.room_id,
        }
    }
}

impl BookingReportRequest {
    pub fn filter(&self) -> ReportFilter {
        ReportFilter {
            checkin_from: self.checkin,
            checkout_to: self.checkout,
            room_id: self.room_id,
        }
    }
}

/// One printable report row
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportRowResponse {
    pub sl_no: usize,
    pub guest_name: String,
    pub room_name: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub duration: String,
    pub payment_status: String,
    pub reference: String,
}

impl ReportRowResponse {
    pub fn from_row(index: usize, r: ReportRow) -> Self {
        Self {
            sl_no: index + 1,
            guest_name: r.guest_name,
            room_name: r.room_name,
            checkin_date: r.checkin_date,
            checkout_date: r.checkout_date,
            duration: r.duration,
            payment_status: r.payment_status,
            reference: r.reference,
        }
    }
}
