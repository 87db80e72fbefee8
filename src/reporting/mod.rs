//! Booking report rendering
//!
//! Two encodings of the same row set: a paginated PDF document and a
//! single-sheet spreadsheet. Row collection and payment-status derivation
//! happen in the report service; this module only lays out cells.

pub mod document;
pub mod spreadsheet;

pub use document::render_pdf;
pub use spreadsheet::render_xlsx;

/// Report title, also used as the sheet/document name
pub const REPORT_TITLE: &str = "Room Booking";

/// The fixed 8-column header
pub const REPORT_COLUMNS: [&str; 8] = [
    "Sl No.",
    "Guest Name",
    "Room No.",
    "Check In",
    "Check Out",
    "Duration",
    "Payment Status",
    "Reference No.",
];

/// One printable report row; sequence numbers are assigned at layout time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub guest_name: String,
    pub room_name: String,
    /// Check-in day as "YYYY-MM-DD"
    pub checkin_date: String,
    /// Check-out day as "YYYY-MM-DD"
    pub checkout_date: String,
    /// Localized duration, e.g. "3 hari"
    pub duration: String,
    /// Localized payment-status label
    pub payment_status: String,
    /// Booking reference, e.g. "BK00042"
    pub reference: String,
}
