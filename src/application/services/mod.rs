//! Application services

pub mod booking;
pub mod occupancy;
pub mod report;

pub use booking::{BookingService, NewBooking, NewBookingLine};
pub use occupancy::OccupancyService;
pub use report::{BookingReportService, ReportFilter, ReportFormat};
