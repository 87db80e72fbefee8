//! Business logic and use cases

pub mod services;

#[cfg(test)]
pub mod test_support;

pub use services::{
    BookingReportService, BookingService, NewBooking, NewBookingLine, OccupancyService,
    ReportFilter, ReportFormat,
};
