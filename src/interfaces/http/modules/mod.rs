//! HTTP API modules

pub mod bookings;
pub mod dashboard;
pub mod guests;
pub mod health;
pub mod invoices;
pub mod metrics;
pub mod reports;
pub mod rooms;

use std::sync::Arc;

use crate::application::{BookingReportService, BookingService, OccupancyService};
use crate::domain::RepositoryProvider;

/// Shared state for the resource modules
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub bookings: Arc<BookingService>,
    pub occupancy: Arc<OccupancyService>,
    pub reports: Arc<BookingReportService>,
}
