//! # Santai Hotel Service
//!
//! Booking, occupancy dashboard and report exports for a small hotel.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits — rooms, guests,
//!   bookings with the overlap/duration rules, invoices, occupancy grids
//! - **application**: Business logic and use cases — the overlap validator,
//!   the occupancy dashboard service and the booking report service
//! - **infrastructure**: External concerns (SeaORM entities, migrations,
//!   repositories and the raw occupancy scans)
//! - **interfaces**: REST API with Swagger documentation
//! - **reporting**: PDF and XLSX encodings of the booking report

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod reporting;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
