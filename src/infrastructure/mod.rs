//! External concerns: database connection, entities, migrations and the
//! raw read-side scans.

pub mod database;

pub use database::{init_database, DatabaseConfig};
