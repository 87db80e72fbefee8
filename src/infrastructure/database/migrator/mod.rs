//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250110_000001_create_rooms;
mod m20250110_000002_create_guests;
mod m20250110_000003_create_bookings;
mod m20250110_000004_create_booking_lines;
mod m20250110_000005_create_invoices;
mod m20250110_000006_add_currency_to_rooms;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_rooms::Migration),
            Box::new(m20250110_000002_create_guests::Migration),
            Box::new(m20250110_000003_create_bookings::Migration),
            Box::new(m20250110_000004_create_booking_lines::Migration),
            Box::new(m20250110_000005_create_invoices::Migration),
            Box::new(m20250110_000006_add_currency_to_rooms::Migration),
        ]
    }
}
