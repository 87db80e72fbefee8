//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::guest::GuestRepository;
use crate::domain::invoice::InvoiceRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::room::RoomRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::guest_repository::SeaOrmGuestRepository;
use super::invoice_repository::SeaOrmInvoiceRepository;
use super::room_repository::SeaOrmRoomRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().find_by_id(1).await?;
/// let lines = repos.bookings().find_active_lines_for_room(1, None).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    rooms: SeaOrmRoomRepository,
    guests: SeaOrmGuestRepository,
    bookings: SeaOrmBookingRepository,
    invoices: SeaOrmInvoiceRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rooms: SeaOrmRoomRepository::new(db.clone()),
            guests: SeaOrmGuestRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            invoices: SeaOrmInvoiceRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn guests(&self) -> &dyn GuestRepository {
        &self.guests
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn invoices(&self) -> &dyn InvoiceRepository {
        &self.invoices
    }
}
