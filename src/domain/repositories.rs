//! Repository provider interface
//!
//! One facade over the per-aggregate repositories so services depend on a
//! single injected object instead of ambient storage.

use crate::domain::booking::BookingRepository;
use crate::domain::guest::GuestRepository;
use crate::domain::invoice::InvoiceRepository;
use crate::domain::room::RoomRepository;

pub trait RepositoryProvider: Send + Sync {
    fn rooms(&self) -> &dyn RoomRepository;
    fn guests(&self) -> &dyn GuestRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn invoices(&self) -> &dyn InvoiceRepository;
}
