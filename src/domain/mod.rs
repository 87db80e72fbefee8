//! Core business entities, types and traits

pub mod booking;
pub mod error;
pub mod guest;
pub mod invoice;
pub mod occupancy;
pub mod repositories;
pub mod room;

pub use booking::{Booking, BookingLine, BookingRepository, BookingState};
pub use error::{DomainError, DomainResult};
pub use guest::{Guest, GuestRepository};
pub use invoice::{Invoice, InvoiceRepository, PaymentStatus};
pub use occupancy::{OccupancyQueries, StayRow};
pub use repositories::RepositoryProvider;
pub use room::{Room, RoomRepository};
