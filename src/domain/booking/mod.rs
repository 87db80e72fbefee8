//! Booking aggregate
//!
//! Contains the Booking header, its lines, the lifecycle state machine and
//! the interval/duration arithmetic used by the overlap validator.

pub mod model;
pub mod repository;

pub use model::{
    intervals_overlap, next_available_date, stay_duration_days, Booking, BookingLine, BookingState,
};
pub use repository::BookingRepository;
