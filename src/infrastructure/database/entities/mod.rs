//! SeaORM entity definitions

pub mod booking;
pub mod booking_line;
pub mod guest;
pub mod invoice;
pub mod room;
