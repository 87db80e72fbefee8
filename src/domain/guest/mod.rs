//! Guest aggregate

pub mod model;
pub mod repository;

pub use model::Guest;
pub use repository::GuestRepository;
