//! Invoice aggregate

pub mod model;
pub mod repository;

pub use model::{Invoice, PaymentStatus};
pub use repository::InvoiceRepository;
