//! Guest domain entity

use chrono::{DateTime, Utc};

/// A registered guest (the customer on a booking).
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    /// Unique guest ID
    pub id: i32,
    /// Full name as printed on reports
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// When the guest was registered
    pub created_at: DateTime<Utc>,
}

impl Guest {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            phone,
            created_at: Utc::now(),
        }
    }
}
