//! Room domain entity

use chrono::{DateTime, Utc};

/// A bookable hotel room.
///
/// Identity is immutable once created; the label and currency are
/// administrator-editable attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Unique room ID
    pub id: i32,
    /// Room label, e.g. "101" or "Deluxe 204"
    pub name: String,
    /// ISO currency code used when pricing stays in this room
    pub currency_code: String,
    /// When the room was registered
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(id: i32, name: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            currency_code: currency_code.into(),
            created_at: Utc::now(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_carries_currency() {
        let room = Room::new(1, "101", "IDR");
        assert_eq!(room.name, "101");
        assert_eq!(room.currency_code, "IDR");
    }
}
