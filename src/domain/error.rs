//! Domain errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Report rendering error: {0}")]
    Render(String),
}

impl DomainError {
    /// Validation failure raised when a candidate stay collides with an
    /// existing active booking. The message names the first date on which
    /// the room becomes free again.
    pub fn room_unavailable(room_name: &str, next_available: chrono::NaiveDate) -> Self {
        Self::Validation(format!(
            "Sorry, room {} is already booked for the selected dates. \
             The next available date is {}.",
            room_name, next_available
        ))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── Tests ──────────────────────────────────────────────────────
