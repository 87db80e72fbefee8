//! Guest API data transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Guest;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGuestRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GuestResponse {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Guest> for GuestResponse {
    fn from(g: Guest) -> Self {
        Self {
            id: g.id,
            name: g.name,
            email: g.email,
            phone: g.phone,
            created_at: g.created_at,
        }
    }
}
