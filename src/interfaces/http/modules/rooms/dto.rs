//! Room API data transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Room;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    /// Room label, unique across the hotel
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    /// ISO 4217 currency code
    #[serde(default = "default_currency")]
    #[validate(length(equal = 3))]
    pub currency_code: String,
}

fn default_currency() -> String {
    "IDR".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub currency_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            currency_code: r.currency_code,
            created_at: r.created_at,
        }
    }
}
