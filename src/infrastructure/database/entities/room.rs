//! Room entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Room label, unique across the hotel
    pub name: String,

    /// ISO currency code for pricing stays in this room
    pub currency_code: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking_line::Entity")]
    BookingLines,
}

impl Related<super::booking_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
