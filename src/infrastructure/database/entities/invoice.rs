//! Invoice entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Free-text reference; equals the booking name when raised for a stay
    pub reference: String,

    /// Accounting payment state: paid, in_payment, not_paid, ...
    pub payment_state: String,

    /// Total in the smallest currency unit
    pub amount_total: i64,

    /// Outstanding amount in the smallest currency unit
    pub amount_residual: i64,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
