//! Add currency code to rooms
//!
//! Reports price stays in the room's own currency; existing rooms default
//! to rupiah.

use sea_orm_migration::prelude::*;

use super::m20250110_000001_create_rooms::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum RoomsExt {
    CurrencyCode,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Rooms::Table)
                    .add_column(
                        ColumnDef::new(RoomsExt::CurrencyCode)
                            .string()
                            .not_null()
                            .default("IDR"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Rooms::Table)
                    .drop_column(RoomsExt::CurrencyCode)
                    .to_owned(),
            )
            .await
    }
}
