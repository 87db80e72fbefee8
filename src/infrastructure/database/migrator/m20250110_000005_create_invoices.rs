//! Create invoices table
//!
//! Invoices tie back to bookings only through the free-text reference, so
//! there is deliberately no foreign key here.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invoices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoices::Reference).string().not_null())
                    .col(
                        ColumnDef::new(Invoices::PaymentState)
                            .string()
                            .not_null()
                            .default("not_paid"),
                    )
                    .col(
                        ColumnDef::new(Invoices::AmountTotal)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Invoices::AmountResidual)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Invoices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoices_reference")
                    .table(Invoices::Table)
                    .col(Invoices::Reference)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Invoices {
    Table,
    Id,
    Reference,
    PaymentState,
    AmountTotal,
    AmountResidual,
    CreatedAt,
}
