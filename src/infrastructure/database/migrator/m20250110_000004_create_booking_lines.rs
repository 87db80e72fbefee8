//! Create booking_lines table

use sea_orm_migration::prelude::*;

use super::m20250110_000001_create_rooms::Rooms;
use super::m20250110_000003_create_bookings::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingLines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookingLines::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BookingLines::BookingId).integer().not_null())
                    .col(ColumnDef::new(BookingLines::RoomId).integer().not_null())
                    .col(
                        ColumnDef::new(BookingLines::CheckinDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingLines::CheckoutDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingLines::DurationDays)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_lines_booking")
                            .from(BookingLines::Table, BookingLines::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_lines_room")
                            .from(BookingLines::Table, BookingLines::RoomId)
                            .to(Rooms::Table, Rooms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_lines_room")
                    .table(BookingLines::Table)
                    .col(BookingLines::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_lines_booking")
                    .table(BookingLines::Table)
                    .col(BookingLines::BookingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingLines::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BookingLines {
    Table,
    Id,
    BookingId,
    RoomId,
    CheckinDate,
    CheckoutDate,
    DurationDays,
}
