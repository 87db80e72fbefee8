//! Raw SQL occupancy scans
//!
//! The dashboard reads bypass the entity layer: each scan is one
//! parameterized statement joining rooms against active booking lines with
//! left-join semantics, so rooms without bookings still produce a row.
//! Dates are bound as values, never spliced into the SQL text.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryResult, Statement};

use crate::domain::booking::BookingState;
use crate::domain::occupancy::{OccupancyQueries, StayRow};
use crate::domain::{DomainError, DomainResult};

pub struct SqlOccupancyQueries {
    db: DatabaseConnection,
}

impl SqlOccupancyQueries {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

const RANGE_STAYS_SQL: &str = r#"
SELECT r.id   AS room_id,
       r.name AS room_name,
       s.customer_name,
       s.booking_id,
       s.checkin,
       s.checkout
FROM rooms r
LEFT JOIN (
    SELECT bl.room_id            AS room_id,
           g.name                AS customer_name,
           b.id                  AS booking_id,
           date(bl.checkin_date)  AS checkin,
           date(bl.checkout_date) AS checkout
    FROM booking_lines bl
    JOIN bookings b ON b.id = bl.booking_id
    LEFT JOIN guests g ON g.id = b.guest_id
    WHERE b.state IN (?, ?)
      AND date(bl.checkout_date) >= ?
      AND date(bl.checkin_date) <= ?
) s ON s.room_id = r.id
ORDER BY r.name, s.customer_name
"#;

const ACTIVE_STAYS_SQL: &str = r#"
SELECT r.id   AS room_id,
       r.name AS room_name,
       s.customer_name,
       s.booking_id,
       s.checkin,
       s.checkout
FROM rooms r
LEFT JOIN (
    SELECT bl.room_id            AS room_id,
           g.name                AS customer_name,
           b.id                  AS booking_id,
           date(bl.checkin_date)  AS checkin,
           date(bl.checkout_date) AS checkout
    FROM booking_lines bl
    JOIN bookings b ON b.id = bl.booking_id
    LEFT JOIN guests g ON g.id = b.guest_id
    WHERE b.state IN (?, ?)
) s ON s.room_id = r.id
ORDER BY r.name, s.customer_name
"#;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn parse_day(value: Option<String>) -> DomainResult<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|e| DomainError::Storage(format!("bad date '{}' in scan row: {}", s, e)))
        })
        .transpose()
}

fn map_row(row: QueryResult) -> DomainResult<StayRow> {
    Ok(StayRow {
        room_id: row.try_get("", "room_id").map_err(db_err)?,
        room_name: row.try_get("", "room_name").map_err(db_err)?,
        customer_name: row.try_get("", "customer_name").map_err(db_err)?,
        booking_id: row.try_get("", "booking_id").map_err(db_err)?,
        checkin: parse_day(row.try_get("", "checkin").map_err(db_err)?)?,
        checkout: parse_day(row.try_get("", "checkout").map_err(db_err)?)?,
    })
}

#[async_trait]
impl OccupancyQueries for SqlOccupancyQueries {
    async fn range_stays(&self, from: NaiveDate, to: NaiveDate) -> DomainResult<Vec<StayRow>> {
        debug!("Occupancy range scan {} .. {}", from, to);

        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            RANGE_STAYS_SQL,
            [
                BookingState::Reserved.as_str().into(),
                BookingState::CheckIn.as_str().into(),
                from.to_string().into(),
                to.to_string().into(),
            ],
        );

        let rows = self.db.query_all(stmt).await.map_err(db_err)?;
        rows.into_iter().map(map_row).collect()
    }

    async fn active_stays(&self) -> DomainResult<Vec<StayRow>> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            ACTIVE_STAYS_SQL,
            [
                BookingState::Reserved.as_str().into(),
                BookingState::CheckIn.as_str().into(),
            ],
        );

        let rows = self.db.query_all(stmt).await.map_err(db_err)?;
        rows.into_iter().map(map_row).collect()
    }
}
