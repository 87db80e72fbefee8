//! SeaORM implementation of BookingRepository
//!
//! Header and lines are written inside one transaction so a half-saved
//! booking can never hold rooms.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};

use crate::domain::booking::{Booking, BookingLine, BookingRepository, BookingState};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{booking, booking_line};

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn line_to_domain(m: booking_line::Model) -> BookingLine {
    BookingLine {
        id: m.id,
        booking_id: m.booking_id,
        room_id: m.room_id,
        checkin_date: m.checkin_date,
        checkout_date: m.checkout_date,
        duration_days: m.duration_days,
    }
}

fn model_to_domain(m: booking::Model, lines: Vec<booking_line::Model>) -> Booking {
    Booking {
        id: m.id,
        name: m.name,
        guest_id: m.guest_id,
        state: BookingState::from_str(&m.state),
        checkin_date: m.checkin_date,
        checkout_date: m.checkout_date,
        created_at: m.created_at,
        lines: lines.into_iter().map(line_to_domain).collect(),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

async fn next_id(conn: &impl ConnectionTrait) -> DomainResult<i32> {
    let latest = booking::Entity::find()
        .order_by_desc(booking::Column::Id)
        .one(conn)
        .await
        .map_err(db_err)?;
    Ok(latest.map(|b| b.id).unwrap_or(0) + 1)
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn save(&self, b: Booking) -> DomainResult<Booking> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let id = next_id(&txn).await?;
        let name = Booking::reference(id);
        debug!("Saving booking {} with {} line(s)", name, b.lines.len());

        let header = booking::ActiveModel {
            id: Set(id),
            name: Set(name.clone()),
            guest_id: Set(b.guest_id),
            state: Set(b.state.as_str().to_string()),
            checkin_date: Set(b.checkin_date),
            checkout_date: Set(b.checkout_date),
            created_at: Set(b.created_at),
        };
        let stored = header.insert(&txn).await.map_err(db_err)?;

        let mut stored_lines = Vec::with_capacity(b.lines.len());
        for line in b.lines {
            let model = booking_line::ActiveModel {
                id: NotSet,
                booking_id: Set(id),
                room_id: Set(line.room_id),
                checkin_date: Set(line.checkin_date),
                checkout_date: Set(line.checkout_date),
                duration_days: Set(line.duration_days),
            };
            stored_lines.push(model.insert(&txn).await.map_err(db_err)?);
        }

        txn.commit().await.map_err(db_err)?;
        Ok(model_to_domain(stored, stored_lines))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        let Some(header) = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let lines = booking_line::Entity::find()
            .filter(booking_line::Column::BookingId.eq(id))
            .order_by_asc(booking_line::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(Some(model_to_domain(header, lines)))
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        let rows = booking::Entity::find()
            .find_with_related(booking_line::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        // find_with_related groups ascending by ID; newest first for lists
        Ok(rows
            .into_iter()
            .rev()
            .map(|(header, lines)| model_to_domain(header, lines))
            .collect())
    }

    async fn find_for_report(
        &self,
        checkin_from: Option<NaiveDate>,
        checkout_to: Option<NaiveDate>,
    ) -> DomainResult<Vec<Booking>> {
        let mut query = booking::Entity::find();
        if let Some(from) = checkin_from {
            let floor = from.and_hms_opt(0, 0, 0).expect("midnight").and_utc();
            query = query.filter(booking::Column::CheckinDate.gte(floor));
        }
        if let Some(to) = checkout_to {
            let ceiling = to.and_hms_opt(0, 0, 0).expect("midnight").and_utc();
            query = query.filter(booking::Column::CheckoutDate.lte(ceiling));
        }

        let rows = query
            .find_with_related(booking_line::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|(header, lines)| model_to_domain(header, lines))
            .collect())
    }

    async fn add_line(&self, line: BookingLine) -> DomainResult<BookingLine> {
        let exists = booking::Entity::find_by_id(line.booking_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if exists.is_none() {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: line.booking_id.to_string(),
            });
        }

        debug!("Adding line to booking {}", line.booking_id);
        let model = booking_line::ActiveModel {
            id: NotSet,
            booking_id: Set(line.booking_id),
            room_id: Set(line.room_id),
            checkin_date: Set(line.checkin_date),
            checkout_date: Set(line.checkout_date),
            duration_days: Set(line.duration_days),
        };
        let stored = model.insert(&self.db).await.map_err(db_err)?;
        Ok(line_to_domain(stored))
    }

    async fn find_active_lines_for_room(
        &self,
        room_id: i32,
        exclude_line: Option<i32>,
    ) -> DomainResult<Vec<BookingLine>> {
        let active = [
            BookingState::Reserved.as_str(),
            BookingState::CheckIn.as_str(),
        ];

        let mut query = booking_line::Entity::find()
            .filter(booking_line::Column::RoomId.eq(room_id))
            .join(JoinType::InnerJoin, booking_line::Relation::Booking.def())
            .filter(booking::Column::State.is_in(active));

        if let Some(id) = exclude_line {
            query = query.filter(booking_line::Column::Id.ne(id));
        }

        let models = query
            .order_by_asc(booking_line::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(line_to_domain).collect())
    }

    async fn set_state(&self, id: i32, state: BookingState) -> DomainResult<()> {
        let existing = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: id.to_string(),
            });
        };

        debug!("Booking {} -> {}", existing.name, state);
        let mut active: booking::ActiveModel = existing.into();
        active.state = Set(state.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
