//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::room::{Room, RoomRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::room;

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        name: m.name,
        currency_code: m.currency_code,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn save(&self, r: Room) -> DomainResult<Room> {
        debug!("Saving room: {}", r.name);

        let existing = room::Entity::find()
            .filter(room::Column::Name.eq(r.name.clone()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!("room {}", r.name)));
        }

        let model = room::ActiveModel {
            id: NotSet,
            name: Set(r.name),
            currency_code: Set(r.currency_code),
            created_at: Set(r.created_at),
        };
        let stored = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(stored))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .order_by_asc(room::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
