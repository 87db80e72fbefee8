//! SeaORM implementation of GuestRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use crate::domain::guest::{Guest, GuestRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::guest;

pub struct SeaOrmGuestRepository {
    db: DatabaseConnection,
}

impl SeaOrmGuestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: guest::Model) -> Guest {
    Guest {
        id: m.id,
        name: m.name,
        email: m.email,
        phone: m.phone,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl GuestRepository for SeaOrmGuestRepository {
    async fn save(&self, g: Guest) -> DomainResult<Guest> {
        debug!("Saving guest: {}", g.name);

        let model = guest::ActiveModel {
            id: NotSet,
            name: Set(g.name),
            email: Set(g.email),
            phone: Set(g.phone),
            created_at: Set(g.created_at),
        };
        let stored = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(stored))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Guest>> {
        let model = guest::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Guest>> {
        let models = guest::Entity::find()
            .order_by_asc(guest::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
