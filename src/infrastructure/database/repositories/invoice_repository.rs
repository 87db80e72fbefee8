//! SeaORM implementation of InvoiceRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::invoice::{Invoice, InvoiceRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::invoice;

pub struct SeaOrmInvoiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmInvoiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: invoice::Model) -> Invoice {
    Invoice {
        id: m.id,
        reference: m.reference,
        payment_state: m.payment_state,
        amount_total: m.amount_total,
        amount_residual: m.amount_residual,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn save(&self, inv: Invoice) -> DomainResult<Invoice> {
        debug!("Saving invoice for reference: {}", inv.reference);

        let model = invoice::ActiveModel {
            id: NotSet,
            reference: Set(inv.reference),
            payment_state: Set(inv.payment_state),
            amount_total: Set(inv.amount_total),
            amount_residual: Set(inv.amount_residual),
            created_at: Set(inv.created_at),
        };
        let stored = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(stored))
    }

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Invoice>> {
        let model = invoice::Entity::find()
            .filter(invoice::Column::Reference.eq(reference))
            .order_by_asc(invoice::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Invoice>> {
        let models = invoice::Entity::find()
            .order_by_desc(invoice::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
