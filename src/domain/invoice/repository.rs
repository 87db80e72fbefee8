//! Invoice repository interface

use async_trait::async_trait;

use super::model::Invoice;
use crate::domain::DomainResult;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Register an invoice, returning it with its assigned ID
    async fn save(&self, invoice: Invoice) -> DomainResult<Invoice>;

    /// Best-matching invoice for a booking reference (first match by ID)
    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Invoice>>;

    /// All invoices, newest first
    async fn find_all(&self) -> DomainResult<Vec<Invoice>>;
}
