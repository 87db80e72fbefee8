//! Guest repository interface

use async_trait::async_trait;

use super::model::Guest;
use crate::domain::DomainResult;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Save a new guest, returning it with its assigned ID
    async fn save(&self, guest: Guest) -> DomainResult<Guest>;

    /// Find guest by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Guest>>;

    /// All guests, ordered by name
    async fn find_all(&self) -> DomainResult<Vec<Guest>>;
}
