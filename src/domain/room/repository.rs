//! Room repository interface

use async_trait::async_trait;

use super::model::Room;
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Save a new room, returning it with its assigned ID
    async fn save(&self, room: Room) -> DomainResult<Room>;

    /// Find room by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    /// All rooms, ordered by name
    async fn find_all(&self) -> DomainResult<Vec<Room>>;
}
