//! Room repository interface

use async_trait::async_trait;

use super::model::Room;
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    /// All rooms of one house, ordered by room number.
    async fn find_by_house(&self, house_id: i32) -> DomainResult<Vec<Room>>;

    async fn save(&self, room: Room) -> DomainResult<Room>;
    async fn update(&self, room: Room) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
