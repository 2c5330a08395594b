//! House repository interface

use async_trait::async_trait;

use super::model::House;
use crate::domain::DomainResult;

#[async_trait]
pub trait HouseRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<House>>;

    /// All houses of one owner, ordered by name.
    async fn find_for_owner(&self, owner_id: &str) -> DomainResult<Vec<House>>;

    async fn save(&self, house: House) -> DomainResult<House>;
    async fn update(&self, house: House) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
