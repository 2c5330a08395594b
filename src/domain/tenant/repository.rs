//! Tenant repository interface

use async_trait::async_trait;

use super::model::Tenant;
use crate::domain::DomainResult;

#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Tenant>>;

    /// A room holds at most one tenant.
    async fn find_by_room(&self, room_id: i32) -> DomainResult<Option<Tenant>>;

    /// Tenants across a set of rooms (dashboard income aggregation).
    async fn find_by_rooms(&self, room_ids: &[i32]) -> DomainResult<Vec<Tenant>>;

    async fn save(&self, tenant: Tenant) -> DomainResult<Tenant>;
    async fn update(&self, tenant: Tenant) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
