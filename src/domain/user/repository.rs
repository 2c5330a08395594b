//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// Login accepts either identifier.
    async fn find_by_username_or_email(&self, identifier: &str) -> DomainResult<Option<User>>;

    async fn count(&self) -> DomainResult<u64>;
    async fn save(&self, user: User) -> DomainResult<User>;
    async fn update(&self, user: User) -> DomainResult<()>;
}
