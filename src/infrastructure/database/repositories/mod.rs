//! SeaORM repository implementations

pub mod billing_record_repository;
pub mod house_repository;
pub mod payment_receipt_repository;
pub mod repository_provider;
pub mod room_repository;
pub mod tenant_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

/// Map a database error into the domain error space.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}
