//! Billing record repository interface

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::model::BillingRecord;
use crate::domain::DomainResult;

#[async_trait]
pub trait BillingRecordRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<BillingRecord>>;

    /// All records for a room, newest billing month first.
    async fn find_by_room(&self, room_id: i32) -> DomainResult<Vec<BillingRecord>>;

    /// The room's most recent record; its `current_units` seeds the next bill.
    async fn find_latest_for_room(&self, room_id: i32) -> DomainResult<Option<BillingRecord>>;

    /// Unpaid and partially paid records for a room, newest first.
    async fn find_outstanding_for_room(&self, room_id: i32) -> DomainResult<Vec<BillingRecord>>;

    /// Outstanding records across a set of rooms (dashboard aggregation).
    async fn find_outstanding_for_rooms(
        &self,
        room_ids: &[i32],
    ) -> DomainResult<Vec<BillingRecord>>;

    /// Most recent records across a set of rooms, newest first.
    async fn find_recent_for_rooms(
        &self,
        room_ids: &[i32],
        limit: u64,
    ) -> DomainResult<Vec<BillingRecord>>;

    /// Sum of `total` over every record of a room.
    async fn total_due_for_room(&self, room_id: i32) -> DomainResult<Decimal>;

    async fn save(&self, record: BillingRecord) -> DomainResult<BillingRecord>;
    async fn update(&self, record: BillingRecord) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
