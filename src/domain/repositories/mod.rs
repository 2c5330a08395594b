//! Repository provider — one accessor per aggregate

use crate::domain::billing::BillingRecordRepository;
use crate::domain::house::HouseRepository;
use crate::domain::receipt::PaymentReceiptRepository;
use crate::domain::room::RoomRepository;
use crate::domain::tenant::TenantRepository;
use crate::domain::user::UserRepository;

/// Unified access to all repositories, backed by one connection pool.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let house = repos.houses().find_by_id(1).await?;
/// let bills = repos.billing_records().find_by_room(room.id).await?;
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn houses(&self) -> &dyn HouseRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn tenants(&self) -> &dyn TenantRepository;
    fn billing_records(&self) -> &dyn BillingRecordRepository;
    fn receipts(&self) -> &dyn PaymentReceiptRepository;
}
