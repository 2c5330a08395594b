//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::billing::BillingRecordRepository;
use crate::domain::house::HouseRepository;
use crate::domain::receipt::PaymentReceiptRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::room::RoomRepository;
use crate::domain::tenant::TenantRepository;
use crate::domain::user::UserRepository;

use super::billing_record_repository::SeaOrmBillingRecordRepository;
use super::house_repository::SeaOrmHouseRepository;
use super::payment_receipt_repository::SeaOrmPaymentReceiptRepository;
use super::room_repository::SeaOrmRoomRepository;
use super::tenant_repository::SeaOrmTenantRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    houses: SeaOrmHouseRepository,
    rooms: SeaOrmRoomRepository,
    tenants: SeaOrmTenantRepository,
    billing_records: SeaOrmBillingRecordRepository,
    receipts: SeaOrmPaymentReceiptRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            houses: SeaOrmHouseRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            tenants: SeaOrmTenantRepository::new(db.clone()),
            billing_records: SeaOrmBillingRecordRepository::new(db.clone()),
            receipts: SeaOrmPaymentReceiptRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn houses(&self) -> &dyn HouseRepository {
        &self.houses
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn tenants(&self) -> &dyn TenantRepository {
        &self.tenants
    }

    fn billing_records(&self) -> &dyn BillingRecordRepository {
        &self.billing_records
    }

    fn receipts(&self) -> &dyn PaymentReceiptRepository {
        &self.receipts
    }
}
