//! SeaORM implementation of BillingRecordRepository

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::info;

use crate::domain::billing::{BillingRecord, BillingRecordRepository, PaymentStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::billing_record;

use super::db_err;

const OUTSTANDING_STATUSES: [&str; 2] = ["Unpaid", "Partially Paid"];

fn entity_to_domain(b: billing_record::Model) -> BillingRecord {
    BillingRecord {
        id: b.id,
        room_id: b.room_id,
        billing_month: b.billing_month,
        previous_units: b.previous_units,
        current_units: b.current_units,
        electricity: b.electricity,
        water: b.water,
        rent: b.rent,
        waste: b.waste,
        total: b.total,
        total_paid: b.total_paid,
        payment_received_date: b.payment_received_date,
        remarks: b.remarks,
        status: PaymentStatus::parse(&b.status),
        created_at: b.created_at,
        updated_at: b.updated_at,
    }
}

pub struct SeaOrmBillingRecordRepository {
    db: DatabaseConnection,
}

impl SeaOrmBillingRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BillingRecordRepository for SeaOrmBillingRecordRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<BillingRecord>> {
        let model = billing_record::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_room(&self, room_id: i32) -> DomainResult<Vec<BillingRecord>> {
        let models = billing_record::Entity::find()
            .filter(billing_record::Column::RoomId.eq(room_id))
            .order_by_desc(billing_record::Column::BillingMonth)
            .order_by_desc(billing_record::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_latest_for_room(&self, room_id: i32) -> DomainResult<Option<BillingRecord>> {
        let model = billing_record::Entity::find()
            .filter(billing_record::Column::RoomId.eq(room_id))
            .order_by_desc(billing_record::Column::BillingMonth)
            .order_by_desc(billing_record::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_outstanding_for_room(&self, room_id: i32) -> DomainResult<Vec<BillingRecord>> {
        let models = billing_record::Entity::find()
            .filter(billing_record::Column::RoomId.eq(room_id))
            .filter(billing_record::Column::Status.is_in(OUTSTANDING_STATUSES))
            .order_by_desc(billing_record::Column::BillingMonth)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_outstanding_for_rooms(
        &self,
        room_ids: &[i32],
    ) -> DomainResult<Vec<BillingRecord>> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = billing_record::Entity::find()
            .filter(billing_record::Column::RoomId.is_in(room_ids.to_vec()))
            .filter(billing_record::Column::Status.is_in(OUTSTANDING_STATUSES))
            .order_by_desc(billing_record::Column::BillingMonth)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_recent_for_rooms(
        &self,
        room_ids: &[i32],
        limit: u64,
    ) -> DomainResult<Vec<BillingRecord>> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = billing_record::Entity::find()
            .filter(billing_record::Column::RoomId.is_in(room_ids.to_vec()))
            .order_by_desc(billing_record::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn total_due_for_room(&self, room_id: i32) -> DomainResult<Decimal> {
        // Sums run in Decimal on the application side; SQLite's SUM would
        // go through floating point.
        let models = billing_record::Entity::find()
            .filter(billing_record::Column::RoomId.eq(room_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.iter().map(|b| b.total).sum())
    }

    async fn save(&self, record: BillingRecord) -> DomainResult<BillingRecord> {
        let now = Utc::now();
        let model = billing_record::ActiveModel {
            id: Set(0),
            room_id: Set(record.room_id),
            billing_month: Set(record.billing_month),
            previous_units: Set(record.previous_units),
            current_units: Set(record.current_units),
            electricity: Set(record.electricity),
            water: Set(record.water),
            rent: Set(record.rent),
            waste: Set(record.waste),
            total: Set(record.total),
            total_paid: Set(record.total_paid),
            payment_received_date: Set(record.payment_received_date),
            remarks: Set(record.remarks),
            status: Set(record.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            room_id = result.room_id,
            billing_month = %result.billing_month,
            total = %result.total,
            "Billing record saved"
        );
        Ok(entity_to_domain(result))
    }

    async fn update(&self, record: BillingRecord) -> DomainResult<()> {
        let existing = billing_record::Entity::find_by_id(record.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "BillingRecord",
                field: "id",
                value: record.id.to_string(),
            });
        };

        let model = billing_record::ActiveModel {
            id: Set(record.id),
            room_id: Set(record.room_id),
            billing_month: Set(record.billing_month),
            previous_units: Set(record.previous_units),
            current_units: Set(record.current_units),
            electricity: Set(record.electricity),
            water: Set(record.water),
            rent: Set(record.rent),
            waste: Set(record.waste),
            total: Set(record.total),
            total_paid: Set(record.total_paid),
            payment_received_date: Set(record.payment_received_date),
            remarks: Set(record.remarks),
            status: Set(record.status.as_str().to_string()),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = billing_record::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "BillingRecord",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
