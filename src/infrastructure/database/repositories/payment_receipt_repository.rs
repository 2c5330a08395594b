//! SeaORM implementation of PaymentReceiptRepository
//!
//! Every write runs insert/update/delete plus the full ledger restamp
//! inside one database transaction, so two concurrent receipt writes for
//! the same tenant cannot leave receipts with diverging status stamps.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionError, TransactionTrait,
};
use tracing::info;

use crate::domain::billing::PaymentStatus;
use crate::domain::receipt::{LedgerPosition, PaymentReceipt, PaymentReceiptRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{billing_record, payment_receipt, tenant};

use super::db_err;

fn entity_to_domain(r: payment_receipt::Model) -> PaymentReceipt {
    PaymentReceipt {
        id: r.id,
        tenant_id: r.tenant_id,
        amount: r.amount,
        received_on: r.received_on,
        remark: r.remark,
        status: PaymentStatus::parse(&r.status),
        created_at: r.created_at,
        updated_at: r.updated_at,
    }
}

fn txn_err(e: TransactionError<DomainError>) -> DomainError {
    match e {
        TransactionError::Connection(e) => db_err(e),
        TransactionError::Transaction(e) => e,
    }
}

/// Recompute the tenant's aggregate position and stamp it onto every
/// receipt of the tenant. Must run inside the surrounding transaction.
async fn restamp_ledger(
    txn: &DatabaseTransaction,
    tenant_id: i32,
) -> Result<LedgerPosition, DomainError> {
    let tenant_row = tenant::Entity::find_by_id(tenant_id)
        .one(txn)
        .await
        .map_err(db_err)?
        .ok_or(DomainError::NotFound {
            entity: "Tenant",
            field: "id",
            value: tenant_id.to_string(),
        })?;

    let bills = billing_record::Entity::find()
        .filter(billing_record::Column::RoomId.eq(tenant_row.room_id))
        .all(txn)
        .await
        .map_err(db_err)?;
    let total_due: Decimal = bills.iter().map(|b| b.total).sum();

    let receipts = payment_receipt::Entity::find()
        .filter(payment_receipt::Column::TenantId.eq(tenant_id))
        .all(txn)
        .await
        .map_err(db_err)?;
    let total_received: Decimal = receipts.iter().map(|r| r.amount).sum();

    let position = LedgerPosition::derive(total_due, total_received);

    payment_receipt::Entity::update_many()
        .col_expr(
            payment_receipt::Column::Status,
            Expr::value(position.status.as_str()),
        )
        .filter(payment_receipt::Column::TenantId.eq(tenant_id))
        .exec(txn)
        .await
        .map_err(db_err)?;

    Ok(position)
}

pub struct SeaOrmPaymentReceiptRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentReceiptRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentReceiptRepository for SeaOrmPaymentReceiptRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentReceipt>> {
        let model = payment_receipt::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_for_tenant(&self, tenant_id: i32) -> DomainResult<Vec<PaymentReceipt>> {
        let models = payment_receipt::Entity::find()
            .filter(payment_receipt::Column::TenantId.eq(tenant_id))
            .order_by_desc(payment_receipt::Column::ReceivedOn)
            .order_by_desc(payment_receipt::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(
        &self,
        receipt: PaymentReceipt,
    ) -> DomainResult<(PaymentReceipt, LedgerPosition)> {
        let result = self
            .db
            .transaction::<_, (payment_receipt::Model, LedgerPosition), DomainError>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let model = payment_receipt::ActiveModel {
                        id: Set(0),
                        tenant_id: Set(receipt.tenant_id),
                        amount: Set(receipt.amount),
                        received_on: Set(receipt.received_on),
                        remark: Set(receipt.remark),
                        // placeholder; the restamp below derives the real label
                        status: Set(PaymentStatus::Unpaid.as_str().to_string()),
                        created_at: Set(now),
                        updated_at: Set(now),
                    };
                    let inserted = model.insert(txn).await.map_err(db_err)?;

                    let position = restamp_ledger(txn, inserted.tenant_id).await?;
                    Ok((inserted, position))
                })
            })
            .await
            .map_err(txn_err)?;

        let (inserted, position) = result;
        info!(
            tenant_id = inserted.tenant_id,
            amount = %inserted.amount,
            status = position.status.as_str(),
            "Payment receipt recorded"
        );

        let mut stored = entity_to_domain(inserted);
        stored.status = position.status;
        Ok((stored, position))
    }

    async fn update(
        &self,
        receipt: PaymentReceipt,
    ) -> DomainResult<(PaymentReceipt, LedgerPosition)> {
        let result = self
            .db
            .transaction::<_, (payment_receipt::Model, LedgerPosition), DomainError>(|txn| {
                Box::pin(async move {
                    let existing = payment_receipt::Entity::find_by_id(receipt.id)
                        .one(txn)
                        .await
                        .map_err(db_err)?
                        .ok_or(DomainError::NotFound {
                            entity: "PaymentReceipt",
                            field: "id",
                            value: receipt.id.to_string(),
                        })?;

                    let mut model: payment_receipt::ActiveModel = existing.into();
                    model.amount = Set(receipt.amount);
                    model.received_on = Set(receipt.received_on);
                    model.remark = Set(receipt.remark);
                    model.updated_at = Set(Utc::now());
                    let updated = model.update(txn).await.map_err(db_err)?;

                    let position = restamp_ledger(txn, updated.tenant_id).await?;
                    Ok((updated, position))
                })
            })
            .await
            .map_err(txn_err)?;

        let (updated, position) = result;
        info!(
            receipt_id = updated.id,
            tenant_id = updated.tenant_id,
            status = position.status.as_str(),
            "Payment receipt updated"
        );

        let mut stored = entity_to_domain(updated);
        stored.status = position.status;
        Ok((stored, position))
    }

    async fn delete(&self, id: i32) -> DomainResult<LedgerPosition> {
        let position = self
            .db
            .transaction::<_, LedgerPosition, DomainError>(|txn| {
                Box::pin(async move {
                    let existing = payment_receipt::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(db_err)?
                        .ok_or(DomainError::NotFound {
                            entity: "PaymentReceipt",
                            field: "id",
                            value: id.to_string(),
                        })?;

                    let tenant_id = existing.tenant_id;
                    payment_receipt::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(db_err)?;

                    restamp_ledger(txn, tenant_id).await
                })
            })
            .await
            .map_err(txn_err)?;

        info!(receipt_id = id, "Payment receipt deleted");
        Ok(position)
    }

    async fn ledger_position(&self, tenant_id: i32) -> DomainResult<LedgerPosition> {
        let tenant_row = tenant::Entity::find_by_id(tenant_id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(DomainError::NotFound {
                entity: "Tenant",
                field: "id",
                value: tenant_id.to_string(),
            })?;

        let bills = billing_record::Entity::find()
            .filter(billing_record::Column::RoomId.eq(tenant_row.room_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let total_due: Decimal = bills.iter().map(|b| b.total).sum();

        let receipts = payment_receipt::Entity::find()
            .filter(payment_receipt::Column::TenantId.eq(tenant_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let total_received: Decimal = receipts.iter().map(|r| r.amount).sum();

        Ok(LedgerPosition::derive(total_due, total_received))
    }
}
