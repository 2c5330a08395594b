//! Billing service for creating and maintaining billing records

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{
    calculate_charges, classify_bill, current_billing_month, BillingRecord, ChargeBreakdown,
    DomainError, DomainResult, RepositoryProvider, Room, Tenant,
};

use super::access::owned_room;

/// Input for creating a billing record. Charges are never accepted from
/// the caller; they are derived from meter readings and tenant pricing.
#[derive(Debug, Clone)]
pub struct NewBillingRecord {
    pub room_id: i32,
    /// Defaults to the current "YYYY-MM" period
    pub billing_month: Option<String>,
    pub current_units: i64,
    pub total_paid: Option<Decimal>,
    pub payment_received_date: Option<String>,
    pub remarks: Option<String>,
}

/// Partial update; only meter edits recompute charges.
#[derive(Debug, Clone, Default)]
pub struct BillingRecordUpdate {
    pub billing_month: Option<String>,
    pub current_units: Option<i64>,
    pub total_paid: Option<Decimal>,
    pub payment_received_date: Option<Option<String>>,
    pub remarks: Option<Option<String>>,
}

/// Service for billing operations
pub struct BillingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BillingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn room_with_tenant(
        &self,
        owner_id: &str,
        room_id: i32,
    ) -> DomainResult<(Room, Tenant)> {
        let (room, _house) = owned_room(&self.repos, owner_id, room_id).await?;
        let tenant = self
            .repos
            .tenants()
            .find_by_room(room.id)
            .await?
            .ok_or_else(|| {
                DomainError::Validation("Add a tenant before creating a bill.".to_string())
            })?;
        Ok((room, tenant))
    }

    /// The meter reading a new bill continues from: the room's latest
    /// record, or the tenant's initial reading for the first bill.
    pub async fn seed_previous_units(&self, room_id: i32, tenant: &Tenant) -> DomainResult<i64> {
        let last = self
            .repos
            .billing_records()
            .find_latest_for_room(room_id)
            .await?;
        Ok(last
            .map(|record| record.current_units)
            .unwrap_or(tenant.initial_unit))
    }

    /// Create a billing record for a room from the current meter reading.
    pub async fn create_record(
        &self,
        owner_id: &str,
        input: NewBillingRecord,
    ) -> DomainResult<BillingRecord> {
        let (room, tenant) = self.room_with_tenant(owner_id, input.room_id).await?;

        let previous_units = self.seed_previous_units(room.id, &tenant).await?;
        let breakdown = calculate_charges(previous_units, input.current_units, &tenant.pricing())?;

        let total_paid = input.total_paid.unwrap_or(Decimal::ZERO).round_dp(2);
        if total_paid.is_sign_negative() {
            return Err(DomainError::Validation(
                "Paid amount cannot be negative.".to_string(),
            ));
        }
        let status = classify_bill(breakdown.total, total_paid);

        let record = BillingRecord {
            id: 0,
            room_id: room.id,
            billing_month: input.billing_month.unwrap_or_else(current_billing_month),
            previous_units,
            current_units: input.current_units,
            electricity: breakdown.electricity,
            water: breakdown.water,
            rent: breakdown.rent,
            waste: breakdown.waste,
            total: breakdown.total,
            total_paid,
            payment_received_date: input.payment_received_date,
            remarks: input.remarks,
            status,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let saved = self.repos.billing_records().save(record).await?;
        info!(
            room_id = saved.room_id,
            billing_month = %saved.billing_month,
            total = %saved.total,
            status = saved.status.as_str(),
            "Billing record created"
        );
        Ok(saved)
    }

    /// Update a record. Editing `current_units` recomputes the charges
    /// from the tenant's *current* pricing; other edits leave the issued
    /// charges untouched. The status is always re-derived.
    pub async fn update_record(
        &self,
        owner_id: &str,
        record_id: i32,
        update: BillingRecordUpdate,
    ) -> DomainResult<BillingRecord> {
        let mut record = self.get_record(owner_id, record_id).await?;

        if let Some(current_units) = update.current_units {
            if current_units != record.current_units {
                let tenant = self
                    .repos
                    .tenants()
                    .find_by_room(record.room_id)
                    .await?
                    .ok_or(DomainError::NotFound {
                        entity: "Tenant",
                        field: "room_id",
                        value: record.room_id.to_string(),
                    })?;
                let breakdown =
                    calculate_charges(record.previous_units, current_units, &tenant.pricing())?;
                record.current_units = current_units;
                record.electricity = breakdown.electricity;
                record.water = breakdown.water;
                record.rent = breakdown.rent;
                record.waste = breakdown.waste;
                record.total = breakdown.total;
            }
        }

        if let Some(billing_month) = update.billing_month {
            record.billing_month = billing_month;
        }
        if let Some(total_paid) = update.total_paid {
            if total_paid.is_sign_negative() {
                return Err(DomainError::Validation(
                    "Paid amount cannot be negative.".to_string(),
                ));
            }
            record.total_paid = total_paid.round_dp(2);
        }
        if let Some(payment_received_date) = update.payment_received_date {
            record.payment_received_date = payment_received_date;
        }
        if let Some(remarks) = update.remarks {
            record.remarks = remarks;
        }

        record.status = classify_bill(record.total, record.total_paid);

        self.repos.billing_records().update(record.clone()).await?;
        info!(
            record_id = record.id,
            status = record.status.as_str(),
            "Billing record updated"
        );
        Ok(record)
    }

    /// Dry-run charge calculation for a room without persisting anything.
    pub async fn preview_charges(
        &self,
        owner_id: &str,
        room_id: i32,
        current_units: i64,
    ) -> DomainResult<(i64, ChargeBreakdown)> {
        let (room, tenant) = self.room_with_tenant(owner_id, room_id).await?;
        let previous_units = self.seed_previous_units(room.id, &tenant).await?;
        let breakdown = calculate_charges(previous_units, current_units, &tenant.pricing())?;
        Ok((previous_units, breakdown))
    }

    pub async fn get_record(&self, owner_id: &str, record_id: i32) -> DomainResult<BillingRecord> {
        let record = self
            .repos
            .billing_records()
            .find_by_id(record_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "BillingRecord",
                field: "id",
                value: record_id.to_string(),
            })?;
        // reject records of rooms owned by someone else
        owned_room(&self.repos, owner_id, record.room_id)
            .await
            .map_err(|_| DomainError::NotFound {
                entity: "BillingRecord",
                field: "id",
                value: record_id.to_string(),
            })?;
        Ok(record)
    }

    pub async fn list_for_room(
        &self,
        owner_id: &str,
        room_id: i32,
    ) -> DomainResult<Vec<BillingRecord>> {
        owned_room(&self.repos, owner_id, room_id).await?;
        self.repos.billing_records().find_by_room(room_id).await
    }

    pub async fn outstanding_for_room(
        &self,
        owner_id: &str,
        room_id: i32,
    ) -> DomainResult<Vec<BillingRecord>> {
        owned_room(&self.repos, owner_id, room_id).await?;
        self.repos
            .billing_records()
            .find_outstanding_for_room(room_id)
            .await
    }

    pub async fn delete_record(&self, owner_id: &str, record_id: i32) -> DomainResult<()> {
        let record = self.get_record(owner_id, record_id).await?;
        self.repos.billing_records().delete(record.id).await?;
        info!(record_id, "Billing record deleted");
        Ok(())
    }

    /// Resolve the tenant and display label used in bill emails.
    pub async fn email_context(
        &self,
        owner_id: &str,
        room_id: i32,
    ) -> DomainResult<(Tenant, String)> {
        let (room, house) = owned_room(&self.repos, owner_id, room_id).await?;
        let tenant = self
            .repos
            .tenants()
            .find_by_room(room.id)
            .await?
            .ok_or_else(|| {
                DomainError::Validation("Add a tenant before sending a bill email.".to_string())
            })?;
        let label = format!("{} - {}", house.name, room.room_number);
        Ok((tenant, label))
    }
}
