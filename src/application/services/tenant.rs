//! Tenant service: assignment, pricing updates, email verification state

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{DomainError, DomainResult, House, RepositoryProvider, Room, Tenant};

use super::access::{owned_room, owned_tenant};

/// Input for assigning a tenant to a room.
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub room_id: i32,
    pub name: String,
    pub contact: String,
    pub email: Option<String>,
    pub move_in_date: NaiveDate,
    pub rent_price: Decimal,
    pub electricity_price_per_unit: Decimal,
    pub water_price: Decimal,
    pub waste_price: Decimal,
    pub initial_unit: i64,
}

/// Partial tenant update; `email: Some(...)` resets verification.
#[derive(Debug, Clone, Default)]
pub struct TenantUpdate {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<Option<String>>,
    pub move_in_date: Option<NaiveDate>,
    pub rent_price: Option<Decimal>,
    pub electricity_price_per_unit: Option<Decimal>,
    pub water_price: Option<Decimal>,
    pub waste_price: Option<Decimal>,
    pub initial_unit: Option<i64>,
}

pub struct TenantService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TenantService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Assign a tenant to a vacant room and mark the room occupied.
    pub async fn assign(&self, owner_id: &str, input: NewTenant) -> DomainResult<Tenant> {
        let (mut room, _house) = owned_room(&self.repos, owner_id, input.room_id).await?;

        if self.repos.tenants().find_by_room(room.id).await?.is_some() {
            return Err(DomainError::Conflict(
                "This room already has a tenant.".to_string(),
            ));
        }

        let tenant = Tenant {
            id: 0,
            room_id: room.id,
            name: input.name,
            contact: input.contact,
            email: input.email,
            email_verified: false,
            move_in_date: input.move_in_date,
            rent_price: input.rent_price.round_dp(2),
            electricity_price_per_unit: input.electricity_price_per_unit.round_dp(2),
            water_price: input.water_price.round_dp(2),
            waste_price: input.waste_price.round_dp(2),
            initial_unit: input.initial_unit,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let saved = self.repos.tenants().save(tenant).await?;

        room.is_occupied = true;
        self.repos.rooms().update(room).await?;
        info!(tenant_id = saved.id, room_id = saved.room_id, "Tenant assigned");

        Ok(saved)
    }

    pub async fn get(
        &self,
        owner_id: &str,
        tenant_id: i32,
    ) -> DomainResult<(Tenant, Room, House)> {
        owned_tenant(&self.repos, owner_id, tenant_id).await
    }

    pub async fn find_for_room(
        &self,
        owner_id: &str,
        room_id: i32,
    ) -> DomainResult<Option<Tenant>> {
        let (room, _house) = owned_room(&self.repos, owner_id, room_id).await?;
        self.repos.tenants().find_by_room(room.id).await
    }

    /// Update a tenant. Pricing edits never rewrite issued bills.
    /// Changing the email resets `email_verified`; the returned flag
    /// tells the caller whether the address changed (to trigger a fresh
    /// verification mail).
    pub async fn update(
        &self,
        owner_id: &str,
        tenant_id: i32,
        update: TenantUpdate,
    ) -> DomainResult<(Tenant, bool)> {
        let (mut tenant, _room, _house) = owned_tenant(&self.repos, owner_id, tenant_id).await?;

        let mut email_changed = false;
        if let Some(email) = update.email {
            if email != tenant.email {
                tenant.email = email;
                tenant.email_verified = false;
                email_changed = true;
            }
        }
        if let Some(name) = update.name {
            tenant.name = name;
        }
        if let Some(contact) = update.contact {
            tenant.contact = contact;
        }
        if let Some(move_in_date) = update.move_in_date {
            tenant.move_in_date = move_in_date;
        }
        if let Some(rent_price) = update.rent_price {
            tenant.rent_price = rent_price.round_dp(2);
        }
        if let Some(price) = update.electricity_price_per_unit {
            tenant.electricity_price_per_unit = price.round_dp(2);
        }
        if let Some(water_price) = update.water_price {
            tenant.water_price = water_price.round_dp(2);
        }
        if let Some(waste_price) = update.waste_price {
            tenant.waste_price = waste_price.round_dp(2);
        }
        if let Some(initial_unit) = update.initial_unit {
            tenant.initial_unit = initial_unit;
        }

        self.repos.tenants().update(tenant.clone()).await?;
        Ok((tenant, email_changed))
    }

    /// Record the outcome of a delivery-based verification attempt.
    pub async fn mark_email_verified(
        &self,
        owner_id: &str,
        tenant_id: i32,
        verified: bool,
    ) -> DomainResult<Tenant> {
        let (mut tenant, _room, _house) = owned_tenant(&self.repos, owner_id, tenant_id).await?;
        tenant.email_verified = verified;
        self.repos.tenants().update(tenant.clone()).await?;
        info!(tenant_id, verified, "Tenant email verification updated");
        Ok(tenant)
    }

    /// Remove the tenant and vacate the room.
    pub async fn remove(&self, owner_id: &str, tenant_id: i32) -> DomainResult<()> {
        let (tenant, mut room, _house) = owned_tenant(&self.repos, owner_id, tenant_id).await?;
        self.repos.tenants().delete(tenant.id).await?;
        room.is_occupied = false;
        self.repos.rooms().update(room).await?;
        info!(tenant_id, "Tenant removed; room vacated");
        Ok(())
    }
}
