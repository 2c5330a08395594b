//! SeaORM implementation of TenantRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::info;

use crate::domain::tenant::{Tenant, TenantRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::tenant;

use super::db_err;

fn entity_to_domain(t: tenant::Model) -> Tenant {
    Tenant {
        id: t.id,
        room_id: t.room_id,
        name: t.name,
        contact: t.contact,
        email: t.email,
        email_verified: t.email_verified,
        move_in_date: t.move_in_date,
        rent_price: t.rent_price,
        electricity_price_per_unit: t.electricity_price_per_unit,
        water_price: t.water_price,
        waste_price: t.waste_price,
        initial_unit: t.initial_unit,
        created_at: t.created_at,
        updated_at: t.updated_at,
    }
}

pub struct SeaOrmTenantRepository {
    db: DatabaseConnection,
}

impl SeaOrmTenantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TenantRepository for SeaOrmTenantRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Tenant>> {
        let model = tenant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_room(&self, room_id: i32) -> DomainResult<Option<Tenant>> {
        let model = tenant::Entity::find()
            .filter(tenant::Column::RoomId.eq(room_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_rooms(&self, room_ids: &[i32]) -> DomainResult<Vec<Tenant>> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = tenant::Entity::find()
            .filter(tenant::Column::RoomId.is_in(room_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, t: Tenant) -> DomainResult<Tenant> {
        let now = Utc::now();
        let model = tenant::ActiveModel {
            id: Set(0),
            room_id: Set(t.room_id),
            name: Set(t.name),
            contact: Set(t.contact),
            email: Set(t.email),
            email_verified: Set(t.email_verified),
            move_in_date: Set(t.move_in_date),
            rent_price: Set(t.rent_price),
            electricity_price_per_unit: Set(t.electricity_price_per_unit),
            water_price: Set(t.water_price),
            waste_price: Set(t.waste_price),
            initial_unit: Set(t.initial_unit),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Tenant saved: {} (room {})", result.name, result.room_id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, t: Tenant) -> DomainResult<()> {
        let existing = tenant::Entity::find_by_id(t.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Tenant",
                field: "id",
                value: t.id.to_string(),
            });
        };

        let model = tenant::ActiveModel {
            id: Set(t.id),
            room_id: Set(t.room_id),
            name: Set(t.name),
            contact: Set(t.contact),
            email: Set(t.email),
            email_verified: Set(t.email_verified),
            move_in_date: Set(t.move_in_date),
            rent_price: Set(t.rent_price),
            electricity_price_per_unit: Set(t.electricity_price_per_unit),
            water_price: Set(t.water_price),
            waste_price: Set(t.waste_price),
            initial_unit: Set(t.initial_unit),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = tenant::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Tenant",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
