//! SeaORM implementation of HouseRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::house::{House, HouseRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::house;

use super::db_err;

fn entity_to_domain(h: house::Model) -> House {
    House {
        id: h.id,
        owner_id: h.owner_id,
        name: h.name,
        is_active: h.is_active,
        created_at: h.created_at,
        updated_at: h.updated_at,
    }
}

pub struct SeaOrmHouseRepository {
    db: DatabaseConnection,
}

impl SeaOrmHouseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HouseRepository for SeaOrmHouseRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<House>> {
        let model = house::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_for_owner(&self, owner_id: &str) -> DomainResult<Vec<House>> {
        let models = house::Entity::find()
            .filter(house::Column::OwnerId.eq(owner_id))
            .order_by_asc(house::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, h: House) -> DomainResult<House> {
        let now = Utc::now();
        let model = house::ActiveModel {
            id: Set(0),
            owner_id: Set(h.owner_id),
            name: Set(h.name),
            is_active: Set(h.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("House saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, h: House) -> DomainResult<()> {
        let existing = house::Entity::find_by_id(h.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "House",
                field: "id",
                value: h.id.to_string(),
            });
        };

        let model = house::ActiveModel {
            id: Set(h.id),
            owner_id: Set(h.owner_id),
            name: Set(h.name),
            is_active: Set(h.is_active),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = house::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "House",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
