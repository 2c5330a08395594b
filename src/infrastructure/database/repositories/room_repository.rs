//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::room::{Room, RoomRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::room;

use super::db_err;

fn entity_to_domain(r: room::Model) -> Room {
    Room {
        id: r.id,
        house_id: r.house_id,
        room_number: r.room_number,
        room_name: r.room_name,
        is_occupied: r.is_occupied,
        created_at: r.created_at,
        updated_at: r.updated_at,
    }
}

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_house(&self, house_id: i32) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .filter(room::Column::HouseId.eq(house_id))
            .order_by_asc(room::Column::RoomNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, r: Room) -> DomainResult<Room> {
        let now = Utc::now();
        let model = room::ActiveModel {
            id: Set(0),
            house_id: Set(r.house_id),
            room_number: Set(r.room_number),
            room_name: Set(r.room_name),
            is_occupied: Set(r.is_occupied),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(result))
    }

    async fn update(&self, r: Room) -> DomainResult<()> {
        let existing = room::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: r.id.to_string(),
            });
        };

        let model = room::ActiveModel {
            id: Set(r.id),
            house_id: Set(r.house_id),
            room_number: Set(r.room_number),
            room_name: Set(r.room_name),
            is_occupied: Set(r.is_occupied),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = room::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
