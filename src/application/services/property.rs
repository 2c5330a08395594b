//! Property service for houses and rooms

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, House, RepositoryProvider, Room};

use super::access::{owned_house, owned_room};

/// A house together with room occupancy counts.
#[derive(Debug, Clone)]
pub struct HouseOverview {
    pub house: House,
    pub rooms_count: usize,
    pub occupied_count: usize,
    pub vacant_count: usize,
}

pub struct PropertyService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PropertyService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Houses ─────────────────────────────────────────────────

    pub async fn create_house(&self, owner_id: &str, name: &str) -> DomainResult<House> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "House name is required.".to_string(),
            ));
        }

        let house = House {
            id: 0,
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        self.repos.houses().save(house).await
    }

    pub async fn list_houses(&self, owner_id: &str) -> DomainResult<Vec<HouseOverview>> {
        let houses = self.repos.houses().find_for_owner(owner_id).await?;
        let mut overviews = Vec::with_capacity(houses.len());
        for house in houses {
            let rooms = self.repos.rooms().find_by_house(house.id).await?;
            let occupied_count = rooms.iter().filter(|r| r.is_occupied).count();
            overviews.push(HouseOverview {
                rooms_count: rooms.len(),
                occupied_count,
                vacant_count: rooms.len() - occupied_count,
                house,
            });
        }
        Ok(overviews)
    }

    pub async fn get_house(&self, owner_id: &str, house_id: i32) -> DomainResult<House> {
        owned_house(&self.repos, owner_id, house_id).await
    }

    pub async fn rename_house(
        &self,
        owner_id: &str,
        house_id: i32,
        name: &str,
    ) -> DomainResult<House> {
        let mut house = owned_house(&self.repos, owner_id, house_id).await?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "House name is required.".to_string(),
            ));
        }
        house.name = name.to_string();
        self.repos.houses().update(house.clone()).await?;
        Ok(house)
    }

    /// Flip the active flag; returns the new state.
    pub async fn toggle_house_status(&self, owner_id: &str, house_id: i32) -> DomainResult<bool> {
        let mut house = owned_house(&self.repos, owner_id, house_id).await?;
        house.is_active = !house.is_active;
        let is_active = house.is_active;
        self.repos.houses().update(house).await?;
        info!(house_id, is_active, "House status toggled");
        Ok(is_active)
    }

    pub async fn delete_house(&self, owner_id: &str, house_id: i32) -> DomainResult<()> {
        let house = owned_house(&self.repos, owner_id, house_id).await?;
        self.repos.houses().delete(house.id).await
    }

    // ── Rooms ──────────────────────────────────────────────────

    pub async fn add_room(
        &self,
        owner_id: &str,
        house_id: i32,
        room_number: &str,
        room_name: Option<String>,
    ) -> DomainResult<Room> {
        let house = owned_house(&self.repos, owner_id, house_id).await?;
        let room_number = room_number.trim();
        if room_number.is_empty() {
            return Err(DomainError::Validation(
                "Room number is required.".to_string(),
            ));
        }

        let exists = self
            .repos
            .rooms()
            .find_by_house(house.id)
            .await?
            .iter()
            .any(|r| r.room_number == room_number);
        if exists {
            return Err(DomainError::Conflict(format!(
                "Room {} already exists in {}",
                room_number, house.name
            )));
        }

        let room = Room {
            id: 0,
            house_id: house.id,
            room_number: room_number.to_string(),
            room_name,
            is_occupied: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        self.repos.rooms().save(room).await
    }

    pub async fn list_rooms(&self, owner_id: &str, house_id: i32) -> DomainResult<Vec<Room>> {
        let house = owned_house(&self.repos, owner_id, house_id).await?;
        self.repos.rooms().find_by_house(house.id).await
    }

    pub async fn get_room(&self, owner_id: &str, room_id: i32) -> DomainResult<(Room, House)> {
        owned_room(&self.repos, owner_id, room_id).await
    }

    pub async fn update_room(
        &self,
        owner_id: &str,
        room_id: i32,
        room_number: Option<String>,
        room_name: Option<Option<String>>,
    ) -> DomainResult<Room> {
        let (mut room, _house) = owned_room(&self.repos, owner_id, room_id).await?;
        if let Some(room_number) = room_number {
            let room_number = room_number.trim().to_string();
            if room_number.is_empty() {
                return Err(DomainError::Validation(
                    "Room number is required.".to_string(),
                ));
            }
            room.room_number = room_number;
        }
        if let Some(room_name) = room_name {
            room.room_name = room_name;
        }
        self.repos.rooms().update(room.clone()).await?;
        Ok(room)
    }

    pub async fn delete_room(&self, owner_id: &str, room_id: i32) -> DomainResult<()> {
        let (room, _house) = owned_room(&self.repos, owner_id, room_id).await?;
        self.repos.rooms().delete(room.id).await
    }
}
