//! Owner scoping helpers
//!
//! Every house, room, tenant and bill belongs to exactly one landlord
//! account; lookups on behalf of a user must walk the ownership chain.
//! A resource owned by someone else reports NotFound, not Forbidden, so
//! the API does not leak which ids exist.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, House, RepositoryProvider, Room, Tenant};

pub(crate) async fn owned_house(
    repos: &Arc<dyn RepositoryProvider>,
    owner_id: &str,
    house_id: i32,
) -> DomainResult<House> {
    let house = repos
        .houses()
        .find_by_id(house_id)
        .await?
        .filter(|h| h.owner_id == owner_id);
    house.ok_or(DomainError::NotFound {
        entity: "House",
        field: "id",
        value: house_id.to_string(),
    })
}

pub(crate) async fn owned_room(
    repos: &Arc<dyn RepositoryProvider>,
    owner_id: &str,
    room_id: i32,
) -> DomainResult<(Room, House)> {
    let room = repos
        .rooms()
        .find_by_id(room_id)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "Room",
            field: "id",
            value: room_id.to_string(),
        })?;
    let house = owned_house(repos, owner_id, room.house_id)
        .await
        .map_err(|_| DomainError::NotFound {
            entity: "Room",
            field: "id",
            value: room_id.to_string(),
        })?;
    Ok((room, house))
}

pub(crate) async fn owned_tenant(
    repos: &Arc<dyn RepositoryProvider>,
    owner_id: &str,
    tenant_id: i32,
) -> DomainResult<(Tenant, Room, House)> {
    let tenant = repos
        .tenants()
        .find_by_id(tenant_id)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "Tenant",
            field: "id",
            value: tenant_id.to_string(),
        })?;
    let (room, house) = owned_room(repos, owner_id, tenant.room_id)
        .await
        .map_err(|_| DomainError::NotFound {
            entity: "Tenant",
            field: "id",
            value: tenant_id.to_string(),
        })?;
    Ok((tenant, room, house))
}
