//! Dashboard service: landlord-wide aggregates

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{BillingRecord, DomainResult, RepositoryProvider};

use super::property::HouseOverview;
use super::PropertyService;

const RECENT_BILLS_LIMIT: u64 = 10;

/// Aggregated figures for one landlord account.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub houses: Vec<HouseOverview>,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub vacant_rooms: usize,
    /// Σ rent_price over all tenants
    pub monthly_income: Decimal,
    pub annual_income: Decimal,
    /// Σ (total - total_paid) over outstanding bills
    pub outstanding_amount: Decimal,
    pub recent_bills: Vec<BillingRecord>,
}

pub struct DashboardService {
    repos: Arc<dyn RepositoryProvider>,
    property: Arc<PropertyService>,
}

impl DashboardService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, property: Arc<PropertyService>) -> Self {
        Self { repos, property }
    }

    pub async fn summary(&self, owner_id: &str) -> DomainResult<DashboardSummary> {
        let houses = self.property.list_houses(owner_id).await?;

        let mut room_ids = Vec::new();
        for overview in &houses {
            let rooms = self.repos.rooms().find_by_house(overview.house.id).await?;
            room_ids.extend(rooms.iter().map(|r| r.id));
        }

        let total_rooms: usize = houses.iter().map(|h| h.rooms_count).sum();
        let occupied_rooms: usize = houses.iter().map(|h| h.occupied_count).sum();

        let tenants = self.repos.tenants().find_by_rooms(&room_ids).await?;
        let monthly_income: Decimal = tenants.iter().map(|t| t.rent_price).sum();
        let annual_income = monthly_income * Decimal::from(12);

        let outstanding = self
            .repos
            .billing_records()
            .find_outstanding_for_rooms(&room_ids)
            .await?;
        let outstanding_amount: Decimal = outstanding.iter().map(|b| b.outstanding()).sum();

        let recent_bills = self
            .repos
            .billing_records()
            .find_recent_for_rooms(&room_ids, RECENT_BILLS_LIMIT)
            .await?;

        Ok(DashboardSummary {
            total_rooms,
            occupied_rooms,
            vacant_rooms: total_rooms - occupied_rooms,
            monthly_income,
            annual_income,
            outstanding_amount,
            recent_bills,
            houses,
        })
    }
}
