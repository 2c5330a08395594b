//! Dashboard DTOs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::DashboardSummary;
use crate::interfaces::http::modules::billing::BillingRecordResponse;
use crate::interfaces::http::modules::houses::HouseOverviewResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub houses: Vec<HouseOverviewResponse>,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub vacant_rooms: usize,
    /// Σ rent over all tenants
    pub monthly_income: Decimal,
    pub annual_income: Decimal,
    /// Σ (total - total_paid) over unpaid and partially paid bills
    pub outstanding_amount: Decimal,
    pub recent_bills: Vec<BillingRecordResponse>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(s: DashboardSummary) -> Self {
        Self {
            houses: s.houses.into_iter().map(Into::into).collect(),
            total_rooms: s.total_rooms,
            occupied_rooms: s.occupied_rooms,
            vacant_rooms: s.vacant_rooms,
            monthly_income: s.monthly_income,
            annual_income: s.annual_income,
            outstanding_amount: s.outstanding_amount,
            recent_bills: s.recent_bills.into_iter().map(Into::into).collect(),
        }
    }
}
