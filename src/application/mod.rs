//! Business logic: services and outbound ports

pub mod ports;
pub mod services;

pub use services::{
    BillingRecordUpdate, BillingService, DashboardService, DashboardSummary, EmailDispatch,
    HouseOverview, LedgerService, NewBillingRecord, NewTenant, NotificationService,
    PropertyService, TenantService, TenantUpdate,
};
