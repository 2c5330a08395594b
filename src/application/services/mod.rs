//! Application services

mod access;
pub mod billing;
pub mod dashboard;
pub mod ledger;
pub mod notification;
pub mod property;
pub mod tenant;

pub use billing::{BillingRecordUpdate, BillingService, NewBillingRecord};
pub use dashboard::{DashboardService, DashboardSummary};
pub use ledger::LedgerService;
pub use notification::{EmailDispatch, NotificationService};
pub use property::{HouseOverview, PropertyService};
pub use tenant::{NewTenant, TenantService, TenantUpdate};
