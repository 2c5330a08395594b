//! Core business entities, calculation rules and repository traits

pub mod billing;
pub mod house;
pub mod receipt;
pub mod repositories;
pub mod room;
pub mod tenant;
pub mod user;

pub use crate::shared::{DomainError, DomainResult};

pub use billing::{
    calculate_charges, classify_aggregate, classify_bill, current_billing_month, BillingRecord,
    ChargeBreakdown, PaymentStatus, PricingSnapshot,
};
pub use house::House;
pub use receipt::{LedgerPosition, PaymentReceipt};
pub use repositories::RepositoryProvider;
pub use room::Room;
pub use tenant::Tenant;
pub use user::{User, UserRole};
