//! Billing records: charge calculation and payment-status classification

pub mod model;
pub mod repository;

pub use model::{
    calculate_charges, classify_aggregate, classify_bill, current_billing_month, BillingRecord,
    ChargeBreakdown, PaymentStatus, PricingSnapshot,
};
pub use repository::BillingRecordRepository;
