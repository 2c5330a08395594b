//! Payment receipts and the tenant ledger

pub mod model;
pub mod repository;

pub use model::{LedgerPosition, PaymentReceipt};
pub use repository::PaymentReceiptRepository;
