//! SeaORM entities

pub mod billing_record;
pub mod house;
pub mod payment_receipt;
pub mod room;
pub mod tenant;
pub mod user;
