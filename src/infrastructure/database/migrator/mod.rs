//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_houses;
mod m20250301_000003_create_rooms;
mod m20250301_000004_create_tenants;
mod m20250301_000005_create_billing_records;
mod m20250301_000006_create_payment_receipts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_houses::Migration),
            Box::new(m20250301_000003_create_rooms::Migration),
            Box::new(m20250301_000004_create_tenants::Migration),
            Box::new(m20250301_000005_create_billing_records::Migration),
            Box::new(m20250301_000006_create_payment_receipts::Migration),
        ]
    }
}
