//! Create payment_receipts table

use sea_orm_migration::prelude::*;

use super::m20250301_000004_create_tenants::Tenants;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentReceipts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentReceipts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::TenantId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::Amount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::ReceivedOn)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentReceipts::Remark).text())
                    .col(
                        ColumnDef::new(PaymentReceipts::Status)
                            .string()
                            .not_null()
                            .default("Unpaid"),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_receipts_tenant")
                            .from(PaymentReceipts::Table, PaymentReceipts::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_receipts_tenant")
                    .table(PaymentReceipts::Table)
                    .col(PaymentReceipts::TenantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentReceipts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PaymentReceipts {
    Table,
    Id,
    TenantId,
    Amount,
    ReceivedOn,
    Remark,
    Status,
    CreatedAt,
    UpdatedAt,
}
