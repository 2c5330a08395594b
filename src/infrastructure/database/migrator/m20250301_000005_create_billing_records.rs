//! Create billing_records table

use sea_orm_migration::prelude::*;

use super::m20250301_000003_create_rooms::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillingRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BillingRecords::RoomId).integer().not_null())
                    .col(
                        ColumnDef::new(BillingRecords::BillingMonth)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::PreviousUnits)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::CurrentUnits)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::Electricity)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::Water)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::Rent)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::Waste)
                            .decimal_len(10, 2)
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::Total)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::TotalPaid)
                            .decimal_len(10, 2)
                            .not_null()
                            .default("0.00"),
                    )
                    .col(ColumnDef::new(BillingRecords::PaymentReceivedDate).string())
                    .col(ColumnDef::new(BillingRecords::Remarks).text())
                    .col(
                        ColumnDef::new(BillingRecords::Status)
                            .string()
                            .not_null()
                            .default("Unpaid"),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_billing_records_room")
                            .from(BillingRecords::Table, BillingRecords::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_billing_records_room_month")
                    .table(BillingRecords::Table)
                    .col(BillingRecords::RoomId)
                    .col(BillingRecords::BillingMonth)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_billing_records_status")
                    .table(BillingRecords::Table)
                    .col(BillingRecords::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillingRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BillingRecords {
    Table,
    Id,
    RoomId,
    BillingMonth,
    PreviousUnits,
    CurrentUnits,
    Electricity,
    Water,
    Rent,
    Waste,
    Total,
    TotalPaid,
    PaymentReceivedDate,
    Remarks,
    Status,
    CreatedAt,
    UpdatedAt,
}
