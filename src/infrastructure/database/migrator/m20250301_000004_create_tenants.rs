//! Create tenants table

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
                    .table(Tenants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tenants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tenants::RoomId).integer().not_null())
                    .col(ColumnDef::new(Tenants::Name).string().not_null())
                    .col(ColumnDef::new(Tenants::Contact).string().not_null())
                    .col(ColumnDef::new(Tenants::Email).string())
                    .col(
                        ColumnDef::new(Tenants::EmailVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Tenants::MoveInDate).date().not_null())
                    .col(
                        ColumnDef::new(Tenants::RentPrice)
                            .decimal_len(10, 2)
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tenants::ElectricityPricePerUnit)
                            .decimal_len(10, 2)
                            .not_null()
                            .default("15.00"),
                    )
                    .col(
                        ColumnDef::new(Tenants::WaterPrice)
                            .decimal_len(10, 2)
                            .not_null()
                            .default("200.00"),
                    )
                    .col(
                        ColumnDef::new(Tenants::WastePrice)
                            .decimal_len(10, 2)
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tenants::InitialUnit)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tenants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tenants::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenants_room")
                            .from(Tenants::Table, Tenants::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One tenant per room
        manager
            .create_index(
                Index::create()
                    .name("idx_tenants_room")
                    .table(Tenants::Table)
                    .col(Tenants::RoomId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tenants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tenants {
    Table,
    Id,
    RoomId,
    Name,
    Contact,
    Email,
    EmailVerified,
    MoveInDate,
    RentPrice,
    ElectricityPricePerUnit,
    WaterPrice,
    WastePrice,
    InitialUnit,
    CreatedAt,
    UpdatedAt,
}
