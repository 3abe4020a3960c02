use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000005_create_asset_table::Asset, m20260106_000006_create_location_table::Location,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(string(Trip::AssetId))
                    .col(timestamp_with_time_zone(Trip::StartTimeUtc))
                    .col(timestamp_with_time_zone(Trip::EndTimeUtc))
                    .col(string_null(Trip::StartLocationId))
                    .col(string_null(Trip::EndLocationId))
                    .col(boolean(Trip::Deleted).default(false))
                    .col(
                        timestamp_with_time_zone(Trip::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_asset_id")
                            .from(Trip::Table, Trip::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_start_location_id")
                            .from(Trip::Table, Trip::StartLocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_end_location_id")
                            .from(Trip::Table, Trip::EndLocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    Table,
    Id,
    AssetId,
    StartTimeUtc,
    EndTimeUtc,
    StartLocationId,
    EndLocationId,
    Deleted,
    CreatedAt,
}
