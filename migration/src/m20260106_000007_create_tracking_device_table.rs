use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000005_create_asset_table::Asset;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackingDevice::Table)
                    .if_not_exists()
                    .col(string(TrackingDevice::Id).primary_key())
                    .col(string(TrackingDevice::Name))
                    .col(string_null(TrackingDevice::Model))
                    .col(string_null(TrackingDevice::PhoneNumber))
                    .col(string_null(TrackingDevice::OsVersion))
                    .col(string_null(TrackingDevice::AssetId))
                    .col(integer_null(TrackingDevice::LatestPositionId))
                    .col(boolean(TrackingDevice::Deleted).default(false))
                    .col(
                        timestamp_with_time_zone(TrackingDevice::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracking_device_asset_id")
                            .from(TrackingDevice::Table, TrackingDevice::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracking_device_asset_id")
                    .table(TrackingDevice::Table)
                    .col(TrackingDevice::AssetId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackingDevice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackingDevice {
    Table,
    Id,
    Name,
    Model,
    PhoneNumber,
    OsVersion,
    AssetId,
    LatestPositionId,
    Deleted,
    CreatedAt,
}
