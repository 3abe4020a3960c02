use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000005_create_asset_table::Asset,
    m20260106_000007_create_tracking_device_table::TrackingDevice,
    m20260107_000008_create_trip_table::Trip,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackingPoint::Table)
                    .if_not_exists()
                    .col(pk_auto(TrackingPoint::Id))
                    .col(string(TrackingPoint::TrackingDeviceId))
                    .col(string(TrackingPoint::AssetId))
                    .col(integer_null(TrackingPoint::TripId))
                    .col(double(TrackingPoint::Latitude))
                    .col(double(TrackingPoint::Longitude))
                    .col(double_null(TrackingPoint::Altitude))
                    .col(double_null(TrackingPoint::Accuracy))
                    .col(double_null(TrackingPoint::Speed))
                    .col(double_null(TrackingPoint::Heading))
                    .col(timestamp_with_time_zone(TrackingPoint::DeviceTimestampUtc))
                    .col(
                        timestamp_with_time_zone(TrackingPoint::CreatedAtTimeUtc)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(TrackingPoint::Debug).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracking_point_tracking_device_id")
                            .from(TrackingPoint::Table, TrackingPoint::TrackingDeviceId)
                            .to(TrackingDevice::Table, TrackingDevice::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracking_point_asset_id")
                            .from(TrackingPoint::Table, TrackingPoint::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracking_point_trip_id")
                            .from(TrackingPoint::Table, TrackingPoint::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracking_point_asset_id")
                    .table(TrackingPoint::Table)
                    .col(TrackingPoint::AssetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracking_point_trip_id")
                    .table(TrackingPoint::Table)
                    .col(TrackingPoint::TripId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackingPoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackingPoint {
    Table,
    Id,
    TrackingDeviceId,
    AssetId,
    TripId,
    Latitude,
    Longitude,
    Altitude,
    Accuracy,
    Speed,
    Heading,
    DeviceTimestampUtc,
    CreatedAtTimeUtc,
    Debug,
}
