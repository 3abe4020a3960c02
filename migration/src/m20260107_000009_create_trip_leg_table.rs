use sea_orm_migration::{prelude::*, schema::*};

use super::m20260107_000008_create_trip_table::Trip;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripLeg::Table)
                    .if_not_exists()
                    .col(pk_auto(TripLeg::Id))
                    .col(integer(TripLeg::TripId))
                    .col(timestamp_with_time_zone(TripLeg::StartTimeUtc))
                    .col(timestamp_with_time_zone(TripLeg::EndTimeUtc))
                    .col(json(TripLeg::Route))
                    .col(double(TripLeg::AverageSpeed).default(0.0))
                    .col(string_null(TripLeg::StartLocationId))
                    .col(string_null(TripLeg::EndLocationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_leg_trip_id")
                            .from(TripLeg::Table, TripLeg::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripLeg::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TripLeg {
    Table,
    Id,
    TripId,
    StartTimeUtc,
    EndTimeUtc,
    Route,
    AverageSpeed,
    StartLocationId,
    EndLocationId,
}
