use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(string(Location::Id).primary_key())
                    .col(string(Location::Name))
                    .col(string_null(Location::Address))
                    .col(double(Location::Latitude))
                    .col(double(Location::Longitude))
                    .col(double(Location::Radius).default(0.0))
                    .col(integer(Location::InterestLevel).default(0))
                    .col(boolean(Location::Deleted).default(false))
                    .col(
                        timestamp_with_time_zone(Location::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    Name,
    Address,
    Latitude,
    Longitude,
    Radius,
    InterestLevel,
    Deleted,
    CreatedAt,
}
