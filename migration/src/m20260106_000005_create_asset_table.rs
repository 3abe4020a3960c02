use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asset::Table)
                    .if_not_exists()
                    .col(string(Asset::Id).primary_key())
                    .col(string(Asset::Name))
                    .col(integer(Asset::AssetType).default(0))
                    // No FK: tracking_point already references asset
                    .col(integer_null(Asset::LatestPositionId))
                    .col(double_null(Asset::Height))
                    .col(double_null(Asset::Width))
                    .col(double_null(Asset::Length))
                    .col(double_null(Asset::Weight))
                    .col(integer_null(Asset::Axles))
                    .col(integer_null(Asset::Trailers))
                    .col(boolean_null(Asset::Semi))
                    .col(boolean(Asset::Deleted).default(false))
                    .col(
                        timestamp_with_time_zone(Asset::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Asset::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Asset {
    Table,
    Id,
    Name,
    AssetType,
    LatestPositionId,
    Height,
    Width,
    Length,
    Weight,
    Axles,
    Trailers,
    Semi,
    Deleted,
    CreatedAt,
}
