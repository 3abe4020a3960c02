use crate::server::{
    data::asset::AssetRepository,
    model::asset::{CreateAssetParams, TruckProperties, UpdateAssetParams},
};
use entity::asset::AssetType;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, asset::AssetFactory, helpers::create_linked_device,
        tracking_point::TrackingPointFactory,
    },
};

mod create;
mod find_by_name;
mod get_latest_positions;
mod soft_delete;
mod update;
