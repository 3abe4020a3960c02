use crate::server::{
    data::tracking_point::TrackingPointRepository, model::tracking_point::CreateTrackingPointParams,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_linked_device, tracking_point::TrackingPointFactory},
};

mod add_for_device;
mod assign_to_trip;
mod count_per_asset;
mod count_per_day;
mod get_by_asset_id_after;
mod get_last_labeled_by_asset_id;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, hour, minute, 0).unwrap()
}

fn reading(device_id: &str, device_timestamp_utc: DateTime<Utc>) -> CreateTrackingPointParams {
    CreateTrackingPointParams {
        tracking_device_id: device_id.to_string(),
        latitude: 47.6,
        longitude: -122.3,
        altitude: None,
        accuracy: Some(3.0),
        speed: None,
        heading: None,
        device_timestamp_utc,
        debug: false,
    }
}
