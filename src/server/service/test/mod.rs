use chrono::{DateTime, TimeZone, Utc};
use test_utils::builder::TestBuilder;

use crate::server::{error::AppError, model::tracking_point::CreateTrackingPointParams};

mod statistics;
mod tracking_point;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, hour, minute, 0).unwrap()
}

fn reading(device_id: &str, device_timestamp_utc: DateTime<Utc>) -> CreateTrackingPointParams {
    CreateTrackingPointParams {
        tracking_device_id: device_id.to_string(),
        latitude: 47.6,
        longitude: -122.3,
        altitude: None,
        accuracy: None,
        speed: Some(12.5),
        heading: None,
        device_timestamp_utc,
        debug: false,
    }
}
