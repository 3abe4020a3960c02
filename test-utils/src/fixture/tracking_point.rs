use chrono::{TimeZone, Utc};

/// Point in central Seattle, not part of any trip.
pub fn entity() -> entity::tracking_point::Model {
    let timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();

    entity::tracking_point::Model {
        id: 1,
        tracking_device_id: "device-fixture".to_string(),
        asset_id: "asset-fixture".to_string(),
        trip_id: None,
        latitude: 47.6062,
        longitude: -122.3321,
        altitude: None,
        accuracy: Some(5.0),
        speed: Some(0.0),
        heading: None,
        device_timestamp_utc: timestamp,
        created_at_time_utc: timestamp,
        debug: false,
    }
}
