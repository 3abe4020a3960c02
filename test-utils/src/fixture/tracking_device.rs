use chrono::{TimeZone, Utc};

/// Unlinked device with no latest position.
pub fn entity() -> entity::tracking_device::Model {
    entity::tracking_device::Model {
        id: "device-fixture".to_string(),
        name: "Fixture Device".to_string(),
        model: Some("Pixel".to_string()),
        phone_number: None,
        os_version: Some("14".to_string()),
        asset_id: None,
        latest_position_id: None,
        deleted: false,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
