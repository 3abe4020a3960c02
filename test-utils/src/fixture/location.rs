use chrono::{TimeZone, Utc};
use entity::location::InterestLevel;

/// Depot location with a 100 metre radius.
pub fn entity() -> entity::location::Model {
    entity::location::Model {
        id: "location-fixture".to_string(),
        name: "Fixture Depot".to_string(),
        address: Some("1 Harbor Way".to_string()),
        latitude: 47.6,
        longitude: -122.33,
        radius: 100.0,
        interest_level: InterestLevel::Medium,
        deleted: false,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
