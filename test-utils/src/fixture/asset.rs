use chrono::{TimeZone, Utc};
use entity::asset::AssetType;

/// Car asset without truck properties and without a latest position.
pub fn entity() -> entity::asset::Model {
    entity::asset::Model {
        id: "asset-fixture".to_string(),
        name: "Fixture Car".to_string(),
        asset_type: AssetType::Car,
        latest_position_id: None,
        height: None,
        width: None,
        length: None,
        weight: None,
        axles: None,
        trailers: None,
        semi: None,
        deleted: false,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// Truck asset with every routing property populated.
pub fn truck_entity() -> entity::asset::Model {
    entity::asset::Model {
        id: "truck-fixture".to_string(),
        name: "Fixture Truck".to_string(),
        asset_type: AssetType::Truck,
        height: Some(4.0),
        width: Some(2.5),
        length: Some(16.5),
        weight: Some(40_000.0),
        axles: Some(5),
        trailers: Some(1),
        semi: Some(true),
        ..entity()
    }
}
