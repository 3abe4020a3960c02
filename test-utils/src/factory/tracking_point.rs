//! Tracking point factory.
//!
//! Inserts points directly, without touching device or asset latest positions. Use the
//! tracking point repository when the latest-position rule is under test.

use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating test tracking points.
pub struct TrackingPointFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::tracking_point::Model,
}

impl<'a> TrackingPointFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tracking_device_id: impl Into<String>,
        asset_id: impl Into<String>,
    ) -> Self {
        let entity = entity::tracking_point::Model {
            tracking_device_id: tracking_device_id.into(),
            asset_id: asset_id.into(),
            ..fixture::tracking_point::entity()
        };

        Self { db, entity }
    }

    pub fn position(mut self, latitude: f64, longitude: f64) -> Self {
        self.entity.latitude = latitude;
        self.entity.longitude = longitude;
        self
    }

    pub fn device_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.entity.device_timestamp_utc = timestamp;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at_time_utc = created_at;
        self
    }

    pub fn trip_id(mut self, trip_id: Option<i32>) -> Self {
        self.entity.trip_id = trip_id;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.entity.debug = debug;
        self
    }

    /// Builds and inserts the point, letting the database assign the id.
    pub async fn build(self) -> Result<entity::tracking_point::Model, DbErr> {
        let mut model = self.entity.into_active_model().reset_all();
        model.id = ActiveValue::NotSet;
        model.insert(self.db).await
    }
}

/// Creates a tracking point with fixture values for the given device and asset.
pub async fn create_point(
    db: &DatabaseConnection,
    tracking_device_id: &str,
    asset_id: &str,
) -> Result<entity::tracking_point::Model, DbErr> {
    TrackingPointFactory::new(db, tracking_device_id, asset_id)
        .build()
        .await
}
