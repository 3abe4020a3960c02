//! Trip factory for creating test trip entities without legs.

use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    asset_id: String,
    start_location_id: Option<String>,
    end_location_id: Option<String>,
    deleted: bool,
}

impl<'a> TripFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, asset_id: impl Into<String>) -> Self {
        Self {
            db,
            asset_id: asset_id.into(),
            start_location_id: None,
            end_location_id: None,
            deleted: false,
        }
    }

    pub fn start_location(mut self, location_id: impl Into<String>) -> Self {
        self.start_location_id = Some(location_id.into());
        self
    }

    pub fn end_location(mut self, location_id: impl Into<String>) -> Self {
        self.end_location_id = Some(location_id.into());
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Inserts a one hour trip starting 2026-01-01 08:00 UTC.
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();

        entity::trip::ActiveModel {
            id: ActiveValue::NotSet,
            asset_id: ActiveValue::Set(self.asset_id),
            start_time_utc: ActiveValue::Set(start),
            end_time_utc: ActiveValue::Set(start + Duration::hours(1)),
            start_location_id: ActiveValue::Set(self.start_location_id),
            end_location_id: ActiveValue::Set(self.end_location_id),
            deleted: ActiveValue::Set(self.deleted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trip for the asset with default values.
pub async fn create_trip(
    db: &DatabaseConnection,
    asset_id: &str,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, asset_id).build().await
}
