//! Aggregations over assets, devices, locations and points.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::statistics::CountsDto,
    server::{
        data::{
            asset::AssetRepository, location::LocationRepository,
            tracking_device::TrackingDeviceRepository, tracking_point::TrackingPointRepository,
        },
        error::AppError,
    },
};

pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn points_per_asset(&self) -> Result<HashMap<String, u64>, AppError> {
        Ok(TrackingPointRepository::new(self.db).count_per_asset().await?)
    }

    pub async fn points_per_day(&self) -> Result<BTreeMap<NaiveDate, u64>, AppError> {
        Ok(TrackingPointRepository::new(self.db).count_per_day().await?)
    }

    /// Counts live assets whose latest position was received after `since`.
    pub async fn active_assets(&self, since: DateTime<Utc>) -> Result<u64, AppError> {
        let latest_ids = AssetRepository::new(self.db)
            .get_latest_position_ids()
            .await?;

        Ok(TrackingPointRepository::new(self.db)
            .count_received_after(&latest_ids, since)
            .await?)
    }

    pub async fn counts(&self) -> Result<CountsDto, AppError> {
        Ok(CountsDto {
            assets: AssetRepository::new(self.db).count().await?,
            tracking_devices: TrackingDeviceRepository::new(self.db).count().await?,
            locations: LocationRepository::new(self.db).count().await?,
            tracking_points: TrackingPointRepository::new(self.db).count().await?,
        })
    }
}
