//! Tracking point data repository.
//!
//! Provides `TrackingPointRepository` for point ingestion, lookups and point aggregations.
//! Ingestion maintains the denormalized latest position of the reporting device and its
//! asset. The repository is generic over the connection so the service can run ingestion
//! inside a transaction.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::tracking_point::{CreateTrackingPointParams, TrackingPoint};

/// Day a point was received on. Receive times are stored as UTC text starting with the date.
const RECEIVED_DAY: &str = "substr(created_at_time_utc, 1, 10)";

pub struct TrackingPointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackingPointRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts points reported by one device and advances latest positions.
    ///
    /// Points are stored in ascending device time. Only the newest point of the batch is
    /// considered for the device and asset latest positions, each of which moves only if
    /// it is unset or older than that point. The caller validates that the device exists
    /// and reports for `asset_id`.
    ///
    /// # Arguments
    /// - `tracking_device_id` - Device that reported the points
    /// - `asset_id` - Asset the device is linked to
    /// - `points` - Points to store
    /// - `received_at` - Server receive time stored on every point
    ///
    /// # Returns
    /// - `Ok(Vec<TrackingPoint>)` - Saved points in device time order
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn add_for_device(
        &self,
        tracking_device_id: &str,
        asset_id: &str,
        mut points: Vec<CreateTrackingPointParams>,
        received_at: DateTime<Utc>,
    ) -> Result<Vec<TrackingPoint>, DbErr> {
        points.sort_by_key(|p| p.device_timestamp_utc);

        let Some(newest) = points.pop() else {
            return Ok(Vec::new());
        };

        let mut saved = Vec::with_capacity(points.len() + 1);
        for params in points {
            let point = self.insert(asset_id, params, received_at).await?;
            saved.push(TrackingPoint::from_entity(point));
        }

        let newest = self.insert(asset_id, newest, received_at).await?;
        self.advance_device_latest(tracking_device_id, &newest)
            .await?;
        self.advance_asset_latest(asset_id, &newest).await?;
        saved.push(TrackingPoint::from_entity(newest));

        Ok(saved)
    }

    async fn insert(
        &self,
        asset_id: &str,
        params: CreateTrackingPointParams,
        received_at: DateTime<Utc>,
    ) -> Result<entity::tracking_point::Model, DbErr> {
        entity::tracking_point::ActiveModel {
            tracking_device_id: ActiveValue::Set(params.tracking_device_id),
            asset_id: ActiveValue::Set(asset_id.to_string()),
            trip_id: ActiveValue::Set(None),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            altitude: ActiveValue::Set(params.altitude),
            accuracy: ActiveValue::Set(params.accuracy),
            speed: ActiveValue::Set(params.speed),
            heading: ActiveValue::Set(params.heading),
            device_timestamp_utc: ActiveValue::Set(params.device_timestamp_utc),
            created_at_time_utc: ActiveValue::Set(received_at),
            debug: ActiveValue::Set(params.debug),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    async fn advance_device_latest(
        &self,
        tracking_device_id: &str,
        point: &entity::tracking_point::Model,
    ) -> Result<(), DbErr> {
        let Some(device) = entity::prelude::TrackingDevice::find_by_id(tracking_device_id)
            .one(self.db)
            .await?
        else {
            return Err(DbErr::RecordNotFound(format!(
                "Tracking device {} not found",
                tracking_device_id
            )));
        };

        if self.is_newer(device.latest_position_id, point).await? {
            let mut active: entity::tracking_device::ActiveModel = device.into();
            active.latest_position_id = ActiveValue::Set(Some(point.id));
            active.update(self.db).await?;
        }

        Ok(())
    }

    async fn advance_asset_latest(
        &self,
        asset_id: &str,
        point: &entity::tracking_point::Model,
    ) -> Result<(), DbErr> {
        let Some(asset) = entity::prelude::Asset::find_by_id(asset_id)
            .one(self.db)
            .await?
        else {
            return Err(DbErr::RecordNotFound(format!("Asset {} not found", asset_id)));
        };

        if self.is_newer(asset.latest_position_id, point).await? {
            let mut active: entity::asset::ActiveModel = asset.into();
            active.latest_position_id = ActiveValue::Set(Some(point.id));
            active.update(self.db).await?;
        }

        Ok(())
    }

    /// Whether `point` should replace the current latest position.
    async fn is_newer(
        &self,
        current_id: Option<i32>,
        point: &entity::tracking_point::Model,
    ) -> Result<bool, DbErr> {
        let Some(current_id) = current_id else {
            return Ok(true);
        };

        let current = entity::prelude::TrackingPoint::find_by_id(current_id)
            .one(self.db)
            .await?;

        Ok(match current {
            Some(current) => point.device_timestamp_utc > current.device_timestamp_utc,
            None => true,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TrackingPoint>, DbErr> {
        let point = entity::prelude::TrackingPoint::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(point.map(TrackingPoint::from_entity))
    }

    /// Gets points with the given ids. Missing ids are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<TrackingPoint>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let points = entity::prelude::TrackingPoint::find()
            .filter(entity::tracking_point::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(points.into_iter().map(TrackingPoint::from_entity).collect())
    }

    /// Gets all points of an asset ordered by device time.
    pub async fn get_by_asset_id(&self, asset_id: &str) -> Result<Vec<TrackingPoint>, DbErr> {
        let points = entity::prelude::TrackingPoint::find()
            .filter(entity::tracking_point::Column::AssetId.eq(asset_id))
            .order_by_asc(entity::tracking_point::Column::DeviceTimestampUtc)
            .order_by_asc(entity::tracking_point::Column::Id)
            .all(self.db)
            .await?;

        Ok(points.into_iter().map(TrackingPoint::from_entity).collect())
    }

    /// Gets all points reported by a device ordered by device time.
    pub async fn get_by_device_id(&self, device_id: &str) -> Result<Vec<TrackingPoint>, DbErr> {
        let points = entity::prelude::TrackingPoint::find()
            .filter(entity::tracking_point::Column::TrackingDeviceId.eq(device_id))
            .order_by_asc(entity::tracking_point::Column::DeviceTimestampUtc)
            .order_by_asc(entity::tracking_point::Column::Id)
            .all(self.db)
            .await?;

        Ok(points.into_iter().map(TrackingPoint::from_entity).collect())
    }

    /// Gets points of an asset received strictly after `after`.
    ///
    /// # Arguments
    /// - `asset_id` - Asset to read points for
    /// - `after` - Exclusive lower bound on the server receive time
    /// - `include_debug` - Whether points flagged as debug are returned
    ///
    /// # Returns
    /// - `Ok(Vec<TrackingPoint>)` - Matching points ordered by device time
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_asset_id_after(
        &self,
        asset_id: &str,
        after: DateTime<Utc>,
        include_debug: bool,
    ) -> Result<Vec<TrackingPoint>, DbErr> {
        let mut query = entity::prelude::TrackingPoint::find()
            .filter(entity::tracking_point::Column::AssetId.eq(asset_id))
            .filter(entity::tracking_point::Column::CreatedAtTimeUtc.gt(after));

        if !include_debug {
            query = query.filter(entity::tracking_point::Column::Debug.eq(false));
        }

        let points = query
            .order_by_asc(entity::tracking_point::Column::DeviceTimestampUtc)
            .order_by_asc(entity::tracking_point::Column::Id)
            .all(self.db)
            .await?;

        Ok(points.into_iter().map(TrackingPoint::from_entity).collect())
    }

    /// Gets the most recently received point of an asset that belongs to a trip.
    pub async fn get_last_labeled_by_asset_id(
        &self,
        asset_id: &str,
    ) -> Result<Option<TrackingPoint>, DbErr> {
        let point = entity::prelude::TrackingPoint::find()
            .filter(entity::tracking_point::Column::AssetId.eq(asset_id))
            .filter(entity::tracking_point::Column::TripId.is_not_null())
            .order_by_desc(entity::tracking_point::Column::CreatedAtTimeUtc)
            .order_by_desc(entity::tracking_point::Column::Id)
            .one(self.db)
            .await?;

        Ok(point.map(TrackingPoint::from_entity))
    }

    pub async fn get_by_trip_id(&self, trip_id: i32) -> Result<Vec<TrackingPoint>, DbErr> {
        let points = entity::prelude::TrackingPoint::find()
            .filter(entity::tracking_point::Column::TripId.eq(trip_id))
            .order_by_asc(entity::tracking_point::Column::DeviceTimestampUtc)
            .all(self.db)
            .await?;

        Ok(points.into_iter().map(TrackingPoint::from_entity).collect())
    }

    /// Labels the given points with a trip.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of updated rows
    /// - `Err(DbErr)` - Database error during update
    pub async fn assign_to_trip(&self, trip_id: i32, point_ids: &[i32]) -> Result<u64, DbErr> {
        if point_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::TrackingPoint::update_many()
            .col_expr(
                entity::tracking_point::Column::TripId,
                sea_orm::sea_query::Expr::value(trip_id),
            )
            .filter(entity::tracking_point::Column::Id.is_in(point_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts points per asset id.
    pub async fn count_per_asset(&self) -> Result<HashMap<String, u64>, DbErr> {
        let counts: Vec<(String, i64)> = entity::prelude::TrackingPoint::find()
            .select_only()
            .column(entity::tracking_point::Column::AssetId)
            .column_as(entity::tracking_point::Column::Id.count(), "count")
            .group_by(entity::tracking_point::Column::AssetId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(asset_id, count)| (asset_id, count as u64))
            .collect())
    }

    /// Counts points per UTC calendar day of their receive time.
    pub async fn count_per_day(&self) -> Result<BTreeMap<NaiveDate, u64>, DbErr> {
        let counts: Vec<(Option<String>, i64)> = entity::prelude::TrackingPoint::find()
            .select_only()
            .column_as(Expr::cust(RECEIVED_DAY), "day")
            .column_as(entity::tracking_point::Column::Id.count(), "count")
            .group_by(Expr::cust(RECEIVED_DAY))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut per_day = BTreeMap::new();
        for (day, count) in counts {
            let Some(day) = day else {
                continue;
            };
            let day = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                .map_err(|e| DbErr::Custom(format!("Invalid receive day '{}': {}", day, e)))?;
            per_day.insert(day, count as u64);
        }

        Ok(per_day)
    }

    /// Counts points among `ids` received strictly after `after`.
    pub async fn count_received_after(
        &self,
        ids: &HashSet<i32>,
        after: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::TrackingPoint::find()
            .filter(entity::tracking_point::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::tracking_point::Column::CreatedAtTimeUtc.gt(after))
            .count(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::TrackingPoint::find().count(self.db).await
    }
}
