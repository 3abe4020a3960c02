//! Tracking point ingestion and queries.
//!
//! Ingestion validates devices up front and then writes all points and latest-position
//! updates inside one transaction, so a failed request leaves no partial batch behind.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        tracking_device::TrackingDeviceRepository, tracking_point::TrackingPointRepository,
        trip::TripRepository,
    },
    error::{internal::InternalError, AppError},
    model::tracking_point::{Coordinate, CreateTrackingPointParams, TrackingPoint},
    util::geo::haversine_distance,
};

const UNKNOWN_DEVICE: &str = "A Device Id does not exist";
const UNLINKED_DEVICE_BATCH: &str = "A Device is not linked to an asset";
const UNLINKED_DEVICE_SINGLE: &str =
    "Can't add a tracking point while device not linked to an asset";

pub struct TrackingPointService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackingPointService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ingests a single point.
    ///
    /// The point takes the asset of its device. The device and asset latest positions
    /// advance when the point is newer by device time.
    ///
    /// # Arguments
    /// - `params` - The point reading and reporting device
    ///
    /// # Returns
    /// - `Ok(TrackingPoint)` - The saved point
    /// - `Err(AppError::BadRequest)` - Coordinates out of range, or the device is unknown
    ///   or deleted
    /// - `Err(AppError::InvalidOperation)` - The device is not linked to an asset
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn add(&self, params: CreateTrackingPointParams) -> Result<TrackingPoint, AppError> {
        params.validate().map_err(AppError::BadRequest)?;

        let txn = self.db.begin().await?;

        let device = TrackingDeviceRepository::new(&txn)
            .get_by_id(&params.tracking_device_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(UNKNOWN_DEVICE.to_string()))?;
        let asset_id = device
            .asset_id
            .ok_or_else(|| AppError::InvalidOperation(UNLINKED_DEVICE_SINGLE.to_string()))?;

        let saved = TrackingPointRepository::new(&txn)
            .add_for_device(&device.id, &asset_id, vec![params], Utc::now())
            .await?;

        txn.commit().await?;

        tracing::debug!("Stored point for device {} on asset {}", device.id, asset_id);

        saved
            .into_iter()
            .next()
            .ok_or_else(|| InternalError::MissingSavedPoint(device.id).into())
    }

    /// Ingests a batch of points from any number of devices.
    ///
    /// Every device is validated before anything is written. Points are then stored
    /// device by device in ascending device time, and only the newest point of each
    /// device is considered for latest positions.
    ///
    /// # Arguments
    /// - `points` - Points to ingest
    ///
    /// # Returns
    /// - `Ok(Vec<TrackingPoint>)` - Saved points grouped by device, each group in device
    ///   time order
    /// - `Err(AppError::BadRequest)` - A coordinate is out of range, a device is unknown or
    ///   deleted, or a device is not linked to an asset
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn add_many(
        &self,
        points: Vec<CreateTrackingPointParams>,
    ) -> Result<Vec<TrackingPoint>, AppError> {
        if points.is_empty() {
            return Ok(Vec::new());
        }

        for point in &points {
            point.validate().map_err(AppError::BadRequest)?;
        }

        let by_device = group_by_device(points);

        let txn = self.db.begin().await?;

        let device_ids: Vec<String> = by_device.iter().map(|(id, _)| id.clone()).collect();
        let devices = TrackingDeviceRepository::new(&txn)
            .get_by_ids(&device_ids)
            .await?;

        if devices.len() < by_device.len() {
            return Err(AppError::BadRequest(UNKNOWN_DEVICE.to_string()));
        }
        if devices.values().any(|d| d.asset_id.is_none()) {
            return Err(AppError::BadRequest(UNLINKED_DEVICE_BATCH.to_string()));
        }

        let repo = TrackingPointRepository::new(&txn);
        let received_at = Utc::now();
        let mut saved = Vec::new();

        for (device_id, group) in by_device {
            let Some(asset_id) = devices.get(&device_id).and_then(|d| d.asset_id.as_deref())
            else {
                return Err(AppError::BadRequest(UNKNOWN_DEVICE.to_string()));
            };

            saved.extend(
                repo.add_for_device(&device_id, asset_id, group, received_at)
                    .await?,
            );
        }

        txn.commit().await?;

        tracing::debug!(
            "Stored {} points from {} devices",
            saved.len(),
            device_ids.len()
        );

        Ok(saved)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TrackingPoint>, AppError> {
        Ok(TrackingPointRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets the points of a trip closest to `origin`.
    ///
    /// # Arguments
    /// - `trip_id` - Trip whose points are searched
    /// - `origin` - Reference coordinate
    /// - `count` - Maximum number of points returned
    ///
    /// # Returns
    /// - `Ok(Vec<TrackingPoint>)` - Up to `count` points, nearest first
    /// - `Err(AppError::NotFound)` - The trip does not exist
    pub async fn get_nearest_points(
        &self,
        trip_id: i32,
        origin: Coordinate,
        count: usize,
    ) -> Result<Vec<TrackingPoint>, AppError> {
        TripRepository::new(self.db)
            .get_entity_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let points = TrackingPointRepository::new(self.db)
            .get_by_trip_id(trip_id)
            .await?;

        Ok(nearest_points(points, origin, count))
    }

    /// Labels points with a trip.
    ///
    /// # Arguments
    /// - `trip_id` - Trip to assign
    /// - `point_ids` - Points to label; all must exist and belong to the trip's asset
    ///
    /// # Returns
    /// - `Ok(())` - All points labeled
    /// - `Err(AppError::NotFound)` - The trip does not exist
    /// - `Err(AppError::BadRequest)` - A point is unknown or belongs to another asset
    pub async fn assign_points_to_trip(
        &self,
        trip_id: i32,
        point_ids: Vec<i32>,
    ) -> Result<(), AppError> {
        let trip = TripRepository::new(self.db)
            .get_entity_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let requested: HashSet<i32> = point_ids.into_iter().collect();
        let ids: Vec<i32> = requested.iter().copied().collect();

        let repo = TrackingPointRepository::new(self.db);
        let points = repo.get_by_ids(&ids).await?;

        if points.len() < requested.len() {
            return Err(AppError::BadRequest(
                "A Tracking Point Id does not exist".to_string(),
            ));
        }
        if points.iter().any(|p| p.asset_id != trip.asset_id) {
            return Err(AppError::BadRequest(
                "All points must belong to the trip's asset".to_string(),
            ));
        }

        let updated = repo.assign_to_trip(trip.id, &ids).await?;
        tracing::debug!("Assigned {} points to trip {}", updated, trip.id);

        Ok(())
    }
}

/// Groups points by device, keeping the order in which devices first appear.
fn group_by_device(
    points: Vec<CreateTrackingPointParams>,
) -> Vec<(String, Vec<CreateTrackingPointParams>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<CreateTrackingPointParams>)> = Vec::new();

    for point in points {
        match index.get(&point.tracking_device_id) {
            Some(&i) => groups[i].1.push(point),
            None => {
                index.insert(point.tracking_device_id.clone(), groups.len());
                groups.push((point.tracking_device_id.clone(), vec![point]));
            }
        }
    }

    groups
}

/// Orders points by great-circle distance from `origin` and keeps the first `count`.
fn nearest_points(
    points: Vec<TrackingPoint>,
    origin: Coordinate,
    count: usize,
) -> Vec<TrackingPoint> {
    let mut ranked: Vec<(f64, TrackingPoint)> = points
        .into_iter()
        .map(|p| (haversine_distance(origin, p.coordinate()), p))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked.into_iter().take(count).map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(id: i32, latitude: f64, longitude: f64) -> TrackingPoint {
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        TrackingPoint {
            id,
            tracking_device_id: "device".to_string(),
            asset_id: "asset".to_string(),
            trip_id: Some(1),
            latitude,
            longitude,
            altitude: None,
            accuracy: None,
            speed: None,
            heading: None,
            device_timestamp_utc: t,
            created_at_time_utc: t,
            debug: false,
        }
    }

    #[test]
    fn orders_by_distance_and_truncates() {
        let origin = Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        let points = vec![point(1, 3.0, 0.0), point(2, 1.0, 0.0), point(3, 2.0, 0.0)];

        let nearest = nearest_points(points, origin, 2);

        let ids: Vec<_> = nearest.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let reading = |device: &str, minute: u32| CreateTrackingPointParams {
            tracking_device_id: device.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            altitude: None,
            accuracy: None,
            speed: None,
            heading: None,
            device_timestamp_utc: Utc.with_ymd_and_hms(2026, 1, 1, 0, minute, 0).unwrap(),
            debug: false,
        };

        let groups = group_by_device(vec![
            reading("zulu", 0),
            reading("alpha", 1),
            reading("zulu", 2),
        ]);

        let devices: Vec<_> = groups.iter().map(|(id, g)| (id.as_str(), g.len())).collect();
        assert_eq!(devices, vec![("zulu", 2), ("alpha", 1)]);
    }

    #[test]
    fn count_larger_than_points_returns_all() {
        let origin = Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };

        assert_eq!(nearest_points(vec![point(1, 1.0, 1.0)], origin, 10).len(), 1);
        assert!(nearest_points(Vec::new(), origin, 10).is_empty());
    }
}
