//! Asset service.
//!
//! Wraps asset CRUD and the asset-scoped point and trip queries. Generated ids are
//! UUID v4 strings; client-supplied ids must be unused, including by deleted assets.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{asset::AssetRepository, tracking_point::TrackingPointRepository, trip::TripRepository},
    error::AppError,
    model::{
        asset::{Asset, CreateAssetParams, UpdateAssetParams},
        tracking_point::TrackingPoint,
        trip::Trip,
    },
};

pub struct AssetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an asset.
    ///
    /// # Arguments
    /// - `params` - Asset fields; a UUID v4 id is generated when `id` is `None`
    ///
    /// # Returns
    /// - `Ok(Asset)` - The created asset
    /// - `Err(AppError::BadRequest)` - Blank name or the id is already used
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateAssetParams) -> Result<Asset, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest("Asset name is required".to_string()));
        }

        let repo = AssetRepository::new(self.db);

        let id = match &params.id {
            Some(id) => {
                if repo.id_taken(id).await? {
                    return Err(AppError::BadRequest(format!(
                        "An asset with id {} already exists",
                        id
                    )));
                }
                id.clone()
            }
            None => Uuid::new_v4().to_string(),
        };

        let asset = repo.create(id, params).await?;
        tracing::info!("Created asset {} ({})", asset.id, asset.name);

        Ok(asset)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Asset>, AppError> {
        Ok(AssetRepository::new(self.db).get_by_id(id).await?)
    }

    /// Lists live assets, optionally filtered by a name fragment.
    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<Asset>, AppError> {
        let repo = AssetRepository::new(self.db);

        let assets = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(fragment) => repo.find_by_name(fragment).await?,
            None => repo.get_all().await?,
        };

        Ok(assets)
    }

    pub async fn update(&self, params: UpdateAssetParams) -> Result<Option<Asset>, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest("Asset name is required".to_string()));
        }

        Ok(AssetRepository::new(self.db).update(params).await?)
    }

    /// Soft-deletes an asset.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No live asset with that id
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = AssetRepository::new(self.db).soft_delete(id).await?;
        if deleted {
            tracing::info!("Deleted asset {}", id);
        }

        Ok(deleted)
    }

    pub async fn get_latest_positions(&self) -> Result<HashMap<String, TrackingPoint>, AppError> {
        Ok(AssetRepository::new(self.db).get_latest_positions().await?)
    }

    /// Gets the points of a live asset.
    ///
    /// # Arguments
    /// - `id` - Asset id
    /// - `after` - When set, only points received strictly after it
    /// - `include_debug` - Whether debug points are returned; applies with `after`
    ///
    /// # Returns
    /// - `Ok(Some(points))` - Points ordered by device time
    /// - `Ok(None)` - No live asset with that id
    pub async fn get_points(
        &self,
        id: &str,
        after: Option<DateTime<Utc>>,
        include_debug: bool,
    ) -> Result<Option<Vec<TrackingPoint>>, AppError> {
        if AssetRepository::new(self.db).get_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let repo = TrackingPointRepository::new(self.db);
        let points = match after {
            Some(after) => repo.get_by_asset_id_after(id, after, include_debug).await?,
            None => repo.get_by_asset_id(id).await?,
        };

        Ok(Some(points))
    }

    pub async fn get_last_labeled_point(
        &self,
        id: &str,
    ) -> Result<Option<TrackingPoint>, AppError> {
        Ok(TrackingPointRepository::new(self.db)
            .get_last_labeled_by_asset_id(id)
            .await?)
    }

    /// Gets the live trips of a live asset ordered by start time.
    pub async fn get_trips(&self, id: &str) -> Result<Option<Vec<Trip>>, AppError> {
        if AssetRepository::new(self.db).get_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let trips = TripRepository::new(self.db)
            .get_by_asset_id(id)
            .await?
            .into_iter()
            .map(Trip::from_with_legs)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(trips))
    }
}
