//! Tracking device service.
//!
//! Enforces the device/asset link rules: a linked asset must exist and may have at most
//! one live device.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::{
        asset::AssetRepository, tracking_device::TrackingDeviceRepository,
        tracking_point::TrackingPointRepository,
    },
    error::AppError,
    model::{
        tracking_device::{
            CreateTrackingDeviceParams, TrackingDevice, UpdateTrackingDeviceParams,
        },
        tracking_point::TrackingPoint,
    },
};

pub struct TrackingDeviceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackingDeviceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a device, optionally linked to an asset.
    ///
    /// # Returns
    /// - `Ok(TrackingDevice)` - The created device
    /// - `Err(AppError::BadRequest)` - Id already used, unknown asset, or asset already
    ///   linked to another device
    pub async fn create(
        &self,
        params: CreateTrackingDeviceParams,
    ) -> Result<TrackingDevice, AppError> {
        let repo = TrackingDeviceRepository::new(self.db);

        let id = match &params.id {
            Some(id) => {
                if repo.id_taken(id).await? {
                    return Err(AppError::BadRequest(format!(
                        "A device with id {} already exists",
                        id
                    )));
                }
                id.clone()
            }
            None => Uuid::new_v4().to_string(),
        };

        if let Some(asset_id) = &params.asset_id {
            self.ensure_asset_linkable(asset_id, None).await?;
        }

        let device = repo.create(id, params).await.map_err(link_conflict)?;
        tracing::info!(
            "Registered device {} linked to {:?}",
            device.id,
            device.asset_id
        );

        Ok(device)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<TrackingDevice>, AppError> {
        Ok(TrackingDeviceRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<TrackingDevice>, AppError> {
        Ok(TrackingDeviceRepository::new(self.db).get_all().await?)
    }

    /// Updates a device. Setting `asset_id` to `None` unlinks it.
    ///
    /// # Returns
    /// - `Ok(Some(TrackingDevice))` - The updated device
    /// - `Ok(None)` - No live device with that id
    /// - `Err(AppError::BadRequest)` - Unknown asset or asset linked to another device
    pub async fn update(
        &self,
        params: UpdateTrackingDeviceParams,
    ) -> Result<Option<TrackingDevice>, AppError> {
        if let Some(asset_id) = &params.asset_id {
            self.ensure_asset_linkable(asset_id, Some(&params.id))
                .await?;
        }

        TrackingDeviceRepository::new(self.db)
            .update(params)
            .await
            .map_err(link_conflict)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = TrackingDeviceRepository::new(self.db).soft_delete(id).await?;
        if deleted {
            tracing::info!("Deleted device {}", id);
        }

        Ok(deleted)
    }

    /// Gets the points reported by a live device ordered by device time.
    pub async fn get_points(&self, id: &str) -> Result<Option<Vec<TrackingPoint>>, AppError> {
        if TrackingDeviceRepository::new(self.db)
            .get_by_id(id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let points = TrackingPointRepository::new(self.db)
            .get_by_device_id(id)
            .await?;

        Ok(Some(points))
    }

    async fn ensure_asset_linkable(
        &self,
        asset_id: &str,
        device_id: Option<&str>,
    ) -> Result<(), AppError> {
        if AssetRepository::new(self.db)
            .get_by_id(asset_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Asset {} does not exist",
                asset_id
            )));
        }

        let linked = TrackingDeviceRepository::new(self.db)
            .get_by_asset_id(asset_id)
            .await?;
        if let Some(linked) = linked {
            if Some(linked.id.as_str()) != device_id {
                return Err(AppError::BadRequest(format!(
                    "Asset {} is already linked to device {}",
                    asset_id, linked.id
                )));
            }
        }

        Ok(())
    }
}

/// Maps unique violations from concurrent writes to the same client errors the checks give.
fn link_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("asset_id") => {
            AppError::BadRequest("Asset is already linked to another device".to_string())
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest("A device with this id already exists".to_string())
        }
        _ => err.into(),
    }
}
