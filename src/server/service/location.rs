//! Location service.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{location::LocationRepository, trip::TripRepository},
    error::AppError,
    model::location::{Location, LocationParams},
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a location with a generated id.
    ///
    /// # Returns
    /// - `Ok(Location)` - The created location
    /// - `Err(AppError::BadRequest)` - Blank name, coordinates out of range or negative
    ///   radius
    pub async fn create(&self, params: LocationParams) -> Result<Location, AppError> {
        validate(&params)?;

        let location = LocationRepository::new(self.db)
            .create(Uuid::new_v4().to_string(), params)
            .await?;
        tracing::info!("Created location {} ({})", location.id, location.name);

        Ok(location)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Location>, AppError> {
        Ok(LocationRepository::new(self.db).get_by_id(id).await?)
    }

    /// Lists live locations, optionally filtered by a name fragment.
    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<Location>, AppError> {
        let repo = LocationRepository::new(self.db);

        let locations = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(fragment) => repo.find_by_name(fragment).await?,
            None => repo.get_all().await?,
        };

        Ok(locations)
    }

    pub async fn update(
        &self,
        id: &str,
        params: LocationParams,
    ) -> Result<Option<Location>, AppError> {
        validate(&params)?;

        Ok(LocationRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(LocationRepository::new(self.db).soft_delete(id).await?)
    }

    /// Counts, per asset, the live trips starting or ending at a location.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Asset id to number of trips
    /// - `Err(AppError::NotFound)` - No live location with that id
    pub async fn get_assets_count(&self, id: &str) -> Result<HashMap<String, u64>, AppError> {
        if LocationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Location not found".to_string()));
        }

        Ok(TripRepository::new(self.db)
            .count_per_asset_for_location(id)
            .await?)
    }
}

fn validate(params: &LocationParams) -> Result<(), AppError> {
    if params.name.trim().is_empty() {
        return Err(AppError::BadRequest("Location name is required".to_string()));
    }
    if !(-90.0..=90.0).contains(&params.latitude) || !(-180.0..=180.0).contains(&params.longitude)
    {
        return Err(AppError::BadRequest(
            "Location coordinates are out of range".to_string(),
        ));
    }
    if params.radius.is_nan() || params.radius < 0.0 {
        return Err(AppError::BadRequest(
            "Location radius must not be negative".to_string(),
        ));
    }

    Ok(())
}
