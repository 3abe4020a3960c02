//! Trip service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{asset::AssetRepository, location::LocationRepository, trip::TripRepository},
    error::AppError,
    model::trip::{CreateTripParams, Trip},
};

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trip with its legs in one transaction.
    ///
    /// # Arguments
    /// - `params` - Trip fields and legs
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip
    /// - `Err(AppError::BadRequest)` - Unknown asset or location, or a time range that
    ///   ends before it starts
    /// - `Err(AppError::DbErr)` - Database error, nothing is stored
    pub async fn create(&self, params: CreateTripParams) -> Result<Trip, AppError> {
        if params.end_time_utc < params.start_time_utc {
            return Err(AppError::BadRequest(
                "Trip end time is before its start time".to_string(),
            ));
        }
        if params
            .legs
            .iter()
            .any(|leg| leg.end_time_utc < leg.start_time_utc)
        {
            return Err(AppError::BadRequest(
                "Trip leg end time is before its start time".to_string(),
            ));
        }

        if AssetRepository::new(self.db)
            .get_by_id(&params.asset_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Asset {} does not exist",
                params.asset_id
            )));
        }

        let location_ids = params.referenced_location_ids();
        let found = LocationRepository::new(self.db)
            .count_existing(&location_ids)
            .await?;
        if found < location_ids.len() as u64 {
            return Err(AppError::BadRequest(
                "A Location Id does not exist".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let created = TripRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Created trip {} for asset {} with {} legs",
            created.trip.id,
            created.trip.asset_id,
            created.legs.len()
        );

        Ok(Trip::from_with_legs(created)?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Trip>, AppError> {
        TripRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(Trip::from_with_legs)
            .transpose()
            .map_err(Into::into)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TripRepository::new(self.db).soft_delete(id).await?)
    }
}
