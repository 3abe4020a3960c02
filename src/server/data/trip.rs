//! Trip data repository.
//!
//! Trips are returned as entity rows with their legs ordered by start time. Decoding leg
//! routes into the domain model is left to the service layer.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::trip::{CreateTripParams, TripWithLegs};

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a trip and its legs.
    ///
    /// Run inside a transaction so a failing leg leaves no partial trip behind.
    ///
    /// # Arguments
    /// - `params` - Trip fields and legs, already validated
    ///
    /// # Returns
    /// - `Ok(TripWithLegs)` - The created trip with its legs
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateTripParams) -> Result<TripWithLegs, DbErr> {
        let trip = entity::trip::ActiveModel {
            asset_id: ActiveValue::Set(params.asset_id),
            start_time_utc: ActiveValue::Set(params.start_time_utc),
            end_time_utc: ActiveValue::Set(params.end_time_utc),
            start_location_id: ActiveValue::Set(params.start_location_id),
            end_location_id: ActiveValue::Set(params.end_location_id),
            deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut legs = Vec::with_capacity(params.legs.len());
        for leg in params.legs {
            let route = leg.route_json();
            let entity = entity::trip_leg::ActiveModel {
                trip_id: ActiveValue::Set(trip.id),
                start_time_utc: ActiveValue::Set(leg.start_time_utc),
                end_time_utc: ActiveValue::Set(leg.end_time_utc),
                route: ActiveValue::Set(route),
                average_speed: ActiveValue::Set(leg.average_speed),
                start_location_id: ActiveValue::Set(leg.start_location_id),
                end_location_id: ActiveValue::Set(leg.end_location_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            legs.push(entity);
        }
        legs.sort_by_key(|l| l.start_time_utc);

        Ok(TripWithLegs { trip, legs })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TripWithLegs>, DbErr> {
        let Some(trip) = entity::prelude::Trip::find_by_id(id)
            .filter(entity::trip::Column::Deleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let legs = entity::prelude::TripLeg::find()
            .filter(entity::trip_leg::Column::TripId.eq(trip.id))
            .order_by_asc(entity::trip_leg::Column::StartTimeUtc)
            .all(self.db)
            .await?;

        Ok(Some(TripWithLegs { trip, legs }))
    }

    /// Gets a live trip row without its legs.
    pub async fn get_entity_by_id(&self, id: i32) -> Result<Option<entity::trip::Model>, DbErr> {
        entity::prelude::Trip::find_by_id(id)
            .filter(entity::trip::Column::Deleted.eq(false))
            .one(self.db)
            .await
    }

    /// Gets the live trips of an asset ordered by start time.
    pub async fn get_by_asset_id(&self, asset_id: &str) -> Result<Vec<TripWithLegs>, DbErr> {
        let trips = entity::prelude::Trip::find()
            .filter(entity::trip::Column::AssetId.eq(asset_id))
            .filter(entity::trip::Column::Deleted.eq(false))
            .order_by_asc(entity::trip::Column::StartTimeUtc)
            .all(self.db)
            .await?;

        if trips.is_empty() {
            return Ok(Vec::new());
        }

        let mut legs_by_trip: HashMap<i32, Vec<entity::trip_leg::Model>> = HashMap::new();
        for leg in entity::prelude::TripLeg::find()
            .filter(entity::trip_leg::Column::TripId.is_in(trips.iter().map(|t| t.id)))
            .order_by_asc(entity::trip_leg::Column::StartTimeUtc)
            .all(self.db)
            .await?
        {
            legs_by_trip.entry(leg.trip_id).or_default().push(leg);
        }

        Ok(trips
            .into_iter()
            .map(|trip| {
                let legs = legs_by_trip.remove(&trip.id).unwrap_or_default();
                TripWithLegs { trip, legs }
            })
            .collect())
    }

    /// Marks a trip as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - The trip was live and is now deleted
    /// - `Ok(false)` - No live trip with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(
                entity::trip::Column::Deleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::trip::Column::Id.eq(id))
            .filter(entity::trip::Column::Deleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts live trips per asset that start or end at a location.
    pub async fn count_per_asset_for_location(
        &self,
        location_id: &str,
    ) -> Result<HashMap<String, u64>, DbErr> {
        let counts: Vec<(String, i64)> = entity::prelude::Trip::find()
            .select_only()
            .column(entity::trip::Column::AssetId)
            .column_as(entity::trip::Column::Id.count(), "count")
            .filter(entity::trip::Column::Deleted.eq(false))
            .filter(
                sea_orm::Condition::any()
                    .add(entity::trip::Column::StartLocationId.eq(location_id))
                    .add(entity::trip::Column::EndLocationId.eq(location_id)),
            )
            .group_by(entity::trip::Column::AssetId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(asset_id, count)| (asset_id, count as u64))
            .collect())
    }
}
