//! Trip domain models and parameters.
//!
//! A trip is one journey of an asset between two optional locations, made of legs. Each
//! leg stores its route as a JSON array of coordinates.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        tracking_point::PointDto,
        trip::{CreateTripDto, CreateTripLegDto, TripDto, TripLegDto},
    },
    server::{error::internal::InternalError, model::tracking_point::Coordinate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    pub id: i32,
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    pub route: Vec<Coordinate>,
    pub average_speed: f64,
    pub start_location_id: Option<String>,
    pub end_location_id: Option<String>,
}

impl TripLeg {
    /// Converts an entity model, decoding the stored route.
    ///
    /// # Returns
    /// - `Ok(TripLeg)` - Converted leg
    /// - `Err(InternalError::InvalidStoredRoute)` - Route column is not a coordinate array
    pub fn from_entity(entity: entity::trip_leg::Model) -> Result<Self, InternalError> {
        let route: Vec<PointDto> =
            serde_json::from_value(entity.route).map_err(|source| {
                InternalError::InvalidStoredRoute {
                    leg_id: entity.id,
                    source,
                }
            })?;

        Ok(Self {
            id: entity.id,
            start_time_utc: entity.start_time_utc,
            end_time_utc: entity.end_time_utc,
            route: route.into_iter().map(Coordinate::from).collect(),
            average_speed: entity.average_speed,
            start_location_id: entity.start_location_id,
            end_location_id: entity.end_location_id,
        })
    }

    pub fn into_dto(self) -> TripLegDto {
        TripLegDto {
            id: self.id,
            start_time_utc: self.start_time_utc,
            end_time_utc: self.end_time_utc,
            route: self.route.into_iter().map(Coordinate::into_dto).collect(),
            average_speed: self.average_speed,
            start_location_id: self.start_location_id,
            end_location_id: self.end_location_id,
        }
    }
}

/// A trip row with its leg rows as read from the database.
#[derive(Debug, Clone)]
pub struct TripWithLegs {
    pub trip: entity::trip::Model,
    pub legs: Vec<entity::trip_leg::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i32,
    pub asset_id: String,
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    pub start_location_id: Option<String>,
    pub end_location_id: Option<String>,
    pub legs: Vec<TripLeg>,
}

impl Trip {
    /// Converts a trip entity and its leg entities; legs keep the given order.
    pub fn from_entity(
        entity: entity::trip::Model,
        legs: Vec<entity::trip_leg::Model>,
    ) -> Result<Self, InternalError> {
        let legs = legs
            .into_iter()
            .map(TripLeg::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            asset_id: entity.asset_id,
            start_time_utc: entity.start_time_utc,
            end_time_utc: entity.end_time_utc,
            start_location_id: entity.start_location_id,
            end_location_id: entity.end_location_id,
            legs,
        })
    }

    pub fn from_with_legs(result: TripWithLegs) -> Result<Self, InternalError> {
        Self::from_entity(result.trip, result.legs)
    }

    pub fn into_dto(self) -> TripDto {
        TripDto {
            id: self.id,
            asset_id: self.asset_id,
            start_time_utc: self.start_time_utc,
            end_time_utc: self.end_time_utc,
            start_location_id: self.start_location_id,
            end_location_id: self.end_location_id,
            legs: self.legs.into_iter().map(TripLeg::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTripLegParams {
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    pub route: Vec<Coordinate>,
    pub average_speed: f64,
    pub start_location_id: Option<String>,
    pub end_location_id: Option<String>,
}

impl CreateTripLegParams {
    pub fn from_dto(dto: CreateTripLegDto) -> Self {
        Self {
            start_time_utc: dto.start_time_utc,
            end_time_utc: dto.end_time_utc,
            route: dto.route.into_iter().map(Coordinate::from).collect(),
            average_speed: dto.average_speed,
            start_location_id: dto.start_location_id,
            end_location_id: dto.end_location_id,
        }
    }

    /// Route serialized for the JSON column.
    pub fn route_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.route
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "latitude": c.latitude,
                        "longitude": c.longitude,
                    })
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateTripParams {
    pub asset_id: String,
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    pub start_location_id: Option<String>,
    pub end_location_id: Option<String>,
    pub legs: Vec<CreateTripLegParams>,
}

impl CreateTripParams {
    pub fn from_dto(dto: CreateTripDto) -> Self {
        Self {
            asset_id: dto.asset_id,
            start_time_utc: dto.start_time_utc,
            end_time_utc: dto.end_time_utc,
            start_location_id: dto.start_location_id,
            end_location_id: dto.end_location_id,
            legs: dto.legs.into_iter().map(CreateTripLegParams::from_dto).collect(),
        }
    }

    /// Location ids referenced by the trip or any of its legs, deduplicated.
    pub fn referenced_location_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = [&self.start_location_id, &self.end_location_id]
            .into_iter()
            .chain(
                self.legs
                    .iter()
                    .flat_map(|leg| [&leg.start_location_id, &leg.end_location_id]),
            )
            .flatten()
            .cloned()
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}
