//! Tracking point domain models and parameters.
//!
//! A tracking point is a single GPS observation. Points are append-only; the only
//! mutation after ingestion is labeling them with a trip.

use chrono::{DateTime, Utc};

use crate::model::tracking_point::{
    CreateTrackingPointDto, PointDto, PointReadingDto, TrackingPointDto,
};

/// WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<PointDto> for Coordinate {
    fn from(dto: PointDto) -> Self {
        Self {
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

impl Coordinate {
    pub fn into_dto(self) -> PointDto {
        PointDto {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingPoint {
    pub id: i32,
    pub tracking_device_id: String,
    pub asset_id: String,
    pub trip_id: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub accuracy: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    /// Time of the fix as reported by the device. Drives latest-position ordering.
    pub device_timestamp_utc: DateTime<Utc>,
    /// Time the server stored the point.
    pub created_at_time_utc: DateTime<Utc>,
    pub debug: bool,
}

impl TrackingPoint {
    pub fn from_entity(entity: entity::tracking_point::Model) -> Self {
        Self {
            id: entity.id,
            tracking_device_id: entity.tracking_device_id,
            asset_id: entity.asset_id,
            trip_id: entity.trip_id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            altitude: entity.altitude,
            accuracy: entity.accuracy,
            speed: entity.speed,
            heading: entity.heading,
            device_timestamp_utc: entity.device_timestamp_utc,
            created_at_time_utc: entity.created_at_time_utc,
            debug: entity.debug,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn into_dto(self) -> TrackingPointDto {
        TrackingPointDto {
            id: self.id,
            tracking_device_id: self.tracking_device_id,
            asset_id: self.asset_id,
            trip_id: self.trip_id,
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            accuracy: self.accuracy,
            speed: self.speed,
            heading: self.heading,
            device_timestamp_utc: self.device_timestamp_utc,
            created_at_time_utc: self.created_at_time_utc,
            debug: self.debug,
        }
    }
}

/// A point to ingest. The asset is resolved from the device during ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTrackingPointParams {
    pub tracking_device_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub accuracy: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub device_timestamp_utc: DateTime<Utc>,
    pub debug: bool,
}

impl CreateTrackingPointParams {
    pub fn from_reading(tracking_device_id: String, reading: PointReadingDto) -> Self {
        Self {
            tracking_device_id,
            latitude: reading.latitude,
            longitude: reading.longitude,
            altitude: reading.altitude,
            accuracy: reading.accuracy,
            speed: reading.speed,
            heading: reading.heading,
            device_timestamp_utc: reading.device_timestamp_utc,
            debug: reading.debug,
        }
    }

    pub fn from_dto(dto: CreateTrackingPointDto) -> Self {
        Self::from_reading(dto.tracking_device_id, dto.reading)
    }

    /// Rejects coordinates outside the WGS84 range.
    pub fn validate(&self) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("Latitude {} is out of range", self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!("Longitude {} is out of range", self.longitude));
        }
        Ok(())
    }
}
