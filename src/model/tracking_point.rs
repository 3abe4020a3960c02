use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bare WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointDto {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackingPointDto {
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
    pub device_timestamp_utc: DateTime<Utc>,
    pub created_at_time_utc: DateTime<Utc>,
    pub debug: bool,
}

/// A single GPS reading reported by a device whose id is known from the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointReadingDto {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub heading: Option<f64>,
    pub device_timestamp_utc: DateTime<Utc>,
    #[serde(default)]
    pub debug: bool,
}

/// One element of a batch upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTrackingPointDto {
    pub tracking_device_id: String,
    #[serde(flatten)]
    pub reading: PointReadingDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssignPointsDto {
    pub point_ids: Vec<i32>,
}
