use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::tracking_point::PointDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripLegDto {
    pub id: i32,
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    pub route: Vec<PointDto>,
    pub average_speed: f64,
    pub start_location_id: Option<String>,
    pub end_location_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripDto {
    pub id: i32,
    pub asset_id: String,
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    pub start_location_id: Option<String>,
    pub end_location_id: Option<String>,
    pub legs: Vec<TripLegDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTripLegDto {
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    #[serde(default)]
    pub route: Vec<PointDto>,
    #[serde(default)]
    pub average_speed: f64,
    #[serde(default)]
    pub start_location_id: Option<String>,
    #[serde(default)]
    pub end_location_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTripDto {
    pub asset_id: String,
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    #[serde(default)]
    pub start_location_id: Option<String>,
    #[serde(default)]
    pub end_location_id: Option<String>,
    #[serde(default)]
    pub legs: Vec<CreateTripLegDto>,
}
